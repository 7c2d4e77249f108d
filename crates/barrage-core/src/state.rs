//! Game state snapshot — the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Playfield, Position, SimTime, Velocity};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Player whose turn it is.
    pub turn: PlayerId,
    /// Completed turns this match.
    pub turn_count: u32,
    pub outcome: Option<MatchOutcome>,
    pub first_scorer: Option<PlayerId>,
    pub playfield: Playfield,
    /// One ground height per horizontal unit (larger = lower).
    pub terrain: Vec<f64>,
    pub players: Vec<PlayerView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    /// Whether the post-shot settle delay is counting down.
    pub settle_pending: bool,
    /// Events emitted during this tick.
    pub events: Vec<GameEvent>,
}

/// A tank as the HUD and renderer see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
    pub position: Position,
    /// Barrel angle in degrees.
    pub angle: i32,
    pub power: i32,
    pub health: i32,
    pub fuel: f64,
    pub weapon_index: usize,
    pub weapon_name: String,
    pub score: i64,
    /// Whether the tank is dropping into a crater.
    pub falling: bool,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
    pub weapon_id: String,
    pub weapon_name: String,
    pub color: String,
    pub bounces: u32,
    pub digging: bool,
    pub dig_depth: f64,
}

/// A cosmetic particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    pub life: f64,
    pub size: f64,
    pub color: String,
}
