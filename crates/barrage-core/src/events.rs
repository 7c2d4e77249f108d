//! Events emitted by the simulation for the rendering and audio collaborators.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Something notable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A tank fired.
    ShotFired {
        player: PlayerId,
        weapon_id: String,
        x: f64,
        y: f64,
    },
    /// A projectile (or dig charge) detonated.
    Explosion {
        x: f64,
        y: f64,
        radius: f64,
        weapon_id: String,
    },
    /// A bouncing projectile skipped off the ground.
    Bounce { x: f64, y: f64 },
    /// A digging projectile started burrowing.
    DigStarted { x: f64, y: f64 },
    /// A projectile left the playfield without exploding.
    Miss { reason: MissReason },
    /// A tank's health changed. Negative `effect` means healing.
    PlayerHit {
        player: PlayerId,
        effect: i32,
        health: i32,
    },
    /// The acting player's score changed.
    ScoreCredited {
        player: PlayerId,
        points: i64,
        total: i64,
    },
    /// A new turn began.
    TurnStarted { player: PlayerId, turn_count: u32 },
    /// The match ended.
    GameOver { outcome: MatchOutcome },
}
