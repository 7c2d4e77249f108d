//! Match context: the two tanks plus turn bookkeeping.

use barrage_core::constants::*;
use barrage_core::enums::{GamePhase, MatchOutcome, PlayerId};
use barrage_core::types::Position;
use barrage_core::weapons;

/// A player's tank and its per-match totals.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub color: &'static str,
    pub position: Position,
    /// Barrel angle in degrees, 0..=180.
    pub angle: i32,
    /// Firing power, 0..=100.
    pub power: i32,
    /// 0..=100. Zero means eliminated.
    pub health: i32,
    pub fuel: f64,
    pub weapon_index: usize,
    /// Never negative.
    pub score: i64,
    /// Dropping toward the terrain after its ground was carved away.
    pub falling: bool,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        let (color, angle) = match id {
            PlayerId::One => ("#ff4444", PLAYER_ONE_ANGLE),
            PlayerId::Two => ("#4444ff", PLAYER_TWO_ANGLE),
        };
        Self {
            id,
            color,
            position: Position::default(),
            angle,
            power: DEFAULT_POWER,
            health: MAX_HEALTH,
            fuel: MAX_FUEL,
            weapon_index: weapons::STANDARD,
            score: 0,
            falling: false,
        }
    }

    pub fn weapon(&self) -> &'static weapons::Weapon {
        weapons::get(self.weapon_index).unwrap_or(&weapons::catalog()[weapons::STANDARD])
    }

    /// Centre of the tank body, used for direct-hit tests.
    pub fn body_center_y(&self) -> f64 {
        self.position.y - TANK_HEIGHT / 2.0
    }
}

/// Everything that decides who is winning and whose move it is.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub players: [Player; 2],
    /// Owner of the current turn. The active player is always derived from this.
    pub turn: PlayerId,
    pub phase: GamePhase,
    /// Completed turns this match.
    pub turn_count: u32,
    /// Set once, the first time anyone earns positive points.
    pub first_scorer: Option<PlayerId>,
    pub outcome: Option<MatchOutcome>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            players: [Player::new(PlayerId::One), Player::new(PlayerId::Two)],
            turn: PlayerId::One,
            phase: GamePhase::Aiming,
            turn_count: 0,
            first_scorer: None,
            outcome: None,
        }
    }
}

impl MatchState {
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn active(&self) -> &Player {
        self.player(self.turn)
    }

    pub fn active_mut(&mut self) -> &mut Player {
        let turn = self.turn;
        self.player_mut(turn)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
