//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level turn state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active player may aim, pick a weapon, move, and fire.
    #[default]
    Aiming,
    /// Reserved. Movement is accepted only while aiming, so this is never entered.
    Moving,
    /// Shot in flight; input is locked until everything settles.
    Firing,
    /// Match decided. Only `Restart` is accepted.
    GameOver,
}

/// One of the two fixed match participants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    #[default]
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Index into the two-element player array.
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Display name used in events and logs.
    pub fn name(self) -> &'static str {
        match self {
            PlayerId::One => "Player 1",
            PlayerId::Two => "Player 2",
        }
    }
}

/// How a finished match was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Opponent's health reached zero.
    Elimination { winner: PlayerId },
    /// Turn limit reached; higher score (or first scorer on a tie) wins.
    Score { winner: PlayerId },
    /// Turn limit reached with level scores and nobody ever scoring.
    Draw,
}

impl MatchOutcome {
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            MatchOutcome::Elimination { winner } | MatchOutcome::Score { winner } => Some(*winner),
            MatchOutcome::Draw => None,
        }
    }
}

/// Controls that repeat while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeldControl {
    AngleUp,
    AngleDown,
    PowerUp,
    PowerDown,
    MoveLeft,
    MoveRight,
}

/// Reason a projectile left play without exploding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissReason {
    OffLeft,
    OffRight,
    BelowFloor,
}
