//! Player commands sent from the input collaborator to the simulation.
//!
//! Commands are queued and applied at the next tick boundary. A command that
//! does not fit the current phase is dropped without error; numeric values
//! are clamped into their valid range.

use serde::{Deserialize, Serialize};

use crate::enums::HeldControl;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Aim ---
    /// Set the active tank's barrel angle in degrees (0 right, 90 up, 180 left).
    SetAngle { value: i32 },
    /// Set the active tank's firing power (0-100).
    SetPower { value: i32 },
    /// Select a weapon by catalog index. Unknown indices are ignored.
    SelectWeapon { index: usize },
    /// Nudge the angle by `delta` degrees.
    AdjustAngle { delta: i32 },
    /// Nudge the power by `delta`.
    AdjustPower { delta: i32 },

    // --- Movement ---
    /// Drive one step left (negative) or right (positive).
    Move { direction: i32 },

    // --- Held controls ---
    /// Begin repeating a control every few ticks until released.
    StartHold { control: HeldControl },
    /// Release whatever control is held.
    StopHold,

    // --- Turn ---
    /// Fire the active tank's selected weapon.
    Fire,

    // --- Match ---
    /// Regenerate terrain and reset every per-match value.
    Restart,
    /// Viewport changed size. Terrain is only generated if none exists.
    Resize { width: f64, height: f64 },
}
