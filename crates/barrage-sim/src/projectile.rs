//! Projectile data model.
//!
//! Projectiles live in the engine's ordered `Vec`, not in the particle ECS
//! world: flight order decides which explosion resolves first.

use barrage_core::types::{Position, Velocity};
use barrage_core::weapons::Weapon;

/// A shell in flight (or burrowing).
#[derive(Debug, Clone)]
pub struct Projectile {
    pub position: Position,
    pub velocity: Velocity,
    /// Carried by value so cluster fragments can hold a derived weapon.
    pub weapon: Weapon,
    /// Remaining bounces before ground contact explodes.
    pub bounces: u32,
    pub digging: bool,
    /// Distance travelled underground.
    pub dig_depth: f64,
    /// Cleared when the projectile explodes or leaves play; purged at end of tick.
    pub active: bool,
}

impl Projectile {
    pub fn new(position: Position, velocity: Velocity, weapon: Weapon) -> Self {
        Self {
            position,
            velocity,
            bounces: weapon.kind.initial_bounces(),
            weapon,
            digging: false,
            dig_depth: 0.0,
            active: true,
        }
    }
}
