//! ECS components for cosmetic particle entities.
//!
//! Components are plain data structs with no methods.
//! Particle entities also carry `types::Position` and `types::Velocity`.

use serde::{Deserialize, Serialize};

/// Remaining visibility of a particle. Despawned once `life <= 0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleLife {
    pub life: f64,
    /// Life lost per tick.
    pub decay: f64,
}

/// How a particle reacts to the world.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParticleMotion {
    /// Ignores gravity (healing sparkles, celebration confetti).
    pub anti_gravity: bool,
    /// Bounces off the terrain surface under heavier gravity (volcano ash).
    pub bounce: bool,
}

/// Visual appearance, passed straight through to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleStyle {
    pub color: String,
    pub size: f64,
}
