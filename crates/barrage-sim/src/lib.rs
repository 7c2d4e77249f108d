//! Simulation engine for BARRAGE.
//!
//! Owns the match context (terrain, tanks, projectiles, particle world),
//! runs systems at a fixed tick rate, and produces GameStateSnapshots for
//! the renderer.

pub mod controls;
pub mod engine;
pub mod match_state;
pub mod projectile;
pub mod systems;
pub mod turn;
pub mod world_setup;

pub use barrage_core as core;
pub use engine::{SimConfig, SimulationEngine};
