//! Systems that advance the match each tick.
//!
//! Systems are plain functions over the engine's state. They do not own
//! state; the engine passes in exactly what each one touches.

pub mod ballistics;
pub mod cleanup;
pub mod explosion;
pub mod movement;
pub mod particles;
pub mod snapshot;
pub mod tank_gravity;
