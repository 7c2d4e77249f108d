//! Cleanup system: despawns particles whose life has run out.

use hecs::{Entity, World};

use barrage_core::components::ParticleLife;

/// Remove spent particles.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, life) in world.query_mut::<&ParticleLife>() {
        if life.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Remove every particle (used on restart).
pub fn clear(world: &mut World) {
    world.clear();
}
