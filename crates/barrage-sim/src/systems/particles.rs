//! Cosmetic particle spawning for explosions, eruptions and the victory show.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use barrage_core::components::{ParticleLife, ParticleMotion, ParticleStyle};
use barrage_core::constants::*;
use barrage_core::types::{Playfield, Position, Velocity};
use barrage_core::weapons::Weapon;

/// Debris burst for an explosion of `weapon` at `at`.
pub fn spawn_burst(world: &mut World, rng: &mut ChaCha8Rng, at: Position, weapon: &Weapon) {
    let burst = weapon.particle_burst();

    if burst.flash {
        world.spawn((
            at,
            Velocity::default(),
            ParticleLife {
                life: 0.2,
                decay: 0.05,
            },
            ParticleMotion::default(),
            ParticleStyle {
                color: "rgba(255,255,255,0.8)".to_string(),
                size: 500.0,
            },
        ));
    }

    for _ in 0..burst.count {
        let vel = Velocity::new(
            (rng.gen::<f64>() - 0.5) * burst.speed,
            (rng.gen::<f64>() - 0.5) * burst.speed,
        );
        let decay = burst.decay + rng.gen::<f64>() * 0.01;
        let size = rng.gen::<f64>() * 4.0 + 2.0;
        world.spawn((
            at,
            vel,
            ParticleLife { life: 1.0, decay },
            ParticleMotion {
                anti_gravity: burst.anti_gravity,
                bounce: false,
            },
            ParticleStyle {
                color: weapon.color.to_string(),
                size,
            },
        ));
    }
}

/// Fountain of fire and ash that bounces along the ground.
pub fn spawn_eruption(world: &mut World, rng: &mut ChaCha8Rng, at: Position) {
    for i in 0..VOLCANO_PARTICLES {
        let vel = Velocity::new(
            (rng.gen::<f64>() - 0.5) * 20.0,
            -(rng.gen::<f64>() * 25.0 + 10.0),
        );
        let size = rng.gen::<f64>() * 5.0 + 2.0;
        let color = if i % 2 == 0 { "#ff4400" } else { "#333" };
        world.spawn((
            at,
            vel,
            ParticleLife {
                life: 3.0,
                decay: 0.01,
            },
            ParticleMotion {
                anti_gravity: false,
                bounce: true,
            },
            ParticleStyle {
                color: color.to_string(),
                size,
            },
        ));
    }
}

/// Confetti scattered across the playfield while a winner is shown.
pub fn spawn_celebration(world: &mut World, rng: &mut ChaCha8Rng, playfield: &Playfield) {
    for _ in 0..CELEBRATION_PARTICLES {
        let at = Position::new(
            rng.gen::<f64>() * playfield.width,
            rng.gen::<f64>() * playfield.height,
        );
        let vel = Velocity::new(
            (rng.gen::<f64>() - 0.5) * 10.0,
            (rng.gen::<f64>() - 0.5) * 10.0,
        );
        let life = 2.0 + rng.gen::<f64>();
        let hue = rng.gen::<f64>() * 360.0;
        let size = rng.gen::<f64>() * 5.0 + 2.0;
        world.spawn((
            at,
            vel,
            ParticleLife { life, decay: 0.01 },
            ParticleMotion {
                anti_gravity: true,
                bounce: false,
            },
            ParticleStyle {
                color: format!("hsl({hue:.0}, 100%, 50%)"),
                size,
            },
        ));
    }
}
