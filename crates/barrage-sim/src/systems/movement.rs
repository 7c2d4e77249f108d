//! Particle kinematics.
//!
//! Integrates cosmetic particles: life decay, position += velocity, gravity,
//! and ground bounce for volcano ash. Nothing here feeds back into gameplay.

use hecs::World;

use barrage_core::components::{ParticleLife, ParticleMotion};
use barrage_core::constants::*;
use barrage_core::types::{Position, Velocity};
use barrage_terrain::Terrain;

/// Run one tick of particle motion.
pub fn run(world: &mut World, terrain: &Terrain) {
    for (_entity, (pos, vel, life, motion)) in world.query_mut::<(
        &mut Position,
        &mut Velocity,
        &mut ParticleLife,
        &ParticleMotion,
    )>() {
        life.life -= life.decay;
        pos.x += vel.x;
        pos.y += vel.y;

        if motion.bounce {
            let ground = terrain.height_at(pos.x);
            if pos.y > ground {
                pos.y = ground;
                vel.y *= PARTICLE_BOUNCE_RESTITUTION;
                vel.x *= PARTICLE_BOUNCE_FRICTION;
            }
            vel.y += PARTICLE_BOUNCE_GRAVITY;
        } else if !motion.anti_gravity {
            vel.y += PARTICLE_GRAVITY;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(world: &mut World, pos: Position, vel: Velocity, motion: ParticleMotion) -> hecs::Entity {
        world.spawn((
            pos,
            vel,
            ParticleLife {
                life: 1.0,
                decay: 0.25,
            },
            motion,
        ))
    }

    #[test]
    fn test_particle_integrates_and_decays() {
        let mut world = World::new();
        let terrain = Terrain::flat(100, 500.0);
        let e = spawn(
            &mut world,
            Position::new(10.0, 10.0),
            Velocity::new(1.0, -2.0),
            ParticleMotion::default(),
        );
        run(&mut world, &terrain);

        let pos = *world.get::<&Position>(e).unwrap();
        let vel = *world.get::<&Velocity>(e).unwrap();
        let life = *world.get::<&ParticleLife>(e).unwrap();
        assert_eq!(pos, Position::new(11.0, 8.0));
        assert!((vel.y - (-2.0 + PARTICLE_GRAVITY)).abs() < 1e-12);
        assert!((life.life - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_anti_gravity_particle_drifts() {
        let mut world = World::new();
        let terrain = Terrain::flat(100, 500.0);
        let e = spawn(
            &mut world,
            Position::new(10.0, 10.0),
            Velocity::new(0.0, -1.0),
            ParticleMotion {
                anti_gravity: true,
                bounce: false,
            },
        );
        run(&mut world, &terrain);
        assert_eq!(world.get::<&Velocity>(e).unwrap().y, -1.0);
    }

    #[test]
    fn test_bouncing_particle_rebounds_off_ground() {
        let mut world = World::new();
        let terrain = Terrain::flat(100, 100.0);
        let e = spawn(
            &mut world,
            Position::new(50.0, 98.0),
            Velocity::new(2.0, 4.0),
            ParticleMotion {
                anti_gravity: false,
                bounce: true,
            },
        );
        run(&mut world, &terrain);

        let pos = *world.get::<&Position>(e).unwrap();
        let vel = *world.get::<&Velocity>(e).unwrap();
        assert_eq!(pos.y, 100.0);
        assert!((vel.y - (-2.0 + PARTICLE_BOUNCE_GRAVITY)).abs() < 1e-12);
        assert!((vel.x - 1.6).abs() < 1e-12);
    }
}
