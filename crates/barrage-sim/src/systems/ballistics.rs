//! Projectile simulator — launches shells and advances them through flight,
//! digging, bouncing and impact.

use glam::DVec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use barrage_core::constants::*;
use barrage_core::enums::{MissReason, PlayerId};
use barrage_core::events::GameEvent;
use barrage_core::types::{Playfield, Position, Velocity};
use barrage_core::weapons::GroundContact;
use barrage_terrain::Terrain;

use crate::match_state::{MatchState, Player};
use crate::projectile::Projectile;
use crate::systems::explosion;
use crate::turn::TurnController;

/// Build the shell `player` fires with their current angle, power and weapon.
///
/// The shell leaves the turret tip, `TURRET_LENGTH` along the barrel from the
/// top of the hull.
pub fn launch(player: &Player) -> Projectile {
    let angle = player.angle as f64;
    let dir = DVec2::from_angle(-angle.to_radians());
    let tip = DVec2::new(player.position.x, player.position.y - TANK_HEIGHT) + dir * TURRET_LENGTH;
    Projectile::new(
        Position::from(tip),
        Velocity::from_angle(angle, player.power as f64 * POWER_SCALE),
        *player.weapon(),
    )
}

/// Which playfield edge a position has crossed, if any.
pub fn out_of_bounds(pos: Position, playfield: &Playfield) -> Option<MissReason> {
    if pos.x < 0.0 {
        Some(MissReason::OffLeft)
    } else if pos.x > playfield.width {
        Some(MissReason::OffRight)
    } else if pos.y > playfield.height {
        Some(MissReason::BelowFloor)
    } else {
        None
    }
}

/// Advance every live projectile by one tick, in collection order.
///
/// Fragments spawned by explosions are appended after the pass and first move
/// on the next tick. Spent projectiles are purged before returning.
#[allow(clippy::too_many_arguments)]
pub fn run(
    projectiles: &mut Vec<Projectile>,
    terrain: &mut Terrain,
    playfield: &Playfield,
    state: &mut MatchState,
    turn: &mut TurnController,
    particle_world: &mut World,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    let mut spawned = Vec::new();

    for p in projectiles.iter_mut() {
        if !p.active {
            continue;
        }

        // Integration
        if p.digging {
            p.position.y += DIG_RATE;
            p.dig_depth += DIG_RATE;
            if p.dig_depth > DIG_LIMIT {
                p.active = false;
                explosion::resolve(
                    p.position,
                    Some(&p.weapon),
                    terrain,
                    state,
                    &mut spawned,
                    particle_world,
                    rng,
                    events,
                );
                continue;
            }
        } else {
            p.velocity.y += GRAVITY * p.weapon.kind.gravity_multiplier();
            p.position.x += p.velocity.x;
            p.position.y += p.velocity.y;
        }

        // Bounds
        if let Some(reason) = out_of_bounds(p.position, playfield) {
            p.active = false;
            log::debug!("{} left the playfield ({reason:?})", p.weapon.name);
            events.push(GameEvent::Miss { reason });
            turn.advance_turn(state, events);
            continue;
        }

        if p.digging {
            continue;
        }

        // Terrain
        let floor = terrain.height_at(p.position.x);
        if p.position.y >= floor {
            match p.weapon.kind.ground_contact(p.digging, p.bounces) {
                GroundContact::StartDigging => {
                    p.digging = true;
                    p.velocity = Velocity::default();
                    events.push(GameEvent::DigStarted {
                        x: p.position.x,
                        y: p.position.y,
                    });
                }
                GroundContact::Bounce => {
                    p.velocity.y *= BOUNCE_RESTITUTION;
                    p.velocity.x *= BOUNCE_FRICTION;
                    p.position.y = floor - BOUNCE_LIFT;
                    p.bounces -= 1;
                    events.push(GameEvent::Bounce {
                        x: p.position.x,
                        y: p.position.y,
                    });
                }
                GroundContact::Explode => {
                    p.active = false;
                    explosion::resolve(
                        p.position,
                        Some(&p.weapon),
                        terrain,
                        state,
                        &mut spawned,
                        particle_world,
                        rng,
                        events,
                    );
                    continue;
                }
            }
        }

        // Direct hit, also right after a bounce
        if !p.digging && hits_tank(p.position, state).is_some() {
            p.active = false;
            explosion::resolve(
                p.position,
                Some(&p.weapon),
                terrain,
                state,
                &mut spawned,
                particle_world,
                rng,
                events,
            );
        }
    }

    projectiles.extend(spawned);
    projectiles.retain(|p| p.active);
}

/// First tank (in player order) whose hull contains `pos`.
fn hits_tank(pos: Position, state: &MatchState) -> Option<PlayerId> {
    PlayerId::ALL.into_iter().find(|&id| {
        let tank = state.player(id);
        (pos.x - tank.position.x).abs() < TANK_WIDTH / 2.0
            && (pos.y - tank.body_center_y()).abs() < TANK_HEIGHT
    })
}
