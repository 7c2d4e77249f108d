//! Explosion resolver — carves terrain, applies area damage and scoring,
//! and triggers secondary effects.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use barrage_core::constants::*;
use barrage_core::enums::PlayerId;
use barrage_core::events::GameEvent;
use barrage_core::types::{Position, Velocity};
use barrage_core::weapons::{SecondaryEffect, Weapon};
use barrage_terrain::Terrain;

use crate::match_state::MatchState;
use crate::projectile::Projectile;
use crate::systems::particles;
use crate::turn;

/// Health change a tank at `distance` from the impact takes from `weapon`.
///
/// Zero outside `radius + HITBOX_MARGIN`. Inside, damage falls off linearly
/// with distance unless the weapon is a precision round. Negative values heal.
/// The scaled damage is floored, so a heal grazing the edge still restores 1.
pub fn blast_effect(weapon: &Weapon, distance: f64) -> i32 {
    let reach = weapon.radius + HITBOX_MARGIN;
    if distance >= reach {
        return 0;
    }
    let factor = if weapon.has_falloff() {
        (1.0 - distance / reach).max(0.0)
    } else {
        1.0
    };
    (factor * weapon.damage as f64).floor() as i32
}

/// Resolve one explosion at `at`. `weapon` is `None` for generic impacts.
///
/// Fragments from cluster weapons are pushed onto `spawned`; the caller
/// appends them to the live projectile list.
#[allow(clippy::too_many_arguments)]
pub fn resolve(
    at: Position,
    weapon: Option<&Weapon>,
    terrain: &mut Terrain,
    state: &mut MatchState,
    spawned: &mut Vec<Projectile>,
    particle_world: &mut World,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    let weapon = weapon.copied().unwrap_or_else(Weapon::generic_impact);
    log::debug!(
        "{} explodes at ({:.1}, {:.1})",
        weapon.name,
        at.x,
        at.y
    );
    events.push(GameEvent::Explosion {
        x: at.x,
        y: at.y,
        radius: weapon.radius,
        weapon_id: weapon.id.to_string(),
    });

    // 1. Terrain
    if let Some(shape) = weapon.carve_factor() {
        terrain.deform(at.x, at.y, weapon.radius, shape);
    }

    // 2–3. Damage and scoring
    if weapon.applies_damage() {
        apply_damage(at, &weapon, state, events);
    }

    // 4. Debris and secondary effects
    particles::spawn_burst(particle_world, rng, at, &weapon);
    match weapon.secondary_effect() {
        SecondaryEffect::Cluster => spawn_fragments(at, &weapon, rng, spawned),
        SecondaryEffect::Volcano => particles::spawn_eruption(particle_world, rng, at),
        SecondaryEffect::None => {}
    }

    // 5. Win check
    turn::check_win(state, events);
}

fn apply_damage(at: Position, weapon: &Weapon, state: &mut MatchState, events: &mut Vec<GameEvent>) {
    let acting = state.turn;
    for id in PlayerId::ALL {
        let player = state.player_mut(id);
        let effect = blast_effect(weapon, player.position.distance_to(&at));
        if effect == 0 {
            continue;
        }
        player.health = (player.health - effect).clamp(0, MAX_HEALTH);
        events.push(GameEvent::PlayerHit {
            player: id,
            effect,
            health: player.health,
        });

        // Self-inflicted effects never score.
        if id != acting {
            credit(state, acting, effect as i64, events);
        }
    }
}

/// Credit `points` (signed) to `player`, flooring the total at zero.
fn credit(state: &mut MatchState, player: PlayerId, points: i64, events: &mut Vec<GameEvent>) {
    let scorer = state.player_mut(player);
    scorer.score = (scorer.score + points).max(0);
    let total = scorer.score;
    if points > 0 && state.first_scorer.is_none() {
        state.first_scorer = Some(player);
    }
    events.push(GameEvent::ScoreCredited {
        player,
        points,
        total,
    });
}

fn spawn_fragments(at: Position, weapon: &Weapon, rng: &mut ChaCha8Rng, spawned: &mut Vec<Projectile>) {
    let fragment = weapon.fragment();
    let origin = Position::new(at.x, at.y - CLUSTER_SPAWN_LIFT);
    for _ in 0..CLUSTER_FRAGMENTS {
        let vel = Velocity::new(
            (rng.gen::<f64>() - 0.5) * CLUSTER_SPREAD,
            -(rng.gen::<f64>() * CLUSTER_POP_RANGE + CLUSTER_POP_MIN),
        );
        spawned.push(Projectile::new(origin, vel, fragment));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barrage_core::enums::{GamePhase, MatchOutcome};
    use barrage_core::weapons::{self, WeaponKind};
    use rand::SeedableRng;

    struct Fixture {
        terrain: Terrain,
        state: MatchState,
        spawned: Vec<Projectile>,
        world: World,
        rng: ChaCha8Rng,
        events: Vec<GameEvent>,
    }

    impl Fixture {
        fn new() -> Self {
            let mut state = MatchState::default();
            state.phase = GamePhase::Firing;
            state.players[0].position = Position::new(100.0, 300.0);
            state.players[1].position = Position::new(700.0, 300.0);
            Self {
                terrain: Terrain::flat(800, 300.0),
                state,
                spawned: Vec::new(),
                world: World::new(),
                rng: ChaCha8Rng::seed_from_u64(9),
                events: Vec::new(),
            }
        }

        fn boom(&mut self, at: Position, weapon_index: usize) {
            resolve(
                at,
                weapons::get(weapon_index),
                &mut self.terrain,
                &mut self.state,
                &mut self.spawned,
                &mut self.world,
                &mut self.rng,
                &mut self.events,
            );
        }
    }

    #[test]
    fn test_falloff_edges() {
        let standard = weapons::get(0).unwrap();
        let reach = standard.radius + HITBOX_MARGIN;
        assert_eq!(blast_effect(standard, reach), 0);
        assert_eq!(blast_effect(standard, 0.0), 30);
        // Half way: 0.5 * 30.
        assert_eq!(blast_effect(standard, reach / 2.0), 15);
        assert_eq!(blast_effect(standard, reach + 100.0), 0);
    }

    #[test]
    fn test_sniper_has_no_falloff() {
        let sniper = weapons::get(2).unwrap();
        for d in [0.0, 5.0, 20.0, 39.9] {
            assert_eq!(blast_effect(sniper, d), 50);
        }
        assert_eq!(blast_effect(sniper, 40.0), 0);
    }

    #[test]
    fn test_heal_effect_is_negative() {
        let heal = weapons::get(5).unwrap();
        assert_eq!(blast_effect(heal, 0.0), -30);
        // Floored: 0.75 * -30 = -22.5 → -23.
        assert_eq!(blast_effect(heal, 15.0), -23);
        // A graze at the edge of reach still heals a point; damage rounds down to nothing.
        assert_eq!(blast_effect(heal, 59.9), -1);
        assert_eq!(blast_effect(weapons::get(0).unwrap(), 59.9), 0);
    }

    #[test]
    fn test_direct_hit_damages_and_scores() {
        let mut fx = Fixture::new();
        fx.boom(Position::new(700.0, 300.0), 0);

        assert_eq!(fx.state.players[1].health, 70);
        assert_eq!(fx.state.players[0].score, 30);
        assert_eq!(fx.state.first_scorer, Some(PlayerId::One));
        // Crater carved under the impact.
        assert!((fx.terrain.height_at(700.0) - 340.0).abs() < 1e-9);
    }

    #[test]
    fn test_self_hit_never_scores() {
        let mut fx = Fixture::new();
        fx.boom(Position::new(100.0, 300.0), 0);

        assert_eq!(fx.state.players[0].health, 70);
        assert_eq!(fx.state.players[0].score, 0);
        assert_eq!(fx.state.first_scorer, None);
    }

    #[test]
    fn test_first_scorer_is_sticky() {
        let mut fx = Fixture::new();
        fx.state.turn = PlayerId::Two;
        fx.boom(Position::new(100.0, 300.0), 0);
        assert_eq!(fx.state.first_scorer, Some(PlayerId::Two));

        fx.state.turn = PlayerId::One;
        fx.boom(Position::new(700.0, 300.0), 0);
        assert_eq!(fx.state.players[0].score, 30);
        assert_eq!(fx.state.first_scorer, Some(PlayerId::Two));
    }

    #[test]
    fn test_health_clamped_to_range() {
        let mut fx = Fixture::new();
        // Heal at full health stays at 100.
        fx.boom(Position::new(700.0, 300.0), 5);
        assert_eq!(fx.state.players[1].health, MAX_HEALTH);

        // Nuke on a weak tank bottoms out at 0.
        fx.state.players[1].health = 10;
        fx.boom(Position::new(700.0, 300.0), 4);
        assert_eq!(fx.state.players[1].health, 0);
    }

    #[test]
    fn test_heal_restores_and_leaves_terrain() {
        let mut fx = Fixture::new();
        fx.state.players[0].health = 50;
        fx.boom(Position::new(100.0, 300.0), 5);
        assert_eq!(fx.state.players[0].health, 80);
        assert_eq!(fx.terrain.height_at(100.0), 300.0);
    }

    #[test]
    fn test_healing_opponent_costs_points_but_not_below_zero() {
        let mut fx = Fixture::new();
        fx.state.players[1].health = 50;
        fx.state.players[0].score = 10;
        fx.boom(Position::new(700.0, 300.0), 5);
        assert_eq!(fx.state.players[1].health, 80);
        assert_eq!(fx.state.players[0].score, 0);
        assert_eq!(fx.state.first_scorer, None);
    }

    #[test]
    fn test_dirt_mover_digs_deep_without_damage() {
        let mut fx = Fixture::new();
        fx.boom(Position::new(700.0, 300.0), 3);
        assert_eq!(fx.state.players[1].health, MAX_HEALTH);
        assert_eq!(fx.state.players[0].score, 0);
        // radius 120 × 1.5.
        assert!((fx.terrain.height_at(700.0) - 480.0).abs() < 1e-9);
    }

    #[test]
    fn test_cluster_spawns_five_fragments() {
        let mut fx = Fixture::new();
        fx.boom(Position::new(400.0, 300.0), 6);

        assert_eq!(fx.spawned.len(), 5);
        for frag in &fx.spawned {
            assert!(frag.active);
            assert_eq!(frag.weapon.kind, WeaponKind::Standard);
            assert_eq!(frag.weapon.secondary_effect(), SecondaryEffect::None);
            assert_eq!(frag.position, Position::new(400.0, 290.0));
            assert!(frag.velocity.y <= -5.0 && frag.velocity.y > -15.0);
            assert!(frag.velocity.x.abs() <= 7.5);
        }
    }

    #[test]
    fn test_volcano_spawns_no_projectiles() {
        let mut fx = Fixture::new();
        fx.boom(Position::new(400.0, 300.0), 9);
        assert!(fx.spawned.is_empty());
        // Burst of 20 plus the eruption.
        assert_eq!(fx.world.len() as usize, 20 + VOLCANO_PARTICLES);
    }

    #[test]
    fn test_generic_impact_uses_default_blast() {
        let mut fx = Fixture::new();
        resolve(
            Position::new(700.0, 300.0),
            None,
            &mut fx.terrain,
            &mut fx.state,
            &mut fx.spawned,
            &mut fx.world,
            &mut fx.rng,
            &mut fx.events,
        );
        assert_eq!(fx.state.players[1].health, 80);
        assert!((fx.terrain.height_at(700.0) - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_elimination_ends_match() {
        let mut fx = Fixture::new();
        fx.state.players[1].health = 40;
        fx.boom(Position::new(700.0, 300.0), 0);
        assert_eq!(fx.state.players[1].health, 10);
        assert!(fx.state.outcome.is_none());

        fx.boom(Position::new(700.0, 300.0), 0);
        assert_eq!(fx.state.players[1].health, 0);
        assert_eq!(fx.state.phase, GamePhase::GameOver);
        assert_eq!(
            fx.state.outcome,
            Some(MatchOutcome::Elimination {
                winner: PlayerId::One
            })
        );
    }
}
