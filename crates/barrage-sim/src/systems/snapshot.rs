//! Snapshot system: collects the match context into a GameStateSnapshot.
//!
//! This system is read-only — it never modifies the match.

use hecs::World;

use barrage_core::components::{ParticleLife, ParticleStyle};
use barrage_core::events::GameEvent;
use barrage_core::state::*;
use barrage_core::types::{Playfield, Position, SimTime};
use barrage_terrain::Terrain;

use crate::match_state::{MatchState, Player};
use crate::projectile::Projectile;

/// Build a complete GameStateSnapshot from the current match.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    time: &SimTime,
    playfield: &Playfield,
    terrain: &Terrain,
    state: &MatchState,
    projectiles: &[Projectile],
    particles: &World,
    settle_pending: bool,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase: state.phase,
        turn: state.turn,
        turn_count: state.turn_count,
        outcome: state.outcome,
        first_scorer: state.first_scorer,
        playfield: *playfield,
        terrain: terrain.heights().to_vec(),
        players: state.players.iter().map(build_player).collect(),
        projectiles: projectiles
            .iter()
            .filter(|p| p.active)
            .map(build_projectile)
            .collect(),
        particles: build_particles(particles),
        settle_pending,
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        id: player.id,
        name: player.id.name().to_string(),
        color: player.color.to_string(),
        position: player.position,
        angle: player.angle,
        power: player.power,
        health: player.health,
        fuel: player.fuel,
        weapon_index: player.weapon_index,
        weapon_name: player.weapon().name.to_string(),
        score: player.score,
        falling: player.falling,
    }
}

fn build_projectile(p: &Projectile) -> ProjectileView {
    ProjectileView {
        position: p.position,
        velocity: p.velocity,
        weapon_id: p.weapon.id.to_string(),
        weapon_name: p.weapon.name.to_string(),
        color: p.weapon.color.to_string(),
        bounces: p.bounces,
        digging: p.digging,
        dig_depth: p.dig_depth,
    }
}

/// Build ParticleView list from all live particle entities.
fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Position, &ParticleLife, &ParticleStyle)>()
        .iter()
        .map(|(_, (pos, life, style))| ParticleView {
            position: *pos,
            life: life.life,
            size: style.size,
            color: style.color.clone(),
        })
        .collect()
}
