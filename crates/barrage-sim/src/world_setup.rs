//! Match setup: terrain generation and tank placement.

use rand_chacha::ChaCha8Rng;

use barrage_core::constants::*;
use barrage_core::enums::{GamePhase, PlayerId};
use barrage_core::types::Playfield;
use barrage_terrain::Terrain;

use crate::match_state::{MatchState, Player};

/// Generate fresh terrain sized to the playfield.
pub fn generate_terrain(playfield: &Playfield, rng: &mut ChaCha8Rng) -> Terrain {
    Terrain::generate(playfield.width.max(1.0) as usize, playfield.height, rng)
}

/// Reset every per-match value and put both tanks back at their spawn points.
///
/// Power and weapon selection are player preferences and carry over.
pub fn reset_match(state: &mut MatchState, terrain: &Terrain, playfield: &Playfield) {
    state.turn = PlayerId::One;
    state.phase = GamePhase::Aiming;
    state.turn_count = 0;
    state.first_scorer = None;
    state.outcome = None;

    for player in state.players.iter_mut() {
        let (x, angle) = match player.id {
            PlayerId::One => (TANK_SPAWN_INSET, PLAYER_ONE_ANGLE),
            PlayerId::Two => (playfield.width - TANK_SPAWN_INSET, PLAYER_TWO_ANGLE),
        };
        player.position.x = x;
        player.angle = angle;
        player.health = MAX_HEALTH;
        player.fuel = MAX_FUEL;
        player.score = 0;
        snap_to_ground(player, terrain);
    }
}

/// Sit the tank directly on the terrain under it.
pub fn snap_to_ground(player: &mut Player, terrain: &Terrain) {
    player.position.y = terrain.height_at(player.position.x);
    player.falling = false;
}
