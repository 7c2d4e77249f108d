//! Tank settling: tanks whose ground was blown away drop back onto the terrain.

use barrage_core::constants::TANK_FALL_SPEED;
use barrage_terrain::Terrain;

use crate::match_state::MatchState;

/// Drop each unsupported tank by the fixed fall speed, or rest it on the
/// surface. Returns true while any tank is still falling.
pub fn run(state: &mut MatchState, terrain: &Terrain) -> bool {
    let mut any_falling = false;
    for player in state.players.iter_mut() {
        let ground = terrain.height_at(player.position.x);
        if player.position.y < ground {
            player.position.y += TANK_FALL_SPEED;
            player.falling = true;
            any_falling = true;
        } else {
            player.position.y = ground;
            player.falling = false;
        }
    }
    any_falling
}
