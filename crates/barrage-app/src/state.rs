//! State shared between the host threads and the game loop thread.

use std::sync::{Arc, Mutex};

use barrage_core::commands::PlayerCommand;
use barrage_core::state::GameStateSnapshot;

/// Commands sent from the input reader to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot for synchronous polling. `None` until the first tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;
