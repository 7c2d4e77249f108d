//! Command input: one JSON `PlayerCommand` per line.

use std::io::{self, BufRead};
use std::sync::mpsc;

use barrage_core::commands::PlayerCommand;

use crate::state::GameLoopCommand;

/// Forward every well-formed command line to the game loop.
///
/// Blank lines are skipped; malformed lines are logged and skipped. Returns
/// the number of commands forwarded once input ends or the loop hangs up.
pub fn forward_commands<R: BufRead>(
    input: R,
    cmd_tx: &mpsc::Sender<GameLoopCommand>,
) -> io::Result<usize> {
    let mut forwarded = 0;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<PlayerCommand>(line) {
            Ok(command) => {
                if cmd_tx.send(GameLoopCommand::PlayerCommand(command)).is_err() {
                    log::debug!("game loop gone, dropping remaining input");
                    break;
                }
                forwarded += 1;
            }
            Err(e) => log::warn!("ignoring malformed command {line:?}: {e}"),
        }
    }
    Ok(forwarded)
}
