//! Game loop thread — runs the simulation engine at 60Hz and emits snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are written to the output as
//! JSON lines and stored in shared state for synchronous polling.

use std::io::{self, Write};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use barrage_core::constants::TICK_RATE;
use barrage_core::state::GameStateSnapshot;
use barrage_sim::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// A running game loop.
pub struct GameLoop {
    /// Channel sender for the input layer to use.
    pub commands: mpsc::Sender<GameLoopCommand>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: SharedSnapshot,
    handle: JoinHandle<io::Result<u64>>,
}

impl GameLoop {
    /// Wait for the loop to stop. Returns the number of ticks run.
    pub fn join(self) -> io::Result<u64> {
        self.handle
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "game loop thread panicked"))?
    }
}

/// Spawns the game loop in a new thread.
///
/// The loop stops after `max_ticks` ticks, on `Shutdown`, when every sender
/// is dropped, or when writing a snapshot fails.
pub fn spawn_game_loop<W>(config: SimConfig, max_ticks: Option<u64>, out: W) -> GameLoop
where
    W: Write + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let handle = std::thread::Builder::new()
        .name("barrage-game-loop".into())
        .spawn(move || run_game_loop(config, max_ticks, cmd_rx, out, &shared))
        .expect("Failed to spawn game loop thread");

    GameLoop {
        commands: cmd_tx,
        latest_snapshot,
        handle,
    }
}

/// Queue every pending command. Returns false once the loop should stop.
fn drain_commands(engine: &mut SimulationEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                engine.queue_command(cmd);
            }
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// The game loop. Runs until a stop condition; returns the ticks completed.
fn run_game_loop<W: Write>(
    config: SimConfig,
    max_ticks: Option<u64>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    mut out: W,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> io::Result<u64> {
    log::info!(
        "game loop started (seed {}, {}x{})",
        config.seed,
        config.width,
        config.height
    );
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    let mut ticks = 0u64;

    loop {
        if max_ticks.is_some_and(|max| ticks >= max) {
            break;
        }

        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            break;
        }

        // 2. Advance one tick
        let snapshot = engine.tick();
        ticks += 1;

        // 3. Emit snapshot as one JSON line
        serde_json::to_writer(&mut out, &snapshot)?;
        out.write_all(b"\n")?;
        out.flush()?;

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }

    log::info!("game loop stopped after {ticks} ticks");
    Ok(ticks)
}
