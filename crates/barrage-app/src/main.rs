use std::io;
use std::sync::Arc;
use std::thread;

use barrage_app::config::AppConfig;
use barrage_app::game_loop;
use barrage_app::input;
use barrage_app::state::GameLoopCommand;
use clap::Parser;

fn main() -> io::Result<()> {
    env_logger::init();

    let config = AppConfig::parse();

    let game = game_loop::spawn_game_loop(config.sim_config(), config.ticks, io::stdout());

    let cmd_tx = game.commands.clone();
    let run_until_eof = config.ticks.is_none();
    thread::Builder::new()
        .name("barrage-input".into())
        .spawn(move || {
            match input::forward_commands(io::stdin().lock(), &cmd_tx) {
                Ok(n) => log::debug!("input closed after {n} commands"),
                Err(e) => log::warn!("reading commands failed: {e}"),
            }
            // Without a tick limit, closing input ends the session.
            if run_until_eof {
                let _ = cmd_tx.send(GameLoopCommand::Shutdown);
            }
        })?;

    let latest = Arc::clone(&game.latest_snapshot);
    let ticks = game.join()?;
    log::info!("session ended after {ticks} ticks");
    if let Ok(guard) = latest.lock() {
        if let Some(last) = guard.as_ref() {
            log::info!(
                "final phase {:?}, turn {}, outcome {:?}",
                last.phase,
                last.turn_count,
                last.outcome
            );
        }
    }
    Ok(())
}
