//! BARRAGE headless host.
//!
//! Runs the simulation on its own thread, feeds it JSON commands and streams
//! JSON snapshots back out, one per line.

pub mod config;
pub mod game_loop;
pub mod input;
pub mod state;

pub use barrage_core as core;
