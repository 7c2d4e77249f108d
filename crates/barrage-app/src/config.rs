//! Command-line configuration.

use barrage_core::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use barrage_sim::SimConfig;
use clap::Parser;

/// Options accepted by the `barrage` binary.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "barrage", version, about = "Turn-based artillery duel over stdin/stdout")]
pub struct AppConfig {
    /// Seed for terrain and wind
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
    /// World width in units
    #[arg(long, default_value_t = DEFAULT_WIDTH as u32,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,
    /// World height in units
    #[arg(long, default_value_t = DEFAULT_HEIGHT as u32,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
    /// Stop after this many ticks (runs until input closes otherwise)
    #[arg(long)]
    pub ticks: Option<u64>,
}

impl AppConfig {
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            width: f64::from(self.width),
            height: f64::from(self.height),
        }
    }
}
