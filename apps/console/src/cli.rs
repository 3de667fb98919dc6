//! # Command-Line Flags
//!
//! Flags override the matching `STOCKROOM_*` environment values.

use clap::Parser;

use crate::config::ConsoleConfig;

#[derive(Debug, Parser)]
#[command(name = "stockroom")]
#[command(about = "Interactive in-memory inventory console")]
#[command(version)]
pub struct Cli {
    /// Never clear the terminal
    #[arg(long)]
    pub no_clear: bool,

    /// Do not wait for Enter after each command
    #[arg(long)]
    pub no_pause: bool,

    /// Transaction history capacity
    #[arg(long)]
    pub max_transactions: Option<usize>,

    /// Name shown in the menu banner
    #[arg(long)]
    pub store_name: Option<String>,
}

impl Cli {
    /// Layers the flags over an already loaded configuration.
    pub fn apply(self, mut config: ConsoleConfig) -> ConsoleConfig {
        if self.no_clear {
            config.clear_screen = false;
        }
        if self.no_pause {
            config.pause = false;
        }
        if let Some(max) = self.max_transactions {
            config.store = config.store.max_transactions(max);
        }
        if let Some(name) = self.store_name {
            config.store_name = name;
        }
        config
    }
}
