//! # Stockroom Console Entry Point
//!
//! ## Startup Sequence
//! ```text
//! 1. Parse flags
//! 2. Initialize logging (stderr)
//! 3. Load configuration (environment, then flags)
//! 4. Seed the in-memory inventory
//! 5. Run the menu loop on stdin/stdout
//! ```
//! The process exits with status 0 in every case; failures are reported
//! on stderr.

use std::io;

use clap::Parser;
use stockroom_console::cli::Cli;
use stockroom_console::config::ConsoleConfig;
use stockroom_store::Inventory;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    stockroom_console::init_tracing();

    let config = match ConsoleConfig::from_env() {
        Ok(config) => cli.apply(config),
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            eprintln!("[ERROR] {}", e);
            return;
        }
    };

    info!(store = ?config.store, pause = config.pause, "Configuration loaded");

    let mut inventory = match Inventory::seeded(config.store) {
        Ok(inventory) => inventory,
        Err(e) => {
            error!(error = %e, "Failed to load sample data");
            eprintln!("[ERROR] {}", e);
            return;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = stockroom_console::run(&config, &mut inventory, stdin.lock(), stdout.lock()) {
        error!(error = %e, "Terminal I/O failed");
    }
}
