//! # Stockroom Console Library
//!
//! Interactive menu over an in-memory `Inventory`.
//!
//! ## Module Organization
//! ```text
//! stockroom_console/
//! ├── lib.rs          ◄─── You are here (menu loop & logging setup)
//! ├── cli.rs          ◄─── Command-line flags
//! ├── config.rs       ◄─── Environment configuration
//! ├── console.rs      ◄─── Prompts and messages over BufRead/Write
//! ├── menu.rs         ◄─── MenuChoice and dispatch
//! ├── render.rs       ◄─── Tables, invoice, report text
//! ├── commands/       ◄─── One function per menu action
//! └── error.rs        ◄─── CommandError / ConsoleError
//! ```
//!
//! ## Menu Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Menu Loop                                      │
//! │                                                                         │
//! │  print menu ──► read choice ──┬── not a number ──► [ERROR] ─┐          │
//! │       ▲                       ├── 16, -1, ... ───► [ERROR] ─┤          │
//! │       │                       ├── 0 ──► farewell, return    │          │
//! │       │                       └── 1..=15 ──► command ───────┤          │
//! │       │                                                     ▼          │
//! │       └──────────────── clear ◄── pause ◄── [ERROR] if the command failed
//! │                                                                         │
//! │  End of input anywhere ends the loop; `run` still returns Ok.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod render;

use std::io::{self, BufRead, Write};

use stockroom_store::Inventory;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use config::ConsoleConfig;
use console::Console;
use error::{CommandError, ConsoleError, ConsoleResult};
use menu::MenuChoice;

/// What the loop does after one round.
enum Flow {
    Continue,
    Exit,
}

/// Runs the menu loop until the operator exits or input ends.
///
/// ## Returns
/// * `Ok(())` - Exit chosen or input closed
/// * `Err(io::Error)` - Reading or writing the terminal failed
pub fn run<R: BufRead, W: Write>(
    config: &ConsoleConfig,
    inventory: &mut Inventory,
    input: R,
    output: W,
) -> io::Result<()> {
    info!(store = %config.store_name, "Starting console");

    let mut console = Console::new(input, output, config.clear_screen, config.pause);

    loop {
        match menu_round(&mut console, inventory, config) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(ConsoleError::Closed) => {
                info!("Input closed");
                break;
            }
            Err(ConsoleError::Io(e)) => return Err(e),
            Err(ConsoleError::Command(e)) => warn!(error = %e, "Unreported command error"),
        }
    }

    info!("Console stopped");
    Ok(())
}

fn menu_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
    config: &ConsoleConfig,
) -> ConsoleResult<Flow> {
    console.block(&render::main_menu(&config.store_name))?;
    let line = match console.read_line() {
        Ok(line) => Ok(line),
        Err(ConsoleError::Command(e)) => Err(e),
        Err(other) => return Err(other),
    };

    let selection = line
        .and_then(|line| {
            line.trim()
                .parse::<i64>()
                .map_err(|_| CommandError::input_format("Invalid input! Please enter a number."))
        })
        .and_then(MenuChoice::try_from);

    match selection {
        Ok(MenuChoice::Exit) => {
            console.clear()?;
            console.block(&render::farewell(&config.store_name))?;
            return Ok(Flow::Exit);
        }
        Ok(choice) => {
            debug!(?choice, "Menu selection");
            match menu::dispatch(choice, console, inventory) {
                Ok(()) => {}
                Err(ConsoleError::Command(e)) => report_error(console, &e)?,
                Err(other) => return Err(other),
            }
        }
        Err(e) => report_error(console, &e)?,
    }

    console.pause()?;
    console.clear()?;
    Ok(Flow::Continue)
}

fn report_error<R: BufRead, W: Write>(console: &mut Console<R, W>, err: &CommandError) -> ConsoleResult<()> {
    debug!(code = err.code.as_str(), message = %err.message, "Command failed");
    console.error(&err.message)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_store=debug` - Repository detail only
/// - Default: warnings, plus info from stockroom crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,stockroom_core=info,stockroom_store=info,stockroom_console=info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================
