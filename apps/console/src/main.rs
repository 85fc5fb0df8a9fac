//! # Stockroom Console Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Console                                │
//! │                                                                         │
//! │  main.rs ────► calls stockroom_console::run(), maps failure to exit 1   │
//! │                                                                         │
//! │  lib.rs ─────► config, tracing, menu on stdin/stdout                    │
//! │                                                                         │
//! │  stockroom-core ► Inventory: add, remove, update, search, totals        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match stockroom_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Console stopped");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
