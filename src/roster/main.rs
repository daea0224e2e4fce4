//! # Roster CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and turns errors into an exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/roster/cli/)                                │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + per-command handlers (commands.rs)      │
//! │  - Tables, cards and messages (render.rs)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                   roster::api::RosterApi
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
