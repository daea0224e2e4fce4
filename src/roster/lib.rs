//! # Roster Architecture
//!
//! Roster is a **UI-agnostic employee roster library**. The `roster` binary is one
//! client of it; the same core could back a web dashboard or a TUI.
//!
//! ## Layers
//!
//! ```text
//!   roster binary (cli/)          argument parsing, tables and cards, prompts;
//!          │                      owns stdout/stderr and the exit code
//!          ▼
//!   api::RosterApi<S>             facade: fills in today's date and the
//!          │                      configured export dir, then dispatches
//!          ▼
//!   commands::*                   load snapshot -> derive new roster -> save;
//!          │                      answers with a CmdResult, never prints
//!     ┌────┴──────────────┐
//!     ▼                   ▼
//!   filter, export      store::DataStore
//!   (pure, borrow       FileStore (employees.json)
//!    &[Employee])       InMemoryStore (tests)
//! ```
//!
//! ## Snapshots, not shared state
//!
//! The roster is a plain `Vec<Employee>`. Every mutation (add, edit, archive,
//! restore) loads the current snapshot, builds a new list from it and writes the
//! whole list back. The core functions borrow their input and return freshly
//! built values, so identical input always produces byte-identical output.
//!
//! ## Testing Strategy
//!
//! 1. **Core** (`filter`, `export`): property-style unit tests of the pure functions.
//! 2. **Commands**: unit tests against [`store::memory::InMemoryStore`].
//! 3. **Store**: file round-trips in temp directories.
//! 4. **CLI**: `assert_cmd` tests in `tests/` against a temp `ROSTER_HOME`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`filter`]: The filter engine (`apply`, `count_active`)
//! - [`export`]: CSV serialization and export statistics
//! - [`ids`]: Employee id generation
//! - [`model`]: Core data types (`Employee`, `Department`, `Status`)
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod ids;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
