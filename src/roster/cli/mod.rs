//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Defaults
//!
//! Running `roster` with no arguments lists the active roster, the same as
//! `roster list`. On first use of an empty store the sample employees are seeded
//! (disable with `roster config seed-sample-data false`).
//!
//! ## Filtering
//!
//! `list`, `export` and `stats` share the same filter flags:
//! `--search`, `--department`, `--status`, `--from`, `--to`. A date range only
//! applies when both `--from` and `--to` are given.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Output formatting (tables, cards, stats, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
