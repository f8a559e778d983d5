//! CLI module
//!
//! Command-line interface for one-shot schema inference: flag parsing,
//! input/output handle management, and the exit-code policy.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
