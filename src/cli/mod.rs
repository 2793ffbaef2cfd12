//! Command-line interface for fixturegen
//!
//! One subcommand per exercise writes that exercise's fixtures; `all`, `list`
//! and `config` cover batch generation and inspection.

pub mod commands;
mod output;

pub use commands::Cli;
pub use output::Output;
