//! Command-line interface for smokescreen.
//!
//! This module provides CLI commands for searching venues, running the full
//! enrichment pipeline on one of them, and checking the configuration.

mod commands;

pub use commands::{Cli, Commands, run_command};
