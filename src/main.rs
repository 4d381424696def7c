//! SmokeScreen - venue search and smoking-policy scoring from the terminal.
//!
//! Searches bars and pubs, loads a venue's photos and asks a vision model
//! to score its smoking policy. See `smokescreen --help` for commands.

mod cli;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("smokescreen=info".parse()?))
        .init();

    cli::run_command(&args)
}
