//! Command-line interface definitions.

pub mod check;

use clap::{Parser, Subcommand};

/// coinbrief - scheduled crypto market brief.
#[derive(Parser, Debug)]
#[command(name = "coinbrief")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one report pass: fetch, compose, publish, capture, notify
    Run,

    /// Validate environment configuration without calling any API
    Check,
}
