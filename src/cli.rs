//! CLI argument parsing

use crate::backends;
use clap::{Parser, Subcommand};

/// Generate dynamic help text for the backend argument
fn backend_help() -> String {
    format!(
        "Backend to use [available: {}]",
        backends::backend_names_short()
    )
}

#[derive(Parser)]
#[command(name = "rgpio")]
#[command(author, version, about = "GPIO pin level reader", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read pin levels
    Read {
        /// Backend to use
        #[arg(short, long, help = backend_help())]
        backend: String,

        /// Pin indices to read (all pins when omitted)
        pins: Vec<u32>,

        /// Print raw integer levels (legacy contract: -1 for invalid pins)
        #[arg(long)]
        raw: bool,
    },

    /// Open a backend and report its pin bank
    Probe {
        /// Backend to use
        #[arg(short, long, help = backend_help())]
        backend: String,
    },

    /// List compiled-in backends
    List,
}
