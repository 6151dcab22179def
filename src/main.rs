//! rgpio - A GPIO pin level reader
//!
//! Reads the instantaneous logic level of GPIO pins through pluggable
//! backends. Pin indices are positional per backend: the first configured
//! line is pin 0, the second is pin 1, and so on. An index outside the
//! configured bank is reported as an invalid pin, not folded into the
//! level values.

mod backends;
mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    match cli.command {
        Commands::Read { backend, pins, raw } => {
            let mut bank = backends::open_bank(&backend)?;
            commands::run_read(&mut bank, &pins, raw)
        }
        Commands::Probe { backend } => {
            let bank = backends::open_bank(&backend)?;
            commands::run_probe(&bank)
        }
        Commands::List => commands::run_list(),
    }
}
