use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};

pub const DEFAULT_OUTPUT_FILE: &str = "normalized_addresses.csv";

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Normalize all addresses of a CSV file and report duplicates
    Normalize {
        /// CSV file with one address per row (first column)
        input: PathBuf,
        /// Result file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,
        /// Pause between two requests, e.g. "100ms" (overrides the configuration)
        #[arg(long, value_parser = parse_duration)]
        delay: Option<Duration>,
    },
    /// Find duplicates in a previously written result file
    Duplicates {
        results: PathBuf,
    },
    /// Normalize the given addresses without writing a file
    Lookup {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    duration_str::parse(s).map_err(|err| err.to_string())
}
