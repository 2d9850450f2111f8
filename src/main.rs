use addrnorm_application::prelude::*;
use addrnorm_core::usecases;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};

mod cli;
mod config;
mod gateways;
mod report;

use cli::{Cli, Command};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let cfg = config::Config::try_load_from_file_or_default(cli.config.as_ref())?;
    log::debug!("{cfg:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Normalize {
            input,
            output,
            delay,
        } => {
            let gateway = gateways::geocoding_gateway(&cfg.geocoding)?;
            let delay = delay.unwrap_or(cfg.batch.delay);
            writeln!(out, "Normalizing addresses from '{}'...", input.display())?;
            let report = normalize_file(&gateway, &input, &output, delay)
                .with_context(|| format!("Failed to normalize '{}'", input.display()))?;
            writeln!(out)?;
            report::write_results(&mut out, &report.results)?;
            writeln!(out)?;
            report::write_duplicates(&mut out, &report.duplicates)?;
            writeln!(out)?;
            writeln!(
                out,
                "Normalized {} of {} addresses",
                report.results.len(),
                report.total
            )?;
            writeln!(out, "Results saved to '{}'", output.display())?;
        }
        Command::Duplicates { results } => {
            let results = load_results_from_csv(&results)
                .with_context(|| format!("Failed to read '{}'", results.display()))?;
            let duplicates = usecases::find_duplicates(&results);
            report::write_duplicates(&mut out, &duplicates)?;
        }
        Command::Lookup { addresses } => {
            let gateway = gateways::geocoding_gateway(&cfg.geocoding)?;
            let results = usecases::normalize_batch(&gateway, &addresses, cfg.batch.delay);
            report::write_results(&mut out, &results)?;
        }
    }
    Ok(())
}
