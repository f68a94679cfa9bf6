// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use colored::*;
use connprobe::cli::Cli;
use connprobe::config::ConfigParameter;
use connprobe::probe;
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = SimpleLogger::new().with_level(cli.level_filter()).init() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let config = ConfigParameter::from_cli(&cli);
    match probe::run(&config, &cli.input_file).await {
        Ok(outcome) => {
            log::info!(
                "{} requests done, log written to {}",
                outcome.results.len(),
                outcome.log_path.display()
            );
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}
