// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[arg(
        value_name = "INPUT_FILE",
        help = "File with one `url,delaySeconds[,hostHeader]` record per line"
    )]
    pub input_file: PathBuf,

    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short = 'q', long = "quiet", help = "Reduce output verbosity")]
    pub quiet: bool,

    #[arg(
        short = 't',
        long = "timeout",
        default_value_t = 10,
        help = "HTTP request timeout in seconds"
    )]
    pub timeout: u64,

    #[arg(
        short = 'k',
        long = "insecure",
        help = "Do not verify TLS certificates"
    )]
    pub insecure: bool,

    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    #[arg(long = "no-stdout", help = "Only write results to the log file")]
    pub no_stdout: bool,

    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,
}

impl Cli {
    /// `--verbose` and `--quiet` win over `--log-level`; an unknown level falls back to warn.
    pub fn level_filter(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Warn)
        }
    }
}
