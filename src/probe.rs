// File: probe.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::ConfigParameter;
use crate::dispatch::{Dispatcher, TokioPacer};
use crate::error::ProbeResult;
use crate::exchange::ExchangeResult;
use crate::http::Http;
use crate::input::load_specs;
use crate::report::{log_file_path, Reporter};
use chrono::Local;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ProbeOutcome {
    pub log_path: PathBuf,
    pub results: Vec<ExchangeResult>,
    pub summary: String,
}

/// Reads `input`, dispatches every record through one pooled client and
/// writes the per-request log plus the reuse summary.
///
/// Input errors are returned before any request is sent or any log is created.
pub async fn run(config: &ConfigParameter, input: &Path) -> ProbeResult<ProbeOutcome> {
    let specs = load_specs(input)?;

    let log_path = log_file_path(config.output_dir(), input, Local::now());
    let mut reporter = Reporter::create(&log_path, config.mirror_stdout())?;
    info!("Writing results to {}", log_path.display());

    let http = Http::new(config)?;
    let results = Dispatcher::new(http, TokioPacer)
        .run(&specs, &mut reporter)
        .await?;
    let summary = reporter.summarize()?;

    Ok(ProbeOutcome {
        log_path,
        results,
        summary,
    })
}
