// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::exchange::ExchangeResult;
use crate::tracker::ConnectionKey;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fs::File;
use std::io::{Result, Write};
use std::path::{Path, PathBuf};

pub const SUMMARY_HEADER: &str = "Connection Reuse Summary:";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Reuse count per connection key, kept in first-seen order.
///
/// A key's count is the number of exchanges seen on it minus one.
#[derive(Debug, Default)]
pub struct ReuseAggregate {
    order: Vec<ConnectionKey>,
    counts: HashMap<ConnectionKey, u64>,
}

impl ReuseAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, key: &ConnectionKey) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.order.push(key.clone());
                self.counts.insert(key.clone(), 0);
            }
        }
    }

    pub fn get(&self, key: &ConnectionKey) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ConnectionKey, u64)> {
        self.order
            .iter()
            .map(move |key| (key, self.counts.get(key).copied().unwrap_or_default()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

pub fn format_log_line(result: &ExchangeResult) -> String {
    let time = result.timestamp().format(TIMESTAMP_FORMAT);
    match (result.status(), result.error()) {
        (Some(status), None) => format!(
            "Time: {} | URL: {} | Status Code: {} | Connection Reused: {} | FD: {}",
            time,
            result.url(),
            status,
            if result.reused() { "True" } else { "False" },
            result
                .connection_key()
                .map_or_else(|| "unavailable".to_string(), |key| key.connection.to_string())
        ),
        (_, error) => format!(
            "Time: {} | URL: {} | Exception: {}",
            time,
            result.url(),
            error.unwrap_or("unknown error")
        ),
    }
}

pub fn format_summary_line(key: &ConnectionKey, reused: u64) -> String {
    format!(
        "Scheme: {} | Hostname: {} | Port: {} | FD: {} | Reused Connections: {}",
        key.scheme, key.hostname, key.port, key.connection, reused
    )
}

/// `output_<input stem>_<YYYY-MM-DD_HH-MM-SS>.txt`
pub fn log_file_name(input: &Path, started: DateTime<Local>) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    format!("output_{}_{}.txt", stem, started.format("%Y-%m-%d_%H-%M-%S"))
}

pub fn log_file_path(output_dir: &Path, input: &Path, started: DateTime<Local>) -> PathBuf {
    output_dir.join(log_file_name(input, started))
}

/// Writes one line per exchange to the log sink (and optionally stdout)
/// and folds successful exchanges into the reuse aggregate.
pub struct Reporter<W: Write> {
    sink: W,
    mirror_stdout: bool,
    aggregate: ReuseAggregate,
}

impl Reporter<File> {
    /// Creates the log file, truncating anything already at `path`.
    pub fn create(path: &Path, mirror_stdout: bool) -> Result<Self> {
        Ok(Self::new(File::create(path)?, mirror_stdout))
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(sink: W, mirror_stdout: bool) -> Self {
        Reporter {
            sink,
            mirror_stdout,
            aggregate: ReuseAggregate::new(),
        }
    }

    pub fn record(&mut self, result: &ExchangeResult) -> Result<()> {
        self.emit(&format_log_line(result))?;
        if let Some(key) = result.connection_key() {
            self.aggregate.observe(key);
        }
        Ok(())
    }

    pub fn summary(&self) -> String {
        let mut summary = format!("{}\n", SUMMARY_HEADER);
        for (key, reused) in self.aggregate.iter() {
            summary.push_str(&format_summary_line(key, reused));
            summary.push('\n');
        }
        summary
    }

    /// Appends the summary to the log, preceded by a blank line, and returns it.
    pub fn summarize(&mut self) -> Result<String> {
        let summary = self.summary();
        self.emit(&format!("\n{}", summary.trim_end()))?;
        Ok(summary)
    }

    pub fn aggregate(&self) -> &ReuseAggregate {
        &self.aggregate
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        writeln!(self.sink, "{}", text)?;
        self.sink.flush()?;
        if self.mirror_stdout {
            println!("{}", text);
        }
        Ok(())
    }
}
