// File: dispatch.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::error::{ProbeError, ProbeResult};
use crate::exchange::ExchangeResult;
use crate::http::Transport;
use crate::input::RequestSpec;
use crate::report::Reporter;
use crate::tracker::ConnectionTracker;
use async_trait::async_trait;
use log::{debug, info, warn};
use std::error::Error;
use std::io::Write;
use std::time::Duration;

/// Waits between two consecutive requests.
#[async_trait]
pub trait Pacer {
    async fn pause(&mut self, delay: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&mut self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

/// Sends specs one after another through a single transport and classifies
/// each response against the connections seen so far in this run.
pub struct Dispatcher<T: Transport, P: Pacer> {
    transport: T,
    pacer: P,
    tracker: ConnectionTracker,
}

impl<T: Transport, P: Pacer> Dispatcher<T, P> {
    pub fn new(transport: T, pacer: P) -> Self {
        Dispatcher {
            transport,
            pacer,
            tracker: ConnectionTracker::new(),
        }
    }

    /// Consumes the dispatcher, so the transport and its pooled connections
    /// are released when the run ends, whether it finishes or fails.
    ///
    /// Only a failure to write the log aborts the run; request failures are
    /// recorded and the next spec is dispatched.
    pub async fn run<W: Write>(
        mut self,
        specs: &[RequestSpec],
        reporter: &mut Reporter<W>,
    ) -> ProbeResult<Vec<ExchangeResult>> {
        info!("Dispatching {} requests", specs.len());
        let mut results = Vec::with_capacity(specs.len());

        for (index, spec) in specs.iter().enumerate() {
            let result = self.dispatch(spec).await;
            reporter.record(&result)?;
            results.push(result);

            if index + 1 < specs.len() {
                debug!("Waiting {}s before the next request", spec.delay_seconds());
                self.pacer.pause(spec.delay()).await;
            }
        }

        info!(
            "Finished {} requests over {} distinct connections",
            results.len(),
            self.tracker.len()
        );
        Ok(results)
    }

    async fn dispatch(&mut self, spec: &RequestSpec) -> ExchangeResult {
        debug!(
            "Requesting {} (Host override: {})",
            spec.url(),
            spec.host_header().unwrap_or("none")
        );

        match self.transport.send(spec).await {
            Ok(exchange) => match exchange.connection {
                Some(connection) => {
                    let (reused, key) = self.tracker.classify(&exchange.url, connection);
                    ExchangeResult::success(
                        spec.url().to_string(),
                        exchange.status,
                        reused,
                        Some(key),
                    )
                }
                None => {
                    warn!("Transport reported no connection for {}", spec.url());
                    ExchangeResult::success(spec.url().to_string(), exchange.status, false, None)
                }
            },
            Err(e) => {
                let message = describe(&e);
                warn!("Request to {} failed: {}", spec.url(), message);
                ExchangeResult::failure(spec.url().to_string(), message)
            }
        }
    }
}

/// Flattens an error and its sources into one line.
fn describe(error: &ProbeError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
