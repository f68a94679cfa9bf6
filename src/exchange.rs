// File: exchange.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::tracker::ConnectionKey;
use chrono::{DateTime, Local};

/// Outcome of one dispatched request. A missing `status` means the request
/// never produced a response; a missing `connection_key` on a response means
/// the transport could not say which socket carried it.
#[derive(Debug, Clone)]
pub struct ExchangeResult {
    timestamp: DateTime<Local>,
    url: String,
    status: Option<u16>,
    reused: bool,
    connection_key: Option<ConnectionKey>,
    error: Option<String>,
}

impl ExchangeResult {
    pub fn success(
        url: String,
        status: u16,
        reused: bool,
        connection_key: Option<ConnectionKey>,
    ) -> Self {
        ExchangeResult {
            timestamp: Local::now(),
            url,
            status: Some(status),
            reused,
            connection_key,
            error: None,
        }
    }

    pub fn failure(url: String, error: String) -> Self {
        ExchangeResult {
            timestamp: Local::now(),
            url,
            status: None,
            reused: false,
            connection_key: None,
            error: Some(error),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn reused(&self) -> bool {
        self.reused
    }

    pub fn connection_key(&self) -> Option<&ConnectionKey> {
        self.connection_key.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
