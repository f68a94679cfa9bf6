// File: error.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::fmt;

#[derive(Debug)]
pub enum ProbeError {
    Io(std::io::Error),
    InvalidLine {
        line: usize,
        content: String,
        reason: String,
    },
    Client(reqwest::Error),
    InvalidHeader(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::InvalidLine {
                line,
                content,
                reason,
            } => write!(f, "Invalid input on line {} ({:?}): {}", line, content, reason),
            Self::Client(e) => write!(f, "HTTP client error: {}", e),
            Self::InvalidHeader(value) => write!(f, "Invalid Host header value: {:?}", value),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidLine { .. } => None,
            Self::Client(e) => Some(e),
            Self::InvalidHeader(_) => None,
        }
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(error: reqwest::Error) -> Self {
        Self::Client(error)
    }
}

pub type ProbeResult<T> = Result<T, ProbeError>;
