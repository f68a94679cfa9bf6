// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::bool_assert_comparison)]

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod exchange;
pub mod http;
pub mod input;
pub mod probe;
pub mod report;
pub mod tracker;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_imports() {
        let _ = config::ConfigParameter::default();
        let _ = tracker::ConnectionTracker::new();
        let _ = report::ReuseAggregate::new();
        let _ = input::RequestSpec::new("http://localhost", 0, None);
        let _ = dispatch::TokioPacer;
    }
}
