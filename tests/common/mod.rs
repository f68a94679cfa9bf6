// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(dead_code)]

use connprobe::config::ConfigParameter;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub async fn setup_mock_server() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;
    mock_server
}

/// Nothing listens on port 1 of the loopback interface.
pub fn unreachable_url() -> String {
    "http://127.0.0.1:1/".to_string()
}

pub fn quiet_config(output_dir: &Path) -> ConfigParameter {
    let mut config = ConfigParameter::new();
    config.set_timeout(5);
    config.set_mirror_stdout(false);
    config.set_output_dir(output_dir.to_path_buf());
    config
}

pub fn write_input(dir: &TempDir, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, lines.join("\n") + "\n").unwrap();
    path
}
