// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023
// - Volker Schwaberow <volker@schwaberow.de>

use crate::cli::Cli;
use std::path::{Path, PathBuf};

pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ConfigParameter {
    timeout: u64,
    insecure: bool,
    output_dir: PathBuf,
    mirror_stdout: bool,
    user_agent: String,
}

impl Default for ConfigParameter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParameter {
    pub fn new() -> Self {
        Self {
            timeout: 10,
            insecure: false,
            output_dir: PathBuf::from("."),
            mirror_stdout: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::new();
        config.set_timeout(cli.timeout);
        config.set_insecure(cli.insecure);
        config.set_output_dir(cli.output_dir.clone());
        config.set_mirror_stdout(!cli.no_stdout);
        if let Some(user_agent) = &cli.user_agent {
            config.set_user_agent(user_agent.clone());
        }
        config
    }

    pub fn set_timeout(&mut self, timeout: u64) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn set_insecure(&mut self, insecure: bool) {
        self.insecure = insecure;
    }

    pub fn insecure(&self) -> bool {
        self.insecure
    }

    pub fn set_output_dir(&mut self, output_dir: PathBuf) {
        self.output_dir = output_dir;
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn set_mirror_stdout(&mut self, mirror_stdout: bool) {
        self.mirror_stdout = mirror_stdout;
    }

    pub fn mirror_stdout(&self) -> bool {
        self.mirror_stdout
    }

    pub fn set_user_agent(&mut self, user_agent: String) {
        self.user_agent = user_agent;
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
