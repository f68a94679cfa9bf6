// File: http.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::ConfigParameter;
use crate::error::{ProbeError, ProbeResult};
use crate::input::RequestSpec;
use crate::tracker::ConnectionId;
use async_trait::async_trait;
use hyper_util::client::legacy::connect::HttpInfo;
use log::debug;
use reqwest::header::{HeaderValue, HOST};
use reqwest::{redirect, Url};
use std::time::Duration;

/// A finished request/response pair together with the socket that carried it.
#[derive(Debug, Clone)]
pub struct CompletedExchange {
    pub url: Url,
    pub status: u16,
    pub connection: Option<ConnectionId>,
}

/// The client context shared by every request of a run. Implementations must
/// keep idle connections around between calls, otherwise nothing is ever reused.
#[async_trait]
pub trait Transport {
    async fn send(&self, spec: &RequestSpec) -> ProbeResult<CompletedExchange>;
}

#[derive(Debug, Clone)]
pub struct Http {
    client: reqwest::Client,
}

impl Http {
    pub fn new(config_ptr: &ConfigParameter) -> ProbeResult<Self> {
        // Redirects are not followed; one input line is exactly one exchange.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config_ptr.timeout()))
            .user_agent(config_ptr.user_agent())
            .redirect(redirect::Policy::none())
            .danger_accept_invalid_certs(config_ptr.insecure())
            .build()?;
        Ok(Http { client })
    }
}

#[async_trait]
impl Transport for Http {
    async fn send(&self, spec: &RequestSpec) -> ProbeResult<CompletedExchange> {
        let mut request = self.client.get(spec.url());
        if let Some(host) = spec.host_header() {
            let value = HeaderValue::from_str(host)
                .map_err(|_| ProbeError::InvalidHeader(host.to_string()))?;
            request = request.header(HOST, value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let url = response.url().clone();
        let connection = response
            .extensions()
            .get::<HttpInfo>()
            .map(|info| ConnectionId::new(info.local_addr(), info.remote_addr()));

        // The connection only returns to the pool once the body is consumed.
        let body = response.bytes().await?;
        debug!("{} answered {} with {} body bytes", url, status, body.len());

        Ok(CompletedExchange {
            url,
            status,
            connection,
        })
    }
}
