// File: tracker.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use reqwest::Url;
use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use url::Host;

/// The socket pair of one live TCP connection, as reported by the transport.
///
/// While a connection is open no other connection can share both addresses,
/// so two exchanges carrying the same pair travelled over the same socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId {
    pub local_addr: SocketAddr,
    pub remote_addr: SocketAddr,
}

impl ConnectionId {
    pub fn new(local_addr: SocketAddr, remote_addr: SocketAddr) -> Self {
        Self {
            local_addr,
            remote_addr,
        }
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.local_addr, self.remote_addr)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionKey {
    pub scheme: String,
    pub hostname: String,
    pub port: u16,
    pub connection: ConnectionId,
}

impl ConnectionKey {
    pub fn new(url: &Url, connection: ConnectionId) -> Self {
        let default_port = if url.scheme() == "https" { 443 } else { 80 };
        Self {
            scheme: url.scheme().to_string(),
            hostname: match url.host() {
                Some(Host::Ipv6(addr)) => addr.to_string(),
                Some(host) => host.to_string(),
                None => String::new(),
            },
            port: url.port().unwrap_or(default_port),
            connection,
        }
    }
}

/// Remembers every connection seen during a run and how often it came back.
#[derive(Debug, Default)]
pub struct ConnectionTracker {
    seen: HashMap<ConnectionKey, u64>,
}

impl ConnectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Must be called once per completed exchange, in dispatch order.
    /// Returns whether the connection had already carried an earlier exchange.
    pub fn classify(&mut self, url: &Url, connection: ConnectionId) -> (bool, ConnectionKey) {
        let key = ConnectionKey::new(url, connection);
        let reused = match self.seen.get_mut(&key) {
            Some(count) => {
                *count += 1;
                true
            }
            None => {
                self.seen.insert(key.clone(), 0);
                false
            }
        };
        (reused, key)
    }

    pub fn reuse_count(&self, key: &ConnectionKey) -> Option<u64> {
        self.seen.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
