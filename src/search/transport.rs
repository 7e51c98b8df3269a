// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search transport contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::types::TransportError;

/// HTTP method of a transport request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// One request handed to a transport
///
/// `retries`, `timeout_ms` and `skip_cache` are policy for the transport to
/// enforce; the orchestrator only chooses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRequest {
    pub method: Method,
    pub endpoint: String,
    pub headers: BTreeMap<String, String>,
    pub body: Value,
    /// Endpoint is absolute and must not be joined to the base URL
    pub override_flag: bool,
    pub retries: u32,
    pub timeout_ms: u64,
    pub skip_cache: bool,
}

/// Sends search requests to the backend
///
/// Implementations own retries, timeouts and caching.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// Send `request` and return the raw response envelope
    async fn send(&self, request: TransportRequest) -> Result<Value, TransportError>;

    /// Transport name for logging
    fn name(&self) -> &'static str;
}
