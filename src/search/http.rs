// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP search transport
//!
//! Sends search requests with `reqwest`, enforcing the per-request timeout
//! and retrying transient failures with exponential backoff.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::transport::{Method, SearchTransport, TransportRequest};
use super::types::TransportError;

/// Base delay for exponential backoff (250ms, 500ms, 1s, ...)
const RETRY_BASE_DELAY_MS: u64 = 250;

/// Longest error body kept in [`TransportError::Http`], in characters
pub const MAX_ERROR_BODY_CHARS: usize = 256;

/// reqwest-backed [`SearchTransport`]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport rooted at `base_url`
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `request`
    pub fn url_for(&self, request: &TransportRequest) -> String {
        if request.override_flag {
            request.endpoint.clone()
        } else {
            format!(
                "{}/{}",
                self.base_url,
                request.endpoint.trim_start_matches('/')
            )
        }
    }

    async fn send_once(&self, request: &TransportRequest) -> Result<Value, TransportError> {
        let url = self.url_for(request);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self
            .client
            .request(method, &url)
            .timeout(Duration::from_millis(request.timeout_ms));
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if request.skip_cache {
            builder = builder.header("Cache-Control", "no-cache");
        }
        if request.method == Method::Post {
            builder = builder.json(&request.body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    timeout_ms: request.timeout_ms,
                }
            } else {
                TransportError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Http {
                status: status.as_u16(),
                message: truncate_body(&body),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

/// Trim an error body to [`MAX_ERROR_BODY_CHARS`], marking the cut with `...`
pub fn truncate_body(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Whether another attempt could succeed
pub fn is_retryable(error: &TransportError) -> bool {
    match error {
        TransportError::Timeout { .. } | TransportError::Network(_) => true,
        TransportError::Http { status, .. } => *status == 429 || *status >= 500,
        TransportError::InvalidResponse(_) => false,
    }
}

/// Delay before retry number `attempt` (0-based)
pub fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(RETRY_BASE_DELAY_MS * 2u64.pow(attempt.min(6)))
}

#[async_trait]
impl SearchTransport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<Value, TransportError> {
        let mut attempt = 0;
        loop {
            debug!(
                "{} {} (attempt {}/{})",
                request.method.as_str(),
                self.url_for(&request),
                attempt + 1,
                request.retries + 1
            );

            match self.send_once(&request).await {
                Ok(body) => return Ok(body),
                Err(e) if is_retryable(&e) && attempt < request.retries => {
                    let delay = backoff_delay(attempt);
                    warn!(
                        "Search request failed: {}, retrying in {}ms",
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
