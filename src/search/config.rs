// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the search orchestrator

use std::env;
use std::path::PathBuf;

use super::history::DEFAULT_HISTORY_CAPACITY;
use super::normalizer::DecodePolicies;
use super::types::ConfigError;

/// Configuration for the search orchestrator and its HTTP transport
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the search backend
    pub base_url: String,
    /// Query endpoint, relative to `base_url` unless `endpoint_override` is set
    pub endpoint: String,
    /// Fixed caller identity sent with every query
    pub caller_id: String,
    /// Retry count handed to the transport
    pub retries: u32,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Ask the transport to bypass its cache
    pub skip_cache: bool,
    /// Treat `endpoint` as an absolute URL
    pub endpoint_override: bool,
    /// Maximum number of queries kept in history
    pub history_capacity: usize,
    /// Decode policy per entity kind
    pub decode_policies: DecodePolicies,
    /// JSON autocomplete catalog; the built-in one is used when unset
    pub autocomplete_path: Option<PathBuf>,
}

impl SearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("SEARCH_API_URL").unwrap_or(defaults.base_url),
            endpoint: env::var("SEARCH_ENDPOINT").unwrap_or(defaults.endpoint),
            caller_id: env::var("SEARCH_CALLER_ID").unwrap_or(defaults.caller_id),
            retries: env::var("SEARCH_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retries),
            request_timeout_ms: env::var("SEARCH_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            // Set SEARCH_SKIP_CACHE=false to let the transport cache
            skip_cache: env::var("SEARCH_SKIP_CACHE")
                .map(|v| v.to_lowercase() != "false")
                .unwrap_or(defaults.skip_cache),
            endpoint_override: env::var("SEARCH_ENDPOINT_OVERRIDE")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(defaults.endpoint_override),
            history_capacity: env::var("SEARCH_HISTORY_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.history_capacity),
            decode_policies: defaults.decode_policies,
            autocomplete_path: env::var("SEARCH_AUTOCOMPLETE_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() && !self.endpoint_override {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            endpoint: "/api/v1/search/query".to_string(),
            caller_id: "web-client".to_string(),
            retries: 3,
            request_timeout_ms: 10_000,
            skip_cache: true,
            endpoint_override: false,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            decode_policies: DecodePolicies::default(),
            autocomplete_path: None,
        }
    }
}
