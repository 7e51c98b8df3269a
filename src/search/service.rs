// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search orchestration
//!
//! Records history, drives the request status through
//! `loading -> success | failed`, calls the transport once per search and
//! swaps the normalized results into the session.

use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::config::SearchConfig;
use super::envelope::ResultEnvelope;
use super::http::HttpTransport;
use super::normalizer::ResponseNormalizer;
use super::session::{ResultBundle, SearchSession};
use super::status::RequestStatus;
use super::transport::{Method, SearchTransport, TransportRequest};
use super::types::{SearchSummary, TransportError};

/// Status message used when a transport error carries no text
pub const FALLBACK_FAILURE_MESSAGE: &str = "Search failed";

/// Main search service that orchestrates the transport, normalizer and session
pub struct SearchService {
    transport: Arc<dyn SearchTransport>,
    session: Arc<SearchSession>,
    normalizer: ResponseNormalizer,
    config: SearchConfig,
}

impl SearchService {
    /// Create a search service over an explicit transport
    pub fn new(
        config: SearchConfig,
        transport: Arc<dyn SearchTransport>,
        session: Arc<SearchSession>,
    ) -> Self {
        let normalizer = ResponseNormalizer::new(config.decode_policies);
        debug!("Search service using {} transport", transport.name());

        Self {
            transport,
            session,
            normalizer,
            config,
        }
    }

    /// Create a search service backed by [`HttpTransport`]
    pub fn with_http(
        config: SearchConfig,
        session: Arc<SearchSession>,
    ) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.base_url)?;
        Ok(Self::new(config, Arc::new(transport), session))
    }

    pub fn session(&self) -> &Arc<SearchSession> {
        &self.session
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Build the transport request for `query`
    pub fn build_request(&self, query: &str) -> TransportRequest {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("X-Request-Id".to_string(), Uuid::new_v4().to_string());

        TransportRequest {
            method: Method::Post,
            endpoint: self.config.endpoint.clone(),
            headers,
            body: json!({
                "query": query,
                "user_id": self.config.caller_id,
                "context": {},
            }),
            override_flag: self.config.endpoint_override,
            retries: self.config.retries,
            timeout_ms: self.config.request_timeout_ms,
            skip_cache: self.config.skip_cache,
        }
    }

    /// Perform a search
    ///
    /// The outcome lands in the session: normalized collections, raw envelope
    /// and a `success` or `failed` status. Failures never propagate to the
    /// caller. The returned summaries are placeholders and are the same
    /// whatever the outcome.
    ///
    /// # Arguments
    /// * `query` - Free-text query; blank queries are sent but not recorded
    /// * `filter` - Optional filter tag
    pub async fn perform_search(&self, query: &str, filter: Option<&str>) -> Vec<SearchSummary> {
        let generation = self.session.begin(query).await;
        let summaries = SearchSummary::placeholders(filter);

        debug!(
            "Searching for '{}' with filter {:?} via {}",
            query,
            filter,
            self.transport.name()
        );
        let start = Instant::now();

        let request = self.build_request(query);
        let (bundle, status, message) = match self.transport.send(request).await {
            Ok(raw) => {
                let envelope = ResultEnvelope::from_value(&raw);
                let collections = self.normalizer.normalize(&envelope);
                let total = collections.total();

                info!(
                    "Search complete: {} results for '{}' in {}ms",
                    total,
                    query,
                    start.elapsed().as_millis()
                );

                let bundle = ResultBundle {
                    summaries: summaries.clone(),
                    collections,
                    envelope: Some(raw),
                };
                (bundle, RequestStatus::Success, result_message(total))
            }
            Err(e) => {
                warn!("Search for '{}' failed: {}", query, e);
                (
                    ResultBundle::default(),
                    RequestStatus::Failed,
                    failure_message(&e),
                )
            }
        };

        if !self.session.complete(generation, bundle, status, message).await {
            debug!(
                "Discarding stale result for '{}' (generation {})",
                query, generation
            );
        }

        summaries
    }
}

/// Status message for a successful search with `total` entities
pub fn result_message(total: usize) -> String {
    if total > 0 {
        format!("Found {} result(s)", total)
    } else {
        "No results found".to_string()
    }
}

fn failure_message(error: &TransportError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        FALLBACK_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}
