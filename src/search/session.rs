// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search session context
//!
//! Holds the state a search UI reads: open flag, current query, selected
//! filter, history, the latest result bundle and the request status. A
//! session is created when the UI starts, injected into the
//! [`SearchService`](super::service::SearchService) and torn down with
//! [`SearchSession::reset`].
//!
//! The result bundle and status are written together under one lock, and
//! only by the most recently started search.
//!
//! Autocomplete suggestions for the current query come from the session's
//! [`AutocompleteCatalog`], which is fixed for the session's lifetime.

use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use super::autocomplete::{AutocompleteCatalog, AutocompleteData};
use super::entities::SearchCollections;
use super::history::{SearchHistory, DEFAULT_HISTORY_CAPACITY};
use super::status::{RequestStatus, StatusRecord};
use super::types::SearchSummary;

/// Message shown while a search is in flight
pub const LOADING_MESSAGE: &str = "Thinking...";

/// Everything one search cycle produces
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultBundle {
    pub summaries: Vec<SearchSummary>,
    pub collections: SearchCollections,
    /// Raw envelope as received from the transport
    pub envelope: Option<Value>,
}

#[derive(Debug)]
struct SessionState {
    is_open: bool,
    query: String,
    selected_filter: Option<usize>,
    history: SearchHistory,
    bundle: ResultBundle,
    status: StatusRecord<SearchCollections>,
    generation: u64,
}

impl SessionState {
    fn new(history_capacity: usize) -> Self {
        Self {
            is_open: false,
            query: String::new(),
            selected_filter: None,
            history: SearchHistory::new(history_capacity),
            bundle: ResultBundle::default(),
            status: StatusRecord::new(),
            generation: 0,
        }
    }
}

/// Shared search UI state
#[derive(Debug)]
pub struct SearchSession {
    state: RwLock<SessionState>,
    history_capacity: usize,
    catalog: AutocompleteCatalog,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SearchSession {
    /// Create a session backed by the built-in autocomplete catalog
    pub fn new(history_capacity: usize) -> Self {
        Self::with_catalog(history_capacity, AutocompleteCatalog::sample())
    }

    pub fn with_catalog(history_capacity: usize, catalog: AutocompleteCatalog) -> Self {
        Self {
            state: RwLock::new(SessionState::new(history_capacity)),
            history_capacity,
            catalog,
        }
    }

    // ===== Mutators =====

    pub async fn open(&self) {
        self.state.write().await.is_open = true;
    }

    /// Close the search UI, clearing the query and filter selection
    pub async fn close(&self) {
        let mut state = self.state.write().await;
        state.is_open = false;
        state.query.clear();
        state.selected_filter = None;
    }

    pub async fn set_query(&self, query: &str) {
        self.state.write().await.query = query.to_string();
    }

    /// Select a filter by index, or clear the selection with `None`
    pub async fn set_filter(&self, index: Option<usize>) {
        self.state.write().await.selected_filter = index;
    }

    /// Returns true if the history changed
    pub async fn add_to_history(&self, query: &str) -> bool {
        self.state.write().await.history.record(query)
    }

    pub async fn clear_history(&self) {
        self.state.write().await.history.clear();
    }

    /// Tear the session down to its initial state
    ///
    /// Any search still in flight is invalidated.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        let generation = state.generation;
        *state = SessionState::new(self.history_capacity);
        state.generation = generation + 1;
    }

    // ===== Read views =====

    pub async fn is_open(&self) -> bool {
        self.state.read().await.is_open
    }

    pub async fn query(&self) -> String {
        self.state.read().await.query.clone()
    }

    pub async fn has_query(&self) -> bool {
        !self.state.read().await.query.trim().is_empty()
    }

    pub async fn selected_filter(&self) -> Option<usize> {
        self.state.read().await.selected_filter
    }

    pub async fn history(&self) -> Vec<String> {
        self.state.read().await.history.entries().to_vec()
    }

    pub async fn recent_searches(&self) -> Vec<String> {
        self.state.read().await.history.recent_default().to_vec()
    }

    pub async fn summaries(&self) -> Vec<SearchSummary> {
        self.state.read().await.bundle.summaries.clone()
    }

    pub async fn collections(&self) -> SearchCollections {
        self.state.read().await.bundle.collections.clone()
    }

    pub async fn envelope(&self) -> Option<Value> {
        self.state.read().await.bundle.envelope.clone()
    }

    /// Autocomplete suggestions for the current query
    pub async fn autocomplete(&self) -> AutocompleteData {
        let query = self.state.read().await.query.clone();
        self.catalog.suggest(&query)
    }

    pub async fn status(&self) -> StatusRecord<SearchCollections> {
        self.state.read().await.status.clone()
    }

    // ===== Search cycle =====

    /// Start a search cycle: record history, enter `loading`, and return the
    /// generation that must be presented to [`SearchSession::complete`]
    pub(crate) async fn begin(&self, query: &str) -> u64 {
        let mut state = self.state.write().await;
        state.history.record(query);
        state.status.transition(
            RequestStatus::Loading,
            Some(LOADING_MESSAGE.to_string()),
            None,
        );
        state.generation += 1;
        state.generation
    }

    /// Finish a search cycle by swapping in `bundle` and the final status
    ///
    /// Returns false, leaving the session untouched, if a newer cycle has
    /// started since `generation` was issued.
    pub(crate) async fn complete(
        &self,
        generation: u64,
        bundle: ResultBundle,
        status: RequestStatus,
        message: String,
    ) -> bool {
        let mut state = self.state.write().await;
        if state.generation != generation {
            return false;
        }

        let collections = bundle.collections.clone();
        state.bundle = bundle;
        state.status.transition(status, Some(message), Some(collections));
        true
    }
}
