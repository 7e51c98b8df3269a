// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types shared across the search pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Intent kind attached to every result in a search envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    /// A procurement (purchase) request
    PurchaseRequest,
    /// A purchase order
    PurchaseOrder,
    /// An approval workflow item
    Approval,
    /// A sourcing or auction event
    Event,
}

impl IntentKind {
    /// All recognized intent kinds, in extraction order
    pub const ALL: [IntentKind; 4] = [
        IntentKind::PurchaseRequest,
        IntentKind::PurchaseOrder,
        IntentKind::Approval,
        IntentKind::Event,
    ];

    /// Wire tag used by the search backend
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::PurchaseRequest => "purchase_request",
            IntentKind::PurchaseOrder => "purchase_order",
            IntentKind::Approval => "approval",
            IntentKind::Event => "event",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown intent kind '{}'", s))
    }
}

/// Placeholder summary record returned to the caller of a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSummary {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Filter tag the search ran under, or "general"
    #[serde(rename = "type")]
    pub kind: String,
}

impl SearchSummary {
    /// The fixed pair of summaries handed back by every search
    pub fn placeholders(filter: Option<&str>) -> Vec<SearchSummary> {
        let kind = filter
            .filter(|f| !f.is_empty())
            .unwrap_or("general")
            .to_string();

        (1..=2)
            .map(|id| SearchSummary {
                id,
                title: format!("Search Result {}", id),
                description: format!("Description for result {}", id),
                kind: kind.clone(),
            })
            .collect()
    }
}

/// Errors raised by a search transport
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    /// Request did not complete within the timeout
    #[error("Search request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Backend answered with a non-success status
    #[error("Search API error: {status} - {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, truncated, or reason
        message: String,
    },

    /// Connection-level failure; the message is surfaced verbatim
    #[error("{0}")]
    Network(String),

    /// Backend answered but the body was not a JSON envelope
    #[error("Invalid search response: {0}")]
    InvalidResponse(String),
}

/// Structured failure from decoding an untyped payload into an entity
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("{entity} payload is not an object")]
    NotAnObject { entity: &'static str },

    #[error("missing field '{field}'")]
    MissingField { field: String },

    #[error("field '{field}' is not a {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },
}

/// Invalid search configuration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Search API base URL must not be empty")]
    EmptyBaseUrl,

    #[error("Search endpoint must not be empty")]
    EmptyEndpoint,

    #[error("Request timeout must be greater than 0")]
    ZeroTimeout,

    #[error("History capacity must be greater than 0")]
    ZeroHistoryCapacity,
}
