// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client-side procurement search
//!
//! Sends a free-text query to the search backend and turns its
//! intent-tagged response envelope into typed collections for a UI:
//! - Procurement requests (strictly validated)
//! - Purchase orders, approvals and events (default-filled)
//!
//! Key features:
//! - One decoder per entity kind with an explicit strict/lenient policy
//! - Four-state request status with presence semantics
//! - Bounded, deduplicated query history
//! - Atomic result swaps; stale responses from overlapping searches are dropped
//! - Autocomplete suggestions filtered by the current query

pub mod autocomplete;
pub mod config;
pub mod decode;
pub mod entities;
pub mod envelope;
pub mod history;
pub mod http;
pub mod normalizer;
pub mod service;
pub mod session;
pub mod status;
pub mod transport;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use autocomplete::{
    AutocompleteCatalog, AutocompleteData, RelatedDocument, SuggestedAction,
};
pub use config::SearchConfig;
pub use decode::{Decode, DecodePolicy};
pub use entities::{Approval, Event, ProcurementRequest, PurchaseOrder, SearchCollections};
pub use envelope::ResultEnvelope;
pub use history::SearchHistory;
pub use http::HttpTransport;
pub use normalizer::{DecodePolicies, ResponseNormalizer};
pub use service::SearchService;
pub use session::{ResultBundle, SearchSession};
pub use status::{RequestStatus, StatusRecord};
pub use transport::{Method, SearchTransport, TransportRequest};
pub use types::{ConfigError, DecodeError, IntentKind, SearchSummary, TransportError};
pub use validator::is_valid_procurement_request;
