// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod search;

pub use search::{
    SearchCollections, SearchConfig, SearchService, SearchSession, SearchSummary,
    SearchTransport, StatusRecord,
};
