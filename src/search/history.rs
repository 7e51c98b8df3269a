// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bounded, most-recent-first query history

/// Default number of queries kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Default number of entries returned by [`SearchHistory::recent_default`]
pub const DEFAULT_RECENT_COUNT: usize = 5;

/// Deduplicated recency list of past queries
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: Vec<String>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SearchHistory {
    /// Create an empty history holding at most `capacity` queries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a query
    ///
    /// Blank queries and queries already present (after trimming) are ignored.
    /// Returns true if the history changed.
    pub fn record(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() || self.entries.iter().any(|e| e == query) {
            return false;
        }

        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.capacity);
        true
    }

    /// The `n` most recent queries
    pub fn recent(&self, n: usize) -> &[String] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn recent_default(&self) -> &[String] {
        self.recent(DEFAULT_RECENT_COUNT)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
