// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Request status tracking
//!
//! A four-state indicator (`idle`, `loading`, `success`, `failed`) with an
//! advisory message and payload. Optional fields use presence semantics:
//! `Some` always overwrites, even when empty, and `None` keeps the previous
//! value.

use serde::{Deserialize, Serialize};

/// State of the most recent request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Status indicator plus advisory message and payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord<T> {
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Default for StatusRecord<T> {
    fn default() -> Self {
        Self {
            status: RequestStatus::Idle,
            message: None,
            data: None,
        }
    }
}

impl<T> StatusRecord<T> {
    /// Create an idle record
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `status`, overwriting `message` and `data` only when supplied
    pub fn transition(&mut self, status: RequestStatus, message: Option<String>, data: Option<T>) {
        self.status = status;
        if let Some(message) = message {
            self.message = Some(message);
        }
        if let Some(data) = data {
            self.data = Some(data);
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status == RequestStatus::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub fn is_success(&self) -> bool {
        self.status == RequestStatus::Success
    }

    pub fn is_failed(&self) -> bool {
        self.status == RequestStatus::Failed
    }
}
