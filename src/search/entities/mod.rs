// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Typed entities produced by the response normalizer

pub mod approval;
pub mod event;
pub mod procurement_request;
pub mod purchase_order;

pub use approval::Approval;
pub use event::{Event, EventCompany, EventStage, EventUser};
pub use procurement_request::{AdditionalField, ProcurementRequest, ProcurementRequestData};
pub use purchase_order::{PurchaseOrder, StatusChange};

use serde::{Deserialize, Serialize};

/// The four normalized collections produced by one search cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCollections {
    pub procurement_requests: Vec<ProcurementRequest>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub approvals: Vec<Approval>,
    pub events: Vec<Event>,
}

impl SearchCollections {
    /// Total number of entities across all kinds
    pub fn total(&self) -> usize {
        self.procurement_requests.len()
            + self.purchase_orders.len()
            + self.approvals.len()
            + self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
