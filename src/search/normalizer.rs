// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Response normalization
//!
//! Turns a [`ResultEnvelope`] into typed collections with one independent
//! pass per intent kind. Each pass only looks at results tagged with its
//! kind whose navigation succeeded, locates the kind-specific raw items and
//! decodes them under the kind's [`DecodePolicy`]:
//!
//! | intent             | raw items                                 |
//! |--------------------|-------------------------------------------|
//! | `purchase_request` | `data.purchase_requests[]`                |
//! | `purchase_order`   | `data.groups[].data.responses[]`          |
//! | `approval`         | `data.groups[].data.responses[]`          |
//! | `event`            | `data.event_groups[].responses[]`         |
//!
//! Output order follows envelope order. Duplicates are kept.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::decode::{Decode, DecodePolicy};
use super::entities::{Approval, Event, ProcurementRequest, PurchaseOrder, SearchCollections};
use super::envelope::ResultEnvelope;
use super::types::IntentKind;

const PURCHASE_REQUESTS_KEY: &str = "purchase_requests";
const GROUPS_KEY: &str = "groups";
const EVENT_GROUPS_KEY: &str = "event_groups";
const GROUP_DATA_KEY: &str = "data";
const RESPONSES_KEY: &str = "responses";

/// Decode policy per entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodePolicies {
    pub procurement_request: DecodePolicy,
    pub purchase_order: DecodePolicy,
    pub approval: DecodePolicy,
    pub event: DecodePolicy,
}

impl Default for DecodePolicies {
    fn default() -> Self {
        Self {
            procurement_request: DecodePolicy::Strict,
            purchase_order: DecodePolicy::Lenient,
            approval: DecodePolicy::Lenient,
            event: DecodePolicy::Lenient,
        }
    }
}

impl DecodePolicies {
    /// Same policy for every kind
    pub fn uniform(policy: DecodePolicy) -> Self {
        Self {
            procurement_request: policy,
            purchase_order: policy,
            approval: policy,
            event: policy,
        }
    }

    pub fn for_kind(&self, kind: IntentKind) -> DecodePolicy {
        match kind {
            IntentKind::PurchaseRequest => self.procurement_request,
            IntentKind::PurchaseOrder => self.purchase_order,
            IntentKind::Approval => self.approval,
            IntentKind::Event => self.event,
        }
    }
}

/// Extracts typed entities from result envelopes
#[derive(Debug, Clone, Default)]
pub struct ResponseNormalizer {
    policies: DecodePolicies,
}

impl ResponseNormalizer {
    pub fn new(policies: DecodePolicies) -> Self {
        Self { policies }
    }

    pub fn policies(&self) -> &DecodePolicies {
        &self.policies
    }

    /// Run all four passes
    pub fn normalize(&self, envelope: &ResultEnvelope) -> SearchCollections {
        SearchCollections {
            procurement_requests: self.procurement_requests(envelope),
            purchase_orders: self.purchase_orders(envelope),
            approvals: self.approvals(envelope),
            events: self.events(envelope),
        }
    }

    pub fn procurement_requests(&self, envelope: &ResultEnvelope) -> Vec<ProcurementRequest> {
        self.extract(envelope, IntentKind::PurchaseRequest)
    }

    pub fn purchase_orders(&self, envelope: &ResultEnvelope) -> Vec<PurchaseOrder> {
        self.extract(envelope, IntentKind::PurchaseOrder)
    }

    pub fn approvals(&self, envelope: &ResultEnvelope) -> Vec<Approval> {
        self.extract(envelope, IntentKind::Approval)
    }

    pub fn events(&self, envelope: &ResultEnvelope) -> Vec<Event> {
        self.extract(envelope, IntentKind::Event)
    }

    fn extract<T: Decode>(&self, envelope: &ResultEnvelope, kind: IntentKind) -> Vec<T> {
        let policy = self.policies.for_kind(kind);
        let mut entities = Vec::new();
        let mut dropped = 0usize;

        for data in envelope.payloads(kind) {
            for item in locate_items(kind, data) {
                match T::decode(item, policy) {
                    Ok(entity) => entities.push(entity),
                    Err(e) => {
                        dropped += 1;
                        debug!("Dropping {} item: {}", kind, e);
                    }
                }
            }
        }

        if dropped > 0 {
            debug!(
                "Normalized {} {} item(s), dropped {}",
                entities.len(),
                kind,
                dropped
            );
        }
        entities
    }
}

/// Raw items for `kind` inside one navigation payload
pub fn locate_items(kind: IntentKind, data: &Value) -> Vec<&Value> {
    match kind {
        IntentKind::PurchaseRequest => items(data.get(PURCHASE_REQUESTS_KEY)).iter().collect(),
        IntentKind::PurchaseOrder | IntentKind::Approval => {
            grouped_items(data, GROUPS_KEY, Some(GROUP_DATA_KEY))
        }
        IntentKind::Event => grouped_items(data, EVENT_GROUPS_KEY, None),
    }
}

fn items(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn grouped_items<'a>(data: &'a Value, groups_key: &str, inner_key: Option<&str>) -> Vec<&'a Value> {
    items(data.get(groups_key))
        .iter()
        .flat_map(|group| {
            let container = match inner_key {
                Some(key) => group.get(key),
                None => Some(group),
            };
            items(container.and_then(|c| c.get(RESPONSES_KEY)))
        })
        .collect()
}
