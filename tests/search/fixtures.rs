// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared envelope builders and transport mocks
#![allow(dead_code)]

use async_trait::async_trait;
use mockall::mock;
use procure_search::search::{SearchTransport, TransportError, TransportRequest};
use serde_json::{json, Value};

mock! {
    pub Transport {}

    #[async_trait]
    impl SearchTransport for Transport {
        async fn send(&self, request: TransportRequest) -> Result<Value, TransportError>;
        fn name(&self) -> &'static str;
    }
}

/// A transport mock that answers every request with `response`
pub fn transport_returning(response: Result<Value, TransportError>) -> MockTransport {
    let mut transport = MockTransport::new();
    transport.expect_name().return_const("mock");
    transport
        .expect_send()
        .returning(move |_| response.clone());
    transport
}

/// One intent-classified result with a successful navigation payload
pub fn intent_result(intent: &str, data: Value) -> Value {
    json!({
        "intent_classification": {
            "intent": intent,
            "status": "completed",
            "navigation_result": {"success": true, "data": data}
        },
        "raw_text": format!("classified as {}", intent)
    })
}

pub fn envelope(results: Vec<Value>) -> Value {
    json!({ "results": results })
}

pub fn procurement_request(pr_no: &str) -> Value {
    json!({
        "id": format!("pr-{}", pr_no.to_lowercase()),
        "data": {
            "prNo": pr_no,
            "requesterGroup": "Maintenance",
            "typeDescription": "Capex",
            "additionalFields": [{"key": "plant", "value": "Pune"}]
        },
        "createdAt": "2025-03-01T10:00:00Z",
        "status": "open",
        "inquiryNo": "INQ-100"
    })
}

pub fn procurement_request_result(items: Vec<Value>) -> Value {
    intent_result("purchase_request", json!({ "purchase_requests": items }))
}

pub fn grouped_result(intent: &str, groups: Vec<Vec<Value>>) -> Value {
    let groups: Vec<Value> = groups
        .into_iter()
        .map(|responses| json!({"data": {"responses": responses}}))
        .collect();
    intent_result(intent, json!({ "groups": groups }))
}

pub fn event_result(groups: Vec<Vec<Value>>) -> Value {
    let groups: Vec<Value> = groups
        .into_iter()
        .map(|responses| json!({"responses": responses}))
        .collect();
    intent_result("event", json!({ "event_groups": groups }))
}
