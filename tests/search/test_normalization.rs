// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Normalization of mixed-intent envelopes

use procure_search::search::{
    is_valid_procurement_request, DecodePolicy, ResponseNormalizer, ResultEnvelope,
};
use serde_json::json;

use super::fixtures::{
    envelope, event_result, grouped_result, intent_result, procurement_request,
    procurement_request_result,
};

#[test]
fn test_mixed_envelope() {
    let mut missing_pr_no = procurement_request("PR-2");
    missing_pr_no["data"].as_object_mut().unwrap().remove("prNo");

    let raw = envelope(vec![
        procurement_request_result(vec![procurement_request("PR-1"), missing_pr_no]),
        grouped_result(
            "purchase_order",
            vec![vec![json!({"po_number": "45001", "total_amount": 980.0})]],
        ),
        grouped_result(
            "approval",
            vec![vec![json!({"approval_id": "APR-1", "stage_no": 1})]],
        ),
        event_result(vec![vec![json!({
            "event_id": "EV-1",
            "created_by": {"name": "Raunak Arora"},
            "stages": [{"stage_no": 1, "name": "Technical", "status": "active"}]
        })]]),
    ]);

    let collections = ResponseNormalizer::default().normalize(&ResultEnvelope::from_value(&raw));

    assert_eq!(collections.procurement_requests.len(), 1);
    assert_eq!(collections.procurement_requests[0].data.pr_no, "PR-1");

    assert_eq!(collections.purchase_orders.len(), 1);
    assert_eq!(collections.purchase_orders[0].invoice_no, "");
    assert_eq!(collections.purchase_orders[0].total_amount, 980.0);

    assert_eq!(collections.approvals[0].approval_id, "APR-1");
    assert_eq!(collections.events[0].created_by.name, "Raunak Arora");
    assert_eq!(collections.events[0].stages[0].name, "Technical");
    assert_eq!(collections.total(), 4);
}

#[test]
fn test_failed_navigation_is_ignored() {
    let raw = json!({
        "results": [{
            "intent_classification": {
                "intent": "purchase_request",
                "status": "failed",
                "navigation_result": {
                    "success": false,
                    "data": {"purchase_requests": [procurement_request("PR-1")]}
                }
            },
            "raw_text": ""
        }]
    });
    let prs = ResponseNormalizer::default()
        .procurement_requests(&ResultEnvelope::from_value(&raw));
    assert!(prs.is_empty());
}

#[test]
fn test_untyped_status_and_trace_keep_results() {
    let mut null_status = procurement_request_result(vec![procurement_request("PR-1")]);
    null_status["intent_classification"]["status"] = json!(null);
    let mut object_trace = procurement_request_result(vec![procurement_request("PR-2")]);
    object_trace["raw_text"] = json!({"trace": 1});

    let raw = envelope(vec![null_status, object_trace]);
    let prs = ResponseNormalizer::default()
        .procurement_requests(&ResultEnvelope::from_value(&raw));
    let numbers: Vec<_> = prs.iter().map(|p| p.data.pr_no.as_str()).collect();
    assert_eq!(numbers, vec!["PR-1", "PR-2"]);
}

#[test]
fn test_no_matching_intent_yields_empty() {
    let raw = envelope(vec![intent_result("supplier", json!({"groups": []}))]);
    let env = ResultEnvelope::from_value(&raw);
    let normalizer = ResponseNormalizer::default();
    assert!(normalizer.normalize(&env).is_empty());
}

#[test]
fn test_order_follows_envelope() {
    let raw = envelope(vec![
        procurement_request_result(vec![procurement_request("PR-B")]),
        procurement_request_result(vec![
            procurement_request("PR-A"),
            procurement_request("PR-B"),
        ]),
    ]);
    let prs = ResponseNormalizer::default()
        .procurement_requests(&ResultEnvelope::from_value(&raw));
    let numbers: Vec<_> = prs.iter().map(|p| p.data.pr_no.clone()).collect();
    assert_eq!(numbers, vec!["PR-B", "PR-A", "PR-B"]);
}

#[test]
fn test_validator_agrees_with_strict_pass() {
    let candidates = vec![
        procurement_request("PR-1"),
        json!({"id": "x"}),
        json!("PR-1"),
    ];
    let raw = envelope(vec![procurement_request_result(candidates.clone())]);
    let prs = ResponseNormalizer::default()
        .procurement_requests(&ResultEnvelope::from_value(&raw));

    let valid = candidates
        .iter()
        .filter(|c| is_valid_procurement_request(c))
        .count();
    assert_eq!(prs.len(), valid);
    assert_eq!(DecodePolicy::default(), DecodePolicy::Lenient);
}
