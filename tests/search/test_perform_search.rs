// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! End-to-end tests for SearchService::perform_search

use procure_search::search::{
    RequestStatus, SearchCollections, SearchConfig, SearchService, SearchSession, SearchSummary,
    TransportError,
};
use serde_json::json;
use std::sync::Arc;

use super::fixtures::{
    envelope, event_result, grouped_result, procurement_request, procurement_request_result,
    transport_returning, MockTransport,
};

fn service_with(transport: MockTransport) -> SearchService {
    SearchService::new(
        SearchConfig::default(),
        Arc::new(transport),
        Arc::new(SearchSession::default()),
    )
}

#[tokio::test]
async fn test_single_procurement_request() {
    let response = envelope(vec![procurement_request_result(vec![procurement_request(
        "PR-1",
    )])]);
    let service = service_with(transport_returning(Ok(response.clone())));

    service.perform_search("steel pipes", None).await;

    let session = service.session();
    let collections = session.collections().await;
    assert_eq!(collections.procurement_requests.len(), 1);
    assert_eq!(collections.procurement_requests[0].data.pr_no, "PR-1");

    let status = session.status().await;
    assert_eq!(status.status, RequestStatus::Success);
    assert_eq!(status.message.as_deref(), Some("Found 1 result(s)"));
    assert_eq!(status.data, Some(collections));
    assert_eq!(session.envelope().await, Some(response));
    assert_eq!(session.history().await, vec!["steel pipes".to_string()]);
}

#[tokio::test]
async fn test_transport_failure() {
    let service = service_with(transport_returning(Err(TransportError::Network(
        "network down".to_string(),
    ))));

    let summaries = service.perform_search("steel pipes", None).await;
    assert_eq!(summaries, SearchSummary::placeholders(None));

    let session = service.session();
    let status = session.status().await;
    assert_eq!(status.status, RequestStatus::Failed);
    assert_eq!(status.message.as_deref(), Some("network down"));
    assert!(session.summaries().await.is_empty());
    assert!(session.collections().await.procurement_requests.is_empty());
    // history is recorded even though the search failed
    assert_eq!(session.history().await, vec!["steel pipes".to_string()]);
}

#[tokio::test]
async fn test_failure_clears_every_collection() {
    let session = Arc::new(SearchSession::default());
    let populated = envelope(vec![
        procurement_request_result(vec![procurement_request("PR-1")]),
        grouped_result("purchase_order", vec![vec![json!({"po_number": "45001"})]]),
        grouped_result("approval", vec![vec![json!({"approval_id": "APR-1"})]]),
        event_result(vec![vec![json!({"event_id": "EV-1"})]]),
    ]);

    let ok = SearchService::new(
        SearchConfig::default(),
        Arc::new(transport_returning(Ok(populated))),
        session.clone(),
    );
    ok.perform_search("first", None).await;
    assert_eq!(session.collections().await.total(), 4);
    assert_eq!(
        session.status().await.message.as_deref(),
        Some("Found 4 result(s)")
    );

    let failing = SearchService::new(
        SearchConfig::default(),
        Arc::new(transport_returning(Err(TransportError::Timeout {
            timeout_ms: 10_000,
        }))),
        session.clone(),
    );
    failing.perform_search("second", None).await;

    assert_eq!(session.collections().await, SearchCollections::default());
    assert!(session.envelope().await.is_none());
    assert!(session.summaries().await.is_empty());
    let status = session.status().await;
    assert!(status.is_failed());
    assert_eq!(status.data, Some(SearchCollections::default()));
}

#[tokio::test]
async fn test_success_replaces_previous_results() {
    let session = Arc::new(SearchSession::default());
    let first = SearchService::new(
        SearchConfig::default(),
        Arc::new(transport_returning(Ok(envelope(vec![grouped_result(
            "purchase_order",
            vec![vec![json!({"po_number": "45001"}), json!({"po_number": "45002"})]],
        )])))),
        session.clone(),
    );
    first.perform_search("orders", None).await;
    assert_eq!(session.collections().await.purchase_orders.len(), 2);

    let second = SearchService::new(
        SearchConfig::default(),
        Arc::new(transport_returning(Ok(envelope(vec![])))),
        session.clone(),
    );
    second.perform_search("nothing", Some("po")).await;

    assert!(session.collections().await.is_empty());
    assert_eq!(
        session.status().await.message.as_deref(),
        Some("No results found")
    );
    assert!(session.summaries().await.iter().all(|s| s.kind == "po"));
}

#[tokio::test]
async fn test_whitespace_query_still_issues_request() {
    let mut transport = MockTransport::new();
    transport.expect_name().return_const("mock");
    transport
        .expect_send()
        .times(1)
        .withf(|request| request.body["query"] == "   ")
        .returning(|_| Ok(json!({"results": []})));
    let service = service_with(transport);

    let summaries = service.perform_search("   ", None).await;

    assert_eq!(summaries.len(), 2);
    assert!(service.session().history().await.is_empty());
    assert!(service.session().status().await.is_success());
}

#[tokio::test]
async fn test_request_carries_transport_policy() {
    let mut config = SearchConfig::default();
    config.caller_id = "buyer-portal".to_string();
    config.endpoint = "https://search.example.com/query".to_string();
    config.endpoint_override = true;

    let mut transport = MockTransport::new();
    transport.expect_name().return_const("mock");
    transport
        .expect_send()
        .times(1)
        .withf(|request| {
            request.retries == 3
                && request.timeout_ms == 10_000
                && request.skip_cache
                && request.override_flag
                && request.endpoint == "https://search.example.com/query"
                && request.body["user_id"] == "buyer-portal"
                && request.body["context"] == json!({})
        })
        .returning(|_| Ok(json!({})));

    let service = SearchService::new(
        config,
        Arc::new(transport),
        Arc::new(SearchSession::default()),
    );
    service.perform_search("pumps", None).await;
    assert!(service.session().status().await.is_success());
}

#[tokio::test]
async fn test_history_is_bounded_across_searches() {
    let service = service_with(transport_returning(Ok(envelope(vec![]))));
    for i in 0..12 {
        service.perform_search(&format!("query {}", i), None).await;
    }
    service.perform_search("query 11", None).await;

    let history = service.session().history().await;
    assert_eq!(history.len(), 10);
    assert_eq!(history[0], "query 11");
    assert_eq!(history[9], "query 2");
}
