// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Overlapping searches against one session

use async_trait::async_trait;
use procure_search::search::{
    SearchConfig, SearchService, SearchSession, SearchTransport, TransportError, TransportRequest,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Notify;

use super::fixtures::{envelope, procurement_request, procurement_request_result};

/// Holds requests for "slow" until released; answers everything else at once
struct GatedTransport {
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl SearchTransport for GatedTransport {
    async fn send(&self, request: TransportRequest) -> Result<Value, TransportError> {
        if request.body["query"] == "slow" {
            self.entered.notify_one();
            self.release.notified().await;
            return Ok(envelope(vec![procurement_request_result(vec![
                procurement_request("PR-SLOW"),
                procurement_request("PR-SLOW-2"),
            ])]));
        }
        Ok(envelope(vec![procurement_request_result(vec![
            procurement_request("PR-FAST"),
        ])]))
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let transport = Arc::new(GatedTransport {
        entered: Notify::new(),
        release: Notify::new(),
    });
    let service = Arc::new(SearchService::new(
        SearchConfig::default(),
        transport.clone(),
        Arc::new(SearchSession::default()),
    ));

    let slow = {
        let service = service.clone();
        tokio::spawn(async move { service.perform_search("slow", None).await })
    };
    transport.entered.notified().await;
    assert!(service.session().status().await.is_loading());

    service.perform_search("fast", None).await;
    let collections = service.session().collections().await;
    assert_eq!(collections.procurement_requests[0].data.pr_no, "PR-FAST");

    transport.release.notify_one();
    let summaries = slow.await.unwrap();
    assert_eq!(summaries.len(), 2);

    let status = service.session().status().await;
    assert!(status.is_success());
    assert_eq!(status.message.as_deref(), Some("Found 1 result(s)"));
    let collections = service.session().collections().await;
    assert_eq!(collections.procurement_requests.len(), 1);
    assert_eq!(collections.procurement_requests[0].data.pr_no, "PR-FAST");

    // both queries were recorded
    assert_eq!(
        service.session().history().await,
        vec!["fast".to_string(), "slow".to_string()]
    );
}
