// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Intent-tagged result envelope returned by the search backend

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::types::IntentKind;

/// Envelope of intent-classified results
///
/// `results` is `None` when the backend omitted it or sent something other
/// than a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultEnvelope {
    pub results: Option<Vec<IntentResult>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntentResult {
    pub intent_classification: IntentClassification,
    /// Trace of the backend's raw reasoning, kept as sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<Value>,
}

/// Only `intent` and `navigation_result` gate extraction. `status` is
/// carried through untyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntentClassification {
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    pub navigation_result: Option<NavigationResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NavigationResult {
    pub success: bool,
    pub data: Option<Value>,
}

impl ResultEnvelope {
    /// Parse an envelope from an untyped response body
    ///
    /// Entries that are not objects are skipped; the rest keep their order.
    /// Fields inside an entry are read leniently, so a mistyped field only
    /// affects that field.
    pub fn from_value(value: &Value) -> Self {
        let results = value
            .get("results")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| match item.as_object() {
                        Some(entry) => Some(IntentResult::from_entry(entry)),
                        None => {
                            debug!("Skipping non-object envelope result {}", i);
                            None
                        }
                    })
                    .collect()
            });

        Self { results }
    }

    /// Data payloads of every trusted result tagged with `kind`
    pub fn payloads(&self, kind: IntentKind) -> impl Iterator<Item = &Value> + '_ {
        self.results
            .iter()
            .flatten()
            .filter_map(move |result| result.payload_for(kind))
    }

    pub fn len(&self) -> usize {
        self.results.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntentResult {
    fn from_entry(entry: &Map<String, Value>) -> Self {
        let classification = entry
            .get("intent_classification")
            .and_then(Value::as_object);
        let field = |key: &str| classification.and_then(|c| c.get(key));

        let navigation_result = field("navigation_result")
            .and_then(Value::as_object)
            .map(|nav| NavigationResult {
                success: nav.get("success").and_then(Value::as_bool).unwrap_or(false),
                data: present(nav.get("data")),
            });

        Self {
            intent_classification: IntentClassification {
                intent: field("intent")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                status: present(field("status")),
                navigation_result,
            },
            raw_text: present(entry.get("raw_text")),
        }
    }

    /// Recognized intent kind, if any
    pub fn kind(&self) -> Option<IntentKind> {
        self.intent_classification.intent.parse().ok()
    }

    /// The navigation payload, if this result is tagged `kind`, reports
    /// success and carries non-null data
    pub fn payload_for(&self, kind: IntentKind) -> Option<&Value> {
        if self.kind() != Some(kind) {
            return None;
        }
        let navigation = self.intent_classification.navigation_result.as_ref()?;
        if !navigation.success {
            return None;
        }
        navigation.data.as_ref().filter(|data| !data.is_null())
    }
}

fn present(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| !v.is_null()).cloned()
}
