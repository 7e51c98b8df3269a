// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Autocomplete suggestions shown under the search box
//!
//! A catalog of suggested actions and related documents, filtered by the
//! query being typed. A blank query returns the whole catalog. Otherwise an
//! item is kept when every whitespace-separated term of the query appears
//! in one of its text fields, ignoring case.

use serde::{Deserialize, Serialize};

/// An action the user can jump to from the search box
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedAction {
    pub id: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_link: Option<String>,
}

/// A document attached to a procurement record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedDocument {
    pub id: String,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Document type such as `pdf` or `excel`
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteData {
    #[serde(default)]
    pub suggested_actions: Vec<SuggestedAction>,
    #[serde(default)]
    pub related_documents: Vec<RelatedDocument>,
}

impl AutocompleteData {
    pub fn len(&self) -> usize {
        self.suggested_actions.len() + self.related_documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Source of autocomplete suggestions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutocompleteCatalog {
    data: AutocompleteData,
}

impl AutocompleteCatalog {
    pub fn new(data: AutocompleteData) -> Self {
        Self { data }
    }

    /// Parse a catalog from JSON in the `{suggestedActions, relatedDocuments}` shape
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    /// Built-in catalog used when none is configured
    pub fn sample() -> Self {
        const RFX: &str = "RFX 1234";
        const LINK: &str = "10083-WELDING EQUIPMENT & ACCESSORIES | Raunak Arora";

        let action = |description: &str, action: &str| SuggestedAction {
            id: RFX.to_string(),
            description: description.to_string(),
            action: Some(action.to_string()),
            action_link: Some(LINK.to_string()),
        };
        let document = |filename: &str, kind: &str| RelatedDocument {
            id: RFX.to_string(),
            filename: filename.to_string(),
            url: Some(format!("/documents/{}", filename)),
            kind: Some(kind.to_string()),
        };

        Self::new(AutocompleteData {
            suggested_actions: vec![
                action("Evaluate Commercials", "evaluate_commercials"),
                action("Extend time in RFP", "extend_rfp_time"),
                action("Extend time in RFQ", "extend_rfq_time"),
                action("Convert RFQ to Auction", "convert_rfq_to_auction"),
            ],
            related_documents: vec![
                document("Invoice_RFX_1234.pdf", "pdf"),
                document("Terms&Conditions_RFX_1234.pdf", "pdf"),
                document("POO.xlsx", "excel"),
            ],
        })
    }

    pub fn data(&self) -> &AutocompleteData {
        &self.data
    }

    /// Suggestions matching `query`
    pub fn suggest(&self, query: &str) -> AutocompleteData {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if terms.is_empty() {
            return self.data.clone();
        }

        AutocompleteData {
            suggested_actions: self
                .data
                .suggested_actions
                .iter()
                .filter(|a| {
                    matches_all(
                        &terms,
                        [
                            Some(a.id.as_str()),
                            Some(a.description.as_str()),
                            a.action.as_deref(),
                            a.action_link.as_deref(),
                        ],
                    )
                })
                .cloned()
                .collect(),
            related_documents: self
                .data
                .related_documents
                .iter()
                .filter(|d| {
                    matches_all(
                        &terms,
                        [
                            Some(d.id.as_str()),
                            Some(d.filename.as_str()),
                            d.kind.as_deref(),
                        ],
                    )
                })
                .cloned()
                .collect(),
        }
    }
}

fn matches_all<const N: usize>(terms: &[String], fields: [Option<&str>; N]) -> bool {
    let haystack: Vec<String> = fields.iter().flatten().map(|f| f.to_lowercase()).collect();
    terms
        .iter()
        .all(|term| haystack.iter().any(|field| field.contains(term.as_str())))
}
