// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Procurement (purchase) request entity

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::search::decode::{Decode, FieldReader};
use crate::search::types::DecodeError;

/// A procurement request raised by a requester group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementRequest {
    pub id: String,
    pub data: ProcurementRequestData,
    pub created_at: String,
    pub status: String,
    /// Linked inquiry number
    pub inquiry_no: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementRequestData {
    pub pr_no: String,
    pub requester_group: String,
    pub type_description: String,
    pub additional_fields: Vec<AdditionalField>,
}

/// Free-form key/value attribute attached to a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalField {
    pub key: String,
    pub value: Value,
}

impl Decode for ProcurementRequest {
    const ENTITY: &'static str = "procurement request";

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: fields.string("id")?,
            data: fields.nested("data")?,
            created_at: fields.string("createdAt")?,
            status: fields.string("status")?,
            inquiry_no: fields.string("inquiryNo")?,
        })
    }
}

impl Decode for ProcurementRequestData {
    const ENTITY: &'static str = "procurement request data";

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            pr_no: fields.string("prNo")?,
            requester_group: fields.string("requesterGroup")?,
            type_description: fields.string("typeDescription")?,
            // only the list itself is shape-checked
            additional_fields: fields.list_lenient("additionalFields")?,
        })
    }
}

impl Decode for AdditionalField {
    const ENTITY: &'static str = "additional field";

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            key: fields.string("key")?,
            value: fields.value("value"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::decode::DecodePolicy;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": "64f0c1",
            "data": {
                "prNo": "PR-1",
                "requesterGroup": "Maintenance",
                "typeDescription": "Capex",
                "additionalFields": [
                    {"key": "plant", "value": "Pune"},
                    {"key": "qty", "value": 40}
                ]
            },
            "createdAt": "2025-03-01T10:00:00Z",
            "status": "open",
            "inquiryNo": "INQ-9"
        })
    }

    #[test]
    fn test_decode_strict() {
        let pr = ProcurementRequest::decode(&sample(), DecodePolicy::Strict).unwrap();
        assert_eq!(pr.data.pr_no, "PR-1");
        assert_eq!(pr.data.additional_fields.len(), 2);
        assert_eq!(pr.data.additional_fields[1].value, json!(40));
        assert_eq!(pr.inquiry_no, "INQ-9");
    }

    #[test]
    fn test_strict_rejects_missing_pr_no() {
        let mut value = sample();
        value["data"].as_object_mut().unwrap().remove("prNo");
        let err = ProcurementRequest::decode(&value, DecodePolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField {
                field: "data.prNo".to_string()
            }
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let pr = ProcurementRequest::decode(&sample(), DecodePolicy::Strict).unwrap();
        let json = serde_json::to_value(&pr).unwrap();
        assert_eq!(json["data"]["prNo"], "PR-1");
        assert_eq!(json["createdAt"], "2025-03-01T10:00:00Z");
    }
}
