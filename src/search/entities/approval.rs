// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Approval workflow entity

use serde::{Deserialize, Serialize};

use crate::search::decode::{Decode, FieldReader};
use crate::search::types::DecodeError;

/// An item waiting in (or finished with) an approval workflow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub id: String,
    pub approval_id: String,
    pub document_type: String,
    pub document_no: String,
    pub title: String,
    pub description: String,

    pub requester_name: String,
    pub requester_email: String,
    pub requester_department: String,

    pub current_approver: String,
    pub approver_email: String,
    pub approver_role: String,

    pub delegated_to: Option<String>,
    pub delegated_by: Option<String>,
    pub delegation_reason: String,
    pub is_delegated: bool,

    pub stage: String,
    pub stage_no: i64,
    pub total_stages: i64,
    pub status: String,
    pub priority: String,

    pub amount: f64,
    pub currency: String,
    pub quantity: f64,
    pub unit_of_measure: String,
    pub item_code: String,
    pub item_description: String,

    pub vendor_name: String,
    pub plant_name: String,
    pub company_name: String,

    pub created_at: String,
    pub updated_at: String,
    pub due_date: String,
    pub approved_at: Option<String>,
    pub remarks: String,
}

impl Decode for Approval {
    const ENTITY: &'static str = "approval";

    fn decode_fields(f: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: f.string("id")?,
            approval_id: f.string("approval_id")?,
            document_type: f.string("document_type")?,
            document_no: f.string("document_no")?,
            title: f.string("title")?,
            description: f.string("description")?,
            requester_name: f.string("requester_name")?,
            requester_email: f.string("requester_email")?,
            requester_department: f.string("requester_department")?,
            current_approver: f.string("current_approver")?,
            approver_email: f.string("approver_email")?,
            approver_role: f.string("approver_role")?,
            delegated_to: f.opt_string("delegated_to")?,
            delegated_by: f.opt_string("delegated_by")?,
            delegation_reason: f.string("delegation_reason")?,
            is_delegated: f.boolean("is_delegated")?,
            stage: f.string("stage")?,
            stage_no: f.integer("stage_no")?,
            total_stages: f.integer("total_stages")?,
            status: f.string("status")?,
            priority: f.string("priority")?,
            amount: f.number("amount")?,
            currency: f.string("currency")?,
            quantity: f.number("quantity")?,
            unit_of_measure: f.string("unit_of_measure")?,
            item_code: f.string("item_code")?,
            item_description: f.string("item_description")?,
            vendor_name: f.string("vendor_name")?,
            plant_name: f.string("plant_name")?,
            company_name: f.string("company_name")?,
            created_at: f.string("created_at")?,
            updated_at: f.string("updated_at")?,
            due_date: f.string("due_date")?,
            approved_at: f.opt_string("approved_at")?,
            remarks: f.string("remarks")?,
        })
    }
}
