// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Purchase order entity

use serde::{Deserialize, Serialize};

use crate::search::decode::{Decode, FieldReader};
use crate::search::types::DecodeError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub po_number: String,
    pub invoice_no: String,
    pub vendor_name: String,
    pub vendor_code: String,
    pub buyer_name: String,
    pub company_name: String,
    pub plant_name: String,
    pub currency: String,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub net_amount: f64,
    pub status: String,
    pub created_at: String,
    pub delivery_date: String,
    pub payment_terms: String,
    /// Originating procurement request number
    pub pr_no: String,
    pub cycle: Option<i64>,
    pub amendment_no: Option<i64>,
    pub status_history: Vec<StatusChange>,
}

/// One entry of a purchase order's status history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: String,
    pub changed_at: String,
    pub changed_by: String,
    pub remarks: String,
}

impl Decode for PurchaseOrder {
    const ENTITY: &'static str = "purchase order";

    fn decode_fields(f: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: f.string("id")?,
            po_number: f.string("po_number")?,
            invoice_no: f.string("invoice_no")?,
            vendor_name: f.string("vendor_name")?,
            vendor_code: f.string("vendor_code")?,
            buyer_name: f.string("buyer_name")?,
            company_name: f.string("company_name")?,
            plant_name: f.string("plant_name")?,
            currency: f.string("currency")?,
            total_amount: f.number("total_amount")?,
            tax_amount: f.number("tax_amount")?,
            net_amount: f.number("net_amount")?,
            status: f.string("status")?,
            created_at: f.string("created_at")?,
            delivery_date: f.string("delivery_date")?,
            payment_terms: f.string("payment_terms")?,
            pr_no: f.string("pr_no")?,
            cycle: f.opt_integer("cycle")?,
            amendment_no: f.opt_integer("amendment_no")?,
            status_history: f.list("status_history")?,
        })
    }
}

impl Decode for StatusChange {
    const ENTITY: &'static str = "status change";

    fn decode_fields(f: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            status: f.string("status")?,
            changed_at: f.string("changed_at")?,
            changed_by: f.string("changed_by")?,
            remarks: f.string("remarks")?,
        })
    }
}
