// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shape predicates for untrusted payloads
//!
//! Each predicate runs the entity's decoder under the strict policy, so a
//! payload passes exactly when strict decoding would accept it.

use serde_json::Value;

use super::decode::{Decode, DecodePolicy};
use super::entities::ProcurementRequest;

/// True if `value` has the full shape of a procurement request
pub fn is_valid_procurement_request(value: &Value) -> bool {
    is_valid::<ProcurementRequest>(value)
}

/// True if `value` decodes as `T` with no missing or mistyped field
pub fn is_valid<T: Decode>(value: &Value) -> bool {
    T::decode(value, DecodePolicy::Strict).is_ok()
}
