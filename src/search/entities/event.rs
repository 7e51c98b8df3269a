// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sourcing / auction event entity

use serde::{Deserialize, Serialize};

use crate::search::decode::{Decode, FieldReader};
use crate::search::types::DecodeError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub event_id: String,
    pub event_code: String,
    pub title: String,
    pub description: String,
    /// e.g. "rfq", "rfp", "auction"
    pub event_type: String,
    pub status: String,
    pub currency: String,
    pub start_time: String,
    pub end_time: String,
    pub created_at: String,
    pub participants_count: i64,
    pub created_by: EventUser,
    pub company: EventCompany,
    pub stages: Vec<EventStage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventCompany {
    pub id: String,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventStage {
    pub stage_no: i64,
    pub name: String,
    pub status: String,
    pub start_time: String,
    pub end_time: String,
}

impl Decode for Event {
    const ENTITY: &'static str = "event";

    fn decode_fields(f: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: f.string("id")?,
            event_id: f.string("event_id")?,
            event_code: f.string("event_code")?,
            title: f.string("title")?,
            description: f.string("description")?,
            event_type: f.string("event_type")?,
            status: f.string("status")?,
            currency: f.string("currency")?,
            start_time: f.string("start_time")?,
            end_time: f.string("end_time")?,
            created_at: f.string("created_at")?,
            participants_count: f.integer("participants_count")?,
            created_by: f.nested("created_by")?,
            company: f.nested("company")?,
            stages: f.list("stages")?,
        })
    }
}

impl Decode for EventUser {
    const ENTITY: &'static str = "event user";

    fn decode_fields(f: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: f.string("id")?,
            name: f.string("name")?,
            email: f.string("email")?,
        })
    }
}

impl Decode for EventCompany {
    const ENTITY: &'static str = "event company";

    fn decode_fields(f: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: f.string("id")?,
            name: f.string("name")?,
            code: f.string("code")?,
        })
    }
}

impl Decode for EventStage {
    const ENTITY: &'static str = "event stage";

    fn decode_fields(f: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            stage_no: f.integer("stage_no")?,
            name: f.string("name")?,
            status: f.string("status")?,
            start_time: f.string("start_time")?,
            end_time: f.string("end_time")?,
        })
    }
}
