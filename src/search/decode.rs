// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Schema-driven decoding of untyped JSON payloads
//!
//! Every entity kind implements [`Decode`] once. The caller picks a
//! [`DecodePolicy`]: `Strict` rejects a payload on the first missing or
//! mistyped field, `Lenient` substitutes a default for it instead.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::DecodeError;

/// How missing or mistyped fields are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Reject the whole payload
    Strict,
    /// Substitute a default value for the field
    #[default]
    Lenient,
}

/// A typed entity that can be built from an untyped payload
pub trait Decode: Sized {
    /// Human-readable entity name used in errors
    const ENTITY: &'static str;

    /// Build the entity from a field reader
    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError>;

    /// Decode `value` under `policy`
    fn decode(value: &Value, policy: DecodePolicy) -> Result<Self, DecodeError> {
        let reader = FieldReader::root(Self::ENTITY, value, policy)?;
        Self::decode_fields(&reader)
    }
}

/// Policy-aware accessor over a JSON object
///
/// In lenient mode a reader may wrap a non-object, in which case every
/// accessor yields its default.
#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    fields: Option<&'a Map<String, Value>>,
    policy: DecodePolicy,
    prefix: String,
}

impl<'a> FieldReader<'a> {
    /// Reader over a top-level payload
    pub fn root(
        entity: &'static str,
        value: &'a Value,
        policy: DecodePolicy,
    ) -> Result<Self, DecodeError> {
        match (value.as_object(), policy) {
            (Some(map), _) => Ok(Self::over(Some(map), policy, String::new())),
            (None, DecodePolicy::Lenient) => Ok(Self::over(None, policy, String::new())),
            (None, DecodePolicy::Strict) => Err(DecodeError::NotAnObject { entity }),
        }
    }

    fn over(fields: Option<&'a Map<String, Value>>, policy: DecodePolicy, prefix: String) -> Self {
        Self {
            fields,
            policy,
            prefix,
        }
    }

    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    /// Raw value of `key`, treating JSON null as absent
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|fields| fields.get(key))
            .filter(|v| !v.is_null())
    }

    fn path(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn reject<T>(&self, key: &str, expected: &'static str, default: T) -> Result<T, DecodeError> {
        match self.policy {
            DecodePolicy::Lenient => Ok(default),
            DecodePolicy::Strict => match self.raw(key) {
                None => Err(DecodeError::MissingField {
                    field: self.path(key),
                }),
                Some(_) => Err(DecodeError::WrongType {
                    field: self.path(key),
                    expected,
                }),
            },
        }
    }

    pub fn string(&self, key: &str) -> Result<String, DecodeError> {
        match self.raw(key) {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => self.reject(key, "string", String::new()),
        }
    }

    /// Nullable string; only a present value of the wrong type is an error
    pub fn opt_string(&self, key: &str) -> Result<Option<String>, DecodeError> {
        match self.raw(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => self.reject(key, "string", None),
        }
    }

    /// Floating point number; lenient mode also accepts numeric strings
    pub fn number(&self, key: &str) -> Result<f64, DecodeError> {
        match self.raw(key) {
            Some(Value::Number(n)) => Ok(n.as_f64().unwrap_or_default()),
            Some(Value::String(s)) if self.policy == DecodePolicy::Lenient => {
                Ok(s.trim().parse().unwrap_or_default())
            }
            _ => self.reject(key, "number", 0.0),
        }
    }

    pub fn integer(&self, key: &str) -> Result<i64, DecodeError> {
        Ok(self.opt_integer(key)?.unwrap_or_default())
    }

    /// Nullable integer; lenient mode also accepts numeric strings
    ///
    /// In lenient mode a fractional value is rounded to the nearest integer
    /// and a value outside the `i64` range becomes `None`.
    pub fn opt_integer(&self, key: &str) -> Result<Option<i64>, DecodeError> {
        match self.raw(key) {
            None => Ok(None),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => Ok(Some(i)),
                None => self.reject(key, "integer", n.as_f64().and_then(round_to_i64)),
            },
            Some(Value::String(s)) if self.policy == DecodePolicy::Lenient => {
                let s = s.trim();
                Ok(s.parse()
                    .ok()
                    .or_else(|| s.parse().ok().and_then(round_to_i64)))
            }
            Some(_) => self.reject(key, "integer", None),
        }
    }

    pub fn boolean(&self, key: &str) -> Result<bool, DecodeError> {
        match self.raw(key) {
            Some(Value::Bool(b)) => Ok(*b),
            _ => self.reject(key, "boolean", false),
        }
    }

    /// Any JSON value, `Value::Null` when absent
    pub fn value(&self, key: &str) -> Value {
        self.raw(key).cloned().unwrap_or(Value::Null)
    }

    /// Reader over the nested object at `key`
    pub fn object(&self, key: &str) -> Result<FieldReader<'a>, DecodeError> {
        let prefix = format!("{}.", self.path(key));
        match self.raw(key) {
            Some(Value::Object(map)) => Ok(Self::over(Some(map), self.policy, prefix)),
            _ => self.reject(key, "object", Self::over(None, self.policy, prefix.clone())),
        }
    }

    pub fn array(&self, key: &str) -> Result<&'a [Value], DecodeError> {
        match self.raw(key) {
            Some(Value::Array(items)) => Ok(items.as_slice()),
            _ => self.reject(key, "array", &[][..]),
        }
    }

    /// Decode the nested object at `key` as `T`
    pub fn nested<T: Decode>(&self, key: &str) -> Result<T, DecodeError> {
        T::decode_fields(&self.object(key)?)
    }

    /// Decode every element of the array at `key` under this reader's policy
    pub fn list<T: Decode>(&self, key: &str) -> Result<Vec<T>, DecodeError> {
        self.decode_items(key, self.policy)
    }

    /// Like [`FieldReader::list`], but elements are always default-filled
    ///
    /// Only the array itself is subject to this reader's policy.
    pub fn list_lenient<T: Decode>(&self, key: &str) -> Result<Vec<T>, DecodeError> {
        self.decode_items(key, DecodePolicy::Lenient)
    }

    fn decode_items<T: Decode>(
        &self,
        key: &str,
        policy: DecodePolicy,
    ) -> Result<Vec<T>, DecodeError> {
        self.array(key)?
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let prefix = format!("{}[{}].", self.path(key), i);
                match (item.as_object(), policy) {
                    (Some(map), _) => T::decode_fields(&Self::over(Some(map), policy, prefix)),
                    (None, DecodePolicy::Lenient) => {
                        T::decode_fields(&Self::over(None, policy, prefix))
                    }
                    (None, DecodePolicy::Strict) => Err(DecodeError::WrongType {
                        field: format!("{}[{}]", self.path(key), i),
                        expected: "object",
                    }),
                }
            })
            .collect()
    }
}

fn round_to_i64(value: f64) -> Option<i64> {
    // i64::MAX is not representable as f64; the bound is exclusive
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let rounded = value.round();
    (rounded.is_finite() && rounded >= -LIMIT && rounded < LIMIT).then_some(rounded as i64)
}
