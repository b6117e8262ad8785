//! Typed field access on wire records.
//!
//! `require_*` fail with `MissingField` when the key is absent and with
//! `TypeMismatch` when it holds the wrong JSON kind. `optional_*` treat an
//! absent key and an explicit `null` alike.

use serde_json::Value;

use super::Record;
use crate::error::{CodecError, Result};

pub fn require_value<'a>(record: &'a Record, field: &str) -> Result<&'a Value> {
    record.get(field).ok_or_else(|| CodecError::missing(field))
}

pub fn as_record<'a>(field: &str, value: &'a Value) -> Result<&'a Record> {
    value
        .as_object()
        .ok_or_else(|| CodecError::mismatch(field, "mapping"))
}

pub fn require_record<'a>(record: &'a Record, field: &str) -> Result<&'a Record> {
    as_record(field, require_value(record, field)?)
}

pub fn require_bool(record: &Record, field: &str) -> Result<bool> {
    require_value(record, field)?
        .as_bool()
        .ok_or_else(|| CodecError::mismatch(field, "boolean"))
}

pub fn require_f64(record: &Record, field: &str) -> Result<f64> {
    require_value(record, field)?
        .as_f64()
        .ok_or_else(|| CodecError::mismatch(field, "number"))
}

pub fn require_i64(record: &Record, field: &str) -> Result<i64> {
    value_to_i64(field, require_value(record, field)?)
}

pub fn require_str<'a>(record: &'a Record, field: &str) -> Result<&'a str> {
    require_value(record, field)?
        .as_str()
        .ok_or_else(|| CodecError::mismatch(field, "string"))
}

fn present<'a>(record: &'a Record, field: &str) -> Option<&'a Value> {
    record.get(field).filter(|v| !v.is_null())
}

pub fn optional_bool(record: &Record, field: &str) -> Result<Option<bool>> {
    present(record, field)
        .map(|v| v.as_bool().ok_or_else(|| CodecError::mismatch(field, "boolean")))
        .transpose()
}

pub fn optional_f64(record: &Record, field: &str) -> Result<Option<f64>> {
    present(record, field)
        .map(|v| v.as_f64().ok_or_else(|| CodecError::mismatch(field, "number")))
        .transpose()
}

pub fn optional_i64(record: &Record, field: &str) -> Result<Option<i64>> {
    present(record, field)
        .map(|v| value_to_i64(field, v))
        .transpose()
}

pub fn optional_str<'a>(record: &'a Record, field: &str) -> Result<Option<&'a str>> {
    present(record, field)
        .map(|v| v.as_str().ok_or_else(|| CodecError::mismatch(field, "string")))
        .transpose()
}

/// Integers written by some tools come through as integral floats (`8.0`)
pub(crate) fn value_to_i64(field: &str, value: &Value) -> Result<i64> {
    if let Some(i) = value.as_i64() {
        return Ok(i);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(CodecError::mismatch(field, "integer")),
    }
}
