//! Ordered-collection codec.
//!
//! Sequences travel as mappings whose keys are numerals. Order is the numeric
//! order of the keys, so `"10"` comes after `"9"`. Encoding always renumbers
//! densely from 1; gaps in a decoded source are not preserved.

use bevy_math::DVec2;
use serde_json::Value;

use super::fields::{as_record, require_f64};
use super::{Record, number};
use crate::error::{CodecError, Result};

/// Decode a numeral-keyed mapping into a sequence ordered by key value.
///
/// A JSON array is accepted as an already ordered sequence.
pub fn decode_ordered<T>(
    field: &str,
    value: &Value,
    mut decode: impl FnMut(&Value) -> Result<T>,
) -> Result<Vec<T>> {
    match value {
        Value::Array(items) => items.iter().map(decode).collect(),
        Value::Object(map) => {
            let mut entries = map
                .iter()
                .map(|(key, item)| {
                    key.trim()
                        .parse::<u64>()
                        .map(|index| (index, item))
                        .map_err(|_| CodecError::mismatch(field, "numeral-keyed mapping"))
                })
                .collect::<Result<Vec<_>>>()?;
            entries.sort_by_key(|(index, _)| *index);
            entries.into_iter().map(|(_, item)| decode(item)).collect()
        }
        _ => Err(CodecError::mismatch(field, "numeral-keyed mapping")),
    }
}

/// Encode a sequence as a mapping keyed `"1"..="N"`
pub fn encode_ordered<T>(items: &[T], mut encode: impl FnMut(&T) -> Value) -> Value {
    let map: Record = items
        .iter()
        .enumerate()
        .map(|(i, item)| ((i + 1).to_string(), encode(item)))
        .collect();
    Value::Object(map)
}

pub fn decode_points(field: &str, value: &Value) -> Result<Vec<DVec2>> {
    decode_ordered(field, value, |item| {
        let point = as_record(field, item)?;
        Ok(DVec2::new(require_f64(point, "x")?, require_f64(point, "y")?))
    })
}

pub fn encode_points(points: &[DVec2]) -> Value {
    encode_ordered(points, |p| {
        let mut point = Record::new();
        point.insert("x".to_string(), number(p.x));
        point.insert("y".to_string(), number(p.y));
        Value::Object(point)
    })
}
