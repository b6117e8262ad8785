//! Wire representation of mission data.
//!
//! The mission format is a nested string-keyed mapping. Here it is modeled
//! as JSON: a record is a [`serde_json::Map`], and sequences are stored as
//! sub-mappings keyed by ascending numerals (`"1"`, `"2"`, ...).
//!
//! ## Module Structure
//!
//! - [`fields`] - Typed getters that turn absent or mistyped keys into errors
//! - [`ordered`] - Ordered-collection codec (sequence <-> numeral-keyed map)
//! - [`tagged`] - String-tagged enumerations

mod fields;
mod ordered;
mod tagged;


use serde_json::{Map, Value};

/// A single wire record
pub type Record = Map<String, Value>;

pub use fields::{
    as_record, optional_bool, optional_f64, optional_i64, optional_str, require_bool,
    require_f64, require_i64, require_record, require_str, require_value,
};
pub use ordered::{decode_ordered, decode_points, encode_ordered, encode_points};
pub use tagged::WireEnum;

/// Encode an `f64` as a JSON number. Non-finite values have no JSON form and
/// become `null`.
pub fn number(value: f64) -> Value {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
