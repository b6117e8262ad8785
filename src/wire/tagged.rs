//! Closed string-valued enumerations on the wire.

use serde_json::Value;

use super::fields::value_to_i64;
use crate::config::EnumEncoding;
use crate::error::{CodecError, Result};

/// An enumeration stored as a string tag, or as its 0-based ordinal in `ALL`.
pub trait WireEnum: Copy + PartialEq + 'static {
    /// Every variant, in declaration order
    const ALL: &'static [Self];

    fn tag(self) -> &'static str;

    fn from_tag(field: &str, tag: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.tag() == tag)
            .ok_or_else(|| CodecError::unknown_tag(field, tag))
    }

    fn ordinal(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    fn from_wire(field: &str, value: &Value) -> Result<Self> {
        match value {
            Value::String(tag) => Self::from_tag(field, tag),
            Value::Number(_) => {
                let index = value_to_i64(field, value)?;
                usize::try_from(index)
                    .ok()
                    .and_then(|i| Self::ALL.get(i).copied())
                    .ok_or_else(|| CodecError::unknown_tag(field, index.to_string()))
            }
            _ => Err(CodecError::mismatch(field, "string tag or ordinal")),
        }
    }

    fn to_wire(self, encoding: EnumEncoding) -> Value {
        match encoding {
            EnumEncoding::Names => Value::String(self.tag().to_string()),
            EnumEncoding::Ordinals => Value::from(self.ordinal() as u64),
        }
    }
}
