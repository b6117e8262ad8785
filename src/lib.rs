//! Codec between typed mission objects and the mission editor's nested
//! key/value records.
//!
//! Two families are covered:
//! - [`map`]: drawing layers and the eight drawing shapes they hold.
//! - [`unit`]: placeable units with vehicle, ship, static and heliport
//!   extensions.
//!
//! Records are `serde_json` values. Ordered collections are maps keyed by
//! 1-based numerals (see [`wire::encode_ordered`]).

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod map;
pub mod paths;
pub mod unit;
pub mod wire;

pub use config::{CodecConfig, EnumEncoding, WireOptions};
pub use error::{CodecError, Result};
pub use map::{Drawing, Layer};
pub use unit::{Unit, UnitKind};
