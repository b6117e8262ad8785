//! Centralized constants used across the codec.
//!
//! Defaults the mission format assumes when a field is absent, plus the
//! values the authoring helpers fill in.

/// Ship radio frequency in Hz when the record carries none
pub const DEFAULT_SHIP_FREQUENCY: i64 = 127_500_000;

/// Heliport radio frequency in MHz when the record carries none
pub const DEFAULT_HELIPORT_FREQUENCY: f64 = 127.5;

/// Heliport callsign assigned by the authoring constructors.
/// Decoding a record without one yields 0 instead.
pub const DEFAULT_HELIPORT_CALLSIGN: i64 = 1;

/// Decimal digits kept when a heading is written back in radians
pub const HEADING_DECIMALS: i32 = 13;

/// Mass given to cargo-capable statics built from a type descriptor
pub const CARGO_MASS: f64 = 1000.0;

/// Type tag used by vehicles created without one
pub const DEFAULT_VEHICLE_TYPE: &str = "Sandbox";

/// Line thickness used by the layer authoring helpers
pub const DEFAULT_LINE_THICKNESS: i64 = 8;

/// Font used by text boxes created through the authoring helpers
pub const DEFAULT_FONT: &str = "DejaVuLGCSansCondensed.ttf";

pub const DEFAULT_FONT_SIZE: i64 = 20;

pub const DEFAULT_BORDER_THICKNESS: i64 = 2;

/// Alpha of the translucent fill used by authored shapes and text boxes
pub const DEFAULT_FILL_ALPHA: u8 = 60;
