use bevy_math::DVec2;
use serde_json::Value;

use super::DrawingCommon;
use crate::config::WireOptions;
use crate::error::Result;
use crate::map::styles::{LineMode, LineStyle};
use crate::wire::{self, Record, WireEnum};

/// Open or closed polyline. Points are relative to `common.position`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDrawing {
    pub common: DrawingCommon,
    pub closed: bool,
    pub line_thickness: i64,
    pub line_style: LineStyle,
    pub line_mode: LineMode,
    pub points: Vec<DVec2>,
}

impl LineDrawing {
    pub(super) fn read(common: DrawingCommon, record: &Record) -> Result<Self> {
        Ok(Self {
            common,
            closed: wire::require_bool(record, "closed")?,
            line_thickness: wire::require_i64(record, "thickness")?,
            line_style: LineStyle::from_wire("style", wire::require_value(record, "style")?)?,
            line_mode: LineMode::from_wire("lineMode", wire::require_value(record, "lineMode")?)?,
            points: wire::decode_points("points", wire::require_value(record, "points")?)?,
        })
    }

    pub(super) fn write(&self, record: &mut Record, options: &WireOptions) {
        record.insert("closed".into(), Value::Bool(self.closed));
        record.insert("thickness".into(), Value::from(self.line_thickness));
        record.insert("style".into(), self.line_style.to_wire(options.enum_encoding));
        record.insert("lineMode".into(), self.line_mode.to_wire(options.enum_encoding));
        record.insert("points".into(), wire::encode_points(&self.points));
    }
}
