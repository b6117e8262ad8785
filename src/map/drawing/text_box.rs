use bevy_color::Srgba;
use serde_json::Value;

use super::{DrawingCommon, read_color, write_color};
use crate::config::WireOptions;
use crate::error::Result;
use crate::wire::{self, Record};

/// Framed text label. `common.color` is the text color, `fill` the background.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub common: DrawingCommon,
    pub text: String,
    pub font_size: i64,
    pub font: String,
    pub border_thickness: i64,
    pub fill: Srgba,
    pub angle: f64,
}

impl TextBox {
    pub(super) fn read(common: DrawingCommon, record: &Record) -> Result<Self> {
        Ok(Self {
            common,
            text: wire::require_str(record, "text")?.to_string(),
            font_size: wire::require_i64(record, "fontSize")?,
            font: wire::require_str(record, "font")?.to_string(),
            border_thickness: wire::require_i64(record, "borderThickness")?,
            fill: read_color(record, "fillColorString")?,
            angle: wire::require_f64(record, "angle")?,
        })
    }

    pub(super) fn write(&self, record: &mut Record, options: &WireOptions) {
        record.insert("text".into(), Value::from(self.text.as_str()));
        record.insert("fontSize".into(), Value::from(self.font_size));
        record.insert("font".into(), Value::from(self.font.as_str()));
        record.insert("borderThickness".into(), Value::from(self.border_thickness));
        record.insert("fillColorString".into(), write_color(self.fill, options));
        record.insert("angle".into(), wire::number(self.angle));
    }
}
