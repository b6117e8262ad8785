//! Polygon drawings: every shape sharing `primitiveType = "Polygon"`.

use bevy_color::Srgba;
use bevy_math::DVec2;
use serde_json::Value;

use super::{Drawing, DrawingCommon, read_color, write_color};
use crate::config::WireOptions;
use crate::error::Result;
use crate::map::styles::{LineStyle, PolygonMode};
use crate::wire::{self, Record, WireEnum};

/// Outline and fill shared by all polygon shapes
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonStyle {
    pub fill: Srgba,
    pub line_thickness: i64,
    pub line_style: LineStyle,
}

impl PolygonStyle {
    fn read(record: &Record) -> Result<Self> {
        Ok(Self {
            fill: read_color(record, "fillColorString")?,
            line_thickness: wire::require_i64(record, "thickness")?,
            line_style: LineStyle::from_wire("style", wire::require_value(record, "style")?)?,
        })
    }

    fn write(&self, mode: PolygonMode, record: &mut Record, options: &WireOptions) {
        record.insert("polygonMode".into(), mode.to_wire(options.enum_encoding));
        record.insert("fillColorString".into(), write_color(self.fill, options));
        record.insert("thickness".into(), Value::from(self.line_thickness));
        record.insert("style".into(), self.line_style.to_wire(options.enum_encoding));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub common: DrawingCommon,
    pub style: PolygonStyle,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Oval {
    pub common: DrawingCommon,
    pub style: PolygonStyle,
    pub radius1: f64,
    pub radius2: f64,
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub common: DrawingCommon,
    pub style: PolygonStyle,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FreeFormPolygon {
    pub common: DrawingCommon,
    pub style: PolygonStyle,
    pub points: Vec<DVec2>,
}

/// Arrow shape. The outline points come from the mission editor; their
/// layout is opaque here and carried through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub common: DrawingCommon,
    pub style: PolygonStyle,
    pub length: f64,
    pub angle: f64,
    pub points: Vec<DVec2>,
}

/// Second-level dispatch on `polygonMode`
pub(super) fn read(common: DrawingCommon, record: &Record) -> Result<Drawing> {
    let mode = PolygonMode::from_wire("polygonMode", wire::require_value(record, "polygonMode")?)?;
    let style = PolygonStyle::read(record)?;

    let drawing = match mode {
        PolygonMode::Circle => Drawing::Circle(Circle {
            common,
            style,
            radius: wire::require_f64(record, "radius")?,
        }),
        PolygonMode::Oval => Drawing::Oval(Oval {
            common,
            style,
            radius1: wire::require_f64(record, "r1")?,
            radius2: wire::require_f64(record, "r2")?,
            angle: wire::require_f64(record, "angle")?,
        }),
        PolygonMode::Rectangle => Drawing::Rectangle(Rectangle {
            common,
            style,
            width: wire::require_f64(record, "width")?,
            height: wire::require_f64(record, "height")?,
            angle: wire::require_f64(record, "angle")?,
        }),
        PolygonMode::Free => Drawing::FreeFormPolygon(FreeFormPolygon {
            common,
            style,
            points: wire::decode_points("points", wire::require_value(record, "points")?)?,
        }),
        PolygonMode::Arrow => Drawing::Arrow(Arrow {
            common,
            style,
            length: wire::require_f64(record, "length")?,
            angle: wire::require_f64(record, "angle")?,
            points: wire::decode_points("points", wire::require_value(record, "points")?)?,
        }),
    };

    Ok(drawing)
}

impl Circle {
    pub(super) fn write(&self, record: &mut Record, options: &WireOptions) {
        self.style.write(PolygonMode::Circle, record, options);
        record.insert("radius".into(), wire::number(self.radius));
    }
}

impl Oval {
    pub(super) fn write(&self, record: &mut Record, options: &WireOptions) {
        self.style.write(PolygonMode::Oval, record, options);
        record.insert("r1".into(), wire::number(self.radius1));
        record.insert("r2".into(), wire::number(self.radius2));
        record.insert("angle".into(), wire::number(self.angle));
    }
}

impl Rectangle {
    pub(super) fn write(&self, record: &mut Record, options: &WireOptions) {
        self.style.write(PolygonMode::Rectangle, record, options);
        record.insert("width".into(), wire::number(self.width));
        record.insert("height".into(), wire::number(self.height));
        record.insert("angle".into(), wire::number(self.angle));
    }
}

impl FreeFormPolygon {
    pub(super) fn write(&self, record: &mut Record, options: &WireOptions) {
        self.style.write(PolygonMode::Free, record, options);
        record.insert("points".into(), wire::encode_points(&self.points));
    }
}

impl Arrow {
    pub(super) fn write(&self, record: &mut Record, options: &WireOptions) {
        self.style.write(PolygonMode::Arrow, record, options);
        record.insert("length".into(), wire::number(self.length));
        record.insert("angle".into(), wire::number(self.angle));
        record.insert("points".into(), wire::encode_points(&self.points));
    }
}
