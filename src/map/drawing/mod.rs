//! Drawing primitives and their tag-dispatched codec.
//!
//! Every drawing record carries `primitiveType`; polygon records add a
//! second discriminator, `polygonMode`. Decoding reads the shared fields once,
//! then dispatches on those tags. Unknown tags are an error, never an empty
//! result.

mod icon;
mod line;
mod polygon;
mod text_box;

#[cfg(test)]
mod tests;

pub use icon::Icon;
pub use line::LineDrawing;
pub use polygon::{Arrow, Circle, FreeFormPolygon, Oval, PolygonStyle, Rectangle};
pub use text_box::TextBox;

use bevy_color::Srgba;
use bevy_math::DVec2;
use serde_json::Value;

use super::styles::{PolygonMode, PrimitiveType};
use crate::color::{parse_color_string, to_color_string};
use crate::config::WireOptions;
use crate::error::Result;
use crate::wire::{self, Record, WireEnum};

/// Fields shared by every drawing
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingCommon {
    pub visible: bool,
    pub position: DVec2,
    pub name: String,
    pub color: Srgba,
    /// Name of the owning layer. Overwritten by `Layer::add_drawing`.
    pub layer_name: String,
}

impl DrawingCommon {
    pub fn new(position: DVec2, name: impl Into<String>, color: Srgba) -> Self {
        Self {
            visible: true,
            position,
            name: name.into(),
            color,
            layer_name: String::new(),
        }
    }

    fn read(record: &Record) -> Result<Self> {
        Ok(Self {
            visible: wire::require_bool(record, "visible")?,
            position: DVec2::new(
                wire::require_f64(record, "mapX")?,
                wire::require_f64(record, "mapY")?,
            ),
            name: wire::require_str(record, "name")?.to_string(),
            color: read_color(record, "colorString")?,
            layer_name: wire::require_str(record, "layerName")?.to_string(),
        })
    }

    fn write(&self, primitive: PrimitiveType, record: &mut Record, options: &WireOptions) {
        record.insert("primitiveType".into(), Value::from(primitive.tag()));
        record.insert("visible".into(), Value::Bool(self.visible));
        record.insert("mapX".into(), wire::number(self.position.x));
        record.insert("mapY".into(), wire::number(self.position.y));
        record.insert("name".into(), Value::from(self.name.as_str()));
        record.insert("colorString".into(), write_color(self.color, options));
        record.insert("layerName".into(), Value::from(self.layer_name.as_str()));
    }
}

pub(crate) fn read_color(record: &Record, field: &str) -> Result<Srgba> {
    parse_color_string(field, wire::require_str(record, field)?)
}

pub(crate) fn write_color(color: Srgba, options: &WireOptions) -> Value {
    Value::String(to_color_string(color, options.color_prefix))
}

/// One drawing primitive owned by a layer
#[derive(Debug, Clone, PartialEq)]
pub enum Drawing {
    Line(LineDrawing),
    Icon(Icon),
    Circle(Circle),
    Oval(Oval),
    Rectangle(Rectangle),
    FreeFormPolygon(FreeFormPolygon),
    Arrow(Arrow),
    TextBox(TextBox),
}

impl Drawing {
    pub fn common(&self) -> &DrawingCommon {
        match self {
            Drawing::Line(d) => &d.common,
            Drawing::Icon(d) => &d.common,
            Drawing::Circle(d) => &d.common,
            Drawing::Oval(d) => &d.common,
            Drawing::Rectangle(d) => &d.common,
            Drawing::FreeFormPolygon(d) => &d.common,
            Drawing::Arrow(d) => &d.common,
            Drawing::TextBox(d) => &d.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut DrawingCommon {
        match self {
            Drawing::Line(d) => &mut d.common,
            Drawing::Icon(d) => &mut d.common,
            Drawing::Circle(d) => &mut d.common,
            Drawing::Oval(d) => &mut d.common,
            Drawing::Rectangle(d) => &mut d.common,
            Drawing::FreeFormPolygon(d) => &mut d.common,
            Drawing::Arrow(d) => &mut d.common,
            Drawing::TextBox(d) => &mut d.common,
        }
    }

    pub fn name(&self) -> &str {
        &self.common().name
    }

    pub fn primitive_type(&self) -> PrimitiveType {
        match self {
            Drawing::Line(_) => PrimitiveType::Line,
            Drawing::Icon(_) => PrimitiveType::Icon,
            Drawing::TextBox(_) => PrimitiveType::TextBox,
            Drawing::Circle(_)
            | Drawing::Oval(_)
            | Drawing::Rectangle(_)
            | Drawing::FreeFormPolygon(_)
            | Drawing::Arrow(_) => PrimitiveType::Polygon,
        }
    }

    /// `None` for drawings that are not polygons
    pub fn polygon_mode(&self) -> Option<PolygonMode> {
        match self {
            Drawing::Circle(_) => Some(PolygonMode::Circle),
            Drawing::Oval(_) => Some(PolygonMode::Oval),
            Drawing::Rectangle(_) => Some(PolygonMode::Rectangle),
            Drawing::FreeFormPolygon(_) => Some(PolygonMode::Free),
            Drawing::Arrow(_) => Some(PolygonMode::Arrow),
            Drawing::Line(_) | Drawing::Icon(_) | Drawing::TextBox(_) => None,
        }
    }

    /// Decode a drawing record, dispatching on `primitiveType` and, for
    /// polygons, `polygonMode`.
    pub fn from_wire(value: &Value) -> Result<Self> {
        let record = wire::as_record("objects", value)?;
        let primitive =
            PrimitiveType::from_tag("primitiveType", wire::require_str(record, "primitiveType")?)?;
        let common = DrawingCommon::read(record)?;

        match primitive {
            PrimitiveType::Line => Ok(Drawing::Line(LineDrawing::read(common, record)?)),
            PrimitiveType::Icon => Ok(Drawing::Icon(Icon::read(common, record)?)),
            PrimitiveType::Polygon => polygon::read(common, record),
            PrimitiveType::TextBox => Ok(Drawing::TextBox(TextBox::read(common, record)?)),
        }
    }

    pub fn to_wire(&self) -> Value {
        self.to_wire_with(&WireOptions::default())
    }

    pub fn to_wire_with(&self, options: &WireOptions) -> Value {
        let mut record = Record::new();
        self.common()
            .write(self.primitive_type(), &mut record, options);

        match self {
            Drawing::Line(d) => d.write(&mut record, options),
            Drawing::Icon(d) => d.write(&mut record),
            Drawing::Circle(d) => d.write(&mut record, options),
            Drawing::Oval(d) => d.write(&mut record, options),
            Drawing::Rectangle(d) => d.write(&mut record, options),
            Drawing::FreeFormPolygon(d) => d.write(&mut record, options),
            Drawing::Arrow(d) => d.write(&mut record, options),
            Drawing::TextBox(d) => d.write(&mut record, options),
        }

        Value::Object(record)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Drawing {
                fn from(d: $ty) -> Self {
                    Drawing::$variant(d)
                }
            }
        )*
    };
}

impl_from_variant! {
    Line => LineDrawing,
    Icon => Icon,
    Circle => Circle,
    Oval => Oval,
    Rectangle => Rectangle,
    FreeFormPolygon => FreeFormPolygon,
    Arrow => Arrow,
    TextBox => TextBox,
}
