//! Mission map drawings: layers and the shapes they own.

pub mod drawing;
mod layer;
mod styles;

pub use drawing::{
    Arrow, Circle, Drawing, DrawingCommon, FreeFormPolygon, Icon, LineDrawing, Oval, PolygonStyle,
    Rectangle, TextBox,
};
pub use layer::{IconOptions, Layer, LineOptions, ShapeOptions, TextBoxOptions};
pub use styles::{LineMode, LineStyle, PolygonMode, PrimitiveType};
