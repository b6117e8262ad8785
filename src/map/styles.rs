use serde::{Deserialize, Serialize};

use crate::wire::WireEnum;

/// Stroke pattern of lines and shape outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dot,
    Dot2,
    Dash,
    Cross,
    StrongArrow,
    WireFence,
    Boundary1,
    Boundary2,
    Boundary3,
    Boundary4,
    Boundary5,
}

impl WireEnum for LineStyle {
    const ALL: &'static [Self] = &[
        LineStyle::Solid,
        LineStyle::Dot,
        LineStyle::Dot2,
        LineStyle::Dash,
        LineStyle::Cross,
        LineStyle::StrongArrow,
        LineStyle::WireFence,
        LineStyle::Boundary1,
        LineStyle::Boundary2,
        LineStyle::Boundary3,
        LineStyle::Boundary4,
        LineStyle::Boundary5,
    ];

    fn tag(self) -> &'static str {
        // "boundry" is how the mission editor spells it
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dot => "dot",
            LineStyle::Dot2 => "dot2",
            LineStyle::Dash => "dash",
            LineStyle::Cross => "cross",
            LineStyle::StrongArrow => "strongarrow",
            LineStyle::WireFence => "wirefence",
            LineStyle::Boundary1 => "boundry1",
            LineStyle::Boundary2 => "boundry2",
            LineStyle::Boundary3 => "boundry3",
            LineStyle::Boundary4 => "boundry4",
            LineStyle::Boundary5 => "boundry5",
        }
    }
}

/// How the points of a line drawing are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineMode {
    /// A single segment from the origin to one end point
    #[default]
    Segment,
    /// A polyline through every point
    Segments,
    /// Freehand stroke
    Free,
}

impl WireEnum for LineMode {
    const ALL: &'static [Self] = &[LineMode::Segment, LineMode::Segments, LineMode::Free];

    fn tag(self) -> &'static str {
        match self {
            LineMode::Segment => "segment",
            LineMode::Segments => "segments",
            LineMode::Free => "free",
        }
    }
}

/// Secondary discriminator of `Polygon` drawings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolygonMode {
    Circle,
    Oval,
    Rectangle,
    Free,
    Arrow,
}

impl WireEnum for PolygonMode {
    const ALL: &'static [Self] = &[
        PolygonMode::Circle,
        PolygonMode::Oval,
        PolygonMode::Rectangle,
        PolygonMode::Free,
        PolygonMode::Arrow,
    ];

    fn tag(self) -> &'static str {
        match self {
            PolygonMode::Circle => "circle",
            PolygonMode::Oval => "oval",
            PolygonMode::Rectangle => "rect",
            PolygonMode::Free => "free",
            PolygonMode::Arrow => "arrow",
        }
    }
}

/// Primary discriminator (`primitiveType`) of every drawing record.
/// Always written as its string tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Line,
    Icon,
    Polygon,
    TextBox,
}

impl WireEnum for PrimitiveType {
    const ALL: &'static [Self] = &[
        PrimitiveType::Line,
        PrimitiveType::Icon,
        PrimitiveType::Polygon,
        PrimitiveType::TextBox,
    ];

    fn tag(self) -> &'static str {
        match self {
            PrimitiveType::Line => "Line",
            PrimitiveType::Icon => "Icon",
            PrimitiveType::Polygon => "Polygon",
            PrimitiveType::TextBox => "TextBox",
        }
    }
}
