//! Unit tests for the drawing codec.

use bevy_color::Srgba;
use bevy_math::DVec2;
use serde_json::{Value, json};

use super::*;
use crate::config::{EnumEncoding, WireOptions};
use crate::error::CodecError;
use crate::map::styles::{LineMode, LineStyle};

/// Structural equality that compares numbers by value, so `0` and `0.0` match
fn same_wire(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|w| same_wire(v, w)))
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(v, w)| same_wire(v, w))
        }
        _ => a == b,
    }
}

fn common(name: &str) -> DrawingCommon {
    DrawingCommon {
        visible: true,
        position: DVec2::new(-281_234.5, 612_001.25),
        name: name.to_string(),
        color: Srgba::rgba_u8(10, 20, 30, 255),
        layer_name: "Blue".to_string(),
    }
}

fn style() -> PolygonStyle {
    PolygonStyle {
        fill: Srgba::rgba_u8(255, 0, 0, 60),
        line_thickness: 4,
        line_style: LineStyle::Dash,
    }
}

fn every_variant() -> Vec<Drawing> {
    vec![
        Drawing::Line(LineDrawing {
            common: common("line"),
            closed: true,
            line_thickness: 8,
            line_style: LineStyle::Dot2,
            line_mode: LineMode::Segments,
            points: vec![DVec2::ZERO, DVec2::new(100.5, 20.0), DVec2::new(-3.0, 7.75)],
        }),
        Drawing::Icon(Icon {
            common: common("icon"),
            file: "P91000108.png".to_string(),
            scale: 1.5,
            angle: 45.0,
        }),
        Drawing::Circle(Circle {
            common: common("circle"),
            style: style(),
            radius: 1852.0,
        }),
        Drawing::Oval(Oval {
            common: common("oval"),
            style: style(),
            radius1: 1000.0,
            radius2: 250.5,
            angle: 30.0,
        }),
        Drawing::Rectangle(Rectangle {
            common: common("rect"),
            style: style(),
            width: 400.0,
            height: 800.0,
            angle: 90.0,
        }),
        Drawing::FreeFormPolygon(FreeFormPolygon {
            common: common("free"),
            style: style(),
            points: vec![DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(5.0, 8.0)],
        }),
        Drawing::Arrow(Arrow {
            common: common("arrow"),
            style: style(),
            length: 5000.0,
            angle: 270.0,
            points: vec![
                DVec2::new(0.0, -100.0),
                DVec2::new(4000.0, -100.0),
                DVec2::new(4000.0, -300.0),
                DVec2::new(5000.0, 0.0),
            ],
        }),
        Drawing::TextBox(TextBox {
            common: common("text"),
            text: "Bullseye".to_string(),
            font_size: 20,
            font: "DejaVuLGCSansCondensed.ttf".to_string(),
            border_thickness: 2,
            fill: Srgba::rgba_u8(0, 0, 0, 0),
            angle: 0.0,
        }),
    ]
}

fn scenario() -> Value {
    json!({
        "primitiveType": "Line",
        "closed": false,
        "thickness": 8,
        "style": 1,
        "lineMode": 0,
        "points": {"1": {"x": 0, "y": 0}, "2": {"x": 10, "y": 20}},
        "visible": true,
        "colorString": "ff0000ff",
        "layerName": "L1",
        "name": "n",
        "mapX": 1.0,
        "mapY": 2.0
    })
}

// Round-trips
#[test]
fn test_every_variant_roundtrips() {
    for drawing in every_variant() {
        let decoded = Drawing::from_wire(&drawing.to_wire()).unwrap();
        assert_eq!(decoded, drawing, "roundtrip failed for {}", drawing.name());
    }
}

#[test]
fn test_every_variant_roundtrips_with_ordinals() {
    let options = WireOptions {
        enum_encoding: EnumEncoding::Ordinals,
        color_prefix: false,
    };
    for drawing in every_variant() {
        let decoded = Drawing::from_wire(&drawing.to_wire_with(&options)).unwrap();
        assert_eq!(decoded, drawing);
    }
}

#[test]
fn test_line_with_no_points_roundtrips() {
    let drawing = Drawing::Line(LineDrawing {
        common: common("empty"),
        closed: false,
        line_thickness: 1,
        line_style: LineStyle::Solid,
        line_mode: LineMode::Free,
        points: vec![],
    });
    assert_eq!(Drawing::from_wire(&drawing.to_wire()).unwrap(), drawing);
}

// Scenario from the mission format
#[test]
fn test_scenario_line_decodes() {
    let Drawing::Line(line) = Drawing::from_wire(&scenario()).unwrap() else {
        panic!("expected a line drawing");
    };

    assert_eq!(line.points, vec![DVec2::new(0.0, 0.0), DVec2::new(10.0, 20.0)]);
    assert!(!line.closed);
    assert_eq!(line.line_thickness, 8);
    assert_eq!(line.line_style, LineStyle::Dot);
    assert_eq!(line.line_mode, LineMode::Segment);
    assert_eq!(line.common.position, DVec2::new(1.0, 2.0));
    assert_eq!(line.common.layer_name, "L1");
    assert_eq!(line.common.name, "n");
    assert_eq!(line.common.color, Srgba::rgba_u8(255, 0, 0, 255));
}

#[test]
fn test_scenario_line_reencodes_same_key_values() {
    let options = WireOptions {
        enum_encoding: EnumEncoding::Ordinals,
        color_prefix: false,
    };
    let encoded = Drawing::from_wire(&scenario()).unwrap().to_wire_with(&options);
    assert!(same_wire(&encoded, &scenario()), "got {encoded}");
}

#[test]
fn test_default_encoding_uses_names_and_prefix() {
    let encoded = Drawing::from_wire(&scenario()).unwrap().to_wire();
    assert_eq!(encoded["style"], json!("dot"));
    assert_eq!(encoded["lineMode"], json!("segment"));
    assert_eq!(encoded["colorString"], json!("0xff0000ff"));
}

// Field presence
#[test]
fn test_polygon_records_carry_both_tags() {
    let encoded = every_variant()[2].to_wire();
    assert_eq!(encoded["primitiveType"], json!("Polygon"));
    assert_eq!(encoded["polygonMode"], json!("circle"));
    assert!(encoded.get("fillColorString").is_some());
}

#[test]
fn test_field_sets_per_variant() {
    let expected: [&[&str]; 8] = [
        &["closed", "thickness", "style", "lineMode", "points"],
        &["file", "scale", "angle"],
        &["polygonMode", "fillColorString", "thickness", "style", "radius"],
        &["polygonMode", "fillColorString", "thickness", "style", "r1", "r2", "angle"],
        &["polygonMode", "fillColorString", "thickness", "style", "width", "height", "angle"],
        &["polygonMode", "fillColorString", "thickness", "style", "points"],
        &["polygonMode", "fillColorString", "thickness", "style", "length", "angle", "points"],
        &["text", "fontSize", "font", "borderThickness", "fillColorString", "angle"],
    ];
    let shared = ["primitiveType", "visible", "colorString", "layerName", "name", "mapX", "mapY"];

    for (drawing, extra) in every_variant().iter().zip(expected) {
        let encoded = drawing.to_wire();
        let record = encoded.as_object().unwrap();
        assert_eq!(record.len(), shared.len() + extra.len(), "{}", drawing.name());
        for key in shared.iter().chain(extra) {
            assert!(record.contains_key(*key), "{} lacks {}", drawing.name(), key);
        }
    }
}

#[test]
fn test_tag_accessors() {
    let drawings = every_variant();
    assert_eq!(drawings[0].primitive_type(), PrimitiveType::Line);
    assert_eq!(drawings[0].polygon_mode(), None);
    assert_eq!(drawings[4].primitive_type(), PrimitiveType::Polygon);
    assert_eq!(drawings[4].polygon_mode(), Some(PolygonMode::Rectangle));
    assert_eq!(drawings[7].primitive_type(), PrimitiveType::TextBox);
}

// Failures
#[test]
fn test_unknown_primitive_type_fails_with_unknown_tag() {
    let mut data = scenario();
    data["primitiveType"] = json!("Hexagon");
    let err = Drawing::from_wire(&data).unwrap_err();
    assert!(matches!(
        err,
        CodecError::UnknownTag { ref field, ref value } if field == "primitiveType" && value == "Hexagon"
    ));
}

#[test]
fn test_unknown_primitive_type_wins_over_missing_fields() {
    let data = json!({"primitiveType": "Blob"});
    assert!(matches!(
        Drawing::from_wire(&data),
        Err(CodecError::UnknownTag { .. })
    ));
}

#[test]
fn test_unknown_polygon_mode_fails_with_unknown_tag() {
    let mut data = every_variant()[2].to_wire();
    data["polygonMode"] = json!("star");
    let err = Drawing::from_wire(&data).unwrap_err();
    assert!(matches!(
        err,
        CodecError::UnknownTag { ref field, ref value } if field == "polygonMode" && value == "star"
    ));
}

#[test]
fn test_missing_variant_field() {
    let mut data = every_variant()[3].to_wire();
    data.as_object_mut().unwrap().remove("r2");
    assert!(matches!(
        Drawing::from_wire(&data),
        Err(CodecError::MissingField { ref field }) if field == "r2"
    ));
}

#[test]
fn test_missing_common_field() {
    let mut data = scenario();
    data.as_object_mut().unwrap().remove("mapY");
    assert!(matches!(
        Drawing::from_wire(&data),
        Err(CodecError::MissingField { ref field }) if field == "mapY"
    ));
}

#[test]
fn test_non_string_name_is_type_mismatch() {
    let mut data = scenario();
    data["name"] = json!(42);
    assert!(matches!(
        Drawing::from_wire(&data),
        Err(CodecError::TypeMismatch { ref field, .. }) if field == "name"
    ));
}

#[test]
fn test_record_must_be_a_mapping() {
    assert!(matches!(
        Drawing::from_wire(&json!("Line")),
        Err(CodecError::TypeMismatch { .. })
    ));
}

#[test]
fn test_from_variant_conversions() {
    let drawing: Drawing = Icon {
        common: common("icon"),
        file: "a.png".to_string(),
        scale: 1.0,
        angle: 0.0,
    }
    .into();
    assert_eq!(drawing.primitive_type(), PrimitiveType::Icon);
}
