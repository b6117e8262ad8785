//! Color string codec.
//!
//! Mission files store colors as `0xRRGGBBAA`. Channels are 8-bit, so the
//! conversion through [`Srgba`] is exact in both directions.

use bevy_color::Srgba;

use crate::error::{CodecError, Result};

/// Opaque red, the default stroke color for authored drawings
pub fn default_stroke() -> Srgba {
    Srgba::rgba_u8(255, 0, 0, 255)
}

/// Translucent red, the default fill for authored shapes
pub fn default_fill() -> Srgba {
    Srgba::rgba_u8(255, 0, 0, crate::constants::DEFAULT_FILL_ALPHA)
}

pub fn color_to_bytes(color: Srgba) -> [u8; 4] {
    [
        channel_to_u8(color.red),
        channel_to_u8(color.green),
        channel_to_u8(color.blue),
        channel_to_u8(color.alpha),
    ]
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parse a color string. `field` names the record key for error reporting.
///
/// Accepts `0xRRGGBBAA` and the bare `RRGGBBAA` form.
pub fn parse_color_string(field: &str, s: &str) -> Result<Srgba> {
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if hex.len() != 8 || !hex.is_ascii() {
        return Err(CodecError::mismatch(field, "color string `0xRRGGBBAA`"));
    }

    let mut bytes = [0u8; 4];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|_| CodecError::mismatch(field, "color string `0xRRGGBBAA`"))?;
    }

    Ok(Srgba::rgba_u8(bytes[0], bytes[1], bytes[2], bytes[3]))
}

/// Format a color as a mission color string, with or without the `0x` prefix
pub fn to_color_string(color: Srgba, with_prefix: bool) -> String {
    let [r, g, b, a] = color_to_bytes(color);
    let prefix = if with_prefix { "0x" } else { "" };
    format!("{prefix}{r:02x}{g:02x}{b:02x}{a:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_red() {
        let color = parse_color_string("colorString", "0xff0000ff").unwrap();
        assert_eq!(color_to_bytes(color), [255, 0, 0, 255]);
    }

    #[test]
    fn test_parse_without_prefix() {
        let color = parse_color_string("colorString", "ff0000ff").unwrap();
        assert_eq!(color, default_stroke());
    }

    #[test]
    fn test_parse_uppercase_hex() {
        let color = parse_color_string("colorString", "0x0A0B0C3C").unwrap();
        assert_eq!(color_to_bytes(color), [10, 11, 12, 60]);
    }

    #[test]
    fn test_format_with_and_without_prefix() {
        let color = Srgba::rgba_u8(1, 2, 254, 60);
        assert_eq!(to_color_string(color, true), "0x0102fe3c");
        assert_eq!(to_color_string(color, false), "0102fe3c");
    }

    #[test]
    fn test_every_byte_survives_roundtrip() {
        for v in 0..=255u8 {
            let color = Srgba::rgba_u8(v, 255 - v, v / 2, v);
            let s = to_color_string(color, true);
            let parsed = parse_color_string("colorString", &s).unwrap();
            assert_eq!(color_to_bytes(parsed), [v, 255 - v, v / 2, v]);
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = parse_color_string("fillColorString", "0xff00ff").unwrap_err();
        assert!(matches!(
            err,
            CodecError::TypeMismatch { ref field, .. } if field == "fillColorString"
        ));
    }

    #[test]
    fn test_rejects_non_hex() {
        assert!(parse_color_string("colorString", "0xzz0000ff").is_err());
        assert!(parse_color_string("colorString", "0xff00ä0f").is_err());
    }

    #[test]
    fn test_default_fill_alpha() {
        assert_eq!(color_to_bytes(default_fill()), [255, 0, 0, 60]);
    }
}
