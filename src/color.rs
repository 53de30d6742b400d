//! HSV/RGB conversion seam over the `palette` crate.
//!
//! The picker works in HSV with hue 0-359 and saturation/value 0-100;
//! `palette` works in normalized floats. Everything crossing that boundary
//! goes through here.

use csscolorparser::Color as CssColor;
use palette::{FromColor, Hsv, Srgb};

/// Convert picker-scale HSV (hue 0-359, sat/value 0-100) to 8-bit sRGB.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Srgb<u8> {
    let hsv = Hsv::new(
        hue as f32,
        (saturation / 100.0) as f32,
        (value / 100.0) as f32,
    );
    Srgb::from_color(hsv).into_format()
}

/// Convert 8-bit sRGB to picker-scale HSV.
pub fn rgb_to_hsv(rgb: Srgb<u8>) -> (f64, f64, f64) {
    let hsv = Hsv::from_color(rgb.into_format::<f32>());
    (
        f64::from(hsv.hue.into_positive_degrees()),
        f64::from(hsv.saturation) * 100.0,
        f64::from(hsv.value) * 100.0,
    )
}

/// Parse any CSS color string (hex, rgb(), named) into 8-bit sRGB.
pub fn parse_color(input: &str) -> Result<Srgb<u8>, String> {
    let css: CssColor = input
        .parse()
        .map_err(|e| format!("invalid color '{input}': {e}"))?;
    let [r, g, b, _a] = css.to_rgba8();
    Ok(Srgb::new(r, g, b))
}

/// Lowercase `#rrggbb` rendition.
pub fn hex_string(rgb: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn primaries_round_trip() {
        let red = hsv_to_rgb(0.0, 100.0, 100.0);
        assert_eq!((red.red, red.green, red.blue), (255, 0, 0));

        let (h, s, v) = rgb_to_hsv(Srgb::new(0u8, 255, 0));
        assert_relative_eq!(h, 120.0, epsilon = 0.5);
        assert_relative_eq!(s, 100.0, epsilon = 0.5);
        assert_relative_eq!(v, 100.0, epsilon = 0.5);
    }

    #[test]
    fn zero_delta_is_stable() {
        // converting back and forth must not drift perceptibly
        let (mut h, mut s, mut v) = (212.5, 40.0, 85.0);
        for _ in 0..8 {
            let rgb = hsv_to_rgb(h, s, v);
            (h, s, v) = rgb_to_hsv(rgb);
        }
        assert_relative_eq!(h, 212.5, epsilon = 1.0);
        assert_relative_eq!(s, 40.0, epsilon = 1.0);
        assert_relative_eq!(v, 85.0, epsilon = 1.0);
    }

    #[test]
    fn parses_hex() {
        let c = parse_color("#4c4c4c").unwrap();
        assert_eq!((c.red, c.green, c.blue), (76, 76, 76));
        assert!(parse_color("#notacolor").is_err());
    }

    #[test]
    fn hex_rendition() {
        assert_eq!(hex_string(Srgb::new(26u8, 26, 46)), "#1a1a2e");
    }
}
