//! HEX ↔ RGB ↔ HSL conversions
//!
//! All functions are pure. Hue is expressed in degrees in `[0, 360)`,
//! saturation and lightness as percentages in `[0, 100]`.

use crate::core::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};

/// An 8-bit RGB channel triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Hue (degrees), saturation and lightness (percent)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Parse a hex color string into an RGB triple
///
/// Accepts `#rrggbb` and the `#rgb` shorthand. The `#` prefix is optional and
/// digits are case-insensitive. Anything else is rejected with
/// [`PaletteError::InvalidHex`].
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PaletteError::InvalidHex(hex.to_string()));
    }

    let channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| PaletteError::InvalidHex(hex.to_string()))
    };

    match digits.len() {
        // #rgb
        3 => {
            let r = channel(&digits[0..1])?;
            let g = channel(&digits[1..2])?;
            let b = channel(&digits[2..3])?;
            Ok(Rgb::new(r * 17, g * 17, b * 17))
        }
        // #rrggbb
        6 => Ok(Rgb::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => Err(PaletteError::InvalidHex(hex.to_string())),
    }
}

/// Format an RGB triple as a lowercase `#rrggbb` string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Convert an RGB triple to HSL
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new((h * 60.0).rem_euclid(360.0), s * 100.0, l * 100.0)
}

/// Convert HSL to an RGB triple
///
/// Hue wraps modulo 360; saturation and lightness are clamped to `[0, 100]`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(to_byte(r), to_byte(g), to_byte(b))
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(hex_to_rgb("00ff00").unwrap(), Rgb::new(0, 255, 0));
        assert_eq!(hex_to_rgb("#ABCDEF").unwrap(), Rgb::new(171, 205, 239));
    }

    #[test]
    fn test_hex_to_rgb_short() {
        assert_eq!(hex_to_rgb("#abc").unwrap(), Rgb::new(170, 187, 204));
        assert_eq!(hex_to_rgb("#FFF").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed() {
        for bad in ["", "#", "#12345", "#1234567", "zzzzzz", "#12g456", "#+12345"] {
            assert!(
                matches!(hex_to_rgb(bad), Err(PaletteError::InvalidHex(_))),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_rgb_to_hex_lowercase_padded() {
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
        assert_eq!(rgb_to_hex(255, 255, 255), "#ffffff");
        assert_eq!(rgb_to_hex(1, 10, 171), "#010aab");
    }

    #[test]
    fn test_rgb_hex_round_trip_exhaustive_channels() {
        for v in 0..=255u8 {
            let (r, g, b) = (v, v.wrapping_mul(7), 255 - v);
            let hex = rgb_to_hex(r, g, b);
            assert_eq!(hex_to_rgb(&hex).unwrap(), Rgb::new(r, g, b));
        }
    }

    #[test]
    fn test_hex_round_trip_preserves_string() {
        for hex in ["#000000", "#ffffff", "#1a2b3c", "#777777", "#0f0f0f"] {
            let rgb = hex_to_rgb(hex).unwrap();
            assert_eq!(rgb_to_hex(rgb.r, rgb.g, rgb.b), hex);
        }
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        let red = rgb_to_hsl(255, 0, 0);
        assert_eq!((red.h, red.s, red.l), (0.0, 100.0, 50.0));

        let green = rgb_to_hsl(0, 255, 0);
        assert!((green.h - 120.0).abs() < 1e-9);

        let blue = rgb_to_hsl(0, 0, 255);
        assert!((blue.h - 240.0).abs() < 1e-9);

        let gray = rgb_to_hsl(119, 119, 119);
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
    }

    #[test]
    fn test_rgb_to_hsl_hue_in_range() {
        // Magenta-ish reds end up just under 360
        let hsl = rgb_to_hsl(255, 0, 10);
        assert!(hsl.h >= 0.0 && hsl.h < 360.0);
        assert!(hsl.h > 350.0);
    }

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 100.0), Rgb::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_hsl_to_rgb_wraps_hue_and_clamps() {
        assert_eq!(hsl_to_rgb(-240.0, 100.0, 50.0), hsl_to_rgb(120.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(480.0, 100.0, 50.0), hsl_to_rgb(120.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(30.0, 50.0, 120.0), Rgb::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(30.0, 150.0, 50.0), hsl_to_rgb(30.0, 100.0, 50.0));
    }

    #[test]
    fn test_rgb_hsl_round_trip_within_one() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(51) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    let hsl = rgb_to_hsl(r, g, b);
                    let back = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
                    assert!((i16::from(back.r) - i16::from(r)).abs() <= 1);
                    assert!((i16::from(back.g) - i16::from(g)).abs() <= 1);
                    assert!((i16::from(back.b) - i16::from(b)).abs() <= 1);
                }
            }
        }
    }
}
