//! WCAG contrast checking
//!
//! Relative luminance and contrast ratio follow the WCAG 2.x definitions.
//! Levels use the normal-text thresholds: 7:1 for AAA and 4.5:1 for AA.

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum ratio for AAA
pub const AAA_THRESHOLD: f64 = 7.0;

/// Minimum ratio for AA
pub const AA_THRESHOLD: f64 = 4.5;

/// Conformance level for a color pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContrastLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "fail")]
    Fail,
}

impl ContrastLevel {
    /// Classify a contrast ratio
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_THRESHOLD {
            ContrastLevel::Aaa
        } else if ratio >= AA_THRESHOLD {
            ContrastLevel::Aa
        } else {
            ContrastLevel::Fail
        }
    }

    pub fn is_pass(self) -> bool {
        self != ContrastLevel::Fail
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContrastLevel::Aaa => "AAA",
            ContrastLevel::Aa => "AA",
            ContrastLevel::Fail => "fail",
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of [`check_contrast`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    /// Contrast ratio rounded to two decimals
    pub ratio: f64,
    pub level: ContrastLevel,
}

/// A pair of colors that passes at least AA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessiblePair {
    pub color1: Color,
    pub color2: Color,
    pub result: ContrastResult,
}

/// Relative luminance of an sRGB color, in `[0, 1]`
pub fn get_luminance(r: u8, g: u8, b: u8) -> f64 {
    let linear = |channel: u8| {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// Contrast ratio between two colors, in `[1, 21]`
///
/// Symmetric in its arguments.
pub fn get_contrast_ratio(color1: &Color, color2: &Color) -> f64 {
    let lum1 = get_luminance(color1.rgb.r, color1.rgb.g, color1.rgb.b);
    let lum2 = get_luminance(color2.rgb.r, color2.rgb.g, color2.rgb.b);
    let lighter = lum1.max(lum2);
    let darker = lum1.min(lum2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio and conformance level for a pair
///
/// The level is decided on the exact ratio; only the reported ratio is
/// rounded.
pub fn check_contrast(color1: &Color, color2: &Color) -> ContrastResult {
    let ratio = get_contrast_ratio(color1, color2);
    ContrastResult {
        ratio: round_ratio(ratio),
        level: ContrastLevel::from_ratio(ratio),
    }
}

/// Every passing pair `(i < j)`, best contrast first
///
/// Pairs with equal rounded ratios keep their input order.
pub fn find_accessible_pairs(colors: &[Color]) -> Vec<AccessiblePair> {
    let mut pairs = Vec::new();

    for (i, color1) in colors.iter().enumerate() {
        for color2 in &colors[i + 1..] {
            let result = check_contrast(color1, color2);
            if result.level.is_pass() {
                pairs.push(AccessiblePair {
                    color1: color1.clone(),
                    color2: color2.clone(),
                    result,
                });
            }
        }
    }

    pairs.sort_by(|a, b| b.result.ratio.total_cmp(&a.result.ratio));
    pairs
}

fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}
