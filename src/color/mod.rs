//! Color model
//!
//! This module provides the [`Color`] value that flows through every other
//! module, along with the conversion primitives it is built on.
//!
//! # Example
//!
//! ```rust
//! use palette_studio::color::{Color, ColorFormat};
//!
//! let teal = Color::from_hex("#1ABC9C").unwrap();
//! assert_eq!(teal.hex, "#1abc9c");
//! assert_eq!(teal.display(ColorFormat::Rgb), "rgb(26, 188, 156)");
//! ```

pub mod conversion;

pub use conversion::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl, Rgb};

use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Color
// =============================================================================

/// A palette color
///
/// `hex` is always the lowercase `#rrggbb` rendering of `rgb`. Build colors
/// through the constructors so the two never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Lowercase `#rrggbb`
    pub hex: String,
    /// Channel values matching `hex`
    pub rgb: Rgb,
    /// Pinned by the user; regeneration keeps it in place
    pub locked: bool,
}

impl Color {
    /// Create an unlocked color from a hex string
    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::from_hex_locked(hex, false)
    }

    /// Create a color from a hex string with an explicit lock flag
    pub fn from_hex_locked(hex: &str, locked: bool) -> Result<Self> {
        let rgb = hex_to_rgb(hex)?;
        Ok(Self {
            hex: rgb_to_hex(rgb.r, rgb.g, rgb.b),
            rgb,
            locked,
        })
    }

    /// Create an unlocked color from channel values
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb_to_hex(rgb.r, rgb.g, rgb.b),
            rgb,
            locked: false,
        }
    }

    /// Create an unlocked color from HSL components
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_rgb(hsl_to_rgb(hsl.h, hsl.s, hsl.l))
    }

    /// HSL view of this color
    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.rgb.r, self.rgb.g, self.rgb.b)
    }

    /// Flip the lock flag
    pub fn toggle_lock(&mut self) {
        self.locked = !self.locked;
    }

    /// Render the color in the requested notation
    pub fn display(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.hex.clone(),
            ColorFormat::Rgb => format!("rgb({}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b),
        }
    }

    /// Convert to an ANSI truecolor background swatch
    pub fn to_ansi_swatch(&self, width: usize) -> String {
        format!(
            "\x1b[48;2;{};{};{}m{}\x1b[0m",
            self.rgb.r,
            self.rgb.g,
            self.rgb.b,
            " ".repeat(width)
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex)
    }
}

impl FromStr for Color {
    type Err = crate::core::error::PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

// =============================================================================
// Display format
// =============================================================================

/// Notation used when printing colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            other => Err(format!("unknown color format '{}' (expected hex or rgb)", other)),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFormat::Hex => write!(f, "hex"),
            ColorFormat::Rgb => write!(f, "rgb"),
        }
    }
}
