//! Palette generation
//!
//! [`ColorGenerator`] builds palettes from a base color using classic
//! color-wheel relationships, or samples them from a [`Mood`] preset.
//! The generator owns its random source so tests and the `--seed` flag can
//! make output reproducible.
//!
//! # Example
//!
//! ```rust
//! use palette_studio::generator::{ColorGenerator, PaletteKind};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut generator = ColorGenerator::with_rng(StdRng::seed_from_u64(7));
//! let colors = generator
//!     .generate_palette(PaletteKind::Triadic, 3, Some("#ff0000"))
//!     .unwrap();
//! assert_eq!(colors[1].hex, "#00ff00");
//! assert_eq!(colors[2].hex, "#0000ff");
//! ```

pub mod mood;

pub use mood::{Mood, MoodPreset};

use crate::color::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Color, Hsl, Rgb};
use crate::core::error::Result;
use log::{debug, trace};
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hue step between analogous neighbours, in degrees
const ANALOGOUS_STEP: f64 = 30.0;

/// Hue offsets cycled through by triadic palettes
const TRIADIC_ANGLES: [f64; 2] = [120.0, 240.0];

/// Lightness shift applied to complementary variants, in percent
const COMPLEMENTARY_LIGHTNESS_SHIFT: f64 = 15.0;

/// Half-width of the monochrome lightness sweep, in percent
const MONOCHROME_SPREAD: f64 = 40.0;

/// Bounds the monochrome sweep is clamped to
const MONOCHROME_LIGHTNESS_RANGE: (f64, f64) = (10.0, 90.0);

/// Largest 24-bit color value
const MAX_COLOR_VALUE: u32 = 0xFF_FFFF;

// =============================================================================
// Palette kind
// =============================================================================

/// Generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Independent random colors
    #[default]
    Random,
    /// Neighbouring hues around the base
    Analogous,
    /// One hue, varying lightness
    Monochrome,
    /// Hues 120° apart
    Triadic,
    /// Base and its opposite hue, with lightness variants
    Complementary,
}

impl PaletteKind {
    /// All strategies, in display order
    pub const ALL: [PaletteKind; 5] = [
        PaletteKind::Random,
        PaletteKind::Analogous,
        PaletteKind::Monochrome,
        PaletteKind::Triadic,
        PaletteKind::Complementary,
    ];

    /// Lowercase name used on the command line and in config
    pub fn as_str(self) -> &'static str {
        match self {
            PaletteKind::Random => "random",
            PaletteKind::Analogous => "analogous",
            PaletteKind::Monochrome => "monochrome",
            PaletteKind::Triadic => "triadic",
            PaletteKind::Complementary => "complementary",
        }
    }

    /// Whether the strategy derives colors from a base color
    pub fn uses_base(self) -> bool {
        !matches!(self, PaletteKind::Random)
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaletteKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PaletteKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown palette type '{}' (expected random, analogous, monochrome, triadic or complementary)",
                    s
                )
            })
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Palette generator over a random source
pub struct ColorGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl ColorGenerator<ThreadRng> {
    /// Create a generator backed by the thread-local RNG
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ColorGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ColorGenerator<R> {
    /// Create a generator over a caller-supplied RNG (e.g. a seeded `StdRng`)
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniformly random `#rrggbb` string
    pub fn random_hex(&mut self) -> String {
        let rgb = self.random_rgb();
        rgb_to_hex(rgb.r, rgb.g, rgb.b)
    }

    fn random_rgb(&mut self) -> Rgb {
        let value = self.rng.gen_range(0..=MAX_COLOR_VALUE);
        Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Build a color from a hex string
    pub fn create_color(&self, hex: &str, locked: bool) -> Result<Color> {
        Color::from_hex_locked(hex, locked)
    }

    /// `count` independently random colors
    pub fn generate_random(&mut self, count: usize) -> Vec<Color> {
        (0..count)
            .map(|_| Color::from_rgb(self.random_rgb()))
            .collect()
    }

    /// Base color followed by hues fanning out ±30° at a time
    ///
    /// Odd slots step counter-clockwise, even slots clockwise, each pair one
    /// step further from the base than the last.
    pub fn generate_analogous(&self, base: &str, count: usize) -> Result<Vec<Color>> {
        let (base_color, hsl) = base_with_hsl(base)?;
        let mut colors = Vec::with_capacity(count);
        if count == 0 {
            return Ok(colors);
        }
        colors.push(base_color);

        for i in 1..count {
            let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
            let distance = i.div_ceil(2) as f64;
            let hue = (hsl.h + direction * ANALOGOUS_STEP * distance).rem_euclid(360.0);
            colors.push(color_from_hsl(hue, hsl.s, hsl.l));
        }

        Ok(colors)
    }

    /// Base hue and saturation with lightness swept across `[l-40, l+40]`
    ///
    /// Lightness is clamped to `[10, 90]`. A single-color request returns the
    /// base lightness (clamped) instead of dividing by zero.
    pub fn generate_monochrome(&self, base: &str, count: usize) -> Result<Vec<Color>> {
        let (_, hsl) = base_with_hsl(base)?;
        let (min_l, max_l) = MONOCHROME_LIGHTNESS_RANGE;

        if count == 1 {
            return Ok(vec![color_from_hsl(hsl.h, hsl.s, hsl.l.clamp(min_l, max_l))]);
        }

        let step = (2.0 * MONOCHROME_SPREAD) / (count.saturating_sub(1)) as f64;
        Ok((0..count)
            .map(|i| {
                let lightness = (hsl.l - MONOCHROME_SPREAD + step * i as f64).clamp(min_l, max_l);
                color_from_hsl(hsl.h, hsl.s, lightness)
            })
            .collect())
    }

    /// Base color followed by +120° / +240° hues in turn
    pub fn generate_triadic(&self, base: &str, count: usize) -> Result<Vec<Color>> {
        let (base_color, hsl) = base_with_hsl(base)?;
        let mut colors = Vec::with_capacity(count);
        if count == 0 {
            return Ok(colors);
        }
        colors.push(base_color);

        for i in 0..count - 1 {
            let angle = TRIADIC_ANGLES[i % TRIADIC_ANGLES.len()];
            colors.push(color_from_hsl(hsl.h + angle, hsl.s, hsl.l));
        }

        Ok(colors)
    }

    /// Base, its 180° complement, then alternating lighter-base and
    /// darker-complement variants
    pub fn generate_complementary(&self, base: &str, count: usize) -> Result<Vec<Color>> {
        let (base_color, hsl) = base_with_hsl(base)?;
        let complement_hue = (hsl.h + 180.0).rem_euclid(360.0);

        let mut colors = Vec::with_capacity(count);
        if count == 0 {
            return Ok(colors);
        }
        colors.push(base_color);
        if count > 1 {
            colors.push(color_from_hsl(complement_hue, hsl.s, hsl.l));
        }

        for i in 2..count {
            let (hue, lightness) = if i % 2 == 0 {
                (hsl.h, hsl.l + COMPLEMENTARY_LIGHTNESS_SHIFT)
            } else {
                (complement_hue, hsl.l - COMPLEMENTARY_LIGHTNESS_SHIFT)
            };
            colors.push(color_from_hsl(hue, hsl.s, lightness));
        }

        Ok(colors)
    }

    /// `count` colors sampled uniformly from the mood's HSL ranges
    pub fn generate_by_mood(&mut self, mood: Mood, count: usize) -> Vec<Color> {
        let preset = mood.preset();
        debug!("Generating {} color(s) for mood '{}'", count, mood);

        (0..count)
            .map(|_| {
                let h = self.sample(preset.hue);
                let s = self.sample(preset.saturation);
                let l = self.sample(preset.lightness);
                trace!("Mood sample h={:.1} s={:.1} l={:.1}", h, s, l);
                color_from_hsl(h, s, l)
            })
            .collect()
    }

    /// Dispatch to a strategy by kind
    ///
    /// `Random` ignores `base`; every other kind falls back to a fresh random
    /// base color when none is given.
    pub fn generate_palette(
        &mut self,
        kind: PaletteKind,
        count: usize,
        base: Option<&str>,
    ) -> Result<Vec<Color>> {
        if kind == PaletteKind::Random {
            debug!("Generating {} random color(s)", count);
            return Ok(self.generate_random(count));
        }

        let base = match base {
            Some(hex) => hex.to_string(),
            None => self.random_hex(),
        };
        debug!("Generating {} {} color(s) from {}", count, kind, base);

        match kind {
            PaletteKind::Analogous => self.generate_analogous(&base, count),
            PaletteKind::Monochrome => self.generate_monochrome(&base, count),
            PaletteKind::Triadic => self.generate_triadic(&base, count),
            PaletteKind::Complementary => self.generate_complementary(&base, count),
            PaletteKind::Random => Ok(self.generate_random(count)),
        }
    }

    /// Regenerate a palette in place, keeping locked colors in their slots
    ///
    /// When no base is given, the first locked color anchors base-derived
    /// strategies. The anchor is already in the palette, so the fresh color
    /// nearest to it is dropped and the rest fill the unlocked slots in order.
    pub fn regenerate(
        &mut self,
        current: &[Color],
        kind: PaletteKind,
        base: Option<&str>,
    ) -> Result<Vec<Color>> {
        let locked = current.iter().filter(|c| c.locked).count();
        debug!(
            "Regenerating {} color(s), keeping {} locked",
            current.len() - locked,
            locked
        );

        let anchor = match base {
            None if kind.uses_base() => current.iter().find(|c| c.locked),
            _ => None,
        };

        let Some(anchor) = anchor else {
            let fresh = self.generate_palette(kind, current.len(), base)?;
            return Ok(current
                .iter()
                .zip(fresh)
                .map(|(old, new)| if old.locked { old.clone() } else { new })
                .collect());
        };

        trace!("Anchoring {} regeneration on locked {}", kind, anchor.hex);
        let mut fresh = self.generate_palette(kind, current.len() - locked + 1, Some(&anchor.hex))?;
        if let Some(nearest) = fresh
            .iter()
            .enumerate()
            .min_by_key(|(_, color)| rgb_distance(color.rgb, anchor.rgb))
            .map(|(index, _)| index)
        {
            fresh.remove(nearest);
        }

        let mut fresh = fresh.into_iter();
        let mut next = Vec::with_capacity(current.len());
        for old in current {
            if old.locked {
                next.push(old.clone());
            } else if let Some(color) = fresh.next() {
                next.push(color);
            }
        }
        Ok(next)
    }

    fn sample(&mut self, (min, max): (f64, f64)) -> f64 {
        self.rng.gen_range(min..max)
    }
}

fn base_with_hsl(base: &str) -> Result<(Color, Hsl)> {
    let rgb = hex_to_rgb(base)?;
    Ok((Color::from_rgb(rgb), rgb_to_hsl(rgb.r, rgb.g, rgb.b)))
}

fn rgb_distance(a: Rgb, b: Rgb) -> u32 {
    let channel = |x: u8, y: u8| (i32::from(x) - i32::from(y)).unsigned_abs().pow(2);
    channel(a.r, b.r) + channel(a.g, b.g) + channel(a.b, b.b)
}

fn color_from_hsl(h: f64, s: f64, l: f64) -> Color {
    Color::from_rgb(hsl_to_rgb(h, s, l))
}
