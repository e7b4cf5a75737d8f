//! Palette Studio Library
//!
//! Color palette generation, WCAG contrast checking, and a persistent
//! collection of saved palettes.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`color`] - Color values and HEX/RGB/HSL conversion
//! - [`generator`] - Palette strategies (random, analogous, monochrome,
//!   triadic, complementary) and mood presets
//! - [`accessibility`] - Relative luminance, contrast ratios, WCAG levels
//! - [`store`] - Saved palettes over a pluggable key-value storage
//! - [`export`] - CSS, SCSS, and Tailwind output
//! - [`core`] - Configuration and error handling
//! - [`cli`] - Command-line interface (only used by the binary)
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use palette_studio::accessibility::find_accessible_pairs;
//! use palette_studio::generator::{ColorGenerator, PaletteKind};
//! use palette_studio::store::{FileStorage, Palette, PaletteStore};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut generator = ColorGenerator::new();
//!     let colors = generator.generate_palette(PaletteKind::Triadic, 5, Some("#3366cc"))?;
//!
//!     for pair in find_accessible_pairs(&colors) {
//!         println!("{} / {}: {:.2}", pair.color1, pair.color2, pair.result.ratio);
//!     }
//!
//!     let mut store = PaletteStore::open(FileStorage::new("./palettes"));
//!     store.upsert(Palette::new("Triad", colors, &[]))?;
//!     Ok(())
//! }
//! ```

pub mod accessibility;
pub mod cli;
pub mod color;
pub mod core;
pub mod export;
pub mod generator;
pub mod store;

#[cfg(test)]
mod integration;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
