//! Command-line argument definitions
//!
//! This module defines all CLI arguments and subcommands using clap.

use crate::color::ColorFormat;
use crate::export::ExportFormat;
use crate::generator::{Mood, PaletteKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate color palettes, check contrast, and manage saved palettes
#[derive(Parser, Debug)]
#[command(name = "palette-studio")]
#[command(author = "Vihaan Reddy M")]
#[command(version)]
#[command(about = "Generate color palettes, check WCAG contrast, and manage saved palettes", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding saved palettes (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print colors as hex or rgb (overrides config)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub color_format: Option<ColorFormat>,

    /// Disable terminal color swatches
    #[arg(long, global = true)]
    pub no_swatches: bool,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a palette with one of the color-wheel strategies
    Generate {
        /// Strategy: random, analogous, monochrome, triadic, complementary
        #[arg(short, long, value_name = "KIND")]
        kind: Option<PaletteKind>,

        /// Number of colors
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Base color for non-random strategies (random when omitted)
        #[arg(short, long, value_name = "HEX")]
        base: Option<String>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Save the palette under this name
        #[arg(short, long, value_name = "NAME")]
        save: Option<String>,

        /// Tag to attach when saving (can be specified multiple times)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Also list accessible color pairs
        #[arg(long)]
        check: bool,
    },

    /// Generate a palette from a mood preset
    Mood {
        /// calm, energetic, or professional
        mood: Mood,

        /// Number of colors
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Save the palette under this name
        #[arg(short, long, value_name = "NAME")]
        save: Option<String>,

        /// Tag to attach when saving (can be specified multiple times)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Regenerate a saved palette, keeping its locked colors
    Regenerate {
        /// Palette id
        id: String,

        /// Strategy to regenerate with
        #[arg(short, long, value_name = "KIND")]
        kind: Option<PaletteKind>,

        /// Base color for non-random strategies
        #[arg(short, long, value_name = "HEX")]
        base: Option<String>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Lock or unlock a color in a saved palette (1-based position)
    Lock {
        /// Palette id
        id: String,

        /// Position of the color to toggle
        position: usize,
    },

    /// Check the contrast ratio between two colors
    Contrast {
        /// First color
        first: String,

        /// Second color
        second: String,
    },

    /// List color pairs that pass WCAG AA, best first
    Pairs {
        /// Colors to compare
        #[arg(required = true, num_args = 2..)]
        colors: Vec<String>,
    },

    /// Show a color in HEX, RGB, and HSL
    Convert {
        /// Color to convert
        color: String,
    },

    /// List saved palettes
    List {
        /// Only show favorites
        #[arg(short, long)]
        favorites: bool,

        /// Only show palettes with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show a saved palette with its accessible pairs
    Show {
        /// Palette id
        id: String,
    },

    /// Delete a saved palette
    Delete {
        /// Palette id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Toggle the favorite flag of a saved palette
    Favorite {
        /// Palette id
        id: String,
    },

    /// Rename a saved palette
    Rename {
        /// Palette id
        id: String,

        /// New name
        name: String,
    },

    /// Add tags to a saved palette
    Tag {
        /// Palette id
        id: String,

        /// Tags to add
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Export a saved palette as CSS, SCSS, or Tailwind config
    Export {
        /// Palette id
        id: String,

        /// css, scss, or tailwind (overrides config)
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Write to a file instead of stdout (extension added when missing)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Copy the export to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Show the configuration file path, creating it if needed
    Config {
        /// Only print the path
        #[arg(long)]
        path: bool,
    },

    /// Generate a configuration file at a specific location
    GenerateConfig {
        /// Output path for the config file (defaults to standard location)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration
    ShowConfig,
}
