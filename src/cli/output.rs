//! Terminal output helpers
//!
//! Consistent console formatting for palettes, contrast results, and status
//! messages, plus the writer used to tee logs to a file.

use crate::accessibility::{AccessiblePair, ContrastResult};
use crate::color::{Color, ColorFormat};
use crate::store::Palette;
use std::io::Write;

/// Width of a color swatch, in terminal cells
const SWATCH_WIDTH: usize = 6;

/// How colors are rendered on the console
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    pub format: ColorFormat,
    pub swatches: bool,
}

// ============================================================================
// Console output helpers
// ============================================================================

/// Print a header section with a box
pub fn print_header(title: &str) {
    let width = 48;
    let title_padded = format!("{:^width$}", title, width = width - 2);
    println!();
    println!("╔{}╗", "═".repeat(width - 2));
    println!("║{}║", title_padded);
    println!("╚{}╝", "═".repeat(width - 2));
}

/// Print a success message with checkmark
pub fn print_success(msg: &str) {
    println!("  ✓ {}", msg);
}

/// Print an info message with bullet
pub fn print_info(msg: &str) {
    println!("  • {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("  ⚠ {}", msg);
}

/// One line for a color: optional swatch, value, lock marker
pub fn format_color_line(index: usize, color: &Color, options: DisplayOptions) -> String {
    let swatch = if options.swatches {
        format!("{} ", color.to_ansi_swatch(SWATCH_WIDTH))
    } else {
        String::new()
    };
    let lock = if color.locked { "  [locked]" } else { "" };
    format!("  {:>2}. {}{}{}", index + 1, swatch, color.display(options.format), lock)
}

/// Print every color of a palette, one per line
pub fn print_colors(colors: &[Color], options: DisplayOptions) {
    for (i, color) in colors.iter().enumerate() {
        println!("{}", format_color_line(i, color, options));
    }
}

/// Short description used by `list`
pub fn format_palette_summary(palette: &Palette) -> String {
    let star = if palette.favorite { "★" } else { " " };
    let tags = if palette.tags.is_empty() {
        String::new()
    } else {
        format!("  #{}", palette.tags.join(" #"))
    };
    format!(
        "{} {}  {} ({} colors){}",
        star,
        palette.id,
        palette.name,
        palette.colors.len(),
        tags
    )
}

/// Print a saved palette with its metadata
pub fn print_palette(palette: &Palette, options: DisplayOptions) {
    print_header(&palette.name);
    print_info(&format!("id: {}", palette.id));
    print_info(&format!("created: {}", palette.created_at));
    if palette.favorite {
        print_info("favorite");
    }
    if !palette.tags.is_empty() {
        print_info(&format!("tags: {}", palette.tags.join(", ")));
    }
    println!();
    print_colors(&palette.colors, options);
}

/// Contrast result line, e.g. `4.69:1  AA`
pub fn format_contrast(result: &ContrastResult) -> String {
    format!("{:.2}:1  {}", result.ratio, result.level)
}

/// Print accessible pairs, or a note when there are none
pub fn print_pairs(pairs: &[AccessiblePair], options: DisplayOptions) {
    if pairs.is_empty() {
        print_warning("No color pairs reach WCAG AA (4.5:1)");
        return;
    }

    for pair in pairs {
        println!(
            "  {} on {}  {}",
            pair.color1.display(options.format),
            pair.color2.display(options.format),
            format_contrast(&pair.result)
        );
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Writes log records to both stderr and a log file
pub struct DualWriter {
    pub console: std::io::Stderr,
    pub file: std::fs::File,
}

impl Write for DualWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        // Write to console
        let _ = self.console.write(buf);
        // Write to file
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let _ = self.console.flush();
        self.file.flush()
    }
}

// ============================================================================
// Tests
// ============================================================================
