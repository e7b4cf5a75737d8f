//! Palette export
//!
//! Renders a palette as CSS custom properties, SCSS variables, or a Tailwind
//! `theme.extend.colors` fragment. Color slots are numbered from 1.

use crate::store::Palette;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported export targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Css,
    Scss,
    Tailwind,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Css, ExportFormat::Scss, ExportFormat::Tailwind];

    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Tailwind => "tailwind",
        }
    }

    /// Conventional file extension for the output
    pub fn file_extension(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Tailwind => "js",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown export format '{}' (expected css, scss or tailwind)", s))
    }
}

/// Render `palette` in `format`
///
/// `prefix` names the CSS/SCSS variables (`--<prefix>-1`, `$<prefix>-1`).
/// Tailwind output is keyed by the palette name instead.
pub fn export_palette(palette: &Palette, format: ExportFormat, prefix: &str) -> String {
    let prefix = match slugify(prefix) {
        slug if slug.is_empty() => "color".to_string(),
        slug => slug,
    };

    match format {
        ExportFormat::Css => export_css(palette, &prefix),
        ExportFormat::Scss => export_scss(palette, &prefix),
        ExportFormat::Tailwind => export_tailwind(palette),
    }
}

fn export_css(palette: &Palette, prefix: &str) -> String {
    let mut out = format!("/* {} */\n:root {{\n", comment_text(&palette.name).replace("*/", "* /"));
    for (i, color) in palette.colors.iter().enumerate() {
        out.push_str(&format!("  --{}-{}: {};\n", prefix, i + 1, color.hex));
    }
    out.push_str("}\n");
    out
}

fn export_scss(palette: &Palette, prefix: &str) -> String {
    let mut out = format!("// {}\n", comment_text(&palette.name));
    for (i, color) in palette.colors.iter().enumerate() {
        out.push_str(&format!("${}-{}: {};\n", prefix, i + 1, color.hex));
    }
    out
}

fn export_tailwind(palette: &Palette) -> String {
    let key = match slugify(&palette.name) {
        slug if slug.is_empty() => "palette".to_string(),
        slug => slug,
    };

    let mut out = String::from("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");
    out.push_str(&format!("        '{}': {{\n", key));
    for (i, color) in palette.colors.iter().enumerate() {
        out.push_str(&format!("          {}: '{}',\n", i + 1, color.hex));
    }
    out.push_str("        },\n      },\n    },\n  },\n};\n");
    out
}

/// Palette name flattened to a single line for use inside a comment
fn comment_text(name: &str) -> String {
    name.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase, with runs of non-alphanumerics collapsed to single `-`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn palette() -> Palette {
        Palette {
            id: "p1".to_string(),
            name: "Summer Vibes!".to_string(),
            colors: vec![
                Color::from_hex("#ff6b6b").unwrap(),
                Color::from_hex("#feca57").unwrap(),
                Color::from_hex("#48dbfb").unwrap(),
            ],
            tags: vec![],
            created_at: "2024-06-21T09:00:00.000Z".to_string(),
            favorite: false,
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Summer Vibes!"), "summer-vibes");
        assert_eq!(slugify("  --Brand__Core 2 "), "brand-core-2");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_export_css() {
        let css = export_palette(&palette(), ExportFormat::Css, "color");
        assert_eq!(
            css,
            "/* Summer Vibes! */\n:root {\n  --color-1: #ff6b6b;\n  --color-2: #feca57;\n  --color-3: #48dbfb;\n}\n"
        );
    }

    #[test]
    fn test_export_scss_custom_prefix() {
        let scss = export_palette(&palette(), ExportFormat::Scss, "Brand Color");
        let lines: Vec<&str> = scss.lines().collect();
        assert_eq!(
            lines,
            vec![
                "// Summer Vibes!",
                "$brand-color-1: #ff6b6b;",
                "$brand-color-2: #feca57;",
                "$brand-color-3: #48dbfb;",
            ]
        );
    }

    #[test]
    fn test_export_empty_prefix_falls_back() {
        let css = export_palette(&palette(), ExportFormat::Css, "");
        assert!(css.contains("--color-1: #ff6b6b;"));
    }

    #[test]
    fn test_export_tailwind() {
        let js = export_palette(&palette(), ExportFormat::Tailwind, "ignored");
        assert!(js.starts_with("module.exports = {"));
        assert!(js.contains("'summer-vibes': {"));

        let entries: Vec<&str> = js
            .lines()
            .map(str::trim)
            .filter(|l| l.starts_with(|c: char| c.is_ascii_digit()))
            .collect();
        assert_eq!(
            entries,
            vec!["1: '#ff6b6b',", "2: '#feca57',", "3: '#48dbfb',"]
        );
    }

    #[test]
    fn test_export_css_name_cannot_close_comment() {
        let mut palette = palette();
        palette.name = "Brand */ body { display: none } /*".to_string();

        let css = export_palette(&palette, ExportFormat::Css, "color");
        let first = css.lines().next().unwrap();
        assert_eq!(first, "/* Brand * / body { display: none } /* */");
        assert_eq!(css.matches("*/").count(), 1);
        assert_eq!(css.lines().nth(1), Some(":root {"));
    }

    #[test]
    fn test_export_multiline_name_stays_in_comment() {
        let mut palette = palette();
        palette.name = "Line one\n$color-1: red;".to_string();

        let scss = export_palette(&palette, ExportFormat::Scss, "color");
        let lines: Vec<&str> = scss.lines().collect();
        assert_eq!(lines[0], "// Line one $color-1: red;");
        assert_eq!(lines.len(), 4);
        assert!(!lines.contains(&"$color-1: red;"));

        let css = export_palette(&palette, ExportFormat::Css, "color");
        assert!(css.starts_with("/* Line one $color-1: red; */\n:root {\n"));
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("SCSS".parse::<ExportFormat>().unwrap(), ExportFormat::Scss);
        assert_eq!(ExportFormat::Tailwind.file_extension(), "js");
        assert!("less".parse::<ExportFormat>().is_err());
    }
}
