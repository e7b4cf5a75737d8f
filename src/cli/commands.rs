//! Command handler implementations
//!
//! This module contains the implementation of all CLI commands.

use crate::accessibility::{check_contrast, find_accessible_pairs};
use crate::cli::output::{
    format_contrast, format_palette_summary, print_colors, print_header, print_info,
    print_pairs, print_palette, print_success, print_warning, DisplayOptions,
};
use crate::cli::{Args, Commands};
use crate::color::{Color, ColorFormat};
use crate::core::config::{init_config, Config};
use crate::core::error::PaletteError;
use crate::export::{export_palette, ExportFormat};
use crate::generator::{ColorGenerator, Mood, PaletteKind};
use crate::store::{FileStorage, Palette, PaletteStore};
use anyhow::{bail, Context, Result};
use dialoguer::Confirm;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

/// Run the appropriate command based on CLI arguments
pub fn run_command(args: &Args, config: &Config) -> Result<()> {
    let display = DisplayOptions {
        format: args.color_format.unwrap_or(config.display.color_format),
        swatches: config.display.swatches && !args.no_swatches,
    };

    match &args.command {
        Commands::Generate {
            kind,
            count,
            base,
            seed,
            save,
            tags,
            check,
        } => {
            let kind = kind.unwrap_or(config.generation.default_kind);
            generate(
                config,
                display,
                kind,
                *count,
                base.as_deref(),
                *seed,
                save.as_deref(),
                tags,
                *check,
            )?;
        }
        Commands::Mood {
            mood,
            count,
            seed,
            save,
            tags,
        } => {
            generate_mood(config, display, *mood, *count, *seed, save.as_deref(), tags)?;
        }
        Commands::Regenerate {
            id,
            kind,
            base,
            seed,
        } => {
            let kind = kind.unwrap_or(config.generation.default_kind);
            regenerate(config, display, id, kind, base.as_deref(), *seed)?;
        }
        Commands::Lock { id, position } => {
            toggle_lock(config, display, id, *position)?;
        }
        Commands::Contrast { first, second } => {
            contrast(first, second, display)?;
        }
        Commands::Pairs { colors } => {
            pairs(colors, display)?;
        }
        Commands::Convert { color } => {
            convert(color)?;
        }
        Commands::List { favorites, tag } => {
            list_palettes(config, *favorites, tag.as_deref());
        }
        Commands::Show { id } => {
            show_palette(config, display, id)?;
        }
        Commands::Delete { id, yes } => {
            delete_palette(config, id, *yes)?;
        }
        Commands::Favorite { id } => {
            toggle_favorite(config, id)?;
        }
        Commands::Rename { id, name } => {
            rename_palette(config, id, name)?;
        }
        Commands::Tag { id, tags } => {
            tag_palette(config, id, tags)?;
        }
        Commands::Export {
            id,
            format,
            output,
            copy,
        } => {
            let format = format.unwrap_or(config.export.default_format);
            export(config, id, format, output.clone(), *copy)?;
        }
        Commands::Config { path } => {
            handle_config_command(*path)?;
        }
        Commands::GenerateConfig { output } => {
            generate_config_file(output.clone())?;
        }
        Commands::ShowConfig => {
            show_config(config);
        }
    }

    Ok(())
}

/// Open the palette store described by the configuration
pub fn open_store(config: &Config) -> PaletteStore<FileStorage> {
    let storage = FileStorage::new(config.storage.effective_data_dir());
    debug!("Using palette storage in {}", storage.dir().display());
    PaletteStore::open_with_key(storage, &config.storage.storage_key)
}

fn build_generator(seed: Option<u64>) -> ColorGenerator<StdRng> {
    let rng = match seed {
        Some(seed) => {
            debug!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    ColorGenerator::with_rng(rng)
}

fn require_palette(store: &PaletteStore<FileStorage>, id: &str) -> Result<Palette> {
    store
        .get(id)
        .cloned()
        .ok_or_else(|| PaletteError::PaletteNotFound(id.to_string()).into())
}

/// Save freshly generated colors when a name was given
fn save_if_requested(
    config: &Config,
    colors: Vec<Color>,
    name: Option<&str>,
    tags: &[String],
) -> Result<()> {
    let Some(name) = name else {
        return Ok(());
    };

    let palette = Palette::new(name, colors, tags);
    let id = palette.id.clone();
    let mut store = open_store(config);
    store.upsert(palette)?;
    println!();
    print_success(&format!("Saved '{}' as {}", name.trim(), id));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn generate(
    config: &Config,
    display: DisplayOptions,
    kind: PaletteKind,
    count: Option<usize>,
    base: Option<&str>,
    seed: Option<u64>,
    save: Option<&str>,
    tags: &[String],
    check: bool,
) -> Result<()> {
    let count = config
        .generation
        .validate_count(count.unwrap_or(config.generation.default_count))?;

    if base.is_some() && !kind.uses_base() {
        print_warning("--base is ignored for random palettes");
    }

    let mut generator = build_generator(seed);
    let colors = generator.generate_palette(kind, count, base)?;
    info!("Generated {} {} color(s)", colors.len(), kind);

    print_header(&format!("{} palette", kind));
    print_colors(&colors, display);

    if check {
        println!();
        println!("Accessible pairs:");
        print_pairs(&find_accessible_pairs(&colors), display);
    }

    save_if_requested(config, colors, save, tags)
}

fn generate_mood(
    config: &Config,
    display: DisplayOptions,
    mood: Mood,
    count: Option<usize>,
    seed: Option<u64>,
    save: Option<&str>,
    tags: &[String],
) -> Result<()> {
    let count = config
        .generation
        .validate_count(count.unwrap_or(config.generation.default_count))?;

    let mut generator = build_generator(seed);
    let colors = generator.generate_by_mood(mood, count);

    print_header(&format!("{} palette", mood));
    print_colors(&colors, display);

    let mut tags = tags.to_vec();
    tags.push(mood.to_string());
    save_if_requested(config, colors, save, &tags)
}

fn regenerate(
    config: &Config,
    display: DisplayOptions,
    id: &str,
    kind: PaletteKind,
    base: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    let mut store = open_store(config);
    let mut palette = require_palette(&store, id)?;

    let mut generator = build_generator(seed);
    palette.colors = generator.regenerate(&palette.colors, kind, base)?;
    store.upsert(palette.clone())?;

    print_palette(&palette, display);
    Ok(())
}

fn toggle_lock(config: &Config, display: DisplayOptions, id: &str, position: usize) -> Result<()> {
    let mut store = open_store(config);
    let mut palette = require_palette(&store, id)?;

    let len = palette.colors.len();
    let Some(color) = position
        .checked_sub(1)
        .and_then(|index| palette.colors.get_mut(index))
    else {
        bail!("Position {} is out of range (palette has {} colors)", position, len);
    };
    color.toggle_lock();
    let state = if color.locked { "Locked" } else { "Unlocked" };
    let hex = color.hex.clone();

    store.upsert(palette.clone())?;
    print_success(&format!("{} {} in '{}'", state, hex, palette.name));
    print_colors(&palette.colors, display);
    Ok(())
}

fn contrast(first: &str, second: &str, display: DisplayOptions) -> Result<()> {
    let first = Color::from_hex(first)?;
    let second = Color::from_hex(second)?;
    let result = check_contrast(&first, &second);

    println!(
        "{} on {}: {}",
        first.display(display.format),
        second.display(display.format),
        format_contrast(&result)
    );
    Ok(())
}

fn pairs(colors: &[String], display: DisplayOptions) -> Result<()> {
    let colors = colors
        .iter()
        .map(|hex| Color::from_hex(hex))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    print_pairs(&find_accessible_pairs(&colors), display);
    Ok(())
}

fn convert(color: &str) -> Result<()> {
    let color = Color::from_hex(color)?;
    let hsl = color.hsl();

    println!("HEX  {}", color.display(ColorFormat::Hex));
    println!("RGB  {}", color.display(ColorFormat::Rgb));
    println!("HSL  hsl({:.0}, {:.0}%, {:.0}%)", hsl.h, hsl.s, hsl.l);
    Ok(())
}

fn list_palettes(config: &Config, favorites_only: bool, tag: Option<&str>) {
    let store = open_store(config);

    let palettes: Vec<&Palette> = store
        .palettes()
        .iter()
        .filter(|p| !favorites_only || p.favorite)
        .filter(|p| tag.map_or(true, |t| p.has_tag(t)))
        .collect();

    if palettes.is_empty() {
        print_info("No saved palettes match");
        return;
    }

    for palette in palettes {
        println!("{}", format_palette_summary(palette));
    }
}

fn show_palette(config: &Config, display: DisplayOptions, id: &str) -> Result<()> {
    let store = open_store(config);
    let palette = require_palette(&store, id)?;

    print_palette(&palette, display);
    println!();
    println!("Accessible pairs:");
    print_pairs(&find_accessible_pairs(&palette.colors), display);
    Ok(())
}

fn delete_palette(config: &Config, id: &str, skip_confirm: bool) -> Result<()> {
    let mut store = open_store(config);
    let palette = require_palette(&store, id)?;

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete palette '{}'?", palette.name))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            print_info("Nothing deleted");
            return Ok(());
        }
    }

    store.delete(id)?;
    print_success(&format!("Deleted '{}'", palette.name));
    Ok(())
}

fn toggle_favorite(config: &Config, id: &str) -> Result<()> {
    let mut store = open_store(config);
    if !store.toggle_favorite(id)? {
        return Err(PaletteError::PaletteNotFound(id.to_string()).into());
    }

    if let Some(palette) = store.get(id) {
        let state = if palette.favorite {
            "Added to"
        } else {
            "Removed from"
        };
        print_success(&format!("{} favorites: '{}'", state, palette.name));
    }
    Ok(())
}

fn rename_palette(config: &Config, id: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Palette name cannot be empty");
    }

    let mut store = open_store(config);
    if !store.rename(id, name)? {
        return Err(PaletteError::PaletteNotFound(id.to_string()).into());
    }
    print_success(&format!("Renamed {} to '{}'", id, name.trim()));
    Ok(())
}

fn tag_palette(config: &Config, id: &str, tags: &[String]) -> Result<()> {
    let mut store = open_store(config);
    if !store.add_tags(id, tags)? {
        return Err(PaletteError::PaletteNotFound(id.to_string()).into());
    }

    if let Some(palette) = store.get(id) {
        print_success(&format!("Tags for '{}': {}", palette.name, palette.tags.join(", ")));
    }
    Ok(())
}

fn export(
    config: &Config,
    id: &str,
    format: ExportFormat,
    output: Option<PathBuf>,
    copy: bool,
) -> Result<()> {
    let store = open_store(config);
    let palette = require_palette(&store, id)?;
    let content = export_palette(&palette, format, &config.export.variable_prefix);

    match output.map(|path| with_export_extension(path, format)) {
        Some(path) => {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            print_success(&format!("Wrote {} export to {}", format, path.display()));
        }
        None if !copy => print!("{}", content),
        None => {}
    }

    if copy {
        let mut clipboard = arboard::Clipboard::new().context("Clipboard is not available")?;
        clipboard
            .set_text(content)
            .context("Failed to copy export to the clipboard")?;
        print_success(&format!("Copied {} export to the clipboard", format));
    }

    Ok(())
}

/// Give `path` the format's conventional extension when it has none
fn with_export_extension(mut path: PathBuf, format: ExportFormat) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(format.file_extension());
    }
    path
}

/// Handle the `config` command - show the path, creating the file if needed
pub fn handle_config_command(show_path: bool) -> Result<()> {
    if show_path {
        let path = Config::get_active_config_path();
        println!("{}", path.display());
        return Ok(());
    }

    let path = init_config()?;
    print_success(&format!("Config file: {}", path.display()));
    print_info("Edit this file to change defaults, then run 'palette-studio show-config'.");
    Ok(())
}

/// Generate a configuration file at the specified or default location
pub fn generate_config_file(output: Option<PathBuf>) -> Result<()> {
    let output_path = match output {
        Some(path) => {
            fs::write(&path, Config::generate_default_config())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path
        }
        None => init_config()?,
    };

    print_success(&format!("Configuration file: {}", output_path.display()));
    Ok(())
}

/// Show the current configuration settings
pub fn show_config(config: &Config) {
    let config_path = Config::get_active_config_path();
    println!("Configuration file: {}", config_path.display());
    if !config_path.exists() {
        println!("(Using default settings - no config file found)");
    }
    println!();
    println!("[storage]");
    println!(
        "  data_dir = \"{}\"",
        config.storage.effective_data_dir().display()
    );
    println!("  storage_key = \"{}\"", config.storage.storage_key);
    println!();
    println!("[generation]");
    println!("  default_count = {}", config.generation.default_count);
    println!("  min_count = {}", config.generation.min_count);
    println!("  max_count = {}", config.generation.max_count);
    println!("  default_kind = \"{}\"", config.generation.default_kind);
    println!();
    println!("[export]");
    println!("  default_format = \"{}\"", config.export.default_format);
    println!("  variable_prefix = \"{}\"", config.export.variable_prefix);
    println!();
    println!("[display]");
    println!("  color_format = \"{}\"", config.display.color_format);
    println!("  swatches = {}", config.display.swatches);
    println!();
    println!("[logging]");
    println!("  level = \"{}\"", config.logging.level);
    println!("  log_to_file = {}", config.logging.log_to_file);
    println!("  log_file = \"{}\"", config.logging.log_file.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_config(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.storage.data_dir = dir.path().to_path_buf();
        config.display.swatches = false;
        config
    }

    fn plain() -> DisplayOptions {
        DisplayOptions {
            format: ColorFormat::Hex,
            swatches: false,
        }
    }

    #[test]
    fn test_generate_and_save() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        generate(
            &config,
            plain(),
            PaletteKind::Monochrome,
            Some(4),
            Some("#3366cc"),
            Some(1),
            Some("Blues"),
            &["brand".to_string()],
            true,
        )
        .unwrap();

        let store = open_store(&config);
        assert_eq!(store.len(), 1);
        let palette = &store.palettes()[0];
        assert_eq!(palette.name, "Blues");
        assert_eq!(palette.colors.len(), 4);
        assert_eq!(palette.tags, vec!["brand".to_string()]);
    }

    #[test]
    fn test_generate_rejects_count_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        let err = generate(
            &config,
            plain(),
            PaletteKind::Random,
            Some(50),
            None,
            None,
            None,
            &[],
            false,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PaletteError>(),
            Some(PaletteError::InvalidCount { count: 50, .. })
        ));
    }

    #[test]
    fn test_generate_rejects_bad_base() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        let err = generate(
            &config,
            plain(),
            PaletteKind::Triadic,
            None,
            Some("#ggg"),
            None,
            None,
            &[],
            false,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PaletteError>(),
            Some(PaletteError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_mood_save_adds_mood_tag() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        generate_mood(&config, plain(), Mood::Calm, Some(3), Some(5), Some("Spa"), &[]).unwrap();

        let store = open_store(&config);
        assert_eq!(store.with_tag("calm").count(), 1);
    }

    #[test]
    fn test_lock_then_regenerate_keeps_color() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        let mut store = open_store(&config);
        let palette = Palette::new(
            "Lockable",
            vec![
                Color::from_hex("#111111").unwrap(),
                Color::from_hex("#222222").unwrap(),
                Color::from_hex("#333333").unwrap(),
            ],
            &[],
        );
        let id = palette.id.clone();
        store.upsert(palette).unwrap();

        toggle_lock(&config, plain(), &id, 2).unwrap();
        regenerate(&config, plain(), &id, PaletteKind::Random, None, Some(9)).unwrap();

        let store = open_store(&config);
        let stored = store.get(&id).unwrap();
        assert_eq!(stored.colors[1].hex, "#222222");
        assert!(stored.colors[1].locked);
    }

    #[test]
    fn test_lock_out_of_range() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        let mut store = open_store(&config);
        let palette = Palette::new("One", vec![Color::from_hex("#111111").unwrap()], &[]);
        let id = palette.id.clone();
        store.upsert(palette).unwrap();

        assert!(toggle_lock(&config, plain(), &id, 0).is_err());
        assert!(toggle_lock(&config, plain(), &id, 2).is_err());
    }

    #[test]
    fn test_favorite_rename_tag_delete() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        let mut store = open_store(&config);
        let palette = Palette::new("Draft", vec![Color::from_hex("#abcdef").unwrap()], &[]);
        let id = palette.id.clone();
        store.upsert(palette).unwrap();

        toggle_favorite(&config, &id).unwrap();
        rename_palette(&config, &id, "Final").unwrap();
        tag_palette(&config, &id, &["sky".to_string()]).unwrap();

        let stored = open_store(&config).get(&id).cloned().unwrap();
        assert!(stored.favorite);
        assert_eq!(stored.name, "Final");
        assert_eq!(stored.tags, vec!["sky".to_string()]);

        delete_palette(&config, &id, true).unwrap();
        assert!(open_store(&config).is_empty());
    }

    #[test]
    fn test_unknown_id_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        assert!(toggle_favorite(&config, "missing").is_err());
        assert!(rename_palette(&config, "missing", "x").is_err());
        assert!(show_palette(&config, plain(), "missing").is_err());
        assert!(delete_palette(&config, "missing", true).is_err());
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        let mut store = open_store(&config);
        let palette = Palette::new("Out", vec![Color::from_hex("#102030").unwrap()], &[]);
        let id = palette.id.clone();
        store.upsert(palette).unwrap();

        let path = temp_dir.path().join("out.scss");
        export(&config, &id, ExportFormat::Scss, Some(path.clone()), false).unwrap();
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "// Out\n$color-1: #102030;\n"
        );
    }

    #[test]
    fn test_export_output_gets_format_extension() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);

        let mut store = open_store(&config);
        let palette = Palette::new("Wind", vec![Color::from_hex("#a0b0c0").unwrap()], &[]);
        let id = palette.id.clone();
        store.upsert(palette).unwrap();

        export(&config, &id, ExportFormat::Tailwind, Some(temp_dir.path().join("theme")), false)
            .unwrap();
        let written = fs::read_to_string(temp_dir.path().join("theme.js")).unwrap();
        assert!(written.contains("'wind': {"));

        assert_eq!(
            with_export_extension(PathBuf::from("vars.txt"), ExportFormat::Scss),
            PathBuf::from("vars.txt")
        );
        assert_eq!(
            with_export_extension(PathBuf::from("vars"), ExportFormat::Css),
            PathBuf::from("vars.css")
        );
    }

    #[test]
    fn test_open_store_uses_configured_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_config(&temp_dir);
        assert_eq!(open_store(&config).storage().dir(), temp_dir.path());
    }

    #[test]
    fn test_contrast_and_pairs_validate_input() {
        assert!(contrast("#fff", "#000", plain()).is_ok());
        assert!(contrast("#fff", "black", plain()).is_err());
        assert!(pairs(&["#fff".to_string(), "nope".to_string()], plain()).is_err());
        assert!(convert("#3366cc").is_ok());
    }

    #[test]
    fn test_generate_config_file_to_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("palette_studio.toml");
        generate_config_file(Some(path.clone())).unwrap();
        assert!(Config::load(&path).is_ok());
    }
}
