//! End-to-end flow across generator, accessibility, store, and export

use crate::accessibility::{find_accessible_pairs, ContrastLevel};
use crate::color::Color;
use crate::export::{export_palette, ExportFormat};
use crate::generator::{ColorGenerator, Mood, PaletteKind};
use crate::store::{FileStorage, MemoryStorage, Palette, PaletteStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

#[test]
fn generate_check_save_reload_export() {
    let temp_dir = TempDir::new().unwrap();
    let mut generator = ColorGenerator::with_rng(StdRng::seed_from_u64(7));

    let mut colors = generator
        .generate_palette(PaletteKind::Monochrome, 5, Some("#1e6fd9"))
        .unwrap();
    colors.push(Color::from_hex("#ffffff").unwrap());
    colors.push(Color::from_hex("#000000").unwrap());

    let pairs = find_accessible_pairs(&colors);
    assert!(!pairs.is_empty());
    assert!(pairs.iter().all(|p| p.result.level.is_pass()));
    assert_eq!(pairs[0].result.ratio, 21.0);
    assert_eq!(pairs[0].result.level, ContrastLevel::Aaa);

    let palette = Palette::new("  Ocean  ", colors, &["blue".to_string()]);
    let id = palette.id.clone();

    {
        let mut store = PaletteStore::open(FileStorage::new(temp_dir.path()));
        store.upsert(palette).unwrap();
        assert!(store.toggle_favorite(&id).unwrap());
    }

    let store = PaletteStore::open(FileStorage::new(temp_dir.path()));
    let stored = store.get(&id).unwrap();
    assert_eq!(stored.name, "Ocean");
    assert_eq!(stored.colors.len(), 7);
    assert!(stored.favorite);
    assert_eq!(store.favorites().count(), 1);

    let css = export_palette(stored, ExportFormat::Css, "ocean");
    assert!(css.starts_with("/* Ocean */\n:root {\n"));
    assert!(css.contains("  --ocean-6: #ffffff;\n"));
    assert!(css.contains("  --ocean-7: #000000;\n"));
}

#[test]
fn locked_colors_survive_regeneration_through_the_store() {
    let mut generator = ColorGenerator::with_rng(StdRng::seed_from_u64(21));
    let mut colors = generator.generate_by_mood(Mood::Energetic, 4);
    colors[0].toggle_lock();
    let kept = colors[0].hex.clone();

    let mut store = PaletteStore::open(MemoryStorage::new());
    let mut palette = Palette::new("Punch", colors, &[]);
    let id = palette.id.clone();
    store.upsert(palette.clone()).unwrap();

    palette.colors = generator
        .regenerate(&palette.colors, PaletteKind::Analogous, None)
        .unwrap();
    store.upsert(palette).unwrap();

    assert_eq!(store.len(), 1);
    let stored = store.get(&id).unwrap();
    assert_eq!(stored.colors.len(), 4);
    assert_eq!(stored.colors[0].hex, kept);
    assert!(stored.colors[0].locked);
    assert!(stored.colors[1..].iter().all(|c| !c.locked));
}
