//! End-to-end sprite generation tests.
//!
//! Every test runs against a synthetic character sheet written into a
//! temporary assets directory.
//!
//! ```bash
//! cargo test -p dimname-tests --test e2e_generation
//! ```

use dimname_cli::commands::generate::SpriteSource;
use dimname_cli::commands::json_output::GenerateResult;
use dimname_sprite::{Canvas, Rgb8, SpriteError, GLYPH_HEIGHT, GROWTH_INCREMENT};
use dimname_tests::fixtures::{count_non_background, outline_sheet, png_info};
use dimname_tests::harness::TestHarness;
use pretty_assertions::assert_eq;

// ============================================================================
// Generated sprites
// ============================================================================

#[test]
fn test_generate_test_name() {
    let harness = TestHarness::new();
    let outcome = harness.generate("test").unwrap();

    assert_eq!(outcome.source, SpriteSource::Generated);
    assert_eq!(outcome.path, harness.out_dir().join("TEST.png"));

    let info = png_info(&outcome.path);
    assert_eq!(info.width, GROWTH_INCREMENT);
    assert_eq!(info.height, GLYPH_HEIGHT);
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);

    // Four blocks, each ten rows tall, shifted by the centering margin.
    let sprite = harness.read_output("TEST.png");
    let render = outcome.render.as_ref().unwrap();
    assert_eq!(render.margins.left_margin, 23);
    let inked: usize = render.placements.iter().map(|p| p.width as usize * 10).sum();
    assert_eq!(count_non_background(&sprite), inked);
    for y in 0..GLYPH_HEIGHT {
        assert_eq!(sprite.get(0, y), Rgb8::BACKGROUND);
        assert_eq!(sprite.get(79, y), Rgb8::BACKGROUND);
    }
}

#[test]
fn test_generate_is_byte_identical() {
    let harness = TestHarness::new();
    let first = harness.generate("AGUMON").unwrap();
    let bytes_first = std::fs::read(&first.path).unwrap();
    let second = harness.generate("agumon").unwrap();
    let bytes_second = std::fs::read(&second.path).unwrap();

    assert_eq!(first.hash, second.hash);
    assert_eq!(bytes_first, bytes_second);
    assert_eq!(first.hash, blake3::hash(&bytes_first).to_hex().to_string());
}

#[test]
fn test_long_name_grows_to_two_increments() {
    let harness = TestHarness::new();
    let outcome = harness.generate("WWWWWW").unwrap();
    let render = outcome.render.unwrap();

    assert_eq!(outcome.width, 2 * GROWTH_INCREMENT);
    assert_eq!(render.growth_events, 1);
    assert_eq!(render.margins.ink_width, 87);
    // Serif first glyph on a two-increment canvas.
    assert_eq!(render.margins.left_margin, 1);
}

#[test]
fn test_sanitized_file_name() {
    let harness = TestHarness::new();
    let outcome = harness.generate("MR. X: 2").unwrap();
    assert_eq!(outcome.path, harness.out_dir().join("MR X 2.png"));
    assert_eq!(outcome.name, "MR. X: 2");

    let result = GenerateResult::from(&outcome);
    assert_eq!(result.name, "MR. X: 2");
    assert_eq!(result.file_name, "MR X 2.png");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["file_name"], "MR X 2.png");
}

#[test]
fn test_outline_glyphs_render() {
    let harness = TestHarness::with_sheet(&outline_sheet());
    let outcome = harness.generate("HELLO").unwrap();
    let render = outcome.render.unwrap();
    let xs: Vec<u32> = render.placements.iter().map(|p| p.x).collect();
    // Outline glyphs still have ink in both edge columns, so every pair
    // collides exactly once.
    assert_eq!(xs, vec![2, 12, 19, 26, 33]);
}

// ============================================================================
// MON fallback
// ============================================================================

#[test]
fn test_mon_fallback_not_needed() {
    let harness = TestHarness::new();
    let outcome = harness.generate("AGUMON").unwrap();
    let render = outcome.render.unwrap();
    assert_eq!(render.mon_anchor, None);
    let xs: Vec<u32> = render.placements.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![2, 13, 25, 35, 49, 61]);

    // The sprite is exactly the generic layout shifted by the margin.
    let sprite = harness.read_output("AGUMON.png");
    for p in &render.placements {
        let x = p.x + render.margins.left_margin;
        assert!(sprite.is_ink(x, 5));
        assert!(sprite.is_ink(x + p.width - 1, 12));
    }
}

#[test]
fn test_mon_fallback_on_tight_single_increment() {
    let harness = TestHarness::new();
    let outcome = harness.generate("GABUMON").unwrap();
    let render = outcome.render.unwrap();

    assert_eq!(outcome.width, 80);
    assert_eq!(render.margins.ink_width, 77);
    assert_eq!(render.margins.left_margin, 0);
    assert_eq!(render.mon_anchor, Some(44));

    // M at 44..56, O at 57..67, N at 68..78, blank gaps in between.
    let sprite = harness.read_output("GABUMON.png");
    let ink_cols: Vec<u32> = (44..80).filter(|&x| sprite.is_ink(x, 6)).collect();
    let expected: Vec<u32> = (44..56).chain(57..67).chain(68..78).collect();
    assert_eq!(ink_cols, expected);
}

#[test]
fn test_mon_fallback_ignores_prefix() {
    let harness = TestHarness::new();
    let a = harness.generate("GYFROAULQJHGMON").unwrap();
    let b = harness.generate("UCQKOCICZYKAMON").unwrap();
    let (ra, rb) = (a.render.unwrap(), b.render.unwrap());

    assert_eq!(a.width, 160);
    assert_eq!(b.width, 160);
    assert_eq!(ra.mon_anchor, Some(124));
    assert_eq!(rb.mon_anchor, Some(124));
    assert_eq!(ra.margins.left_margin, rb.margins.left_margin);

    let sa = harness.read_output("GYFROAULQJHGMON.png");
    let sb = harness.read_output("UCQKOCICZYKAMON.png");
    let start = 124 + ra.margins.left_margin;
    for x in start..160 {
        for y in 0..GLYPH_HEIGHT {
            assert_eq!(sa.get(x, y), sb.get(x, y), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_mon_fallback_one_pixel_further_left() {
    let harness = TestHarness::new();
    let outcome = harness.generate("GIDIRGXOAHANMON").unwrap();
    let render = outcome.render.unwrap();
    // Right edge of ink lands two pixels short of the canvas.
    assert_eq!(render.margins.ink_width + 2 + render.margins.left_margin as i32, 158);
    assert_eq!(render.mon_anchor, Some(123));
}

// ============================================================================
// Official sprites
// ============================================================================

#[test]
fn test_official_sprite_copied() {
    let harness = TestHarness::new();
    let mut official = Canvas::new_background(72, GLYPH_HEIGHT);
    for x in 10..20 {
        official.set(x, 7, Rgb8::INK);
    }
    harness.install_official("AGUMON", &official);

    let outcome = harness.generate("agumon").unwrap();
    assert_eq!(outcome.source, SpriteSource::Official);
    assert!(outcome.render.is_none());
    assert_eq!(outcome.width, 72);
    assert_eq!(harness.read_output("AGUMON.png"), official);

    let result = GenerateResult::from(&outcome);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["source"], "official");
    assert!(json.get("ink_width").is_none());
    assert!(json.get("placements").is_none());
}

#[test]
fn test_official_sprite_requires_exact_name() {
    let harness = TestHarness::new();
    harness.install_official("AGUMON", &Canvas::new_background(72, GLYPH_HEIGHT));

    let outcome = harness.generate("AGUMON ").unwrap();
    assert_eq!(outcome.source, SpriteSource::Generated);
    assert_eq!(outcome.width, 80);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_unsupported_character_writes_nothing() {
    let harness = TestHarness::new();
    let err = harness.generate("TEST!").unwrap_err();
    assert!(matches!(
        err,
        SpriteError::UnsupportedCharacter { character: '!', .. }
    ));
    assert!(err.to_string().contains("A-Z -:.() 0-9"));
    assert!(!harness.out_dir().exists());
    assert_eq!(harness.output_count(), 0);
}

#[test]
fn test_unsupported_character_checked_before_official_lookup() {
    let harness = TestHarness::new();
    harness.install_official("HI!", &Canvas::new_background(72, GLYPH_HEIGHT));
    assert!(harness.generate("HI!").is_err());
    assert_eq!(harness.output_count(), 0);
}

#[test]
fn test_missing_sheet() {
    let harness = TestHarness::empty();
    std::fs::create_dir_all(harness.assets_dir()).unwrap();
    let err = harness.generate("TEST").unwrap_err();
    assert!(matches!(err, SpriteError::MissingAtlasAsset { .. }));
    assert!(err.to_string().contains("VB_Alphabet_ENG.png"));
}

#[test]
fn test_corrupt_sheet() {
    let harness = TestHarness::empty();
    std::fs::create_dir_all(harness.assets_dir()).unwrap();
    std::fs::write(
        harness.assets_dir().join(dimname_sprite::SHEET_FILE_NAME),
        b"garbage",
    )
    .unwrap();
    assert!(matches!(
        harness.generate("TEST"),
        Err(SpriteError::AtlasDecode { .. })
    ));
}
