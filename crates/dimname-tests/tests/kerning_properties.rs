//! Layout properties that must hold for every input.

use dimname_sprite::atlas::{is_serif, CHARACTER_TABLE};
use dimname_sprite::compose::render_name;
use dimname_sprite::layout::layout;
use dimname_sprite::margin::WIDE_TIER_LIMIT;
use dimname_sprite::{GLYPH_HEIGHT, GROWTH_INCREMENT};
use dimname_tests::fixtures::{block_atlas, outline_sheet};

/// Names covering one, two and three canvas increments.
const NAMES: &[&str] = &[
    "A",
    "TEST",
    "AGUMON",
    "DIGIMON",
    "WWWWWW",
    "MR. X: (2)",
    "0123456789",
    "THE QUICK BROWN FOX",
    "JUMPS OVER THE LAZY DOG 1999",
];

#[test]
fn test_single_characters_stay_in_one_increment() {
    let atlas = block_atlas();
    for &(c, x0, x1) in CHARACTER_TABLE.iter() {
        let render = render_name(&atlas, &c.to_string()).unwrap();
        assert_eq!(render.width(), GROWTH_INCREMENT, "{c:?}");
        assert_eq!(render.growth_events, 0, "{c:?}");
        if c != ' ' {
            let width = (x1 - x0) as i32;
            assert!(
                (render.margins.ink_width - width).abs() <= 2,
                "{c:?}: ink {} vs glyph {}",
                render.margins.ink_width,
                width
            );
        }
    }
}

#[test]
fn test_canvas_width_is_whole_increments() {
    let atlas = block_atlas();
    for name in NAMES {
        let render = render_name(&atlas, name).unwrap();
        assert_eq!(render.width() % GROWTH_INCREMENT, 0, "{name}");
        assert_eq!(render.height(), GLYPH_HEIGHT, "{name}");
        assert_eq!(
            render.width() / GROWTH_INCREMENT,
            1 + render.growth_events,
            "{name}"
        );
        // Growth only when the cursor actually passed the first increment.
        assert_eq!(render.growth_events == 0, render.cursor <= GROWTH_INCREMENT, "{name}");
    }
}

#[test]
fn test_placements_inside_canvas_and_ordered() {
    let atlas = block_atlas();
    for name in NAMES {
        let glyphs = atlas.glyphs_for(name).unwrap();
        let result = layout(&glyphs);
        let mut prev_end = 0;
        for p in &result.placements {
            assert!(p.x + p.width <= result.canvas.width(), "{name}: {p:?}");
            assert!(p.x > prev_end, "{name}: {p:?} overlaps previous glyph");
            prev_end = p.x + p.width - 1;
        }
    }
}

#[test]
fn test_layout_is_repeatable() {
    let atlases = [
        block_atlas(),
        dimname_sprite::GlyphAtlas::from_sheet(&outline_sheet()).unwrap(),
    ];
    for atlas in &atlases {
        for name in NAMES {
            let glyphs = atlas.glyphs_for(name).unwrap();
            let first = layout(&glyphs);
            let second = layout(&glyphs);
            assert_eq!(first.placements, second.placements, "{name}");
            assert_eq!(first.canvas, second.canvas, "{name}");
        }
    }
}

#[test]
fn test_wide_tier_margins_follow_lead_and_limit() {
    let atlas = block_atlas();
    for name in NAMES {
        let render = render_name(&atlas, name).unwrap();
        if render.width() == GROWTH_INCREMENT {
            continue;
        }
        let serif = name.chars().next().is_some_and(is_serif);
        let (lead, limit) = match (render.width() == 2 * GROWTH_INCREMENT, serif) {
            (true, true) => (3, 2 * GROWTH_INCREMENT),
            (true, false) => (4, 2 * GROWTH_INCREMENT),
            (false, true) => (5, WIDE_TIER_LIMIT),
            (false, false) => (6, WIDE_TIER_LIMIT),
        };
        let margin = render.margins.left_margin as i32;
        if render.margins.ink_width + lead > limit as i32 {
            assert_eq!(margin, 0, "{name}");
        } else {
            assert_eq!(margin, lead - 2, "{name}");
        }
    }
}

#[test]
fn test_four_increment_canvas_uses_the_240px_limit() {
    let atlas = block_atlas();
    let name = "W".repeat(17);
    let render = render_name(&atlas, &name).unwrap();

    assert_eq!(render.width(), 4 * GROWTH_INCREMENT);
    assert_eq!(render.growth_events, 3);
    assert_eq!(render.margins.ink_width, 252);
    // 252 + 5 passes 240 even though the canvas itself is 320 wide.
    assert_eq!(render.margins.left_margin, 0);
}
