//! Row-probe kerning.
//!
//! Glyphs are placed left to right. Before each paste the engine walks a band
//! of rows where the new glyph has ink in its leading column, and checks a
//! five-pixel window of the canvas two columns to the left. Any ink there
//! means the previous glyph would touch, so the glyph is nudged right one
//! pixel and the same row is checked again. The result is the tight but
//! never touching spacing of the official name sprites, without a pair table.

use std::ops::RangeInclusive;

use crate::atlas::{Glyph, GLYPH_HEIGHT};
use crate::canvas::{Canvas, GROWTH_INCREMENT};

/// Rows checked for collisions, excluding the top and bottom margins.
pub const PROBE_BAND: RangeInclusive<u32> = 3..=12;

/// Half-height of the probe window around a row.
pub const PROBE_REACH: u32 = 2;

/// How far left of the cursor the probe column sits.
pub const PROBE_OFFSET: u32 = 2;

/// Cursor position before the first glyph.
pub const LEFT_INSET: u32 = 1;

/// Gap added to the cursor before every glyph.
pub const GLYPH_GAP: u32 = 1;

/// Where one glyph was pasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub character: char,
    pub x: u32,
    pub width: u32,
}

/// Composited canvas and placements, before margins are applied.
#[derive(Debug, Clone)]
pub struct Layout {
    pub canvas: Canvas,
    pub placements: Vec<Placement>,
    /// Cursor after the last glyph.
    pub cursor: u32,
    /// Number of growth increments added beyond the starting width.
    pub growth_events: u32,
}

/// Lay out a sequence of glyphs on a fresh canvas.
pub fn layout(glyphs: &[&Glyph]) -> Layout {
    let mut canvas = Canvas::new_background(GROWTH_INCREMENT, GLYPH_HEIGHT);
    let mut placements = Vec::with_capacity(glyphs.len());
    let mut growth_events = 0;
    let mut x = LEFT_INSET;

    for glyph in glyphs {
        x += GLYPH_GAP;
        growth_events += canvas.ensure_capacity(x + glyph.width());

        x = resolve_offset(&mut canvas, glyph, x, &mut growth_events);

        canvas.paste(glyph.pixels(), x, 0);
        placements.push(Placement {
            character: glyph.character(),
            x,
            width: glyph.width(),
        });
        x += glyph.width();
    }

    Layout {
        canvas,
        placements,
        cursor: x,
        growth_events,
    }
}

/// Nudge `x` right until the glyph's leading edge clears existing ink.
fn resolve_offset(canvas: &mut Canvas, glyph: &Glyph, mut x: u32, growth_events: &mut u32) -> u32 {
    let mut y = *PROBE_BAND.start();
    while y <= *PROBE_BAND.end() {
        if !glyph.is_ink(0, y) {
            y += 1;
            continue;
        }

        let window = y - PROBE_REACH..=y + PROBE_REACH;
        if canvas.column_has_ink(x - PROBE_OFFSET, window) {
            x += 1;
            *growth_events += canvas.ensure_capacity(x + glyph.width());
        } else {
            y += 1;
        }
    }
    x
}
