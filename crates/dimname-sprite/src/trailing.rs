//! Hand-kerned fallback for names ending in `MON`.
//!
//! When the generic layout leaves less than three pixels on the right, the
//! final `M`, `O` and `N` are redrawn at fixed offsets from the right edge.
//! No other suffix gets this treatment.

use crate::atlas::GlyphAtlas;
use crate::canvas::Canvas;
use crate::error::SpriteError;
use crate::margin::{Margins, INK_WIDTH_CORRECTION};

/// Suffix that triggers the fallback.
pub const MON_SUFFIX: &str = "MON";

/// Minimum right clearance the generic layout must leave.
pub const MIN_RIGHT_CLEARANCE: i32 = 3;

/// Glyphs and their offsets from the anchor column.
///
/// The spaces blank out whatever the generic layout left between and after
/// the letters.
const MON_GEOMETRY: [(char, u32); 6] = [
    ('M', 0),
    (' ', 12),
    ('O', 13),
    (' ', 23),
    ('N', 24),
    (' ', 34),
];

/// Anchor column for the fallback, or `None` if the generic layout stands.
pub fn mon_anchor(name: &str, margins: Margins, canvas_width: u32) -> Option<u32> {
    if !name.ends_with(MON_SUFFIX) {
        return None;
    }

    let width = canvas_width as i32;
    let edge = margins.ink_width + INK_WIDTH_CORRECTION + margins.left_margin as i32;
    if edge <= width - MIN_RIGHT_CLEARANCE {
        return None;
    }

    let back = if edge == width - 1 { 36 } else { 37 };
    Some(canvas_width - back)
}

/// Paste the fixed `MON` geometry at `anchor`, clipping at the right edge.
pub fn apply_mon(canvas: &mut Canvas, atlas: &GlyphAtlas, anchor: u32) -> Result<(), SpriteError> {
    for (c, offset) in MON_GEOMETRY {
        let glyph = atlas.lookup(c).ok_or(SpriteError::UnsupportedCharacter {
            character: c,
            supported: crate::atlas::SUPPORTED_ALPHABET,
        })?;
        canvas.paste(glyph.pixels(), anchor + offset, 0);
    }
    Ok(())
}
