//! Ink width and left margin resolution.

use crate::atlas::is_serif;
use crate::canvas::{Canvas, GROWTH_INCREMENT};
use crate::layout::PROBE_BAND;

/// Subtracted from the rightmost ink column: one pixel of left inset plus
/// the one pixel gap added before the first glyph.
pub const INK_WIDTH_CORRECTION: i32 = 2;

/// Overflow limit shared by every canvas of three or more increments.
pub const WIDE_TIER_LIMIT: u32 = 3 * GROWTH_INCREMENT;

/// Final horizontal metrics of a laid out name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    /// Horizontal extent of the drawn ink. Negative when nothing was drawn.
    pub ink_width: i32,
    /// Shift applied to the composited canvas in the final sprite.
    pub left_margin: u32,
}

/// Measure ink and pick the left margin for `canvas`.
pub fn resolve(canvas: &Canvas, first: char) -> Margins {
    let ink_width = ink_width(canvas);
    Margins {
        ink_width,
        left_margin: left_margin(canvas.width(), ink_width, first),
    }
}

/// Find the rightmost column with ink in the probe band, minus the correction.
///
/// Column 0 is never inspected; a canvas without ink yields `-2`.
pub fn ink_width(canvas: &Canvas) -> i32 {
    let mut col = canvas.width().saturating_sub(1);
    while col > 0 && !canvas.column_has_ink(col, PROBE_BAND) {
        col -= 1;
    }
    col as i32 - INK_WIDTH_CORRECTION
}

/// Left margin for a canvas width tier.
///
/// One increment centers the ink. Two increments use a fixed 3px lead
/// (serif first glyph) or 4px, three or more use 5px or 6px. The lead drops
/// to zero once ink plus lead passes the tier limit, which is 160px for two
/// increments and 240px for every wider canvas.
pub fn left_margin(canvas_width: u32, ink_width: i32, first: char) -> u32 {
    let serif = is_serif(first);

    let margin = if canvas_width == GROWTH_INCREMENT {
        (GROWTH_INCREMENT as i32 - ink_width).div_euclid(2) - 2
    } else {
        let (lead, limit) = match (canvas_width == 2 * GROWTH_INCREMENT, serif) {
            (true, true) => (3, 2 * GROWTH_INCREMENT),
            (true, false) => (4, 2 * GROWTH_INCREMENT),
            (false, true) => (5, WIDE_TIER_LIMIT),
            (false, false) => (6, WIDE_TIER_LIMIT),
        };
        if ink_width + lead > limit as i32 {
            0
        } else {
            lead - 2
        }
    };

    margin.max(0) as u32
}
