//! Full name sprite pipeline: validate, lay out, measure, fix up, assemble.

use crate::atlas::GlyphAtlas;
use crate::canvas::Canvas;
use crate::error::SpriteError;
use crate::layout::{layout, Placement};
use crate::margin::{self, Margins};
use crate::trailing::{apply_mon, mon_anchor};

/// A rendered name sprite and the metrics that produced it.
#[derive(Debug, Clone)]
pub struct SpriteRender {
    /// Normalized (uppercase) name.
    pub name: String,
    /// Final sprite, margin applied.
    pub image: Canvas,
    pub placements: Vec<Placement>,
    pub margins: Margins,
    /// Cursor after the last glyph.
    pub cursor: u32,
    pub growth_events: u32,
    /// Anchor column if the `MON` fallback was drawn.
    pub mon_anchor: Option<u32>,
}

impl SpriteRender {
    /// Final canvas width.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Final canvas height.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Uppercase a raw name the way the sprite sheet expects it.
pub fn normalize_name(raw: &str) -> String {
    raw.trim_end_matches(['\r', '\n']).to_uppercase()
}

/// Render `name` with glyphs from `atlas`.
///
/// `name` must already be normalized. Every character is checked against the
/// atlas before anything is drawn.
pub fn render_name(atlas: &GlyphAtlas, name: &str) -> Result<SpriteRender, SpriteError> {
    let glyphs = atlas.glyphs_for(name)?;
    let first = glyphs[0].character();

    let laid_out = layout(&glyphs);
    let mut canvas = laid_out.canvas;
    let margins = margin::resolve(&canvas, first);

    let anchor = mon_anchor(name, margins, canvas.width());
    if let Some(anchor) = anchor {
        apply_mon(&mut canvas, atlas, anchor)?;
    }

    Ok(SpriteRender {
        name: name.to_string(),
        image: assemble(&canvas, margins.left_margin),
        placements: laid_out.placements,
        margins,
        cursor: laid_out.cursor,
        growth_events: laid_out.growth_events,
        mon_anchor: anchor,
    })
}

/// Shift `canvas` right by `left_margin` onto a fresh background of the same size.
pub fn assemble(canvas: &Canvas, left_margin: u32) -> Canvas {
    let mut out = Canvas::new_background(canvas.width(), canvas.height());
    out.paste(canvas, left_margin, 0);
    out
}
