//! Synthetic character sheets and PNG inspection helpers.

use std::path::Path;

use dimname_sprite::atlas::{required_sheet_width, CHARACTER_TABLE};
use dimname_sprite::layout::PROBE_BAND;
use dimname_sprite::{Canvas, GlyphAtlas, Rgb8, GLYPH_HEIGHT};

/// Sheet where every glyph except space is a solid block across the probe band.
///
/// Adjacent blocks always collide once, so each glyph after the first lands
/// two pixels after the previous one ends.
pub fn block_sheet() -> Canvas {
    sheet_from(|_, _| true)
}

/// Sheet where glyphs have ink only in their first and last columns.
pub fn outline_sheet() -> Canvas {
    sheet_from(|col, width| col == 0 || col + 1 == width)
}

/// Build a sheet, inking column `col` of a glyph of `width` when `ink` says so.
pub fn sheet_from(ink: impl Fn(u32, u32) -> bool) -> Canvas {
    let mut sheet = Canvas::new_background(required_sheet_width(), GLYPH_HEIGHT);
    for &(c, x0, x1) in CHARACTER_TABLE.iter() {
        if c == ' ' {
            continue;
        }
        let width = x1 - x0;
        for col in 0..width {
            if !ink(col, width) {
                continue;
            }
            for y in PROBE_BAND {
                sheet.set(x0 + col, y, Rgb8::INK);
            }
        }
    }
    sheet
}

/// Atlas cropped from [`block_sheet`].
pub fn block_atlas() -> GlyphAtlas {
    GlyphAtlas::from_sheet(&block_sheet()).expect("block sheet covers the table")
}

/// Count pixels of `canvas` that are not the background color.
pub fn count_non_background(canvas: &Canvas) -> usize {
    (0..canvas.height())
        .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.get(x, y) != Rgb8::BACKGROUND)
        .count()
}

/// Header facts about a PNG file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngInfo {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub bit_depth: png::BitDepth,
}

/// Read the PNG header of `path`.
pub fn png_info(path: &Path) -> PngInfo {
    let file = std::fs::File::open(path).expect("open png");
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let reader = decoder.read_info().expect("read png header");
    let info = reader.info();
    PngInfo {
        width: info.width,
        height: info.height,
        color_type: info.color_type,
        bit_depth: info.bit_depth,
    }
}
