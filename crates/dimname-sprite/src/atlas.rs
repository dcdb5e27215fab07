//! Glyph atlas cropped from the master character sheet.
//!
//! The sheet is a single 15px strip of hand-drawn glyphs. Each supported
//! character maps to a fixed horizontal slice of it; the table below is the
//! complete alphabet. Glyphs are cropped once and never change afterwards.

use std::collections::HashMap;
use std::path::Path;

use crate::canvas::Canvas;
use crate::error::SpriteError;
use crate::png::read_rgb;

/// Height of every glyph, and therefore of every sprite.
pub const GLYPH_HEIGHT: u32 = 15;

/// File name of the master character sheet inside the assets directory.
pub const SHEET_FILE_NAME: &str = "VB_Alphabet_ENG.png";

/// Human-readable summary of the supported alphabet.
pub const SUPPORTED_ALPHABET: &str = "A-Z -:.() 0-9";

/// Characters whose glyph needs extra left clearance when it starts a name.
pub const SERIF_CHARACTERS: [char; 5] = ['A', 'M', 'S', 'V', 'W'];

/// Horizontal slice `[x0, x1)` of the master sheet for each character.
pub const CHARACTER_TABLE: [(char, u32, u32); 42] = [
    ('A', 0, 9),
    ('B', 10, 17),
    ('C', 18, 26),
    ('D', 27, 35),
    ('E', 36, 41),
    ('F', 42, 47),
    ('G', 48, 58),
    ('H', 59, 67),
    ('I', 68, 70),
    ('J', 71, 77),
    ('K', 78, 86),
    ('L', 87, 92),
    ('M', 93, 105),
    ('N', 106, 116),
    ('O', 117, 127),
    ('P', 128, 135),
    ('Q', 136, 146),
    ('R', 147, 154),
    ('S', 155, 163),
    ('T', 164, 170),
    ('U', 171, 179),
    ('V', 180, 190),
    ('W', 191, 204),
    ('X', 205, 215),
    ('Y', 216, 224),
    ('Z', 225, 234),
    (' ', 235, 239),
    ('-', 240, 244),
    (':', 245, 247),
    ('.', 248, 250),
    ('(', 251, 255),
    (')', 256, 260),
    ('1', 261, 264),
    ('2', 265, 270),
    ('3', 271, 276),
    ('4', 277, 281),
    ('5', 282, 287),
    ('6', 288, 294),
    ('7', 295, 300),
    ('8', 301, 307),
    ('9', 308, 314),
    ('0', 315, 321),
];

/// Minimum sheet width that covers every table entry.
pub fn required_sheet_width() -> u32 {
    CHARACTER_TABLE.iter().map(|&(_, _, x1)| x1).max().unwrap_or(0)
}

/// True if `c` belongs to the serif set.
pub fn is_serif(c: char) -> bool {
    SERIF_CHARACTERS.contains(&c)
}

/// A single character's bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    character: char,
    pixels: Canvas,
}

impl Glyph {
    /// Create a glyph from its pixels.
    pub fn new(character: char, pixels: Canvas) -> Self {
        Self { character, pixels }
    }

    /// The character this glyph draws.
    pub fn character(&self) -> char {
        self.character
    }

    /// Intrinsic width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// True if the glyph's pixel at `(x, y)` is ink.
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height() && self.pixels.is_ink(x, y)
    }

    /// Raw pixels.
    pub fn pixels(&self) -> &Canvas {
        &self.pixels
    }
}

/// Immutable map from supported character to glyph.
#[derive(Debug, Clone)]
pub struct GlyphAtlas {
    glyphs: HashMap<char, Glyph>,
}

impl GlyphAtlas {
    /// Load and crop the master sheet from disk.
    pub fn load(path: &Path) -> Result<Self, SpriteError> {
        if !path.is_file() {
            return Err(SpriteError::MissingAtlasAsset {
                path: path.to_path_buf(),
            });
        }
        let sheet = read_rgb(path).map_err(|source| SpriteError::AtlasDecode {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_sheet(&sheet)
    }

    /// Crop every table entry out of an already decoded sheet.
    pub fn from_sheet(sheet: &Canvas) -> Result<Self, SpriteError> {
        let required_width = required_sheet_width();
        if sheet.width() < required_width || sheet.height() < GLYPH_HEIGHT {
            return Err(SpriteError::AtlasTooSmall {
                width: sheet.width(),
                height: sheet.height(),
                required_width,
                required_height: GLYPH_HEIGHT,
            });
        }

        let glyphs = CHARACTER_TABLE
            .iter()
            .map(|&(c, x0, x1)| (c, Glyph::new(c, sheet.crop(x0, 0, x1 - x0, GLYPH_HEIGHT))))
            .collect();

        Ok(Self { glyphs })
    }

    /// Look up the glyph for a character.
    pub fn lookup(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c)
    }

    /// Number of glyphs in the atlas.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// True if the atlas holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Resolve every character of `name` to its glyph.
    ///
    /// Fails on the first character without a glyph, before any caller has
    /// had a chance to touch a canvas.
    pub fn glyphs_for(&self, name: &str) -> Result<Vec<&Glyph>, SpriteError> {
        if name.is_empty() {
            return Err(SpriteError::EmptyName {
                supported: SUPPORTED_ALPHABET,
            });
        }
        name.chars()
            .map(|c| {
                self.lookup(c).ok_or(SpriteError::UnsupportedCharacter {
                    character: c,
                    supported: SUPPORTED_ALPHABET,
                })
            })
            .collect()
    }
}
