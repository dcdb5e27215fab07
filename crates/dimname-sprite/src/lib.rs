//! Name sprite generation for Vital Bracelet DIM cards.
//!
//! Names are drawn from a master character sheet of pre-rasterized 15px
//! glyphs. Placement follows the kerning of the official name sprites:
//! every glyph is nudged right until its leading edge clears the ink already
//! on the canvas, the canvas grows in 80px steps, and the finished text gets
//! a left margin picked from the canvas width.
//!
//! # Example
//!
//! ```no_run
//! use dimname_sprite::{normalize_name, render_name, GlyphAtlas, PngConfig};
//! use std::path::Path;
//!
//! let atlas = GlyphAtlas::load(Path::new("assets/VB_Alphabet_ENG.png")).unwrap();
//! let name = normalize_name("agumon");
//! let render = render_name(&atlas, &name).unwrap();
//! dimname_sprite::png::write_rgb(&render.image, Path::new("AGUMON.png"), &PngConfig::default())
//!     .unwrap();
//! ```
//!
//! # Determinism
//!
//! Layout is a pure function of the name and the sheet, and PNG encoding
//! uses fixed settings, so the same input always produces the same bytes.

pub mod atlas;
pub mod canvas;
pub mod color;
pub mod compose;
pub mod error;
pub mod layout;
pub mod margin;
pub mod png;
pub mod trailing;

// Re-export main types for convenience
pub use atlas::{Glyph, GlyphAtlas, GLYPH_HEIGHT, SHEET_FILE_NAME, SUPPORTED_ALPHABET};
pub use canvas::{Canvas, GROWTH_INCREMENT};
pub use color::Rgb8;
pub use compose::{assemble, normalize_name, render_name, SpriteRender};
pub use error::SpriteError;
pub use layout::{layout, Layout, Placement};
pub use margin::Margins;
pub use crate::png::{PngConfig, PngError};
