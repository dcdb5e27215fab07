//! Error types for sprite rendering.

use std::path::PathBuf;

use thiserror::Error;

use crate::png::PngError;

/// Errors that can occur while loading the atlas or rendering a name.
#[derive(Debug, Error)]
pub enum SpriteError {
    /// The master character sheet does not exist.
    #[error("Font sprite sheet missing: {}", path.display())]
    MissingAtlasAsset { path: PathBuf },

    /// The master character sheet exists but could not be decoded.
    #[error("Font sprite sheet {} could not be decoded: {source}", path.display())]
    AtlasDecode {
        path: PathBuf,
        #[source]
        source: PngError,
    },

    /// The master character sheet is smaller than the character table needs.
    #[error(
        "Font sprite sheet is {width}x{height}, expected at least {required_width}x{required_height}"
    )]
    AtlasTooSmall {
        width: u32,
        height: u32,
        required_width: u32,
        required_height: u32,
    },

    /// A requested character has no glyph in the atlas.
    #[error("Could not find letter {character:?} in character sheet. Available characters: \"{supported}\"")]
    UnsupportedCharacter {
        character: char,
        supported: &'static str,
    },

    /// The requested name has no characters.
    #[error("Name is empty. Available characters: \"{supported}\"")]
    EmptyName { supported: &'static str },

    /// Something the tool needs at runtime is not installed.
    #[error("Missing runtime dependency: {name} ({hint})")]
    MissingRuntimeDependency { name: String, hint: String },

    /// PNG encoding or decoding error.
    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
