//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json` and then prints exactly one of the
//! documents below on stdout instead of colored text.

use dimname_sprite::SpriteError;
use serde::{Deserialize, Serialize};

use super::generate::{GenerateOutcome, SpriteSource};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// Master character sheet missing, undecodable or too small
    pub const MISSING_ATLAS: &str = "NAME_001";
    /// Name contains a character with no glyph
    pub const UNSUPPORTED_CHARACTER: &str = "NAME_002";
    /// Name is empty
    pub const EMPTY_NAME: &str = "NAME_003";
    /// File system error
    pub const IO: &str = "NAME_004";
    /// PNG encode/decode error
    pub const PNG: &str = "NAME_005";
    /// Asset bundle not found
    pub const MISSING_RUNTIME_DEPENDENCY: &str = "NAME_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "NAME_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// The offending character, for unsupported-character errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<char>,
    /// Suggestion for fixing the error (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            character: None,
            suggestion: None,
        }
    }

    /// Sets a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Map a sprite error to its stable JSON form.
pub fn sprite_error_to_json(err: &SpriteError) -> JsonError {
    let message = err.to_string();
    match err {
        SpriteError::MissingAtlasAsset { .. }
        | SpriteError::AtlasDecode { .. }
        | SpriteError::AtlasTooSmall { .. } => JsonError::new(error_codes::MISSING_ATLAS, message),
        SpriteError::UnsupportedCharacter {
            character,
            supported,
        } => JsonError {
            character: Some(*character),
            ..JsonError::new(error_codes::UNSUPPORTED_CHARACTER, message)
                .with_suggestion(format!("use only \"{}\"", supported))
        },
        SpriteError::EmptyName { .. } => JsonError::new(error_codes::EMPTY_NAME, message),
        SpriteError::MissingRuntimeDependency { .. } => {
            JsonError::new(error_codes::MISSING_RUNTIME_DEPENDENCY, message)
                .with_suggestion("run `dimname doctor` to see where assets are searched")
        }
        SpriteError::Png(_) => JsonError::new(error_codes::PNG, message),
        SpriteError::Io(_) => JsonError::new(error_codes::IO, message),
    }
}

/// Where one glyph was placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonPlacement {
    pub character: char,
    pub x: u32,
    pub width: u32,
}

/// Result details for a written sprite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateResult {
    /// Normalized name
    pub name: String,
    /// Whether the sprite was copied or generated
    pub source: SpriteSource,
    /// Sanitized output file name
    pub file_name: String,
    /// Output file path
    pub output_path: String,
    pub width: u32,
    pub height: u32,
    /// Ink width (generated sprites only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ink_width: Option<i32>,
    /// Left margin (generated sprites only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_margin: Option<u32>,
    /// Whether the `MON` fallback was drawn
    pub mon_override: bool,
    /// Glyph placements before the margin shift
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub placements: Vec<JsonPlacement>,
    /// BLAKE3 hash of the written PNG
    pub hash: String,
}

impl From<&GenerateOutcome> for GenerateResult {
    fn from(outcome: &GenerateOutcome) -> Self {
        let render = outcome.render.as_ref();
        Self {
            name: outcome.name.clone(),
            source: outcome.source,
            file_name: outcome
                .path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default(),
            output_path: outcome.path.display().to_string(),
            width: outcome.width,
            height: outcome.height,
            ink_width: render.map(|r| r.margins.ink_width),
            left_margin: render.map(|r| r.margins.left_margin),
            mon_override: render.is_some_and(|r| r.mon_anchor.is_some()),
            placements: render
                .map(|r| {
                    r.placements
                        .iter()
                        .map(|p| JsonPlacement {
                            character: p.character,
                            x: p.x,
                            width: p.width,
                        })
                        .collect()
                })
                .unwrap_or_default(),
            hash: outcome.hash.clone(),
        }
    }
}

/// JSON output for sprite generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(result: GenerateResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// One environment check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoctorCheck {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

/// JSON output for the `doctor` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorOutput {
    pub success: bool,
    pub version: String,
    pub checks: Vec<DoctorCheck>,
}
