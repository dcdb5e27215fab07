//! Test harness with a throwaway assets and output directory.

use std::path::{Path, PathBuf};

use dimname_cli::commands::generate::{generate_sprite, GenerateOutcome};
use dimname_sprite::png::{read_rgb, write_rgb};
use dimname_sprite::{normalize_name, Canvas, GlyphAtlas, PngConfig, SpriteError, SHEET_FILE_NAME};
use tempfile::TempDir;

use crate::fixtures::block_sheet;

/// A temporary working tree with `assets/` and `output/` directories.
pub struct TestHarness {
    /// Working directory for test outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a harness whose assets directory holds the block sheet.
    pub fn new() -> Self {
        Self::with_sheet(&block_sheet())
    }

    /// Create a harness with a specific character sheet.
    pub fn with_sheet(sheet: &Canvas) -> Self {
        let harness = Self::empty();
        std::fs::create_dir_all(harness.assets_dir()).expect("create assets dir");
        write_rgb(
            sheet,
            &harness.assets_dir().join(SHEET_FILE_NAME),
            &PngConfig::default(),
        )
        .expect("write sheet");
        harness
    }

    /// Create a harness with no assets at all.
    pub fn empty() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Assets directory.
    pub fn assets_dir(&self) -> PathBuf {
        self.path().join("assets")
    }

    /// Output directory (not created until something is written).
    pub fn out_dir(&self) -> PathBuf {
        self.path().join("output")
    }

    /// Install a pre-made official sprite for `name`.
    pub fn install_official(&self, name: &str, sprite: &Canvas) {
        write_rgb(
            sprite,
            &self.assets_dir().join(format!("{}.png", name)),
            &PngConfig::default(),
        )
        .expect("write official sprite");
    }

    /// Load the atlas from the assets directory.
    pub fn atlas(&self) -> Result<GlyphAtlas, SpriteError> {
        GlyphAtlas::load(&self.assets_dir().join(SHEET_FILE_NAME))
    }

    /// Normalize `raw` and generate its sprite.
    pub fn generate(&self, raw: &str) -> Result<GenerateOutcome, SpriteError> {
        let atlas = self.atlas()?;
        generate_sprite(
            &atlas,
            &self.assets_dir(),
            &self.out_dir(),
            &normalize_name(raw),
        )
    }

    /// Decode a written sprite.
    pub fn read_output(&self, file_name: &str) -> Canvas {
        read_rgb(&self.out_dir().join(file_name)).expect("read output sprite")
    }

    /// Number of files in the output directory (0 if it does not exist).
    pub fn output_count(&self) -> usize {
        std::fs::read_dir(self.out_dir())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
