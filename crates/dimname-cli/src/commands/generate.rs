//! Generate command implementation
//!
//! Renders a name sprite, or copies the official one when the assets
//! directory already has a sprite for the exact name.

use anyhow::Result;
use colored::Colorize;
use dimname_sprite::png::{read_rgb, write_rgb_to_vec_with_hash};
use dimname_sprite::{normalize_name, render_name, GlyphAtlas, PngConfig, SpriteError, SpriteRender};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::json_output::{sprite_error_to_json, GenerateOutput, GenerateResult};
use crate::assets::{official_sprite_path, resolve_assets_dir, sanitize_filename, sheet_path};
use crate::input::prompt_name;

/// Where the written sprite came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteSource {
    /// Re-encoded from a pre-made sprite in the assets directory.
    Official,
    /// Laid out from the character sheet.
    Generated,
}

/// A sprite written to disk.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// Normalized name.
    pub name: String,
    pub source: SpriteSource,
    /// Output file path.
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// BLAKE3 hash of the PNG bytes.
    pub hash: String,
    /// Layout details, for generated sprites.
    pub render: Option<SpriteRender>,
}

/// Validate `name`, then write its sprite into `out_dir`.
///
/// `name` must already be normalized. Nothing is created on disk unless every
/// character has a glyph.
pub fn generate_sprite(
    atlas: &GlyphAtlas,
    assets_dir: &Path,
    out_dir: &Path,
    name: &str,
) -> Result<GenerateOutcome, SpriteError> {
    atlas.glyphs_for(name)?;

    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("{}.png", sanitize_filename(name)));
    let config = PngConfig::default();

    if let Some(official) = official_sprite_path(assets_dir, name) {
        let image = read_rgb(&official)?;
        let (data, hash) = write_rgb_to_vec_with_hash(&image, &config)?;
        fs::write(&path, &data)?;
        return Ok(GenerateOutcome {
            name: name.to_string(),
            source: SpriteSource::Official,
            path,
            width: image.width(),
            height: image.height(),
            hash,
            render: None,
        });
    }

    let render = render_name(atlas, name)?;
    let (data, hash) = write_rgb_to_vec_with_hash(&render.image, &config)?;
    fs::write(&path, &data)?;

    Ok(GenerateOutcome {
        name: name.to_string(),
        source: SpriteSource::Generated,
        path,
        width: render.width(),
        height: render.height(),
        hash,
        render: Some(render),
    })
}

/// Run the generate command
///
/// # Arguments
/// * `name` - Name to render; prompted for on stdin when absent
/// * `assets` - Explicit assets directory
/// * `out_dir` - Output directory (created if missing)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    name: Option<&str>,
    assets: Option<&str>,
    out_dir: &str,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(name, assets, out_dir)
    } else {
        run_human(name, assets, out_dir)
    }
}

/// Load the atlas and read the name, in that order.
fn prepare(
    name: Option<&str>,
    assets: Option<&str>,
    json_output: bool,
) -> Result<(PathBuf, GlyphAtlas, String), SpriteError> {
    let assets_dir = resolve_assets_dir(assets.map(Path::new))?;
    let atlas = GlyphAtlas::load(&sheet_path(&assets_dir))?;

    let raw = match name {
        Some(name) => name.to_string(),
        None if json_output => prompt_name(io::stdin().lock(), io::stderr())?,
        None => prompt_name(io::stdin().lock(), io::stdout())?,
    };

    Ok((assets_dir, atlas, normalize_name(&raw)))
}

/// Run generate with human-readable (colored) output
fn run_human(name: Option<&str>, assets: Option<&str>, out_dir: &str) -> Result<ExitCode> {
    println!();
    println!("{}", "======== DIM Name Generator ========".cyan().bold());
    println!();

    let result = prepare(name, assets, false).and_then(|(assets_dir, atlas, name)| {
        generate_sprite(&atlas, &assets_dir, Path::new(out_dir), &name)
    });

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            print_error(&e);
            return Ok(ExitCode::from(1));
        }
    };

    match &outcome.render {
        None => {
            println!(
                "{}",
                "String found among official Bandai sprites. Using official sprite.".yellow()
            );
        }
        Some(render) => {
            println!(
                "{} {}, width: {}px",
                "Creating sprite".cyan().bold(),
                outcome.name,
                outcome.width
            );
            println!(
                "  {} ink {}px, left margin {}px{}",
                "->".dimmed(),
                render.margins.ink_width,
                render.margins.left_margin,
                if render.mon_anchor.is_some() {
                    ", MON kerning fallback"
                } else {
                    ""
                }
            );
        }
    }

    println!(
        "{} {}",
        "Saving file to".cyan().bold(),
        outcome.path.display()
    );
    println!("{} {}", "Hash:".dimmed(), &outcome.hash[..16]);
    println!("{}", "Completed Successfully.".green().bold());

    Ok(ExitCode::SUCCESS)
}

/// Run generate with JSON output
fn run_json(name: Option<&str>, assets: Option<&str>, out_dir: &str) -> Result<ExitCode> {
    let result = prepare(name, assets, true).and_then(|(assets_dir, atlas, name)| {
        generate_sprite(&atlas, &assets_dir, Path::new(out_dir), &name)
    });

    let (output, code) = match result {
        Ok(outcome) => (
            GenerateOutput::success(GenerateResult::from(&outcome)),
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            GenerateOutput::failure(vec![sprite_error_to_json(&e)]),
            ExitCode::from(1),
        ),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

fn print_error(err: &SpriteError) {
    eprintln!("{} {}", "error:".red().bold(), err);
    if let SpriteError::MissingRuntimeDependency { .. } = err {
        eprintln!(
            "  {}",
            "Run `dimname doctor` to see where assets are searched.".dimmed()
        );
    }
}
