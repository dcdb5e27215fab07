//! Assets directory discovery and output file naming.

use std::path::{Path, PathBuf};

use dimname_sprite::{SpriteError, SHEET_FILE_NAME};

/// Environment variable that overrides the assets directory.
pub const ASSETS_DIR_ENV: &str = "DIMNAME_ASSETS_DIR";

/// Name of the assets directory searched next to the executable and in the
/// working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = "output";

/// Characters removed from a name before it is used as a file name.
pub const FILENAME_STRIP: &str = "%:/,.\\[]<>*?";

/// Find the assets directory.
///
/// An explicit `--assets` path must exist. Otherwise the search order is
/// `DIMNAME_ASSETS_DIR`, `assets/` next to the executable, then `./assets`.
pub fn resolve_assets_dir(explicit: Option<&Path>) -> Result<PathBuf, SpriteError> {
    if let Some(dir) = explicit {
        if dir.is_dir() {
            return Ok(dir.to_path_buf());
        }
        return Err(missing_bundle(&[dir.to_path_buf()]));
    }

    let mut searched = Vec::new();

    if let Ok(dir) = std::env::var(ASSETS_DIR_ENV) {
        searched.push(PathBuf::from(dir));
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        searched.push(exe_dir.join(DEFAULT_ASSETS_DIR));
    }
    searched.push(PathBuf::from(DEFAULT_ASSETS_DIR));

    searched
        .iter()
        .find(|dir| dir.is_dir())
        .cloned()
        .ok_or_else(|| missing_bundle(&searched))
}

fn missing_bundle(searched: &[PathBuf]) -> SpriteError {
    let searched: Vec<String> = searched.iter().map(|p| p.display().to_string()).collect();
    SpriteError::MissingRuntimeDependency {
        name: format!("asset bundle ({}/{})", DEFAULT_ASSETS_DIR, SHEET_FILE_NAME),
        hint: format!(
            "pass --assets or set {}; searched: {}",
            ASSETS_DIR_ENV,
            searched.join(", ")
        ),
    }
}

/// Path of the master character sheet.
pub fn sheet_path(assets_dir: &Path) -> PathBuf {
    assets_dir.join(SHEET_FILE_NAME)
}

/// Path of a pre-made official sprite for `name`, if one exists.
pub fn official_sprite_path(assets_dir: &Path, name: &str) -> Option<PathBuf> {
    let path = assets_dir.join(format!("{}.png", name));
    path.is_file().then_some(path)
}

/// Number of official sprites bundled in the assets directory.
pub fn count_official_sprites(assets_dir: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(assets_dir) else {
        return 0;
    };
    entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| p.extension().is_some_and(|ext| ext == "png"))
        .filter(|p| p.file_name().is_some_and(|f| f != SHEET_FILE_NAME))
        .count()
}

/// Strip characters that are not safe in file names.
pub fn sanitize_filename(name: &str) -> String {
    name.chars().filter(|c| !FILENAME_STRIP.contains(*c)).collect()
}
