//! Doctor command implementation
//!
//! Checks the asset bundle and output directory.

use anyhow::Result;
use colored::Colorize;
use dimname_sprite::GlyphAtlas;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{DoctorCheck, DoctorOutput};
use crate::assets::{count_official_sprites, resolve_assets_dir, sheet_path};

/// Run the doctor command
///
/// Checks:
/// - Assets directory can be found
/// - Character sheet loads and covers the whole alphabet
/// - Official sprites present (informational)
/// - Output directory is writable
///
/// # Returns
/// Exit code: 0 if all checks pass, 1 if any fail
pub fn run(assets: Option<&str>, out_dir: &str, json_output: bool) -> Result<ExitCode> {
    let checks = collect_checks(assets, Path::new(out_dir));
    let all_ok = checks.iter().all(|c| c.ok);

    if json_output {
        let output = DoctorOutput {
            success: all_ok,
            version: env!("CARGO_PKG_VERSION").to_string(),
            checks,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human(&checks, all_ok);
    }

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Run every check without printing.
pub fn collect_checks(assets: Option<&str>, out_dir: &Path) -> Vec<DoctorCheck> {
    let mut checks = Vec::new();

    match resolve_assets_dir(assets.map(Path::new)) {
        Ok(dir) => {
            checks.push(DoctorCheck {
                name: "assets".to_string(),
                ok: true,
                detail: dir.display().to_string(),
            });

            let sheet = sheet_path(&dir);
            checks.push(match GlyphAtlas::load(&sheet) {
                Ok(atlas) => DoctorCheck {
                    name: "character_sheet".to_string(),
                    ok: true,
                    detail: format!("{} glyphs from {}", atlas.len(), sheet.display()),
                },
                Err(e) => DoctorCheck {
                    name: "character_sheet".to_string(),
                    ok: false,
                    detail: e.to_string(),
                },
            });

            checks.push(DoctorCheck {
                name: "official_sprites".to_string(),
                ok: true,
                detail: format!("{} found", count_official_sprites(&dir)),
            });
        }
        Err(e) => checks.push(DoctorCheck {
            name: "assets".to_string(),
            ok: false,
            detail: e.to_string(),
        }),
    }

    checks.push(check_output_dir(out_dir));
    checks
}

fn check_output_dir(out_dir: &Path) -> DoctorCheck {
    // The output directory is created on demand, so probe its nearest
    // existing ancestor.
    let probe_dir = out_dir
        .ancestors()
        .find(|p| p.is_dir())
        .unwrap_or_else(|| Path::new("."));
    let test_file = probe_dir.join(".dimname_write_test");

    match std::fs::write(&test_file, "test") {
        Ok(()) => {
            let _ = std::fs::remove_file(&test_file);
            DoctorCheck {
                name: "output_dir".to_string(),
                ok: true,
                detail: format!("{} is writable", probe_dir.display()),
            }
        }
        Err(e) => DoctorCheck {
            name: "output_dir".to_string(),
            ok: false,
            detail: format!("cannot write to {}: {}", probe_dir.display(), e),
        },
    }
}

fn print_human(checks: &[DoctorCheck], all_ok: bool) {
    println!("{}", "DIM Name Generator Doctor".cyan().bold());
    println!("{}", "=========================".cyan());
    println!();
    println!("{}", "Versions:".bold());
    println!("  {} dimname v{}", "->".green(), env!("CARGO_PKG_VERSION"));
    println!();
    println!("{}", "Checks:".bold());

    for check in checks {
        if check.ok {
            println!("  {} {} ({})", "ok".green(), check.name, check.detail.dimmed());
        } else {
            println!("  {} {}: {}", "!!".red(), check.name, check.detail);
        }
    }

    println!();
    if all_ok {
        println!("{} All checks passed!", "SUCCESS".green().bold());
    } else {
        println!(
            "{} Some checks failed. See above for details.",
            "WARNING".yellow().bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_assets_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("assets");
        let checks = collect_checks(missing.to_str(), tmp.path());
        assert_eq!(checks.len(), 2);
        assert!(!checks[0].ok);
        assert!(checks[1].ok);
    }

    #[test]
    fn test_missing_sheet_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let checks = collect_checks(tmp.path().to_str(), &tmp.path().join("output"));
        let sheet = checks.iter().find(|c| c.name == "character_sheet").unwrap();
        assert!(!sheet.ok);
        assert!(sheet.detail.contains("Font sprite sheet missing"));
        // Output dir does not exist yet but its parent is writable.
        assert!(checks.iter().find(|c| c.name == "output_dir").unwrap().ok);
    }
}
