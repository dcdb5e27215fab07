//! DIM name generator - renders name sprites for Vital Bracelet DIM cards.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use dimname_cli::commands;

mod cli_args;
use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Doctor {
            assets,
            out_dir,
            json,
        }) => commands::doctor::run(assets.as_deref(), &out_dir, json),
        None => {
            let args = cli.generate;
            commands::generate::run(
                args.name.as_deref(),
                args.assets.as_deref(),
                &args.out_dir,
                args.json,
            )
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_name_flag() {
        let cli = Cli::try_parse_from(["dimname", "-n", "agumon"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.generate.name.as_deref(), Some("agumon"));
        assert_eq!(cli.generate.out_dir, "output");
        assert!(!cli.generate.json);
    }

    #[test]
    fn test_cli_parses_long_flags() {
        let cli = Cli::try_parse_from([
            "dimname",
            "--name",
            "MR. X",
            "--assets",
            "bundle",
            "--out-dir",
            "sprites",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.generate.name.as_deref(), Some("MR. X"));
        assert_eq!(cli.generate.assets.as_deref(), Some("bundle"));
        assert_eq!(cli.generate.out_dir, "sprites");
        assert!(cli.generate.json);
    }

    #[test]
    fn test_cli_name_optional() {
        let cli = Cli::try_parse_from(["dimname"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.generate.name.is_none());
    }

    #[test]
    fn test_cli_parses_doctor() {
        let cli = Cli::try_parse_from(["dimname", "doctor", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Doctor {
                assets,
                out_dir,
                json,
            }) => {
                assert!(assets.is_none());
                assert_eq!(out_dir, "output");
                assert!(json);
            }
            None => panic!("expected doctor command"),
        }
    }
}
