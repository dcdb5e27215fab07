//! CLI argument definitions for the `dimname` command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use dimname_cli::assets::DEFAULT_OUT_DIR;

/// Create name sprites from a string for Bandai Vital Bracelet DIM modification
#[derive(Parser)]
#[command(name = "dimname")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Arguments for rendering a sprite (the default action).
#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// The name string to generate (prompted for when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Assets directory holding VB_Alphabet_ENG.png and official sprites
    #[arg(long)]
    pub assets: Option<String>,

    /// Output directory (created if missing)
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: String,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check the asset bundle and output directory
    Doctor {
        /// Assets directory to check
        #[arg(long)]
        assets: Option<String>,

        /// Output directory to check
        #[arg(long, default_value = DEFAULT_OUT_DIR)]
        out_dir: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
