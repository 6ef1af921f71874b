//! Command line surface.

use std::path::PathBuf;

use clap::Parser;

/// Apply the Design Brief v3 token and component changes to the shared
/// portal assets, in place.
///
/// The stylesheet passes through the full pipeline; the script asset
/// receives its single scripted change. A verification scan runs after the
/// rewrite and reports (but never enforces) any leftover old values.
#[derive(Debug, Parser)]
#[command(name = "restyle", version, about)]
pub struct Cli {
    /// Directory containing the shared assets.
    #[arg(long, default_value = "assets")]
    pub assets_dir: PathBuf,

    /// Stylesheet filename inside the assets directory.
    #[arg(long, default_value = "shared-styles.css")]
    pub stylesheet: String,

    /// Script filename inside the assets directory.
    #[arg(long, default_value = "shared-scripts.js")]
    pub script: String,

    /// Run the full pipeline in memory and report, but write nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress per-phase progress output (warnings still print).
    #[arg(short, long)]
    pub quiet: bool,

    /// Maximum changed lines shown in the --dry-run preview.
    #[arg(long, default_value_t = 40)]
    pub preview_lines: usize,
}
