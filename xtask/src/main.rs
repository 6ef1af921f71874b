//! Developer tasks for the restyle workspace.
//!
//! Currently only generates the man page from the clap CLI definition:
//!
//! ```sh
//! cargo run -p xtask -- man
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

#[derive(Parser)]
enum Task {
    /// Generate the restyle(1) man page.
    Man {
        /// Output directory for the generated page.
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Task::parse() {
        Task::Man { out_dir } => {
            let cmd = restyle::cli::Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut rendered = Vec::new();
            man.render(&mut rendered)
                .context("failed to render man page")?;

            fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;
            let path = out_dir.join("restyle.1");
            fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
            Ok(())
        }
    }
}
