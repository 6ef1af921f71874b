//! Run orchestration: load, transform, verify, report, write.
//!
//! The two assets are processed independently — a read or write failure on
//! one never blocks the other's read/transform/write cycle; the first error
//! is reported once both have been attempted.

use anyhow::{Context, Result};

use crate::assets::{Asset, AssetKind};
use crate::cli::Cli;
use crate::pipeline::Pipeline;
use crate::report;
use crate::rules::catalog;
use crate::verify::{self, VerifySpec};

/// Apply the brief to both assets per the CLI options.
pub fn run(cli: &Cli) -> Result<()> {
    let pipeline = catalog::pipeline().context("failed to assemble the brief catalog")?;
    let verify_spec = catalog::verification().context("failed to assemble verification spec")?;

    if !cli.quiet {
        report::print_banner();
    }

    let stylesheet = process(
        AssetKind::Stylesheet,
        &cli.assets_dir.join(&cli.stylesheet),
        &pipeline,
        Some(&verify_spec),
        cli,
    );
    let script = process(
        AssetKind::Script,
        &cli.assets_dir.join(&cli.script),
        &pipeline,
        None,
        cli,
    );

    if !cli.quiet && cli.dry_run {
        println!("\ndry run: no files were written");
    }

    match (stylesheet, script) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(err), _) | (_, Err(err)) => Err(err),
    }
}

fn process(
    kind: AssetKind,
    path: &std::path::Path,
    pipeline: &Pipeline,
    verify_spec: Option<&VerifySpec>,
    cli: &Cli,
) -> Result<()> {
    let mut asset = Asset::load(kind, path.to_path_buf())?;
    if !cli.quiet {
        report::print_asset_info(&asset);
    }

    let before = std::mem::take(&mut asset.text);
    let (after, outcomes) = pipeline.run(kind, &before);

    if !cli.quiet {
        report::print_stage_outcomes(&outcomes);
        report::print_summary(&before, &after);
    }

    if let Some(spec) = verify_spec {
        let verdict = verify::inspect(&after, spec);
        report::print_verification(&verdict, !cli.quiet);
    }

    if cli.dry_run {
        if !cli.quiet {
            report::print_diff_preview(
                &before,
                &after,
                cli.preview_lines,
                atty::is(atty::Stream::Stdout),
            );
        }
        return Ok(());
    }

    asset.text = after;
    asset.write()
}
