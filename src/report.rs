//! Change counting and the console report.
//!
//! The report is advisory, human-readable output: per-stage change counts,
//! a size summary, verification results, and (for dry runs) a capped diff
//! preview. Counting is a positional line diff — same-index compare plus the
//! trailing length delta — not a real diff algorithm; insertions shift
//! everything after them and are counted as changed lines.

use crate::assets::Asset;
use crate::verify::VerifyReport;

/// ANSI escape codes for the diff preview.
mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const RESET: &str = "\x1b[0m";
}

/// Positional line diff between two buffer snapshots.
pub fn changed_lines(before: &str, after: &str) -> usize {
    let old: Vec<&str> = before.lines().collect();
    let new: Vec<&str> = after.lines().collect();
    let mut diff = 0;
    for (a, b) in old.iter().zip(new.iter()) {
        if a != b {
            diff += 1;
        }
    }
    diff + old.len().abs_diff(new.len())
}

/// Per-stage result collected by the pipeline.
#[derive(Debug)]
pub struct StageOutcome {
    pub stage: &'static str,
    pub lines_changed: usize,
    /// Declarations added by insert-shaped rules.
    pub insertions: usize,
}

pub fn print_banner() {
    println!("===================================================");
    println!("  restyle: applying Design Brief v3");
    println!("===================================================");
}

pub fn print_asset_info(asset: &Asset) {
    println!(
        "\n{}: {} ({} chars, {} lines)",
        asset.kind,
        asset.path.display(),
        asset.char_count(),
        asset.line_count()
    );
}

pub fn print_stage_outcomes(outcomes: &[StageOutcome]) {
    for outcome in outcomes {
        if outcome.insertions > 0 {
            println!(
                "  {}: {} lines changed, {} declarations added",
                outcome.stage, outcome.lines_changed, outcome.insertions
            );
        } else if outcome.lines_changed > 0 {
            println!("  {}: {} lines changed", outcome.stage, outcome.lines_changed);
        } else {
            println!("  {}: no changes (targets absent)", outcome.stage);
        }
    }
}

pub fn print_summary(before: &str, after: &str) {
    println!(
        "  total: {} lines changed, {} -> {} chars",
        changed_lines(before, after),
        before.chars().count(),
        after.chars().count()
    );
}

/// Print verification results. Warnings always print; the informational
/// counts only when `detail` is set.
pub fn print_verification(report: &VerifyReport, detail: bool) {
    if detail {
        println!("\n-- Verification --");
    }
    for residue in &report.residues {
        println!(
            "  WARNING: {} ({}) still appears {}x",
            residue.value, residue.token, residue.count
        );
    }
    if !detail {
        return;
    }
    if report.residues.is_empty() {
        println!("  OK: all old values replaced");
    }
    println!(
        "  {} blocks found: {} (expected {})",
        report.structure_label, report.structure_count, report.structure_expected
    );
    for (value, count) in &report.adoptions {
        println!("  {value}: {count} occurrences");
    }
}

/// Print a capped, positional diff preview of the pending changes.
///
/// Shows `-`/`+` pairs for lines that differ at the same index, in color
/// when stdout is a terminal.
pub fn print_diff_preview(before: &str, after: &str, max_lines: usize, color: bool) {
    let (red, green, reset) = if color {
        (ansi::RED, ansi::GREEN, ansi::RESET)
    } else {
        ("", "", "")
    };

    let old: Vec<&str> = before.lines().collect();
    let new: Vec<&str> = after.lines().collect();
    let mut shown = 0;

    for (a, b) in old.iter().zip(new.iter()) {
        if a == b {
            continue;
        }
        if shown >= max_lines {
            break;
        }
        println!("{red}- {a}{reset}");
        println!("{green}+ {b}{reset}");
        shown += 1;
    }

    let total = changed_lines(before, after);
    if total > shown {
        println!("  ... and {} more changed lines", total - shown);
    }
}
