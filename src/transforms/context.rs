//! Windowed contextual classification.
//!
//! Some literal values are ambiguous: `font-size: 32px` is a section heading
//! in one block and a timeline year in another. Without a structural parse,
//! the owning selector is recovered heuristically by scanning a fixed window
//! of preceding lines against allow/deny keyword lists. The window depth is
//! a deliberate trade-off, not a guarantee: deep enough to reach the
//! selector past intervening declarations, shallow enough to rarely bleed
//! into the previous block.

use tracing::debug;

use crate::rules::{ClassifyRule, CompanionRule, Window};

/// Classification over a context window.
///
/// This is the seam a structural implementation (selector -> block index)
/// could be swapped in behind; the windowed heuristic is the only
/// implementation today.
pub trait Classify {
    /// True when the window marks the candidate as an intended target.
    fn approves(&self, window: &str) -> bool;
}

impl Classify for Window {
    /// One deny hit vetoes; otherwise at least one allow hit is required.
    fn approves(&self, window: &str) -> bool {
        if self.deny.iter().any(|p| p.matches(window)) {
            return false;
        }
        self.allow.iter().any(|p| p.matches(window))
    }
}

/// Rewrite the needle on lines whose look-back window approves.
///
/// The window spans `lookback` lines before the candidate plus the candidate
/// itself, evaluated against the input lines; rewrites on earlier lines do
/// not feed later windows within one pass. Independent rules keep their own
/// windows and never affect each other.
pub fn rewrite_classified(text: &str, rule: &ClassifyRule) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut rewritten = 0;

    for (i, line) in lines.iter().enumerate() {
        if line.contains(&rule.needle) {
            let start = i.saturating_sub(rule.window.lookback);
            let window = lines[start..=i].join("\n");
            if rule.window.approves(&window) {
                out.push(line.replace(&rule.needle, &rule.replacement));
                rewritten += 1;
                continue;
            }
        }
        out.push((*line).to_string());
    }

    debug!(needle = %rule.needle, rewritten, "classified rewrite pass done");
    out.join("\n")
}

/// Adjust a companion property near an already-rewritten primary value.
///
/// Compact blocks carry both on one line and rewrite directly. Expanded
/// blocks require the primary within `radius` lines either side, plus an
/// approving look-back window.
pub fn rewrite_companion(text: &str, rule: &CompanionRule) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        if line.contains(&rule.needle) && line.contains(&rule.primary) {
            out.push(line.replace(&rule.needle, &rule.replacement));
            continue;
        }
        if line.contains(&rule.needle) {
            let near_start = i.saturating_sub(rule.radius);
            let near_end = (i + rule.radius).min(lines.len());
            let nearby = lines[near_start..near_end].join("\n");
            if nearby.contains(&rule.primary) {
                let start = i.saturating_sub(rule.window.lookback);
                let window = lines[start..=i].join("\n");
                if rule.window.approves(&window) {
                    out.push(line.replace(&rule.needle, &rule.replacement));
                    continue;
                }
            }
        }
        out.push((*line).to_string());
    }

    out.join("\n")
}
