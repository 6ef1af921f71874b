//! Block-scoped and capture-group rewrites.
//!
//! Scoped rules bound a rewrite to one selector's brace-delimited body, so a
//! generic declaration like `font-weight: 700` is only touched inside the
//! component it belongs to. Capture rules keep surrounding text via `$n`
//! groups and rewrite only the varying middle.

use regex::Captures;
use tracing::debug;

use crate::rules::{BlockEdit, CaptureRule, ScopedRule};

/// Apply a rule's edit list to every block matched by its scope pattern.
///
/// Edits see only the matched block text; each edit is a no-op when its
/// target is absent, which keeps the whole rule safe to re-run.
pub fn rewrite_blocks(text: &str, rule: &ScopedRule) -> String {
    if !rule.scope.is_match(text) {
        debug!(rule = rule.name, "scope pattern matched nothing");
        return text.to_string();
    }
    rule.scope
        .replace_all(text, |caps: &Captures| {
            let mut block = caps[0].to_string();
            for edit in &rule.edits {
                match edit {
                    BlockEdit::Replace { old, new } => {
                        block = block.replace(old, new);
                    }
                    BlockEdit::InsertAfter {
                        anchor,
                        addition,
                        guard,
                    } => {
                        if !block.contains(guard) {
                            block = block.replace(anchor, &format!("{anchor}{addition}"));
                        }
                    }
                }
            }
            block
        })
        .into_owned()
}

/// Rewrite every match through the rule's `$n` replacement template.
///
/// A guarded rule leaves matches untouched when the guard text is already
/// present in the match — insert-shaped rewrites stay single-shot that way.
pub fn rewrite_captures(text: &str, rule: &CaptureRule) -> String {
    if !rule.pattern.is_match(text) {
        debug!(rule = rule.name, "capture pattern matched nothing");
        return text.to_string();
    }
    rule.pattern
        .replace_all(text, |caps: &Captures| {
            if let Some(guard) = &rule.guard {
                if caps[0].contains(guard.as_str()) {
                    return caps[0].to_string();
                }
            }
            let mut dst = String::new();
            caps.expand(&rule.template, &mut dst);
            dst
        })
        .into_owned()
}
