//! Marker-anchored declaration insertion.
//!
//! Three shapes, all re-run safe:
//!
//! - expanded: a new line directly after an exact marker line, re-using its
//!   indentation, skipped when the next non-blank line already carries the
//!   companion token
//! - inline: the companion appended onto a combined declaration line
//! - block append: a fixed chunk inserted after an anchor, guarded by a
//!   whole-buffer presence check

use tracing::debug;

use crate::rules::{AppendRule, InlineInsertRule, InsertRule};
use crate::transforms::context::Classify;

/// Insert the companion declaration after each matching marker line.
///
/// Returns the transformed buffer and the number of lines added. Distinct
/// marker/companion pairs never interfere: each rule checks only its own
/// token. Context windows (when present) are evaluated against the input
/// lines, not against lines added by this same pass.
pub fn insert_companion(text: &str, rule: &InsertRule) -> (String, usize) {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len() + 8);
    let mut added = 0;

    for (i, line) in lines.iter().enumerate() {
        out.push((*line).to_string());

        if line.trim() != rule.marker || line.contains(&rule.token) {
            continue;
        }

        if let Some(window) = &rule.window {
            let start = i.saturating_sub(window.lookback);
            let ctx = lines[start..=i].join("\n");
            if !window.approves(&ctx) {
                continue;
            }
        }

        // Look ahead past blank lines; skip when the companion is already
        // there. A marker with nothing after it gets no insert.
        let mut next = i + 1;
        while next < lines.len() && lines[next].trim().is_empty() {
            next += 1;
        }
        if next < lines.len() && !lines[next].contains(&rule.token) {
            let indent = &line[..line.len() - line.trim_start().len()];
            out.push(format!("{indent}{}", rule.declaration));
            added += 1;
        }
    }

    if added == 0 {
        debug!(marker = %rule.marker, "no insertion sites for companion");
    }
    (out.join("\n"), added)
}

/// Append the companion onto combined declaration lines containing the
/// marker.
///
/// Lines whose trimmed content equals the marker exactly are the expanded
/// form and are excluded here.
pub fn append_inline(text: &str, rule: &InlineInsertRule) -> (String, usize) {
    let mut added = 0;
    let out: Vec<String> = text
        .split('\n')
        .map(|line| {
            if line.contains(&rule.marker)
                && !line.contains(&rule.token)
                && line.trim() != rule.marker
            {
                added += 1;
                line.replace(
                    &rule.marker,
                    &format!("{} {}", rule.marker, rule.declaration),
                )
            } else {
                line.to_string()
            }
        })
        .collect();
    (out.join("\n"), added)
}

/// Insert a fixed chunk of text directly after the first occurrence of the
/// anchor, once per buffer.
pub fn append_block(text: &str, rule: &AppendRule) -> (String, usize) {
    if text.contains(&rule.guard) || !text.contains(&rule.anchor) {
        return (text.to_string(), 0);
    }
    let appended = format!("{}{}", rule.anchor, rule.addition);
    (text.replacen(&rule.anchor, &appended, 1), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Pattern, Window};

    fn purple_rule() -> InsertRule {
        InsertRule {
            marker: "--purple-lighter: #E8EEF7;".to_string(),
            token: "--purple-dark".to_string(),
            declaration: "--purple-dark: #081E52;".to_string(),
            window: None,
        }
    }

    #[test]
    fn inserts_after_marker_with_matching_indent() {
        let css = "        :root {\n            --purple-lighter: #E8EEF7;\n            --yellow-primary: #F9B02C;\n        }";
        let (out, added) = insert_companion(css, &purple_rule());
        assert_eq!(added, 1);
        assert!(out.contains("            --purple-lighter: #E8EEF7;\n            --purple-dark: #081E52;\n"));
    }

    #[test]
    fn skips_when_companion_already_follows() {
        let css = "            --purple-lighter: #E8EEF7;\n            --purple-dark: #081E52;";
        let (out, added) = insert_companion(css, &purple_rule());
        assert_eq!(added, 0);
        assert_eq!(out, css);
    }

    #[test]
    fn lookahead_crosses_blank_lines() {
        let css = "            --purple-lighter: #E8EEF7;\n\n            --purple-dark: #081E52;";
        let (_, added) = insert_companion(css, &purple_rule());
        assert_eq!(added, 0);
    }

    #[test]
    fn marker_as_last_line_gets_no_insert() {
        let css = "            --purple-lighter: #E8EEF7;";
        let (out, added) = insert_companion(css, &purple_rule());
        assert_eq!(added, 0);
        assert_eq!(out, css);
    }

    #[test]
    fn rerun_adds_nothing() {
        let css = "            --purple-lighter: #E8EEF7;\n            --blue-dark: #154785;";
        let (once, added) = insert_companion(css, &purple_rule());
        assert_eq!(added, 1);
        let (twice, added_again) = insert_companion(&once, &purple_rule());
        assert_eq!(added_again, 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn distinct_pairs_do_not_interfere() {
        let green = InsertRule {
            marker: "--green-lighter: #E8F5E9;".to_string(),
            token: "--green-dark".to_string(),
            declaration: "--green-dark: #1B5E20;".to_string(),
            window: None,
        };
        let css = "    --purple-lighter: #E8EEF7;\n    --green-lighter: #E8F5E9;\n    --white: #FFF;";
        let (out, _) = insert_companion(css, &purple_rule());
        let (out, added) = insert_companion(&out, &green);
        assert_eq!(added, 1);
        assert!(out.contains("--purple-dark"));
        assert!(out.contains("--green-dark"));
    }

    fn spacing_rule() -> InsertRule {
        InsertRule {
            marker: "font-size: 15px;".to_string(),
            token: "letter-spacing".to_string(),
            declaration: "letter-spacing: 0.3px;".to_string(),
            window: Some(Window::new(
                12,
                vec![Pattern::Substr(".btn-primary"), Pattern::Substr(".btn-secondary")],
                vec![],
            )),
        }
    }

    #[test]
    fn window_gated_insert_fires_in_allowed_context() {
        let css = ".page-x .btn-primary {\n            font-size: 15px;\n            cursor: pointer;\n        }";
        let (out, added) = insert_companion(css, &spacing_rule());
        assert_eq!(added, 1);
        assert!(out.contains("font-size: 15px;\n            letter-spacing: 0.3px;"));
    }

    #[test]
    fn window_gated_insert_skips_foreign_context() {
        let css = ".page-x .hero-subtitle {\n            font-size: 15px;\n            color: red;\n        }";
        let (out, added) = insert_companion(css, &spacing_rule());
        assert_eq!(added, 0);
        assert!(!out.contains("letter-spacing"));
    }

    #[test]
    fn window_gated_insert_is_rerun_safe() {
        let css = ".page-x .btn-primary {\n            font-size: 15px;\n            cursor: pointer;\n        }";
        let (once, _) = insert_companion(css, &spacing_rule());
        let (twice, added) = insert_companion(&once, &spacing_rule());
        assert_eq!(added, 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn inline_appends_on_compact_lines_only() {
        let rule = InlineInsertRule {
            marker: "--green-lighter: #E8F5E9;".to_string(),
            token: "--green-dark".to_string(),
            declaration: "--green-dark: #1B5E20;".to_string(),
        };
        let compact = "    :root { --green-light: #66BB6A; --green-lighter: #E8F5E9; --yellow-primary: #F9B02C; }";
        let (out, added) = append_inline(compact, &rule);
        assert_eq!(added, 1);
        assert!(out.contains("--green-lighter: #E8F5E9; --green-dark: #1B5E20; --yellow-primary"));

        // Expanded form (line is exactly the marker) is left for the
        // line-insert path.
        let expanded = "            --green-lighter: #E8F5E9;";
        let (out, added) = append_inline(expanded, &rule);
        assert_eq!(added, 0);
        assert_eq!(out, expanded);
    }

    #[test]
    fn inline_skips_lines_already_carrying_token() {
        let rule = InlineInsertRule {
            marker: "--green-lighter: #E8F5E9;".to_string(),
            token: "--green-dark".to_string(),
            declaration: "--green-dark: #1B5E20;".to_string(),
        };
        let css = ":root { --green-lighter: #E8F5E9; --green-dark: #1B5E20; }";
        let (out, added) = append_inline(css, &rule);
        assert_eq!(added, 0);
        assert_eq!(out, css);
    }

    #[test]
    fn block_append_is_guarded() {
        let rule = AppendRule {
            anchor: ".page-kontakt .form-textarea { min-height: 150px; resize: vertical; }".to_string(),
            addition: "\n        .page-kontakt .form-input.error { border-color: #D32F2F; }".to_string(),
            guard: ".form-input.error".to_string(),
        };
        let css = "        .page-kontakt .form-textarea { min-height: 150px; resize: vertical; }";
        let (once, added) = append_block(css, &rule);
        assert_eq!(added, 1);
        assert!(once.contains(".form-input.error"));

        let (twice, added_again) = append_block(&once, &rule);
        assert_eq!(added_again, 0);
        assert_eq!(once, twice);
    }
}
