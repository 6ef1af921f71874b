//! Exact substring substitution.
//!
//! Rules apply sequentially: each sees the buffer as left by earlier rules,
//! so the catalog must order entries so no replacement's output becomes
//! another rule's input by accident. An absent target is a silent no-op —
//! some entries are intentionally page-variant specific.

use tracing::debug;

use crate::rules::LiteralRule;

/// Replace every non-overlapping occurrence of the rule's target.
pub fn substitute(text: &str, rule: &LiteralRule) -> String {
    if !text.contains(&rule.old) {
        debug!(target = %rule.old, "literal target absent, skipping");
        return text.to_string();
    }
    text.replace(&rule.old, &rule.new)
}
