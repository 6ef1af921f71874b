//! Rule records for the brief catalog.
//!
//! Every change in the brief is expressed as one of a small set of rule
//! kinds, collected into an ordered list per pipeline stage. Rules are plain
//! data, built once at startup and never mutated during a run; the stage
//! runner dispatches over the [`Rule`] variants.

pub mod catalog;

use regex::Regex;

/// A context pattern: plain substring or compiled regex.
#[derive(Debug, Clone)]
pub enum Pattern {
    Substr(&'static str),
    Regex(Regex),
}

impl Pattern {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Substr(s) => text.contains(s),
            Pattern::Regex(re) => re.is_match(text),
        }
    }
}

/// Allow/deny keyword lists plus a look-back depth.
///
/// The window spans `lookback` lines before a candidate line plus the
/// candidate itself. Deny takes precedence: one deny hit vetoes the rewrite
/// even when an allow pattern also matches. The depth is a heuristic
/// trade-off — deep enough to reach back past intervening declarations to
/// the owning selector, shallow enough not to bleed into the previous block.
#[derive(Debug, Clone)]
pub struct Window {
    pub lookback: usize,
    pub allow: Vec<Pattern>,
    pub deny: Vec<Pattern>,
}

impl Window {
    pub fn new(lookback: usize, allow: Vec<Pattern>, deny: Vec<Pattern>) -> Self {
        Self {
            lookback,
            allow,
            deny,
        }
    }
}

/// Exact substring replacement, applied to the whole buffer.
#[derive(Debug, Clone)]
pub struct LiteralRule {
    pub old: String,
    pub new: String,
}

impl LiteralRule {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// Insert a companion declaration line after an exact marker line.
///
/// The marker matches by trimmed equality, the companion line re-uses the
/// marker's indentation, and the insert is skipped when the next non-blank
/// line already carries the companion token. An optional window additionally
/// gates the insert on surrounding context.
#[derive(Debug, Clone)]
pub struct InsertRule {
    pub marker: String,
    pub token: String,
    pub declaration: String,
    pub window: Option<Window>,
}

/// Append a companion declaration onto a combined declaration line.
///
/// The compact counterpart of [`InsertRule`]: the marker appears mid-line,
/// and the companion is appended in place rather than on a new line. Lines
/// whose trimmed content equals the marker exactly are excluded so the
/// one-declaration-per-line form is never double-handled here.
#[derive(Debug, Clone)]
pub struct InlineInsertRule {
    pub marker: String,
    pub token: String,
    pub declaration: String,
}

/// Append a block of text after an anchor string, once.
///
/// Skipped entirely when `guard` is already present anywhere in the buffer.
#[derive(Debug, Clone)]
pub struct AppendRule {
    pub anchor: String,
    pub addition: String,
    pub guard: String,
}

/// One edit applied to a scoped block's text.
#[derive(Debug, Clone)]
pub enum BlockEdit {
    Replace { old: String, new: String },
    /// Insert `addition` directly after `anchor`, unless `guard` is already
    /// present in the block.
    InsertAfter {
        anchor: String,
        addition: String,
        guard: String,
    },
}

/// Edits confined to blocks matched by a scope pattern.
///
/// The scope regex matches a whole bounded block (selector plus
/// brace-delimited body); the edits see only the matched text, so a generic
/// declaration is never rewritten outside its intended component.
#[derive(Debug, Clone)]
pub struct ScopedRule {
    pub name: &'static str,
    pub scope: Regex,
    pub edits: Vec<BlockEdit>,
}

/// Regex rewrite with capture groups and a `$n` replacement template.
///
/// When `guard` is set and the matched text already contains it, the match
/// is left untouched — the guard marks insert-shaped rewrites that would
/// otherwise duplicate their addition on a re-run.
#[derive(Debug, Clone)]
pub struct CaptureRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub template: String,
    pub guard: Option<String>,
}

/// Rewrite an ambiguous value only when its context window approves.
#[derive(Debug, Clone)]
pub struct ClassifyRule {
    pub needle: String,
    pub replacement: String,
    pub window: Window,
}

/// Adjust a companion property near an already-rewritten primary value.
///
/// Same-line case first (compact blocks carry both on one line); otherwise
/// the primary must appear within `radius` lines either side and the
/// look-back window must pass the allow/deny classification.
#[derive(Debug, Clone)]
pub struct CompanionRule {
    pub needle: String,
    pub replacement: String,
    pub primary: String,
    pub radius: usize,
    pub window: Window,
}

/// A single catalog entry; stages hold an ordered list of these.
#[derive(Debug, Clone)]
pub enum Rule {
    Literal(LiteralRule),
    Insert(InsertRule),
    InlineInsert(InlineInsertRule),
    Append(AppendRule),
    Scoped(ScopedRule),
    Capture(CaptureRule),
    Classify(ClassifyRule),
    Companion(CompanionRule),
}

/// Build a scope pattern matching `.page-<variant> <selector> { ... }` for
/// an enumerated set of page variants.
///
/// `selector` is a regex fragment (escape literal dots at the call site).
pub fn page_scope(pages: &[&str], selector: &str) -> String {
    format!(
        r"\.page-(?:{})\s+{}\s*\{{[^}}]+\}}",
        pages.join("|"),
        selector
    )
}
