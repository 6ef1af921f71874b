//! Post-hoc verification scan.
//!
//! Runs after the pipeline, over the final stylesheet buffer. Purely
//! diagnostic: counts leftovers of values the brief retires, counts
//! adoptions of the values it introduces, and sanity-checks the document
//! structure by counting `:root` blocks. Nothing here mutates or aborts —
//! by this point the run has already produced its output.

use regex::Regex;

/// A value the brief retires, with the token name it belonged to.
#[derive(Debug, Clone)]
pub struct Banished {
    pub value: &'static str,
    pub token: &'static str,
}

/// What to check in the final buffer.
#[derive(Debug)]
pub struct VerifySpec {
    pub banished: Vec<Banished>,
    pub expected: Vec<&'static str>,
    pub structure: Regex,
    pub structure_label: &'static str,
    pub structure_expected: usize,
}

/// A banished value still present in the output.
#[derive(Debug)]
pub struct Residue {
    pub value: &'static str,
    pub token: &'static str,
    pub count: usize,
}

#[derive(Debug)]
pub struct VerifyReport {
    pub residues: Vec<Residue>,
    /// Occurrence counts for the expected new values, in spec order.
    pub adoptions: Vec<(&'static str, usize)>,
    pub structure_label: &'static str,
    pub structure_count: usize,
    pub structure_expected: usize,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.residues.is_empty() && self.structure_count == self.structure_expected
    }
}

fn occurrences(text: &str, needle: &str) -> usize {
    text.match_indices(needle).count()
}

/// Scan the final buffer against the spec. Never mutates, never fails.
pub fn inspect(text: &str, spec: &VerifySpec) -> VerifyReport {
    let residues = spec
        .banished
        .iter()
        .filter_map(|b| {
            let count = occurrences(text, b.value);
            (count > 0).then(|| Residue {
                value: b.value,
                token: b.token,
                count,
            })
        })
        .collect();

    let adoptions = spec
        .expected
        .iter()
        .map(|value| (*value, occurrences(text, value)))
        .collect();

    VerifyReport {
        residues,
        adoptions,
        structure_label: spec.structure_label,
        structure_count: spec.structure.find_iter(text).count(),
        structure_expected: spec.structure_expected,
    }
}
