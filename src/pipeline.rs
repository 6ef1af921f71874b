//! Ordered, dependency-checked stage execution.
//!
//! The brief's phases are order-dependent: later stages key on values that
//! earlier stages produce. Rather than leaving that ordering implicit, every
//! stage declares its required predecessors and the pipeline refuses to
//! construct when a declaration is unsatisfied — before any file is read.

use thiserror::Error;
use tracing::debug;

use crate::assets::AssetKind;
use crate::report::StageOutcome;
use crate::rules::Rule;
use crate::transforms;

/// One named pipeline stage: an ordered rule list over one asset.
#[derive(Debug)]
pub struct Stage {
    pub name: &'static str,
    pub requires: &'static [&'static str],
    pub target: AssetKind,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("duplicate stage name `{0}`")]
    DuplicateStage(&'static str),
    #[error("stage `{stage}` requires `{requires}`, which does not run before it")]
    UnsatisfiedRequirement {
        stage: &'static str,
        requires: &'static str,
    },
}

/// The validated stage sequence.
#[derive(Debug)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Validate stage ordering: names are unique and every declared
    /// predecessor runs earlier in the sequence.
    pub fn new(stages: Vec<Stage>) -> Result<Self, PipelineError> {
        let mut seen: Vec<&'static str> = Vec::with_capacity(stages.len());
        for stage in &stages {
            if seen.contains(&stage.name) {
                return Err(PipelineError::DuplicateStage(stage.name));
            }
            for requirement in stage.requires {
                if !seen.contains(requirement) {
                    return Err(PipelineError::UnsatisfiedRequirement {
                        stage: stage.name,
                        requires: requirement,
                    });
                }
            }
            seen.push(stage.name);
        }
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Run every stage targeting `kind` over the buffer, in sequence.
    ///
    /// Each stage fully consumes and returns the buffer; outcomes carry the
    /// positional line diff against the stage's input.
    pub fn run(&self, kind: AssetKind, text: &str) -> (String, Vec<StageOutcome>) {
        let mut current = text.to_string();
        let mut outcomes = Vec::new();

        for stage in self.stages.iter().filter(|s| s.target == kind) {
            let before = current.clone();
            let mut insertions = 0;
            for rule in &stage.rules {
                let applied = transforms::apply(rule, &current);
                current = applied.text;
                insertions += applied.insertions;
            }
            let lines_changed = crate::report::changed_lines(&before, &current);
            debug!(stage = stage.name, lines_changed, insertions, "stage done");
            outcomes.push(StageOutcome {
                stage: stage.name,
                lines_changed,
                insertions,
            });
        }

        (current, outcomes)
    }
}
