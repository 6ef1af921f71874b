//! One-shot applicator for the Design Brief v3 changes to the shared
//! portal assets (`shared-styles.css` and `shared-scripts.js`).
//!
//! The brief is a fixed catalog of roughly 260 token and component changes.
//! Applying it is a linear batch-edit pipeline over two in-memory text
//! buffers: literal token substitution, structural token insertion, scoped
//! pattern rewrites, windowed contextual classification, and a final
//! diagnostic verification scan.
//!
//! # Module Structure
//!
//! - [`cli`] - Command line surface
//! - [`assets`] - Reading and writing the two asset buffers
//! - [`rules`] - Rule records and the versioned brief catalog
//! - [`pipeline`] - Ordered, dependency-checked stage execution
//! - [`transforms`] - The individual rewrite primitives
//! - [`verify`] - Post-hoc verification scan
//! - [`report`] - Change counting and the console report

pub mod assets;
pub mod cli;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod transforms;
pub mod verify;

mod run;

pub use run::run;
