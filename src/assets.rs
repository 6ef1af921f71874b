//! Reading and writing the two asset buffers.
//!
//! Each asset is read fully into memory as UTF-8, transformed as a whole,
//! and written back over the same path. The two assets are independent:
//! a failure on one never corrupts the other.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Which of the two assets a buffer or pipeline stage belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Script,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Stylesheet => write!(f, "stylesheet"),
            AssetKind::Script => write!(f, "script"),
        }
    }
}

/// A fully loaded asset buffer.
#[derive(Debug, Clone)]
pub struct Asset {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub text: String,
}

impl Asset {
    /// Read an asset into memory.
    pub fn load(kind: AssetKind, path: PathBuf) -> Result<Self> {
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {} {}", kind, path.display()))?;
        Ok(Self { kind, path, text })
    }

    /// Overwrite the asset in place with the current buffer contents.
    pub fn write(&self) -> Result<()> {
        fs::write(&self.path, &self.text)
            .with_context(|| format!("failed to write {} {}", self.kind, self.path.display()))
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
