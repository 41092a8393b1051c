//! Compile Result

use std::path::PathBuf;

/// Result of a compile run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileResult {
    /// Layout files parsed
    pub parsed: usize,
    /// Holder files written
    pub written: Vec<PathBuf>,
    /// Holder files already up-to-date
    pub unchanged: Vec<PathBuf>,
    /// Logical layouts without any view (no holder generated)
    pub empty: Vec<String>,
    /// Stale holder files deleted
    pub pruned: Vec<PathBuf>,
}

impl CompileResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_changes(&self) -> bool {
        !self.written.is_empty() || !self.pruned.is_empty()
    }

    /// Holders generated in this run, written or not
    pub fn output_count(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}
