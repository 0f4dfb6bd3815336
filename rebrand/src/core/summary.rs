//! Per-run counters.

use std::fmt;
use std::path::PathBuf;

/// Files seen and files changed during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub modified: Vec<PathBuf>,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn modified_count(&self) -> usize {
        self.modified.len()
    }

    pub fn is_clean(&self) -> bool {
        self.modified.is_empty()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.dry_run {
            "Total files to modify"
        } else {
            "Total files modified"
        };
        write!(f, "{label}: {}/{}", self.modified_count(), self.discovered)
    }
}
