//! Candidate file discovery.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Which files a walk should yield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverFilter {
    suffixes: Vec<String>,
    exclude_dirs: Vec<String>,
}

impl DiscoverFilter {
    /// `extensions` are bare suffixes (`"html"`), matched case-sensitively.
    pub fn new(extensions: &[String], exclude_dirs: &[String]) -> Self {
        Self {
            suffixes: extensions.iter().map(|ext| format!(".{ext}")).collect(),
            exclude_dirs: exclude_dirs.to_vec(),
        }
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        // The root itself is never pruned, whatever its name.
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self
                .exclude_dirs
                .iter()
                .any(|dir| entry.file_name() == dir.as_str())
    }

    fn matches_file(&self, entry: &DirEntry) -> bool {
        if !entry.path().is_file() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix))
    }
}

/// Collect every matching file under `root`, depth-first with siblings in
/// file-name order.
///
/// Excluded directories are pruned, so nothing beneath them is visited.
/// Entries that cannot be read are skipped with a warning.
pub fn discover_files(root: &Path, filter: &DiscoverFilter) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !filter.is_excluded_dir(entry));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if filter.matches_file(&entry) {
            files.push(entry.into_path());
        }
    }
    files
}
