//! One rebrand run: discover → rewrite → report.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::rule::{RuleHit, RuleSet};
use crate::core::summary::RunSummary;
use crate::io::config::RebrandConfig;
use crate::io::discover::{DiscoverFilter, discover_files};
use crate::io::files::{read_text, rewrite_in_place};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Report what would change without writing anything.
    pub dry_run: bool,
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Unchanged,
    /// Content differed; written unless this was a dry run.
    Modified(Vec<RuleHit>),
}

/// Apply `rules` to one file, rewriting it only if the text changed.
pub fn rebrand_file(path: &Path, rules: &RuleSet, dry_run: bool) -> Result<FileOutcome> {
    let original = read_text(path)?;
    let rewrite = rules.apply(&original);
    if !rewrite.changed(&original) {
        return Ok(FileOutcome::Unchanged);
    }
    if !dry_run {
        rewrite_in_place(path, &rewrite.content)?;
    }
    Ok(FileOutcome::Modified(rewrite.hits))
}

/// Rebrand every candidate file under `root`.
///
/// Writes one line per changed file and a closing summary to `out`. The first
/// I/O failure aborts the run; files already rewritten stay rewritten.
pub fn run_rebrand(
    root: &Path,
    config: &RebrandConfig,
    options: &RunOptions,
    out: &mut impl Write,
) -> Result<RunSummary> {
    config.validate()?;
    let rules = RuleSet::compile(&config.rules).context("compile rules")?;
    let filter = DiscoverFilter::new(&config.extensions, &config.exclude_dirs);
    let files = discover_files(root, &filter);
    info!(
        root = %root.display(),
        files = files.len(),
        rules = rules.names().count(),
        dry_run = options.dry_run,
        "starting rebrand"
    );

    let verb = if options.dry_run {
        "Would modify"
    } else {
        "Modified"
    };
    let mut summary = RunSummary {
        discovered: files.len(),
        dry_run: options.dry_run,
        ..RunSummary::default()
    };
    for path in files {
        match rebrand_file(&path, &rules, options.dry_run)? {
            FileOutcome::Unchanged => debug!(path = %path.display(), "unchanged"),
            FileOutcome::Modified(hits) => {
                debug!(path = %path.display(), rules = ?hits, "rewritten");
                writeln!(out, "{verb}: {}", path.display()).context("write report")?;
                summary.modified.push(path);
            }
        }
    }

    writeln!(out).context("write report")?;
    writeln!(out, "{summary}").context("write report")?;
    info!(
        modified = summary.modified_count(),
        discovered = summary.discovered,
        clean = summary.is_clean(),
        "rebrand finished"
    );
    Ok(summary)
}
