use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use rebrand::core::rule::RuleSet;
use rebrand::exit_codes;
use rebrand::io::config::{DEFAULT_CONFIG_FILE, RebrandConfig, load_config};
use rebrand::logging;
use rebrand::run::{RunOptions, run_rebrand};

#[derive(Parser)]
#[command(
    name = "rebrand",
    version,
    about = "Rewrite a static site's HTML files from one brand to another"
)]
struct Cli {
    /// Directory to walk.
    #[arg(default_value = ".")]
    root: PathBuf,

    /// TOML config. Defaults to `ROOT/rebrand.toml` when that file exists.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report which files would change without writing them.
    #[arg(long)]
    dry_run: bool,

    /// Extra directory name to skip, on top of the configured ones (repeatable).
    #[arg(long = "exclude-dir", value_name = "NAME")]
    exclude_dirs: Vec<String>,

    /// Print the active rule names in application order and exit.
    #[arg(long)]
    list_rules: bool,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILED);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = resolve_config(&cli.root, cli.config.as_deref())?;
    config.exclude_dirs.extend(cli.exclude_dirs);

    let mut stdout = std::io::stdout().lock();
    if cli.list_rules {
        return cmd_list_rules(&config, &mut stdout);
    }

    let options = RunOptions {
        dry_run: cli.dry_run,
    };
    run_rebrand(&cli.root, &config, &options, &mut stdout)?;
    Ok(())
}

/// An explicit `--config` must exist; the implicit one is optional.
fn resolve_config(root: &Path, explicit: Option<&Path>) -> Result<RebrandConfig> {
    match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            load_config(path)
        }
        None => load_config(&root.join(DEFAULT_CONFIG_FILE)),
    }
}

fn cmd_list_rules(config: &RebrandConfig, out: &mut impl Write) -> Result<()> {
    let rules = RuleSet::compile(&config.rules).context("compile rules")?;
    for name in rules.names() {
        writeln!(out, "{name}").context("write rule list")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_current_dir() {
        let cli = Cli::parse_from(["rebrand"]);
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(!cli.dry_run);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_repeated_exclude_dirs() {
        let cli = Cli::parse_from([
            "rebrand",
            "site",
            "--dry-run",
            "--exclude-dir",
            "drafts",
            "--exclude-dir",
            "vendor",
        ]);
        assert_eq!(cli.root, PathBuf::from("site"));
        assert!(cli.dry_run);
        assert_eq!(cli.exclude_dirs, vec!["drafts", "vendor"]);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = resolve_config(temp.path(), Some(&temp.path().join("nope.toml")))
            .expect_err("should fail");
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn list_rules_prints_builtin_order() {
        let mut out = Vec::new();
        cmd_list_rules(&RebrandConfig::default(), &mut out).expect("list");
        let text = String::from_utf8(out).expect("utf8");
        let names: Vec<&str> = text.lines().collect();
        assert_eq!(names.first(), Some(&"title"));
        assert_eq!(names.last(), Some(&"greenwich-copy"));
        assert_eq!(names.len(), 13);
    }
}
