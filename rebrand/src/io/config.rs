//! Optional rebrand configuration, read from `rebrand.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::builtin::default_rules;
use crate::core::rule::RuleSpec;

/// Config file looked up in the walk root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "rebrand.toml";

/// Rebrand configuration (TOML).
///
/// Every field is optional. Leaving out `rules` keeps the built-in list;
/// giving `[[rules]]` tables replaces it entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RebrandConfig {
    /// File name suffixes to rewrite, without the leading dot.
    pub extensions: Vec<String>,

    /// Directory names pruned from the walk wherever they appear.
    pub exclude_dirs: Vec<String>,

    pub rules: Vec<RuleSpec>,
}

impl Default for RebrandConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["html".to_string()],
            exclude_dirs: vec!["template".to_string()],
            rules: default_rules(),
        }
    }
}

impl RebrandConfig {
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(anyhow!("extensions must be a non-empty array"));
        }
        if let Some(ext) = self
            .extensions
            .iter()
            .find(|ext| ext.trim().is_empty() || ext.starts_with('.'))
        {
            return Err(anyhow!(
                "invalid extension '{ext}': use a bare suffix such as \"html\""
            ));
        }
        if self.exclude_dirs.iter().any(|dir| dir.trim().is_empty()) {
            return Err(anyhow!("exclude_dirs entries must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RebrandConfig::default()`.
pub fn load_config(path: &Path) -> Result<RebrandConfig> {
    if !path.exists() {
        let cfg = RebrandConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RebrandConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
