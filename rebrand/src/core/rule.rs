//! Substitution rules and ordered, single-pass application.

use std::borrow::Cow;

use anyhow::{Context, Result, bail};
use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Declarative form of a substitution rule (built-in list or `[[rules]]` in TOML).
///
/// `replacement` uses `regex` expansion syntax: `${2}` inserts capture group 2.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleSpec {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
    /// Let `.` match line breaks (needed for blocks spanning several lines).
    #[serde(default)]
    pub dot_matches_newline: bool,
}

impl RuleSpec {
    pub fn new(name: &str, pattern: &str, replacement: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            dot_matches_newline: false,
        }
    }

    pub fn multiline(mut self) -> Self {
        self.dot_matches_newline = true;
        self
    }
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    regex: Regex,
    replacement: String,
}

impl Rule {
    pub fn compile(spec: &RuleSpec) -> Result<Self> {
        if spec.name.trim().is_empty() {
            bail!("rule name must be non-empty (pattern '{}')", spec.pattern);
        }
        let regex = RegexBuilder::new(&spec.pattern)
            .dot_matches_new_line(spec.dot_matches_newline)
            .build()
            .with_context(|| format!("compile rule '{}'", spec.name))?;
        Ok(Self {
            name: spec.name.clone(),
            regex,
            replacement: spec.replacement.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A rule that matched during a rewrite, with its match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub name: String,
    pub matches: usize,
}

/// Result of running a [`RuleSet`] over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub hits: Vec<RuleHit>,
}

impl Rewrite {
    /// True when the rewritten text differs from `original`.
    ///
    /// A rule can match and still leave the text unchanged, so this compares
    /// content rather than looking at `hits`.
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }
}

/// Ordered list of compiled rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile every spec, failing on the first invalid one.
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs.iter().map(Rule::compile).collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::name)
    }

    /// Apply each rule once, in declaration order, to the output of the previous one.
    pub fn apply(&self, text: &str) -> Rewrite {
        let mut content = text.to_string();
        let mut hits = Vec::new();
        for rule in &self.rules {
            let mut matches = 0;
            let replaced = rule.regex.replace_all(&content, |caps: &Captures<'_>| {
                matches += 1;
                let mut expanded = String::new();
                caps.expand(&rule.replacement, &mut expanded);
                expanded
            });
            // No match leaves the borrowed input untouched.
            let Cow::Owned(next) = replaced else {
                continue;
            };
            content = next;
            hits.push(RuleHit {
                name: rule.name.clone(),
                matches,
            });
        }
        Rewrite { content, hits }
    }
}
