//! Prevention rule store
//!
//! Loads pattern rules and semantic rules from a rules directory. Either
//! source may be absent (empty contribution). Rules are validated at load:
//! a pattern rule whose regex fails to compile is dropped with a warning,
//! the rest of the load proceeds. Rules keep file-then-declaration order
//! so downstream evaluation is deterministic.

use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::models::{PatternRule, Rule, SemanticRule};

/// Pattern rule source filename inside the rules directory
pub const PATTERN_RULES_FILE: &str = "pattern-rules.json";

/// Semantic rule source filename inside the rules directory
pub const SEMANTIC_RULES_FILE: &str = "semantic-rules.json";

#[derive(Debug, Deserialize)]
struct PatternRuleSource {
    #[serde(default)]
    rules: Vec<PatternRule>,
}

#[derive(Debug, Deserialize)]
struct SemanticRuleSource {
    #[serde(default)]
    rules: Vec<SemanticRule>,
}

/// Load all enabled rules from the rules directory.
///
/// Never fails: missing or unreadable sources contribute zero rules, and
/// individually invalid rules are dropped with a warning.
#[must_use]
pub fn load(dir: &Path) -> Vec<Rule> {
    let mut rules = Vec::new();

    if let Some(source) = read_source::<PatternRuleSource>(&dir.join(PATTERN_RULES_FILE)) {
        for rule in source.rules {
            if !rule.enabled {
                continue;
            }
            let rule_id = rule.rule_id.clone();
            match rule.compile() {
                Ok(compiled) => rules.push(Rule::Pattern(compiled)),
                Err(err) => warn!("Dropping rule {rule_id}: invalid regex: {err}"),
            }
        }
    }

    if let Some(source) = read_source::<SemanticRuleSource>(&dir.join(SEMANTIC_RULES_FILE)) {
        for rule in source.rules {
            if rule.enabled {
                rules.push(Rule::Semantic(rule));
            }
        }
    }

    rules
}

fn read_source<T: DeserializeOwned>(path: &Path) -> Option<T> {
    if !path.exists() {
        return None;
    }
    let content = fs::read_to_string(path)
        .map_err(|err| warn!("Ignoring rule source {}: {err}", path.display()))
        .ok()?;
    serde_json::from_str(&content)
        .map_err(|err| warn!("Ignoring rule source {}: {err}", path.display()))
        .ok()
}
