//! Issue model
//!
//! The matcher's output: one issue per changed file that either touches the
//! affected files of a past failure or introduces content a pattern rule
//! flags. Files with neither are not reported.

use serde::Serialize;

use super::failure::FailureRecord;
use super::rule::{PatternRule, RuleSeverity};

/// All findings for one changed file
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// The changed file, as reported by version control
    pub file_path: String,

    /// Active failure records whose affected files match this path,
    /// in registry order
    pub failures: Vec<FailureRecord>,

    /// Pattern rules violated by this file's added content,
    /// in declaration order
    pub violations: Vec<RuleViolation>,
}

impl Issue {
    /// An issue with no findings yet for the given file
    #[must_use]
    pub fn empty(file_path: String) -> Self {
        Self {
            file_path,
            failures: Vec::new(),
            violations: Vec::new(),
        }
    }

    /// True when neither matching produced anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty() && self.violations.is_empty()
    }
}

/// One pattern rule violation
#[derive(Debug, Clone, Serialize)]
pub struct RuleViolation {
    /// The violated rule's identifier
    pub rule_id: String,

    /// The rule's name
    pub name: String,

    /// The rule's message to the developer
    pub message: String,

    /// Severity carried over from the rule
    pub severity: RuleSeverity,

    /// The rule's fix suggestion, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// The failure record the rule is derived from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_id: Option<String>,
}

impl RuleViolation {
    /// Build a violation record from the rule that fired
    #[must_use]
    pub fn from_rule(rule: &PatternRule) -> Self {
        Self {
            rule_id: rule.rule_id.clone(),
            name: rule.name.clone(),
            message: rule.message.clone(),
            severity: rule.severity,
            suggestion: rule.suggestion.clone(),
            failure_id: rule.failure_id.clone(),
        }
    }
}
