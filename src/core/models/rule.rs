//! Prevention rule models
//!
//! A pattern rule guards against code that resembles a past failure: its
//! regex is tested against the added lines of a diff, and an optional
//! forbidden-context regex suppresses the rule when a known-safe marker is
//! present. Semantic rules carry no regex; they are matched by an external
//! analyzer and only pass through here.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// A regex-based guard evaluated against added diff content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRule {
    /// Unique identifier (e.g. "RULE-007")
    pub rule_id: String,

    /// Short human-readable name
    pub name: String,

    /// Regex tested against added content (multi-line mode)
    pub pattern: String,

    /// Regex that suppresses the rule when it also matches the added content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forbidden_context: Option<String>,

    /// Severity: "warning" or "error"
    #[serde(default)]
    pub severity: RuleSeverity,

    /// What to tell the developer when the rule fires
    pub message: String,

    /// How to fix or avoid the flagged construct
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Back-reference to the failure record this rule was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_id: Option<String>,

    /// Disabled rules are dropped at load time
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl PatternRule {
    /// Compile the rule's regexes, consuming the rule.
    ///
    /// Both `pattern` and `forbidden_context` are compiled in multi-line
    /// mode so `^`/`$` anchor per added line, not per block.
    pub fn compile(self) -> Result<CompiledPatternRule, regex::Error> {
        let pattern = RegexBuilder::new(&self.pattern).multi_line(true).build()?;
        let forbidden = match self.forbidden_context.as_deref() {
            Some(f) => Some(RegexBuilder::new(f).multi_line(true).build()?),
            None => None,
        };
        Ok(CompiledPatternRule {
            rule: self,
            pattern,
            forbidden,
        })
    }
}

/// A pattern rule with its regexes validated and compiled
#[derive(Debug, Clone)]
pub struct CompiledPatternRule {
    /// The rule as loaded
    pub rule: PatternRule,
    pattern: Regex,
    forbidden: Option<Regex>,
}

impl CompiledPatternRule {
    /// Does the rule's pattern match anywhere in the added content?
    #[must_use]
    pub fn matches(&self, added_content: &str) -> bool {
        self.pattern.is_match(added_content)
    }

    /// Does the forbidden context match anywhere in the added content?
    ///
    /// A rule with no forbidden context is never suppressed.
    #[must_use]
    pub fn is_suppressed(&self, added_content: &str) -> bool {
        self.forbidden.as_ref().is_some_and(|f| f.is_match(added_content))
    }
}

/// An opaque rule evaluated by an external analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticRule {
    /// Unique identifier
    pub rule_id: String,

    /// Short human-readable name
    pub name: String,

    /// Severity: "warning" or "error"
    #[serde(default)]
    pub severity: RuleSeverity,

    /// What to tell the developer when the rule fires
    pub message: String,

    /// How to fix or avoid the flagged construct
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Back-reference to the failure record this rule was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_id: Option<String>,

    /// Disabled rules are dropped at load time
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// A loaded prevention rule of either kind
#[derive(Debug, Clone)]
pub enum Rule {
    /// Regex-based, evaluated by the matcher
    Pattern(CompiledPatternRule),
    /// Opaque, evaluated by an external analyzer
    Semantic(SemanticRule),
}

impl Rule {
    /// The rule's identifier, regardless of kind
    #[must_use]
    pub fn rule_id(&self) -> &str {
        match self {
            Self::Pattern(p) => &p.rule.rule_id,
            Self::Semantic(s) => &s.rule_id,
        }
    }
}

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    /// Shown prominently, does not block on its own
    #[default]
    Warning,
    /// Treated as a hard finding
    Error,
}

impl std::fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for RuleSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(format!("Invalid rule severity: {s}. Use: warning, error")),
        }
    }
}

const fn default_enabled() -> bool {
    true
}
