//! Failure record model
//!
//! A failure record describes one historical bug: what broke, why, which
//! files were involved, and how to keep it from coming back. Records are
//! append-only; once logged, only `status` and `updated_at` change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One historical bug stored in the failure registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Unique identifier (generated, e.g. "FAIL-18c2a4f90b1")
    #[serde(rename = "failure_id")]
    pub id: String,

    /// When the failure was logged (UTC)
    pub timestamp: DateTime<Utc>,

    /// Failure category
    pub category: Category,

    /// How bad it was
    pub severity: Severity,

    /// Lifecycle status; only active records participate in matching
    pub status: Status,

    /// The error message that was observed
    pub error_message: String,

    /// Why it happened
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub root_cause: String,

    /// Glob patterns for the files involved in the failure
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affected_files: Vec<String>,

    /// SHA of the commit that fixed it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_commit: Option<String>,

    /// Candidate regex that would catch a reintroduction (not auto-activated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regression_pattern: Option<String>,

    /// Guidance for preventing a recurrence
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prevention_rule: String,

    /// Set when the status last changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FailureRecord {
    /// Create a new active record with a generated ID and current timestamp
    pub fn new(category: Category, severity: Severity, error_message: String) -> Self {
        Self {
            id: generate_id(),
            timestamp: Utc::now(),
            category,
            severity,
            status: Status::Active,
            error_message,
            root_cause: String::new(),
            affected_files: Vec::new(),
            fix_commit: None,
            regression_pattern: None,
            prevention_rule: String::new(),
            updated_at: None,
        }
    }
}

/// Failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Compilation or build tooling failure
    Build,
    /// Crash or wrong behavior at runtime
    Runtime,
    /// Test suite failure
    Test,
    /// Type checker failure
    Type,
    /// Linter or style failure
    Lint,
    /// Deployment or release failure
    Deploy,
    /// Configuration failure
    Config,
    /// A previously fixed bug came back
    Regression,
}

impl Category {
    /// All recognized categories, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Build,
        Self::Runtime,
        Self::Test,
        Self::Type,
        Self::Lint,
        Self::Deploy,
        Self::Config,
        Self::Regression,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build => write!(f, "build"),
            Self::Runtime => write!(f, "runtime"),
            Self::Test => write!(f, "test"),
            Self::Type => write!(f, "type"),
            Self::Lint => write!(f, "lint"),
            Self::Deploy => write!(f, "deploy"),
            Self::Config => write!(f, "config"),
            Self::Regression => write!(f, "regression"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "build" => Ok(Self::Build),
            "runtime" => Ok(Self::Runtime),
            "test" => Ok(Self::Test),
            "type" => Ok(Self::Type),
            "lint" => Ok(Self::Lint),
            "deploy" => Ok(Self::Deploy),
            "config" => Ok(Self::Config),
            "regression" => Ok(Self::Regression),
            _ => Err(format!(
                "Invalid category: {s}. Use: build, runtime, test, type, lint, deploy, config, regression"
            )),
        }
    }
}

/// Failure severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Minor annoyance
    Low,
    /// Worth fixing soon
    Medium,
    /// Broke something users noticed
    High,
    /// Outage or data loss
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(format!("Invalid severity: {s}. Use: low, medium, high, critical")),
        }
    }
}

/// Record lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Still relevant; matched against changed files
    Active,
    /// Fixed and verified; kept for history
    Resolved,
    /// No longer applicable (code deleted, feature removed)
    Deprecated,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Resolved => write!(f, "resolved"),
            Self::Deprecated => write!(f, "deprecated"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "resolved" => Ok(Self::Resolved),
            "deprecated" => Ok(Self::Deprecated),
            _ => Err(format!("Invalid status: {s}. Use: active, resolved, deprecated")),
        }
    }
}

fn generate_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
    format!("FAIL-{ts:x}")
}
