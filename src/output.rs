//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. The JSON form serializes
//! the underlying data unmodified; the human form groups findings by file,
//! colors severity labels and truncates long error messages.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{FailureRecord, Issue, RuleSeverity, Severity};

/// Preview length for error messages in the check report
const ERROR_PREVIEW_LEN: usize = 80;

/// Preview length for error messages in the list table
const LIST_PREVIEW_LEN: usize = 40;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a regression check
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Number of files with potential issues
    pub issue_count: usize,
    /// Number of changed files examined
    #[serde(skip)]
    pub files_checked: usize,
    /// Per-file findings
    pub issues: Vec<Issue>,
}

impl CheckReport {
    /// Build a report from the matcher's output
    #[must_use]
    pub fn new(issues: Vec<Issue>, files_checked: usize) -> Self {
        Self {
            issue_count: issues.len(),
            files_checked,
            issues,
        }
    }

    /// True when at least one file has findings
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.issue_count > 0
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.files_checked == 0 {
            println!("No changed files to check.");
            return;
        }

        if self.issues.is_empty() {
            println!("No potential regressions detected.");
            return;
        }

        let bar = "=".repeat(70);
        println!("\n{bar}");
        println!("REGRESSION CHECK REPORT");
        println!("{bar}");

        for issue in &self.issues {
            println!("\n{}", issue.file_path.bold());
            println!("{}", "-".repeat(70));

            for failure in &issue.failures {
                println!("\n  {} - Known bug history", severity_label(failure.severity));
                println!("      Failure ID: {}", failure.id);
                println!("      Category: {}", failure.category);
                println!(
                    "      Previous error: {}",
                    preview(&failure.error_message, ERROR_PREVIEW_LEN)
                );
                if !failure.prevention_rule.is_empty() {
                    println!("      Prevention: {}", failure.prevention_rule);
                }
            }

            for violation in &issue.violations {
                println!("\n  {} - Pattern violation", rule_severity_label(violation.severity));
                println!("      Rule: {} ({})", violation.name, violation.rule_id);
                println!("      Message: {}", violation.message);
                if let Some(failure_id) = &violation.failure_id {
                    println!("      Related failure: {failure_id}");
                }
                if let Some(suggestion) = &violation.suggestion {
                    println!("      Suggestion: {suggestion}");
                }
            }
        }

        println!("\n{bar}");
        println!("Total files with potential issues: {}", self.issue_count);
        println!("{bar}");
        println!("\nReview the above carefully before committing.");
    }
}

/// Result of logging a failure
#[derive(Debug, Serialize)]
pub struct LogResult {
    /// The generated failure ID
    pub failure_id: String,
    /// Where the record was appended
    pub registry: String,
}

impl LogResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Failure logged: {}", self.failure_id);
                println!("Registry: {}", self.registry);
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// A listing of failure records
#[derive(Debug, Serialize)]
pub struct FailureList {
    /// The records, in registry order
    pub failures: Vec<FailureRecord>,
}

impl FailureList {
    /// Render the listing based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.failures.is_empty() {
            println!("No matching failures found.");
            return;
        }

        println!(
            "\n{:<18} {:<12} {:<10} {:<12} Error Preview",
            "ID", "Category", "Severity", "Status"
        );
        println!("{}", "-".repeat(100));
        for failure in &self.failures {
            println!(
                "{:<18} {:<12} {:<10} {:<12} {}",
                failure.id,
                failure.category.to_string(),
                failure.severity.to_string(),
                failure.status.to_string(),
                preview(&failure.error_message, LIST_PREVIEW_LEN)
            );
        }
    }
}

/// Full detail of one failure record
#[derive(Debug, Serialize)]
pub struct FailureDetail {
    /// The record
    pub failure: FailureRecord,
}

impl FailureDetail {
    /// Render the detail based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let f = &self.failure;
        let bar = "=".repeat(60);
        println!("\n{bar}");
        println!("Failure: {}", f.id);
        println!("{bar}");
        println!("timestamp: {}", f.timestamp.to_rfc3339());
        println!("category: {}", f.category);
        println!("severity: {}", severity_label(f.severity));
        println!("status: {}", f.status);
        println!("\nerror_message:");
        println!("  {}", f.error_message);
        if !f.root_cause.is_empty() {
            println!("root_cause: {}", f.root_cause);
        }
        if !f.affected_files.is_empty() {
            println!("\naffected_files:");
            for file in &f.affected_files {
                println!("  - {file}");
            }
        }
        if let Some(commit) = &f.fix_commit {
            println!("fix_commit: {commit}");
        }
        if let Some(pattern) = &f.regression_pattern {
            println!("regression_pattern: {pattern}");
        }
        if !f.prevention_rule.is_empty() {
            println!("prevention_rule: {}", f.prevention_rule);
        }
        if let Some(updated) = &f.updated_at {
            println!("updated_at: {}", updated.to_rfc3339());
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn severity_label(severity: Severity) -> ColoredString {
    let label = severity.to_string().to_uppercase();
    match severity {
        Severity::Critical => label.red(),
        Severity::High => label.yellow(),
        Severity::Medium => label.blue(),
        Severity::Low => label.dimmed(),
    }
}

fn rule_severity_label(severity: RuleSeverity) -> ColoredString {
    let label = severity.to_string().to_uppercase();
    match severity {
        RuleSeverity::Error => label.red(),
        RuleSeverity::Warning => label.yellow(),
    }
}

/// Single-line preview: newlines collapsed, truncated with an ellipsis
fn preview(message: &str, max_chars: usize) -> String {
    let flat = message.replace('\n', " ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let mut truncated: String = flat.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    }
}
