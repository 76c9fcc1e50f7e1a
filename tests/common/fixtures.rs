//! Test fixtures: record builders and rule source writers

use std::fs;
use std::path::Path;

use guardrails::core::models::{Category, FailureRecord, Severity, Status};

/// An active failure record with the given id and affected-file globs
pub fn make_failure(id: &str, affected: &[&str]) -> FailureRecord {
    let mut record = FailureRecord::new(
        Category::Runtime,
        Severity::High,
        format!("error recorded as {id}"),
    );
    record.id = id.to_string();
    record.affected_files = affected.iter().map(ToString::to_string).collect();
    record.root_cause = "test fixture".to_string();
    record.prevention_rule = "do not do the thing".to_string();
    record
}

/// Write a pattern-rules.json source into the given rules directory
pub fn write_pattern_rules(dir: &Path, rules_json: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("pattern-rules.json"), format!(r#"{{"rules": [{rules_json}]}}"#)).unwrap();
}

/// Write a semantic-rules.json source into the given rules directory
pub fn write_semantic_rules(dir: &Path, rules_json: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("semantic-rules.json"), format!(r#"{{"rules": [{rules_json}]}}"#)).unwrap();
}

/// One enabled pattern rule as a JSON object literal
pub fn pattern_rule_json(rule_id: &str, pattern: &str, forbidden: Option<&str>) -> String {
    let forbidden_field = forbidden
        .map(|f| format!(r#", "forbidden_context": "{f}""#))
        .unwrap_or_default();
    format!(
        r#"{{"rule_id": "{rule_id}", "name": "rule {rule_id}", "pattern": "{pattern}", "message": "flagged by {rule_id}", "severity": "warning"{forbidden_field}}}"#
    )
}

/// A resolved copy of a record, as `update_status` would produce
pub fn resolved(mut record: FailureRecord) -> FailureRecord {
    record.status = Status::Resolved;
    record
}
