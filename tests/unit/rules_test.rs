//! Tests for the prevention rule store

use std::fs;

use tempfile::TempDir;

use guardrails::adapters::rules;
use guardrails::core::models::{Rule, RuleSeverity};

use crate::common::fixtures::{pattern_rule_json, write_pattern_rules, write_semantic_rules};

#[test]
fn missing_directory_yields_no_rules() {
    let temp = TempDir::new().unwrap();
    assert!(rules::load(&temp.path().join("absent")).is_empty());
}

#[test]
fn empty_directory_yields_no_rules() {
    let temp = TempDir::new().unwrap();
    assert!(rules::load(temp.path()).is_empty());
}

#[test]
fn pattern_rules_keep_declaration_order() {
    let temp = TempDir::new().unwrap();
    let entries = [
        pattern_rule_json("R2", "unwrap", None),
        pattern_rule_json("R1", "panic", None),
    ]
    .join(", ");
    write_pattern_rules(temp.path(), &entries);

    let loaded = rules::load(temp.path());
    let ids: Vec<_> = loaded.iter().map(Rule::rule_id).collect();
    assert_eq!(ids, ["R2", "R1"]);
}

#[test]
fn disabled_rules_are_dropped() {
    let temp = TempDir::new().unwrap();
    write_pattern_rules(
        temp.path(),
        r#"{"rule_id": "R1", "name": "off", "pattern": "x", "message": "m", "enabled": false}"#,
    );
    assert!(rules::load(temp.path()).is_empty());
}

#[test]
fn invalid_pattern_drops_only_that_rule() {
    let temp = TempDir::new().unwrap();
    let entries = [
        pattern_rule_json("R1", "[unclosed", None),
        pattern_rule_json("R2", "ok", None),
    ]
    .join(", ");
    write_pattern_rules(temp.path(), &entries);

    let loaded = rules::load(temp.path());
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].rule_id(), "R2");
}

#[test]
fn invalid_forbidden_context_drops_the_rule() {
    let temp = TempDir::new().unwrap();
    write_pattern_rules(temp.path(), &pattern_rule_json("R1", "ok", Some("[unclosed")));
    assert!(rules::load(temp.path()).is_empty());
}

#[test]
fn malformed_source_document_is_ignored() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path()).unwrap();
    fs::write(temp.path().join("pattern-rules.json"), "{not json").unwrap();
    assert!(rules::load(temp.path()).is_empty());
}

#[test]
fn semantic_rules_load_after_pattern_rules() {
    let temp = TempDir::new().unwrap();
    write_pattern_rules(temp.path(), &pattern_rule_json("R1", "x", None));
    write_semantic_rules(
        temp.path(),
        r#"{"rule_id": "S1", "name": "semantic", "severity": "error", "message": "m"}"#,
    );

    let loaded = rules::load(temp.path());
    assert_eq!(loaded.len(), 2);
    assert!(matches!(&loaded[0], Rule::Pattern(_)));
    assert!(matches!(&loaded[1], Rule::Semantic(s) if s.rule_id == "S1"));
}

#[test]
fn severity_defaults_to_warning() {
    let temp = TempDir::new().unwrap();
    write_pattern_rules(
        temp.path(),
        r#"{"rule_id": "R1", "name": "n", "pattern": "x", "message": "m"}"#,
    );

    let loaded = rules::load(temp.path());
    let Rule::Pattern(compiled) = &loaded[0] else {
        panic!("expected pattern rule");
    };
    assert_eq!(compiled.rule.severity, RuleSeverity::Warning);
    assert!(compiled.rule.enabled);
}
