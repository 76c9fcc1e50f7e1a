//! Integration tests for the guardrails CLI
//!
//! These tests exercise the full pipeline against real scratch git
//! repositories: registry + rules on disk, staged changes, check output
//! and exit codes.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Helper function to create a guardrails command
fn guardrails() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("guardrails"))
}

/// Helper to initialize a git repo with basic config
fn init_git_repo(path: &Path) {
    git(path, &["init"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);
}

fn git(path: &Path, args: &[&str]) {
    Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .expect("Failed to run git");
}

fn git_add(path: &Path, file: &str) {
    git(path, &["add", file]);
}

fn git_commit(path: &Path, message: &str) {
    git(path, &["commit", "-m", message]);
}

/// Write a one-record registry whose failure affects `glob`
fn write_registry(repo: &Path, glob: &str) {
    let dir = repo.join(".guardrails");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("failure-registry.jsonl"),
        format!(
            "# test registry\n{{\"failure_id\":\"FAIL-1\",\"timestamp\":\"2025-11-02T12:00:00Z\",\
             \"category\":\"runtime\",\"severity\":\"high\",\"status\":\"active\",\
             \"error_message\":\"nil pointer in handler\",\"affected_files\":[\"{glob}\"],\
             \"prevention_rule\":\"check for nil before deref\"}}\n"
        ),
    )
    .unwrap();
}

/// Write a pattern-rules source with one eval-guard rule
fn write_eval_rule(repo: &Path, forbidden: Option<&str>) {
    let dir = repo.join(".guardrails/prevention-rules");
    fs::create_dir_all(&dir).unwrap();
    let forbidden_field =
        forbidden.map(|f| format!(",\"forbidden_context\":\"{f}\"")).unwrap_or_default();
    fs::write(
        dir.join("pattern-rules.json"),
        format!(
            "{{\"rules\":[{{\"rule_id\":\"RULE-1\",\"name\":\"No dynamic eval\",\
             \"pattern\":\"eval\\\\(\",\"severity\":\"error\",\
             \"message\":\"eval on user input caused FAIL-1\"{forbidden_field}}}]}}"
        ),
    )
    .unwrap();
}

/// Repo with an initial commit so `git diff --cached` has a baseline
fn repo_with_initial_commit() -> TempDir {
    let temp = TempDir::new().unwrap();
    init_git_repo(temp.path());
    fs::write(temp.path().join(".gitignore"), "target/\n").unwrap();
    git_add(temp.path(), ".gitignore");
    git_commit(temp.path(), "Initial commit");
    temp
}

// =============================================================================
// CHECK: DEGRADED INPUTS
// =============================================================================

#[test]
fn check_with_no_changes_passes() {
    let temp = repo_with_initial_commit();

    guardrails()
        .arg("check")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No changed files to check"));
}

#[test]
fn check_runs_without_registry_or_rules() {
    let temp = repo_with_initial_commit();
    fs::write(temp.path().join("app.js"), "const x = 1;\n").unwrap();
    git_add(temp.path(), "app.js");

    guardrails()
        .args(["check", "--pre-commit"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No potential regressions detected"));
}

#[test]
fn check_outside_a_git_repo_degrades_to_nothing() {
    let temp = TempDir::new().unwrap();

    guardrails()
        .args(["check", "--pre-commit"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No changed files to check"));
}

// =============================================================================
// CHECK: FAILURE HISTORY MATCHING
// =============================================================================

#[test]
fn file_matching_failure_glob_is_flagged() {
    let temp = repo_with_initial_commit();
    write_registry(temp.path(), "api/*.go");

    fs::create_dir_all(temp.path().join("api")).unwrap();
    fs::write(temp.path().join("api/handler.go"), "package api\n").unwrap();
    fs::write(temp.path().join("index.html"), "<p>hi</p>\n").unwrap();
    git_add(temp.path(), "api/handler.go");
    git_add(temp.path(), "index.html");

    guardrails()
        .args(["check", "--pre-commit"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("api/handler.go"))
        .stdout(predicate::str::contains("FAIL-1"))
        .stdout(predicate::str::contains("Known bug history"))
        .stdout(predicate::str::contains("Total files with potential issues: 1"));
}

#[test]
fn issues_do_not_fail_exit_without_pre_commit_flag() {
    let temp = repo_with_initial_commit();
    write_registry(temp.path(), "api/*.go");

    fs::create_dir_all(temp.path().join("api")).unwrap();
    fs::write(temp.path().join("api/handler.go"), "package api\n").unwrap();
    git_add(temp.path(), "api/handler.go");

    guardrails()
        .arg("check")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("FAIL-1"));
}

#[test]
fn resolved_failure_stops_flagging() {
    let temp = repo_with_initial_commit();
    write_registry(temp.path(), "api/*.go");

    fs::create_dir_all(temp.path().join("api")).unwrap();
    fs::write(temp.path().join("api/handler.go"), "package api\n").unwrap();
    git_add(temp.path(), "api/handler.go");

    guardrails()
        .args(["resolve", "FAIL-1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated FAIL-1 status to: resolved"));

    guardrails()
        .args(["check", "--pre-commit"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No potential regressions detected"));
}

// =============================================================================
// CHECK: PATTERN RULES
// =============================================================================

#[test]
fn pattern_rule_flags_added_line() {
    let temp = repo_with_initial_commit();
    write_eval_rule(temp.path(), None);

    fs::write(temp.path().join("app.js"), "eval(userInput);\n").unwrap();
    git_add(temp.path(), "app.js");

    guardrails()
        .args(["check", "--pre-commit"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("No dynamic eval"))
        .stdout(predicate::str::contains("Pattern violation"));
}

#[test]
fn forbidden_context_suppresses_rule() {
    let temp = repo_with_initial_commit();
    write_eval_rule(temp.path(), Some("# safe-eval"));

    fs::write(temp.path().join("app.py"), "eval(x)  # safe-eval\n").unwrap();
    git_add(temp.path(), "app.py");

    guardrails()
        .args(["check", "--pre-commit"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No potential regressions detected"));
}

#[test]
fn deleted_line_does_not_trigger_rule() {
    let temp = repo_with_initial_commit();
    write_eval_rule(temp.path(), None);

    fs::write(temp.path().join("app.js"), "eval(userInput);\nconst ok = 1;\n").unwrap();
    git_add(temp.path(), "app.js");
    git_commit(temp.path(), "Add app.js");

    // The new change only removes the eval line
    fs::write(temp.path().join("app.js"), "const ok = 1;\n").unwrap();
    git_add(temp.path(), "app.js");

    guardrails()
        .args(["check", "--pre-commit"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No potential regressions detected"));
}

#[test]
fn unstaged_scope_sees_working_tree_changes() {
    let temp = repo_with_initial_commit();
    write_eval_rule(temp.path(), None);

    fs::write(temp.path().join("app.js"), "const ok = 1;\n").unwrap();
    git_add(temp.path(), "app.js");
    git_commit(temp.path(), "Add app.js");

    // Unstaged edit introduces the flagged call
    fs::write(temp.path().join("app.js"), "const ok = 1;\neval(userInput);\n").unwrap();

    guardrails()
        .args(["check", "--pre-commit"])
        .current_dir(temp.path())
        .assert()
        .success();

    guardrails()
        .args(["check", "--unstaged", "--pre-commit"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("No dynamic eval"));
}

// =============================================================================
// CHECK: OUTPUT MODES
// =============================================================================

#[test]
fn json_output_is_machine_readable() {
    let temp = repo_with_initial_commit();
    write_registry(temp.path(), "api/*.go");

    fs::create_dir_all(temp.path().join("api")).unwrap();
    fs::write(temp.path().join("api/handler.go"), "package api\n").unwrap();
    git_add(temp.path(), "api/handler.go");

    let output =
        guardrails().args(["--json", "check"]).current_dir(temp.path()).output().unwrap();

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["issue_count"], 1);
    assert_eq!(value["issues"][0]["file_path"], "api/handler.go");
    assert_eq!(value["issues"][0]["failures"][0]["failure_id"], "FAIL-1");
}

#[test]
fn quiet_mode_is_silent_on_clean_changes() {
    let temp = repo_with_initial_commit();
    fs::write(temp.path().join("app.js"), "const x = 1;\n").unwrap();
    git_add(temp.path(), "app.js");

    guardrails()
        .args(["check", "--quiet"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// REGISTRY LIFECYCLE VIA CLI
// =============================================================================

#[test]
fn log_then_list_round_trip() {
    let temp = TempDir::new().unwrap();
    let registry = temp.path().join("registry.jsonl");
    let registry_arg = registry.to_str().unwrap();

    let output = guardrails()
        .args([
            "--json",
            "log",
            "-e",
            "TypeError: cannot read property 'id' of undefined",
            "--affected-files",
            "src/*.js",
            "-r",
            registry_arg,
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let logged: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let failure_id = logged["failure_id"].as_str().unwrap();
    assert!(failure_id.starts_with("FAIL-"));

    guardrails()
        .args(["list", "-r", registry_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains(failure_id))
        .stdout(predicate::str::contains("runtime"));
}

#[test]
fn log_auto_categorizes_from_error_message() {
    let temp = TempDir::new().unwrap();
    let registry = temp.path().join("registry.jsonl");
    let registry_arg = registry.to_str().unwrap();

    let output = guardrails()
        .args(["--json", "log", "-e", "compilation failed: missing symbol", "-r", registry_arg])
        .output()
        .unwrap();
    let logged: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let failure_id = logged["failure_id"].as_str().unwrap();

    let output = guardrails()
        .args(["--json", "show", failure_id, "-r", registry_arg])
        .output()
        .unwrap();
    let detail: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(detail["failure"]["category"], "build");
    // Prevention rule suggested from the detected category
    assert!(
        detail["failure"]["prevention_rule"].as_str().unwrap().contains("build checks")
    );
}

#[test]
fn resolve_unknown_id_fails_with_not_found() {
    let temp = TempDir::new().unwrap();
    let registry = temp.path().join("registry.jsonl");
    fs::write(&registry, "").unwrap();

    guardrails()
        .args(["resolve", "FAIL-404", "-r", registry.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FAIL-404 not found"));
}

#[test]
fn registry_env_variable_is_honored() {
    let temp = repo_with_initial_commit();
    let registry = temp.path().join("elsewhere.jsonl");
    fs::write(
        &registry,
        "{\"failure_id\":\"FAIL-9\",\"timestamp\":\"2025-11-02T12:00:00Z\",\
         \"category\":\"test\",\"severity\":\"low\",\"status\":\"active\",\
         \"error_message\":\"flaky test\",\"affected_files\":[\"*.js\"]}\n",
    )
    .unwrap();

    fs::write(temp.path().join("app.js"), "const x = 1;\n").unwrap();
    git_add(temp.path(), "app.js");

    guardrails()
        .args(["check", "--pre-commit"])
        .env("FAILURE_REGISTRY_PATH", registry.to_str().unwrap())
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL-9"));
}
