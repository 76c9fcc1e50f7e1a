//! Regression matcher - matches changed files against failure history
//! and prevention rules
//!
//! Two independent signals per changed file:
//!
//! 1. **Failure history**: the file path is tested against every active
//!    failure's `affected_files` globs.
//! 2. **Pattern rules**: the added lines of the file's diff are tested
//!    against every enabled pattern rule, with forbidden-context
//!    suppression.
//!
//! Glob semantics are those of the `glob` crate with
//! `require_literal_separator` set: `*`, `?` and `[...]` never cross `/`,
//! `**` matches recursively, and matching is case-sensitive except on
//! Windows. Suppression is whole-block: a forbidden context matching
//! anywhere in a file's added content suppresses the rule for that file,
//! not just near the triggering match.

use glob::{MatchOptions, Pattern};
use log::warn;

use crate::core::models::{ChangeScope, FailureRecord, Issue, Rule, RuleViolation, Status};
use crate::core::ports::VersionControl;

/// Run the full regression check over a set of changed files.
///
/// Files are processed independently and the result order matches the
/// input order. A file with no findings contributes nothing. A diff that
/// cannot be fetched degrades to empty added content with a warning; the
/// check itself never fails.
pub fn detect_regressions(
    changed_files: &[String],
    vcs: &dyn VersionControl,
    scope: ChangeScope,
    failures: &[FailureRecord],
    rules: &[Rule],
) -> Vec<Issue> {
    let mut issues = Vec::new();

    for file_path in changed_files {
        let mut issue = Issue::empty(file_path.clone());

        issue.failures = match_failure_history(file_path, failures);

        let diff = vcs.diff(file_path, scope).unwrap_or_else(|err| {
            warn!("Could not fetch diff for {file_path}: {err}");
            String::new()
        });
        if !diff.is_empty() {
            let added = added_lines(&diff);
            issue.violations = match_pattern_rules(&added, rules);
        }

        if !issue.is_empty() {
            issues.push(issue);
        }
    }

    issues
}

/// Collect the active failure records whose `affected_files` globs match
/// the given path.
///
/// The first matching glob claims the record; a record is never collected
/// twice for one file. Records keep registry order. Non-active records and
/// invalid globs are skipped.
#[must_use]
pub fn match_failure_history(file_path: &str, failures: &[FailureRecord]) -> Vec<FailureRecord> {
    let mut matching = Vec::new();

    for failure in failures {
        if failure.status != Status::Active {
            continue;
        }
        if failure.affected_files.iter().any(|g| glob_matches(g, file_path, &failure.id)) {
            matching.push(failure.clone());
        }
    }

    matching
}

/// Evaluate every enabled pattern rule against the added content.
///
/// All applicable rules are collected in declaration order; no rule
/// short-circuits another. Semantic rules are not evaluated here.
#[must_use]
pub fn match_pattern_rules(added_content: &str, rules: &[Rule]) -> Vec<RuleViolation> {
    if added_content.is_empty() {
        return Vec::new();
    }

    let mut violations = Vec::new();
    for rule in rules {
        let Rule::Pattern(compiled) = rule else {
            continue;
        };
        if compiled.matches(added_content) && !compiled.is_suppressed(added_content) {
            violations.push(RuleViolation::from_rule(&compiled.rule));
        }
    }

    violations
}

/// Extract the added lines of a unified diff into one searchable block.
///
/// Only `+`-prefixed lines count (the `+++` header does not); the marker
/// is stripped and original line order preserved. Deleted and context
/// lines never appear, since only newly introduced code can introduce a
/// new regression.
#[must_use]
pub fn added_lines(diff: &str) -> String {
    diff.lines()
        .filter(|line| line.starts_with('+') && !line.starts_with("+++"))
        .map(|line| &line[1..])
        .collect::<Vec<_>>()
        .join("\n")
}

fn glob_matches(pattern: &str, file_path: &str, failure_id: &str) -> bool {
    let options = MatchOptions {
        case_sensitive: !cfg!(windows),
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    match Pattern::new(pattern) {
        Ok(p) => p.matches_with(file_path, options),
        Err(err) => {
            warn!("Invalid glob {pattern:?} in {failure_id}: {err}");
            false
        },
    }
}
