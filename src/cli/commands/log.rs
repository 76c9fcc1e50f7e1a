//! Log a failure to the registry

use log::warn;

use guardrails::adapters::registry;
use guardrails::config::ProjectConfig;
use guardrails::core::models::{Category, FailureRecord, Severity};
use guardrails::core::services::{detect_category, suggest_prevention};
use guardrails::output::{LogResult, OutputMode};
use guardrails::paths;

use crate::cli::app::LogArgs;

/// Append a new failure record built from command-line arguments
pub fn log_failure(args: LogArgs, mode: OutputMode) -> anyhow::Result<()> {
    let config = ProjectConfig::load();
    let registry_path = paths::registry_path(args.registry, &config);

    let category = args
        .category
        .or_else(|| detect_category(&args.error_message))
        .unwrap_or(Category::Runtime);
    let severity = args.severity.unwrap_or(Severity::Medium);

    let mut record = FailureRecord::new(category, severity, args.error_message);
    record.root_cause = args.root_cause.unwrap_or_default();
    record.affected_files = args.affected_files;
    record.fix_commit = args.fix_commit;
    if let Some(pattern) = args.regression_pattern {
        // Recorded either way; the rule store validates again on activation
        if let Err(err) = regex::Regex::new(&pattern) {
            warn!("Regression pattern {pattern:?} is not a valid regex: {err}");
        }
        record.regression_pattern = Some(pattern);
    }
    record.prevention_rule = args
        .prevention_rule
        .unwrap_or_else(|| suggest_prevention(category).to_string());

    registry::append(&registry_path, &record)?;

    LogResult {
        failure_id: record.id,
        registry: registry_path.display().to_string(),
    }
    .render(mode);
    Ok(())
}
