//! Check changed files for potential regressions

use std::path::PathBuf;

use log::{debug, warn};

use guardrails::adapters::git::GitVcs;
use guardrails::adapters::{registry, rules};
use guardrails::config::ProjectConfig;
use guardrails::core::models::ChangeScope;
use guardrails::core::ports::VersionControl;
use guardrails::core::services::detect_regressions;
use guardrails::output::{CheckReport, OutputMode};
use guardrails::paths;

/// Run the regression check over the requested change scope.
///
/// Degraded inputs (missing registry, missing rules, unavailable git)
/// reduce coverage but never fail the check; the only failure signal is
/// the enforcement exit code when issues are found.
pub fn check(
    scope: ChangeScope,
    enforce: bool,
    quiet: bool,
    registry_flag: Option<PathBuf>,
    rules_flag: Option<PathBuf>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = ProjectConfig::load();
    let registry_path = paths::registry_path(registry_flag, &config);
    let rules_dir = paths::rules_dir(rules_flag, &config);

    let failures = registry::load_active(&registry_path).unwrap_or_else(|err| {
        warn!("Could not read registry {}: {err}", registry_path.display());
        Vec::new()
    });
    let rules = rules::load(&rules_dir);
    debug!("Loaded {} active failures, {} enabled rules", failures.len(), rules.len());

    let vcs = GitVcs;
    let changed = vcs.changed_files(scope).unwrap_or_else(|err| {
        warn!("Version control unavailable, nothing to check: {err}");
        Vec::new()
    });
    debug!("Checking {} changed file(s), {scope} scope", changed.len());

    let issues = detect_regressions(&changed, &vcs, scope, &failures, &rules);
    let report = CheckReport::new(issues, changed.len());

    if mode == OutputMode::Json || !quiet || report.has_issues() {
        report.render(mode);
    }

    if enforce && report.has_issues() {
        std::process::exit(1);
    }

    Ok(())
}
