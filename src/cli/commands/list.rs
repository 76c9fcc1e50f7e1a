//! List failures in the registry

use std::path::PathBuf;

use guardrails::adapters::registry;
use guardrails::config::ProjectConfig;
use guardrails::core::models::{Category, Status};
use guardrails::output::{FailureList, OutputMode};
use guardrails::paths;

/// List registry records, optionally filtered by category and status
pub fn list(
    category: Option<Category>,
    status: Option<Status>,
    registry_flag: Option<PathBuf>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = ProjectConfig::load();
    let registry_path = paths::registry_path(registry_flag, &config);

    let mut failures = registry::load(&registry_path)?;
    if let Some(category) = category {
        failures.retain(|f| f.category == category);
    }
    if let Some(status) = status {
        failures.retain(|f| f.status == status);
    }

    FailureList { failures }.render(mode);
    Ok(())
}
