//! Update a failure's lifecycle status

use std::path::PathBuf;

use guardrails::adapters::registry;
use guardrails::config::ProjectConfig;
use guardrails::core::models::Status;
use guardrails::output::{OperationResult, OutputMode};
use guardrails::paths;

/// Set a record's status and rewrite the registry atomically
pub fn set_status(
    id: &str,
    new_status: Status,
    registry_flag: Option<PathBuf>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = ProjectConfig::load();
    let registry_path = paths::registry_path(registry_flag, &config);

    let updated = registry::update_status(&registry_path, id, new_status)?;

    OperationResult {
        success: true,
        message: format!("Updated {} status to: {}", updated.id, updated.status),
    }
    .render(mode);
    Ok(())
}
