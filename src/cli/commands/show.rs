//! Show one failure in full

use std::path::PathBuf;

use guardrails::adapters::registry;
use guardrails::config::ProjectConfig;
use guardrails::error::RegistryError;
use guardrails::output::{FailureDetail, OutputMode};
use guardrails::paths;

/// Show the full detail of a single record by id
pub fn show(id: &str, registry_flag: Option<PathBuf>, mode: OutputMode) -> anyhow::Result<()> {
    let config = ProjectConfig::load();
    let registry_path = paths::registry_path(registry_flag, &config);

    let failure = registry::load(&registry_path)?
        .into_iter()
        .find(|f| f.id == id)
        .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

    FailureDetail { failure }.render(mode);
    Ok(())
}
