//! Centralized path definitions for guardrails
//!
//! Single source of truth for where the registry and rule sources live.
//! Resolution precedence for both locations:
//!
//! 1. explicit CLI flag
//! 2. environment variable (`FAILURE_REGISTRY_PATH` / `PREVENTION_RULES_PATH`)
//! 3. `.guardrails/config.toml`
//! 4. the documented default under `.guardrails/`

use std::env;
use std::path::PathBuf;

use crate::config::ProjectConfig;

/// Directory name for guardrails state
pub const GUARDRAILS_DIR: &str = ".guardrails";

/// Failure registry filename
pub const REGISTRY_FILE: &str = "failure-registry.jsonl";

/// Prevention rules directory name
pub const RULES_DIR: &str = "prevention-rules";

/// Project configuration filename
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the registry location
pub const REGISTRY_ENV: &str = "FAILURE_REGISTRY_PATH";

/// Environment variable overriding the rules directory location
pub const RULES_ENV: &str = "PREVENTION_RULES_PATH";

/// Default registry location: `.guardrails/failure-registry.jsonl`
#[must_use]
pub fn default_registry() -> PathBuf {
    PathBuf::from(GUARDRAILS_DIR).join(REGISTRY_FILE)
}

/// Default rules directory: `.guardrails/prevention-rules`
#[must_use]
pub fn default_rules_dir() -> PathBuf {
    PathBuf::from(GUARDRAILS_DIR).join(RULES_DIR)
}

/// Project config location: `.guardrails/config.toml`
#[must_use]
pub fn config_file() -> PathBuf {
    PathBuf::from(GUARDRAILS_DIR).join(CONFIG_FILE)
}

/// Resolve the registry path from flag, environment, config and default
#[must_use]
pub fn registry_path(flag: Option<PathBuf>, config: &ProjectConfig) -> PathBuf {
    flag.or_else(|| env::var_os(REGISTRY_ENV).map(PathBuf::from))
        .or_else(|| config.registry.clone())
        .unwrap_or_else(default_registry)
}

/// Resolve the rules directory from flag, environment, config and default
#[must_use]
pub fn rules_dir(flag: Option<PathBuf>, config: &ProjectConfig) -> PathBuf {
    flag.or_else(|| env::var_os(RULES_ENV).map(PathBuf::from))
        .or_else(|| config.rules.clone())
        .unwrap_or_else(default_rules_dir)
}
