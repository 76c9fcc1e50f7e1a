//! Project configuration
//!
//! Optional overrides stored at `.guardrails/config.toml`. Loading is
//! fail-open: a missing or unparsable config behaves like an empty one,
//! so a broken config file can never stop the check from running.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Per-project guardrails configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Failure registry location, relative to the working directory
    #[serde(default)]
    pub registry: Option<PathBuf>,

    /// Prevention rules directory, relative to the working directory
    #[serde(default)]
    pub rules: Option<PathBuf>,
}

impl ProjectConfig {
    /// Load config from the default location, or empty if not present
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&paths::config_file())
    }

    /// Load config from a specific path, or empty if not present
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
