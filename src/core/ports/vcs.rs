//! Version control system port
//!
//! Defines the interface for interacting with version control. The engine
//! only ever needs two capabilities: enumerating changed paths and fetching
//! the diff text for one of them.

use crate::core::models::ChangeScope;

/// Version control system abstraction
///
/// Implementations handle interactions with git or other VCS systems.
pub trait VersionControl {
    /// List the paths changed within the given scope, in the VCS's own order
    fn changed_files(&self, scope: ChangeScope) -> anyhow::Result<Vec<String>>;

    /// Get the diff text for one file within the given scope
    fn diff(&self, path: &str, scope: ChangeScope) -> anyhow::Result<String>;
}
