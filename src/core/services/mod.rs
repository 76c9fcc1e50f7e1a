//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies of their own - the matcher
//! reaches the outside world only through the [`VersionControl`] port.
//!
//! - [`matcher`] - match changed files against failures and pattern rules
//! - [`categorize`] - keyword-based failure categorization
//!
//! [`VersionControl`]: crate::core::ports::VersionControl

pub mod categorize;
pub mod matcher;

pub use categorize::{detect_category, suggest_prevention};
pub use matcher::{added_lines, detect_regressions, match_failure_history, match_pattern_rules};
