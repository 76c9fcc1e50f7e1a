//! Domain models for guardrails
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`FailureRecord`] - one historical bug and how to detect recurrence
//! - [`PatternRule`] / [`SemanticRule`] - guards against reintroducing it
//! - [`Issue`] - per-file findings produced by the matcher
//! - [`ChangeScope`] - which pending modifications are evaluated

mod failure;
mod issue;
mod rule;
mod scope;

pub use failure::{Category, FailureRecord, Severity, Status};
pub use issue::{Issue, RuleViolation};
pub use rule::{CompiledPatternRule, PatternRule, Rule, RuleSeverity, SemanticRule};
pub use scope::ChangeScope;
