//! Error-message auto-categorization
//!
//! An ordered association list of (category, keyword regex) pairs,
//! evaluated in declared order against the lowercased error message.
//! First match wins; evaluation order is part of the contract.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::models::Category;

const CATEGORY_PATTERNS: &[(Category, &str)] = &[
    (
        Category::Build,
        r"(build error|compilation failed|cannot find module|import error|syntax error)",
    ),
    (
        Category::Runtime,
        r"(runtime error|exception|crash|null pointer|undefined|typeerror|referenceerror)",
    ),
    (Category::Test, r"(test failed|assertion error|expected.*but got|test timeout)"),
    (Category::Type, r"(type mismatch|type error|incompatible types|cannot assign)"),
    (Category::Lint, r"(lint error|eslint|pylint|style violation|formatting)"),
    (Category::Deploy, r"(deployment failed|publish error|release failed|ci/cd error)"),
    (Category::Config, r"(configuration error|missing config|invalid config|env var)"),
];

fn table() -> &'static [(Category, Regex)] {
    static TABLE: OnceLock<Vec<(Category, Regex)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        CATEGORY_PATTERNS
            .iter()
            .filter_map(|(category, pattern)| Regex::new(pattern).ok().map(|re| (*category, re)))
            .collect()
    })
}

/// Auto-detect a failure category from its error message.
///
/// Returns `None` when no keyword pattern matches; callers pick their own
/// fallback (the CLI uses [`Category::Runtime`]).
#[must_use]
pub fn detect_category(error_message: &str) -> Option<Category> {
    let lowered = error_message.to_lowercase();
    table().iter().find(|(_, re)| re.is_match(&lowered)).map(|(category, _)| *category)
}

/// Suggest a prevention rule for a failure category
#[must_use]
pub const fn suggest_prevention(category: Category) -> &'static str {
    match category {
        Category::Build => "Run build checks before committing; verify all imports resolve",
        Category::Runtime => "Add defensive checks and error handling; test edge cases",
        Category::Test => "Run full test suite before committing; verify test coverage",
        Category::Type => "Enable strict type checking; run type checker before commit",
        Category::Lint => "Run linter before committing; fix all lint errors",
        Category::Deploy => "Verify deployment checklist; test in staging first",
        Category::Config => "Validate configuration at startup; use configuration schemas",
        Category::Regression => "Review code carefully; add appropriate safeguards",
    }
}
