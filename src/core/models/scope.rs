//! Change scope model

/// Which category of pending modifications is being evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeScope {
    /// Changes staged for commit (default)
    #[default]
    Staged,
    /// Working-tree changes not yet staged
    Unstaged,
    /// Both staged and unstaged changes
    Both,
}

impl ChangeScope {
    /// Does this scope cover staged changes?
    #[must_use]
    pub const fn includes_staged(self) -> bool {
        matches!(self, Self::Staged | Self::Both)
    }

    /// Does this scope cover unstaged changes?
    #[must_use]
    pub const fn includes_unstaged(self) -> bool {
        matches!(self, Self::Unstaged | Self::Both)
    }
}

impl std::fmt::Display for ChangeScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Staged => write!(f, "staged"),
            Self::Unstaged => write!(f, "unstaged"),
            Self::Both => write!(f, "both"),
        }
    }
}
