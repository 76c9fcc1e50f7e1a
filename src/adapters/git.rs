//! Git adapter for the version control port
//!
//! Shells out to the `git` binary; no libgit2 dependency. Callers are
//! expected to treat a failing adapter as an empty change set (the check
//! must never block a workflow it cannot evaluate), so errors here are
//! ordinary `anyhow` errors, not process aborts.

use std::process::Command;

use crate::core::models::ChangeScope;
use crate::core::ports::VersionControl;

/// Version control backed by the `git` command-line tool
#[derive(Debug, Clone, Copy, Default)]
pub struct GitVcs;

impl VersionControl for GitVcs {
    fn changed_files(&self, scope: ChangeScope) -> anyhow::Result<Vec<String>> {
        let mut files = Vec::new();

        if scope.includes_staged() {
            collect_names(&["diff", "--cached", "--name-only"], &mut files)?;
        }
        if scope.includes_unstaged() {
            collect_names(&["diff", "--name-only"], &mut files)?;
        }

        Ok(files)
    }

    fn diff(&self, path: &str, scope: ChangeScope) -> anyhow::Result<String> {
        let mut text = String::new();

        if scope.includes_staged() {
            text.push_str(&diff_output(&["diff", "--cached", "--", path])?);
        }
        if scope.includes_unstaged() {
            text.push_str(&diff_output(&["diff", "--", path])?);
        }

        Ok(text)
    }
}

/// Run a name-listing diff and append new paths, preserving first-seen order
fn collect_names(args: &[&str], files: &mut Vec<String>) -> anyhow::Result<()> {
    let output = Command::new("git").args(args).output()?;

    if !output.status.success() {
        anyhow::bail!("git {} failed", args.join(" "));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        if !line.is_empty() && !files.iter().any(|f| f == line) {
            files.push(line.to_string());
        }
    }
    Ok(())
}

fn diff_output(args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git").args(args).output()?;

    // git diff exits 1 when differences exist under some configurations
    match output.status.code() {
        Some(0 | 1) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
        _ => anyhow::bail!("git {} failed", args.join(" ")),
    }
}
