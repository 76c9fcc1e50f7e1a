//! Failure registry store
//!
//! A line-oriented JSONL file: one record per line, `#` lines are
//! comments. Loading is fail-open - a corrupt line is skipped so one bad
//! entry never takes the registry down. Appends are fsync'd line writes;
//! status updates rewrite the whole file through a sibling temp file and
//! an atomic rename, so a concurrent reader sees either the old or the
//! new registry, never a mixture. Two simultaneous updaters are not
//! arbitrated; last rename wins.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use tempfile::NamedTempFile;

use crate::core::models::{FailureRecord, Status};
use crate::error::RegistryError;

const REGISTRY_HEADER: &str = "\
# Failure Registry - Append-only log of bugs and failures
# Format: One JSON object per line (JSONL)
# Do not edit existing entries by hand; use `guardrails log` to add new ones
";

/// Load every parseable record from the registry.
///
/// A missing file is an empty registry. Blank lines, comment lines and
/// lines that fail to parse are skipped silently.
pub fn load(path: &Path) -> Result<Vec<FailureRecord>, RegistryError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let records = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect();
    Ok(records)
}

/// Load only the records still participating in matching
pub fn load_active(path: &Path) -> Result<Vec<FailureRecord>, RegistryError> {
    let mut records = load(path)?;
    records.retain(|r| r.status == Status::Active);
    Ok(records)
}

/// Append one record as a single line, durably.
///
/// Parent directories are created as needed; the write is flushed and
/// fsync'd before returning so a crash mid-commit cannot leave a partial
/// record behind the caller's back.
pub fn append(path: &Path, record: &FailureRecord) -> Result<(), RegistryError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut line = serde_json::to_string(record)?;
    line.push('\n');

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

/// Set a record's status and rewrite the registry atomically.
///
/// Fails with [`RegistryError::NotFound`] before touching the file when
/// the id is unknown. Otherwise the record gets the new status and an
/// `updated_at` stamp, and the whole store (header comments plus one line
/// per record) is written to a sibling temp file and renamed over the
/// original. Returns the updated record.
pub fn update_status(
    path: &Path,
    id: &str,
    new_status: Status,
) -> Result<FailureRecord, RegistryError> {
    let mut records = load(path)?;

    let record = records
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
    record.status = new_status;
    record.updated_at = Some(Utc::now());
    let updated = record.clone();

    let mut content = String::from(REGISTRY_HEADER);
    for r in &records {
        content.push_str(&serde_json::to_string(r)?);
        content.push('\n');
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path)?;

    Ok(updated)
}
