//! JSON word-list persistence.
//!
//! The on-disk format is a flat JSON array of strings. Writes go through a
//! temp file in the target directory followed by a rename, so a failed run
//! never leaves a truncated list behind — readers see either the old file or
//! the new one, complete.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Write `words` to `path` as a JSON array, atomically.
pub fn save_words(path: &Path, words: &BTreeSet<String>) -> Result<()> {
    let list: Vec<&str> = words.iter().map(String::as_str).collect();
    let json = serde_json::to_string(&list).context("failed to serialize word list")?;

    let tmp = temp_path(path);
    std::fs::write(&tmp, json.as_bytes())
        .with_context(|| format!("failed to write {}", tmp.display()))?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("failed to move word list to {}", path.display()));
    }

    Ok(())
}

/// Load a word list written by [`save_words`] (or any JSON string array).
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list: {}", path.display()))?;

    let words: Vec<String> = serde_json::from_str(&content).with_context(|| {
        format!(
            "invalid word list (expected a JSON array of strings): {}",
            path.display()
        )
    })?;

    Ok(words)
}

/// Sibling temp path, same directory so the rename stays on one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "wordlist".into());
    name.push(".tmp");
    path.with_file_name(name)
}
