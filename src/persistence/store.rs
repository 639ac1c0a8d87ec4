use crate::domain::Task;
use crate::persistence::atomic_write;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load the persisted task snapshot, preserving stored order.
///
/// An absent file, an unreadable file, and malformed JSON all yield an empty
/// list - a missing collection is never an error.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Vec<Task> {
    let path = path.as_ref();
    if !path.exists() {
        return Vec::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };

    serde_json::from_str(&content).unwrap_or_default()
}

/// Overwrite the stored snapshot with the full current list.
///
/// There are no partial writes: every mutation re-serializes the whole
/// collection, so storage always mirrors the rendered list exactly.
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks).context("Failed to serialize tasks")?;
    atomic_write(path, &json)
}
