// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Backup artifacts as surfaced by the file store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single backup artifact.
///
/// `path` is always of the form `"<folder>/<name>"`; the file store is
/// responsible for filtering out anything that doesn't conform before
/// it reaches the core (see [`File::folder_and_name`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub path: String,
    pub date: DateTime<Utc>,
    pub size: i64,
}

impl File {
    pub fn new(path: impl Into<String>, date: DateTime<Utc>, size: i64) -> Self {
        Self {
            path: path.into(),
            date,
            size,
        }
    }

    /// Splits `path` into its folder and name components.
    ///
    /// Returns `None` for paths that don't have exactly two `/`-separated
    /// segments; such paths are ignored by the file store.
    pub fn folder_and_name(path: &str) -> Option<(&str, &str)> {
        let mut parts = path.splitn(2, '/');
        let folder = parts.next()?;
        let name = parts.next()?;
        if folder.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }
        Some((folder, name))
    }

    pub fn folder(&self) -> Option<&str> {
        Self::folder_and_name(&self.path).map(|(folder, _)| folder)
    }
}

/// Files grouped by their containing folder (project name).
pub type FilesByFolder = HashMap<String, Vec<File>>;

/// Sorts `files` by date, descending (most recent first).
pub fn sorted_by_date_desc(files: &[File]) -> Vec<File> {
    let mut sorted = files.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
