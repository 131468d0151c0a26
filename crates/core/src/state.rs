// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-rule reconciliation state.

use crate::{File, Rule, RuleError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file chosen by a rule, carrying a rule-specific expiration and
/// optional diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub file: File,
    /// `file.date + rule.min_age` — purely a function of those two
    /// fields, never mutated once recorded.
    pub expiration: DateTime<Utc>,
    pub error: Option<RuleError>,
}

impl SelectedFile {
    pub fn new(file: File, expiration: DateTime<Utc>) -> Self {
        Self {
            file,
            expiration,
            error: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.file.path
    }
}

/// Sorts selected files by expiration, descending.
pub fn sorted_by_expiration_desc(files: &[SelectedFile]) -> Vec<SelectedFile> {
    let mut sorted = files.to_vec();
    sorted.sort_by(|a, b| b.expiration.cmp(&a.expiration));
    sorted
}

/// The rule's current view of the world: its selected files, their
/// expirations, the next due instant, and any rule-wide error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleState {
    pub rule: Rule,
    pub files: Vec<SelectedFile>,
    pub next: Option<DateTime<Utc>>,
    /// Rule-wide error with no associated file (currently only `NoFile`).
    pub error: Option<RuleError>,
}

impl RuleState {
    /// A freshly initialized state for a rule that has never been
    /// reconciled before.
    pub fn fresh(rule: Rule) -> Self {
        Self {
            rule,
            files: Vec::new(),
            next: None,
            error: None,
        }
    }

    /// Whether the rule is due for reconciliation at `ref_date`: either
    /// it has never been reconciled (`next` unset) or its due date has
    /// arrived.
    pub fn is_due(&self, ref_date: DateTime<Utc>) -> bool {
        match self.next {
            None => true,
            Some(next) => next <= ref_date,
        }
    }

    pub fn file(&self, path: &str) -> Option<&SelectedFile> {
        self.files.iter().find(|f| f.path() == path)
    }

    pub fn file_mut(&mut self, path: &str) -> Option<&mut SelectedFile> {
        self.files.iter_mut().find(|f| f.path() == path)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
