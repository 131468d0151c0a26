// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregated per-project error state, fed to the deduping notifier.

use crate::RuleErrorKind;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::collections::BTreeMap;

/// Severity of a [`ProjectErrorStatement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    /// Catches attention, no impact on the reconciliation process.
    Warning,
    /// Requires action.
    Critic,
}

crate::simple_display! {
    AlertLevel {
        Warning => "warning",
        Critic => "critic",
    }
}

/// Aggregated error state for a project at the end of a reconciliation
/// tick. At most one is produced per project per tick (`count == 0`
/// produces none).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectErrorStatement {
    pub project_name: String,
    pub count: u32,
    /// Kind → short human description, deduplicated across every rule
    /// and file error encountered this tick.
    pub reasons: BTreeMap<RuleErrorKind, String>,
    pub max_level: AlertLevel,
}

impl ProjectErrorStatement {
    /// Dedup key: two statements with the same fingerprint are treated
    /// as the same ongoing issue by the notifier.
    pub fn fingerprint(&self) -> String {
        let reason_kinds: Vec<&RuleErrorKind> = self.reasons.keys().collect();
        let material = format!(
            "n:{}c:{}r:{:?}l:{}",
            self.project_name, self.count, reason_kinds, self.max_level
        );
        let digest = Sha1::digest(material.as_bytes());
        format!("{digest:x}")
    }
}

#[cfg(test)]
#[path = "statement_tests.rs"]
mod tests;
