// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Projects: a named group of backup artifacts, governed by retention rules.

use crate::{Rule, RuleId, RuleState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A project's per-rule reconciliation state, keyed by stable rule ID.
pub type ProjectState = BTreeMap<RuleId, RuleState>;

/// A configured project: a folder in the object store plus the rules
/// that govern which of its files are retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub state: ProjectState,
    /// Set on first save; `None` for a project that has never been
    /// persisted.
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            rules,
            state: ProjectState::new(),
            created_at: None,
        }
    }

    /// Returns the state for `rule`, creating a fresh one if this is the
    /// rule's first reconciliation (or it was edited into a new ID).
    pub fn state_for(&self, rule: &Rule) -> RuleState {
        self.state
            .get(&rule.id())
            .cloned()
            .unwrap_or_else(|| RuleState::fresh(*rule))
    }

    pub fn set_state(&mut self, rule_id: RuleId, state: RuleState) {
        self.state.insert(rule_id, state);
    }

    /// Removes `removed_paths` from every rule's selected files, e.g.
    /// after the reaper has deleted them from the file store.
    pub fn remove_files_from_state(&mut self, removed_paths: &[String]) {
        for state in self.state.values_mut() {
            state.files.retain(|f| !removed_paths.contains(&f.path().to_string()));
        }
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
