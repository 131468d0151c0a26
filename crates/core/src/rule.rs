// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retention rules: "keep at least `count` backups each at least `min_age` days apart".

use serde::{Deserialize, Serialize};
use std::fmt;

/// A retention rule configured on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Minimum number of distinct files to retain.
    pub count: u32,
    /// Minimum separation, in days, between kept files.
    pub min_age: u32,
}

impl Rule {
    pub fn new(count: u32, min_age: u32) -> Self {
        Self { count, min_age }
    }

    /// Stable identifier for this rule within its project.
    ///
    /// Rewriting a rule with the same `(count, min_age)` preserves state
    /// continuity; changing either is a new rule to the reconciler.
    pub fn id(&self) -> RuleId {
        RuleId(format!("rule{}.{}", self.count, self.min_age))
    }

    /// The rule's minimum separation expressed as a `chrono::Duration`.
    pub fn min_age_duration(&self) -> chrono::Duration {
        chrono::Duration::days(self.min_age as i64)
    }
}

/// Stable identifier for a [`Rule`] within a project's rule set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RuleId(String);

impl RuleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sorts rules by `min_age`, descending — longer-age rules select first
/// so shorter-age rules can reuse their picks (see the reconciler).
pub fn sorted_by_min_age_desc(rules: &[Rule]) -> Vec<Rule> {
    let mut sorted = rules.to_vec();
    sorted.sort_by(|a, b| b.min_age.cmp(&a.min_age));
    sorted
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
