// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Reaper: decides which of a project's files are no longer
//! needed by any rule and can be deleted.

use backr_core::{File, ProjectState, RuleErrorKind};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// Returns the sublist of `files` that no rule's state still needs.
pub fn files_to_delete<'a>(
    state: &ProjectState,
    files: &'a [File],
    ref_date: DateTime<Utc>,
) -> Vec<&'a File> {
    let mut max_expiration: HashMap<&str, DateTime<Utc>> = HashMap::new();
    for rule_state in state.values() {
        for selected in &rule_state.files {
            let entry = max_expiration.entry(selected.path()).or_insert(selected.expiration);
            if selected.expiration > *entry {
                *entry = selected.expiration;
            }
        }
    }

    let mut keep: HashSet<&str> = HashSet::new();
    for rule_state in state.values() {
        let mut sorted = rule_state.files.clone();
        sorted.sort_by(|a, b| b.expiration.cmp(&a.expiration));

        let mut k = 0u32;
        for selected in &sorted {
            let still_referenced = max_expiration
                .get(selected.path())
                .is_some_and(|exp| *exp > ref_date);
            let is_size_too_small = selected
                .error
                .as_ref()
                .is_some_and(|e| e.kind == RuleErrorKind::SizeTooSmall);

            if k < rule_state.rule.count || still_referenced {
                keep.insert(selected.path());
            }
            if !is_size_too_small {
                k += 1;
            }
        }
    }

    files.iter().filter(|f| !keep.contains(f.path.as_str())).collect()
}

#[cfg(test)]
#[path = "reaper_tests.rs"]
mod tests;
