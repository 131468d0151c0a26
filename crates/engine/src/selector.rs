// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Selector: picks, for one rule, which files satisfy its
//! retention window as of a reference instant.

use backr_core::{File, RuleError, RuleErrorKind, RuleState, SelectedFile};
use chrono::{DateTime, Utc};

/// Runs the selector for one rule against `files`, which must already
/// be sorted by date descending. Mutates and returns `state`.
pub fn select(state: RuleState, ref_date: DateTime<Utc>, files: &[File]) -> RuleState {
    let mut state = state;

    if files.is_empty() {
        state.files.clear();
        state.error = Some(RuleError::rule_wide(RuleErrorKind::NoFile));
        return state;
    }
    state.error = None;

    let min_age = state.rule.min_age_duration();
    let mut cutoff = ref_date;

    for (i, f) in files.iter().enumerate() {
        if f.date > cutoff {
            continue;
        }

        let expiration = f.date + min_age;
        let size_too_small = files
            .get(i + 1)
            .is_some_and(|previous| previous.size > 0 && (f.size as f64) <= previous.size as f64 * 0.5);
        let obsolete = expiration < cutoff;

        let file_error = if obsolete {
            Some(RuleErrorKind::Obsolete)
        } else if size_too_small {
            Some(RuleErrorKind::SizeTooSmall)
        } else {
            None
        };

        match state.file_mut(&f.path) {
            Some(existing) => {
                if let Some(kind) = file_error {
                    existing.error = Some(RuleError::for_file(kind, f.clone()));
                }
            }
            None => {
                let mut selected = SelectedFile::new(f.clone(), expiration);
                selected.error = file_error.map(|kind| RuleError::for_file(kind, f.clone()));
                state.files.push(selected);
            }
        }

        if file_error.is_none() {
            let candidate = f.date + min_age;
            state.next = match state.next {
                Some(next) if next >= candidate => Some(next),
                _ => Some(candidate),
            };
        }

        if file_error != Some(RuleErrorKind::SizeTooSmall) {
            cutoff -= min_age;
        }

        let clean_count = state.files.iter().filter(|sf| sf.error.is_none()).count();
        if clean_count >= state.rule.count as usize {
            break;
        }
    }

    state
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
