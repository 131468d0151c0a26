// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! StatementBuilder: reduces a reconciled project's errors to at most
//! one `ProjectErrorStatement`.

use backr_core::{AlertLevel, Project, ProjectErrorStatement, RuleErrorKind};
use std::collections::BTreeMap;

/// Builds the statement for `project` after reconciliation. Returns
/// `None` when no errors were present (`count == 0`).
pub fn build(project: &Project) -> Option<ProjectErrorStatement> {
    let mut count = 0u32;
    let mut reasons: BTreeMap<RuleErrorKind, String> = BTreeMap::new();
    let mut max_level = AlertLevel::Warning;
    let mut any_error = false;

    for rule_state in project.state.values() {
        if let Some(rule_error) = &rule_state.error {
            count += 1;
            any_error = true;
            reasons.insert(rule_error.kind, rule_error.kind.to_string());
            max_level = max_level.max(rule_error.kind.base_level());
        }

        let newest = backr_core::sorted_by_expiration_desc(&rule_state.files);
        for (i, selected) in newest.iter().enumerate() {
            let Some(file_error) = &selected.error else {
                continue;
            };
            count += 1;
            any_error = true;
            reasons.insert(file_error.kind, file_error.kind.to_string());

            let level = if i == 0 && file_error.kind == RuleErrorKind::Obsolete {
                AlertLevel::Critic
            } else {
                file_error.kind.base_level()
            };
            max_level = max_level.max(level);
        }
    }

    if !any_error {
        return None;
    }

    Some(ProjectErrorStatement {
        project_name: project.name.clone(),
        count,
        reasons,
        max_level,
    })
}

#[cfg(test)]
#[path = "statement_builder_tests.rs"]
mod tests;
