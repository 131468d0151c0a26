// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ProjectReconciler: runs the Selector and Reaper for one project and
//! persists the result.

use crate::reaper::files_to_delete;
use crate::selector::select;
use crate::ReconcileError;
use backr_adapters::FileStore;
use backr_core::{sorted_by_date_desc, sorted_by_min_age_desc, Project};
use backr_storage::ProjectStore;
use chrono::{DateTime, Duration, Utc};

/// Reconciles one project's rules against its current files, persisting
/// the result via the injected stores.
pub struct ProjectReconciler<'a> {
    project_store: &'a dyn ProjectStore,
    file_store: &'a dyn FileStore,
}

impl<'a> ProjectReconciler<'a> {
    pub fn new(project_store: &'a dyn ProjectStore, file_store: &'a dyn FileStore) -> Self {
        Self {
            project_store,
            file_store,
        }
    }

    /// Runs rule selection (longest `min_age` first) followed by, if any
    /// rule actually selected this tick, the Reaper. Returns the
    /// reconciled project; callers feed it to the `StatementBuilder`.
    pub async fn reconcile(
        &self,
        mut project: Project,
        ref_date: DateTime<Utc>,
    ) -> Result<Project, ReconcileError> {
        let by_folder = self.file_store.list_by_folder().await?;
        let files = by_folder
            .get(project.name.as_str())
            .cloned()
            .unwrap_or_default();
        let files = sorted_by_date_desc(&files);

        let mut any_selection = false;
        for rule in sorted_by_min_age_desc(&project.rules) {
            let mut state = project.state_for(&rule);

            if state.is_due(ref_date) {
                state = select(state, ref_date, &files);
                any_selection = true;
            }

            if state.next.is_none() {
                state.next = Some(ref_date + Duration::hours(24));
            }

            project.set_state(rule.id(), state);
        }

        self.project_store.save(&project).await?;

        if any_selection {
            let to_delete = files_to_delete(&project.state, &files, ref_date);
            let paths: Vec<String> = to_delete.iter().map(|f| f.path.clone()).collect();
            for file in to_delete {
                self.file_store.delete(file).await?;
            }
            project.remove_files_from_state(&paths);
            self.project_store.save(&project).await?;
        }

        Ok(project)
    }
}

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod tests;
