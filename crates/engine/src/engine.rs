// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine: the per-tick driver over every project.

use crate::reconciler::ProjectReconciler;
use crate::statement_builder;
use backr_adapters::FileStore;
use backr_core::ProjectErrorStatement;
use backr_storage::ProjectStore;
use chrono::{DateTime, Utc};
use tracing::{error, warn};

/// Runs one reconciliation tick over every project in `project_store`.
///
/// Errors from an individual project are logged and do not abort the
/// tick; the engine is strictly sequential across projects — there is
/// no intra-tick parallelism.
pub async fn run_tick(
    project_store: &dyn ProjectStore,
    file_store: &dyn FileStore,
    ref_date: DateTime<Utc>,
) -> Vec<ProjectErrorStatement> {
    let projects = match project_store.list().await {
        Ok(projects) => projects,
        Err(err) => {
            error!(error = %err, "failed to list projects for this tick");
            return Vec::new();
        }
    };

    let reconciler = ProjectReconciler::new(project_store, file_store);
    let mut statements = Vec::new();

    for project in projects {
        let name = project.name.clone();
        match reconciler.reconcile(project, ref_date).await {
            Ok(reconciled) => {
                if let Some(statement) = statement_builder::build(&reconciled) {
                    statements.push(statement);
                }
            }
            Err(err) => {
                warn!(project = %name, error = %err, "reconciliation failed, retrying next tick");
            }
        }
    }

    statements
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
