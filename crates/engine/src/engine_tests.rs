// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use backr_adapters::InMemoryFileStore;
use backr_core::{File, Project, Rule};
use backr_storage::InMemoryProjectStore;
use chrono::TimeZone;

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

#[tokio::test]
async fn a_project_with_no_files_yields_a_critic_statement() {
    let project_store = InMemoryProjectStore::seeded(vec![Project::new("proj", vec![Rule::new(1, 1)])]);
    let file_store = InMemoryFileStore::new();

    let statements = run_tick(&project_store, &file_store, at(2019, 3, 25, 8)).await;

    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].project_name, "proj");
}

#[tokio::test]
async fn a_healthy_project_yields_no_statement() {
    let project_store = InMemoryProjectStore::seeded(vec![Project::new("proj", vec![Rule::new(1, 1)])]);
    let file_store = InMemoryFileStore::seeded(vec![File::new("proj/f", at(2019, 3, 25, 5), 300)]);

    let statements = run_tick(&project_store, &file_store, at(2019, 3, 25, 8)).await;

    assert!(statements.is_empty());
}

struct FlakyProjectStore {
    inner: InMemoryProjectStore,
    fails_for: &'static str,
}

#[async_trait::async_trait]
impl ProjectStore for FlakyProjectStore {
    async fn list(&self) -> Result<Vec<Project>, backr_storage::StoreError> {
        self.inner.list().await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Project>, backr_storage::StoreError> {
        self.inner.get_by_name(name).await
    }

    async fn save(&self, project: &Project) -> Result<(), backr_storage::StoreError> {
        if project.name == self.fails_for {
            return Err(backr_storage::StoreError::Backend("injected failure".to_string()));
        }
        self.inner.save(project).await
    }
}

#[tokio::test]
async fn one_projects_failure_does_not_stop_the_tick() {
    let project_store = FlakyProjectStore {
        inner: InMemoryProjectStore::seeded(vec![
            Project::new("broken", vec![Rule::new(1, 1)]),
            Project::new("ok", vec![Rule::new(1, 1)]),
        ]),
        fails_for: "broken",
    };
    let file_store = InMemoryFileStore::new();

    let statements = run_tick(&project_store, &file_store, at(2019, 3, 25, 8)).await;

    // "broken" fails to save and is skipped; "ok" still produces its
    // (no-file) statement for this tick.
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].project_name, "ok");
}
