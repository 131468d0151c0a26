// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ProjectStore`: persistence contract for the reconciled project state.

use crate::StoreError;
use async_trait::async_trait;
use backr_core::Project;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// `ProjectStore` — keyed by project name (unique).
///
/// Implementations must guarantee that `save` is atomic and that `list`
/// and `get_by_name` return a point-in-time snapshot; concurrent access
/// from the reconciliation worker and the RPC server is expected.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Project>, StoreError>;
    async fn get_by_name(&self, name: &str) -> Result<Option<Project>, StoreError>;
    async fn save(&self, project: &Project) -> Result<(), StoreError>;
}

/// In-memory `ProjectStore`, used by this crate's own tests and as a
/// fake for crates that depend on this one.
#[cfg(any(test, feature = "test-support"))]
#[derive(Default, Clone)]
pub struct InMemoryProjectStore {
    projects: Arc<RwLock<BTreeMap<String, Project>>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(projects: impl IntoIterator<Item = Project>) -> Self {
        let store = Self::new();
        for project in projects {
            store.projects.write().insert(project.name.clone(), project);
        }
        store
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.projects.read().values().cloned().collect())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Project>, StoreError> {
        Ok(self.projects.read().get(name).cloned())
    }

    async fn save(&self, project: &Project) -> Result<(), StoreError> {
        self.projects
            .write()
            .insert(project.name.clone(), project.clone());
        Ok(())
    }
}

/// `sled`-backed `ProjectStore`, keyed by project name in the
/// `projects` tree. Values are `serde_json`-encoded.
pub struct SledProjectStore {
    tree: sled::Tree,
}

impl SledProjectStore {
    pub fn new(db: &sled::Db) -> Result<Self, StoreError> {
        Ok(Self {
            tree: db.open_tree("projects")?,
        })
    }
}

#[async_trait]
impl ProjectStore for SledProjectStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        self.tree
            .iter()
            .values()
            .map(|res| {
                let bytes = res?;
                Ok(serde_json::from_slice(&bytes)?)
            })
            .collect()
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Project>, StoreError> {
        match self.tree.get(name.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, project: &Project) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(project)?;
        self.tree.insert(project.name.as_bytes(), bytes)?;
        self.tree.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "project_store_tests.rs"]
mod tests;
