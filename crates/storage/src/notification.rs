// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence for the deduping notifier: one record per statement
//! fingerprint, keyed in the `notifications` tree.

use crate::StoreError;
use async_trait::async_trait;
use backr_core::ProjectErrorStatement;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One outstanding (or previously sent) alert, keyed by statement
/// fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub statement: ProjectErrorStatement,
    pub created_at: DateTime<Utc>,
    pub sent_at: DateTime<Utc>,
}

#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn get(&self, fingerprint: &str) -> Result<Option<NotificationRecord>, StoreError>;
    async fn save(&self, fingerprint: &str, record: &NotificationRecord) -> Result<(), StoreError>;
}

#[cfg(any(test, feature = "test-support"))]
#[derive(Default, Clone)]
pub struct InMemoryNotificationStore {
    records: Arc<RwLock<BTreeMap<String, NotificationRecord>>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn get(&self, fingerprint: &str) -> Result<Option<NotificationRecord>, StoreError> {
        Ok(self.records.read().get(fingerprint).cloned())
    }

    async fn save(&self, fingerprint: &str, record: &NotificationRecord) -> Result<(), StoreError> {
        self.records
            .write()
            .insert(fingerprint.to_string(), record.clone());
        Ok(())
    }
}

/// `sled`-backed `NotificationStore`, keyed by statement fingerprint in
/// the `notifications` tree.
pub struct SledNotificationStore {
    tree: sled::Tree,
}

impl SledNotificationStore {
    pub fn new(db: &sled::Db) -> Result<Self, StoreError> {
        Ok(Self {
            tree: db.open_tree("notifications")?,
        })
    }
}

#[async_trait]
impl NotificationStore for SledNotificationStore {
    async fn get(&self, fingerprint: &str) -> Result<Option<NotificationRecord>, StoreError> {
        match self.tree.get(fingerprint.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, fingerprint: &str, record: &NotificationRecord) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(record)?;
        self.tree.insert(fingerprint.as_bytes(), bytes)?;
        self.tree.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "notification_tests.rs"]
mod tests;
