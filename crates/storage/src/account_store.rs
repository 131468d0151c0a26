// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `AccountStore`: persistence contract for API credential subjects.
//!
//! Password generation and hashing are adapter concerns (`backr-adapters`);
//! this module only persists and retrieves `Account` records by username.

use crate::StoreError;
use async_trait::async_trait;
use backr_core::Account;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Account>, StoreError>;
    async fn get(&self, username: &str) -> Result<Option<Account>, StoreError>;
    async fn save(&self, account: &Account) -> Result<(), StoreError>;
    async fn delete(&self, username: &str) -> Result<(), StoreError>;
}

#[cfg(any(test, feature = "test-support"))]
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<BTreeMap<String, Account>>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self.accounts.read().values().cloned().collect())
    }

    async fn get(&self, username: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().get(username).cloned())
    }

    async fn save(&self, account: &Account) -> Result<(), StoreError> {
        self.accounts
            .write()
            .insert(account.username.clone(), account.clone());
        Ok(())
    }

    async fn delete(&self, username: &str) -> Result<(), StoreError> {
        self.accounts.write().remove(username);
        Ok(())
    }
}

/// `sled`-backed `AccountStore`, keyed by username in the `accounts` tree.
pub struct SledAccountStore {
    tree: sled::Tree,
}

impl SledAccountStore {
    pub fn new(db: &sled::Db) -> Result<Self, StoreError> {
        Ok(Self {
            tree: db.open_tree("accounts")?,
        })
    }
}

#[async_trait]
impl AccountStore for SledAccountStore {
    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        self.tree
            .iter()
            .values()
            .map(|res| {
                let bytes = res?;
                Ok(serde_json::from_slice(&bytes)?)
            })
            .collect()
    }

    async fn get(&self, username: &str) -> Result<Option<Account>, StoreError> {
        match self.tree.get(username.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, account: &Account) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(account)?;
        self.tree.insert(account.username.as_bytes(), bytes)?;
        self.tree.flush()?;
        Ok(())
    }

    async fn delete(&self, username: &str) -> Result<(), StoreError> {
        self.tree.remove(username.as_bytes())?;
        self.tree.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "account_store_tests.rs"]
mod tests;
