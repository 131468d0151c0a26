// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Opens the single embedded `sled` database backing all three logical
//! tables (`projects`, `accounts`, `notifications`).

use crate::{SledAccountStore, SledNotificationStore, SledProjectStore, StoreError};
use std::path::Path;

/// Bundle of the three `sled`-backed stores sharing one on-disk database.
pub struct SledStores {
    pub projects: SledProjectStore,
    pub accounts: SledAccountStore,
    pub notifications: SledNotificationStore,
}

impl SledStores {
    pub fn open(filepath: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = sled::open(filepath)?;
        Ok(Self {
            projects: SledProjectStore::new(&db)?,
            accounts: SledAccountStore::new(&db)?,
            notifications: SledNotificationStore::new(&db)?,
        })
    }
}
