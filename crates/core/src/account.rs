// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! API credential subjects.

use serde::{Deserialize, Serialize};

/// An account allowed to manage projects and files through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    /// Bcrypt hash at default cost; never the plaintext password.
    pub hashed_password: String,
}

impl Account {
    pub fn new(username: impl Into<String>, hashed_password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            hashed_password: hashed_password.into(),
        }
    }
}
