// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use backr_adapters::S3Error;
use backr_storage::StoreError;
use thiserror::Error;

/// Errors from reconciling a single project. Per the error handling
/// design, any of these abort that project's tick; state is not saved
/// and the next tick retries.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("project store error: {0}")]
    Store(#[from] StoreError),

    #[error("object store error: {0}")]
    FileStore(#[from] S3Error),
}
