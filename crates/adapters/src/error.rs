// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors from the S3-compatible object store adapter.
#[derive(Debug, Error)]
pub enum S3Error {
    #[error("object store request failed: {0}")]
    Request(String),

    #[error("malformed object key: {0}")]
    MalformedKey(String),

    #[error("failed to presign URL: {0}")]
    Presign(String),
}

/// Errors from account credential management (password generation,
/// hashing, verification).
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Errors from JWT issuance and verification.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Sign(String),

    #[error("missing or malformed Authorization header")]
    MalformedHeader,

    #[error("token is invalid or expired: {0}")]
    Invalid(String),
}

/// Errors from webhook dispatch.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook request failed: {0}")]
    Request(String),

    #[error("webhook responded with status {0}")]
    Status(u16),
}
