// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use backr_adapters::{AccountError, S3Error, TokenError};
use backr_storage::StoreError;
use thiserror::Error;
use tonic::Status;

/// Errors surfaced by the RPC layer, mapped to gRPC status codes per
/// the error handling design: invalid input -> InvalidArgument,
/// duplicate -> FailedPrecondition, missing -> NotFound, store failure
/// -> Internal, bad/missing bearer -> Unauthenticated.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("unauthenticated")]
    Unauthenticated,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<S3Error> for ApiError {
    fn from(err: S3Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(_: TokenError) -> Self {
        ApiError::Unauthenticated
    }
}

impl From<ApiError> for Status {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidArgument(msg) => Status::invalid_argument(msg),
            ApiError::AlreadyExists(msg) => Status::failed_precondition(msg),
            ApiError::NotFound(msg) => Status::not_found(msg),
            ApiError::Internal(msg) => Status::internal(msg),
            ApiError::Unauthenticated => Status::unauthenticated("invalid or missing credentials"),
        }
    }
}
