// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HS256 bearer token issuance and verification.

use crate::TokenError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime is a hardcoded constant, not configurable.
const TOKEN_LIFETIME: Duration = Duration::days(7);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
}

/// Mints a bearer token for `username`, signed HS256 with `secret`.
pub fn issue_token(
    username: &str,
    issuer: &str,
    audience: &str,
    secret: &str,
) -> Result<String, TokenError> {
    let claims = Claims {
        sub: username.to_string(),
        iss: issuer.to_string(),
        aud: audience.to_string(),
        exp: (Utc::now() + TOKEN_LIFETIME).timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| TokenError::Sign(err.to_string()))
}

/// Verifies a bearer token and returns its claims. Expired tokens,
/// signature mismatches, and unsupported algorithms all surface as
/// `TokenError::Invalid`.
pub fn verify_token(
    token: &str,
    issuer: &str,
    audience: &str,
    secret: &str,
) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[issuer]);
    validation.set_audience(&[audience]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| TokenError::Invalid(err.to_string()))
}

/// Extracts the bearer token from an `Authorization` header value.
pub fn bearer_token(authorization_header: &str) -> Result<&str, TokenError> {
    authorization_header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or(TokenError::MalformedHeader)
}

#[cfg(test)]
#[path = "jwt_tests.rs"]
mod tests;
