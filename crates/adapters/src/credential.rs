// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Account password generation, hashing, and verification.

use crate::AccountError;
use rand::seq::SliceRandom;

const PASSWORD_LEN: usize = 16;
const DIGITS: &[u8] = b"0123456789";
const SPECIALS: &[u8] = b"=+%*!@#$?";
const ALPHANUMERICS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a 16-character password: one forced digit, one forced
/// special character, the rest alphanumeric, then the whole string
/// shuffled so the forced characters aren't always in positions 0/1.
#[allow(clippy::expect_used)]
pub fn generate_password() -> String {
    let mut rng = rand::thread_rng();
    let mut chars: Vec<u8> = Vec::with_capacity(PASSWORD_LEN);

    chars.push(*DIGITS.choose(&mut rng).expect("DIGITS is non-empty"));
    chars.push(*SPECIALS.choose(&mut rng).expect("SPECIALS is non-empty"));
    for _ in 2..PASSWORD_LEN {
        chars.push(*ALPHANUMERICS.choose(&mut rng).expect("ALPHANUMERICS is non-empty"));
    }

    chars.shuffle(&mut rng);
    String::from_utf8(chars).expect("generated password is ASCII")
}

/// Hashes a plaintext password at bcrypt's default cost.
pub fn hash_password(plaintext: &str) -> Result<String, AccountError> {
    bcrypt::hash(plaintext, bcrypt::DEFAULT_COST).map_err(|err| AccountError::Hash(err.to_string()))
}

/// Verifies a submitted password against a stored bcrypt hash in
/// constant time. Never logs the plaintext.
pub fn verify_password(plaintext: &str, hashed: &str) -> Result<bool, AccountError> {
    bcrypt::verify(plaintext, hashed).map_err(|err| AccountError::Hash(err.to_string()))
}

#[cfg(test)]
#[path = "credential_tests.rs"]
mod tests;
