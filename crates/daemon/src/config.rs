// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hierarchical configuration: a TOML file, overridable by `BACKR_`-
//! prefixed environment variables using `__` as the nesting separator
//! (e.g. `BACKR_S3__BUCKET` overrides `[s3] bucket`).

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const ENV_PREFIX: &str = "BACKR_";
const DEFAULT_NOTIFIER_COOLDOWN_SECS: u64 = 6 * 60 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("malformed config after applying environment overrides: {0}")]
    Merge(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Config {
    pub bucket: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    pub access_key: String,
    pub secret_key: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_true")]
    pub use_tls: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SledConfig {
    #[serde(default = "default_sled_filepath")]
    pub filepath: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_listen_ip")]
    pub listen_ip: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    pub jwt_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    pub webhook_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    #[serde(default = "default_notifier_cooldown_secs")]
    pub cooldown_secs: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: DEFAULT_NOTIFIER_COOLDOWN_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub s3: S3Config,
    #[serde(default)]
    pub sled: SledConfig,
    pub api: ApiConfig,
    pub slack: SlackConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
}

impl Default for SledConfig {
    fn default() -> Self {
        Self {
            filepath: default_sled_filepath(),
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_true() -> bool {
    true
}

fn default_sled_filepath() -> String {
    "./backr.db".to_string()
}

fn default_listen_ip() -> String {
    "0.0.0.0".to_string()
}

fn default_listen_port() -> u16 {
    50051
}

fn default_notifier_cooldown_secs() -> u64 {
    DEFAULT_NOTIFIER_COOLDOWN_SECS
}

/// Loads configuration from `path` (if it exists) and layers `BACKR_`
/// environment variable overrides on top.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut root: toml::Value = match path {
        Some(path) if path.exists() => {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.display().to_string(),
                source,
            })?;
            toml::from_str(&raw)?
        }
        _ => toml::Value::Table(toml::value::Table::new()),
    };

    apply_env_overrides(&mut root);

    root.try_into()
        .map_err(|err: toml::de::Error| ConfigError::Merge(err.to_string()))
}

fn apply_env_overrides(root: &mut toml::Value) {
    let table = match root {
        toml::Value::Table(table) => table,
        _ => return,
    };

    for (key, raw_value) in std::env::vars() {
        let Some(rest) = key.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        let path: Vec<String> = rest.split("__").map(|segment| segment.to_lowercase()).collect();
        set_path(table, &path, &raw_value);
    }
}

fn set_path(table: &mut toml::value::Table, path: &[String], raw_value: &str) {
    let Some((head, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        table.insert(head.clone(), parse_scalar(raw_value));
        return;
    }

    let entry = table
        .entry(head.clone())
        .or_insert_with(|| toml::Value::Table(toml::value::Table::new()));
    if let toml::Value::Table(nested) = entry {
        set_path(nested, rest, raw_value);
    }
}

fn parse_scalar(raw: &str) -> toml::Value {
    if let Ok(b) = raw.parse::<bool>() {
        return toml::Value::Boolean(b);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    toml::Value::String(raw.to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
