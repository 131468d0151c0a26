// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thin gRPC client wrapper: connects to the daemon and attaches a
//! bearer token (read from `~/.backr_auth`) to every outgoing request.

use anyhow::{Context, Result};
use backr_daemon::rpc::proto::backr_client::BackrClient;
use std::path::PathBuf;
use tonic::metadata::MetadataValue;
use tonic::transport::Channel;
use tonic::Request;

const AUTH_FILE_NAME: &str = ".backr_auth";

pub struct DaemonClient {
    inner: BackrClient<Channel>,
    token: Option<String>,
}

impl DaemonClient {
    pub async fn connect(server: &str) -> Result<Self> {
        let inner = BackrClient::connect(server.to_string())
            .await
            .with_context(|| format!("failed to connect to backr daemon at {server}"))?;
        Ok(Self {
            inner,
            token: read_token().ok(),
        })
    }

    /// Wraps `message` in a `Request` with the saved bearer token
    /// attached, if one has been saved by `br login`.
    pub fn authed<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        if let Some(token) = &self.token {
            let header_value = format!("Bearer {token}");
            if let Ok(value) = MetadataValue::try_from(header_value) {
                request.metadata_mut().insert("authorization", value);
            }
        }
        request
    }

    pub fn inner_mut(&mut self) -> &mut BackrClient<Channel> {
        &mut self.inner
    }
}

fn auth_file_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(AUTH_FILE_NAME))
}

pub fn read_token() -> Result<String> {
    let path = auth_file_path()?;
    let raw = std::fs::read_to_string(path).context("not logged in; run `br login` first")?;
    Ok(raw.trim().to_string())
}

pub fn save_token(token: &str) -> Result<()> {
    let path = auth_file_path()?;
    std::fs::write(path, token).context("failed to save auth token")
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
