// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Webhook transport used by the deduping notifier to dispatch alerts.

use crate::WebhookError;
use backr_core::ProjectErrorStatement;
use serde::Serialize;
use std::time::Duration;

const DISPATCH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    project_name: &'a str,
    count: u32,
    level: String,
    reasons: Vec<&'a str>,
}

/// Posts `ProjectErrorStatement`s to a preconfigured webhook URL.
pub struct WebhookClient {
    http: reqwest::Client,
    webhook_url: String,
}

impl WebhookClient {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(DISPATCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            webhook_url: webhook_url.into(),
        }
    }

    /// Dispatches `statement`. A 4xx/5xx response surfaces as
    /// `WebhookError::Status` for the caller to log; it does not mark
    /// the notification record as unsent.
    pub async fn dispatch(&self, statement: &ProjectErrorStatement) -> Result<(), WebhookError> {
        let payload = WebhookPayload {
            project_name: &statement.project_name,
            count: statement.count,
            level: statement.max_level.to_string(),
            reasons: statement.reasons.values().map(String::as_str).collect(),
        };

        let response = self
            .http
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| WebhookError::Request(err.to_string()))?;

        if !response.status().is_success() {
            return Err(WebhookError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;
