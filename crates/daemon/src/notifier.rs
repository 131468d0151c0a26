// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deduping wrapper around [`WebhookClient`]: suppresses repeat alerts
//! for the same statement fingerprint within a cooldown window.

use backr_adapters::WebhookClient;
use backr_core::ProjectErrorStatement;
use backr_storage::{NotificationRecord, NotificationStore, StoreError};
use chrono::{DateTime, Duration, Utc};
use tracing::{error, warn};

pub struct DedupedNotifier<'a> {
    notification_store: &'a dyn NotificationStore,
    webhook: &'a WebhookClient,
    cooldown: Duration,
}

impl<'a> DedupedNotifier<'a> {
    pub fn new(
        notification_store: &'a dyn NotificationStore,
        webhook: &'a WebhookClient,
        cooldown: Duration,
    ) -> Self {
        Self {
            notification_store,
            webhook,
            cooldown,
        }
    }

    /// Dispatches `statement` unless an un-expired record for its
    /// fingerprint already exists. Store failures are propagated;
    /// webhook dispatch failures are logged, not fatal, and do not
    /// block the record update.
    pub async fn notify(&self, statement: &ProjectErrorStatement, now: DateTime<Utc>) -> Result<(), StoreError> {
        let fingerprint = statement.fingerprint();
        let existing = self.notification_store.get(&fingerprint).await?;

        let created_at = match &existing {
            Some(record) => {
                if now < record.sent_at + self.cooldown {
                    return Ok(());
                }
                record.created_at
            }
            None => now,
        };

        if let Err(err) = self.webhook.dispatch(statement).await {
            warn!(
                project = %statement.project_name,
                fingerprint = %fingerprint,
                error = %err,
                "webhook dispatch failed, record still updated"
            );
        }

        let record = NotificationRecord {
            statement: statement.clone(),
            created_at,
            sent_at: now,
        };

        if let Err(err) = self.notification_store.save(&fingerprint, &record).await {
            error!(fingerprint = %fingerprint, error = %err, "failed to persist notification record");
            return Err(err);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;
