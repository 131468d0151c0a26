// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The reconciliation worker: fires once a minute, runs the engine over
//! every project, then dispatches any resulting statements.

use crate::notifier::DedupedNotifier;
use backr_adapters::{FileStore, WebhookClient};
use backr_storage::{NotificationStore, ProjectStore};
use chrono::{Duration, Utc};
use tokio_util::sync::CancellationToken;
use tracing::info;

const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// Runs reconciliation ticks until `cancel` fires. Never aborts a tick
/// mid-project: the cancellation is only observed between ticks.
pub async fn run(
    project_store: &dyn ProjectStore,
    file_store: &dyn FileStore,
    notification_store: &dyn NotificationStore,
    webhook: &WebhookClient,
    cooldown: Duration,
    cancel: CancellationToken,
) {
    let notifier = DedupedNotifier::new(notification_store, webhook, cooldown);
    let mut interval = tokio::time::interval(TICK_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("reconciliation worker stopping");
                return;
            }
            _ = interval.tick() => {
                run_tick(project_store, file_store, &notifier).await;
            }
        }
    }
}

async fn run_tick(project_store: &dyn ProjectStore, file_store: &dyn FileStore, notifier: &DedupedNotifier<'_>) {
    let now = Utc::now();
    let statements = backr_engine::run_tick(project_store, file_store, now).await;
    for statement in &statements {
        if let Err(err) = notifier.notify(statement, now).await {
            tracing::error!(project = %statement.project_name, error = %err, "failed to persist notification record");
        }
    }
}
