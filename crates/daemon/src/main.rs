// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `brd` — the backr daemon binary: wires configuration, storage, the
//! reconciliation worker, and the gRPC API server together.

use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::config::Region;
use backr_adapters::{S3FileStore, WebhookClient};
use backr_daemon::rpc::BackrServer;
use backr_daemon::{load_config, BackrService, Config};
use backr_storage::SledStores;
use chrono::Duration;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config_path = std::env::var("BACKR_CONFIG").unwrap_or_else(|_| "backr.toml".to_string());
    let config = load_config(Some(&PathBuf::from(config_path)))?;

    let stores = SledStores::open(&config.sled.filepath)?;
    let project_store = Arc::new(stores.projects);
    let account_store = Arc::new(stores.accounts);
    let notification_store = Arc::new(stores.notifications);

    let file_store = Arc::new(S3FileStore::new(build_s3_client(&config).await, config.s3.bucket.clone()));
    let webhook = WebhookClient::new(config.slack.webhook_url.clone());

    let cancel = CancellationToken::new();
    spawn_signal_watcher(cancel.clone());

    let ticker_cancel = cancel.clone();
    let ticker_project_store = Arc::clone(&project_store);
    let ticker_file_store = Arc::clone(&file_store);
    let ticker_notification_store = Arc::clone(&notification_store);
    let cooldown = Duration::seconds(config.notifier.cooldown_secs as i64);
    let ticker_task = tokio::spawn(async move {
        backr_daemon::ticker::run(
            ticker_project_store.as_ref(),
            ticker_file_store.as_ref(),
            ticker_notification_store.as_ref(),
            &webhook,
            cooldown,
            ticker_cancel,
        )
        .await;
    });

    let service = BackrService::new(
        Arc::clone(&project_store) as Arc<dyn backr_storage::ProjectStore>,
        Arc::clone(&account_store) as Arc<dyn backr_storage::AccountStore>,
        Arc::clone(&file_store) as Arc<dyn backr_adapters::FileStore>,
        config.api.jwt_secret.clone(),
    );

    let addr = format!("{}:{}", config.api.listen_ip, config.api.listen_port).parse()?;
    info!(%addr, "backr daemon listening");

    let server_cancel = cancel.clone();
    tonic::transport::Server::builder()
        .add_service(BackrServer::new(service))
        .serve_with_shutdown(addr, async move {
            server_cancel.cancelled().await;
        })
        .await?;

    if let Err(err) = ticker_task.await {
        error!(error = %err, "reconciliation worker task panicked");
    }

    Ok(())
}

async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.s3.access_key,
        &config.s3.secret_key,
        None,
        None,
        "backr-config",
    );
    let shared_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(config.s3.region.clone()))
        .credentials_provider(credentials)
        .load()
        .await;

    let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);
    if let Some(endpoint) = &config.s3.endpoint {
        let scheme = if config.s3.use_tls { "https" } else { "http" };
        let url = if endpoint.contains("://") {
            endpoint.clone()
        } else {
            format!("{scheme}://{endpoint}")
        };
        builder = builder.endpoint_url(url).force_path_style(true);
    }
    aws_sdk_s3::Client::from_conf(builder.build())
}

/// Sets `cancel` on SIGINT/SIGTERM; both workers observe it at their next
/// suspension point and drain rather than abort mid-work.
fn spawn_signal_watcher(cancel: CancellationToken) {
    tokio::spawn(async move {
        let ctrl_c = tokio::signal::ctrl_c();
        #[cfg(unix)]
        #[allow(clippy::expect_used)]
        let mut terminate = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");

        #[cfg(unix)]
        tokio::select! {
            _ = ctrl_c => info!("received SIGINT, shutting down"),
            _ = terminate.recv() => info!("received SIGTERM, shutting down"),
        }
        #[cfg(not(unix))]
        {
            let _ = ctrl_c.await;
            info!("received ctrl-c, shutting down");
        }

        cancel.cancel();
    });
}
