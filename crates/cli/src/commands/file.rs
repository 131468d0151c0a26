// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `br file` — inspecting files the reconciler is tracking.

use crate::client::DaemonClient;
use crate::color;
use crate::output::{format_or_json, handle_list, OutputFormat};
use anyhow::Result;
use backr_daemon::rpc::proto::{GetFileUrlRequest, GetFilesRequest};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use std::io::Write;

#[derive(Args)]
pub struct FileArgs {
    #[command(subcommand)]
    pub command: FileCommand,
}

#[derive(Subcommand)]
pub enum FileCommand {
    /// List files, optionally scoped to one project's folder.
    List {
        #[arg(long)]
        project: Option<String>,
    },
    /// Get a presigned download URL for a file path.
    Url { path: String },
}

pub async fn handle(client: &mut DaemonClient, command: FileCommand, format: OutputFormat) -> Result<()> {
    match command {
        FileCommand::List { project } => handle_list_files(client, project, format).await,
        FileCommand::Url { path } => handle_url(client, path, format).await,
    }
}

async fn handle_list_files(client: &mut DaemonClient, project: Option<String>, format: OutputFormat) -> Result<()> {
    let request = client.authed(GetFilesRequest { project_name: project });
    let response = client.inner_mut().get_files(request).await?.into_inner();

    handle_list(format, &response.files, "No files found", |files, out| {
        let path_w = files.iter().map(|f| f.path.len()).max().unwrap_or(0).max(4);
        writeln!(
            out,
            "{}  {}  {}",
            color::header(&format!("{:<path_w$}", "PATH")),
            color::header("DATE"),
            color::header("SIZE")
        )
        .ok();
        for file in files {
            let date = DateTime::<Utc>::from_timestamp(file.date_unix, 0)
                .map(|d| d.to_rfc3339())
                .unwrap_or_else(|| "?".to_string());
            writeln!(out, "{:<path_w$}  {}  {}", file.path, date, file.size).ok();
        }
    })
}

async fn handle_url(client: &mut DaemonClient, path: String, format: OutputFormat) -> Result<()> {
    let request = client.authed(GetFileUrlRequest { path });
    let response = client.inner_mut().get_file_url(request).await?.into_inner();

    format_or_json(format, &response, || {
        println!("{}", response.url);
    })
}
