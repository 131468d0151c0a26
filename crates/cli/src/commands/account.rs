// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `br account` — API credential management.

use crate::client::DaemonClient;
use crate::color;
use crate::output::{format_or_json, handle_list, OutputFormat};
use anyhow::Result;
use backr_daemon::rpc::proto::{ChangeAccountPasswordRequest, CreateAccountRequest, ListAccountsRequest};
use clap::{Args, Subcommand};
use std::io::Write;

#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Create an account; its one-time plaintext password is printed once.
    Create { username: String },
    /// List every account (usernames only; hashes never leave the daemon).
    List,
    /// Regenerate an account's password; the new plaintext is printed once.
    ChangePassword { username: String },
}

pub async fn handle(client: &mut DaemonClient, command: AccountCommand, format: OutputFormat) -> Result<()> {
    match command {
        AccountCommand::Create { username } => handle_create(client, username, format).await,
        AccountCommand::List => handle_list_accounts(client, format).await,
        AccountCommand::ChangePassword { username } => handle_change_password(client, username, format).await,
    }
}

async fn handle_create(client: &mut DaemonClient, username: String, format: OutputFormat) -> Result<()> {
    let request = client.authed(CreateAccountRequest { username });
    let response = client.inner_mut().create_account(request).await?.into_inner();

    format_or_json(format, &response, || {
        println!("Created account '{}'", color::header(&response.username));
        println!("Password (shown once): {}", response.plain_password);
    })
}

async fn handle_list_accounts(client: &mut DaemonClient, format: OutputFormat) -> Result<()> {
    let request = client.authed(ListAccountsRequest {});
    let response = client.inner_mut().list_accounts(request).await?.into_inner();

    handle_list(format, &response.accounts, "No accounts configured", |accounts, out| {
        writeln!(out, "{}", color::header("USERNAME")).ok();
        for account in accounts {
            writeln!(out, "{}", account.username).ok();
        }
    })
}

async fn handle_change_password(client: &mut DaemonClient, username: String, format: OutputFormat) -> Result<()> {
    let request = client.authed(ChangeAccountPasswordRequest { username });
    let response = client.inner_mut().change_account_password(request).await?.into_inner();

    format_or_json(format, &response, || {
        println!("Password (shown once): {}", response.plain_password);
    })
}
