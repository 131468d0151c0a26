// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `br login` — authenticates and saves the bearer token to `~/.backr_auth`.

use crate::client::{save_token, DaemonClient};
use anyhow::{Context, Result};
use backr_daemon::rpc::proto::AuthenticateAccountRequest;
use clap::Args;
use std::io::Write;

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: Option<String>,
}

pub async fn handle(client: &mut DaemonClient, args: LoginArgs) -> Result<()> {
    let username = match args.username {
        Some(username) => username,
        None => prompt("Username: ")?,
    };
    let password = rpassword::prompt_password("Password: ").context("failed to read password")?;

    let request = client.authed(AuthenticateAccountRequest { username, password });
    let response = client.inner_mut().authenticate_account(request).await?.into_inner();

    save_token(&response.bearer_token)?;
    println!("Logged in.");
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    std::io::stdout().flush().ok();
    let mut line = String::new();
    std::io::stdin().read_line(&mut line).context("failed to read username")?;
    Ok(line.trim().to_string())
}
