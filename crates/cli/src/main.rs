// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `br` — the backr CLI: talks gRPC to a running `brd` daemon.

mod client;
mod color;
mod commands;
mod exit_error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client::DaemonClient;
use commands::account::{AccountArgs, AccountCommand};
use commands::file::{FileArgs, FileCommand};
use commands::login::LoginArgs;
use commands::project::{ProjectArgs, ProjectCommand};
use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "br", about = "Manage backup retention projects, files, and accounts", styles = color::styles())]
struct Cli {
    /// Daemon gRPC endpoint.
    #[arg(long, global = true, default_value = "http://127.0.0.1:50051")]
    server: String,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project management.
    Project(ProjectArgs),
    /// File inspection.
    File(FileArgs),
    /// Account management.
    Account(AccountArgs),
    /// Authenticate and save a bearer token for subsequent commands.
    Login(LoginArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        match err.downcast::<ExitError>() {
            Ok(exit_error) => {
                if !exit_error.message.is_empty() {
                    eprintln!("{}", exit_error.message);
                }
                std::process::exit(exit_error.code);
            }
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut client = DaemonClient::connect(&cli.server).await?;

    match cli.command {
        Command::Project(args) => commands::project::handle(&mut client, args.command, cli.format).await,
        Command::File(args) => commands::file::handle(&mut client, args.command, cli.format).await,
        Command::Account(args) => commands::account::handle(&mut client, args.command, cli.format).await,
        Command::Login(args) => commands::login::handle(&mut client, args).await,
    }
}
