// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `br project` — project management commands.

use crate::client::DaemonClient;
use crate::color;
use crate::output::{format_or_json, handle_list, OutputFormat};
use anyhow::Result;
use backr_daemon::rpc::proto::{CreateProjectRequest, GetProjectRequest, GetProjectsRequest, Rule};
use clap::{Args, Subcommand};
use std::io::Write;

#[derive(Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: ProjectCommand,
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    /// List every configured project.
    List,
    /// Show a single project's rules and reconciliation state summary.
    Get { name: String },
    /// Create a project. `--rule count:min_age` may be repeated; with
    /// none given the daemon falls back to a single default rule.
    Create {
        name: String,
        #[arg(long = "rule", value_parser = parse_rule)]
        rules: Vec<Rule>,
    },
}

/// Parses `"count:min_age"`, e.g. `"3:7"` — keep 3 backups at least 7 days apart.
fn parse_rule(raw: &str) -> Result<Rule, String> {
    let (count, min_age) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected COUNT:MIN_AGE, got {raw:?}"))?;
    let count: u32 = count.parse().map_err(|_| format!("invalid count in {raw:?}"))?;
    let min_age: u32 = min_age.parse().map_err(|_| format!("invalid min_age in {raw:?}"))?;
    Ok(Rule { count, min_age })
}

pub async fn handle(client: &mut DaemonClient, command: ProjectCommand, format: OutputFormat) -> Result<()> {
    match command {
        ProjectCommand::List => handle_list_projects(client, format).await,
        ProjectCommand::Get { name } => handle_get(client, name, format).await,
        ProjectCommand::Create { name, rules } => handle_create(client, name, rules, format).await,
    }
}

async fn handle_list_projects(client: &mut DaemonClient, format: OutputFormat) -> Result<()> {
    let request = client.authed(GetProjectsRequest {});
    let response = client.inner_mut().get_projects(request).await?.into_inner();

    handle_list(format, &response.projects, "No projects configured", |projects, out| {
        let name_w = projects.iter().map(|p| p.name.len()).max().unwrap_or(0).max(4);
        writeln!(out, "{}  {}", color::header(&format!("{:<name_w$}", "NAME")), color::header("RULES")).ok();
        for project in projects {
            writeln!(out, "{:<name_w$}  {}", project.name, format_rules(&project.rules)).ok();
        }
    })
}

async fn handle_get(client: &mut DaemonClient, name: String, format: OutputFormat) -> Result<()> {
    let request = client.authed(GetProjectRequest { name });
    let response = client.inner_mut().get_project(request).await?.into_inner();
    let project = response.project.unwrap_or_default();

    format_or_json(format, &project, || {
        println!("{}: {}", color::header("name"), project.name);
        println!("{}: {}", color::header("rules"), format_rules(&project.rules));
    })
}

async fn handle_create(client: &mut DaemonClient, name: String, rules: Vec<Rule>, format: OutputFormat) -> Result<()> {
    let request = client.authed(CreateProjectRequest { name, rules });
    let response = client.inner_mut().create_project(request).await?.into_inner();
    let project = response.project.unwrap_or_default();

    format_or_json(format, &project, || {
        println!("Created project '{}' ({})", color::header(&project.name), format_rules(&project.rules));
    })
}

fn format_rules(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return "(none)".to_string();
    }
    rules
        .iter()
        .map(|r| format!("{}:{}", r.count, r.min_age))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
