// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The gRPC surface: project/file/account management plus
//! authentication, gated by [`BackrService::authorize`].

use super::proto::backr_server::Backr;
use super::proto::{
    self, AuthenticateAccountRequest, AuthenticateAccountResponse, ChangeAccountPasswordRequest,
    ChangeAccountPasswordResponse, CreateAccountRequest, CreateAccountResponse, CreateProjectRequest,
    CreateProjectResponse, GetFileUrlRequest, GetFileUrlResponse, GetFilesRequest, GetFilesResponse,
    GetProjectRequest, GetProjectResponse, GetProjectsRequest, GetProjectsResponse, ListAccountsRequest,
    ListAccountsResponse,
};
use crate::error::ApiError;
use backr_adapters::{bearer_token, generate_password, hash_password, issue_token, verify_password, verify_token, FileStore};
use backr_core::{Account, File, Project, Rule};
use backr_storage::{AccountStore, ProjectStore};
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::warn;

/// Token issuer/audience. Not operator-configurable: every token this
/// daemon mints and verifies uses the same pair.
const TOKEN_ISSUER: &str = "backr";
const TOKEN_AUDIENCE: &str = "backr-api";

/// Default rule fields a `CreateProject` request leaves at zero falls
/// back to: one retained backup at least a day apart.
const DEFAULT_RULE_MIN_AGE: u32 = 1;
const DEFAULT_RULE_COUNT: u32 = 3;

pub struct BackrService {
    project_store: Arc<dyn ProjectStore>,
    account_store: Arc<dyn AccountStore>,
    file_store: Arc<dyn FileStore>,
    jwt_secret: String,
}

impl BackrService {
    pub fn new(
        project_store: Arc<dyn ProjectStore>,
        account_store: Arc<dyn AccountStore>,
        file_store: Arc<dyn FileStore>,
        jwt_secret: impl Into<String>,
    ) -> Self {
        Self {
            project_store,
            account_store,
            file_store,
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Bootstrap mode (no accounts yet) skips auth with a warning;
    /// otherwise every request needs a valid `Bearer` JWT.
    async fn authorize<T>(&self, request: &Request<T>) -> Result<(), ApiError> {
        if self.account_store.list().await?.is_empty() {
            warn!("no accounts provisioned yet, allowing request unauthenticated");
            return Ok(());
        }

        let header = request
            .metadata()
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?;
        let token = bearer_token(header).map_err(|_| ApiError::Unauthenticated)?;
        verify_token(token, TOKEN_ISSUER, TOKEN_AUDIENCE, &self.jwt_secret)
            .map_err(|_| ApiError::Unauthenticated)?;
        Ok(())
    }
}

fn rule_to_proto(rule: &Rule) -> proto::Rule {
    proto::Rule {
        count: rule.count,
        min_age: rule.min_age,
    }
}

fn rule_from_proto(rule: &proto::Rule) -> Rule {
    Rule::new(
        if rule.count == 0 { DEFAULT_RULE_COUNT } else { rule.count },
        if rule.min_age == 0 { DEFAULT_RULE_MIN_AGE } else { rule.min_age },
    )
}

fn project_to_proto(project: &Project) -> proto::Project {
    proto::Project {
        name: project.name.clone(),
        rules: project.rules.iter().map(rule_to_proto).collect(),
        created_at_unix: project.created_at.map(|ts| ts.timestamp()).unwrap_or_default(),
    }
}

fn file_to_proto(file: &File) -> proto::File {
    proto::File {
        path: file.path.clone(),
        date_unix: file.date.timestamp(),
        size: file.size,
    }
}

fn account_to_proto(account: &Account) -> proto::Account {
    proto::Account {
        username: account.username.clone(),
    }
}

#[tonic::async_trait]
impl Backr for BackrService {
    async fn get_projects(
        &self,
        request: Request<GetProjectsRequest>,
    ) -> Result<Response<GetProjectsResponse>, Status> {
        self.authorize(&request).await?;
        let projects = self.project_store.list().await.map_err(ApiError::from)?;
        Ok(Response::new(GetProjectsResponse {
            projects: projects.iter().map(project_to_proto).collect(),
        }))
    }

    async fn get_project(
        &self,
        request: Request<GetProjectRequest>,
    ) -> Result<Response<GetProjectResponse>, Status> {
        self.authorize(&request).await?;
        let name = request.into_inner().name;
        let project = self
            .project_store
            .get_by_name(&name)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::NotFound(name.clone()))?;
        Ok(Response::new(GetProjectResponse {
            project: Some(project_to_proto(&project)),
        }))
    }

    async fn create_project(
        &self,
        request: Request<CreateProjectRequest>,
    ) -> Result<Response<CreateProjectResponse>, Status> {
        self.authorize(&request).await?;
        let body = request.into_inner();
        if body.name.trim().is_empty() {
            return Err(ApiError::InvalidArgument("name must not be empty".to_string()).into());
        }
        if self
            .project_store
            .get_by_name(&body.name)
            .await
            .map_err(ApiError::from)?
            .is_some()
        {
            return Err(ApiError::AlreadyExists(body.name).into());
        }

        let rules: Vec<Rule> = body.rules.iter().map(rule_from_proto).collect();
        let rules = if rules.is_empty() {
            vec![Rule::new(DEFAULT_RULE_COUNT, DEFAULT_RULE_MIN_AGE)]
        } else {
            rules
        };
        let mut project = Project::new(body.name, rules);
        project.created_at = Some(chrono::Utc::now());

        self.project_store.save(&project).await.map_err(ApiError::from)?;
        Ok(Response::new(CreateProjectResponse {
            project: Some(project_to_proto(&project)),
        }))
    }

    async fn get_files(
        &self,
        request: Request<GetFilesRequest>,
    ) -> Result<Response<GetFilesResponse>, Status> {
        self.authorize(&request).await?;
        let project_name = request.into_inner().project_name;
        let files = match project_name {
            Some(name) => {
                let by_folder = self.file_store.list_by_folder().await.map_err(ApiError::from)?;
                by_folder.get(&name).cloned().unwrap_or_default()
            }
            None => self.file_store.list().await.map_err(ApiError::from)?,
        };
        Ok(Response::new(GetFilesResponse {
            files: files.iter().map(file_to_proto).collect(),
        }))
    }

    async fn get_file_url(
        &self,
        request: Request<GetFileUrlRequest>,
    ) -> Result<Response<GetFileUrlResponse>, Status> {
        self.authorize(&request).await?;
        let path = request.into_inner().path;
        let files = self.file_store.list().await.map_err(ApiError::from)?;
        let file = files
            .iter()
            .find(|f| f.path == path)
            .ok_or_else(|| ApiError::NotFound(path.clone()))?;
        let url = self.file_store.url_for(file).await.map_err(ApiError::from)?;
        Ok(Response::new(GetFileUrlResponse { url }))
    }

    async fn create_account(
        &self,
        request: Request<CreateAccountRequest>,
    ) -> Result<Response<CreateAccountResponse>, Status> {
        self.authorize(&request).await?;
        let username = request.into_inner().username;
        if username.trim().is_empty() {
            return Err(ApiError::InvalidArgument("username must not be empty".to_string()).into());
        }
        if self.account_store.get(&username).await.map_err(ApiError::from)?.is_some() {
            return Err(ApiError::AlreadyExists(username).into());
        }

        let plain_password = generate_password();
        let hashed = hash_password(&plain_password).map_err(ApiError::from)?;
        let account = Account::new(username.clone(), hashed);
        self.account_store.save(&account).await.map_err(ApiError::from)?;

        Ok(Response::new(CreateAccountResponse {
            username,
            plain_password,
        }))
    }

    async fn list_accounts(
        &self,
        request: Request<ListAccountsRequest>,
    ) -> Result<Response<ListAccountsResponse>, Status> {
        self.authorize(&request).await?;
        let accounts = self.account_store.list().await.map_err(ApiError::from)?;
        Ok(Response::new(ListAccountsResponse {
            accounts: accounts.iter().map(account_to_proto).collect(),
        }))
    }

    async fn change_account_password(
        &self,
        request: Request<ChangeAccountPasswordRequest>,
    ) -> Result<Response<ChangeAccountPasswordResponse>, Status> {
        self.authorize(&request).await?;
        let username = request.into_inner().username;
        let mut account = self
            .account_store
            .get(&username)
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::NotFound(username.clone()))?;

        let plain_password = generate_password();
        account.hashed_password = hash_password(&plain_password).map_err(ApiError::from)?;
        self.account_store.save(&account).await.map_err(ApiError::from)?;

        Ok(Response::new(ChangeAccountPasswordResponse { plain_password }))
    }

    async fn authenticate_account(
        &self,
        request: Request<AuthenticateAccountRequest>,
    ) -> Result<Response<AuthenticateAccountResponse>, Status> {
        let body = request.into_inner();
        let account = self
            .account_store
            .get(&body.username)
            .await
            .map_err(ApiError::from)?
            .ok_or(ApiError::Unauthenticated)?;

        let valid = verify_password(&body.password, &account.hashed_password).map_err(ApiError::from)?;
        if !valid {
            return Err(ApiError::Unauthenticated.into());
        }

        let bearer_token = issue_token(&account.username, TOKEN_ISSUER, TOKEN_AUDIENCE, &self.jwt_secret)
            .map_err(ApiError::from)?;
        Ok(Response::new(AuthenticateAccountResponse { bearer_token }))
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
