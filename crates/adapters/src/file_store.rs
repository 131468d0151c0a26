// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `FileStore`: the object-store contract the engine reconciles against.

use crate::S3Error;
use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use backr_core::{File, FilesByFolder};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Presigned URL lifetime handed to `urlFor` callers.
const PRESIGN_TTL: Duration = Duration::from_secs(3600);

#[async_trait]
pub trait FileStore: Send + Sync {
    /// All files in the bucket whose key parses as exactly `folder/name`;
    /// non-conforming keys are ignored.
    async fn list(&self) -> Result<Vec<File>, S3Error>;
    async fn list_by_folder(&self) -> Result<FilesByFolder, S3Error>;
    async fn delete(&self, file: &File) -> Result<(), S3Error>;
    async fn url_for(&self, file: &File) -> Result<String, S3Error>;
}

fn group_by_folder(files: Vec<File>) -> FilesByFolder {
    let mut grouped: FilesByFolder = FilesByFolder::new();
    for file in files {
        if let Some(folder) = file.folder() {
            grouped.entry(folder.to_string()).or_default().push(file);
        }
    }
    grouped
}

/// `aws-sdk-s3`-backed `FileStore`. Works against any S3-compatible
/// endpoint; `use_tls`/`endpoint` control path-style vs. virtual-host
/// addressing for non-AWS providers such as MinIO.
pub struct S3FileStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3FileStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl FileStore for S3FileStore {
    async fn list(&self) -> Result<Vec<File>, S3Error> {
        let mut files = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let mut request = self.client.list_objects_v2().bucket(&self.bucket);
            if let Some(token) = continuation.take() {
                request = request.continuation_token(token);
            }
            let page = request
                .send()
                .await
                .map_err(|err| S3Error::Request(err.to_string()))?;

            for object in page.contents() {
                let (Some(key), Some(last_modified)) = (object.key(), object.last_modified())
                else {
                    continue;
                };
                if File::folder_and_name(key).is_none() {
                    continue;
                }
                let date = DateTime::from_timestamp(last_modified.secs(), 0).unwrap_or_else(Utc::now);
                files.push(File::new(key, date, object.size().unwrap_or(0)));
            }

            if page.is_truncated().unwrap_or(false) {
                continuation = page.next_continuation_token().map(str::to_string);
            } else {
                break;
            }
        }

        Ok(files)
    }

    async fn list_by_folder(&self) -> Result<FilesByFolder, S3Error> {
        Ok(group_by_folder(self.list().await?))
    }

    async fn delete(&self, file: &File) -> Result<(), S3Error> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(&file.path)
            .send()
            .await
            .map_err(|err| S3Error::Request(err.to_string()))?;
        Ok(())
    }

    async fn url_for(&self, file: &File) -> Result<String, S3Error> {
        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&file.path)
            .presigned(
                PresigningConfig::expires_in(PRESIGN_TTL)
                    .map_err(|err| S3Error::Presign(err.to_string()))?,
            )
            .await
            .map_err(|err| S3Error::Presign(err.to_string()))?;
        Ok(presigned.uri().to_string())
    }
}

/// In-memory `FileStore` fake, for engine and daemon tests.
#[cfg(any(test, feature = "test-support"))]
#[derive(Default, Clone)]
pub struct InMemoryFileStore {
    files: Arc<RwLock<Vec<File>>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(files: impl IntoIterator<Item = File>) -> Self {
        let store = Self::new();
        store.files.write().extend(files);
        store
    }

    pub fn push(&self, file: File) {
        self.files.write().push(file);
    }
}

#[cfg(any(test, feature = "test-support"))]
#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn list(&self) -> Result<Vec<File>, S3Error> {
        Ok(self.files.read().clone())
    }

    async fn list_by_folder(&self) -> Result<FilesByFolder, S3Error> {
        Ok(group_by_folder(self.files.read().clone()))
    }

    async fn delete(&self, file: &File) -> Result<(), S3Error> {
        self.files.write().retain(|existing| existing.path != file.path);
        Ok(())
    }

    async fn url_for(&self, file: &File) -> Result<String, S3Error> {
        Ok(format!("https://fake.example/{}", file.path))
    }
}

#[cfg(test)]
#[path = "file_store_tests.rs"]
mod tests;
