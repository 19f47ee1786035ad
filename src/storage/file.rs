// ABOUTME: Key-value store persisted as a single JSON document in the data directory
// ABOUTME: Writes go through a temp file and rename so a crash never leaves a torn document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};

/// File name of the store inside the data directory
pub const STORE_FILE_NAME: &str = "store.json";

type Document = BTreeMap<String, String>;

/// JSON file store
///
/// Every operation reads the document from disk, so several processes see each
/// other's writes. The mutex serializes read-modify-write cycles within one process.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Store backed by `<data_dir>/store.json`
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_path(data_dir.as_ref().join(STORE_FILE_NAME))
    }

    /// Store backed by an explicit file path
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the JSON document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> AppResult<Document> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(Document::new()),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                AppError::serialization(format!(
                    "Corrupt store document {}: {e}",
                    self.path.display()
                ))
                .with_source(e)
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Document::new()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read {}: {e}",
                self.path.display()
            ))
            .with_source(e)),
        }
    }

    async fn write_document(&self, document: &Document) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!("Failed to create {}: {e}", parent.display()))
                    .with_source(e)
            })?;
        }

        let contents = serde_json::to_string_pretty(document)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents).await.map_err(|e| {
            AppError::storage(format!("Failed to write {}: {e}", tmp_path.display())).with_source(e)
        })?;
        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            if let Err(cleanup) = fs::remove_file(&tmp_path).await {
                warn!(path = %tmp_path.display(), error = %cleanup, "Failed to remove temp store document");
            }
            return Err(
                AppError::storage(format!("Failed to replace {}: {e}", self.path.display()))
                    .with_source(e),
            );
        }

        debug!(path = %self.path.display(), keys = document.len(), "Store document written");
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_document().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        document.insert(key.to_owned(), value.to_owned());
        self.write_document(&document).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        if document.remove(key).is_some() {
            self.write_document(&document).await?;
        }
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to remove store document");
                Err(AppError::storage(format!(
                    "Failed to remove {}: {e}",
                    self.path.display()
                ))
                .with_source(e))
            }
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::ErrorCode;

    #[tokio::test]
    async fn test_failed_replace_removes_temp_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        std::fs::create_dir(&path).unwrap();
        let store = FileStore::with_path(&path);

        let mut document = Document::new();
        document.insert("hasSeenWelcome".to_owned(), "true".to_owned());
        let error = store.write_document(&document).await.unwrap_err();

        assert_eq!(error.code, ErrorCode::StorageError);
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.is_dir());
    }
}
