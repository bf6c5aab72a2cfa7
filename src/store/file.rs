// ABOUTME: JSON file store backend, one document per key or record under a data directory
// ABOUTME: Writes go to a temporary sibling then rename, so readers never see partial documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{KeyValueStore, Partition, RecordStore};
use crate::errors::{AppError, AppResult};

const KV_DIR: &str = "kv";
const RECORDS_DIR: &str = "records";
const EXTENSION: &str = "json";

/// File-backed store rooted at a data directory
///
/// Layout:
///
/// ```text
/// <root>/kv/<key>.json
/// <root>/records/<partition>/<id>.json
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created
    pub fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(root.join(KV_DIR)).map_err(|e| {
            AppError::storage(format!("Cannot create data directory {}", root.display()))
                .with_source(e)
        })?;
        debug!(root = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    /// Data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn kv_path(&self, key: &str) -> PathBuf {
        self.root
            .join(KV_DIR)
            .join(format!("{}.{EXTENSION}", sanitize(key)))
    }

    fn partition_dir(&self, partition: Partition) -> PathBuf {
        self.root.join(RECORDS_DIR).join(partition.as_str())
    }

    fn record_path(&self, partition: Partition, id: &str) -> PathBuf {
        self.partition_dir(partition)
            .join(format!("{}.{EXTENSION}", sanitize(id)))
    }
}

/// Map a key to a safe file stem; anything outside `[A-Za-z0-9._-]` becomes `_`
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn temp_path(path: &Path) -> PathBuf {
    path.with_extension(format!("{EXTENSION}.tmp"))
}

fn storage_error(action: &str, path: &Path, e: std::io::Error) -> AppError {
    AppError::storage(format!("Failed to {action} {}", path.display())).with_source(e)
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.kv_path(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error("read", &path, e)),
        }
    }

    fn set_raw(&self, key: &str, value: String) -> AppResult<()> {
        let path = self.kv_path(key);
        let tmp = temp_path(&path);
        fs::write(&tmp, value).map_err(|e| storage_error("write", &tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| storage_error("replace", &path, e))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.kv_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("remove", &path, e)),
        }
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn put_record(&self, partition: Partition, id: &str, value: String) -> AppResult<()> {
        let dir = self.partition_dir(partition);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| storage_error("create", &dir, e))?;

        let path = self.record_path(partition, id);
        let tmp = temp_path(&path);
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| storage_error("write", &tmp, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| storage_error("replace", &path, e))
    }

    async fn get_record(&self, partition: Partition, id: &str) -> AppResult<Option<String>> {
        let path = self.record_path(partition, id);
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error("read", &path, e)),
        }
    }

    async fn list_records(&self, partition: Partition) -> AppResult<Vec<String>> {
        let dir = self.partition_dir(partition);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_error("list", &dir, e)),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| storage_error("list", &dir, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            let raw = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| storage_error("read", &path, e))?;
            records.push(raw);
        }
        Ok(records)
    }

    async fn delete_record(&self, partition: Partition, id: &str) -> AppResult<bool> {
        let path = self.record_path(partition, id);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(storage_error("delete", &path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_path_separators() {
        assert_eq!(sanitize("session.phase"), "session.phase");
        assert_eq!(sanitize("../etc/passwd"), ".._etc_passwd");
    }
}
