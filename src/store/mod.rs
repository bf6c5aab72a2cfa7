// ABOUTME: Persistent store abstraction with synchronous key-value and async record interfaces
// ABOUTME: Pluggable backends (in-memory, JSON files) following the cache provider pattern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Persistent Store
//!
//! Two interfaces over one shared namespace:
//!
//! - [`KeyValueStore`]: small JSON values under string keys, read and written
//!   synchronously on every state change (session phase, clock fields, history map).
//! - [`RecordStore`]: larger collections keyed by record id inside a named
//!   [`Partition`], accessed asynchronously.
//!
//! Reads through [`KeyValueStoreExt::get_parsed_or`] never fail: an absent key, an
//! I/O error, or a malformed document all yield the typed default.
//!
//! ```rust,no_run
//! use liftlog::store::{KeyValueStoreExt, memory::InMemoryStore};
//!
//! let store = InMemoryStore::new();
//! store.persist("clock.duration", &42_u64);
//! let duration: u64 = store.get_parsed_or("clock.duration", 0);
//! assert_eq!(duration, 42);
//! ```

/// Store factory for configuration-based backend selection
pub mod factory;
/// JSON file backend
pub mod file;
/// In-memory backend
pub mod memory;

pub use factory::Stores;
pub use file::FileStore;
pub use memory::InMemoryStore;

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppResult;
use crate::logging::AppLogger;

/// Named partition of the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    /// Completed workouts
    Workouts,
    /// Training journal entries
    Journal,
    /// User settings
    Settings,
    /// Saved workout templates
    Templates,
}

impl Partition {
    /// Stable partition name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Workouts => "workouts",
            Self::Journal => "journal",
            Self::Settings => "settings",
            Self::Templates => "templates",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String-keyed store of JSON documents
pub trait KeyValueStore: Send + Sync {
    /// Raw JSON document for a key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get_raw(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the document for a key (last write wins)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set_raw(&self, key: &str, value: String) -> AppResult<()>;

    /// Delete a key; deleting an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Typed helpers available on every [`KeyValueStore`]
pub trait KeyValueStoreExt: KeyValueStore {
    /// Parsed value for a key, or `default` when absent or malformed
    fn get_parsed_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.get_raw(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(store.key = %key, error = %e, "Malformed persisted value, using default");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                AppLogger::log_store_failure("read", key, &e);
                default
            }
        }
    }

    /// Serialize and store a value
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, raw)
    }

    /// Store a value, logging instead of propagating failures
    ///
    /// State changes are applied in memory first; a failed write only risks losing
    /// that change on the next reload.
    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.set_json(key, value) {
            AppLogger::log_store_failure("write", key, &e);
        }
    }

    /// Remove a key, logging instead of propagating failures
    fn forget(&self, key: &str) {
        if let Err(e) = self.remove(key) {
            AppLogger::log_store_failure("remove", key, &e);
        }
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// Async store of JSON records grouped by partition
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert or replace a record
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn put_record(&self, partition: Partition, id: &str, value: String) -> AppResult<()>;

    /// Raw record by id
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get_record(&self, partition: Partition, id: &str) -> AppResult<Option<String>>;

    /// Every raw record in a partition, in unspecified order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn list_records(&self, partition: Partition) -> AppResult<Vec<String>>;

    /// Delete a record, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn delete_record(&self, partition: Partition, id: &str) -> AppResult<bool>;
}

/// Typed helpers available on every [`RecordStore`]
#[async_trait]
pub trait RecordStoreExt: RecordStore {
    /// Serialize and store a record
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    async fn put_json<T: Serialize + Sync>(
        &self,
        partition: Partition,
        id: &str,
        value: &T,
    ) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.put_record(partition, id, raw).await
    }

    /// Parsed record by id; malformed records read as absent
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get_json<T: DeserializeOwned + Send>(
        &self,
        partition: Partition,
        id: &str,
    ) -> AppResult<Option<T>> {
        let raw = self.get_record(partition, id).await?;
        Ok(raw.and_then(|raw| parse_record(partition, &raw)))
    }

    /// Every parseable record in a partition; malformed records are skipped
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn list_json<T: DeserializeOwned + Send>(&self, partition: Partition) -> AppResult<Vec<T>> {
        let raw = self.list_records(partition).await?;
        Ok(raw
            .iter()
            .filter_map(|raw| parse_record(partition, raw))
            .collect())
    }
}

impl<S: RecordStore + ?Sized> RecordStoreExt for S {}

fn parse_record<T: DeserializeOwned>(partition: Partition, raw: &str) -> Option<T> {
    serde_json::from_str(raw)
        .map_err(|e| {
            warn!(store.partition = %partition, error = %e, "Skipping malformed record");
        })
        .ok()
}
