// ABOUTME: In-memory store backend implementing both key-value and record interfaces
// ABOUTME: Used by tests and ephemeral sessions; nothing survives the process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use async_trait::async_trait;
use dashmap::DashMap;

use super::{KeyValueStore, Partition, RecordStore};
use crate::errors::AppResult;

/// In-memory store backed by concurrent maps
///
/// `DashMap` gives `&self` mutation without an outer lock, which the synchronous
/// key-value interface requires.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: DashMap<String, String>,
    records: DashMap<(Partition, String), String>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of key-value entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key-value entries exist
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether a key currently holds a value
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl KeyValueStore for InMemoryStore {
    fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).map(|entry| entry.value().clone()))
    }

    fn set_raw(&self, key: &str, value: String) -> AppResult<()> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn put_record(&self, partition: Partition, id: &str, value: String) -> AppResult<()> {
        self.records.insert((partition, id.to_owned()), value);
        Ok(())
    }

    async fn get_record(&self, partition: Partition, id: &str) -> AppResult<Option<String>> {
        Ok(self
            .records
            .get(&(partition, id.to_owned()))
            .map(|entry| entry.value().clone()))
    }

    async fn list_records(&self, partition: Partition) -> AppResult<Vec<String>> {
        Ok(self
            .records
            .iter()
            .filter(|entry| entry.key().0 == partition)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn delete_record(&self, partition: Partition, id: &str) -> AppResult<bool> {
        Ok(self.records.remove(&(partition, id.to_owned())).is_some())
    }
}
