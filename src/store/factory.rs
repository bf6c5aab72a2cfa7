// ABOUTME: Store factory selecting a backend from tracker configuration
// ABOUTME: Hands out one backend behind both the key-value and record interfaces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::sync::Arc;

use tracing::info;

use super::file::FileStore;
use super::memory::InMemoryStore;
use super::{KeyValueStore, RecordStore};
use crate::config::{StorageBackend, TrackerConfig};
use crate::errors::AppResult;

/// Handles to the configured persistence backend
#[derive(Clone)]
pub struct Stores {
    /// Synchronous key-value interface
    pub kv: Arc<dyn KeyValueStore>,
    /// Async record interface
    pub records: Arc<dyn RecordStore>,
}

impl Stores {
    /// Build stores for the configured backend
    ///
    /// # Errors
    ///
    /// Returns an error if the file backend cannot create its directory
    pub fn from_config(config: &TrackerConfig) -> AppResult<Self> {
        match &config.storage {
            StorageBackend::Memory => {
                info!("Initializing in-memory store");
                Ok(Self::in_memory())
            }
            StorageBackend::File(root) => {
                info!(root = %root.display(), "Initializing file store");
                let store = Arc::new(FileStore::open(root.clone())?);
                Ok(Self {
                    kv: store.clone(),
                    records: store,
                })
            }
        }
    }

    /// Fresh in-memory stores
    #[must_use]
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            kv: store.clone(),
            records: store,
        }
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}
