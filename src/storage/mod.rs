//! Storage abstraction layer
//!
//! Characters are reached only through [`CharacterStore`], so the backing
//! engine can be swapped without touching the HTTP layer.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::types::Character;
use crate::Result;

pub mod memory;
pub mod null;

pub use memory::MemoryStore;
pub use null::NullStore;

/// Character storage trait
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Look up a character by id
    async fn find(&self, id: &str) -> Result<Option<Character>>;

    /// Return every stored character
    async fn list(&self) -> Result<Vec<Character>>;

    /// Insert or replace the record stored under `id`
    async fn put(&self, id: &str, record: Character) -> Result<()>;

    /// Remove the record stored under `id`, reporting whether it existed
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Check that the backend can serve requests
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    /// Whether records written through `put` are retained
    fn persists(&self) -> bool {
        true
    }
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendKind {
    /// Accept every write and retain nothing
    #[default]
    None,
    /// In-process map, lost on restart
    Memory,
}

impl std::str::FromStr for StorageBackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(StorageBackendKind::None),
            "memory" => Ok(StorageBackendKind::Memory),
            other => anyhow::bail!("unsupported storage backend: {}", other),
        }
    }
}

/// Create a storage backend of the requested kind
pub fn create_store(kind: StorageBackendKind) -> Arc<dyn CharacterStore> {
    match kind {
        StorageBackendKind::None => Arc::new(NullStore),
        StorageBackendKind::Memory => Arc::new(MemoryStore::new()),
    }
}
