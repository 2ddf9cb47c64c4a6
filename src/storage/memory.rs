//! In-process storage backend

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::Character;
use crate::Result;

use super::CharacterStore;

/// Characters held in a map guarded by an async read/write lock.
///
/// Readers run concurrently; a writer holds the map exclusively.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, Character>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CharacterStore for MemoryStore {
    async fn find(&self, id: &str) -> Result<Option<Character>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Character>> {
        let mut characters: Vec<Character> =
            self.records.read().await.values().cloned().collect();

        // Oldest first, ties broken by id
        characters.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(characters)
    }

    async fn put(&self, id: &str, record: Character) -> Result<()> {
        self.records.write().await.insert(id.to_string(), record);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.records.write().await.remove(id).is_some())
    }
}
