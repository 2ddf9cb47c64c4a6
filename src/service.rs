//! Character lifecycle operations
//!
//! [`CharacterService`] sits between the HTTP handlers and the
//! [`CharacterStore`]. It owns identity allocation, timestamp stamping and
//! the per-id write serialization that keeps concurrent updates from
//! overwriting one another.

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::storage::CharacterStore;
use crate::types::{timestamp, Character};
use crate::{Error, Result};

/// Character operations backed by a [`CharacterStore`]
#[derive(Clone)]
pub struct CharacterService {
    store: Arc<dyn CharacterStore>,
    write_locks: Arc<KeyedLocks>,
}

impl CharacterService {
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        Self {
            store,
            write_locks: Arc::new(KeyedLocks::default()),
        }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn CharacterStore> {
        &self.store
    }

    /// All characters, oldest first
    pub async fn list(&self) -> Result<Vec<Character>> {
        self.store.list().await
    }

    /// Create a character.
    ///
    /// A store that retains nothing gets the input back untouched. Otherwise a
    /// fresh id is allocated and both timestamps are set to now.
    pub async fn create(&self, mut character: Character) -> Result<Character> {
        if !self.store.persists() {
            return Ok(character);
        }

        let now = timestamp(Utc::now());
        character.id = Uuid::new_v4().simple().to_string();
        character.created_at = now.clone();
        character.updated_at = now;

        self.store.put(&character.id, character.clone()).await?;
        tracing::info!(id = %character.id, name = %character.name, "Character created");

        Ok(character)
    }

    pub async fn get(&self, id: &str) -> Result<Character> {
        self.store
            .find(id)
            .await?
            .ok_or_else(|| Error::not_found(id))
    }

    /// Merge `changes` onto the character stored under `id`
    pub async fn update(&self, id: &str, changes: Character) -> Result<Character> {
        let _guard = self.write_locks.acquire(id).await;

        let mut character = self
            .store
            .find(id)
            .await?
            .ok_or_else(|| Error::not_found(id))?;

        character.merge(changes, Utc::now());
        self.store.put(id, character.clone()).await?;
        tracing::info!(%id, "Character updated");

        Ok(character)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.write_locks.acquire(id).await;

        if !self.store.delete(id).await? {
            return Err(Error::not_found(id));
        }
        tracing::info!(%id, "Character deleted");

        Ok(())
    }
}

/// One async mutex per key, created on demand.
///
/// Entries are dropped again once the last holder releases them.
#[derive(Default)]
struct KeyedLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl KeyedLocks {
    async fn acquire(&self, key: &str) -> KeyGuard<'_> {
        let lock = self.locks.entry(key.to_string()).or_default().clone();
        let guard = lock.lock_owned().await;

        KeyGuard {
            locks: self,
            key: key.to_string(),
            guard: Some(guard),
        }
    }
}

struct KeyGuard<'a> {
    locks: &'a KeyedLocks,
    key: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for KeyGuard<'_> {
    fn drop(&mut self) {
        // Release the mutex before checking whether anyone else holds the entry
        self.guard.take();
        self.locks
            .locks
            .remove_if(&self.key, |_, lock| Arc::strong_count(lock) == 1);
    }
}
