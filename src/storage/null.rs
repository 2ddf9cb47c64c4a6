//! Storage backend that retains nothing

use async_trait::async_trait;

use crate::types::Character;
use crate::Result;

use super::CharacterStore;

/// Every read misses and every write is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

#[async_trait]
impl CharacterStore for NullStore {
    async fn find(&self, _id: &str) -> Result<Option<Character>> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<Character>> {
        Ok(Vec::new())
    }

    async fn put(&self, _id: &str, _record: Character) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _id: &str) -> Result<bool> {
        Ok(false)
    }

    fn persists(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_store_forgets_writes() {
        let store = NullStore;
        let record = Character {
            id: "abc".into(),
            name: "Aragorn".into(),
            ..Default::default()
        };

        store.put("abc", record).await.unwrap();
        assert!(store.find("abc").await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());
        assert!(!store.delete("abc").await.unwrap());
        store.ping().await.unwrap();
    }
}
