//! Persistence adapter.
//!
//! The whole collection lives under a single key of an async key-value
//! store. [`ContactPersistence`] encodes it with `bincode`, reads and writes
//! it in one piece, and seeds the sample set the first time it finds the key
//! missing or empty.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::Contact;
use crate::seed::sample_contacts;

/// Key holding the contact collection
pub const CONTACTS_KEY: &str = "contacts";

/// Minimal async key-value store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Raw value stored under `key`, if any
    async fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>>;
    /// Replace the value stored under `key`
    async fn set_item(&self, key: &str, value: Vec<u8>) -> Result<()>;
}

/// Store backed by an on-disk sled tree
pub struct SledStore {
    tree: sled::Tree,
}

impl SledStore {
    /// Open (or create) the database at `path` and the tree `tree_name`
    pub fn open(path: &Path, tree_name: &str) -> Result<Self> {
        std::fs::create_dir_all(path)?;
        let db = sled::open(path)?;
        let tree = db.open_tree(tree_name)?;
        debug!(path = %path.display(), tree = tree_name, "opened contact store");
        Ok(Self { tree })
    }
}

#[async_trait]
impl KeyValueStore for SledStore {
    async fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.tree.get(key)?.map(|value| value.to_vec()))
    }

    async fn set_item(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.tree.insert(key, value)?;
        self.tree.flush_async().await?;
        Ok(())
    }
}

/// In-process store, lost when dropped
#[derive(Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.items.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

/// Reads and writes the whole contact collection
pub struct ContactPersistence {
    store: Box<dyn KeyValueStore>,
}

impl ContactPersistence {
    /// Wrap a key-value store
    #[must_use]
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored collection, or `None` when the key has never been written
    pub async fn load(&self) -> Result<Option<Vec<Contact>>> {
        match self.store.get_item(CONTACTS_KEY).await? {
            Some(bytes) => Ok(Some(bincode::deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Replace the stored collection
    pub async fn save(&self, contacts: &[Contact]) -> Result<()> {
        let bytes = bincode::serialize(contacts)?;
        self.store.set_item(CONTACTS_KEY, bytes).await?;
        debug!(count = contacts.len(), "saved contacts");
        Ok(())
    }

    /// Stored collection, seeding the sample set when missing or empty
    pub async fn ensure_seeded(&self) -> Result<Vec<Contact>> {
        if let Some(contacts) = self.load().await? {
            if !contacts.is_empty() {
                return Ok(contacts);
            }
        }

        let contacts = sample_contacts(chrono::Utc::now().timestamp_millis());
        self.save(&contacts).await?;
        info!(count = contacts.len(), "seeded sample contacts");
        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactError;
    use crate::seed::SAMPLE_COUNT;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get_item("k").await.unwrap().is_none());
        store.set_item("k", vec![1, 2, 3]).await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_seeds_when_missing() {
        let persistence = ContactPersistence::new(Box::new(MemoryStore::new()));
        assert!(persistence.load().await.unwrap().is_none());

        let seeded = persistence.ensure_seeded().await.unwrap();
        assert_eq!(seeded.len(), SAMPLE_COUNT);
        assert_eq!(persistence.load().await.unwrap(), Some(seeded));
    }

    #[tokio::test]
    async fn test_seeds_when_empty() {
        let persistence = ContactPersistence::new(Box::new(MemoryStore::new()));
        persistence.save(&[]).await.unwrap();
        assert_eq!(persistence.ensure_seeded().await.unwrap().len(), SAMPLE_COUNT);
    }

    #[tokio::test]
    async fn test_existing_collection_is_not_reseeded() {
        let persistence = ContactPersistence::new(Box::new(MemoryStore::new()));
        persistence.save(&[Contact::blank("only", 1)]).await.unwrap();
        let contacts = persistence.ensure_seeded().await.unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].id, "only");
    }

    #[tokio::test]
    async fn test_read_failure_propagates() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get_item()
            .returning(|_| Err(ContactError::Other("store offline".to_string())));
        store.expect_set_item().never();

        let persistence = ContactPersistence::new(Box::new(store));
        let err = persistence.ensure_seeded().await.unwrap_err();
        assert_eq!(err.to_string(), "store offline");
    }

    #[tokio::test]
    async fn test_sled_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = SledStore::open(&dir.path().join("db"), "contacts").unwrap();
        assert!(store.get_item(CONTACTS_KEY).await.unwrap().is_none());
        store.set_item(CONTACTS_KEY, vec![9]).await.unwrap();
        assert_eq!(store.get_item(CONTACTS_KEY).await.unwrap(), Some(vec![9]));
    }
}
