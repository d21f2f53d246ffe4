use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use {async_trait::async_trait, rand::Rng};

use crate::{
    error::{Error, Result},
    item::Item,
    store::Storage,
};

/// Hash-map backed storage for tests and ephemeral runs.
///
/// A `std::sync::Mutex` is enough here: every operation is a short
/// synchronous section and the guard is never held across an await point.
#[derive(Default)]
pub struct MemoryStorage {
    partitions: Mutex<HashMap<String, Vec<Item>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Item>>> {
        self.partitions.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn is_exists(&self, item: &Item) -> Result<bool> {
        let partitions = self.lock();
        Ok(partitions
            .get(&item.owner)
            .is_some_and(|items| items.iter().any(|stored| stored.body == item.body)))
    }

    async fn save(&self, item: &Item) -> Result<()> {
        let mut partitions = self.lock();
        let items = partitions.entry(item.owner.clone()).or_default();
        if items.iter().any(|stored| stored.body == item.body) {
            return Err(Error::Duplicate);
        }
        items.push(item.clone());
        Ok(())
    }

    async fn pick_random(&self, owner: &str) -> Result<Item> {
        let partitions = self.lock();
        let items = partitions.get(owner).filter(|items| !items.is_empty());
        match items {
            Some(items) => {
                let pick = rand::rng().random_range(0..items.len());
                Ok(items[pick].clone())
            }
            None => Err(Error::NoItems),
        }
    }

    async fn remove(&self, item: &Item) -> Result<()> {
        let mut partitions = self.lock();
        let Some(items) = partitions.get_mut(&item.owner) else {
            return Err(Error::NotFound);
        };
        match items.iter().position(|stored| stored.body == item.body) {
            Some(index) => {
                items.swap_remove(index);
                Ok(())
            }
            None => Err(Error::NotFound),
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dedup_by_owner_and_body() {
        let storage = MemoryStorage::new();
        let item = Item::page("alice", "https://example.com/a");

        storage.save(&item).await.unwrap();
        assert!(storage.is_exists(&item).await.unwrap());
        assert!(matches!(storage.save(&item).await, Err(Error::Duplicate)));

        // Same body under another owner is a different item.
        let bob = Item::page("bob", "https://example.com/a");
        storage.save(&bob).await.unwrap();
    }

    #[tokio::test]
    async fn pick_random_never_fabricates_items() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            storage.pick_random("alice").await,
            Err(Error::NoItems)
        ));

        let item = Item::page("alice", "https://example.com/a");
        storage.save(&item).await.unwrap();
        storage.remove(&item).await.unwrap();
        assert!(matches!(
            storage.pick_random("alice").await,
            Err(Error::NoItems)
        ));
    }

    #[tokio::test]
    async fn remove_unknown_item_reports_not_found() {
        let storage = MemoryStorage::new();
        let item = Item::page("alice", "https://example.com/a");
        assert!(matches!(storage.remove(&item).await, Err(Error::NotFound)));
    }

    #[tokio::test]
    async fn pick_random_covers_every_item_eventually() {
        let storage = MemoryStorage::new();
        for body in ["https://a.io", "https://b.io", "https://c.io"] {
            storage.save(&Item::page("alice", body)).await.unwrap();
        }

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(storage.pick_random("alice").await.unwrap().body);
            if seen.len() == 3 {
                break;
            }
        }
        assert_eq!(seen.len(), 3);
    }
}
