use async_trait::async_trait;

use crate::{error::Result, item::Item};

/// Deduplicated per-owner persistence with uniform random retrieval.
///
/// The bot pipeline drives a storage backend strictly sequentially, but
/// backends still serialize each operation internally so a second actor
/// cannot break the dedup or read-once guarantees.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Whether an item with the same owner and body is currently persisted.
    /// Never mutates anything.
    async fn is_exists(&self, item: &Item) -> Result<bool>;

    /// Persist a new item. Fails with `Error::Duplicate` when an identical
    /// item is already stored.
    async fn save(&self, item: &Item) -> Result<()>;

    /// Pick one of `owner`'s items uniformly at random, without removing it.
    /// Fails with `Error::NoItems` when the partition is empty.
    async fn pick_random(&self, owner: &str) -> Result<Item>;

    /// Delete exactly `item`. Fails with `Error::NotFound` when it is
    /// already gone.
    async fn remove(&self, item: &Item) -> Result<()>;
}
