use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::PathBuf,
};

use {
    async_trait::async_trait,
    rand::Rng,
    sha2::{Digest, Sha256},
};

use crate::{
    error::{Error, Result},
    item::Item,
    store::Storage,
};

/// Content-addressed file storage.
///
/// Layout: one directory per sanitized owner key under `base_dir`, one JSON
/// file per item named by the SHA-256 of the item body. Existence checks are
/// path probes and saving is an atomic `create_new`, so dedup holds without
/// any in-process bookkeeping. Filesystem work runs on the blocking pool.
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn partition_dir(&self, owner: &str) -> PathBuf {
        self.base_dir.join(sanitize(owner))
    }

    fn item_path(&self, item: &Item) -> PathBuf {
        self.partition_dir(&item.owner)
            .join(format!("{}.json", content_key(&item.body)))
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn is_exists(&self, item: &Item) -> Result<bool> {
        let path = self.item_path(item);
        Ok(tokio::task::spawn_blocking(move || path.exists()).await?)
    }

    async fn save(&self, item: &Item) -> Result<()> {
        let dir = self.partition_dir(&item.owner);
        let path = self.item_path(item);
        let payload = serde_json::to_vec(item)?;

        tokio::task::spawn_blocking(move || -> Result<()> {
            fs::create_dir_all(&dir)?;
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => return Err(Error::Duplicate),
                Err(e) => return Err(e.into()),
            };
            file.write_all(&payload)?;
            Ok(())
        })
        .await?
    }

    async fn pick_random(&self, owner: &str) -> Result<Item> {
        let dir = self.partition_dir(owner);

        tokio::task::spawn_blocking(move || -> Result<Item> {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                // An owner that never saved anything has no directory yet.
                Err(e) if e.kind() == ErrorKind::NotFound => return Err(Error::NoItems),
                Err(e) => return Err(e.into()),
            };

            let mut paths = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    paths.push(path);
                }
            }
            if paths.is_empty() {
                return Err(Error::NoItems);
            }

            let pick = rand::rng().random_range(0..paths.len());
            let data = fs::read(&paths[pick])?;
            Ok(serde_json::from_slice(&data)?)
        })
        .await?
    }

    async fn remove(&self, item: &Item) -> Result<()> {
        let path = self.item_path(item);

        tokio::task::spawn_blocking(move || match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::NotFound),
            Err(e) => Err(e.into()),
        })
        .await?
    }
}

/// Lowercase hex SHA-256 of the item body; the filename under the owner
/// partition.
fn content_key(body: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Owner keys come from sender identity and may contain characters that are
/// unsafe in a path component.
fn sanitize(owner: &str) -> String {
    owner
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, crate::item::ItemKind};

    fn storage() -> (tempfile::TempDir, FileStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        (dir, storage)
    }

    #[tokio::test]
    async fn save_then_exists() {
        let (_dir, storage) = storage();
        let item = Item::page("alice", "https://example.com/a");

        assert!(!storage.is_exists(&item).await.unwrap());
        storage.save(&item).await.unwrap();
        assert!(storage.is_exists(&item).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_save_is_rejected() {
        let (_dir, storage) = storage();
        let item = Item::page("alice", "https://example.com/a");

        storage.save(&item).await.unwrap();
        assert!(matches!(
            storage.save(&item).await,
            Err(Error::Duplicate)
        ));
    }

    #[tokio::test]
    async fn is_exists_has_no_side_effects() {
        let (_dir, storage) = storage();
        let item = Item::page("alice", "https://example.com/a");

        assert!(!storage.is_exists(&item).await.unwrap());
        assert!(!storage.is_exists(&item).await.unwrap());
        storage.save(&item).await.unwrap();
        assert!(storage.is_exists(&item).await.unwrap());
        assert!(storage.is_exists(&item).await.unwrap());
    }

    #[tokio::test]
    async fn pick_random_on_empty_partition() {
        let (_dir, storage) = storage();
        assert!(matches!(
            storage.pick_random("nobody").await,
            Err(Error::NoItems)
        ));
    }

    #[tokio::test]
    async fn pick_then_remove_leaves_the_rest() {
        let (_dir, storage) = storage();
        let first = Item::page("alice", "https://example.com/a");
        let second = Item::page("alice", "https://example.com/b");
        storage.save(&first).await.unwrap();
        storage.save(&second).await.unwrap();

        let picked = storage.pick_random("alice").await.unwrap();
        assert!(picked == first || picked == second);

        storage.remove(&picked).await.unwrap();
        assert!(!storage.is_exists(&picked).await.unwrap());

        let remaining = storage.pick_random("alice").await.unwrap();
        assert_ne!(remaining, picked);
    }

    #[tokio::test]
    async fn remove_twice_reports_not_found() {
        let (_dir, storage) = storage();
        let item = Item::page("alice", "https://example.com/a");
        storage.save(&item).await.unwrap();

        storage.remove(&item).await.unwrap();
        assert!(matches!(
            storage.remove(&item).await,
            Err(Error::NotFound)
        ));
    }

    #[tokio::test]
    async fn owners_are_isolated() {
        let (_dir, storage) = storage();
        let alice = Item::page("alice", "https://example.com/a");
        storage.save(&alice).await.unwrap();

        let bob_copy = Item::page("bob", "https://example.com/a");
        assert!(!storage.is_exists(&bob_copy).await.unwrap());
        assert!(matches!(
            storage.pick_random("bob").await,
            Err(Error::NoItems)
        ));
    }

    #[tokio::test]
    async fn kind_survives_the_round_trip() {
        let (_dir, storage) = storage();
        let note = Item::note("alice", "remember the milk");
        storage.save(&note).await.unwrap();

        let picked = storage.pick_random("alice").await.unwrap();
        assert_eq!(picked, note);
        assert_eq!(picked.kind, ItemKind::Note);
    }

    #[tokio::test]
    async fn odd_owner_keys_are_sanitized() {
        let (_dir, storage) = storage();
        let item = Item::page("we/ird:owner", "https://example.com/a");

        storage.save(&item).await.unwrap();
        assert!(storage.is_exists(&item).await.unwrap());
        let picked = storage.pick_random("we/ird:owner").await.unwrap();
        assert_eq!(picked.body, "https://example.com/a");
    }
}
