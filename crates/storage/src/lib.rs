//! Deduplicated per-owner item storage with pick-one-at-random retrieval.
//!
//! Items (saved pages and notes) live in one partition per owner key. An
//! item's identity is the pair (owner, body): saving the same body twice for
//! the same owner is a [`Error::Duplicate`], and removal targets exactly one
//! item. Picking and removing are separate operations so callers can deliver
//! the item first and only discard it once delivery is confirmed.
//!
//! Two backends: [`FileStorage`] persists each item as a content-addressed
//! JSON file, [`MemoryStorage`] keeps everything in a hash map for tests and
//! ephemeral runs.

pub mod error;
pub mod file;
pub mod item;
pub mod memory;
pub mod store;

pub use {
    error::{Error, Result},
    file::FileStorage,
    item::{Item, ItemKind},
    memory::MemoryStorage,
    store::Storage,
};
