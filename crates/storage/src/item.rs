use serde::{Deserialize, Serialize};

/// What a stored item holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A page, identified by its URL.
    Page,
    /// A free-text note.
    Note,
}

/// A single stored page or note belonging to one owner.
///
/// Two items are the same item when owner and body match; the kind is not
/// part of the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub owner: String,
    pub body: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn page(owner: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            body: url.into(),
            kind: ItemKind::Page,
        }
    }

    pub fn note(owner: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            body: text.into(),
            kind: ItemKind::Note,
        }
    }
}
