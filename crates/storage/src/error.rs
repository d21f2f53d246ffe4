use thiserror::Error;

/// Crate-wide result type for storage operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An item with the same owner and body is already persisted.
    ///
    /// A user-visible outcome ("you already have this one"), not a fault.
    #[error("item already exists")]
    Duplicate,

    /// The owner has nothing stored to pick from.
    #[error("no stored items")]
    NoItems,

    /// The item to remove is already gone.
    #[error("item not found")]
    NotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),
}
