use thiserror::Error;

/// Crate-wide result type for dispatch operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The event kind carries nothing the dispatcher can act on.
    #[error("unsupported event kind")]
    UnsupportedEvent,

    /// An action failed mid-flight; `command` names what was being
    /// attempted so logs identify the failure without a stack trace.
    #[error("{command} failed: {source}")]
    Command {
        command: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    #[must_use]
    pub fn command(
        command: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Command {
            command,
            source: source.into(),
        }
    }
}
