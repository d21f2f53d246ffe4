use {anyhow::Result, async_trait::async_trait};

use crate::{event::Event, menu::MenuLayer};

/// Produces batches of inbound events for the consumer loop.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch up to `limit` events starting at `offset`, in arrival order.
    ///
    /// Repeating a fetch with the same offset and limit returns the same
    /// events unless new ones have arrived; the caller owns the offset and
    /// never re-requests a range it has already consumed.
    async fn fetch(&self, offset: i64, limit: usize) -> Result<Vec<Event>>;
}

/// Handles one event end to end.
#[async_trait]
pub trait EventProcessor: Send + Sync {
    /// A returned error means this event failed; it must never take the
    /// whole pipeline down with it.
    async fn process(&self, event: &Event) -> Result<()>;
}

/// Sends replies back to the messaging platform.
///
/// Failures are always reported to the caller, never swallowed: the
/// dispatcher decides what a failed delivery means for stored items.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()>;

    /// Send `text` together with the reply keyboard for `layer`.
    async fn send_menu(&self, chat_id: i64, text: &str, layer: MenuLayer) -> Result<()>;
}
