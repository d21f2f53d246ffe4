//! The long-poll consumer loop.
//!
//! Pulls bounded batches of events from an [`EventSource`], dispatches each
//! one in arrival order, and advances the poll offset past the whole batch
//! whether or not individual events processed cleanly. A failed event is
//! logged and never retried; that trade-off keeps one poison event from
//! wedging the stream forever. Only a failed fetch is fatal, since the loop
//! cannot make progress without the source.

use std::{sync::Arc, time::Duration};

use {
    anyhow::{Context, Result},
    tokio_util::sync::CancellationToken,
    tracing::{debug, error, info},
};

use readstash_events::{EventProcessor, EventSource};

/// Wait between polls when the source returns an empty batch, so an idle
/// bot does not hot-spin against the source.
pub const DEFAULT_IDLE_DELAY: Duration = Duration::from_secs(1);

pub struct Consumer {
    source: Arc<dyn EventSource>,
    processor: Arc<dyn EventProcessor>,
    batch_size: usize,
    idle_delay: Duration,
}

impl Consumer {
    pub fn new(
        source: Arc<dyn EventSource>,
        processor: Arc<dyn EventProcessor>,
        batch_size: usize,
    ) -> Self {
        Self {
            source,
            processor,
            batch_size,
            idle_delay: DEFAULT_IDLE_DELAY,
        }
    }

    #[must_use]
    pub fn with_idle_delay(mut self, idle_delay: Duration) -> Self {
        self.idle_delay = idle_delay;
        self
    }

    /// Run until `cancel` fires.
    ///
    /// Cancellation is observed between batches only, so every in-flight
    /// event completes before shutdown. The offset starts at zero and is
    /// owned entirely by this loop.
    pub async fn run(&self, cancel: CancellationToken) -> Result<()> {
        let mut offset: i64 = 0;

        loop {
            if cancel.is_cancelled() {
                info!("consumer stopped");
                return Ok(());
            }

            let events = tokio::select! {
                () = cancel.cancelled() => {
                    info!("consumer stopped");
                    return Ok(());
                }
                fetched = self.source.fetch(offset, self.batch_size) => {
                    fetched.context("fetch events from source")?
                }
            };

            if events.is_empty() {
                tokio::select! {
                    () = cancel.cancelled() => {}
                    () = tokio::time::sleep(self.idle_delay) => {}
                }
                continue;
            }

            debug!(offset, count = events.len(), "processing batch");

            for event in &events {
                if let Err(error) = self.processor.process(event).await {
                    error!(event_id = event.id, %error, "event processing failed");
                }
            }

            // Past the whole batch, failures included: failed events are not
            // retried.
            if let Some(last) = events.last() {
                offset = last.id + 1;
            }
        }
    }
}
