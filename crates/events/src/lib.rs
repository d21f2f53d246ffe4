//! Contracts shared across the ingestion pipeline.
//!
//! The consumer loop pulls [`Event`]s out of an [`EventSource`], hands each
//! one to an [`EventProcessor`], and the processor talks back to the chat
//! through a [`Responder`]. Channel adapters implement the source and
//! responder ends; the dispatcher implements the processor end.

pub mod event;
pub mod menu;
pub mod pipeline;

pub use {
    event::{Event, EventKind, Origin},
    menu::MenuLayer,
    pipeline::{EventProcessor, EventSource, Responder},
};
