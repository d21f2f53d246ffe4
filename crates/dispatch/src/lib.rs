//! Command dispatch: classify each inbound event and run the matching
//! action against storage and the responder.
//!
//! Classification is stateless per event. Text that parses as an absolute
//! URL becomes a save-page action, the `Note` prefix marks a note
//! submission, and everything else is looked up verbatim in the command
//! table, where both the typed slash command and the tapped menu-button
//! label map to the same entry.

pub mod action;
pub mod command;
pub mod error;
pub mod messages;
pub mod processor;

pub use {
    action::{Action, classify},
    command::Command,
    error::{Error, Result},
    processor::Processor,
};
