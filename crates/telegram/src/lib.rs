//! Telegram channel for readstash.
//!
//! Implements the pipeline's source and responder contracts over the
//! Telegram Bot API via teloxide: `getUpdates` long polling with an
//! explicit offset on the inbound side, plain messages and per-layer reply
//! keyboards on the outbound side.

pub mod channel;
pub mod config;
pub mod keyboard;

pub use {channel::TelegramChannel, config::TelegramConfig};
