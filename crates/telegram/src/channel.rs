use std::time::Duration;

use {
    anyhow::{Context, Result},
    async_trait::async_trait,
    secrecy::ExposeSecret,
    teloxide::{
        payloads::{GetUpdatesSetters, SendMessageSetters},
        prelude::*,
        types::{AllowedUpdate, BotCommand, ChatId, Message, ReplyMarkup, Update, UpdateKind},
    },
    tracing::{debug, info, warn},
};

use readstash_events::{Event, EventKind, EventSource, MenuLayer, Origin, Responder};

use crate::{config::TelegramConfig, keyboard};

/// The Bot API ceiling for updates returned by one `getUpdates` call.
const MAX_BATCH: usize = 100;

/// Telegram-backed event source and responder.
pub struct TelegramChannel {
    bot: Bot,
    poll_timeout_secs: u32,
}

impl TelegramChannel {
    /// Build the HTTP client, verify credentials, and clear any webhook so
    /// long polling can take over.
    pub async fn connect(config: &TelegramConfig) -> Result<Self> {
        // Client timeout above the long-polling timeout, so the client
        // doesn't abort a request Telegram is still holding open.
        let client = teloxide::net::default_reqwest_settings()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("build telegram http client")?;
        let bot = Bot::with_client(config.token.expose_secret(), client);

        let me = bot.get_me().await.context("verify bot credentials")?;
        bot.delete_webhook()
            .send()
            .await
            .context("clear telegram webhook")?;

        // Slash-command autocomplete in Telegram clients; purely cosmetic.
        if let Err(e) = bot.set_my_commands(command_list()).await {
            warn!("failed to register bot commands: {e}");
        }

        info!(username = ?me.username, "telegram bot connected (webhook cleared)");

        Ok(Self {
            bot,
            poll_timeout_secs: config.poll_timeout_secs,
        })
    }
}

#[async_trait]
impl EventSource for TelegramChannel {
    async fn fetch(&self, offset: i64, limit: usize) -> Result<Vec<Event>> {
        let updates = self
            .bot
            .get_updates()
            .offset(offset as i32)
            .limit(limit.min(MAX_BATCH) as u8)
            .timeout(self.poll_timeout_secs)
            .allowed_updates(vec![AllowedUpdate::Message])
            .await
            .context("getUpdates")?;

        debug!(offset, count = updates.len(), "got telegram updates");
        Ok(updates.into_iter().map(event_from_update).collect())
    }
}

#[async_trait]
impl Responder for TelegramChannel {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .with_context(|| format!("send message to chat {chat_id}"))?;
        Ok(())
    }

    async fn send_menu(&self, chat_id: i64, text: &str, layer: MenuLayer) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .reply_markup(ReplyMarkup::Keyboard(keyboard::markup_for(layer)))
            .await
            .with_context(|| format!("send menu to chat {chat_id}"))?;
        Ok(())
    }
}

/// Map a raw update to a pipeline event.
///
/// Only text messages carry a payload; everything else becomes an `Unknown`
/// event the dispatcher rejects.
fn event_from_update(update: Update) -> Event {
    let id = i64::from(update.id.0);
    match update.kind {
        UpdateKind::Message(message) => match message.text() {
            Some(text) => Event {
                id,
                kind: EventKind::Message,
                text: text.to_owned(),
                origin: origin_of(&message),
            },
            None => unknown_event(id),
        },
        _ => unknown_event(id),
    }
}

fn origin_of(message: &Message) -> Origin {
    let (user_id, username) = match message.from.as_ref() {
        Some(user) => (user.id.0 as i64, user.username.clone()),
        None => (0, None),
    };
    Origin {
        chat_id: message.chat.id.0,
        user_id,
        username,
    }
}

fn unknown_event(id: i64) -> Event {
    Event {
        id,
        kind: EventKind::Unknown,
        text: String::new(),
        origin: Origin::default(),
    }
}

fn command_list() -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", "Show the main menu"),
        BotCommand::new("help", "How the stash works"),
        BotCommand::new("rndlink", "Get (and remove) a random saved link"),
        BotCommand::new("managelinks", "Link management menu"),
        BotCommand::new("managenotes", "Note management menu"),
        BotCommand::new("chatinfo", "Chat data menu"),
    ]
}
