use std::sync::Arc;

use {
    async_trait::async_trait,
    tracing::{info, warn},
};

use {
    readstash_events::{
        Event, EventKind, MenuLayer, Origin,
        menu::labels,
        pipeline::{EventProcessor, Responder},
    },
    readstash_storage::{self as storage, Item, Storage},
};

use crate::{
    action::{Action, classify},
    command::Command,
    error::{Error, Result},
    messages,
};

/// Classifies each inbound event and executes the matching action.
///
/// Stateless across events: the menu layer to show is recomputed from the
/// command just executed, never stored.
pub struct Processor {
    storage: Arc<dyn Storage>,
    responder: Arc<dyn Responder>,
}

impl Processor {
    pub fn new(storage: Arc<dyn Storage>, responder: Arc<dyn Responder>) -> Self {
        Self { storage, responder }
    }

    async fn handle(&self, event: &Event) -> Result<()> {
        if event.kind != EventKind::Message {
            return Err(Error::UnsupportedEvent);
        }
        let origin = &event.origin;

        info!(
            chat_id = origin.chat_id,
            username = origin.username.as_deref().unwrap_or_default(),
            text = %event.text,
            "received command"
        );

        match classify(&event.text) {
            Action::SavePage(url) => self.save_page(origin, url).await,
            Action::SaveNote(_) => self.reply_unimplemented(origin, "save note").await,
            Action::Command(command) => self.run_command(origin, command).await,
            Action::Unknown => {
                self.send_text(origin, messages::UNKNOWN_COMMAND, "unknown command")
                    .await
            }
        }
    }

    async fn run_command(&self, origin: &Origin, command: Command) -> Result<()> {
        let name = command.name();
        match command {
            Command::Start => {
                self.send_menu(origin, &messages::hello(), MenuLayer::Start, name)
                    .await
            }
            Command::ManageLinks => {
                self.send_menu(origin, labels::MANAGE_LINKS, MenuLayer::ManageLinks, name)
                    .await
            }
            Command::ManageNotes => {
                self.send_menu(origin, labels::MANAGE_NOTES, MenuLayer::ManageNotes, name)
                    .await
            }
            Command::HelpSection => {
                self.send_menu(origin, labels::HELP_SECTION, MenuLayer::Help, name)
                    .await
            }
            Command::ChatInfo => {
                self.send_menu(origin, labels::CHAT_INFO, MenuLayer::ChatData, name)
                    .await
            }
            Command::Back => {
                self.send_menu(origin, messages::BACK_TO_START, MenuLayer::Start, name)
                    .await
            }
            Command::RandomLink => self.send_random(origin).await,
            Command::Help => self.send_text(origin, messages::HELP, name).await,
            Command::Contacts => self.send_text(origin, messages::CONTACTS, name).await,
            Command::GetChatId => {
                self.send_text(origin, &origin.chat_id.to_string(), name)
                    .await
            }
            Command::GetUsername => match origin.username.as_deref() {
                Some(username) if !username.is_empty() => {
                    self.send_text(origin, username, name).await
                }
                _ => self.send_text(origin, messages::NO_USERNAME, name).await,
            },
            Command::ListLinks
            | Command::DeleteLink
            | Command::RandomNote
            | Command::ListNotes
            | Command::DeleteNote => self.reply_unimplemented(origin, name).await,
        }
    }

    async fn save_page(&self, origin: &Origin, url: String) -> Result<()> {
        const COMMAND: &str = "save page";

        let item = Item::page(origin.owner_key(), url);
        let exists = self
            .storage
            .is_exists(&item)
            .await
            .map_err(|e| Error::command(COMMAND, e))?;
        if exists {
            return self.send_text(origin, messages::ALREADY_EXISTS, COMMAND).await;
        }

        self.storage
            .save(&item)
            .await
            .map_err(|e| Error::command(COMMAND, e))?;
        self.send_text(origin, messages::SAVED, COMMAND).await
    }

    async fn send_random(&self, origin: &Origin) -> Result<()> {
        const COMMAND: &str = "random link";

        let item = match self.storage.pick_random(&origin.owner_key()).await {
            Ok(item) => item,
            Err(storage::Error::NoItems) => {
                return self.send_text(origin, messages::NO_SAVED_ITEMS, COMMAND).await;
            }
            Err(e) => return Err(Error::command(COMMAND, e)),
        };

        // Deliver first; the item is only discarded once the send succeeded.
        self.send_text(origin, &item.body, COMMAND).await?;

        match self.storage.remove(&item).await {
            Ok(()) => Ok(()),
            Err(storage::Error::NotFound) => {
                // The user already has their item; an item that vanished in
                // the meantime is not their problem.
                warn!(owner = %item.owner, "picked item was already gone at removal");
                Ok(())
            }
            Err(e) => Err(Error::command(COMMAND, e)),
        }
    }

    async fn reply_unimplemented(&self, origin: &Origin, command: &'static str) -> Result<()> {
        self.send_text(origin, &messages::unimplemented(command), command)
            .await
    }

    async fn send_text(&self, origin: &Origin, text: &str, command: &'static str) -> Result<()> {
        self.responder
            .send_text(origin.chat_id, text)
            .await
            .map_err(|e| Error::command(command, e))
    }

    async fn send_menu(
        &self,
        origin: &Origin,
        text: &str,
        layer: MenuLayer,
        command: &'static str,
    ) -> Result<()> {
        self.responder
            .send_menu(origin.chat_id, text, layer)
            .await
            .map_err(|e| Error::command(command, e))
    }
}

#[async_trait]
impl EventProcessor for Processor {
    async fn process(&self, event: &Event) -> anyhow::Result<()> {
        self.handle(event).await.map_err(Into::into)
    }
}
