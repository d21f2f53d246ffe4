use readstash_events::menu::labels;

/// Every fixed command the bot understands.
///
/// Each entry is reachable two ways: as a typed slash command and as the
/// matching menu-button label (buttons just echo their label text back).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    ManageLinks,
    ManageNotes,
    HelpSection,
    ChatInfo,
    RandomLink,
    ListLinks,
    DeleteLink,
    Help,
    Contacts,
    RandomNote,
    ListNotes,
    DeleteNote,
    GetChatId,
    GetUsername,
    Back,
}

impl Command {
    /// Look up trimmed text in the command table.
    pub fn parse(text: &str) -> Option<Self> {
        let command = match text {
            "/start" => Self::Start,
            "/managelinks" | labels::MANAGE_LINKS => Self::ManageLinks,
            "/managenotes" | labels::MANAGE_NOTES => Self::ManageNotes,
            "/helpsection" | labels::HELP_SECTION => Self::HelpSection,
            "/chatinfo" | labels::CHAT_INFO => Self::ChatInfo,
            "/rndlink" | labels::RANDOM_LINK => Self::RandomLink,
            "/listlinks" | labels::LIST_LINKS => Self::ListLinks,
            "/deletelink" | labels::DELETE_LINK => Self::DeleteLink,
            "/help" | labels::HELP => Self::Help,
            "/contacts" | labels::CONTACTS => Self::Contacts,
            "/rndnote" | labels::RANDOM_NOTE => Self::RandomNote,
            "/listnotes" | labels::LIST_NOTES => Self::ListNotes,
            "/deletenote" | labels::DELETE_NOTE => Self::DeleteNote,
            "/getchatid" | labels::GET_CHAT_ID => Self::GetChatId,
            "/getusername" | labels::GET_USERNAME => Self::GetUsername,
            "/back" | labels::BACK => Self::Back,
            _ => return None,
        };
        Some(command)
    }

    /// Short name used in logs and error contexts.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::ManageLinks => "manage links",
            Self::ManageNotes => "manage notes",
            Self::HelpSection => "help section",
            Self::ChatInfo => "chat info",
            Self::RandomLink => "random link",
            Self::ListLinks => "list links",
            Self::DeleteLink => "delete link",
            Self::Help => "help",
            Self::Contacts => "contacts",
            Self::RandomNote => "random note",
            Self::ListNotes => "list notes",
            Self::DeleteNote => "delete note",
            Self::GetChatId => "get chat id",
            Self::GetUsername => "get username",
            Self::Back => "back",
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_command_and_label_are_aliases() {
        assert_eq!(Command::parse("/rndlink"), Some(Command::RandomLink));
        assert_eq!(
            Command::parse(labels::RANDOM_LINK),
            Some(Command::RandomLink)
        );
    }

    #[test]
    fn unknown_text_is_not_a_command() {
        assert_eq!(Command::parse("asdf123"), None);
        assert_eq!(Command::parse("/unknown"), None);
        // The table is verbatim; no case folding.
        assert_eq!(Command::parse("/START"), None);
    }
}
