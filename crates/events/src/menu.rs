//! Menu layers and the button labels shown on each of them.
//!
//! Buttons are plain reply-keyboard buttons, so tapping one just sends the
//! label text back as a message. The dispatcher therefore accepts every
//! label as an alias for the matching slash command.

/// The menu context a reply keyboard belongs to.
///
/// Recomputed from the command just executed; never persisted between
/// events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLayer {
    Start,
    ManageLinks,
    ManageNotes,
    Help,
    ChatData,
}

pub mod labels {
    pub const MANAGE_LINKS: &str = "Manage links";
    pub const MANAGE_NOTES: &str = "Manage notes";
    pub const HELP_SECTION: &str = "Help section";
    pub const CHAT_INFO: &str = "Chat info";
    pub const RANDOM_LINK: &str = "Get a random link";
    pub const LIST_LINKS: &str = "List saved links";
    pub const DELETE_LINK: &str = "Delete a link";
    pub const HELP: &str = "Help";
    pub const CONTACTS: &str = "Contacts";
    pub const RANDOM_NOTE: &str = "Get a random note";
    pub const LIST_NOTES: &str = "List saved notes";
    pub const DELETE_NOTE: &str = "Delete a note";
    pub const GET_CHAT_ID: &str = "Get chat ID";
    pub const GET_USERNAME: &str = "Get username";
    pub const BACK: &str = "Back";
}
