//! Reply copy sent back to the chat.

pub const HELP: &str = "\
I keep links and notes for you.

Send me a link and I will stash the page it points to.
Start a message with \"Note\" to stash it as a note.

Ask for a random saved link with /rndlink or the menu button.
Careful: once delivered, the link is removed from your stash.";

pub const GREETING: &str = "Hi there! I am your read stash.";

pub const UNKNOWN_COMMAND: &str = "I don't know that command. Try /help.";
pub const NO_SAVED_ITEMS: &str = "You have nothing saved yet.";
pub const SAVED: &str = "Saved.";
pub const ALREADY_EXISTS: &str = "You already have that one saved.";
pub const NO_USERNAME: &str = "You have no username set.";
pub const BACK_TO_START: &str = "Back to the main menu.";
pub const CONTACTS: &str =
    "Feedback and bug reports: https://github.com/readstash-org/readstash/issues";

/// Greeting for the start command; includes the full help text.
pub fn hello() -> String {
    format!("{GREETING}\n\n{HELP}")
}

/// Stable reply for commands that are wired into the menu but not built
/// yet.
pub fn unimplemented(command: &str) -> String {
    format!("{command}: not implemented yet")
}
