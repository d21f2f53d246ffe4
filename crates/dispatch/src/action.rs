use url::Url;

use crate::command::Command;

/// Marker prefix that turns a message into a note submission.
pub const NOTE_PREFIX: &str = "Note";

/// What the dispatcher decided to do with one piece of event text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The text is an absolute URL: save it as a page.
    SavePage(String),
    /// The text starts with the note marker (storage side still a stub).
    SaveNote(String),
    /// A table command, typed or tapped.
    Command(Command),
    /// Nothing we recognize.
    Unknown,
}

/// Classify trimmed event text.
///
/// URLs win over the note marker, which wins over the command table;
/// whatever falls through is unknown.
pub fn classify(text: &str) -> Action {
    let text = text.trim();
    if is_url(text) {
        return Action::SavePage(text.to_owned());
    }
    if text.starts_with(NOTE_PREFIX) {
        return Action::SaveNote(text.to_owned());
    }
    match Command::parse(text) {
        Some(command) => Action::Command(command),
        None => Action::Unknown,
    }
}

/// An absolute URL with a non-empty host; bare words and relative paths do
/// not qualify.
fn is_url(text: &str) -> bool {
    Url::parse(text).is_ok_and(|url| url.has_host())
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use {super::*, readstash_events::menu::labels};

    #[rstest]
    #[case("https://example.com/a", Action::SavePage("https://example.com/a".into()))]
    #[case("http://x.io", Action::SavePage("http://x.io".into()))]
    #[case("  https://x.io  ", Action::SavePage("https://x.io".into()))]
    #[case("Note buy milk", Action::SaveNote("Note buy milk".into()))]
    #[case("/start", Action::Command(Command::Start))]
    #[case("/rndlink", Action::Command(Command::RandomLink))]
    #[case("Back", Action::Command(Command::Back))]
    #[case("asdf123", Action::Unknown)]
    #[case("example.com", Action::Unknown)]
    #[case("/unknowncmd", Action::Unknown)]
    fn classification(#[case] input: &str, #[case] expected: Action) {
        assert_eq!(classify(input), expected);
    }

    #[test]
    fn every_button_label_classifies_as_a_command() {
        for label in [
            labels::MANAGE_LINKS,
            labels::MANAGE_NOTES,
            labels::HELP_SECTION,
            labels::CHAT_INFO,
            labels::RANDOM_LINK,
            labels::LIST_LINKS,
            labels::DELETE_LINK,
            labels::HELP,
            labels::CONTACTS,
            labels::RANDOM_NOTE,
            labels::LIST_NOTES,
            labels::DELETE_NOTE,
            labels::GET_CHAT_ID,
            labels::GET_USERNAME,
            labels::BACK,
        ] {
            assert!(
                matches!(classify(label), Action::Command(_)),
                "label {label:?} fell through the command table"
            );
        }
    }

    #[test]
    fn a_url_inside_a_note_stays_a_note() {
        assert!(matches!(
            classify("Note https://example.com"),
            Action::SaveNote(_)
        ));
    }
}
