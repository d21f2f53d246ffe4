use teloxide::types::{KeyboardButton, KeyboardMarkup};

use readstash_events::menu::{MenuLayer, labels};

/// Reply keyboard shown for a menu layer.
///
/// Layouts mirror the menu tree: the start layer branches into the two
/// management layers plus help and chat data, and every sub-layer carries a
/// back button.
pub fn markup_for(layer: MenuLayer) -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = match layer {
        MenuLayer::Start => vec![
            vec![button(labels::MANAGE_LINKS), button(labels::MANAGE_NOTES)],
            vec![button(labels::HELP_SECTION), button(labels::CHAT_INFO)],
        ],
        MenuLayer::ManageLinks => vec![
            vec![button(labels::RANDOM_LINK), button(labels::LIST_LINKS)],
            vec![button(labels::DELETE_LINK), button(labels::BACK)],
        ],
        MenuLayer::ManageNotes => vec![
            vec![button(labels::RANDOM_NOTE), button(labels::LIST_NOTES)],
            vec![button(labels::DELETE_NOTE), button(labels::BACK)],
        ],
        MenuLayer::Help => vec![
            vec![button(labels::HELP), button(labels::CONTACTS)],
            vec![button(labels::BACK)],
        ],
        MenuLayer::ChatData => vec![
            vec![button(labels::GET_CHAT_ID), button(labels::GET_USERNAME)],
            vec![button(labels::BACK)],
        ],
    };
    KeyboardMarkup::new(rows)
}

fn button(label: &str) -> KeyboardButton {
    KeyboardButton::new(label)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn labels_of(markup: &KeyboardMarkup) -> Vec<Vec<String>> {
        markup
            .keyboard
            .iter()
            .map(|row| row.iter().map(|b| b.text.clone()).collect())
            .collect()
    }

    #[test]
    fn start_layer_has_no_back_button() {
        let rows = labels_of(&markup_for(MenuLayer::Start));
        assert_eq!(
            rows,
            vec![
                vec![labels::MANAGE_LINKS, labels::MANAGE_NOTES],
                vec![labels::HELP_SECTION, labels::CHAT_INFO],
            ]
        );
    }

    #[test]
    fn every_sub_layer_has_a_back_button() {
        for layer in [
            MenuLayer::ManageLinks,
            MenuLayer::ManageNotes,
            MenuLayer::Help,
            MenuLayer::ChatData,
        ] {
            let rows = labels_of(&markup_for(layer));
            assert!(
                rows.iter().flatten().any(|text| text == labels::BACK),
                "{layer:?} is missing a back button"
            );
        }
    }

    #[test]
    fn manage_links_layout() {
        let rows = labels_of(&markup_for(MenuLayer::ManageLinks));
        assert_eq!(
            rows,
            vec![
                vec![labels::RANDOM_LINK, labels::LIST_LINKS],
                vec![labels::DELETE_LINK, labels::BACK],
            ]
        );
    }
}
