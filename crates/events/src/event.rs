/// What an inbound event carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Anything the source produced that is not a plain text message.
    Unknown,
    /// A text message from a chat participant.
    Message,
}

/// A single inbound event pulled from the source.
///
/// Events are immutable and consumed exactly once by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Source-assigned identifier, used by the consumer loop to advance the
    /// poll offset past this event.
    pub id: i64,
    pub kind: EventKind,
    pub text: String,
    pub origin: Origin,
}

/// Sender identity attached to an event.
///
/// Carried opaquely through the consumer loop; only the dispatcher unpacks
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Origin {
    pub chat_id: i64,
    pub user_id: i64,
    pub username: Option<String>,
}

impl Origin {
    /// Stable storage partition key for this sender: the username when one
    /// is set, otherwise the numeric user id.
    pub fn owner_key(&self) -> String {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => self.user_id.to_string(),
        }
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_key_prefers_username() {
        let origin = Origin {
            chat_id: 1,
            user_id: 42,
            username: Some("alice".into()),
        };
        assert_eq!(origin.owner_key(), "alice");
    }

    #[test]
    fn owner_key_falls_back_to_user_id() {
        let origin = Origin {
            chat_id: 1,
            user_id: 42,
            username: None,
        };
        assert_eq!(origin.owner_key(), "42");

        let empty = Origin {
            username: Some(String::new()),
            ..origin
        };
        assert_eq!(empty.owner_key(), "42");
    }
}
