use teloxide::types::ChatId;

/// The single chat orders are accepted from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthorizedChat {
    pub chat_id: ChatId,
}

impl AuthorizedChat {
    pub fn new(chat_id: i64) -> Self {
        Self { chat_id: ChatId(chat_id) }
    }

    /// Check if a message's chat is the authorized one
    pub fn is_authorized(&self, chat_id: ChatId) -> bool {
        if chat_id == self.chat_id {
            return true;
        }

        tracing::warn!(chat_id = chat_id.0, "Ignoring message from unauthorized chat");
        false
    }
}
