use teloxide::ApiError;
use teloxide::RequestError;
use teloxide::prelude::*;
use teloxide::types::ChatId;

/// Send a reply once. Failures are logged; nothing is retried.
pub async fn send_reply(bot: &Bot, chat_id: ChatId, text: String) -> Result<(), RequestError> {
    match bot.send_message(chat_id, text).await {
        Ok(_) => Ok(()),
        Err(RequestError::Api(ApiError::BotBlocked)) => {
            tracing::warn!("Bot was blocked in chat {chat_id}");
            Ok(())
        }
        Err(RequestError::Api(ApiError::UserDeactivated)) => {
            tracing::warn!("User {chat_id} is deactivated");
            Ok(())
        }
        Err(RequestError::RetryAfter(seconds)) => {
            tracing::warn!("Rate limited by Telegram, reply dropped (retry after {seconds:?})");
            Ok(())
        }
        Err(err) => {
            tracing::error!("Failed to send reply to {chat_id}: {err}");
            Err(err)
        }
    }
}
