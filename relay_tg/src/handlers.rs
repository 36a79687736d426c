use std::sync::Arc;

use relay_http::OrderGateway;
use relay_http::OrderOutcome;
use teloxide::prelude::*;
use teloxide::types::ChatId;

use crate::auth::AuthorizedChat;
use crate::bot_commands::BotCommand;
use crate::error_handling::send_reply;
use crate::parser::ParseError;
use crate::parser::parse_command;
use crate::reply;

/// Run one message through parse, order placement and reply formatting.
///
/// Returns the reply to send, or `None` when the message is dropped silently
/// (unauthorized chat). Every failure ends up as reply text.
pub async fn process_message<G: OrderGateway>(chat_id: ChatId, text: &str, auth: &AuthorizedChat, gateway: &G) -> Option<String> {
    if !auth.is_authorized(chat_id) {
        return None;
    }

    let command = match parse_command(text.trim()) {
        Ok(command) => command,
        Err(ParseError::InvalidAction(action)) => {
            tracing::info!(%action, "Rejected message with unknown action");
            return Some(reply::INVALID_ACTION_REPLY.to_string());
        }
        Err(err) => {
            tracing::info!("Rejected malformed message: {err}");
            return Some(reply::processing_error_reply(&err));
        }
    };

    let text = match gateway.place_order(&command).await {
        Ok(OrderOutcome::Placed(_)) => reply::placed_reply(&command),
        Ok(OrderOutcome::Failed(body)) => reply::failed_reply(&body),
        Err(err) => {
            tracing::error!(symbol = %command.symbol, "Order submission failed: {err}");
            reply::processing_error_reply(&err)
        }
    };

    Some(text)
}

/// Plain text that is not a slash command. Only these reach the order pipeline.
pub fn is_order_text(msg: &Message) -> bool {
    msg.text().is_some_and(|text| !text.starts_with('/'))
}

/// Handle a plain text message from Telegram
pub async fn handle_message<G: OrderGateway>(bot: Bot, msg: Message, auth: AuthorizedChat, gateway: Arc<G>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if let Some(reply) = process_message(msg.chat.id, text, &auth, gateway.as_ref()).await {
        send_reply(&bot, msg.chat.id, reply).await?;
    }

    Ok(())
}

/// Handle `/start` and `/help`
pub async fn handle_command(bot: Bot, msg: Message, cmd: BotCommand, auth: AuthorizedChat) -> ResponseResult<()> {
    if !auth.is_authorized(msg.chat.id) {
        return Ok(());
    }

    match cmd {
        BotCommand::Start | BotCommand::Help => send_reply(&bot, msg.chat.id, BotCommand::usage()).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use relay_http::HttpError;
    use relay_http::Result;
    use relay_types::Action;
    use relay_types::Command;
    use serde_json::Value;
    use serde_json::json;

    use super::*;

    const CHAT: ChatId = ChatId(-1001234567890);

    enum Response {
        Body(Value),
        Broken,
    }

    /// Gateway that records every order instead of sending it
    struct RecordingGateway {
        response: Response,
        orders: Mutex<Vec<Command>>,
    }

    impl RecordingGateway {
        fn returning(body: Value) -> Self {
            Self { response: Response::Body(body), orders: Mutex::new(Vec::new()) }
        }

        fn broken() -> Self {
            Self { response: Response::Broken, orders: Mutex::new(Vec::new()) }
        }

        fn orders(&self) -> Vec<Command> {
            self.orders.lock().unwrap().clone()
        }
    }

    impl OrderGateway for RecordingGateway {
        async fn place_order(&self, command: &Command) -> Result<OrderOutcome> {
            self.orders.lock().unwrap().push(command.clone());
            match &self.response {
                Response::Body(body) => Ok(OrderOutcome::from_body(body.clone())),
                Response::Broken => Err(HttpError::InvalidResponse("connection reset".to_string())),
            }
        }
    }

    fn auth() -> AuthorizedChat {
        AuthorizedChat::new(CHAT.0)
    }

    fn message(content: Value) -> Message {
        let mut update = json!({
            "message_id": 7,
            "date": 1700000000,
            "chat": {"id": CHAT.0, "type": "supergroup", "title": "orders"},
            "from": {"id": 1001, "is_bot": false, "first_name": "Trader"}
        });
        if let (Some(fields), Some(extra)) = (update.as_object_mut(), content.as_object()) {
            fields.extend(extra.clone());
        }
        serde_json::from_value(update).unwrap()
    }

    #[test]
    fn test_plain_text_is_order_text() {
        assert!(is_order_text(&message(json!({"text": "buy tcs 10"}))));
    }

    #[test]
    fn test_slash_commands_are_not_order_text() {
        for text in ["/buy tcs 10", "/unknown", "/start@otherbot", "/help"] {
            assert!(!is_order_text(&message(json!({ "text": text }))), "{text:?} routed to orders");
        }
    }

    #[test]
    fn test_captioned_photo_is_not_order_text() {
        let photo = message(json!({
            "photo": [{"file_id": "AgADBAAD", "file_unique_id": "AQADBAAD", "width": 90, "height": 90, "file_size": 1024}],
            "caption": "buy tcs 10"
        }));

        assert!(!is_order_text(&photo));
    }

    #[tokio::test]
    async fn test_unauthorized_chat_is_dropped() {
        let gateway = RecordingGateway::returning(json!({"status": "success"}));

        let reply = process_message(ChatId(42), "buy tcs 10", &auth(), &gateway).await;

        assert_eq!(reply, None);
        assert!(gateway.orders().is_empty());
    }

    #[tokio::test]
    async fn test_successful_order() {
        let gateway = RecordingGateway::returning(json!({"status": "success"}));

        let reply = process_message(CHAT, "buy tcs 10", &auth(), &gateway).await;

        assert_eq!(reply.as_deref(), Some("Order placed: BUY TCS x 10"));
        assert_eq!(gateway.orders(), vec![Command::new(Action::Buy, "TCS", 10)]);
    }

    #[tokio::test]
    async fn test_rejected_order() {
        let gateway = RecordingGateway::returning(json!({"status": "rejected", "reason": "insufficient funds"}));

        let reply = process_message(CHAT, "sell infy 5", &auth(), &gateway).await.unwrap();

        assert!(reply.starts_with("Order failed: "));
        assert!(reply.contains("insufficient funds"));
        assert_eq!(gateway.orders().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_action_places_no_order() {
        let gateway = RecordingGateway::returning(json!({"status": "success"}));

        let reply = process_message(CHAT, "hold tcs 10", &auth(), &gateway).await;

        assert_eq!(reply.as_deref(), Some("Invalid action. Use 'buy' or 'sell'"));
        assert!(gateway.orders().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_input_places_no_order() {
        let gateway = RecordingGateway::returning(json!({"status": "success"}));

        for text in ["buy tcs", "buy tcs 10 extra", "sell INFY abc"] {
            let reply = process_message(CHAT, text, &auth(), &gateway).await.unwrap();
            assert!(reply.starts_with("Error processing order: "), "unexpected reply for {text:?}: {reply}");
        }

        assert!(gateway.orders().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_is_reported() {
        let gateway = RecordingGateway::broken();

        let reply = process_message(CHAT, "buy tcs 10", &auth(), &gateway).await;

        assert_eq!(reply.as_deref(), Some("Error processing order: Invalid response: connection reset"));
    }

    #[tokio::test]
    async fn test_duplicate_messages_place_duplicate_orders() {
        let gateway = RecordingGateway::returning(json!({"status": "success"}));

        process_message(CHAT, "buy tcs 10", &auth(), &gateway).await;
        process_message(CHAT, "buy tcs 10", &auth(), &gateway).await;

        assert_eq!(gateway.orders().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_does_not_affect_next_message() {
        let gateway = RecordingGateway::returning(json!({"status": "success"}));

        let first = process_message(CHAT, "buy", &auth(), &gateway).await.unwrap();
        let second = process_message(CHAT, "sell wipro 3", &auth(), &gateway).await.unwrap();

        assert!(first.starts_with("Error processing order: "));
        assert_eq!(second, "Order placed: SELL WIPRO x 3");
    }
}
