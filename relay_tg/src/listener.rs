use std::sync::Arc;
use std::time::Duration;

use relay_http::DhanClient;
use relay_http::HttpClientConfig;
use teloxide::prelude::*;

use crate::auth::AuthorizedChat;
use crate::bot_commands::BotCommand;
use crate::config::RelayConfig;
use crate::handlers::handle_command;
use crate::handlers::handle_message;
use crate::handlers::is_order_text;

/// Build the trading API client described by the configuration
pub fn build_gateway(config: &RelayConfig) -> relay_http::Result<DhanClient> {
    DhanClient::builder()
        .base_url(&config.dhan_base_url)
        .client_id(&config.dhan_client_id)
        .access_token(&config.dhan_access_token)
        .http_config(HttpClientConfig::with_request_timeout(Duration::from_secs(config.dhan_request_timeout_secs)))
        .build()
}

/// Connect to Telegram and dispatch messages until the process is stopped.
///
/// Messages from one chat are handled in order; different chats may be
/// handled concurrently, which is safe as handlers share no mutable state.
pub async fn start(config: &RelayConfig) -> anyhow::Result<()> {
    let bot = Bot::new(&config.telegram_token);
    let auth = AuthorizedChat::new(config.telegram_channel_id);
    let gateway = Arc::new(build_gateway(config)?);

    tracing::info!(chat_id = config.telegram_channel_id, orders_url = %gateway.orders_url(), "Telegram bot initialised");

    let handler = Update::filter_message()
        .branch(dptree::entry().filter_command::<BotCommand>().endpoint(move |bot: Bot, msg: Message, cmd: BotCommand| async move {
            handle_command(bot, msg, cmd, auth).await
        }))
        .branch(dptree::filter(|msg: Message| is_order_text(&msg)).endpoint(
            move |bot: Bot, msg: Message| {
                let gateway = gateway.clone();
                async move { handle_message(bot, msg, auth, gateway).await }
            },
        ));

    tracing::info!("Starting Telegram bot dispatcher...");
    Dispatcher::builder(bot, handler).enable_ctrlc_handler().build().dispatch().await;

    tracing::info!("Dispatcher stopped");
    Ok(())
}
