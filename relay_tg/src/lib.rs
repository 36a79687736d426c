//! # relay_tg
//!
//! Telegram side of the order relay: listens to one authorized chat, parses
//! `<buy|sell> <symbol> <quantity>` messages and forwards them to the trading API.

pub mod auth;
pub mod bot_commands;
pub mod config;
pub mod error_handling;
pub mod handlers;
pub mod listener;
pub mod parser;
pub mod reply;
pub mod tracing_setup;

pub use auth::AuthorizedChat;
pub use bot_commands::BotCommand;
pub use config::RelayConfig;
pub use handlers::handle_command;
pub use handlers::handle_message;
pub use handlers::process_message;
pub use parser::ParseError;
pub use parser::parse_command;
