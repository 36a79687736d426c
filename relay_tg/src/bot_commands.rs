use teloxide::utils::command::BotCommands;

/// Slash commands understood by the bot. Orders are plain text, not commands.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Order Relay Commands:")]
pub enum BotCommand {
    #[command(description = "Show how to place an order")]
    Start,

    #[command(description = "Show help message")]
    Help,
}

impl BotCommand {
    pub fn usage() -> String {
        format!("Send orders as plain text: <buy|sell> <symbol> <quantity>\nExample: buy tcs 10\n\n{}", Self::descriptions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(BotCommand::parse("/start", "relay_bot").unwrap(), BotCommand::Start);
        assert_eq!(BotCommand::parse("/help", "relay_bot").unwrap(), BotCommand::Help);
        assert!(BotCommand::parse("/buy tcs 10", "relay_bot").is_err());
        assert!(BotCommand::parse("buy tcs 10", "relay_bot").is_err());
    }

    #[test]
    fn test_usage_lists_format_and_commands() {
        let usage = BotCommand::usage();
        assert!(usage.contains("<buy|sell> <symbol> <quantity>"));
        assert!(usage.contains("/help"));
    }
}
