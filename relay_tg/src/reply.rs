use relay_types::Command;
use serde_json::Value;

pub const INVALID_ACTION_REPLY: &str = "Invalid action. Use 'buy' or 'sell'";

pub fn placed_reply(command: &Command) -> String {
    format!("Order placed: {} {} x {}", command.action, command.symbol, command.quantity)
}

/// Rejection reply carrying the trading API's response verbatim
pub fn failed_reply(body: &Value) -> String {
    format!("Order failed: {body}")
}

pub fn processing_error_reply(err: &dyn std::error::Error) -> String {
    format!("Error processing order: {err}")
}
