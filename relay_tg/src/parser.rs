use relay_types::Action;
use relay_types::Command;
use thiserror::Error;

/// Why a message could not be turned into an order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown action '{0}'")]
    InvalidAction(String),

    #[error("expected 3 values (action symbol quantity), got {0}")]
    WrongTokenCount(usize),

    #[error("invalid quantity '{0}': must be a positive whole number")]
    InvalidQuantity(String),
}

/// Parse `<action> <symbol> <quantity>`.
///
/// Token count is checked before the action, and the action before the
/// quantity, so `hold tcs abc` is an invalid action, not a bad quantity.
pub fn parse_command(text: &str) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let [action, symbol, quantity] = tokens.as_slice() else {
        return Err(ParseError::WrongTokenCount(tokens.len()));
    };

    let action = Action::parse(action).ok_or_else(|| ParseError::InvalidAction(action.to_string()))?;

    let quantity = match quantity.parse::<u32>() {
        Ok(0) | Err(_) => return Err(ParseError::InvalidQuantity(quantity.to_string())),
        Ok(quantity) => quantity,
    };

    Ok(Command::new(action, symbol, quantity))
}
