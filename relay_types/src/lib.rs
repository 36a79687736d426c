use serde::Serialize;

/// Exchange segment every order is routed to
pub const EXCHANGE_SEGMENT: &str = "NSE_EQ";
/// Product type for all relayed orders
pub const PRODUCT_TYPE: &str = "INTRADAY";
pub const ORDER_TYPE: &str = "MARKET";
pub const VALIDITY: &str = "DAY";

/// Side of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
}

impl Action {
    /// Parse an action token, ignoring case
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "buy" => Some(Action::Buy),
            "sell" => Some(Action::Sell),
            _ => None,
        }
    }

    /// Wire value used as the transaction type
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed chat command: `<action> <symbol> <quantity>`.
///
/// Build it with [`Command::new`] so the symbol is upper case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub symbol: String,
    pub quantity: u32,
}

impl Command {
    /// Create a command, normalising the symbol to upper case
    pub fn new(action: Action, symbol: &str, quantity: u32) -> Self {
        Self { action, symbol: symbol.to_uppercase(), quantity }
    }
}

/// Order placement payload sent to the trading API.
///
/// Everything except side, symbol and quantity is fixed: a market intraday
/// order on the NSE equity segment, valid for the day, with the optional
/// price and bracket fields zeroed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub transaction_type: Action,
    pub exchange_segment: &'static str,
    pub product_type: &'static str,
    pub order_type: &'static str,
    pub validity: &'static str,
    pub trading_symbol: String,
    pub quantity: u32,
    pub price: u32,
    pub disclosed_quantity: u32,
    pub after_market_order: bool,
    pub bo_profit_value: u32,
    pub bo_stop_loss_value: u32,
}

impl OrderRequest {
    pub fn from_command(command: &Command) -> Self {
        Self {
            transaction_type: command.action,
            exchange_segment: EXCHANGE_SEGMENT,
            product_type: PRODUCT_TYPE,
            order_type: ORDER_TYPE,
            validity: VALIDITY,
            trading_symbol: command.symbol.clone(),
            quantity: command.quantity,
            price: 0,
            disclosed_quantity: 0,
            after_market_order: false,
            bo_profit_value: 0,
            bo_stop_loss_value: 0,
        }
    }
}
