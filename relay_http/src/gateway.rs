use std::future::Future;

use relay_types::Command;
use serde_json::Value;

use crate::errors::Result;

/// Interpreted response of an order placement call.
///
/// The body is kept as returned by the trading API; only its `status`
/// field decides the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// `status` was `"success"`
    Placed(Value),
    /// Any other body, including one with no `status` at all
    Failed(Value),
}

impl OrderOutcome {
    pub fn from_body(body: Value) -> Self {
        if body.get("status").and_then(Value::as_str) == Some("success") {
            OrderOutcome::Placed(body)
        } else {
            OrderOutcome::Failed(body)
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, OrderOutcome::Placed(_))
    }

    pub fn body(&self) -> &Value {
        match self {
            OrderOutcome::Placed(body) | OrderOutcome::Failed(body) => body,
        }
    }
}

/// Something that can place an order for a parsed command
pub trait OrderGateway: Send + Sync {
    /// Submit exactly one order. Implementations must not retry.
    fn place_order(&self, command: &Command) -> impl Future<Output = Result<OrderOutcome>> + Send;
}
