pub mod client;
pub mod dhan;
pub mod errors;
pub mod gateway;

pub use client::HttpClient;
pub use client::HttpClientConfig;
pub use dhan::DhanClient;
pub use errors::HttpError;
pub use errors::Result;
pub use gateway::OrderGateway;
pub use gateway::OrderOutcome;
