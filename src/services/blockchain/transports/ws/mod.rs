//! WebSocket transport for blockchain interactions.

mod config;
mod connection;
mod transport;

pub use config::WsConfig;
pub use connection::{WebSocketConnection, WsSink};
pub use transport::WsTransportClient;
