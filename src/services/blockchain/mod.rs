//! Blockchain client interfaces and implementations.
//!
//! Provides the event observation surface of the crate. Includes:
//!
//! - Generic one-shot client trait
//! - The EVM client with live subscription support
//! - Subscription stream handles with per-subscription cancellation
//! - The WebSocket transport implementation
//! - Error handling for client and transport operations

mod client;
mod clients;
mod error;
mod subscription;
mod transports;

pub use client::BlockChainClient;
pub use clients::EvmClient;
pub use error::ClientError;
pub use subscription::{PayloadDecoder, Subscription};
pub use transports::{
	BlockchainTransport, BoxError, RawSubscription, SubscriptionTransport, TransportError,
	WebSocketConnection, WsConfig, WsSink, WsTransportClient,
};
