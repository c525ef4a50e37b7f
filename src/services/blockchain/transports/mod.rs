//! Network transport implementations for the blockchain client.
//!
//! Provides the transport traits the client is generic over and the
//! WebSocket implementation used against live nodes.

mod error;
mod ws;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::mpsc;

pub use error::{BoxError, TransportError};
pub use ws::{WebSocketConnection, WsConfig, WsSink, WsTransportClient};

/// Base trait for all blockchain transport clients
#[async_trait::async_trait]
pub trait BlockchainTransport: Send + Sync {
	/// Get the current URL being used by the transport
	async fn get_current_url(&self) -> String;

	/// Send a raw JSON-RPC request to the blockchain node
	///
	/// Returns the full response object; callers inspect its `result` and
	/// `error` members.
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize;
}

/// A registered notification stream at the transport level.
///
/// Items are raw notification payloads in node-delivery order. A transport
/// failure is delivered as a single final `Err`, after which the channel
/// closes.
#[derive(Debug)]
pub struct RawSubscription {
	/// The node-assigned subscription id
	pub id: String,
	/// Receiver for notification payloads
	pub rx: mpsc::UnboundedReceiver<Result<Value, TransportError>>,
}

/// Trait for transports that support node-side notification streams.
///
/// Object safe so subscription handles can hold the transport behind a
/// trait object for cancellation.
#[async_trait::async_trait]
pub trait SubscriptionTransport: Send + Sync {
	/// Registers a notification stream with the node
	///
	/// # Arguments
	/// * `params` - `eth_subscribe` parameters (stream kind plus any
	///   narrowing arguments)
	async fn subscribe(&self, params: Value) -> Result<RawSubscription, TransportError>;

	/// Cancels a previously registered notification stream
	///
	/// Returns the node's confirmation value; delivery to the stream stops
	/// as soon as the local route is removed.
	async fn unsubscribe(&self, id: &str) -> Result<bool, TransportError>;
}
