//! WebSocket configuration for the blockchain transport
//!
//! This module provides a configuration for WebSocket connections, including
//! connection and message timeouts and notification buffering.

use std::time::Duration;

/// WebSocket configuration for the blockchain transport
#[derive(Clone, Debug)]
pub struct WsConfig {
	/// Connection timeout for WebSocket connections
	/// How long to wait for the initial connection
	pub connection_timeout: Duration,
	/// Message timeout for WebSocket connections
	/// How long to wait for a response to a request
	pub message_timeout: Duration,
	/// Maximum notifications buffered per subscription id between the node
	/// assigning the id and the local route being registered
	pub unrouted_buffer: usize,
}

impl Default for WsConfig {
	fn default() -> Self {
		Self {
			connection_timeout: Duration::from_secs(10),
			message_timeout: Duration::from_secs(5),
			unrouted_buffer: 64,
		}
	}
}

impl WsConfig {
	/// Creates a new WebSocket configuration with default values
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the connection timeout for the WebSocket configuration
	///
	/// # Arguments
	/// * `connection_timeout` - The connection timeout to set
	///
	/// # Returns
	/// * `WsConfig` - A new WebSocket configuration with the updated connection timeout
	pub fn with_connection_timeout(mut self, connection_timeout: Duration) -> Self {
		self.connection_timeout = connection_timeout;
		self
	}

	/// Sets the message timeout for the WebSocket configuration
	///
	/// # Arguments
	/// * `message_timeout` - The message timeout to set
	///
	/// # Returns
	/// * `WsConfig` - A new WebSocket configuration with the updated message timeout
	pub fn with_message_timeout(mut self, message_timeout: Duration) -> Self {
		self.message_timeout = message_timeout;
		self
	}

	/// Sets the unrouted notification buffer size
	///
	/// # Arguments
	/// * `unrouted_buffer` - The per-subscription buffer cap to set
	///
	/// # Returns
	/// * `WsConfig` - A new WebSocket configuration with the updated buffer cap
	pub fn with_unrouted_buffer(mut self, unrouted_buffer: usize) -> Self {
		self.unrouted_buffer = unrouted_buffer;
		self
	}
}
