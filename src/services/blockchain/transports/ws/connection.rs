//! WebSocket connection state management
//!
//! This module provides functionality for managing WebSocket connection state,
//! including connection health tracking and activity monitoring. The write
//! half of the socket lives here; the read half is owned by the transport's
//! reader task.

use std::time::Instant;

use futures_util::stream::SplitSink;
use tokio::net::TcpStream;
use tokio_tungstenite::{tungstenite::Message, MaybeTlsStream, WebSocketStream};

/// The write half of a WebSocket connection
pub type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// Represents the state of a WebSocket connection
///
/// This struct maintains the outbound half of the socket, connection health
/// status, and the last activity timestamp.
///
/// # Fields
/// * `sink` - The write half of the socket, if connected
/// * `is_healthy` - Whether the connection is considered healthy
/// * `last_activity` - Timestamp of the last activity on the connection
#[derive(Debug)]
pub struct WebSocketConnection {
	pub sink: Option<WsSink>,
	pub is_healthy: bool,
	last_activity: Instant,
}

impl Default for WebSocketConnection {
	/// Creates a new WebSocket connection in a disconnected state
	fn default() -> Self {
		Self {
			sink: None,
			is_healthy: false,
			last_activity: Instant::now(),
		}
	}
}

impl WebSocketConnection {
	/// Checks if the connection is both established and healthy
	///
	/// # Returns
	/// * `bool` - True if the connection is established and healthy
	pub fn is_connected(&self) -> bool {
		self.sink.is_some() && self.is_healthy
	}

	/// Updates the last activity timestamp to the current time
	///
	/// This method should be called whenever there is activity on the
	/// connection to maintain an accurate record of the last interaction.
	pub fn update_activity(&mut self) {
		self.last_activity = Instant::now();
	}

	/// Marks the connection as failed and drops the write half
	pub fn mark_failed(&mut self) {
		self.is_healthy = false;
		self.sink = None;
	}
}
