//! Transport error types.

use thiserror::Error;

/// Boxed error used as the source of transport failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Represents possible errors at the transport layer
#[derive(Debug, Error)]
pub enum TransportError {
	/// Connection-level failures: unreachable endpoint, handshake failure,
	/// or a broken socket
	#[error("Network error: {message}")]
	Network {
		message: String,
		#[source]
		source: Option<BoxError>,
	},

	/// A request was sent but no response arrived in time
	#[error("Request timeout: {message}")]
	Timeout { message: String },

	/// The node's response could not be interpreted
	#[error("Failed to parse response: {message}")]
	ResponseParse {
		message: String,
		#[source]
		source: Option<BoxError>,
	},
}

impl TransportError {
	/// Creates a new network error
	pub fn network(message: impl Into<String>, source: Option<BoxError>) -> Self {
		Self::Network {
			message: message.into(),
			source,
		}
	}

	/// Creates a new timeout error
	pub fn timeout(message: impl Into<String>) -> Self {
		Self::Timeout {
			message: message.into(),
		}
	}

	/// Creates a new response parse error
	pub fn response_parse(message: impl Into<String>, source: Option<BoxError>) -> Self {
		Self::ResponseParse {
			message: message.into(),
			source,
		}
	}
}
