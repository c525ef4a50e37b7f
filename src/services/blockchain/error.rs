//! Blockchain client error types.
//!
//! Every failure is reported through exactly one of three kinds, each
//! carrying the operation context it failed in. Errors are surfaced once and
//! never retried or transformed into a different kind.

use thiserror::Error;

use crate::services::blockchain::transports::BoxError;

/// Represents possible errors that can occur during client operations
#[derive(Debug, Error)]
pub enum ClientError {
	/// The endpoint was unreachable or the handshake failed
	///
	/// Raised at construction time only; fatal to that client instance.
	#[error("Connection error: {message}")]
	Connection {
		message: String,
		#[source]
		source: Option<BoxError>,
	},

	/// A live stream failed after registration, or a subscription could not
	/// be set up
	///
	/// Non-fatal to the client; reported once per occurrence. `stream` names
	/// the affected stream, e.g. `newHeads` or `Transfer@0x1234...`.
	#[error("Subscription error ({stream}): {message}")]
	Subscription {
		stream: String,
		message: String,
		#[source]
		source: Option<BoxError>,
	},

	/// A one-shot historical query or lookup failed
	///
	/// Non-fatal to the client; reported once per call. `operation` names
	/// the call and the identifier it was made with.
	#[error("Query error ({operation}): {message}")]
	Query {
		operation: String,
		message: String,
		#[source]
		source: Option<BoxError>,
	},
}

impl ClientError {
	/// Creates a new connection error
	pub fn connection_error(message: impl Into<String>, source: Option<BoxError>) -> Self {
		Self::Connection {
			message: message.into(),
			source,
		}
	}

	/// Creates a new subscription error for the named stream
	pub fn subscription_error(
		stream: impl Into<String>,
		message: impl Into<String>,
		source: Option<BoxError>,
	) -> Self {
		Self::Subscription {
			stream: stream.into(),
			message: message.into(),
			source,
		}
	}

	/// Creates a new query error for the named operation
	pub fn query_error(
		operation: impl Into<String>,
		message: impl Into<String>,
		source: Option<BoxError>,
	) -> Self {
		Self::Query {
			operation: operation.into(),
			message: message.into(),
			source,
		}
	}
}
