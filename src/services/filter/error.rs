//! Filter service error types.

use thiserror::Error;

/// Represents possible errors during ABI event resolution, filter encoding,
/// and log decoding
#[derive(Debug, Error)]
pub enum FilterError {
	/// The named event does not appear in the contract ABI
	#[error("Unknown event '{event}' in contract ABI")]
	UnknownEvent {
		/// The event name that failed to resolve
		event: String,
	},

	/// A filter value could not be encoded into a log topic
	#[error("Cannot encode filter value for parameter '{param}': {message}")]
	InvalidFilterValue {
		/// The event parameter the value was supplied for
		param: String,
		message: String,
	},

	/// A node log did not decode against the event's ABI description
	#[error("Failed to decode '{event}' log: {message}")]
	DecodeError {
		/// The event the log was decoded against
		event: String,
		message: String,
	},
}

impl FilterError {
	pub fn unknown_event(event: impl Into<String>) -> Self {
		Self::UnknownEvent {
			event: event.into(),
		}
	}

	pub fn invalid_filter_value(param: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidFilterValue {
			param: param.into(),
			message: message.into(),
		}
	}

	pub fn decode_error(event: impl Into<String>, message: impl Into<String>) -> Self {
		Self::DecodeError {
			event: event.into(),
			message: message.into(),
		}
	}
}
