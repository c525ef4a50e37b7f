//! Subscription stream handles.
//!
//! A [`Subscription`] is the caller-facing side of a live notification
//! stream: a [`futures::Stream`] of decoded payloads in node-delivery order,
//! plus per-subscription cancellation.

use std::{
	pin::Pin,
	sync::Arc,
	task::{Context, Poll},
};

use futures::Stream;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::services::blockchain::{
	transports::{SubscriptionTransport, TransportError},
	ClientError,
};

/// Decodes a raw notification payload into the stream's item type
pub type PayloadDecoder<T> = Box<dyn Fn(Value) -> Result<T, ClientError> + Send + Sync>;

/// A live subscription to a node notification stream.
///
/// Yields one `Ok` item per node-delivered notification, in delivery order.
/// A payload that fails to decode yields one `Err` and the stream continues.
/// A transport failure yields exactly one terminal `Err`, after which the
/// stream ends; the subscription is never re-established by the client.
///
/// Cancellation is per-subscription via [`Subscription::unsubscribe`];
/// dropping the handle stops local delivery without notifying the node, and
/// dropping the whole client tears down every subscription at once.
pub struct Subscription<T> {
	id: String,
	stream_name: String,
	rx: mpsc::UnboundedReceiver<Result<Value, TransportError>>,
	decoder: PayloadDecoder<T>,
	transport: Arc<dyn SubscriptionTransport>,
	terminated: bool,
}

impl<T> Subscription<T> {
	/// Creates a subscription over a raw transport stream
	pub(crate) fn new(
		id: String,
		stream_name: String,
		rx: mpsc::UnboundedReceiver<Result<Value, TransportError>>,
		transport: Arc<dyn SubscriptionTransport>,
		decoder: PayloadDecoder<T>,
	) -> Self {
		Self {
			id,
			stream_name,
			rx,
			decoder,
			transport,
			terminated: false,
		}
	}

	/// The node-assigned subscription id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// The stream this subscription observes, e.g. `newHeads` or
	/// `Transfer@0x1234...`
	pub fn stream_name(&self) -> &str {
		&self.stream_name
	}

	/// Cancels the subscription with the node and closes the stream
	///
	/// # Returns
	/// * `Result<bool, ClientError>` - The node's confirmation value, or a
	///   subscription error naming the stream
	pub async fn unsubscribe(mut self) -> Result<bool, ClientError> {
		self.rx.close();
		self.transport.unsubscribe(&self.id).await.map_err(|e| {
			ClientError::subscription_error(
				&self.stream_name,
				"Failed to cancel subscription",
				Some(e.into()),
			)
		})
	}
}

impl<T> Stream for Subscription<T> {
	type Item = Result<T, ClientError>;

	fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
		let this = self.get_mut();

		if this.terminated {
			return Poll::Ready(None);
		}

		match this.rx.poll_recv(cx) {
			Poll::Ready(Some(Ok(payload))) => Poll::Ready(Some((this.decoder)(payload))),
			Poll::Ready(Some(Err(e))) => {
				// Terminal transport failure: surface once, then end
				this.terminated = true;
				Poll::Ready(Some(Err(ClientError::subscription_error(
					&this.stream_name,
					"Subscription stream failed",
					Some(e.into()),
				))))
			}
			Poll::Ready(None) => Poll::Ready(None),
			Poll::Pending => Poll::Pending,
		}
	}
}

impl<T> std::fmt::Debug for Subscription<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription")
			.field("id", &self.id)
			.field("stream_name", &self.stream_name)
			.field("terminated", &self.terminated)
			.finish()
	}
}
