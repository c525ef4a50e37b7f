//! WebSocket transport implementation for blockchain interactions.
//!
//! This module provides a WebSocket client for talking to a blockchain node,
//! multiplexing one-shot JSON-RPC requests and node-pushed subscription
//! notifications over a single connection. A background reader task matches
//! responses to requests by id and routes notifications to their streams by
//! subscription id.
//!
//! The transport holds exactly one connection for its lifetime. There is no
//! rotation, retry, or reconnection; when the connection fails, every pending
//! request and every active subscription is failed exactly once and the
//! transport stays unusable.

use std::{
	collections::{HashMap, VecDeque},
	sync::{
		atomic::{AtomicU64, Ordering},
		Arc,
	},
};

use futures_util::{stream::SplitStream, SinkExt, StreamExt};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::{
	net::TcpStream,
	sync::{mpsc, oneshot, Mutex},
	task::JoinHandle,
	time::timeout,
};
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use url::Url;

use crate::services::blockchain::transports::{
	ws::{config::WsConfig, connection::WebSocketConnection},
	BlockchainTransport, RawSubscription, SubscriptionTransport, TransportError,
};

/// The read half of a WebSocket connection, owned by the reader task
type WsSource = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;

type NotificationSender = mpsc::UnboundedSender<Result<Value, TransportError>>;
type PendingRequests = Arc<Mutex<HashMap<u64, oneshot::Sender<Value>>>>;

/// Routing state for node-pushed notifications
#[derive(Debug, Default)]
struct SubscriptionRoutes {
	/// Registered streams by subscription id
	active: HashMap<String, NotificationSender>,
	/// Notifications that arrived before their stream was registered,
	/// preserved in arrival order
	unrouted: HashMap<String, VecDeque<Value>>,
}

/// Aborts the reader task when the last transport clone is dropped
#[derive(Debug)]
struct ReaderGuard(JoinHandle<()>);

impl Drop for ReaderGuard {
	fn drop(&mut self) {
		self.0.abort();
	}
}

/// WebSocket transport client for blockchain interactions
///
/// The client is thread-safe and can be cloned and shared across tasks;
/// clones share the single underlying connection. Independent subscriptions
/// do not block each other: notification routing is per-subscription-id and
/// request/response matching is per-request-id.
#[derive(Clone, Debug)]
pub struct WsTransportClient {
	/// WebSocket connection state and the outbound half of the socket
	pub connection: Arc<Mutex<WebSocketConnection>>,
	/// Requests awaiting their response, by request id
	pending: PendingRequests,
	/// Notification routing state
	routes: Arc<Mutex<SubscriptionRoutes>>,
	/// Counter for generating unique request IDs
	request_id_counter: Arc<AtomicU64>,
	/// Configuration settings for the connection
	config: WsConfig,
	/// The endpoint this transport is connected to
	url: String,
	/// Keeps the reader task alive for the lifetime of the transport
	_reader: Arc<ReaderGuard>,
}

impl WsTransportClient {
	/// Creates a new WebSocket transport client connected to the given
	/// endpoint
	///
	/// The connection is established here; an unreachable endpoint or a
	/// failed handshake surfaces immediately rather than on first use.
	///
	/// # Arguments
	/// * `url` - The `ws://` or `wss://` endpoint to connect to
	/// * `config` - Optional connection settings; defaults apply when `None`
	///
	/// # Returns
	/// * `Result<Self, TransportError>` - A connected client or the
	///   connection error
	pub async fn new(url: &str, config: Option<WsConfig>) -> Result<Self, TransportError> {
		let config = config.unwrap_or_default();

		let parsed = Url::parse(url)
			.map_err(|e| TransportError::network(format!("Invalid WebSocket URL: {}", e), None))?;
		if parsed.scheme() != "ws" && parsed.scheme() != "wss" {
			return Err(TransportError::network(
				format!("Unsupported URL scheme: {}", parsed.scheme()),
				None,
			));
		}

		let (stream, _) = match timeout(config.connection_timeout, connect_async(url)).await {
			Ok(Ok(connected)) => connected,
			Ok(Err(e)) => {
				return Err(TransportError::network(
					format!("Failed to connect to {}", url),
					Some(e.into()),
				))
			}
			Err(_) => {
				return Err(TransportError::timeout(format!(
					"Connection to {} timed out",
					url
				)))
			}
		};

		let (sink, source) = stream.split();

		let mut state = WebSocketConnection::default();
		state.sink = Some(sink);
		state.is_healthy = true;

		let connection = Arc::new(Mutex::new(state));
		let pending: PendingRequests = Arc::new(Mutex::new(HashMap::new()));
		let routes = Arc::new(Mutex::new(SubscriptionRoutes::default()));

		let reader = tokio::spawn(run_reader(
			source,
			connection.clone(),
			pending.clone(),
			routes.clone(),
			config.unrouted_buffer,
		));

		Ok(Self {
			connection,
			pending,
			routes,
			request_id_counter: Arc::new(AtomicU64::new(1)),
			config,
			url: url.to_string(),
			_reader: Arc::new(ReaderGuard(reader)),
		})
	}

	/// Whether the underlying connection is currently usable
	pub async fn is_connected(&self) -> bool {
		self.connection.lock().await.is_connected()
	}

	/// Sends a JSON-RPC request and awaits its response
	///
	/// This method handles:
	/// - Connection state verification
	/// - Request formatting with a unique request id
	/// - Message sending
	/// - Response matching by id, bounded by the message timeout
	///
	/// # Arguments
	/// * `method` - The RPC method to call
	/// * `params` - Optional parameters for the method call
	///
	/// # Returns
	/// * `Result<Value, TransportError>` - The full JSON-RPC response object
	///   or a transport error
	async fn request(&self, method: &str, params: Option<Value>) -> Result<Value, TransportError> {
		let request_id = self.request_id_counter.fetch_add(1, Ordering::SeqCst);
		let request_body = json!({
			"jsonrpc": "2.0",
			"id": request_id,
			"method": method,
			"params": params,
		});

		let (response_tx, response_rx) = oneshot::channel();
		self.pending.lock().await.insert(request_id, response_tx);

		{
			let mut connection = self.connection.lock().await;
			if !connection.is_connected() {
				drop(connection);
				self.pending.lock().await.remove(&request_id);
				return Err(TransportError::network("Not connected", None));
			}
			connection.update_activity();

			let send_result = match connection.sink.as_mut() {
				Some(sink) => {
					sink.send(Message::Text(request_body.to_string().into()))
						.await
				}
				None => {
					drop(connection);
					self.pending.lock().await.remove(&request_id);
					return Err(TransportError::network("Not connected", None));
				}
			};

			if let Err(e) = send_result {
				connection.mark_failed();
				drop(connection);
				self.pending.lock().await.remove(&request_id);
				return Err(TransportError::network(
					"Failed to send request",
					Some(e.into()),
				));
			}
		}

		match timeout(self.config.message_timeout, response_rx).await {
			Ok(Ok(response)) => Ok(response),
			Ok(Err(_)) => Err(TransportError::network(
				"Connection closed while awaiting response",
				None,
			)),
			Err(_) => {
				self.pending.lock().await.remove(&request_id);
				Err(TransportError::timeout(format!(
					"No response to {} within {:?}",
					method, self.config.message_timeout
				)))
			}
		}
	}
}

#[async_trait::async_trait]
impl BlockchainTransport for WsTransportClient {
	/// Retrieves the endpoint URL this transport is connected to
	async fn get_current_url(&self) -> String {
		self.url.clone()
	}

	/// Sends a JSON-RPC request to the blockchain node via WebSocket
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		self.request(method, params.map(|p| p.into())).await
	}
}

#[async_trait::async_trait]
impl SubscriptionTransport for WsTransportClient {
	/// Registers a notification stream with the node via `eth_subscribe`
	///
	/// Notifications the node pushes between assigning the subscription id
	/// and this method registering the route are buffered by the reader task
	/// and flushed into the stream first, preserving arrival order.
	async fn subscribe(&self, params: Value) -> Result<RawSubscription, TransportError> {
		let response = self.request("eth_subscribe", Some(params)).await?;
		if let Some(error) = response.get("error") {
			return Err(TransportError::response_parse(
				format!("eth_subscribe rejected: {}", error),
				None,
			));
		}

		let id = response
			.get("result")
			.and_then(Value::as_str)
			.ok_or_else(|| {
				TransportError::response_parse("eth_subscribe returned no subscription id", None)
			})?
			.to_string();

		let (tx, rx) = mpsc::unbounded_channel();

		{
			let mut routes = self.routes.lock().await;
			if let Some(buffered) = routes.unrouted.remove(&id) {
				for payload in buffered {
					let _ = tx.send(Ok(payload));
				}
			}
			routes.active.insert(id.clone(), tx.clone());
		}

		// The connection may have failed between the node assigning the id
		// and the route existing; the reader's shutdown cannot have seen the
		// route, so the terminal error is delivered here instead.
		if !self.connection.lock().await.is_connected() {
			let mut routes = self.routes.lock().await;
			if routes.active.remove(&id).is_some() {
				let _ = tx.send(Err(TransportError::network("Not connected", None)));
			}
		}

		Ok(RawSubscription { id, rx })
	}

	/// Cancels a notification stream via `eth_unsubscribe`
	///
	/// The local route is removed before the node confirms, so no further
	/// notifications reach the stream even if some are already in flight.
	async fn unsubscribe(&self, id: &str) -> Result<bool, TransportError> {
		{
			let mut routes = self.routes.lock().await;
			routes.active.remove(id);
			routes.unrouted.remove(id);
		}

		let response = self.request("eth_unsubscribe", Some(json!([id]))).await?;
		if let Some(error) = response.get("error") {
			return Err(TransportError::response_parse(
				format!("eth_unsubscribe rejected: {}", error),
				None,
			));
		}

		Ok(response
			.get("result")
			.and_then(Value::as_bool)
			.unwrap_or(false))
	}
}

/// Drives the read half of the connection until it fails or closes
///
/// Each inbound text frame is either a subscription notification (routed by
/// subscription id) or a request response (matched by request id). Pings are
/// answered inline. When the loop ends, [`shutdown`] fails everything that is
/// still waiting.
async fn run_reader(
	mut source: WsSource,
	connection: Arc<Mutex<WebSocketConnection>>,
	pending: PendingRequests,
	routes: Arc<Mutex<SubscriptionRoutes>>,
	unrouted_buffer: usize,
) {
	let failure = loop {
		match source.next().await {
			Some(Ok(Message::Text(text))) => {
				dispatch_message(text.as_str(), &pending, &routes, unrouted_buffer).await;
			}
			Some(Ok(Message::Ping(data))) => {
				let mut connection = connection.lock().await;
				let send_result = match connection.sink.as_mut() {
					Some(sink) => sink.send(Message::Pong(data)).await,
					None => break TransportError::network("Connection closed locally", None),
				};
				if let Err(e) = send_result {
					break TransportError::network("Failed to send pong", Some(e.into()));
				}
			}
			Some(Ok(Message::Close(_))) | None => {
				break TransportError::network("Connection closed by remote", None);
			}
			// Binary, pong, and raw frames carry nothing for this protocol
			Some(Ok(_)) => {}
			Some(Err(e)) => {
				break TransportError::network("WebSocket stream error", Some(e.into()));
			}
		}
	};

	shutdown(failure, &connection, &pending, &routes).await;
}

/// Routes one inbound text frame
async fn dispatch_message(
	text: &str,
	pending: &PendingRequests,
	routes: &Mutex<SubscriptionRoutes>,
	unrouted_buffer: usize,
) {
	let message: Value = match serde_json::from_str(text) {
		Ok(message) => message,
		Err(e) => {
			tracing::warn!("Discarding unparseable message: {}", e);
			return;
		}
	};

	if message.get("method").and_then(Value::as_str) == Some("eth_subscription") {
		let Some(params) = message.get("params") else {
			tracing::warn!("Discarding notification without params");
			return;
		};
		let (id, result) = match (
			params.get("subscription").and_then(Value::as_str),
			params.get("result"),
		) {
			(Some(id), Some(result)) => (id, result),
			_ => {
				tracing::warn!("Discarding malformed notification");
				return;
			}
		};
		route_notification(id, result.clone(), routes, unrouted_buffer).await;
		return;
	}

	if let Some(request_id) = message.get("id").and_then(Value::as_u64) {
		if let Some(sender) = pending.lock().await.remove(&request_id) {
			// The requester may have timed out and gone away
			let _ = sender.send(message);
		}
		return;
	}

	tracing::debug!("Ignoring message with neither notification nor response shape");
}

/// Delivers a notification to its stream, or buffers it when the stream is
/// not registered yet
async fn route_notification(
	id: &str,
	payload: Value,
	routes: &Mutex<SubscriptionRoutes>,
	unrouted_buffer: usize,
) {
	let mut routes = routes.lock().await;

	if let Some(sender) = routes.active.get(id) {
		if sender.send(Ok(payload)).is_err() {
			// Receiver dropped; stop delivering to it
			routes.active.remove(id);
		}
		return;
	}

	let buffered = routes.unrouted.entry(id.to_string()).or_default();
	if buffered.len() >= unrouted_buffer {
		tracing::warn!(
			subscription = id,
			"Unrouted notification buffer full, dropping oldest"
		);
		buffered.pop_front();
	}
	buffered.push_back(payload);
}

/// Fails everything still waiting on the connection, exactly once each
async fn shutdown(
	failure: TransportError,
	connection: &Mutex<WebSocketConnection>,
	pending: &PendingRequests,
	routes: &Mutex<SubscriptionRoutes>,
) {
	tracing::warn!("WebSocket reader stopped: {}", failure);

	connection.lock().await.mark_failed();

	// Dropping the senders fails any requester still waiting
	pending.lock().await.clear();

	// Unrouted buffers are kept: a subscribe call that raced the failure
	// still flushes them before it delivers its own terminal error.
	let mut routes = routes.lock().await;
	let message = failure.to_string();
	for (_, sender) in routes.active.drain() {
		let _ = sender.send(Err(TransportError::network(message.clone(), None)));
	}
}
