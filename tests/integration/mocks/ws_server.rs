//! In-process WebSocket server for transport tests.
//!
//! Speaks just enough JSON-RPC to exercise the transport: configurable
//! responses per method, optional silence (for timeout tests), notification
//! pushes after a subscription is accepted, and an optional close after the
//! pushes (for terminal-error tests).

use std::collections::HashMap;

use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio_tungstenite::{accept_async, tungstenite::Message};

/// Behavior of the in-process WebSocket test server
#[derive(Clone, Default)]
pub struct TestServerBehavior {
	/// Results by method name; unknown methods get a built-in default
	pub method_responses: HashMap<String, Value>,
	/// Methods the server reads but never answers
	pub silent_methods: Vec<String>,
	/// Notification payloads pushed after the first `eth_subscribe` is
	/// answered, in order
	pub subscription_events: Vec<Value>,
	/// Close the connection after pushing the events
	pub close_after_events: bool,
}

impl TestServerBehavior {
	pub fn with_response(mut self, method: &str, result: Value) -> Self {
		self.method_responses.insert(method.to_string(), result);
		self
	}

	pub fn with_silent_method(mut self, method: &str) -> Self {
		self.silent_methods.push(method.to_string());
		self
	}

	pub fn with_events(mut self, events: Vec<Value>) -> Self {
		self.subscription_events = events;
		self
	}

	pub fn closing_after_events(mut self) -> Self {
		self.close_after_events = true;
		self
	}
}

/// Starts a WebSocket server on an ephemeral local port
///
/// Returns the server URL and a shutdown sender; dropping or firing the
/// sender stops accepting new connections.
pub async fn start_test_websocket_server(
	behavior: TestServerBehavior,
) -> (String, oneshot::Sender<()>) {
	let listener = TcpListener::bind("127.0.0.1:0")
		.await
		.expect("bind test server");
	let addr = listener.local_addr().expect("server addr");
	let url = format!("ws://{}", addr);
	let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

	tokio::spawn(async move {
		loop {
			tokio::select! {
				_ = &mut shutdown_rx => break,
				accepted = listener.accept() => {
					let Ok((stream, _)) = accepted else { break };
					tokio::spawn(handle_connection(stream, behavior.clone()));
				}
			}
		}
	});

	(url, shutdown_tx)
}

async fn handle_connection(stream: TcpStream, behavior: TestServerBehavior) {
	let Ok(mut ws) = accept_async(stream).await else {
		return;
	};
	let mut next_subscription = 1u64;

	while let Some(Ok(message)) = ws.next().await {
		let Message::Text(text) = message else {
			continue;
		};
		let Ok(request) = serde_json::from_str::<Value>(&text) else {
			continue;
		};

		let method = request
			.get("method")
			.and_then(Value::as_str)
			.unwrap_or_default()
			.to_string();
		let id = request.get("id").cloned().unwrap_or(Value::Null);

		if behavior.silent_methods.iter().any(|silent| silent == &method) {
			continue;
		}

		let result = behavior
			.method_responses
			.get(&method)
			.cloned()
			.unwrap_or_else(|| default_response(&method, &mut next_subscription));
		let response = json!({"jsonrpc": "2.0", "id": id, "result": result});
		if ws
			.send(Message::Text(response.to_string().into()))
			.await
			.is_err()
		{
			return;
		}

		if method == "eth_subscribe" {
			let subscription_id = result.as_str().unwrap_or("0x1").to_string();
			for event in &behavior.subscription_events {
				let notification = json!({
					"jsonrpc": "2.0",
					"method": "eth_subscription",
					"params": {"subscription": subscription_id, "result": event}
				});
				if ws
					.send(Message::Text(notification.to_string().into()))
					.await
					.is_err()
				{
					return;
				}
			}
			if behavior.close_after_events {
				let _ = ws.close(None).await;
				return;
			}
		}
	}
}

fn default_response(method: &str, next_subscription: &mut u64) -> Value {
	match method {
		"eth_subscribe" => {
			let id = format!("0x{:x}", *next_subscription);
			*next_subscription += 1;
			json!(id)
		}
		"eth_unsubscribe" => json!(true),
		"eth_blockNumber" => json!("0x64"),
		_ => Value::Null,
	}
}
