use mockall::mock;
use serde::Serialize;
use serde_json::Value;

use eth_event_observer::services::blockchain::{
	BlockchainTransport, RawSubscription, SubscriptionTransport, TransportError,
};

// Mock implementation of an EVM transport client.
// Used for testing client behavior without a live node.
// Provides functionality to simulate raw JSON-RPC request handling and
// subscription registration.
mock! {
	pub EVMTransportClient {
		pub async fn send_raw_request(&self, method: &str, params: Option<Value>) -> Result<Value, TransportError>;
		pub async fn get_current_url(&self) -> String;
		pub async fn subscribe(&self, params: Value) -> Result<RawSubscription, TransportError>;
		pub async fn unsubscribe(&self, id: &str) -> Result<bool, TransportError>;
	}

	impl Clone for EVMTransportClient {
		fn clone(&self) -> Self;
	}
}

#[async_trait::async_trait]
impl BlockchainTransport for MockEVMTransportClient {
	async fn get_current_url(&self) -> String {
		self.get_current_url().await
	}

	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		let params_value = params.map(|p| p.into());
		self.send_raw_request(method, params_value).await
	}
}

#[async_trait::async_trait]
impl SubscriptionTransport for MockEVMTransportClient {
	async fn subscribe(&self, params: Value) -> Result<RawSubscription, TransportError> {
		self.subscribe(params).await
	}

	async fn unsubscribe(&self, id: &str) -> Result<bool, TransportError> {
		self.unsubscribe(id).await
	}
}
