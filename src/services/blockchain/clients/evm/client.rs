//! EVM-compatible blockchain client implementation.
//!
//! This module provides the event observation client for Ethereum and other
//! EVM-compatible blockchains: live subscriptions to new block headers and
//! contract events, historical event queries, and one-shot lookups of
//! transactions, receipts, and blocks.
//!
//! Every operation is a direct pass-through to the node; the client performs
//! no retries and no reconnection, and a failed operation leaves the client
//! usable for subsequent calls.

use std::sync::Arc;

use alloy_json_abi::JsonAbi;
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
	models::{
		BlockId, BlockRange, EventFilter, EventRecord, EVMBlock, EVMBlockHeader, EVMTransaction,
		EVMTransactionReceipt,
	},
	services::{
		blockchain::{
			client::BlockChainClient,
			subscription::Subscription,
			transports::{
				BlockchainTransport, SubscriptionTransport, TransportError, WsConfig,
				WsTransportClient,
			},
			ClientError,
		},
		filter::{
			build_topics, decode_log, find_event,
			helpers::{address_to_string, string_to_address, string_to_b256},
		},
	},
};

/// Stream name used in error context for the block header subscription
const NEW_HEADS_STREAM: &str = "newHeads";

/// Client implementation for Ethereum Virtual Machine (EVM) compatible
/// blockchains
///
/// Holds exactly one transport for its lifetime. Clones share the transport
/// and are safe to use concurrently without external locking.
#[derive(Clone, Debug)]
pub struct EvmClient<T: Send + Sync + Clone> {
	/// The underlying transport for node communication
	transport: T,
}

impl<T: Send + Sync + Clone> EvmClient<T> {
	/// Creates a new EVM client instance with a specific transport client
	pub fn new_with_transport(transport: T) -> Self {
		Self { transport }
	}
}

impl EvmClient<WsTransportClient> {
	/// Creates a new EVM client connected to a WebSocket endpoint
	///
	/// The connection is established here; an unreachable endpoint or failed
	/// handshake fails construction rather than the first operation.
	///
	/// # Arguments
	/// * `url` - The `ws://` or `wss://` endpoint of the node
	/// * `config` - Optional connection settings
	///
	/// # Returns
	/// * `Result<Self, ClientError>` - New client instance or connection
	///   error
	pub async fn new(url: &str, config: Option<WsConfig>) -> Result<Self, ClientError> {
		let transport = WsTransportClient::new(url, config).await.map_err(|e| {
			ClientError::connection_error(format!("Failed to connect to {}", url), Some(e.into()))
		})?;
		Ok(Self::new_with_transport(transport))
	}
}

impl<T> EvmClient<T>
where
	T: BlockchainTransport + SubscriptionTransport + Send + Sync + Clone + 'static,
{
	/// Subscribes to the stream of new block headers
	///
	/// Each header the node emits yields exactly one `Ok` item, in emission
	/// order. A transport failure ends the stream with one terminal error;
	/// the subscription is not re-established by the client.
	///
	/// # Returns
	/// * `Result<Subscription<EVMBlockHeader>, ClientError>` - The live
	///   stream or a subscription error
	pub async fn subscribe_new_heads(&self) -> Result<Subscription<EVMBlockHeader>, ClientError> {
		let raw = self
			.transport
			.subscribe(json!(["newHeads"]))
			.await
			.map_err(|e| subscribe_failed(NEW_HEADS_STREAM, e))?;

		Ok(Subscription::new(
			raw.id,
			NEW_HEADS_STREAM.to_string(),
			raw.rx,
			Arc::new(self.transport.clone()),
			Box::new(|payload| {
				serde_json::from_value::<alloy::rpc::types::Header>(payload)
					.map(EVMBlockHeader::from)
					.map_err(|e| {
						ClientError::subscription_error(
							NEW_HEADS_STREAM,
							format!("Failed to decode block header: {}", e),
							None,
						)
					})
			}),
		))
	}

	/// Subscribes to emissions of a named contract event
	///
	/// Binds the event in the given ABI and registers a log subscription
	/// narrowed to the contract address and the event's selector. With a
	/// filter, indexed parameters are additionally narrowed at the node;
	/// without one, every emission of the event is delivered. Each matching
	/// emission yields exactly one decoded `Ok` item, in node-delivery order.
	///
	/// # Arguments
	/// * `contract_address` - Address of the emitting contract
	/// * `abi` - The contract ABI describing the event
	/// * `event_name` - Name of the event to observe
	/// * `filter` - Optional narrowing on indexed event parameters
	///
	/// # Returns
	/// * `Result<Subscription<EventRecord>, ClientError>` - The live stream
	///   or a subscription error naming the contract and event
	pub async fn subscribe_contract_events(
		&self,
		contract_address: &str,
		abi: &JsonAbi,
		event_name: &str,
		filter: Option<&EventFilter>,
	) -> Result<Subscription<EventRecord>, ClientError> {
		let stream_name = format!("{}@{}", event_name, contract_address);

		let address = string_to_address(contract_address).map_err(|e| {
			ClientError::subscription_error(
				&stream_name,
				format!("Invalid contract address ({}): {}", contract_address, e),
				None,
			)
		})?;
		let event = find_event(abi, event_name)
			.map_err(|e| ClientError::subscription_error(&stream_name, e.to_string(), None))?
			.clone();
		let topics = build_topics(&event, filter)
			.map_err(|e| ClientError::subscription_error(&stream_name, e.to_string(), None))?;

		let params = json!([
			"logs",
			{
				"address": address_to_string(address),
				"topics": topics,
			}
		]);

		let raw = self
			.transport
			.subscribe(params)
			.await
			.map_err(|e| subscribe_failed(&stream_name, e))?;

		let decoder_stream = stream_name.clone();
		Ok(Subscription::new(
			raw.id,
			stream_name,
			raw.rx,
			Arc::new(self.transport.clone()),
			Box::new(move |payload| {
				let log: alloy::rpc::types::Log =
					serde_json::from_value(payload).map_err(|e| {
						ClientError::subscription_error(
							&decoder_stream,
							format!("Failed to parse log: {}", e),
							None,
						)
					})?;
				decode_log(&event, &log).map_err(|e| {
					ClientError::subscription_error(&decoder_stream, e.to_string(), None)
				})
			}),
		))
	}
}

#[async_trait]
impl<T: BlockchainTransport + Send + Sync + Clone> BlockChainClient for EvmClient<T> {
	/// Retrieves a transaction by hash with proper error handling
	///
	/// # Errors
	/// - Returns `ClientError::Query` if the hash format is invalid or the
	///   request fails
	async fn get_transaction(
		&self,
		transaction_hash: &str,
	) -> Result<Option<EVMTransaction>, ClientError> {
		let operation = format!("eth_getTransactionByHash({})", transaction_hash);

		let hash = string_to_b256(transaction_hash).map_err(|e| {
			ClientError::query_error(
				&operation,
				format!("Invalid transaction hash ({}): {}", transaction_hash, e),
				None,
			)
		})?;

		let params = json!([format!("0x{:x}", hash)]);
		let response = self
			.transport
			.send_raw_request("eth_getTransactionByHash", Some(params))
			.await
			.map_err(|e| request_failed(&operation, e))?;

		let result = extract_result(response, &operation)?;
		if result.is_null() {
			return Ok(None);
		}

		serde_json::from_value::<alloy::rpc::types::Transaction>(result)
			.map(|tx| Some(EVMTransaction::from(tx)))
			.map_err(|e| {
				ClientError::query_error(
					&operation,
					format!("Failed to parse transaction: {}", e),
					None,
				)
			})
	}

	/// Retrieves a transaction receipt by the transaction's hash
	async fn get_transaction_receipt(
		&self,
		transaction_hash: &str,
	) -> Result<Option<EVMTransactionReceipt>, ClientError> {
		let operation = format!("eth_getTransactionReceipt({})", transaction_hash);

		let hash = string_to_b256(transaction_hash).map_err(|e| {
			ClientError::query_error(
				&operation,
				format!("Invalid transaction hash ({}): {}", transaction_hash, e),
				None,
			)
		})?;

		let params = json!([format!("0x{:x}", hash)]);
		let response = self
			.transport
			.send_raw_request("eth_getTransactionReceipt", Some(params))
			.await
			.map_err(|e| request_failed(&operation, e))?;

		let result = extract_result(response, &operation)?;
		if result.is_null() {
			return Ok(None);
		}

		serde_json::from_value::<alloy::rpc::types::TransactionReceipt>(result)
			.map(|receipt| Some(EVMTransactionReceipt::from(receipt)))
			.map_err(|e| {
				ClientError::query_error(
					&operation,
					format!("Failed to parse receipt: {}", e),
					None,
				)
			})
	}

	/// Retrieves a block by number, symbolic marker, or hash
	///
	/// Full transaction objects are requested so the payload matches what
	/// the node reports for `eth_getBlockBy*` with the verbose flag.
	async fn get_block(&self, block_id: &BlockId) -> Result<Option<EVMBlock>, ClientError> {
		let (method, operation, params) = match block_id {
			BlockId::Number(number) => (
				"eth_getBlockByNumber",
				format!("eth_getBlockByNumber({})", number),
				json!([number.as_param(), true]),
			),
			BlockId::Hash(hash) => (
				"eth_getBlockByHash",
				format!("eth_getBlockByHash(0x{:x})", hash),
				json!([format!("0x{:x}", hash), true]),
			),
		};

		let response = self
			.transport
			.send_raw_request(method, Some(params))
			.await
			.map_err(|e| request_failed(&operation, e))?;

		let result = extract_result(response, &operation)?;
		if result.is_null() {
			return Ok(None);
		}

		serde_json::from_value::<alloy::rpc::types::Block>(result)
			.map(|block| Some(EVMBlock::from(block)))
			.map_err(|e| {
				ClientError::query_error(&operation, format!("Failed to parse block: {}", e), None)
			})
	}

	/// Queries historical event occurrences over an inclusive block range
	///
	/// Decoded matches keep the node's canonical (block number, log index)
	/// ordering. Zero matches resolves to an empty vector.
	async fn get_past_events(
		&self,
		contract_address: &str,
		abi: &JsonAbi,
		event_name: &str,
		range: &BlockRange,
		filter: Option<&EventFilter>,
	) -> Result<Vec<EventRecord>, ClientError> {
		let operation = format!("eth_getLogs({}@{})", event_name, contract_address);

		let address = string_to_address(contract_address).map_err(|e| {
			ClientError::query_error(
				&operation,
				format!("Invalid contract address ({}): {}", contract_address, e),
				None,
			)
		})?;
		let event = find_event(abi, event_name)
			.map_err(|e| ClientError::query_error(&operation, e.to_string(), None))?;
		let topics = build_topics(event, filter)
			.map_err(|e| ClientError::query_error(&operation, e.to_string(), None))?;

		let params = json!([{
			"address": address_to_string(address),
			"topics": topics,
			"fromBlock": range.from.as_param(),
			"toBlock": range.to.as_param(),
		}]);

		let response = self
			.transport
			.send_raw_request("eth_getLogs", Some(params))
			.await
			.map_err(|e| request_failed(&operation, e))?;

		let result = extract_result(response, &operation)?;
		let logs: Vec<alloy::rpc::types::Log> = serde_json::from_value(result).map_err(|e| {
			ClientError::query_error(&operation, format!("Failed to parse logs: {}", e), None)
		})?;

		logs.iter()
			.map(|log| {
				decode_log(event, log)
					.map_err(|e| ClientError::query_error(&operation, e.to_string(), None))
			})
			.collect()
	}
}

/// Extracts the `result` member of a JSON-RPC response
fn extract_result(response: Value, operation: &str) -> Result<Value, ClientError> {
	if let Some(error) = response.get("error") {
		return Err(ClientError::query_error(
			operation,
			format!("Node returned error: {}", error),
			None,
		));
	}

	response
		.get("result")
		.cloned()
		.ok_or_else(|| ClientError::query_error(operation, "Missing 'result' field", None))
}

fn subscribe_failed(stream: &str, error: TransportError) -> ClientError {
	ClientError::subscription_error(stream, "Failed to subscribe", Some(error.into()))
}

fn request_failed(operation: &str, error: TransportError) -> ClientError {
	ClientError::query_error(operation, "Request failed", Some(error.into()))
}
