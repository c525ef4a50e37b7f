//! Core blockchain client interface and traits.
//!
//! This module defines the one-shot query surface of the client. Each
//! operation registers intent and resolves asynchronously exactly once; a
//! failure is reported through the returned error and leaves the client
//! usable for subsequent calls.

use alloy_json_abi::JsonAbi;
use async_trait::async_trait;

use crate::{
	models::{
		BlockId, BlockRange, EventFilter, EventRecord, EVMBlock, EVMTransaction,
		EVMTransactionReceipt,
	},
	services::blockchain::ClientError,
};

/// Defines the core interface for one-shot blockchain lookups and queries
///
/// Lookups that the node answers with `null` resolve to `Ok(None)`; the
/// client does not invent a distinct not-found signal.
#[async_trait]
pub trait BlockChainClient: Send + Sync {
	/// Retrieves a transaction by its hash
	///
	/// # Arguments
	/// * `transaction_hash` - Hex-encoded hash of the transaction to look up
	///
	/// # Returns
	/// * `Result<Option<EVMTransaction>, ClientError>` - The transaction,
	///   `None` if the node does not know it, or a query error
	async fn get_transaction(
		&self,
		transaction_hash: &str,
	) -> Result<Option<EVMTransaction>, ClientError>;

	/// Retrieves a transaction receipt by the transaction's hash
	///
	/// # Arguments
	/// * `transaction_hash` - Hex-encoded hash of the transaction to look up
	///
	/// # Returns
	/// * `Result<Option<EVMTransactionReceipt>, ClientError>` - The receipt,
	///   `None` if the transaction is not mined, or a query error
	async fn get_transaction_receipt(
		&self,
		transaction_hash: &str,
	) -> Result<Option<EVMTransactionReceipt>, ClientError>;

	/// Retrieves a block by number, symbolic marker, or hash
	///
	/// # Arguments
	/// * `block_id` - The block identifier
	///
	/// # Returns
	/// * `Result<Option<EVMBlock>, ClientError>` - The block with full
	///   transaction objects, `None` if unknown, or a query error
	async fn get_block(&self, block_id: &BlockId) -> Result<Option<EVMBlock>, ClientError>;

	/// Queries historical occurrences of a contract event over a block range
	///
	/// One request, one response: the full set of matches within the
	/// inclusive range, decoded, in the node's canonical
	/// (block number, log index) order. Zero matches is an empty vector,
	/// not an error.
	///
	/// # Arguments
	/// * `contract_address` - Address of the emitting contract
	/// * `abi` - The contract ABI describing the event
	/// * `event_name` - Name of the event to query
	/// * `range` - Inclusive block range to search
	/// * `filter` - Optional narrowing on indexed event parameters
	///
	/// # Returns
	/// * `Result<Vec<EventRecord>, ClientError>` - Decoded matches or a
	///   query error naming the contract and event
	async fn get_past_events(
		&self,
		contract_address: &str,
		abi: &JsonAbi,
		event_name: &str,
		range: &BlockRange,
		filter: Option<&EventFilter>,
	) -> Result<Vec<EventRecord>, ClientError>;
}
