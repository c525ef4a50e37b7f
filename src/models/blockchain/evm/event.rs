//! Decoded EVM event data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A decoded contract event occurrence.
///
/// Produced by decoding a node log against the event's ABI description.
/// Argument values are rendered in their canonical string form: addresses and
/// byte values as `0x`-prefixed lowercase hex, integers in decimal, booleans
/// as `true`/`false`, composites in bracketed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
	/// Address of the contract that emitted the event (`0x`-prefixed hex)
	pub address: String,
	/// Name of the event as declared in the ABI
	pub event: String,
	/// Decoded argument values by parameter name
	pub params: BTreeMap<String, String>,
	/// Number of the block containing the emission, if mined
	pub block_number: Option<u64>,
	/// Hash of the transaction that emitted the event (`0x`-prefixed hex)
	pub transaction_hash: Option<String>,
	/// Position of the log within its block
	pub log_index: Option<u64>,
	/// Whether the log was removed by a chain reorganization
	pub removed: bool,
}
