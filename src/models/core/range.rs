//! Block addressing types.
//!
//! Blocks can be addressed by a concrete number, a symbolic marker, or a hash.
//! Ranges are only used for historical queries, never for live subscriptions.

use alloy::primitives::B256;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A block position: a concrete block number or a symbolic marker.
///
/// Symbolic markers are resolved by the node at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockNumber {
	/// A concrete block number
	Number(u64),
	/// The first block of the chain
	Earliest,
	/// The most recent mined block
	Latest,
	/// The pending (not yet mined) block
	Pending,
}

impl BlockNumber {
	/// Renders the block position as a JSON-RPC parameter
	///
	/// Concrete numbers are hex-encoded, symbolic markers use their
	/// protocol names.
	pub fn as_param(&self) -> Value {
		Value::String(self.to_string())
	}
}

impl std::fmt::Display for BlockNumber {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Number(number) => write!(f, "0x{:x}", number),
			Self::Earliest => write!(f, "earliest"),
			Self::Latest => write!(f, "latest"),
			Self::Pending => write!(f, "pending"),
		}
	}
}

impl From<u64> for BlockNumber {
	fn from(number: u64) -> Self {
		Self::Number(number)
	}
}

/// An inclusive block range for historical event queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRange {
	/// First block of the range (inclusive)
	pub from: BlockNumber,
	/// Last block of the range (inclusive)
	pub to: BlockNumber,
}

impl BlockRange {
	/// Creates a new inclusive block range
	pub fn new(from: impl Into<BlockNumber>, to: impl Into<BlockNumber>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}
}

/// A block identifier for single-block lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockId {
	/// Block addressed by number or symbolic marker
	Number(BlockNumber),
	/// Block addressed by its 32-byte hash
	Hash(B256),
}

impl From<u64> for BlockId {
	fn from(number: u64) -> Self {
		Self::Number(BlockNumber::Number(number))
	}
}

impl From<BlockNumber> for BlockId {
	fn from(number: BlockNumber) -> Self {
		Self::Number(number)
	}
}

impl From<B256> for BlockId {
	fn from(hash: B256) -> Self {
		Self::Hash(hash)
	}
}
