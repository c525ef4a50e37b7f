//! EVM block data structures.

use std::ops::Deref;

use alloy::primitives::B256;
use alloy::rpc::types::{Block as AlloyBlock, Header as AlloyHeader};
use serde::{Deserialize, Serialize};

/// Wrapper around an alloy RPC block that implements additional functionality
///
/// This type provides a convenient interface for working with EVM blocks
/// while maintaining compatibility with the alloy types.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Block(pub AlloyBlock);

impl Block {
	/// Get the block number
	pub fn number(&self) -> u64 {
		self.0.header.inner.number
	}

	/// Get the block hash
	pub fn hash(&self) -> B256 {
		self.0.header.hash
	}
}

impl From<AlloyBlock> for Block {
	fn from(block: AlloyBlock) -> Self {
		Self(block)
	}
}

impl Deref for Block {
	type Target = AlloyBlock;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Wrapper around an alloy RPC block header, as delivered by the node's
/// `newHeads` subscription stream
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BlockHeader(pub AlloyHeader);

impl BlockHeader {
	/// Get the block number
	pub fn number(&self) -> u64 {
		self.0.inner.number
	}

	/// Get the block hash
	pub fn hash(&self) -> B256 {
		self.0.hash
	}

	/// Get the parent block hash
	pub fn parent_hash(&self) -> B256 {
		self.0.inner.parent_hash
	}
}

impl From<AlloyHeader> for BlockHeader {
	fn from(header: AlloyHeader) -> Self {
		Self(header)
	}
}

impl Deref for BlockHeader {
	type Target = AlloyHeader;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
