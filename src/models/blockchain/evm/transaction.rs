//! EVM transaction data structures.

use std::ops::Deref;

use alloy::consensus::Transaction as TransactionTrait;
use alloy::primitives::{Address, B256, U256};
use alloy::rpc::types::Transaction as AlloyTransaction;
use serde::{Deserialize, Serialize};

/// Wrapper around an alloy RPC transaction that implements additional
/// functionality
///
/// This type provides a convenient interface for working with EVM transactions
/// while maintaining compatibility with the alloy types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction(pub AlloyTransaction);

impl Transaction {
	/// Get the transaction hash
	pub fn hash(&self) -> B256 {
		*self.0.inner.tx_hash()
	}

	/// Get the transaction sender address
	pub fn sender(&self) -> Address {
		self.0.inner.signer()
	}

	/// Get the transaction recipient address (None for contract creation)
	pub fn to(&self) -> Option<Address> {
		self.0.inner.to()
	}

	/// Get the transaction value (amount of native currency transferred)
	pub fn value(&self) -> U256 {
		self.0.inner.value()
	}

	/// Get the transaction nonce
	pub fn nonce(&self) -> u64 {
		self.0.inner.nonce()
	}

	/// Get the number of the block this transaction was included in, if mined
	pub fn block_number(&self) -> Option<u64> {
		self.0.block_number
	}
}

impl From<AlloyTransaction> for Transaction {
	fn from(tx: AlloyTransaction) -> Self {
		Self(tx)
	}
}

impl Deref for Transaction {
	type Target = AlloyTransaction;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
