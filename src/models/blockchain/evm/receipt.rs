//! EVM transaction receipt data structures.

use std::ops::Deref;

use alloy::primitives::{Address, B256};
use alloy::rpc::types::TransactionReceipt as AlloyTransactionReceipt;
use serde::{Deserialize, Serialize};

/// Wrapper around an alloy RPC transaction receipt that implements additional
/// functionality
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionReceipt(pub AlloyTransactionReceipt);

impl TransactionReceipt {
	/// Get the hash of the transaction this receipt belongs to
	pub fn transaction_hash(&self) -> B256 {
		self.0.transaction_hash
	}

	/// Whether the transaction executed successfully
	pub fn status(&self) -> bool {
		self.0.status()
	}

	/// Get the number of the block this transaction was included in, if mined
	pub fn block_number(&self) -> Option<u64> {
		self.0.block_number
	}

	/// Get the address of the contract created by this transaction, if any
	pub fn contract_address(&self) -> Option<Address> {
		self.0.contract_address
	}
}

impl From<AlloyTransactionReceipt> for TransactionReceipt {
	fn from(receipt: AlloyTransactionReceipt) -> Self {
		Self(receipt)
	}
}

impl Deref for TransactionReceipt {
	type Target = AlloyTransactionReceipt;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
