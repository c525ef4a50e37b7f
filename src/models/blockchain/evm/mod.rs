//! Ethereum Virtual Machine (EVM) specific data structures.
//!
//! Thin wrappers around the alloy RPC types for blocks, transactions, and
//! receipts, plus the crate-owned decoded event record.

mod block;
mod event;
mod receipt;
mod transaction;

pub use block::{Block, BlockHeader};
pub use event::EventRecord;
pub use receipt::TransactionReceipt;
pub use transaction::Transaction;
