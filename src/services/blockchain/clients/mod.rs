//! Blockchain client implementations.
//!
//! Contains the EVM client for Ethereum-compatible chains.

mod evm;

pub use evm::EvmClient;
