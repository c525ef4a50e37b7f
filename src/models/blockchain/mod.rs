//! Blockchain-specific model implementations.
//!
//! This module contains type definitions for the node payloads the client
//! passes through. Payloads are wrapped, never interpreted or mutated; their
//! shape is the blockchain protocol's canonical JSON-RPC representation.

pub mod evm;
