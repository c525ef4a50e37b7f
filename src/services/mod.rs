//! Core services implementing the client's functionality.
//!
//! Contains the main business logic of the crate:
//!
//! - `blockchain`: Client, subscription handles, and WebSocket transport
//! - `filter`: ABI event resolution, topic encoding, and log decoding

pub mod blockchain;
pub mod filter;
