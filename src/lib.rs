//! Ethereum event observation client.
//!
//! A thin client library for observing an EVM blockchain node over its
//! WebSocket JSON-RPC interface. It supports:
//!
//! - Live subscriptions to new block headers
//! - Live subscriptions to contract events, optionally narrowed by a filter
//!   on indexed event parameters
//! - Historical event queries over a block range
//! - One-shot lookups of transactions, receipts, and blocks by identifier
//!
//! Subscriptions are delivered as [`futures::Stream`]s of
//! `Result<Payload, ClientError>` items in node-emission order; one-shot
//! queries are async calls resolving exactly once. The client performs no
//! retries, no reconnection, and no caching - resilience is the caller's
//! responsibility.
//!
//! # Architecture
//! - `models`: domain data structures (block ranges, filters, wrapped node
//!   payloads, decoded event records)
//! - `services::blockchain`: the client, subscription handles, and the
//!   WebSocket transport
//! - `services::filter`: ABI event resolution, filter-to-topic encoding, and
//!   log decoding

pub mod models;
pub mod services;
