//! EVM client implementation.

mod client;

pub use client::EvmClient;
