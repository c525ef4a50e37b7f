//! ABI-based log decoding.

use std::collections::BTreeMap;

use alloy_json_abi::Event;
use alloy::rpc::types::Log;
use alloy_dyn_abi::EventExt;

use crate::{
	models::EventRecord,
	services::filter::{
		helpers::{address_to_string, b256_to_string, format_sol_value},
		FilterError,
	},
};

/// Decodes a node log against an event's ABI description.
///
/// Indexed values are taken from the log topics, the rest from the data
/// section; both are keyed by parameter name in the resulting record.
///
/// # Arguments
/// * `event` - The ABI event the log is expected to match
/// * `log` - The raw log as returned by the node
///
/// # Returns
/// * `Result<EventRecord, FilterError>` - The decoded record or a decode
///   error naming the event
pub fn decode_log(event: &Event, log: &Log) -> Result<EventRecord, FilterError> {
	let decoded = event
		.decode_log_parts(
			log.inner.data.topics().iter().copied(),
			log.inner.data.data.as_ref(),
		)
		.map_err(|e| FilterError::decode_error(&event.name, e.to_string()))?;

	let mut params = BTreeMap::new();
	let indexed_names = event
		.inputs
		.iter()
		.filter(|param| param.indexed)
		.map(|param| param.name.clone());
	for (name, value) in indexed_names.zip(decoded.indexed.iter()) {
		params.insert(name, format_sol_value(value));
	}

	let body_names = event
		.inputs
		.iter()
		.filter(|param| !param.indexed)
		.map(|param| param.name.clone());
	for (name, value) in body_names.zip(decoded.body.iter()) {
		params.insert(name, format_sol_value(value));
	}

	Ok(EventRecord {
		address: address_to_string(log.inner.address),
		event: event.name.clone(),
		params,
		block_number: log.block_number,
		transaction_hash: log.transaction_hash.map(b256_to_string),
		log_index: log.log_index,
		removed: log.removed,
	})
}
