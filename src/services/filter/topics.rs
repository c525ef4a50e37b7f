//! Filter-to-topic encoding.
//!
//! Turns an [`EventFilter`] into the log topic list understood by
//! `eth_subscribe`/`eth_getLogs`. Topic 0 is always the event selector;
//! topics 1..=3 narrow on the event's indexed parameters in declaration
//! order. A filter value may be a single scalar or an array of alternatives.
//! Filter keys that do not name an indexed parameter are ignored.

use alloy_json_abi::{Event, EventParam, JsonAbi};
use alloy::primitives::keccak256;
use alloy_dyn_abi::{DynSolValue, Specifier};
use serde_json::Value;

use crate::{
	models::EventFilter,
	services::filter::{helpers::b256_to_string, FilterError},
};

/// Resolves the named event in a contract ABI.
///
/// When the ABI declares overloads for the name, the first declaration wins.
///
/// # Arguments
/// * `abi` - The contract ABI
/// * `event_name` - Name of the event to resolve
///
/// # Returns
/// * `Result<&Event, FilterError>` - The resolved event or an error if the
///   ABI does not describe it
pub fn find_event<'a>(abi: &'a JsonAbi, event_name: &str) -> Result<&'a Event, FilterError> {
	abi.events
		.get(event_name)
		.and_then(|overloads| overloads.first())
		.ok_or_else(|| FilterError::unknown_event(event_name))
}

/// Builds the log topic list for an event subscription or query.
///
/// # Arguments
/// * `event` - The event to narrow on
/// * `filter` - Optional values for indexed parameters; absent means
///   unfiltered (selector-only topics)
///
/// # Returns
/// * `Result<Vec<Value>, FilterError>` - JSON topic positions: a hex string,
///   an array of alternative hex strings, or null for an unconstrained
///   position (trailing nulls trimmed)
pub fn build_topics(
	event: &Event,
	filter: Option<&EventFilter>,
) -> Result<Vec<Value>, FilterError> {
	let mut topics = vec![Value::String(b256_to_string(event.selector()))];

	for param in event.inputs.iter().filter(|param| param.indexed).take(3) {
		let position = match filter.and_then(|filter| filter.get(&param.name)) {
			Some(Value::Array(alternatives)) => Value::Array(
				alternatives
					.iter()
					.map(|value| encode_topic_value(param, value).map(Value::String))
					.collect::<Result<Vec<_>, _>>()?,
			),
			Some(value) => Value::String(encode_topic_value(param, value)?),
			None => Value::Null,
		};
		topics.push(position);
	}

	// Trailing unconstrained positions carry no information
	while topics.len() > 1 && topics.last() == Some(&Value::Null) {
		topics.pop();
	}

	Ok(topics)
}

/// Encodes a single filter value into a 32-byte log topic.
///
/// Value types occupy the topic word directly; dynamic types (string, bytes)
/// are keccak256-hashed, per the protocol's log topic rules.
fn encode_topic_value(param: &EventParam, value: &Value) -> Result<String, FilterError> {
	let ty = param
		.resolve()
		.map_err(|e| FilterError::invalid_filter_value(&param.name, e.to_string()))?;

	let text = match value {
		Value::String(s) => s.clone(),
		Value::Number(n) => n.to_string(),
		Value::Bool(b) => b.to_string(),
		other => {
			return Err(FilterError::invalid_filter_value(
				&param.name,
				format!("Unsupported filter value: {}", other),
			))
		}
	};

	let coerced = ty
		.coerce_str(&text)
		.map_err(|e| FilterError::invalid_filter_value(&param.name, e.to_string()))?;

	let word = match &coerced {
		DynSolValue::String(s) => keccak256(s.as_bytes()),
		DynSolValue::Bytes(bytes) => keccak256(bytes),
		value => value.as_word().ok_or_else(|| {
			FilterError::invalid_filter_value(
				&param.name,
				format!("Values of type {} cannot be used as a log topic", param.ty),
			)
		})?,
	};

	Ok(b256_to_string(word))
}
