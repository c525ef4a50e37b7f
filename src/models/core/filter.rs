//! Event filter model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A predicate narrowing which event instances match a subscription or query.
///
/// Maps event parameter names to expected values. A value may be a single
/// scalar or an array of alternatives (any of which matches). Only parameters
/// declared `indexed` in the event ABI participate in narrowing; keys naming
/// other parameters are ignored. Values are coerced using the parameter's ABI
/// type when the filter is turned into log topics - no validation happens
/// before that point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFilter(BTreeMap<String, Value>);

impl EventFilter {
	/// Creates an empty filter (matches every event instance)
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an expected value for the named parameter
	pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.0.insert(name.into(), value.into());
		self
	}

	/// Returns the expected value for the named parameter, if any
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	/// Whether the filter constrains any parameter
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over the constrained parameters in name order
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.0.iter()
	}
}

impl From<BTreeMap<String, Value>> for EventFilter {
	fn from(params: BTreeMap<String, Value>) -> Self {
		Self(params)
	}
}

impl FromIterator<(String, Value)> for EventFilter {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
