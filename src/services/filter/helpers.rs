//! Helper functions for EVM-specific conversions.
//!
//! This module provides utility functions for working with EVM data types and
//! formatting, including address and hash conversions and decoded value
//! formatting.

use alloy::primitives::{Address, B256};
use alloy_dyn_abi::DynSolValue;

/// Converts a B256 hash to its hexadecimal string representation.
///
/// # Arguments
/// * `hash` - The B256 hash to convert
///
/// # Returns
/// A string in the format "0x..." representing the hash
pub fn b256_to_string(hash: B256) -> String {
	format!("0x{}", hex::encode(hash.as_slice()))
}

/// Converts a hexadecimal string to a B256 hash.
///
/// # Arguments
/// * `hash_string` - The string to convert, with or without "0x" prefix
///
/// # Returns
/// The converted B256 hash or an error if the string is invalid
///
/// # Errors
/// Returns an error if the input is not exactly 32 bytes of valid hexadecimal
pub fn string_to_b256(hash_string: &str) -> Result<B256, Box<dyn std::error::Error>> {
	let hash_without_prefix = hash_string.strip_prefix("0x").unwrap_or(hash_string);
	let hash_bytes = hex::decode(hash_without_prefix)?;
	if hash_bytes.len() != 32 {
		return Err(format!("Expected 32 bytes, got {}", hash_bytes.len()).into());
	}
	Ok(B256::from_slice(&hash_bytes))
}

/// Converts an address to its hexadecimal string representation.
///
/// # Arguments
/// * `address` - The address to convert
///
/// # Returns
/// A string in the format "0x..." representing the address
pub fn address_to_string(address: Address) -> String {
	format!("0x{}", hex::encode(address.as_slice()))
}

/// Converts a hexadecimal string to an address.
///
/// # Arguments
/// * `address_string` - The string to convert, with or without "0x" prefix
///
/// # Returns
/// The converted address or an error if the string is invalid
///
/// # Errors
/// Returns an error if the input is not exactly 20 bytes of valid hexadecimal
pub fn string_to_address(address_string: &str) -> Result<Address, Box<dyn std::error::Error>> {
	let address_without_prefix = address_string.strip_prefix("0x").unwrap_or(address_string);
	let address_bytes = hex::decode(address_without_prefix)?;
	if address_bytes.len() != 20 {
		return Err(format!("Expected 20 bytes, got {}", address_bytes.len()).into());
	}
	Ok(Address::from_slice(&address_bytes))
}

/// Normalizes an address string by removing "0x" prefix, spaces, and
/// converting to lowercase.
pub fn normalize_address(address: &str) -> String {
	address
		.strip_prefix("0x")
		.unwrap_or(address)
		.replace(" ", "")
		.to_lowercase()
}

/// Compares two addresses for equality, ignoring case and "0x" prefixes.
pub fn are_same_address(address1: &str, address2: &str) -> bool {
	normalize_address(address1) == normalize_address(address2)
}

/// Formats a decoded ABI value into a consistent string representation.
///
/// # Arguments
/// * `value` - The decoded value to format
///
/// # Returns
/// A string representation of the value, with appropriate formatting based on
/// the value type
pub fn format_sol_value(value: &DynSolValue) -> String {
	match value {
		DynSolValue::Address(address) => format!("0x{:x}", address),
		DynSolValue::FixedBytes(word, size) => format!("0x{}", hex::encode(&word[..*size])),
		DynSolValue::Bytes(bytes) => format!("0x{}", hex::encode(bytes)),
		DynSolValue::Int(num, _) => num.to_string(),
		DynSolValue::Uint(num, _) => num.to_string(),
		DynSolValue::Bool(b) => b.to_string(),
		DynSolValue::String(s) => s.clone(),
		DynSolValue::Array(values) | DynSolValue::FixedArray(values) => {
			format!(
				"[{}]",
				values
					.iter()
					.map(format_sol_value)
					.collect::<Vec<String>>()
					.join(",")
			)
		}
		DynSolValue::Tuple(values) => {
			format!(
				"({})",
				values
					.iter()
					.map(format_sol_value)
					.collect::<Vec<String>>()
					.join(",")
			)
		}
		other => format!("{:?}", other),
	}
}
