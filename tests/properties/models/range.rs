use eth_event_observer::models::{BlockNumber, BlockRange};
use proptest::prelude::*;

proptest! {
	#[test]
	fn numeric_params_roundtrip_through_hex(number in any::<u64>()) {
		let param = BlockNumber::Number(number).as_param();
		let text = param.as_str().unwrap();
		prop_assert!(text.starts_with("0x"));
		prop_assert_eq!(u64::from_str_radix(&text[2..], 16).unwrap(), number);
	}

	#[test]
	fn ranges_preserve_their_bounds(from in any::<u64>(), to in any::<u64>()) {
		let range = BlockRange::new(from, to);
		prop_assert_eq!(range.from, BlockNumber::Number(from));
		prop_assert_eq!(range.to, BlockNumber::Number(to));
	}
}
