use alloy_json_abi::JsonAbi;
use eth_event_observer::{
	models::EventFilter,
	services::filter::{build_topics, find_event},
};
use proptest::prelude::*;
use serde_json::json;

fn transfer_abi() -> JsonAbi {
	serde_json::from_str(
		r#"[{
			"type": "event",
			"name": "Transfer",
			"anonymous": false,
			"inputs": [
				{"indexed": true, "name": "from", "type": "address"},
				{"indexed": true, "name": "to", "type": "address"},
				{"indexed": false, "name": "value", "type": "uint256"}
			]
		}]"#,
	)
	.unwrap()
}

fn scored_abi() -> JsonAbi {
	serde_json::from_str(
		r#"[{
			"type": "event",
			"name": "Scored",
			"anonymous": false,
			"inputs": [{"indexed": true, "name": "score", "type": "uint256"}]
		}]"#,
	)
	.unwrap()
}

proptest! {
	#[test]
	fn address_filter_values_left_pad_into_topics(address in "[0-9a-f]{40}") {
		let abi = transfer_abi();
		let event = find_event(&abi, "Transfer").unwrap();
		let filter = EventFilter::new().with_param("from", format!("0x{}", address));

		let topics = build_topics(event, Some(&filter)).unwrap();
		prop_assert_eq!(topics.len(), 2);
		prop_assert_eq!(
			topics[1].as_str().unwrap(),
			format!("0x{}{}", "0".repeat(24), address)
		);
	}

	#[test]
	fn uint_filter_values_encode_as_words(value in any::<u64>()) {
		let abi = scored_abi();
		let event = find_event(&abi, "Scored").unwrap();
		let filter = EventFilter::new().with_param("score", value);

		let topics = build_topics(event, Some(&filter)).unwrap();
		prop_assert_eq!(topics[1].as_str().unwrap(), format!("0x{:064x}", value));
	}

	#[test]
	fn unconstrained_filters_never_change_the_selector(
		key in "[a-z]{1,12}",
		value in any::<u64>(),
	) {
		prop_assume!(key != "from" && key != "to");

		let abi = transfer_abi();
		let event = find_event(&abi, "Transfer").unwrap();
		let unfiltered = build_topics(event, None).unwrap();

		let filter = EventFilter::new().with_param(key, value);
		let filtered = build_topics(event, Some(&filter)).unwrap();

		// Keys naming nothing indexed are ignored entirely
		prop_assert_eq!(filtered, unfiltered);
	}

	#[test]
	fn alternative_lists_encode_every_member(count in 1usize..4) {
		let abi = transfer_abi();
		let event = find_event(&abi, "Transfer").unwrap();

		let addresses: Vec<String> = (0..count)
			.map(|n| format!("0x{:040x}", n + 1))
			.collect();
		let filter = EventFilter::new().with_param("from", json!(addresses.clone()));

		let topics = build_topics(event, Some(&filter)).unwrap();
		let encoded = topics[1].as_array().unwrap();
		prop_assert_eq!(encoded.len(), count);
		for (topic, address) in encoded.iter().zip(&addresses) {
			prop_assert!(topic.as_str().unwrap().ends_with(&address[2..]));
		}
	}
}
