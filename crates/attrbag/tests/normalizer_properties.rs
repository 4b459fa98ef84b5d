use attrbag::{normalize, AttributeStore, BagConfig};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(input in "\\PC*") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_ascii_is_lowercase_and_trimmed(input in "[ a-zA-Z0-9_]{0,32}") {
        let out = normalize(&input);
        prop_assert!(!out.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn prop_normalized_store_finds_by_canonical_key(key in "[a-zA-Z][a-zA-Z0-9]{0,16}", value in any::<i32>()) {
        let mut store = AttributeStore::with_config(&BagConfig::normalized());
        store.set(&key, value).unwrap();
        prop_assert_eq!(store.find(&normalize(&key)), Some(&value));
        prop_assert_eq!(store.list(), vec![(key.as_str(), &value)]);
    }
}
