//! Property-based tests for the normalization rules.
//!
//! These check the guarantees each parser makes across generated inputs,
//! complementing the fixture-driven tests in `gather_tests.rs`.

use hostinfo::coerce::parse_int;
use hostinfo::line::split_flags;
use hostinfo::{coerce, compact, normalize_key, LineParser, Record, Value};
use proptest::prelude::*;

fn is_snake_case(key: &str) -> bool {
    !key.starts_with('_')
        && !key.ends_with('_')
        && !key.contains("__")
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn small_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        (0i64..4).prop_map(Value::Integer),
        "[ab]{0,2}".prop_map(Value::String),
    ]
}

fn small_record() -> impl Strategy<Value = Record> {
    prop::collection::vec(("[a-d]", small_value()), 0..5)
        .prop_map(|fields| fields.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_normalized_keys_are_snake_case(label in "\\PC{0,24}") {
        let key = normalize_key(&label);
        prop_assert!(key.is_empty() || is_snake_case(&key), "{:?} -> {:?}", label, key);
    }

    #[test]
    fn prop_normalize_key_is_idempotent(label in "[A-Za-z0-9 ()_:-]{0,24}") {
        let key = normalize_key(&label);
        prop_assert_eq!(normalize_key(&key), key.clone());
    }

    #[test]
    fn prop_integers_survive_coercion(n in any::<i64>()) {
        prop_assert_eq!(coerce(&n.to_string()).value, Value::Integer(n));

        let hex = format!("{:#x}", n.unsigned_abs());
        prop_assert_eq!(parse_int(&hex), i64::try_from(n.unsigned_abs()).ok());
    }

    #[test]
    fn prop_floaty_integers_collapse(n in 1u32..1_000_000, zeros in 1usize..6) {
        let raw = format!("{}.{}", n, "0".repeat(zeros));
        prop_assert_eq!(coerce(&raw).value, Value::Integer(i64::from(n)));
    }

    #[test]
    fn prop_fractions_stay_strings(n in 0u32..100_000, frac in 1u32..1000) {
        let raw = format!("{}.{:03}", n, frac);
        prop_assert_eq!(coerce(&raw).value, Value::String(raw.clone()));
    }

    #[test]
    fn prop_kb_values_get_unit_keys(n in 0u32..u32::MAX, unit in "[kK][bB]") {
        let line = format!("Cached: {} {}", n, unit);
        let (key, value) = LineParser::new("meminfo").parse_line(&line).unwrap();
        prop_assert_eq!(key, "cached_kb");
        prop_assert_eq!(value, Value::Integer(i64::from(n)));
    }

    #[test]
    fn prop_flags_are_sorted_permutations(tokens in prop::collection::vec("[a-z0-9_]{1,8}", 0..16)) {
        let flags = split_flags(&tokens.join(" "));
        prop_assert!(flags.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = tokens.clone();
        expected.sort();
        prop_assert_eq!(flags, expected);
    }

    #[test]
    fn prop_compaction_loses_nothing(
        template in small_record(),
        members in prop::collection::vec(small_record(), 0..5),
    ) {
        let mut compacted_template = template.clone();
        let mut compacted = members.clone();
        let removed = compact(&mut compacted_template, &mut compacted);

        // Every original field is still visible, either on the member or
        // hoisted into the template with the same value.
        for (before, after) in members.iter().zip(&compacted) {
            for (key, value) in before {
                let kept = after.get(key) == Some(value);
                let hoisted = !after.contains_key(key) && compacted_template.get(key) == Some(value);
                prop_assert!(kept || hoisted, "lost {} = {}", key, value);
            }
            prop_assert_eq!(before.len(), after.len() + removed);
        }

        // The template only ever grows, and never changes a value.
        for (key, value) in &template {
            prop_assert_eq!(compacted_template.get(key), Some(value));
        }

        if members.len() < 2 {
            prop_assert_eq!(removed, 0);
            prop_assert_eq!(&compacted, &members);
        }
    }
}
