// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests verify that value classification is total and deterministic
//! over arbitrary inputs, and that parsing and lookup never panic whatever
//! the input looks like.

use groupcfg::adapters::PropertiesParser;
use groupcfg::domain::{PropertyValue, ValueKind};
use groupcfg::ports::ConfigParser;
use proptest::prelude::*;

// Classification is total and deterministic over any string
proptest! {
    #[test]
    fn test_classify_total_and_deterministic(s in "\\PC*") {
        let first = PropertyValue::classify(&s);
        let second = PropertyValue::classify(&s);
        prop_assert_eq!(first.kind(), second.kind());
        // NaN-valued floats are deterministic but not self-equal
        if !matches!(first, PropertyValue::Float(f) if f.is_nan()) {
            prop_assert_eq!(first, second);
        }
    }
}

// Any i64 rendered to text classifies back to the same integer
proptest! {
    #[test]
    fn test_classify_integer_roundtrip(n in prop::num::i64::ANY) {
        let value = PropertyValue::classify(&n.to_string());
        prop_assert_eq!(value, PropertyValue::Integer(n));
    }
}

// Any finite float renders to a numeric variant (whole-number floats print
// without a fractional part and classify as integers)
proptest! {
    #[test]
    fn test_classify_float_renders_numeric(f in prop::num::f64::NORMAL) {
        let value = PropertyValue::classify(&f.to_string());
        prop_assert!(matches!(
            value.kind(),
            ValueKind::Integer | ValueKind::Float
        ));
    }
}

// A comma in non-numeric text always produces a list with one element per
// delimiter gap
proptest! {
    #[test]
    fn test_classify_comma_text_is_list(
        head in "[a-z ]{0,8}",
        tail in proptest::collection::vec("[a-z ]{0,8}", 1..5)
    ) {
        let raw = format!("{},{}", head, tail.join(","));
        let value = PropertyValue::classify(&raw);
        let elements = value.as_list().unwrap();
        prop_assert_eq!(elements.len(), tail.len() + 1);
    }
}

// Text that is not numeric, not a boolean spelling, and has no comma stays a
// string, unchanged
proptest! {
    #[test]
    fn test_classify_plain_text_is_identity(s in "[a-zA-Z_/ ]{1,32}") {
        prop_assume!(s.parse::<f64>().is_err());
        prop_assume!(!s.eq_ignore_ascii_case("true"));
        prop_assume!(!s.eq_ignore_ascii_case("false"));

        let value = PropertyValue::classify(&s);
        prop_assert_eq!(value, PropertyValue::String(s));
    }
}

// The parser returns a result, never panics, on arbitrary content
proptest! {
    #[test]
    fn test_parse_never_panics(content in "\\PC*") {
        let parser = PropertiesParser::new();
        let _ = parser.parse(&content, &[]);
        let _ = parser.parse(&content, &["test".to_string()]);
    }
}

// Lookup is total over arbitrary keys on a real parsed store
proptest! {
    #[test]
    fn test_lookup_never_panics(key in "\\PC*") {
        let parser = PropertiesParser::new();
        let config = parser
            .parse("[ftp]\npath=/tmp/\nparams=a,b,c\n", &[])
            .unwrap();
        let _ = config.get(&key);
        let _ = config.get_property(&key);
        let _ = config.contains(&key);
    }
}
