// Tests for offer terms decoding and range coverage
//
// Monetary values must keep their exact decimal value from the JSON text
// the bureau sends, and coverage must be a closed-range test on both axes.

use std::str::FromStr;

use creditapi::offers::OfferTerms;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn decode(min: &str, max: &str, min_n: u32, max_n: u32, rate: &str) -> OfferTerms {
    let payload = format!(
        concat!(
            r#"{{"valorMin": {}, "valorMax": {}, "#,
            r#""QntParcelaMin": {}, "QntParcelaMax": {}, "jurosMes": {}}}"#
        ),
        min, max, min_n, max_n, rate
    );
    serde_json::from_str(&payload).expect("valid terms payload")
}

proptest! {
    /// Property: rates written as JSON numbers decode to the same decimal
    #[test]
    fn prop_rate_decodes_exactly(mantissa in 0i64..1_000_000i64, scale in 1u32..8u32) {
        let rate = Decimal::new(mantissa, scale);
        let terms = decode("1000", "10000", 1, 12, &rate.to_string());
        prop_assert_eq!(terms.monthly_interest_rate, rate);
    }

    /// Property: coverage matches both closed ranges
    #[test]
    fn prop_covers_is_range_containment(
        min in 0u64..10_000u64,
        span in 0u64..10_000u64,
        min_n in 0u32..60u32,
        span_n in 0u32..60u32,
        amount in 0u64..25_000u64,
        count in 0u32..150u32,
    ) {
        let terms = OfferTerms::new(
            Decimal::from(min),
            Decimal::from(min + span),
            min_n,
            min_n + span_n,
            Decimal::ZERO,
        ).unwrap();

        let expected = (min..=min + span).contains(&amount)
            && (min_n..=min_n + span_n).contains(&count);
        prop_assert_eq!(terms.covers(Decimal::from(amount), count), expected);
    }
}

#[test]
fn test_encoding_keeps_numbers_exact() {
    let terms = decode("1500.50", "15000", 5, 16, "0.015");
    let encoded = serde_json::to_value(&terms).unwrap();

    assert_eq!(encoded["valorMin"].to_string(), "1500.50");
    assert_eq!(encoded["jurosMes"].to_string(), "0.015");
    assert_eq!(
        Decimal::from_str(&encoded["valorMax"].to_string()).unwrap(),
        Decimal::from(15000)
    );
}

#[test]
fn test_string_encoded_values_are_accepted() {
    let terms = decode("\"1000\"", "\"10000\"", 1, 12, "\"0.01\"");
    assert_eq!(terms.monthly_interest_rate, Decimal::new(1, 2));
}

#[test]
fn test_invariant_violations_detected() {
    assert!(decode("5000", "1000", 1, 12, "0.01").validate().is_err());
    assert!(decode("1000", "5000", 12, 1, "0.01").validate().is_err());
    assert!(decode("1000", "5000", 1, 12, "-0.01").validate().is_err());
}
