use budget_console::{
    amount::{format_amount, regroup, Amount},
    OutputError,
};
use regex::Regex;

#[test]
fn formats_reference_values() {
    assert_eq!(format_amount(1234.5).unwrap(), "1,234.50");
    assert_eq!(format_amount(-1234.5).unwrap(), "-1,234.50");
    assert_eq!(format_amount(0.0).unwrap(), "0.00");
    assert_eq!(format_amount(12.3).unwrap(), "12.30");
    assert_eq!(format_amount(1_000_000.0).unwrap(), "1,000,000.00");
}

#[test]
fn rounding_can_carry_into_a_new_group() {
    assert_eq!(format_amount(999.999).unwrap(), "1,000.00");
    assert_eq!(format_amount(-999_999.999).unwrap(), "-1,000,000.00");
}

#[test]
fn rounds_half_away_from_zero() {
    assert_eq!(format_amount(0.125).unwrap(), "0.13");
    assert_eq!(format_amount(-0.125).unwrap(), "-0.13");
    assert_eq!(format_amount(2.5).unwrap(), "2.50");
}

#[test]
fn grouping_preserves_digits_and_positions() {
    let shape = Regex::new(r"^\d{1,3}(,\d{3})*\.\d{2}$").unwrap();
    let samples = [
        0.0, 0.01, 7.0, 99.99, 100.0, 1_000.0, 54_321.09, 123_456.0, 7_654_321.5, 1e12,
        1.234_567_890_123_4e13, 98_765_432_109_876.55, 3.3e14, 1e15 + 0.25, 7.7e16,
        123_456_789_012_345_680.0, 1e18,
    ];
    for value in samples {
        let text = format_amount(value).unwrap();
        assert!(shape.is_match(&text), "{value} rendered as {text}");

        let expected_digits = format!("{:.2}", value).replace('.', "");
        let actual_digits: String = text.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(actual_digits, expected_digits);

        let dot = text.find('.').unwrap();
        let integer_digits: String = text[..dot].chars().filter(char::is_ascii_digit).collect();
        assert_eq!(integer_digits, (value.trunc() as u128).to_string());

        for (idx, ch) in text[..dot].char_indices() {
            if ch == ',' {
                let digits_right = text[idx + 1..dot]
                    .chars()
                    .filter(char::is_ascii_digit)
                    .count();
                assert_eq!(digits_right % 3, 0, "misplaced separator in {text}");
            }
        }
    }
}

#[test]
fn large_amounts_keep_their_exact_digits() {
    let cases = [
        (98_765_432_109_876.55, "98,765,432,109,876.55"),
        (1_000_000_000_000_000.25, "1,000,000,000,000,000.25"),
        (4_503_599_627_370_497.0, "4,503,599,627,370,497.00"),
        (123_456_789_012_345_680.0, "123,456,789,012,345,680.00"),
        (1e18, "1,000,000,000,000,000,000.00"),
        (-1e18, "-1,000,000,000,000,000,000.00"),
    ];
    for (value, expected) in cases {
        assert_eq!(format_amount(value).unwrap(), expected, "{value}");
    }
}

#[test]
fn values_just_below_a_midpoint_round_down() {
    assert_eq!(format_amount(0.015).unwrap(), "0.01");
    assert_eq!(format_amount(1.005).unwrap(), "1.00");
}

#[test]
fn negative_sign_sticks_to_the_first_group() {
    let text = format_amount(-9_876_543.21).unwrap();
    assert_eq!(text, "-9,876,543.21");
    assert!(!text.contains("-,"));
}

#[test]
fn regroup_is_idempotent() {
    for value in [0.0, 12.3, -1234.5, 1_000_000.0, 987_654_321.12] {
        let once = format_amount(value).unwrap();
        assert_eq!(regroup(&once), once);
        assert_eq!(regroup(&regroup(&once)), once);
    }
    assert_eq!(regroup("1234567.00"), "1,234,567.00");
    assert_eq!(regroup("-12,34567.89"), "-1,234,567.89");
}

#[test]
fn non_finite_amounts_are_rejected() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = format_amount(value).unwrap_err();
        assert!(matches!(err, OutputError::InvalidAmount(_)));
    }
}

#[test]
fn amount_display_interpolates() {
    assert_eq!(
        format!("Balance: {}", Amount(25_000.4)),
        "Balance: 25,000.40"
    );
}
