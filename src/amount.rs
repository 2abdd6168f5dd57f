//! Amount rendering for console output: two decimals and comma grouping,
//! e.g. `1234567.891` becomes `1,234,567.89`.

use std::fmt;

use crate::errors::OutputError;

/// Separator inserted between digit groups of the integer part.
pub const GROUPING_SEPARATOR: char = ',';

/// Formats `amount` as `[-]d,ddd.dd`.
///
/// Digits come from the exact binary value, so large amounts keep their
/// integer part. Exact midpoints between two cents round away from zero. A
/// value that rounds to zero is printed unsigned. NaN and infinities are
/// rejected.
pub fn format_amount(amount: f64) -> Result<String, OutputError> {
    if !amount.is_finite() {
        tracing::debug!(amount, "rejecting non-finite amount");
        return Err(OutputError::InvalidAmount(amount));
    }

    let magnitude = amount.abs();
    let fixed = if is_cent_midpoint(magnitude) {
        // Exactly three decimals, the last one a 5.
        let exact = format!("{:.3}", magnitude);
        increment_last_digit(&exact[..exact.len() - 1])
    } else {
        format!("{:.2}", magnitude)
    };

    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    Ok(format!("{sign}{}", regroup(&fixed)))
}

/// True when `magnitude` lies exactly halfway between two cents.
///
/// Such values are odd multiples of 1/8 (`x.125`, `x.375`, `x.625`, `x.875`);
/// no other binary fraction ends in a 5 at the third decimal.
fn is_cent_midpoint(magnitude: f64) -> bool {
    let eighths = magnitude * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 == 1.0
}

/// Adds one unit in the last place of a plain decimal string.
fn increment_last_digit(number: &str) -> String {
    let mut digits: Vec<u8> = number.bytes().collect();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if !carry {
            break;
        }
        match *digit {
            b'.' => continue,
            b'9' => *digit = b'0',
            _ => {
                *digit += 1;
                carry = false;
            }
        }
    }
    let mut out = String::with_capacity(digits.len() + 1);
    if carry {
        out.push('1');
    }
    out.extend(digits.into_iter().map(char::from));
    out
}

/// Regroups the integer part of an already rendered amount.
///
/// Existing separators are discarded first, so the transform is idempotent.
pub fn regroup(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac) = unsigned.split_at(unsigned.find('.').unwrap_or(unsigned.len()));
    let digits: String = int_part
        .chars()
        .filter(|ch| *ch != GROUPING_SEPARATOR)
        .collect();
    format!(
        "{sign}{}{frac}",
        group_digits(&digits, GROUPING_SEPARATOR)
    )
}

/// Inserts `separator` every three characters counted from the right.
pub fn group_digits(digits: &str, separator: char) -> String {
    let count = digits.chars().count();
    let mut grouped = String::with_capacity(digits.len() + count / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (count - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Display wrapper so amounts can be interpolated into log messages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(pub f64);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match format_amount(self.0) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}
