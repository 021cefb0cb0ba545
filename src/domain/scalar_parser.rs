// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type-directed parsing of raw lookup values.
//!
//! These functions never fail loudly: a value that does not fit the declared
//! type yields `None`, and the resolver decides whether a default applies.

use crate::domain::scalar::{RawValue, ScalarType, ScalarValue};

/// Parses a raw value according to the declared type.
///
/// Returns `None` when the value is absent or cannot be converted.
///
/// # Examples
///
/// ```
/// use envschema::domain::{parse_scalar, RawValue, ScalarType, ScalarValue};
///
/// let raw = RawValue::from(" True ");
/// assert_eq!(
///     parse_scalar(ScalarType::Boolean, Some(&raw)),
///     Some(ScalarValue::Boolean(true))
/// );
/// assert_eq!(parse_scalar(ScalarType::Number, None), None);
/// ```
pub fn parse_scalar(ty: ScalarType, raw: Option<&RawValue>) -> Option<ScalarValue> {
    match ty {
        ScalarType::String => parse_string(raw).map(ScalarValue::String),
        ScalarType::Number => parse_number(raw).map(ScalarValue::Number),
        ScalarType::Boolean => parse_boolean(raw).map(ScalarValue::Boolean),
    }
}

/// Trims textual input. Whitespace-only text becomes the empty string.
pub fn parse_string(raw: Option<&RawValue>) -> Option<String> {
    match raw? {
        RawValue::Text(s) => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Parses the leading number of trimmed text.
///
/// The longest numeric prefix is read and the rest ignored, so `"42px"` is 42.
/// `Infinity` and `-Infinity` are numbers. Text without a numeric prefix, and
/// NaN, are rejected.
///
/// # Examples
///
/// ```
/// use envschema::domain::{parse_number, RawValue};
///
/// assert_eq!(parse_number(Some(&RawValue::from(" 3.5 apples"))), Some(3.5));
/// assert_eq!(parse_number(Some(&RawValue::from("-Infinity"))), Some(f64::NEG_INFINITY));
/// assert_eq!(parse_number(Some(&RawValue::from("px42"))), None);
/// ```
pub fn parse_number(raw: Option<&RawValue>) -> Option<f64> {
    let n = match raw? {
        RawValue::Text(s) => leading_number(s.trim())?,
        RawValue::Number(n) => *n,
        RawValue::Boolean(_) => return None,
    };
    (!n.is_nan()).then_some(n)
}

/// Reads `[sign] Infinity` or `[sign] digits [. digits] [e [sign] digits]`
/// from the start of `s`.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let negative = bytes.first() == Some(&b'-');
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = digits_from(end);
    end += int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits + frac_digits == 0 {
            return None;
        }
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    } else if int_digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    s[..end].parse().ok()
}

/// Parses `true`/`false` case-insensitively; numeric `1`/`0` are accepted.
pub fn parse_boolean(raw: Option<&RawValue>) -> Option<bool> {
    match raw? {
        RawValue::Text(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Some(true)
            } else if s.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        RawValue::Number(n) if *n == 1.0 => Some(true),
        RawValue::Number(n) if *n == 0.0 => Some(false),
        RawValue::Number(_) => None,
        RawValue::Boolean(b) => Some(*b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawValue {
        RawValue::from(s)
    }

    #[test]
    fn test_string_trims() {
        assert_eq!(parse_string(Some(&text("  hello "))), Some("hello".to_string()));
    }

    #[test]
    fn test_string_whitespace_only_is_empty_not_unparseable() {
        assert_eq!(parse_string(Some(&text("   "))), Some(String::new()));
        assert_eq!(parse_string(Some(&text(""))), Some(String::new()));
    }

    #[test]
    fn test_string_rejects_non_text() {
        assert_eq!(parse_string(None), None);
        assert_eq!(parse_string(Some(&RawValue::Number(1.0))), None);
        assert_eq!(parse_string(Some(&RawValue::Boolean(true))), None);
    }

    #[test]
    fn test_number_parses_decimal() {
        assert_eq!(parse_number(Some(&text("42"))), Some(42.0));
        assert_eq!(parse_number(Some(&text(" -3.5 "))), Some(-3.5));
        assert_eq!(parse_number(Some(&text("1e3"))), Some(1000.0));
        assert_eq!(parse_number(Some(&text("0"))), Some(0.0));
    }

    #[test]
    fn test_number_rejects_text_without_numeric_prefix() {
        for raw in ["abc", "", "   ", "px42", ".", "-", "+.", "e5", "NaN", "nan", "inf", "infinity"] {
            assert_eq!(parse_number(Some(&text(raw))), None, "{raw}");
        }
        assert_eq!(parse_number(Some(&RawValue::Number(f64::NAN))), None);
    }

    #[test]
    fn test_number_reads_leading_prefix() {
        assert_eq!(parse_number(Some(&text("42px"))), Some(42.0));
        assert_eq!(parse_number(Some(&text("3.5 apples"))), Some(3.5));
        assert_eq!(parse_number(Some(&text("12.5.7"))), Some(12.5));
        assert_eq!(parse_number(Some(&text("1,000"))), Some(1.0));
        assert_eq!(parse_number(Some(&text("0x10"))), Some(0.0));
        assert_eq!(parse_number(Some(&text("-.5kg"))), Some(-0.5));
        assert_eq!(parse_number(Some(&text("7."))), Some(7.0));
    }

    #[test]
    fn test_number_exponent_needs_digits() {
        assert_eq!(parse_number(Some(&text("2e3"))), Some(2000.0));
        assert_eq!(parse_number(Some(&text("2E-1x"))), Some(0.2));
        assert_eq!(parse_number(Some(&text("2e"))), Some(2.0));
        assert_eq!(parse_number(Some(&text("2e+"))), Some(2.0));
        assert_eq!(parse_number(Some(&text("2em"))), Some(2.0));
    }

    #[test]
    fn test_number_accepts_infinity() {
        assert_eq!(parse_number(Some(&text("Infinity"))), Some(f64::INFINITY));
        assert_eq!(parse_number(Some(&text(" +Infinity "))), Some(f64::INFINITY));
        assert_eq!(parse_number(Some(&text("-Infinity"))), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number(Some(&text("Infinityx"))), Some(f64::INFINITY));
        assert_eq!(parse_number(Some(&text("1e400"))), Some(f64::INFINITY));
        assert_eq!(
            parse_number(Some(&RawValue::Number(f64::NEG_INFINITY))),
            Some(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn test_number_non_text_input() {
        assert_eq!(parse_number(Some(&RawValue::Number(7.0))), Some(7.0));
        assert_eq!(parse_number(Some(&RawValue::Boolean(true))), None);
        assert_eq!(parse_number(None), None);
    }

    #[test]
    fn test_boolean_case_insensitive() {
        for raw in ["TRUE", "true", " True ", "tRuE"] {
            assert_eq!(parse_boolean(Some(&text(raw))), Some(true), "{raw}");
        }
        for raw in ["FALSE", "false", "\tFalse\n"] {
            assert_eq!(parse_boolean(Some(&text(raw))), Some(false), "{raw}");
        }
    }

    #[test]
    fn test_boolean_rejects_other_tokens() {
        for raw in ["yes", "no", "1", "0", "on", ""] {
            assert_eq!(parse_boolean(Some(&text(raw))), None, "{raw}");
        }
    }

    #[test]
    fn test_boolean_numeric_input() {
        assert_eq!(parse_boolean(Some(&RawValue::Number(1.0))), Some(true));
        assert_eq!(parse_boolean(Some(&RawValue::Number(0.0))), Some(false));
        assert_eq!(parse_boolean(Some(&RawValue::Number(2.0))), None);
        assert_eq!(parse_boolean(Some(&RawValue::Boolean(false))), Some(false));
    }

    #[test]
    fn test_parse_scalar_dispatch() {
        assert_eq!(
            parse_scalar(ScalarType::String, Some(&text(" a "))),
            Some(ScalarValue::String("a".to_string()))
        );
        assert_eq!(
            parse_scalar(ScalarType::Number, Some(&text("42"))),
            Some(ScalarValue::Number(42.0))
        );
        assert_eq!(parse_scalar(ScalarType::Boolean, Some(&text("yes"))), None);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let raw = text(" 12.5 ");
        assert_eq!(
            parse_scalar(ScalarType::Number, Some(&raw)),
            parse_scalar(ScalarType::Number, Some(&raw))
        );
    }
}
