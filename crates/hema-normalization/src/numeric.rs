//! Numeric coercion for raw measurements.
//!
//! Laboratory values arrive as JSON numbers, numeric strings, or free text
//! ("N/A", "-", "tidak diperiksa"). Anything that is not a finite number is
//! treated as a missing measurement rather than an error.

use hema_model::{Measurement, RawValue};

/// Parse a string value to a finite f64.
///
/// Reads the longest numeric prefix after trimming, so trailing units and
/// annotations are ignored:
/// - Standard numbers: "123", "-45.67", ".5"
/// - Whitespace: "  123  "
/// - Scientific notation: "1.23e5"
/// - Units: "13.5 g/dL" is 13.5
///
/// Returns None when no digits lead the input and for non-finite values
/// ("nan", "inf", "1e999"). A comma ends the number: "10,5" is 10.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];

    if prefix.is_empty() {
        return None;
    }

    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Byte length of the leading `[sign] digits [. digits] [e [sign] digits]`.
/// Zero when the mantissa has no digits.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exp_digits = count_digits(&bytes[exponent..]);
        if exp_digits > 0 {
            end = exponent + exp_digits;
        }
    }

    end
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Coerce a raw value into a measurement. Never fails.
pub fn normalize(raw: &RawValue) -> Measurement {
    let value = match raw {
        RawValue::Number(number) if number.is_finite() => Some(*number),
        RawValue::Number(_) => None,
        RawValue::Text(text) => parse_numeric(text),
        RawValue::Flag(_) | RawValue::Null => None,
    };
    value.map_or(Measurement::Absent, Measurement::Value)
}

/// Check if a raw value would normalize to a number.
pub fn is_numeric(raw: &RawValue) -> bool {
    !normalize(raw).is_absent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_integer() {
        assert_eq!(parse_numeric("123"), Some(123.0));
        assert_eq!(parse_numeric("-456"), Some(-456.0));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(parse_numeric("13.5"), Some(13.5));
        assert_eq!(parse_numeric("-0.5"), Some(-0.5));
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(parse_numeric("  150000  "), Some(150000.0));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_numeric("1.5e5"), Some(150000.0));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_numeric("N/A"), None);
        assert_eq!(parse_numeric("."), None);
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric("g/dL 13.5"), None);
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        assert_eq!(parse_numeric("13.5 g/dL"), Some(13.5));
        assert_eq!(parse_numeric("7000/uL"), Some(7000.0));
        assert_eq!(parse_numeric("12.34.56"), Some(12.34));
        assert_eq!(parse_numeric("1.5e"), Some(1.5));
        assert_eq!(parse_numeric("2e-3x"), Some(0.002));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric("5."), Some(5.0));
    }

    #[test]
    fn test_comma_ends_the_number() {
        assert_eq!(parse_numeric("10,5"), Some(10.0));
        assert_eq!(parse_numeric("12,500"), Some(12.0));
    }

    #[test]
    fn test_non_finite_is_absent() {
        assert_eq!(parse_numeric("nan"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("1e999"), None);
        assert_eq!(normalize(&RawValue::Number(f64::NAN)), Measurement::Absent);
        assert_eq!(normalize(&RawValue::Number(f64::INFINITY)), Measurement::Absent);
    }

    #[test]
    fn test_normalize_variants() {
        assert_eq!(normalize(&RawValue::Number(10.0)), Measurement::Value(10.0));
        assert_eq!(normalize(&RawValue::from("7000")), Measurement::Value(7000.0));
        assert_eq!(normalize(&RawValue::Null), Measurement::Absent);
        assert_eq!(normalize(&RawValue::Flag(true)), Measurement::Absent);
        assert!(is_numeric(&RawValue::from(" 4.5 ")));
        assert!(!is_numeric(&RawValue::from("N/A")));
        assert_eq!(normalize(&RawValue::from("13.5 g/dL")), Measurement::Value(13.5));
    }
}
