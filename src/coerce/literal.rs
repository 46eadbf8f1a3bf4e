//! Numeric Literal Module
//!
//! Parses the string forms accepted by numeric coercion.

// == Whitespace ==
/// Whitespace stripped before parsing: line terminators, the ASCII
/// controls tab through carriage return, the `Zs` space separators and the
/// byte order mark. U+0085 is not included.
fn is_literal_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

// == Parse Numeric Literal ==
/// Parses a string into a number.
///
/// Accepted forms, after trimming surrounding whitespace:
/// - empty string: `0`
/// - `0b` / `0o` / `0x` prefixed integers (case-insensitive prefix)
/// - signed decimal or exponential literals, and `Infinity` with an optional sign
///
/// Signed hexadecimal literals such as `-0x1a` are rejected. Anything
/// unparseable yields NaN.
pub(crate) fn parse_numeric_literal(input: &str) -> f64 {
    let s = input.trim_matches(is_literal_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    if let Some(digits) = strip_radix_prefix(s, 'b') {
        return parse_radix(digits, 2);
    }
    if let Some(digits) = strip_radix_prefix(s, 'o') {
        return parse_radix(digits, 8);
    }
    if is_signed_hex(s) {
        return f64::NAN;
    }
    if let Some(digits) = strip_radix_prefix(s, 'x') {
        return parse_radix(digits, 16);
    }

    parse_decimal(s)
}

/// Returns the digits after a `0<marker>` prefix, matching the marker case-insensitively.
fn strip_radix_prefix(s: &str, marker: char) -> Option<&str> {
    let rest = s.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

fn is_signed_hex(s: &str) -> bool {
    s.strip_prefix(is_sign)
        .and_then(|rest| strip_radix_prefix(rest, 'x'))
        .is_some()
}

/// Parses unsigned digits in the given radix; an empty or invalid digit run is NaN.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return f64::NAN;
    }
    match u64::from_str_radix(digits, radix) {
        Ok(n) => n as f64,
        // Too wide for u64: accumulate in floating point.
        Err(_) => digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d)),
    }
}

fn parse_decimal(s: &str) -> f64 {
    let unsigned = s.strip_prefix(is_sign).unwrap_or(s);
    if unsigned == "Infinity" {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    if !is_decimal_literal(s) {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// Validates `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
///
/// `str::parse::<f64>` also accepts `inf`, `nan` and friends, which are not
/// numeric literals here.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    let skip_digits = |i: &mut usize| {
        let start = *i;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - start
    };

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_digits = skip_digits(&mut i);
    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        frac_digits = skip_digits(&mut i);
    }
    if int_digits + frac_digits == 0 {
        return false;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        if skip_digits(&mut i) == 0 {
            return false;
        }
    }
    i == bytes.len()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_forms() {
        assert_eq!(parse_numeric_literal("42"), 42.0);
        assert_eq!(parse_numeric_literal("-10.5"), -10.5);
        assert_eq!(parse_numeric_literal("+3"), 3.0);
        assert_eq!(parse_numeric_literal(".5"), 0.5);
        assert_eq!(parse_numeric_literal("5."), 5.0);
        assert_eq!(parse_numeric_literal("1e3"), 1000.0);
        assert_eq!(parse_numeric_literal("2.5E-1"), 0.25);
        assert_eq!(parse_numeric_literal("007"), 7.0);
    }

    #[test]
    fn test_infinity_tokens() {
        assert_eq!(parse_numeric_literal("Infinity"), f64::INFINITY);
        assert_eq!(parse_numeric_literal("+Infinity"), f64::INFINITY);
        assert_eq!(parse_numeric_literal("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_numeric_literal("1e400"), f64::INFINITY);
    }

    #[test]
    fn test_rust_only_tokens_rejected() {
        for s in ["inf", "infinity", "-inf", "NaN", "nan", "1_000", "1e", ".", "+", "e5", "1.2.3"] {
            assert!(parse_numeric_literal(s).is_nan(), "{:?} should be NaN", s);
        }
    }

    #[test]
    fn test_radix_prefixes() {
        assert_eq!(parse_numeric_literal("0b101"), 5.0);
        assert_eq!(parse_numeric_literal("0B0"), 0.0);
        assert_eq!(parse_numeric_literal("0o7"), 7.0);
        assert_eq!(parse_numeric_literal("0O10"), 8.0);
        assert_eq!(parse_numeric_literal("0x1a"), 26.0);
        assert_eq!(parse_numeric_literal("0XFF"), 255.0);
        assert!(parse_numeric_literal("0b102").is_nan());
        assert!(parse_numeric_literal("0o8").is_nan());
        assert!(parse_numeric_literal("0b").is_nan());
        assert!(parse_numeric_literal("0b+1").is_nan());
    }

    #[test]
    fn test_signed_and_invalid_hex() {
        assert!(parse_numeric_literal("-0x1a").is_nan());
        assert!(parse_numeric_literal("+0x1a").is_nan());
        assert!(parse_numeric_literal("0xGHI").is_nan());
        assert!(parse_numeric_literal("-0b1").is_nan());
    }

    #[test]
    fn test_wide_radix_literal() {
        let digits = "1".repeat(70);
        let parsed = parse_numeric_literal(&format!("0b{}", digits));
        assert_eq!(parsed, 2f64.powi(70));
    }

    #[test]
    fn test_whitespace_and_empty() {
        assert_eq!(parse_numeric_literal("   42   "), 42.0);
        assert_eq!(parse_numeric_literal("\n\t-10.5\t\n"), -10.5);
        assert_eq!(parse_numeric_literal("\u{feff}7"), 7.0);
        assert_eq!(parse_numeric_literal(""), 0.0);
        assert_eq!(parse_numeric_literal(" \t\n"), 0.0);
        assert!(parse_numeric_literal("abc").is_nan());
        assert!(parse_numeric_literal("4 2").is_nan());
    }

    #[test]
    fn test_unicode_whitespace() {
        assert_eq!(parse_numeric_literal("\u{a0}1\u{3000}"), 1.0);
        assert_eq!(parse_numeric_literal("\u{2028}2\u{2029}"), 2.0);
        assert_eq!(parse_numeric_literal("\u{b}\u{c}\r3"), 3.0);
        assert_eq!(parse_numeric_literal("\u{2009}4\u{202f}"), 4.0);

        // Next line is not a separator
        assert!(parse_numeric_literal("\u{85}42").is_nan());
        assert!(parse_numeric_literal("42\u{85}").is_nan());
    }
}
