//! Conversion of raw input text into a number.
//!
//! Follows the string-to-number conversion browsers apply to the value of a
//! number field: surrounding whitespace is ignored, empty text is zero,
//! `0x`/`0o`/`0b` prefixes select a radix and everything that is not a
//! numeric literal becomes NaN.

use dioxus::logger::tracing::debug;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoerceError {
    #[error("Not a numeric literal! {0:?}")]
    NotANumber(String),
    #[error("No digits after radix {0} prefix!")]
    MissingDigits(u32),
    #[error("Invalid digit {digit:?} for radix {radix}!")]
    InvalidDigit { digit: char, radix: u32 },
}

fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn all_digits(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

fn split_radix_prefix(text: &str) -> Option<(u32, &str)> {
    let mut chars = text.chars();
    if chars.next() != Some('0') {
        return None;
    }
    let radix = match chars.next()? {
        'x' | 'X' => 16,
        'o' | 'O' => 8,
        'b' | 'B' => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

fn parse_radix(digits: &str, radix: u32) -> Result<f64, CoerceError> {
    if digits.is_empty() {
        return Err(CoerceError::MissingDigits(radix));
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| match c.to_digit(radix) {
            Some(digit) => Ok(acc * f64::from(radix) + f64::from(digit)),
            None => Err(CoerceError::InvalidDigit { digit: c, radix }),
        })
}

fn parse_decimal(text: &str) -> Result<f64, CoerceError> {
    let unsigned = text.strip_prefix(is_sign).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };
    let (integral, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mantissa_ok = !(integral.is_empty() && fraction.is_empty())
        && all_digits(integral)
        && all_digits(fraction);
    let exponent_ok = match exponent {
        Some(exponent) => {
            let digits = exponent.strip_prefix(is_sign).unwrap_or(exponent);
            !digits.is_empty() && all_digits(digits)
        }
        None => true,
    };
    if !mantissa_ok || !exponent_ok {
        return Err(CoerceError::NotANumber(text.to_string()));
    }

    text.parse::<f64>()
        .map_err(|_err| CoerceError::NotANumber(text.to_string()))
}

/// Parses `raw` as a number, reporting why it is not one.
pub fn parse_number(raw: &str) -> Result<f64, CoerceError> {
    let text = raw.trim_matches(is_space);
    if text.is_empty() {
        return Ok(0.0);
    }

    match text {
        "Infinity" | "+Infinity" => return Ok(f64::INFINITY),
        "-Infinity" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }

    match split_radix_prefix(text) {
        Some((radix, digits)) => parse_radix(digits, radix),
        None => parse_decimal(text),
    }
}

/// Like [`parse_number`], but every failure collapses to NaN.
pub fn coerce_number(raw: &str) -> f64 {
    match parse_number(raw) {
        Ok(value) => value,
        Err(err) => {
            debug!("Coercing input to NaN. {err}");
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{coerce_number, parse_number, CoerceError};

    #[test]
    fn decimal_literals() {
        assert_eq!(parse_number("5"), Ok(5.0));
        assert_eq!(parse_number("-3"), Ok(-3.0));
        assert_eq!(parse_number("+7"), Ok(7.0));
        assert_eq!(parse_number("2.5"), Ok(2.5));
        assert_eq!(parse_number("1."), Ok(1.0));
        assert_eq!(parse_number(".5"), Ok(0.5));
        assert_eq!(parse_number("1e3"), Ok(1000.0));
        assert_eq!(parse_number("15E-1"), Ok(1.5));
        assert_eq!(parse_number("007"), Ok(7.0));
    }

    #[test]
    fn whitespace_and_empty() {
        assert_eq!(parse_number(""), Ok(0.0));
        assert_eq!(parse_number("   "), Ok(0.0));
        assert_eq!(parse_number(" \t12\n"), Ok(12.0));
        assert_eq!(parse_number("\u{feff}4"), Ok(4.0));
    }

    #[test]
    fn infinity_spellings() {
        assert_eq!(parse_number("Infinity"), Ok(f64::INFINITY));
        assert_eq!(parse_number("+Infinity"), Ok(f64::INFINITY));
        assert_eq!(parse_number("-Infinity"), Ok(f64::NEG_INFINITY));
        assert!(parse_number("infinity").is_err());
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
    }

    #[test]
    fn radix_prefixes() {
        assert_eq!(parse_number("0x1F"), Ok(31.0));
        assert_eq!(parse_number("0XfF"), Ok(255.0));
        assert_eq!(parse_number("0o17"), Ok(15.0));
        assert_eq!(parse_number("0b101"), Ok(5.0));
        assert_eq!(parse_number("0x"), Err(CoerceError::MissingDigits(16)));
        assert_eq!(
            parse_number("0b102"),
            Err(CoerceError::InvalidDigit {
                digit: '2',
                radix: 2
            })
        );
        assert!(parse_number("-0x10").is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        for raw in ["abc", "5abc", "1.2.3", ".", "+", "-", "1e", "1e+", "e5", "1 2", "--1"] {
            assert_eq!(
                parse_number(raw),
                Err(CoerceError::NotANumber(raw.trim().to_string())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn coerce_collapses_failures_to_nan() {
        assert!(coerce_number("abc").is_nan());
        assert!(coerce_number("0x").is_nan());
        assert_eq!(coerce_number(" 9 "), 9.0);
        assert_eq!(coerce_number(""), 0.0);
    }
}
