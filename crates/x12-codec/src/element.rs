//! Element codec
//!
//! Converts a single raw token to and from a typed value, enforcing the
//! declared length bounds, character class, implied-decimal convention,
//! and enumeration membership. Coordinates (segment tag plus element
//! position) ride along for diagnostics.

use crate::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use x12_ir::{ElementValue, X12Number};
use x12_schema::{ElementDescriptor, ElementKind};

/// Decode one raw token against its element descriptor.
pub fn decode_element(tag: &str, token: &str, desc: &ElementDescriptor) -> Result<ElementValue> {
    check_length(tag, token.len(), desc)?;

    match &desc.kind {
        ElementKind::Alphanumeric => {
            check_class(tag, token, desc, "alphanumeric", is_printable)?;
            Ok(ElementValue::Text(token.to_string()))
        }
        ElementKind::Identifier(set) => {
            check_class(tag, token, desc, "identifier", |c| c.is_ascii_alphanumeric())?;
            let code = set.normalize(token);
            if !set.contains(&code) {
                return Err(Error::UnknownCode {
                    segment: tag.to_string(),
                    position: desc.position,
                    code,
                    set: set.name,
                });
            }
            Ok(ElementValue::Code(code))
        }
        ElementKind::Numeric { decimals } => {
            let units = parse_integer(tag, token, desc)?;
            Ok(ElementValue::Number(X12Number::new(units, *decimals)))
        }
        ElementKind::Decimal => Ok(ElementValue::Number(parse_decimal(tag, token, desc)?)),
        ElementKind::Date => {
            check_class(tag, token, desc, "date", |c| c.is_ascii_digit())?;
            let date = match token.len() {
                8 => NaiveDate::parse_from_str(token, "%Y%m%d").ok(),
                6 => NaiveDate::parse_from_str(token, "%y%m%d").ok(),
                _ => None,
            };
            date.map(ElementValue::Date).ok_or_else(|| Error::NumericFormat {
                segment: tag.to_string(),
                position: desc.position,
                message: format!("{token:?} is not a valid CCYYMMDD or YYMMDD date"),
            })
        }
        ElementKind::Time => {
            check_class(tag, token, desc, "time", |c| c.is_ascii_digit())?;
            let time = match token.len() {
                4 => NaiveTime::parse_from_str(token, "%H%M").ok(),
                6 => NaiveTime::parse_from_str(token, "%H%M%S").ok(),
                _ => None,
            };
            time.map(ElementValue::Time).ok_or_else(|| Error::NumericFormat {
                segment: tag.to_string(),
                position: desc.position,
                message: format!("{token:?} is not a valid HHMM or HHMMSS time"),
            })
        }
    }
}

/// Encode one typed value back into its raw token.
pub fn encode_element(tag: &str, value: &ElementValue, desc: &ElementDescriptor) -> Result<String> {
    let token = match (&desc.kind, value) {
        (ElementKind::Alphanumeric, ElementValue::Text(text)) => {
            check_class(tag, text, desc, "alphanumeric", is_printable)?;
            text.clone()
        }
        (ElementKind::Identifier(set), ElementValue::Code(code)) => {
            if !set.contains(code) {
                return Err(Error::UnknownCode {
                    segment: tag.to_string(),
                    position: desc.position,
                    code: code.clone(),
                    set: set.name,
                });
            }
            code.clone()
        }
        (ElementKind::Numeric { decimals }, ElementValue::Number(number)) => {
            let rescaled = number.rescaled(*decimals).ok_or_else(|| Error::NumericFormat {
                segment: tag.to_string(),
                position: desc.position,
                message: format!(
                    "{number} cannot be carried with {decimals} implied decimal places"
                ),
            })?;
            format!("{:0width$}", rescaled.units, width = desc.min_length)
        }
        (ElementKind::Decimal, ElementValue::Number(number)) => number.to_string(),
        (ElementKind::Date, ElementValue::Date(date)) => {
            if desc.max_length >= 8 {
                date.format("%Y%m%d").to_string()
            } else {
                date.format("%y%m%d").to_string()
            }
        }
        (ElementKind::Time, ElementValue::Time(time)) => {
            if desc.min_length >= 6 {
                time.format("%H%M%S").to_string()
            } else {
                time.format("%H%M").to_string()
            }
        }
        (kind, _) => {
            return Err(Error::KindMismatch {
                segment: tag.to_string(),
                position: desc.position,
                kind: kind.name(),
            });
        }
    };

    check_length(tag, token.len(), desc)?;
    Ok(token)
}

fn check_length(tag: &str, length: usize, desc: &ElementDescriptor) -> Result<()> {
    if length < desc.min_length || length > desc.max_length {
        return Err(Error::LengthOutOfRange {
            segment: tag.to_string(),
            position: desc.position,
            length,
            min: desc.min_length,
            max: desc.max_length,
        });
    }
    Ok(())
}

fn check_class(
    tag: &str,
    token: &str,
    desc: &ElementDescriptor,
    class: &'static str,
    allowed: impl Fn(char) -> bool,
) -> Result<()> {
    if let Some(found) = token.chars().find(|&c| !allowed(c)) {
        return Err(Error::InvalidCharacterClass {
            segment: tag.to_string(),
            position: desc.position,
            found,
            class,
        });
    }
    Ok(())
}

fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || c == ' '
}

fn parse_integer(tag: &str, token: &str, desc: &ElementDescriptor) -> Result<i64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::NumericFormat {
            segment: tag.to_string(),
            position: desc.position,
            message: format!("{token:?} is not a signed whole number"),
        });
    }
    // Zero padding up to the declared minimum length re-encodes
    // identically; anything beyond it would not round-trip.
    if digits.len() > desc.min_length && digits.starts_with('0') {
        return Err(Error::NumericFormat {
            segment: tag.to_string(),
            position: desc.position,
            message: format!("{token:?} is zero-padded beyond the declared minimum length"),
        });
    }
    token.parse::<i64>().map_err(|_| Error::NumericFormat {
        segment: tag.to_string(),
        position: desc.position,
        message: format!("{token:?} does not fit in 64 bits"),
    })
}

fn parse_decimal(tag: &str, token: &str, desc: &ElementDescriptor) -> Result<X12Number> {
    let fail = |message: String| Error::NumericFormat {
        segment: tag.to_string(),
        position: desc.position,
        message,
    };

    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let (whole, frac) = match body.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (body, ""),
    };
    if whole.is_empty() || (body.contains('.') && frac.is_empty()) {
        return Err(fail(format!("{token:?} is not a decimal number")));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(fail(format!("{token:?} is not a decimal number")));
    }
    // "01.25" would re-encode as "1.25" and lose its wire form.
    if whole.len() > 1 && whole.starts_with('0') {
        return Err(fail(format!("{token:?} has a redundant leading zero")));
    }
    let scale = u8::try_from(frac.len())
        .ok()
        .filter(|&s| s <= 18)
        .ok_or_else(|| fail(format!("{token:?} carries too many decimal places")))?;

    let mut units: i64 = 0;
    for b in whole.bytes().chain(frac.bytes()) {
        units = units
            .checked_mul(10)
            .and_then(|u| u.checked_add(i64::from(b - b'0')))
            .ok_or_else(|| fail(format!("{token:?} does not fit in 64 bits")))?;
    }
    if negative {
        units = -units;
    }
    Ok(X12Number::new(units, scale))
}
