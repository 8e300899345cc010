//! Typed element values
//!
//! The smallest addressable unit of a document. A value is constructed
//! either by the element codec during decode or by a caller assembling a
//! document for encode, and is immutable afterwards.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-point number as X12 carries it.
///
/// `units` holds the value scaled by `10^scale`, so "1.25" is
/// `{ units: 125, scale: 2 }`. Implied-decimal (Nn) elements transmit only
/// the units; real (R) elements transmit an explicit decimal point. Both
/// round-trip losslessly through this representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct X12Number {
    /// Value scaled by `10^scale`.
    pub units: i64,
    /// Number of implied decimal places.
    pub scale: u8,
}

impl X12Number {
    /// Build a number from scaled units.
    pub fn new(units: i64, scale: u8) -> Self {
        Self { units, scale }
    }

    /// Build a whole number.
    pub fn integer(value: i64) -> Self {
        Self {
            units: value,
            scale: 0,
        }
    }

    /// Rescale to a different number of decimal places without losing
    /// precision. Returns `None` when the value does not divide evenly or
    /// scaling up would overflow.
    pub fn rescaled(&self, scale: u8) -> Option<Self> {
        if scale == self.scale {
            return Some(*self);
        }
        if scale > self.scale {
            let factor = 10i64.checked_pow(u32::from(scale - self.scale))?;
            let units = self.units.checked_mul(factor)?;
            return Some(Self { units, scale });
        }
        let factor = 10i64.checked_pow(u32::from(self.scale - scale))?;
        if self.units % factor != 0 {
            return None;
        }
        Some(Self {
            units: self.units / factor,
            scale,
        })
    }
}

impl fmt::Display for X12Number {
    /// Renders with an explicit decimal point, e.g. "1.25" or "-0.05".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.units);
        }
        let magnitude = self.units.unsigned_abs();
        let divisor = 10u64.pow(u32::from(self.scale));
        let whole = magnitude / divisor;
        let frac = magnitude % divisor;
        let sign = if self.units < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{whole}.{frac:0width$}",
            width = usize::from(self.scale)
        )
    }
}

/// A typed element value.
///
/// Absence is expressed by the containing segment slot being `None`, never
/// by a sentinel value here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementValue {
    /// Bounded free text (AN).
    Text(String),
    /// A member of an enumerated code set (ID), already normalized.
    Code(String),
    /// Fixed-point numeric (Nn or R).
    Number(X12Number),
    /// Calendar date (DT).
    Date(NaiveDate),
    /// Time of day (TM).
    Time(NaiveTime),
}

impl ElementValue {
    /// The text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ElementValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The code, if this is an enumerated value.
    pub fn as_code(&self) -> Option<&str> {
        match self {
            ElementValue::Code(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is a numeric value.
    pub fn as_number(&self) -> Option<X12Number> {
        match self {
            ElementValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_scale_zero() {
        assert_eq!(X12Number::integer(42).to_string(), "42");
        assert_eq!(X12Number::integer(-7).to_string(), "-7");
    }

    #[test]
    fn test_number_display_with_scale() {
        assert_eq!(X12Number::new(125, 2).to_string(), "1.25");
        assert_eq!(X12Number::new(1250, 3).to_string(), "1.250");
        assert_eq!(X12Number::new(-5, 2).to_string(), "-0.05");
        assert_eq!(X12Number::new(5, 1).to_string(), "0.5");
    }

    #[test]
    fn test_number_rescale_up() {
        let n = X12Number::new(125, 2);
        assert_eq!(n.rescaled(4), Some(X12Number::new(12500, 4)));
    }

    #[test]
    fn test_number_rescale_down_exact() {
        let n = X12Number::new(12500, 4);
        assert_eq!(n.rescaled(2), Some(X12Number::new(125, 2)));
    }

    #[test]
    fn test_number_rescale_down_lossy_rejected() {
        let n = X12Number::new(125, 2);
        assert_eq!(n.rescaled(1), None);
    }

    #[test]
    fn test_value_accessors() {
        let v = ElementValue::Code("USD".to_string());
        assert_eq!(v.as_code(), Some("USD"));
        assert!(v.as_text().is_none());
        assert!(v.as_number().is_none());
    }
}
