//! Element kinds and code sets
//!
//! Each element declares a semantic kind that selects the codec behavior:
//! length and character-class checks, implied-decimal conversion, or
//! enumeration lookup against a static code set.

/// A static enumeration of allowed codes for an identifier element.
///
/// Code tables are external reference data; the codec only consumes this
/// lookup surface.
#[derive(Debug, Clone, Copy)]
pub struct CodeSet {
    /// Name used in diagnostics, e.g. "currency".
    pub name: &'static str,
    /// Allowed codes.
    pub codes: &'static [&'static str],
    /// Whether raw tokens are uppercased before lookup. Case folding is
    /// the only normalization the codec performs.
    pub fold_case: bool,
}

impl CodeSet {
    /// A case-sensitive code set.
    pub const fn new(name: &'static str, codes: &'static [&'static str]) -> Self {
        Self {
            name,
            codes,
            fold_case: false,
        }
    }

    /// A code set matched after uppercasing the raw token.
    pub const fn case_folding(name: &'static str, codes: &'static [&'static str]) -> Self {
        Self {
            name,
            codes,
            fold_case: true,
        }
    }

    /// Apply the declared normalization to a raw token.
    pub fn normalize(&self, raw: &str) -> String {
        if self.fold_case {
            raw.to_ascii_uppercase()
        } else {
            raw.to_string()
        }
    }

    /// Whether a (normalized) code is a member.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(&code)
    }
}

/// The semantic kind of an element, selecting codec behavior.
#[derive(Debug, Clone, Copy)]
pub enum ElementKind {
    /// Free text (X12 type AN): printable characters within length bounds.
    Alphanumeric,
    /// Enumerated identifier (type ID) resolved against a code set.
    Identifier(CodeSet),
    /// Numeric with implied decimal places (type Nn): the wire token
    /// carries only digits, scaled by `10^decimals`.
    Numeric { decimals: u8 },
    /// Real number with an explicit decimal point (type R).
    Decimal,
    /// Calendar date (type DT): CCYYMMDD, or YYMMDD in short form.
    Date,
    /// Time of day (type TM): HHMM, or HHMMSS in long form.
    Time,
}

impl ElementKind {
    /// Kind name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Alphanumeric => "alphanumeric",
            ElementKind::Identifier(_) => "identifier",
            ElementKind::Numeric { .. } => "numeric",
            ElementKind::Decimal => "decimal",
            ElementKind::Date => "date",
            ElementKind::Time => "time",
        }
    }
}
