//! Document identity metadata
//!
//! Every decode/encode call carries a format, a numeric version, and a
//! transaction-set identifier; together they select the schema descriptor
//! that applies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The interchange family a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdiFormat {
    /// ANSI ASC X12 business documents.
    X12,
    /// X12 variants used for transmitting HIPAA data.
    X12Hipaa,
    /// UN/EDIFACT. Carried as identity metadata only.
    Edifact,
}

impl fmt::Display for EdiFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdiFormat::X12 => write!(f, "X12"),
            EdiFormat::X12Hipaa => write!(f, "X12-HIPAA"),
            EdiFormat::Edifact => write!(f, "EDIFACT"),
        }
    }
}

/// A numeric X12 release version such as 4010 or 8010.
///
/// Versions order naturally; availability windows compare against them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Version(pub u16);

impl Version {
    /// The earliest release the catalog describes. Members that declare no
    /// explicit `since` are available from here.
    pub const V3010: Version = Version(3010);
    pub const V4010: Version = Version(4010);
    pub const V5010: Version = Version(5010);
    pub const V8010: Version = Version(8010);
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a concrete transaction-set schema: keys the process-wide
/// descriptor registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentKey {
    /// Interchange family.
    pub format: EdiFormat,
    /// Release version the document was authored against.
    pub version: Version,
    /// Transaction-set identifier code, e.g. "204".
    pub set_id: String,
}

impl DocumentKey {
    /// Build a key for an X12 transaction set.
    pub fn x12(version: Version, set_id: impl Into<String>) -> Self {
        Self {
            format: EdiFormat::X12,
            version,
            set_id: set_id.into(),
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.format, self.version, self.set_id)
    }
}
