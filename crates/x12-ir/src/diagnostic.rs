//! Diagnostics collected during decode
//!
//! Lenient-mode decoding degrades element syntax violations to warnings
//! attached to the resulting document instead of aborting. Each diagnostic
//! carries the coordinates of the offending element.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message attached to a document during decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Stable diagnostic code, e.g. "unknown_code".
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Tag of the segment the diagnostic refers to, if any.
    pub segment: Option<String>,
    /// 1-based element position within the segment, if any.
    pub element: Option<u16>,
}

impl Diagnostic {
    /// Create a warning-level diagnostic.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            segment: None,
            element: None,
        }
    }

    /// Attach the segment tag.
    #[must_use]
    pub fn in_segment(mut self, tag: impl Into<String>) -> Self {
        self.segment = Some(tag.into());
        self
    }

    /// Attach the 1-based element position.
    #[must_use]
    pub fn at_element(mut self, position: u16) -> Self {
        self.element = Some(position);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_builder() {
        let diag = Diagnostic::warning("unknown_code", "code XX is not recognized")
            .in_segment("C3")
            .at_element(1);

        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.code, "unknown_code");
        assert_eq!(diag.segment.as_deref(), Some("C3"));
        assert_eq!(diag.element, Some(1));
    }
}
