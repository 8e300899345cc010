//! # x12-ir
//!
//! Typed in-memory representation of EDI X12 transaction sets.
//!
//! This crate provides the document model produced by decoding and consumed
//! by encoding: typed element values, positional segments, loop instances,
//! and the document container, plus the identity metadata (format, version,
//! transaction-set identifier) that selects a schema descriptor.

/// Diagnostics collected during lenient decoding.
pub mod diagnostic;
/// Document container and repeating-group structure.
pub mod document;
/// Format, version, and transaction-set identity types.
pub mod identity;
/// Positional segment values.
pub mod segment;
/// Typed element values.
pub mod value;

pub use diagnostic::{Diagnostic, Severity};
pub use document::{Document, LoopInstance, MemberValue};
pub use identity::{DocumentKey, EdiFormat, Version};
pub use segment::SegmentValue;
pub use value::{ElementValue, X12Number};
