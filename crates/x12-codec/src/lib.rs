//! # x12-codec
//!
//! The generic positional encode/decode engine for X12 transaction sets.
//!
//! The engine walks a registered schema descriptor (ordered segments,
//! nested loops, positioned elements with availability windows) and
//! converts between the flat delimited token stream and the typed document
//! model, enforcing X12 structural rules: fixed element ordering,
//! required/optional semantics, loop cardinality, and version gating.

/// Transaction-set assembler: document-level decode/encode.
pub mod assembler;
/// Element codec: single token to/from typed value.
pub mod element;
/// Loop resolver: trigger-tag state machine for repeating groups.
pub mod resolver;
/// Segment codec: one segment to/from its positional element tuple.
pub mod segment;
/// Delimiters and the segment tokenizer.
pub mod syntax;

pub use assembler::{DecodeOptions, X12Codec};
pub use syntax::{Delimiters, RawSegment, SegmentTokenizer};

use thiserror::Error;
use x12_ir::Version;

/// Decode policy for element-level syntax violations.
///
/// Structural violations (missing required members, cardinality) abort in
/// both modes; strictness only governs whether syntax issues abort or
/// degrade to warnings on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Abort the enclosing segment decode on any syntax violation.
    #[default]
    Strict,
    /// Collect syntax violations as warnings and keep decoding.
    Lenient,
}

/// Errors raised by the codec.
#[derive(Error, Debug)]
pub enum Error {
    #[error("syntax error at line {line}, col {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("element {segment}{position:02}: length {length} outside declared {min}..={max}")]
    LengthOutOfRange {
        segment: String,
        position: u16,
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("element {segment}{position:02}: character {found:?} not allowed in {class} value")]
    InvalidCharacterClass {
        segment: String,
        position: u16,
        found: char,
        class: &'static str,
    },

    #[error("element {segment}{position:02}: {message}")]
    NumericFormat {
        segment: String,
        position: u16,
        message: String,
    },

    #[error("element {segment}{position:02}: {code:?} is not in code set {set}")]
    UnknownCode {
        segment: String,
        position: u16,
        code: String,
        set: &'static str,
    },

    #[error("element {segment}{position:02}: value does not match declared {kind} kind")]
    KindMismatch {
        segment: String,
        position: u16,
        kind: &'static str,
    },

    #[error("segment {segment}: required element at position {position} is missing")]
    MissingRequiredElement { segment: String, position: u16 },

    #[error("element {segment}{position:02} is not available in version {version}")]
    UnexpectedElement {
        segment: String,
        position: u16,
        version: Version,
    },

    #[error("segment {segment}: element at position {position} is not declared")]
    UndeclaredElement { segment: String, position: u16 },

    #[error("expected segment {expected} at schema position {position:04}, found {found}")]
    MissingRequiredSegment {
        expected: String,
        position: u16,
        found: String,
    },

    #[error("required loop {id} has no instances")]
    MissingRequiredLoop { id: String },

    #[error("loop {id} exceeds its declared maximum of {max} instances")]
    LoopCardinalityExceeded { id: String, max: usize },

    #[error("stream ended before required member {expected} at schema position {position:04}")]
    TruncatedDocument { expected: String, position: u16 },

    #[error("segment {tag} matches no remaining schema member")]
    UnexpectedTrailingSegment { tag: String },

    #[error("member at schema position {position:04} is not available in version {version}")]
    UnavailableMember { position: u16, version: Version },

    #[error(transparent)]
    Schema(#[from] x12_schema::Error),
}

impl Error {
    /// Whether this is an element-level syntax error, recoverable as a
    /// warning under lenient decoding.
    pub fn is_syntax_violation(&self) -> bool {
        matches!(
            self,
            Error::LengthOutOfRange { .. }
                | Error::InvalidCharacterClass { .. }
                | Error::NumericFormat { .. }
                | Error::UnknownCode { .. }
        )
    }
}

/// Crate-local result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
