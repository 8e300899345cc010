//! # x12-schema
//!
//! Schema descriptors for X12 transaction sets and the process-wide
//! descriptor registry.
//!
//! A descriptor is an explicit, read-only reflection of a declared record
//! shape: ordered members, each with a position, optionality, kind, and
//! version-availability window. Descriptors are validated once at
//! construction; authoring mistakes (duplicate positions, inverted
//! windows) fail registration rather than surfacing per message.

/// Version-availability windows.
pub mod availability;
/// Descriptor model for elements, segments, loops, and transaction sets.
pub mod descriptor;
/// Element kinds and enumerated code sets.
pub mod kind;
/// Concurrent descriptor registry keyed by document identity.
pub mod registry;

pub use availability::Availability;
pub use descriptor::{
    ElementDescriptor, LoopDescriptor, MemberDescriptor, MemberKind, Requirement,
    SegmentDescriptor, TransactionSetDescriptor,
};
pub use kind::{CodeSet, ElementKind};
pub use registry::DescriptorRegistry;

use thiserror::Error;
use x12_ir::Version;

/// Schema-authoring errors, raised at descriptor construction or
/// registration time.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{context}: position {position} is not strictly increasing")]
    PositionOrder { context: String, position: u16 },

    #[error("{context}: positions must start at 1")]
    NonPositivePosition { context: String },

    #[error("{context}: availability window ends at {until} without beginning before it ({since})")]
    InvertedWindow {
        context: String,
        since: Version,
        until: Version,
    },

    #[error("{context}: an until bound requires a deprecation note")]
    MissingDeprecationNote { context: String },

    #[error("{context}: length bounds {min}..={max} are invalid")]
    InvalidLengthBounds {
        context: String,
        min: usize,
        max: usize,
    },

    #[error("loop {id} declares no members")]
    EmptyLoop { id: String },

    #[error("loop {id} must open with a mandatory trigger segment")]
    InvalidTrigger { id: String },

    #[error("loop {id}: trigger segment must be available whenever the loop is")]
    TriggerUnavailable { id: String },

    #[error("loop {id}: maximum repeat count must be at least 1")]
    InvalidRepeatBound { id: String },

    #[error("descriptor already registered for {key}")]
    DuplicateDescriptor { key: String },

    #[error("no descriptor registered for {key}")]
    NotFound { key: String },
}

/// Crate-local result type for schema operations.
pub type Result<T> = std::result::Result<T, Error>;
