//! # x12-catalog
//!
//! A representative slice of the X12 declaration catalog: code sets,
//! segment descriptors, and transaction-set descriptors consumed by the
//! codec engine. Everything here is pure data; the engine never knows
//! about concrete document types.

/// Reference code sets (currency codes, identifier enumerations).
pub mod codes;
/// Segment descriptor declarations.
pub mod segments;
/// Transaction-set descriptor declarations.
pub mod transaction_sets;

pub use transaction_sets::{freight_invoice, install, load_tender};
