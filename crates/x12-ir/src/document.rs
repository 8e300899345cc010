//! Document container and repeating-group structure
//!
//! A document is an ordered composition of segments and loop instances,
//! mirroring the declared schema order. Optional members absent from the
//! input simply do not appear; there are no default-valued placeholders.

use crate::diagnostic::Diagnostic;
use crate::identity::DocumentKey;
use crate::segment::SegmentValue;
use serde::{Deserialize, Serialize};

/// One populated member of a document or loop instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MemberValue {
    /// A single segment.
    Segment {
        /// Declared schema position of this member.
        position: u16,
        value: SegmentValue,
    },
    /// A repeating segment group.
    Loop {
        /// Declared schema position of this member.
        position: u16,
        /// Loop identifier from the schema, e.g. "0300".
        loop_id: String,
        /// Instances in stream order; never empty.
        instances: Vec<LoopInstance>,
    },
}

impl MemberValue {
    /// Declared schema position of this member.
    pub fn position(&self) -> u16 {
        match self {
            MemberValue::Segment { position, .. } | MemberValue::Loop { position, .. } => *position,
        }
    }
}

/// One instance of a loop: the segments and nested loops it contains, in
/// schema order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopInstance {
    pub members: Vec<MemberValue>,
}

impl LoopInstance {
    /// Create an instance from ordered members.
    pub fn new(members: Vec<MemberValue>) -> Self {
        Self { members }
    }

    /// First segment with the given tag among this instance's direct
    /// members.
    pub fn segment(&self, tag: &str) -> Option<&SegmentValue> {
        self.members.iter().find_map(|m| match m {
            MemberValue::Segment { value, .. } if value.tag == tag => Some(value),
            _ => None,
        })
    }
}

/// A fully decoded (or caller-built) transaction set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identity selecting the schema descriptor this document conforms to.
    pub key: DocumentKey,
    /// Populated members in declared schema order.
    pub members: Vec<MemberValue>,
    /// Warnings collected during lenient decode; empty for strict decodes
    /// and caller-built documents.
    pub warnings: Vec<Diagnostic>,
}

impl Document {
    /// Create an empty document for the given identity.
    pub fn new(key: DocumentKey) -> Self {
        Self {
            key,
            members: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Append a segment member.
    pub fn push_segment(&mut self, position: u16, value: SegmentValue) {
        self.members.push(MemberValue::Segment { position, value });
    }

    /// Append a loop member.
    pub fn push_loop(
        &mut self,
        position: u16,
        loop_id: impl Into<String>,
        instances: Vec<LoopInstance>,
    ) {
        self.members.push(MemberValue::Loop {
            position,
            loop_id: loop_id.into(),
            instances,
        });
    }

    /// First top-level segment with the given tag.
    pub fn segment(&self, tag: &str) -> Option<&SegmentValue> {
        self.members.iter().find_map(|m| match m {
            MemberValue::Segment { value, .. } if value.tag == tag => Some(value),
            _ => None,
        })
    }

    /// Top-level loop member with the given identifier.
    pub fn loop_instances(&self, id: &str) -> Option<&[LoopInstance]> {
        self.members.iter().find_map(|m| match m {
            MemberValue::Loop {
                loop_id, instances, ..
            } if loop_id == id => Some(instances.as_slice()),
            _ => None,
        })
    }

    /// Structural equality: identity and members, ignoring collected
    /// warnings.
    pub fn same_structure(&self, other: &Document) -> bool {
        self.key == other.key && self.members == other.members
    }
}
