//! Descriptor model
//!
//! Descriptors reify the declared shape of segments, loops, and
//! transaction sets as explicit data: ordered members with positions,
//! optionality, and availability windows. They are built once, validated
//! at registration, and shared read-only afterwards.

use crate::availability::Availability;
use crate::kind::ElementKind;
use crate::{Error, Result};
use x12_ir::{DocumentKey, EdiFormat, Version};

/// Whether a member must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Mandatory,
    Optional,
}

/// Declared shape of one element within a segment.
#[derive(Debug, Clone)]
pub struct ElementDescriptor {
    /// 1-based position within the segment.
    pub position: u16,
    /// Human-readable element name.
    pub name: &'static str,
    /// Semantic kind selecting codec behavior.
    pub kind: ElementKind,
    pub requirement: Requirement,
    /// Minimum raw token length.
    pub min_length: usize,
    /// Maximum raw token length.
    pub max_length: usize,
    pub availability: Availability,
    /// Required companion of an `until` bound.
    pub deprecation: Option<&'static str>,
}

impl ElementDescriptor {
    fn new(
        position: u16,
        name: &'static str,
        kind: ElementKind,
        requirement: Requirement,
        min_length: usize,
        max_length: usize,
    ) -> Self {
        Self {
            position,
            name,
            kind,
            requirement,
            min_length,
            max_length,
            availability: Availability::OPEN,
            deprecation: None,
        }
    }

    /// A mandatory element.
    pub fn mandatory(
        position: u16,
        name: &'static str,
        kind: ElementKind,
        min_length: usize,
        max_length: usize,
    ) -> Self {
        Self::new(position, name, kind, Requirement::Mandatory, min_length, max_length)
    }

    /// An optional element.
    pub fn optional(
        position: u16,
        name: &'static str,
        kind: ElementKind,
        min_length: usize,
        max_length: usize,
    ) -> Self {
        Self::new(position, name, kind, Requirement::Optional, min_length, max_length)
    }

    /// Restrict availability to `since` and later releases.
    #[must_use]
    pub fn since(mut self, since: Version) -> Self {
        self.availability.since = since;
        self
    }

    /// Retire the element as of `until` (exclusive). The deprecation note
    /// is mandatory; validation rejects an upper bound without one.
    #[must_use]
    pub fn retired(mut self, until: Version, note: &'static str) -> Self {
        self.availability.until = Some(until);
        self.deprecation = Some(note);
        self
    }
}

/// Declared shape of one segment type.
#[derive(Debug, Clone)]
pub struct SegmentDescriptor {
    /// Segment tag, e.g. "C3".
    pub tag: &'static str,
    /// Human-readable segment name.
    pub name: &'static str,
    /// Elements ordered by position; gaps are allowed.
    pub elements: Vec<ElementDescriptor>,
}

impl SegmentDescriptor {
    pub fn new(tag: &'static str, name: &'static str, elements: Vec<ElementDescriptor>) -> Self {
        Self {
            tag,
            name,
            elements,
        }
    }

    /// Element descriptor at a 1-based position, if declared.
    pub fn element_at(&self, position: u16) -> Option<&ElementDescriptor> {
        self.elements.iter().find(|e| e.position == position)
    }

    /// Highest declared element position; 0 for an element-free segment.
    pub fn max_position(&self) -> u16 {
        self.elements.iter().map(|e| e.position).max().unwrap_or(0)
    }
}

/// Declared shape of a repeating segment group.
///
/// The first member is the trigger: its segment tag opens each instance,
/// and a recurrence of that tag marks the next instance.
#[derive(Debug, Clone)]
pub struct LoopDescriptor {
    /// Loop identifier, e.g. "0300".
    pub id: &'static str,
    /// Maximum instance count; `None` is unbounded.
    pub max_repeats: Option<usize>,
    /// Ordered members; segments and nested loops.
    pub members: Vec<MemberDescriptor>,
}

impl LoopDescriptor {
    pub fn new(
        id: &'static str,
        max_repeats: Option<usize>,
        members: Vec<MemberDescriptor>,
    ) -> Self {
        Self {
            id,
            max_repeats,
            members,
        }
    }

    /// Tag of the trigger segment. Validation guarantees the first member
    /// is a mandatory segment.
    pub fn trigger_tag(&self) -> &'static str {
        match self.members.first().map(|m| &m.kind) {
            Some(MemberKind::Segment(seg)) => seg.tag,
            _ => "",
        }
    }
}

/// Payload of a transaction-set or loop member.
#[derive(Debug, Clone)]
pub enum MemberKind {
    Segment(SegmentDescriptor),
    Loop(LoopDescriptor),
}

/// One ordered member of a transaction set or loop body.
#[derive(Debug, Clone)]
pub struct MemberDescriptor {
    /// Declared position; strictly increasing among siblings, gaps
    /// allowed.
    pub position: u16,
    pub requirement: Requirement,
    pub availability: Availability,
    /// Required companion of an `until` bound.
    pub deprecation: Option<&'static str>,
    pub kind: MemberKind,
}

impl MemberDescriptor {
    fn new(position: u16, requirement: Requirement, kind: MemberKind) -> Self {
        Self {
            position,
            requirement,
            availability: Availability::OPEN,
            deprecation: None,
            kind,
        }
    }

    pub fn mandatory_segment(position: u16, segment: SegmentDescriptor) -> Self {
        Self::new(position, Requirement::Mandatory, MemberKind::Segment(segment))
    }

    pub fn optional_segment(position: u16, segment: SegmentDescriptor) -> Self {
        Self::new(position, Requirement::Optional, MemberKind::Segment(segment))
    }

    pub fn mandatory_loop(position: u16, group: LoopDescriptor) -> Self {
        Self::new(position, Requirement::Mandatory, MemberKind::Loop(group))
    }

    pub fn optional_loop(position: u16, group: LoopDescriptor) -> Self {
        Self::new(position, Requirement::Optional, MemberKind::Loop(group))
    }

    /// Restrict availability to `since` and later releases.
    #[must_use]
    pub fn since(mut self, since: Version) -> Self {
        self.availability.since = since;
        self
    }

    /// Retire the member as of `until` (exclusive), with a mandatory
    /// deprecation note.
    #[must_use]
    pub fn retired(mut self, until: Version, note: &'static str) -> Self {
        self.availability.until = Some(until);
        self.deprecation = Some(note);
        self
    }
}

/// Declared shape of a whole transaction set for one format and version.
#[derive(Debug, Clone)]
pub struct TransactionSetDescriptor {
    pub format: EdiFormat,
    pub version: Version,
    /// Transaction-set identifier code, e.g. "204".
    pub set_id: &'static str,
    /// Human-readable document name.
    pub name: &'static str,
    /// Ordered members.
    pub members: Vec<MemberDescriptor>,
}

impl TransactionSetDescriptor {
    pub fn new(
        format: EdiFormat,
        version: Version,
        set_id: &'static str,
        name: &'static str,
        members: Vec<MemberDescriptor>,
    ) -> Self {
        Self {
            format,
            version,
            set_id,
            name,
            members,
        }
    }

    /// Registry key for this descriptor.
    pub fn key(&self) -> DocumentKey {
        DocumentKey {
            format: self.format,
            version: self.version,
            set_id: self.set_id.to_string(),
        }
    }

    /// Validate the declared shape. Violations are authoring bugs and
    /// abort registration; they never surface per message.
    pub fn validate(&self) -> Result<()> {
        let context = format!("{} {} {}", self.format, self.version, self.set_id);
        validate_members(&self.members, &context)
    }
}

fn validate_members(members: &[MemberDescriptor], context: &str) -> Result<()> {
    let mut last_position = 0u16;
    for member in members {
        if member.position == 0 {
            return Err(Error::NonPositivePosition {
                context: context.to_string(),
            });
        }
        if member.position <= last_position {
            return Err(Error::PositionOrder {
                context: context.to_string(),
                position: member.position,
            });
        }
        last_position = member.position;

        validate_window(
            member.availability,
            member.deprecation,
            &format!("{context} member {:04}", member.position),
        )?;

        match &member.kind {
            MemberKind::Segment(segment) => {
                validate_segment(segment, context)?;
            }
            MemberKind::Loop(group) => validate_loop(group, context, member.availability)?,
        }
    }
    Ok(())
}

fn validate_segment(segment: &SegmentDescriptor, context: &str) -> Result<()> {
    let context = format!("{context} segment {}", segment.tag);
    let mut last_position = 0u16;
    for element in &segment.elements {
        let elem_context = format!("{context}{:02}", element.position);
        if element.position == 0 {
            return Err(Error::NonPositivePosition {
                context: elem_context,
            });
        }
        if element.position <= last_position {
            return Err(Error::PositionOrder {
                context: elem_context,
                position: element.position,
            });
        }
        last_position = element.position;

        if element.min_length > element.max_length || element.max_length == 0 {
            return Err(Error::InvalidLengthBounds {
                context: elem_context,
                min: element.min_length,
                max: element.max_length,
            });
        }
        validate_window(element.availability, element.deprecation, &elem_context)?;
    }
    Ok(())
}

fn validate_loop(group: &LoopDescriptor, context: &str, window: Availability) -> Result<()> {
    let context = format!("{context} loop {}", group.id);
    if group.members.is_empty() {
        return Err(Error::EmptyLoop {
            id: group.id.to_string(),
        });
    }
    if group.max_repeats == Some(0) {
        return Err(Error::InvalidRepeatBound {
            id: group.id.to_string(),
        });
    }
    let trigger = match group.members.first() {
        Some(
            member @ MemberDescriptor {
                requirement: Requirement::Mandatory,
                kind: MemberKind::Segment(_),
                ..
            },
        ) => member,
        _ => {
            return Err(Error::InvalidTrigger {
                id: group.id.to_string(),
            });
        }
    };
    // A loop is resolved by its trigger tag, so the trigger must exist in
    // every release the loop itself does; otherwise instance detection
    // can never consume input for the gated versions.
    if !trigger.availability.covers(window) {
        return Err(Error::TriggerUnavailable {
            id: group.id.to_string(),
        });
    }
    validate_members(&group.members, &context)
}

fn validate_window(
    availability: Availability,
    deprecation: Option<&'static str>,
    context: &str,
) -> Result<()> {
    if let Some(until) = availability.until {
        if until <= availability.since {
            return Err(Error::InvertedWindow {
                context: context.to_string(),
                since: availability.since,
                until,
            });
        }
        if deprecation.is_none_or(str::is_empty) {
            return Err(Error::MissingDeprecationNote {
                context: context.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::CodeSet;

    const CODES: CodeSet = CodeSet::new("test", &["AA", "BB"]);

    fn sample_segment() -> SegmentDescriptor {
        SegmentDescriptor::new(
            "XX",
            "Test Segment",
            vec![
                ElementDescriptor::mandatory(1, "First", ElementKind::Identifier(CODES), 2, 2),
                ElementDescriptor::optional(2, "Second", ElementKind::Alphanumeric, 1, 30),
            ],
        )
    }

    fn descriptor_with(members: Vec<MemberDescriptor>) -> TransactionSetDescriptor {
        TransactionSetDescriptor::new(EdiFormat::X12, Version::V4010, "999", "Test", members)
    }

    #[test]
    fn test_valid_descriptor_passes() {
        let ts = descriptor_with(vec![
            MemberDescriptor::mandatory_segment(100, sample_segment()),
            MemberDescriptor::optional_segment(200, sample_segment()),
        ]);
        ts.validate().expect("valid descriptor");
    }

    #[test]
    fn test_duplicate_member_position_rejected() {
        let ts = descriptor_with(vec![
            MemberDescriptor::mandatory_segment(100, sample_segment()),
            MemberDescriptor::optional_segment(100, sample_segment()),
        ]);
        assert!(matches!(
            ts.validate(),
            Err(Error::PositionOrder { position: 100, .. })
        ));
    }

    #[test]
    fn test_zero_position_rejected() {
        let ts = descriptor_with(vec![MemberDescriptor::mandatory_segment(
            0,
            sample_segment(),
        )]);
        assert!(matches!(
            ts.validate(),
            Err(Error::NonPositivePosition { .. })
        ));
    }

    #[test]
    fn test_duplicate_element_position_rejected() {
        let segment = SegmentDescriptor::new(
            "XX",
            "Broken",
            vec![
                ElementDescriptor::mandatory(2, "A", ElementKind::Alphanumeric, 1, 5),
                ElementDescriptor::optional(2, "B", ElementKind::Alphanumeric, 1, 5),
            ],
        );
        let ts = descriptor_with(vec![MemberDescriptor::mandatory_segment(100, segment)]);
        assert!(matches!(
            ts.validate(),
            Err(Error::PositionOrder { position: 2, .. })
        ));
    }

    #[test]
    fn test_inverted_window_rejected() {
        let segment = SegmentDescriptor::new(
            "XX",
            "Broken",
            vec![
                ElementDescriptor::optional(1, "A", ElementKind::Alphanumeric, 1, 5)
                    .since(Version::V5010)
                    .retired(Version::V4010, "removed"),
            ],
        );
        let ts = descriptor_with(vec![MemberDescriptor::mandatory_segment(100, segment)]);
        assert!(matches!(ts.validate(), Err(Error::InvertedWindow { .. })));
    }

    #[test]
    fn test_until_without_note_rejected() {
        let mut element = ElementDescriptor::optional(1, "A", ElementKind::Alphanumeric, 1, 5);
        element.availability.until = Some(Version::V5010);
        let segment = SegmentDescriptor::new("XX", "Broken", vec![element]);
        let ts = descriptor_with(vec![MemberDescriptor::mandatory_segment(100, segment)]);
        assert!(matches!(
            ts.validate(),
            Err(Error::MissingDeprecationNote { .. })
        ));
    }

    #[test]
    fn test_loop_without_trigger_rejected() {
        let group = LoopDescriptor::new(
            "0100",
            Some(5),
            vec![MemberDescriptor::optional_segment(10, sample_segment())],
        );
        let ts = descriptor_with(vec![MemberDescriptor::optional_loop(100, group)]);
        assert!(matches!(ts.validate(), Err(Error::InvalidTrigger { .. })));
    }

    #[test]
    fn test_gated_trigger_rejected() {
        // A trigger that appears later than its loop leaves the earlier
        // releases with no way to open an instance.
        let group = LoopDescriptor::new(
            "0100",
            Some(2),
            vec![MemberDescriptor::mandatory_segment(10, sample_segment()).since(Version::V5010)],
        );
        let ts = descriptor_with(vec![MemberDescriptor::optional_loop(100, group)]);
        assert!(matches!(
            ts.validate(),
            Err(Error::TriggerUnavailable { .. })
        ));
    }

    #[test]
    fn test_trigger_covering_loop_window_accepted() {
        let group = LoopDescriptor::new(
            "0100",
            Some(2),
            vec![MemberDescriptor::mandatory_segment(10, sample_segment()).since(Version::V4010)],
        );
        let ts = descriptor_with(vec![
            MemberDescriptor::optional_loop(100, group).since(Version::V4010),
        ]);
        ts.validate().expect("trigger window matches the loop window");
    }

    #[test]
    fn test_retired_trigger_in_open_loop_rejected() {
        let group = LoopDescriptor::new(
            "0100",
            Some(2),
            vec![
                MemberDescriptor::mandatory_segment(10, sample_segment())
                    .retired(Version::V5010, "replaced"),
            ],
        );
        let ts = descriptor_with(vec![MemberDescriptor::optional_loop(100, group)]);
        assert!(matches!(
            ts.validate(),
            Err(Error::TriggerUnavailable { .. })
        ));
    }

    #[test]
    fn test_empty_loop_rejected() {
        let group = LoopDescriptor::new("0100", Some(5), vec![]);
        let ts = descriptor_with(vec![MemberDescriptor::optional_loop(100, group)]);
        assert!(matches!(ts.validate(), Err(Error::EmptyLoop { .. })));
    }

    #[test]
    fn test_nested_loop_validated() {
        let inner = LoopDescriptor::new(
            "0310",
            Some(2),
            vec![
                MemberDescriptor::mandatory_segment(10, sample_segment()),
                MemberDescriptor::optional_segment(5, sample_segment()),
            ],
        );
        let outer = LoopDescriptor::new(
            "0300",
            None,
            vec![
                MemberDescriptor::mandatory_segment(10, sample_segment()),
                MemberDescriptor::optional_loop(20, inner),
            ],
        );
        let ts = descriptor_with(vec![MemberDescriptor::mandatory_loop(100, outer)]);
        // Inner loop's second member position (5) is behind the first (10).
        assert!(matches!(
            ts.validate(),
            Err(Error::PositionOrder { position: 5, .. })
        ));
    }

    #[test]
    fn test_trigger_tag() {
        let group = LoopDescriptor::new(
            "0100",
            Some(5),
            vec![MemberDescriptor::mandatory_segment(10, sample_segment())],
        );
        assert_eq!(group.trigger_tag(), "XX");
    }

    #[test]
    fn test_segment_helpers() {
        let segment = sample_segment();
        assert_eq!(segment.max_position(), 2);
        assert_eq!(segment.element_at(1).map(|e| e.name), Some("First"));
        assert!(segment.element_at(3).is_none());
    }
}
