//! Loop resolver
//!
//! Detects and materializes repeating segment groups. A loop opens when
//! its trigger tag appears at the cursor; each recurrence of the trigger
//! starts the next instance, and a non-member tag (or the declared repeat
//! maximum) closes the loop. Nested loops recurse through the member walk
//! with their own trigger scope.

use crate::assembler::decode_members;
use crate::syntax::RawSegment;
use crate::{DecodeMode, Error, Result};
use tracing::trace;
use x12_ir::{Diagnostic, LoopInstance, Version};
use x12_schema::LoopDescriptor;

/// Cursor over a tokenized segment stream. Decoding is single-pass: the
/// cursor only ever advances.
pub(crate) struct SegmentCursor<'a> {
    segments: &'a [RawSegment],
    pos: usize,
}

impl<'a> SegmentCursor<'a> {
    pub(crate) fn new(segments: &'a [RawSegment]) -> Self {
        Self { segments, pos: 0 }
    }

    /// The segment at the cursor, if any.
    pub(crate) fn peek(&self) -> Option<&'a RawSegment> {
        self.segments.get(self.pos)
    }

    /// Consume the segment at the cursor.
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }
}

/// Materialize every consecutive instance of a loop at the cursor.
///
/// Returns an empty vector when the trigger tag is not at the cursor;
/// requiredness of the loop member is the caller's concern. The declared
/// maximum is enforced here: one trigger occurrence too many fails with a
/// cardinality error rather than silently opening a new loop.
pub(crate) fn resolve_loop(
    cursor: &mut SegmentCursor<'_>,
    desc: &LoopDescriptor,
    version: Version,
    mode: DecodeMode,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<LoopInstance>> {
    let trigger = desc.trigger_tag();
    let mut instances = Vec::new();

    while cursor.peek().is_some_and(|segment| segment.tag == trigger) {
        if let Some(max) = desc.max_repeats {
            if instances.len() == max {
                return Err(Error::LoopCardinalityExceeded {
                    id: desc.id.to_string(),
                    max,
                });
            }
        }
        trace!(
            "loop {} instance {} opens at trigger {}",
            desc.id,
            instances.len() + 1,
            trigger
        );
        let members = decode_members(&desc.members, cursor, version, mode, diagnostics)?;
        instances.push(LoopInstance::new(members));
    }

    Ok(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use x12_schema::{ElementDescriptor, ElementKind, MemberDescriptor, SegmentDescriptor};

    fn segment(tag: &'static str) -> SegmentDescriptor {
        SegmentDescriptor::new(
            tag,
            "Test",
            vec![ElementDescriptor::optional(
                1,
                "Value",
                ElementKind::Alphanumeric,
                1,
                30,
            )],
        )
    }

    fn raw(tag: &str, token: &str) -> RawSegment {
        RawSegment::new(tag, vec![token.to_string()])
    }

    fn party_loop(max: Option<usize>) -> LoopDescriptor {
        LoopDescriptor::new(
            "0100",
            max,
            vec![
                MemberDescriptor::mandatory_segment(10, segment("N1")),
                MemberDescriptor::optional_segment(20, segment("N4")),
            ],
        )
    }

    #[test]
    fn test_no_trigger_yields_no_instances() {
        let segments = vec![raw("SE", "2")];
        let mut cursor = SegmentCursor::new(&segments);
        let mut diags = Vec::new();
        let instances = resolve_loop(
            &mut cursor,
            &party_loop(Some(5)),
            Version::V4010,
            DecodeMode::Strict,
            &mut diags,
        )
        .unwrap();
        assert!(instances.is_empty());
        assert_eq!(cursor.peek().map(|s| s.tag.as_str()), Some("SE"));
    }

    #[test]
    fn test_trigger_recurrence_starts_new_instance() {
        let segments = vec![
            raw("N1", "SHIPPER"),
            raw("N4", "CITY1"),
            raw("N1", "CONSIGNEE"),
            raw("SE", "2"),
        ];
        let mut cursor = SegmentCursor::new(&segments);
        let mut diags = Vec::new();
        let instances = resolve_loop(
            &mut cursor,
            &party_loop(Some(5)),
            Version::V4010,
            DecodeMode::Strict,
            &mut diags,
        )
        .unwrap();

        assert_eq!(instances.len(), 2);
        assert!(instances[0].segment("N1").is_some());
        assert!(instances[0].segment("N4").is_some());
        assert!(instances[1].segment("N4").is_none());
        assert_eq!(cursor.peek().map(|s| s.tag.as_str()), Some("SE"));
    }

    #[test]
    fn test_cardinality_exceeded() {
        let segments = vec![raw("N1", "A"), raw("N1", "B")];
        let mut cursor = SegmentCursor::new(&segments);
        let mut diags = Vec::new();
        let err = resolve_loop(
            &mut cursor,
            &party_loop(Some(1)),
            Version::V4010,
            DecodeMode::Strict,
            &mut diags,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::LoopCardinalityExceeded { max: 1, .. }
        ));
    }

    #[test]
    fn test_unbounded_loop() {
        let segments: Vec<RawSegment> = (0..20).map(|i| raw("N1", &format!("P{i}"))).collect();
        let mut cursor = SegmentCursor::new(&segments);
        let mut diags = Vec::new();
        let instances = resolve_loop(
            &mut cursor,
            &party_loop(None),
            Version::V4010,
            DecodeMode::Strict,
            &mut diags,
        )
        .unwrap();
        assert_eq!(instances.len(), 20);
    }
}
