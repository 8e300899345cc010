//! Transaction-set assembler
//!
//! Drives full-document decode and encode. Decode walks the descriptor's
//! ordered member list in a single pass over the tokenized stream, never
//! re-offering a consumed segment to an earlier slot; encode is the mirror
//! traversal over the document's populated members.

use crate::resolver::{resolve_loop, SegmentCursor};
use crate::segment::{decode_segment, encode_segment};
use crate::syntax::{tokenize_all, Delimiters, RawSegment};
use crate::{DecodeMode, Error, Result};
use std::sync::Arc;
use tracing::debug;
use x12_ir::{Diagnostic, Document, DocumentKey, MemberValue, Version};
use x12_schema::{DescriptorRegistry, MemberDescriptor, MemberKind, Requirement};

/// Options governing a codec instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Strictness for element syntax violations.
    pub mode: DecodeMode,
    /// Delimiters in effect for the interchange.
    pub delimiters: Delimiters,
}

/// The transaction-set codec: one instance serves any number of
/// concurrent decode/encode calls, sharing only the read-only registry.
pub struct X12Codec {
    registry: Arc<DescriptorRegistry>,
    options: DecodeOptions,
}

impl X12Codec {
    /// Create a codec with default options (strict, conventional
    /// delimiters).
    pub fn new(registry: Arc<DescriptorRegistry>) -> Self {
        Self {
            registry,
            options: DecodeOptions::default(),
        }
    }

    /// Create a codec with explicit options.
    pub fn with_options(registry: Arc<DescriptorRegistry>, options: DecodeOptions) -> Self {
        Self { registry, options }
    }

    /// Decode a raw byte stream into a typed document.
    pub fn decode(&self, data: &[u8], key: &DocumentKey) -> Result<Document> {
        let segments = tokenize_all(data, self.options.delimiters)?;
        self.decode_segments(&segments, key)
    }

    /// Decode pre-tokenized segments. Callers handling very large
    /// interchanges can tokenize in batches and feed the slices here; the
    /// assembler keeps no state beyond the cursor and the in-progress
    /// document.
    pub fn decode_segments(&self, segments: &[RawSegment], key: &DocumentKey) -> Result<Document> {
        let descriptor = self.registry.describe(key)?;
        debug!("decoding {} ({} segments)", key, segments.len());

        let mut cursor = SegmentCursor::new(segments);
        let mut diagnostics = Vec::new();
        let members = decode_members(
            &descriptor.members,
            &mut cursor,
            descriptor.version,
            self.options.mode,
            &mut diagnostics,
        )?;

        while let Some(extra) = cursor.peek() {
            if self.options.mode == DecodeMode::Strict {
                return Err(Error::UnexpectedTrailingSegment {
                    tag: extra.tag.clone(),
                });
            }
            diagnostics.push(
                Diagnostic::warning(
                    "unexpected_trailing_segment",
                    format!("segment {} matches no remaining schema member", extra.tag),
                )
                .in_segment(&extra.tag),
            );
            cursor.advance();
        }

        Ok(Document {
            key: key.clone(),
            members,
            warnings: diagnostics,
        })
    }

    /// Encode a typed document back into delimited text.
    pub fn encode(&self, document: &Document) -> Result<String> {
        let descriptor = self.registry.describe(&document.key)?;
        debug!("encoding {}", document.key);

        let mut out = String::new();
        encode_members(
            &document.members,
            &descriptor.members,
            descriptor.version,
            &self.options.delimiters,
            &mut out,
        )?;
        Ok(out)
    }
}

/// Walk one ordered member list, consuming segments from the cursor.
///
/// Shared between the document root and loop-instance bodies; loop members
/// recurse through the resolver.
pub(crate) fn decode_members(
    descriptors: &[MemberDescriptor],
    cursor: &mut SegmentCursor<'_>,
    version: Version,
    mode: DecodeMode,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<MemberValue>> {
    let mut members = Vec::new();

    for descriptor in descriptors {
        // A member outside its availability window is never offered input.
        if !descriptor.availability.contains(version) {
            continue;
        }
        let mandatory = descriptor.requirement == Requirement::Mandatory;

        match &descriptor.kind {
            MemberKind::Segment(segment) => match cursor.peek() {
                Some(raw) if raw.tag == segment.tag => {
                    let value = decode_segment(raw, segment, version, mode, diagnostics)?;
                    cursor.advance();
                    members.push(MemberValue::Segment {
                        position: descriptor.position,
                        value,
                    });
                }
                Some(raw) => {
                    if mandatory {
                        return Err(Error::MissingRequiredSegment {
                            expected: segment.tag.to_string(),
                            position: descriptor.position,
                            found: raw.tag.clone(),
                        });
                    }
                }
                None => {
                    if mandatory {
                        return Err(Error::TruncatedDocument {
                            expected: segment.tag.to_string(),
                            position: descriptor.position,
                        });
                    }
                }
            },
            MemberKind::Loop(group) => {
                let instances = resolve_loop(cursor, group, version, mode, diagnostics)?;
                if instances.is_empty() {
                    if mandatory {
                        return Err(Error::MissingRequiredLoop {
                            id: group.id.to_string(),
                        });
                    }
                } else {
                    members.push(MemberValue::Loop {
                        position: descriptor.position,
                        loop_id: group.id.to_string(),
                        instances,
                    });
                }
            }
        }
    }

    Ok(members)
}

/// Mirror traversal of [`decode_members`]: emit populated members in
/// declared order, skipping absent optional members entirely.
pub(crate) fn encode_members(
    values: &[MemberValue],
    descriptors: &[MemberDescriptor],
    version: Version,
    delimiters: &Delimiters,
    out: &mut String,
) -> Result<()> {
    // A position that is undeclared, or occupied twice, matches no
    // remaining schema member.
    let mut seen = Vec::with_capacity(values.len());
    for value in values {
        let declared = descriptors.iter().any(|d| d.position == value.position());
        if !declared || seen.contains(&value.position()) {
            let tag = match value {
                MemberValue::Segment { value, .. } => value.tag.clone(),
                MemberValue::Loop { loop_id, .. } => loop_id.clone(),
            };
            return Err(Error::UnexpectedTrailingSegment { tag });
        }
        seen.push(value.position());
    }

    for descriptor in descriptors {
        let found = values.iter().find(|v| v.position() == descriptor.position);
        let in_window = descriptor.availability.contains(version);
        let mandatory = descriptor.requirement == Requirement::Mandatory;

        let Some(value) = found else {
            if mandatory && in_window {
                return match &descriptor.kind {
                    MemberKind::Segment(segment) => Err(Error::TruncatedDocument {
                        expected: segment.tag.to_string(),
                        position: descriptor.position,
                    }),
                    MemberKind::Loop(group) => Err(Error::MissingRequiredLoop {
                        id: group.id.to_string(),
                    }),
                };
            }
            continue;
        };

        if !in_window {
            return Err(Error::UnavailableMember {
                position: descriptor.position,
                version,
            });
        }

        match (&descriptor.kind, value) {
            (MemberKind::Segment(segment), MemberValue::Segment { value, .. })
                if value.tag == segment.tag =>
            {
                encode_segment(value, segment, version, delimiters, out)?;
            }
            (MemberKind::Loop(group), MemberValue::Loop {
                loop_id, instances, ..
            }) if loop_id == group.id => {
                if let Some(max) = group.max_repeats {
                    if instances.len() > max {
                        return Err(Error::LoopCardinalityExceeded {
                            id: group.id.to_string(),
                            max,
                        });
                    }
                }
                if instances.is_empty() && mandatory {
                    return Err(Error::MissingRequiredLoop {
                        id: group.id.to_string(),
                    });
                }
                for instance in instances {
                    encode_members(&instance.members, &group.members, version, delimiters, out)?;
                }
            }
            (_, MemberValue::Segment { value, .. }) => {
                return Err(Error::UnexpectedTrailingSegment {
                    tag: value.tag.clone(),
                });
            }
            (_, MemberValue::Loop { loop_id, .. }) => {
                return Err(Error::UnexpectedTrailingSegment {
                    tag: loop_id.clone(),
                });
            }
        }
    }

    Ok(())
}
