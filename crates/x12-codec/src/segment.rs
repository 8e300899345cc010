//! Segment codec
//!
//! Decodes one tokenized segment into its positional element tuple and
//! encodes the tuple back. Elements match declared positions left to
//! right; version gating and strictness are applied per element.

use crate::element::{decode_element, encode_element};
use crate::syntax::{Delimiters, RawSegment};
use crate::{DecodeMode, Error, Result};
use x12_ir::{Diagnostic, ElementValue, SegmentValue, Version};
use x12_schema::{Requirement, SegmentDescriptor};

/// Decode one segment against its descriptor for the active document
/// version.
pub fn decode_segment(
    raw: &RawSegment,
    desc: &SegmentDescriptor,
    version: Version,
    mode: DecodeMode,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<SegmentValue> {
    let mut value = SegmentValue::new(raw.tag.clone());
    let mut degraded: Vec<u16> = Vec::new();

    for (index, token) in raw.tokens.iter().enumerate() {
        // An empty token is an elided element, not a present-empty value.
        if token.is_empty() {
            continue;
        }
        let position = u16::try_from(index + 1).unwrap_or(u16::MAX);

        let Some(element) = desc.element_at(position) else {
            let err = Error::UndeclaredElement {
                segment: raw.tag.clone(),
                position,
            };
            if mode == DecodeMode::Strict {
                return Err(err);
            }
            diagnostics.push(
                Diagnostic::warning("undeclared_element", err.to_string())
                    .in_segment(&raw.tag)
                    .at_element(position),
            );
            continue;
        };

        if !element.availability.contains(version) {
            let err = Error::UnexpectedElement {
                segment: raw.tag.clone(),
                position,
                version,
            };
            if mode == DecodeMode::Strict {
                return Err(err);
            }
            diagnostics.push(
                Diagnostic::warning("unexpected_element", err.to_string())
                    .in_segment(&raw.tag)
                    .at_element(position),
            );
            continue;
        }

        match decode_element(&raw.tag, token, element) {
            Ok(decoded) => value.set_element(position, decoded),
            Err(err) if mode == DecodeMode::Lenient && err.is_syntax_violation() => {
                // An unknown code is structurally sound, so the normalized
                // token is kept; other syntax violations leave the slot
                // absent. Either way the element was present on the wire,
                // so it must not later count as a structural absence.
                if let Error::UnknownCode { ref code, .. } = err {
                    value.set_element(position, ElementValue::Code(code.clone()));
                } else {
                    degraded.push(position);
                }
                diagnostics.push(
                    Diagnostic::warning("element_syntax", err.to_string())
                        .in_segment(&raw.tag)
                        .at_element(position),
                );
            }
            Err(err) => return Err(err),
        }
    }

    for element in &desc.elements {
        let expected = element.requirement == Requirement::Mandatory
            && element.availability.contains(version)
            && !degraded.contains(&element.position);
        if expected && value.element(element.position).is_none() {
            return Err(Error::MissingRequiredElement {
                segment: raw.tag.clone(),
                position: element.position,
            });
        }
    }

    Ok(value)
}

/// Encode one segment in declared position order.
///
/// An absent optional element that precedes a present later element is
/// emitted as an empty placeholder so positions stay aligned; trailing
/// absences are trimmed entirely.
pub fn encode_segment(
    value: &SegmentValue,
    desc: &SegmentDescriptor,
    version: Version,
    delimiters: &Delimiters,
    out: &mut String,
) -> Result<()> {
    for (index, slot) in value.elements.iter().enumerate() {
        let position = u16::try_from(index + 1).unwrap_or(u16::MAX);
        if slot.is_some() && desc.element_at(position).is_none() {
            return Err(Error::UndeclaredElement {
                segment: value.tag.clone(),
                position,
            });
        }
    }

    for element in &desc.elements {
        let in_window = element.availability.contains(version);
        match value.element(element.position) {
            Some(_) if !in_window => {
                return Err(Error::UnexpectedElement {
                    segment: value.tag.clone(),
                    position: element.position,
                    version,
                });
            }
            None if element.requirement == Requirement::Mandatory && in_window => {
                return Err(Error::MissingRequiredElement {
                    segment: value.tag.clone(),
                    position: element.position,
                });
            }
            _ => {}
        }
    }

    out.push_str(&value.tag);
    let last = value.last_present_position();
    for position in 1..=last {
        out.push(char::from(delimiters.element));
        if let Some(present) = value.element(position) {
            if let Some(element) = desc.element_at(position) {
                out.push_str(&encode_element(&value.tag, present, element)?);
            }
        }
    }
    out.push(char::from(delimiters.segment));
    Ok(())
}
