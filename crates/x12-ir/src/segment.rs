//! Positional segment values
//!
//! A segment is a tagged, ordered tuple of elements. Slots are indexed by
//! declared position starting at 1; an absent optional element is an empty
//! slot, distinguishable from a present-but-empty text value.

use crate::value::ElementValue;
use serde::{Deserialize, Serialize};

/// A decoded or caller-built segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentValue {
    /// Segment tag, e.g. "C3".
    pub tag: String,
    /// Element slots; index 0 holds position 1.
    pub elements: Vec<Option<ElementValue>>,
}

impl SegmentValue {
    /// Create an empty segment with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            elements: Vec::new(),
        }
    }

    /// Fetch the element at a 1-based position.
    pub fn element(&self, position: u16) -> Option<&ElementValue> {
        if position == 0 {
            return None;
        }
        self.elements
            .get(usize::from(position) - 1)
            .and_then(Option::as_ref)
    }

    /// Store an element at a 1-based position, growing the slot list as
    /// needed.
    pub fn set_element(&mut self, position: u16, value: ElementValue) {
        assert!(position > 0, "element positions start at 1");
        let index = usize::from(position) - 1;
        if self.elements.len() <= index {
            self.elements.resize(index + 1, None);
        }
        self.elements[index] = Some(value);
    }

    /// Builder-style variant of [`set_element`](Self::set_element).
    #[must_use]
    pub fn with_element(mut self, position: u16, value: ElementValue) -> Self {
        self.set_element(position, value);
        self
    }

    /// The highest 1-based position holding a value, or 0 when empty.
    pub fn last_present_position(&self) -> u16 {
        self.elements
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |i| u16::try_from(i + 1).unwrap_or(u16::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_by_position() {
        let mut seg = SegmentValue::new("C3");
        seg.set_element(1, ElementValue::Code("USD".to_string()));
        seg.set_element(3, ElementValue::Code("CAD".to_string()));

        assert_eq!(seg.element(1).and_then(ElementValue::as_code), Some("USD"));
        assert!(seg.element(2).is_none());
        assert_eq!(seg.element(3).and_then(ElementValue::as_code), Some("CAD"));
        assert!(seg.element(4).is_none());
    }

    #[test]
    fn test_last_present_position() {
        let seg = SegmentValue::new("C3")
            .with_element(1, ElementValue::Code("USD".to_string()))
            .with_element(2, ElementValue::Text("x".to_string()));
        assert_eq!(seg.last_present_position(), 2);

        let empty = SegmentValue::new("C3");
        assert_eq!(empty.last_present_position(), 0);
    }

    #[test]
    fn test_absent_distinct_from_empty_text() {
        let seg = SegmentValue::new("L11").with_element(1, ElementValue::Text(String::new()));
        assert!(seg.element(1).is_some());
        assert!(seg.element(2).is_none());
    }
}
