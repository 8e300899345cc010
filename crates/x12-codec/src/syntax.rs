//! Delimiters and segment tokenization
//!
//! X12 delimiters vary per interchange, so the codec takes them as
//! configuration rather than hard-coding them. The tokenizer splits raw
//! input into tagged segments of element tokens; all typing happens later
//! against the schema.

use crate::{Error, Result};

/// Conventional X12 delimiters.
pub const DEFAULT_SEGMENT_TERMINATOR: u8 = b'~';
pub const DEFAULT_ELEMENT_SEPARATOR: u8 = b'*';
pub const DEFAULT_COMPONENT_SEPARATOR: u8 = b':';

/// Delimiters in effect for one interchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    /// Segment terminator (default '~').
    pub segment: u8,
    /// Element separator (default '*').
    pub element: u8,
    /// Component separator (default ':').
    pub component: u8,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            segment: DEFAULT_SEGMENT_TERMINATOR,
            element: DEFAULT_ELEMENT_SEPARATOR,
            component: DEFAULT_COMPONENT_SEPARATOR,
        }
    }
}

impl Delimiters {
    /// Override the segment terminator.
    #[must_use]
    pub fn with_segment(mut self, terminator: u8) -> Self {
        self.segment = terminator;
        self
    }

    /// Override the element separator.
    #[must_use]
    pub fn with_element(mut self, separator: u8) -> Self {
        self.element = separator;
        self
    }

    /// Override the component separator.
    #[must_use]
    pub fn with_component(mut self, separator: u8) -> Self {
        self.component = separator;
        self
    }

    /// Whether a byte is one of the active delimiters.
    pub fn is_delimiter(&self, byte: u8) -> bool {
        byte == self.segment || byte == self.element || byte == self.component
    }
}

/// One tokenized segment: the tag and its raw element tokens, before any
/// schema-driven typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegment {
    /// Segment tag (2 or 3 characters).
    pub tag: String,
    /// Raw element tokens in stream order; index 0 is position 1. An
    /// empty token is an elided element.
    pub tokens: Vec<String>,
    /// 1-based source line of the tag.
    pub line: usize,
    /// 1-based source column of the tag.
    pub column: usize,
}

impl RawSegment {
    /// Build a raw segment without source coordinates, mostly for tests
    /// and callers that assemble streams programmatically.
    pub fn new(tag: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            tag: tag.into(),
            tokens,
            line: 0,
            column: 0,
        }
    }
}

/// Tokenizer over raw X12 bytes.
pub struct SegmentTokenizer<'a> {
    data: &'a [u8],
    pos: usize,
    delimiters: Delimiters,
}

impl<'a> SegmentTokenizer<'a> {
    /// Tokenize with default delimiters.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_delimiters(data, Delimiters::default())
    }

    /// Tokenize with explicit delimiters.
    pub fn with_delimiters(data: &'a [u8], delimiters: Delimiters) -> Self {
        Self {
            data,
            pos: 0,
            delimiters,
        }
    }

    /// Tokenize the next segment, or `None` at end of input.
    pub fn next_segment(&mut self) -> Option<Result<RawSegment>> {
        self.skip_whitespace();
        if self.pos >= self.data.len() {
            return None;
        }

        let (line, column) = self.line_column();

        let tag = match self.read_tag() {
            Ok(tag) => tag,
            Err(message) => {
                return Some(Err(Error::Syntax {
                    line,
                    column,
                    message,
                }));
            }
        };

        let mut tokens = Vec::new();
        // The byte after the tag is either an element separator or the
        // terminator of an element-free segment.
        loop {
            match self.peek() {
                None => break,
                Some(b) if b == self.delimiters.segment => {
                    self.pos += 1;
                    break;
                }
                Some(b) if b == self.delimiters.element => {
                    self.pos += 1;
                    tokens.push(self.read_token());
                }
                Some(_) => {
                    let (line, column) = self.line_column();
                    return Some(Err(Error::Syntax {
                        line,
                        column,
                        message: "expected element separator or segment terminator after tag"
                            .to_string(),
                    }));
                }
            }
        }

        Some(Ok(RawSegment {
            tag,
            tokens,
            line,
            column,
        }))
    }

    fn read_tag(&mut self) -> std::result::Result<String, String> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if self.delimiters.is_delimiter(b) {
                break;
            }
            self.pos += 1;
        }
        let tag = &self.data[start..self.pos];
        let well_formed = (2..=3).contains(&tag.len())
            && tag[0].is_ascii_uppercase()
            && tag.iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !well_formed {
            self.pos = start;
            return Err(format!(
                "expected a 2-3 character segment tag, found {:?}",
                String::from_utf8_lossy(tag)
            ));
        }
        Ok(String::from_utf8_lossy(tag).to_string())
    }

    /// Read a token up to (not including) the next element separator or
    /// segment terminator. The delimiter is left for the caller.
    fn read_token(&mut self) -> String {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == self.delimiters.element || b == self.delimiters.segment {
                break;
            }
            self.pos += 1;
        }
        String::from_utf8_lossy(&self.data[start..self.pos]).to_string()
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if b == b' ' || b == b'\n' || b == b'\r' || b == b'\t' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn line_column(&self) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for i in 0..self.pos.min(self.data.len()) {
            if self.data[i] == b'\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }
}

/// Tokenize an entire buffer into segments.
pub fn tokenize_all(data: &[u8], delimiters: Delimiters) -> Result<Vec<RawSegment>> {
    let mut tokenizer = SegmentTokenizer::with_delimiters(data, delimiters);
    let mut segments = Vec::new();
    while let Some(segment) = tokenizer.next_segment() {
        segments.push(segment?);
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiters() {
        let d = Delimiters::default();
        assert_eq!(d.segment, b'~');
        assert_eq!(d.element, b'*');
        assert_eq!(d.component, b':');
    }

    #[test]
    fn test_tokenize_simple_segment() {
        let mut tok = SegmentTokenizer::new(b"C3*USD*1.25~");
        let seg = tok.next_segment().unwrap().unwrap();
        assert_eq!(seg.tag, "C3");
        assert_eq!(seg.tokens, vec!["USD".to_string(), "1.25".to_string()]);
        assert!(tok.next_segment().is_none());
    }

    #[test]
    fn test_tokenize_empty_interior_token() {
        let mut tok = SegmentTokenizer::new(b"B2**SCAC~");
        let seg = tok.next_segment().unwrap().unwrap();
        assert_eq!(seg.tag, "B2");
        assert_eq!(seg.tokens, vec![String::new(), "SCAC".to_string()]);
    }

    #[test]
    fn test_tokenize_trailing_empty_token() {
        let mut tok = SegmentTokenizer::new(b"L11*REF*CN*~");
        let seg = tok.next_segment().unwrap().unwrap();
        assert_eq!(
            seg.tokens,
            vec!["REF".to_string(), "CN".to_string(), String::new()]
        );
    }

    #[test]
    fn test_tokenize_multiple_segments_with_newlines() {
        let data = b"ST*204*0001~\nB2**SCAC**PRO123**PP~\nSE*2*0001~";
        let segments = tokenize_all(data, Delimiters::default()).unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].tag, "ST");
        assert_eq!(segments[1].tag, "B2");
        assert_eq!(segments[2].tag, "SE");
        assert_eq!(segments[2].line, 3);
    }

    #[test]
    fn test_tokenize_custom_delimiters() {
        let delims = Delimiters::default()
            .with_segment(b'\n')
            .with_element(b'|');
        let mut tok = SegmentTokenizer::with_delimiters(b"C3|USD|1.25\n", delims);
        let seg = tok.next_segment().unwrap().unwrap();
        assert_eq!(seg.tag, "C3");
        assert_eq!(seg.tokens, vec!["USD".to_string(), "1.25".to_string()]);
    }

    #[test]
    fn test_segment_without_terminator_at_eof() {
        let mut tok = SegmentTokenizer::new(b"SE*2*0001");
        let seg = tok.next_segment().unwrap().unwrap();
        assert_eq!(seg.tag, "SE");
        assert_eq!(seg.tokens, vec!["2".to_string(), "0001".to_string()]);
        assert!(tok.next_segment().is_none());
    }

    #[test]
    fn test_invalid_tag_rejected() {
        let mut tok = SegmentTokenizer::new(b"toolongtag*X~");
        let err = tok.next_segment().unwrap().unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 1, column: 1, .. }));
    }

    #[test]
    fn test_tag_with_digits() {
        let mut tok = SegmentTokenizer::new(b"B2A*00~");
        let seg = tok.next_segment().unwrap().unwrap();
        assert_eq!(seg.tag, "B2A");
    }

    #[test]
    fn test_element_free_segment() {
        let mut tok = SegmentTokenizer::new(b"SE~");
        let seg = tok.next_segment().unwrap().unwrap();
        assert_eq!(seg.tag, "SE");
        assert!(seg.tokens.is_empty());
    }
}
