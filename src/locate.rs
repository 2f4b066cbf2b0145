//! Locating `<<dict>> stream ... endstream` blocks in raw document bytes.
//!
//! The scan is a deliberate heuristic: it matches the four literal structural
//! keywords and nothing else. It does not resolve `/Length` entries, nested
//! dictionaries, or cross-reference tables, so a payload that happens to
//! contain the literal bytes `>>` or `endstream` will truncate or mis-split a
//! match. That behavior is kept for compatibility with malformed and
//! obfuscated inputs, where a strict parser gives up long before the
//! interesting bytes.

use regex::bytes::Regex;

/// Dictionary body is the shortest run of bytes between `<<` and a `>>` that
/// is followed by the `stream` keyword; the payload is the shortest run
/// between `stream` and `endstream`, whitespace-trimmed. `(?s-u)` keeps `.`
/// and `\s` byte-oriented so NUL and non-UTF8 bytes never abort matching.
const STREAM_PATTERN: &str = r"(?s-u)<<(.*?)>>\s*stream\s*(.*?)\s*endstream";

/// One located stream block, borrowing from the document bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamRecord<'d> {
    /// 1-based ordinal in document encounter order.
    pub index: usize,
    /// Dictionary text between `<<` and `>>`.
    pub dict: &'d [u8],
    /// Raw payload between `stream` and `endstream`, surrounding ASCII
    /// whitespace trimmed.
    pub payload: &'d [u8],
}

/// Scanner for structural stream blocks.
pub struct StreamLocator {
    pattern: Regex,
}

impl StreamLocator {
    /// Create a new locator.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(STREAM_PATTERN).unwrap(),
        }
    }

    /// Scan the document and yield records lazily, in left-to-right byte
    /// order. A document with no matching block yields nothing; that is not
    /// an error.
    pub fn scan<'d>(&'d self, doc: &'d [u8]) -> impl Iterator<Item = StreamRecord<'d>> + 'd {
        self.pattern
            .captures_iter(doc)
            .enumerate()
            .map(|(i, caps)| StreamRecord {
                index: i + 1,
                dict: caps.get(1).map_or(&[][..], |m| m.as_bytes()),
                payload: caps
                    .get(2)
                    .map_or(&[][..], |m| m.as_bytes())
                    .trim_ascii(),
            })
    }
}

impl Default for StreamLocator {
    fn default() -> Self {
        Self::new()
    }
}
