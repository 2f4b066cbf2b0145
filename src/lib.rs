//! # pdfsift
//!
//! Heuristic extraction and decoding of embedded streams in PDF-like
//! documents, for forensic and triage inspection of untrusted files.
//!
//! The scan locates `<<dict>> stream ... endstream` blocks in the raw bytes
//! and runs each payload through an ordered chain of decode attempts:
//! ASCII85 (Adobe and bare), RFC 1924 base85, zlib inflation of the decoded
//! bytes, dictionary-hinted raw zlib inflation, printable-fragment
//! extraction, and finally a hex dump of the payload head. The input file is
//! never mutated; the output is a plain-text report.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> pdfsift::Result<()> {
//!     let report = pdfsift::analyze_file("sample.pdf")?;
//!     print!("{}", report);
//!     Ok(())
//! }
//! ```
//!
//! The scanner is deliberately not a structural PDF parser: it ignores
//! cross-reference tables, `/Length` entries, and encryption dictionaries,
//! which keeps it useful on malformed and obfuscated samples. See
//! [`locate::StreamLocator`] for the trade-offs.

pub mod decode;
pub mod error;
pub mod extract;
pub mod locate;
pub mod report;

// Re-export commonly used types
pub use decode::{decode_stream, Ascii85Error, Base85Error, DecodeOutcome, StreamDecode};
pub use error::{Error, Result};
pub use extract::printable_runs;
pub use locate::{StreamLocator, StreamRecord};
pub use report::{render_stream, NO_DECODE_NOTE};

use std::fs;
use std::path::Path;

/// Analyze raw document bytes and return the report text.
///
/// This is a pure function: same bytes, same report. Records are processed
/// independently in document order; when every record (or none at all)
/// resolves to [`DecodeOutcome::Unrecognized`], the report closes with
/// [`NO_DECODE_NOTE`].
pub fn analyze_bytes(data: &[u8]) -> String {
    let locator = StreamLocator::new();
    let mut out = String::new();
    let mut readable = false;

    for record in locator.scan(data) {
        let decoded = decode_stream(record.dict, record.payload);
        readable |= !decoded.outcome.is_unrecognized();
        out.push_str(&render_stream(&record, &decoded));
    }

    if !readable {
        out.push('\n');
        out.push_str(NO_DECODE_NOTE);
        out.push('\n');
    }
    out
}

/// Read a file once and analyze it.
///
/// The read is the only fallible step; a file with zero stream blocks is a
/// normal run that reports nothing readable.
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let data = fs::read(path)?;
    Ok(analyze_bytes(&data))
}
