//! Ordered fallback decoding of one stream payload.
//!
//! Stages are tried in fixed priority: ASCII85, RFC 1924 base85, zlib
//! inflate of the decoded bytes, dictionary-hinted raw
//! inflate of the original payload, printable-run extraction, and finally a
//! hex-inspectable head. Each stage either produces the terminal outcome or
//! fails locally and hands over to the next; failures are logged at debug
//! level and never propagate. A failed raw deflate attempt on a hinted
//! stream is additionally carried into the report as a diagnostic.

mod ascii85;
mod base85;
mod flate;

pub use ascii85::{decode as ascii85_decode, decode_adobe as ascii85_decode_adobe, Ascii85Error};
pub use base85::{decode as base85_decode, Base85Error};
pub use flate::{inflate, MAX_INFLATED_BYTES};

use crate::extract::printable_runs;

/// Number of payload head bytes kept for hex inspection when nothing decodes.
pub const UNRECOGNIZED_HEAD_BYTES: usize = 120;

/// Fragments stored for display in the printable fallback.
pub const FRAGMENT_DISPLAY_CAP: usize = 10;

/// The terminal result for one stream payload. Exactly one variant is
/// produced per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// ASCII85 decoded; `inflated` is filled when the decoded bytes were
    /// also a valid zlib stream.
    Ascii85 {
        decoded: Vec<u8>,
        inflated: Option<Vec<u8>>,
    },
    /// Base85 decoded, with the same optional inflation.
    Base85 {
        decoded: Vec<u8>,
        inflated: Option<Vec<u8>>,
    },
    /// The dictionary hinted a Flate filter and the raw payload inflated.
    RawFlate { inflated: Vec<u8> },
    /// Nothing decoded, but the payload carries printable fragments. `runs`
    /// holds at most [`FRAGMENT_DISPLAY_CAP`] of the `total` found.
    Printable { runs: Vec<Vec<u8>>, total: usize },
    /// No stage produced output; `head` is the first
    /// [`UNRECOGNIZED_HEAD_BYTES`] bytes of the raw payload.
    Unrecognized { head: Vec<u8> },
}

impl DecodeOutcome {
    /// True when no stage produced readable output.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, DecodeOutcome::Unrecognized { .. })
    }
}

/// Result of running the decode chain over one payload: the terminal outcome
/// plus any diagnostic a non-terminal stage left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDecode {
    pub outcome: DecodeOutcome,
    /// Failure text from a dictionary-hinted raw deflate attempt, rendered
    /// into the report alongside the outcome.
    pub flate_note: Option<String>,
}

impl From<DecodeOutcome> for StreamDecode {
    fn from(outcome: DecodeOutcome) -> Self {
        Self {
            outcome,
            flate_note: None,
        }
    }
}

/// Run the ordered decode chain over one payload and its dictionary text.
pub fn decode_stream(dict: &[u8], payload: &[u8]) -> StreamDecode {
    // ASCII85 first: it is the dominant encoding in the target format, so a
    // payload valid under both alphabets must resolve here.
    if let Some(decoded) = try_ascii85(payload) {
        let inflated = try_inflate(&decoded);
        return DecodeOutcome::Ascii85 { decoded, inflated }.into();
    }

    match base85_decode(payload) {
        Ok(decoded) => {
            let inflated = try_inflate(&decoded);
            return DecodeOutcome::Base85 { decoded, inflated }.into();
        }
        Err(err) => log::debug!("base85 attempt failed: {err}"),
    }

    let mut flate_note = None;
    if dict_hints_flate(dict) {
        match inflate(payload) {
            Ok(inflated) => return DecodeOutcome::RawFlate { inflated }.into(),
            Err(err) => {
                log::debug!("raw deflate attempt on hinted stream failed: {err}");
                flate_note = Some(format!("Raw Flate (zlib) decompression failed: {err}"));
            }
        }
    }

    let runs = printable_runs(payload);
    let outcome = if runs.is_empty() {
        DecodeOutcome::Unrecognized {
            head: payload[..payload.len().min(UNRECOGNIZED_HEAD_BYTES)].to_vec(),
        }
    } else {
        let total = runs.len();
        DecodeOutcome::Printable {
            runs: runs
                .into_iter()
                .take(FRAGMENT_DISPLAY_CAP)
                .map(<[u8]>::to_vec)
                .collect(),
            total,
        }
    };
    StreamDecode {
        outcome,
        flate_note,
    }
}

/// ASCII85 attempt: Adobe framing first, appending the `~>` terminator when
/// absent, then the bare form over the original payload.
fn try_ascii85(payload: &[u8]) -> Option<Vec<u8>> {
    let adobe = if payload.ends_with(b"~>") {
        ascii85_decode_adobe(payload)
    } else {
        let mut framed = payload.to_vec();
        framed.extend_from_slice(b"~>");
        ascii85_decode_adobe(&framed)
    };
    match adobe {
        Ok(decoded) => return Some(decoded),
        Err(err) => log::debug!("adobe ascii85 attempt failed: {err}"),
    }
    match ascii85_decode(payload) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            log::debug!("plain ascii85 attempt failed: {err}");
            None
        }
    }
}

fn try_inflate(decoded: &[u8]) -> Option<Vec<u8>> {
    match inflate(decoded) {
        Ok(inflated) => Some(inflated),
        Err(err) => {
            log::debug!("inflate of decoded bytes failed: {err}");
            None
        }
    }
}

/// Case-insensitive scan of the dictionary text for a Flate filter hint.
fn dict_hints_flate(dict: &[u8]) -> bool {
    let text = String::from_utf8_lossy(dict).to_lowercase();
    text.contains("/flate") || text.contains("flatedecode")
}
