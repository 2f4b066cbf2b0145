//! Rendering one located stream and its decode outcome as report text.
//!
//! Pure formatting: every decision about what a payload *is* was already made
//! by the decode pipeline. Each record renders independently.

use std::fmt::Write;

use crate::decode::{DecodeOutcome, StreamDecode, FRAGMENT_DISPLAY_CAP};
use crate::locate::StreamRecord;

/// Dictionary bytes shown per stream.
pub const DICT_PREVIEW_BYTES: usize = 800;

/// Characters of decoded/inflated text shown per stream.
pub const TEXT_PREVIEW_CHARS: usize = 400;

/// Closing note emitted when no stream produced a readable decoding.
pub const NO_DECODE_NOTE: &str =
    "No decodings produced readable outputs. Try pdf-parser.py or mutool for deeper analysis.";

/// Render one record and its decode result. The returned text ends with a
/// newline.
pub fn render_stream(record: &StreamRecord<'_>, decode: &StreamDecode) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n--- Stream #{} ---", record.index);
    out.push_str("Dict (near stream):\n");
    let _ = writeln!(out, "{}", dict_preview(record.dict));
    let _ = writeln!(out, "-- raw stream length: {} bytes", record.payload.len());

    if let Some(note) = &decode.flate_note {
        let _ = writeln!(out, "-> {note}");
    }

    match &decode.outcome {
        DecodeOutcome::Ascii85 { decoded, inflated } => {
            let _ = writeln!(out, "-> ASCII85 decode: success, {} bytes", decoded.len());
            render_inflation(&mut out, decoded, inflated.as_deref());
        }
        DecodeOutcome::Base85 { decoded, inflated } => {
            let _ = writeln!(out, "-> Base85 decode: success, {} bytes", decoded.len());
            render_inflation(&mut out, decoded, inflated.as_deref());
        }
        DecodeOutcome::RawFlate { inflated } => {
            let _ = writeln!(
                out,
                "-> Raw Flate (zlib) decompressed: success, {} bytes",
                inflated.len()
            );
            out.push_str("Decompressed preview:\n");
            let _ = writeln!(out, "{}", text_preview(inflated));
        }
        DecodeOutcome::Printable { runs, total } => {
            let _ = writeln!(
                out,
                "-> Found {total} ascii-like fragments in raw stream (showing up to {FRAGMENT_DISPLAY_CAP}):"
            );
            for run in runs {
                let _ = writeln!(out, "- {}", String::from_utf8_lossy(run));
            }
        }
        DecodeOutcome::Unrecognized { head } => {
            let _ = writeln!(
                out,
                "-> No useful decode found for this stream. (Dumping first {} bytes hex)",
                head.len()
            );
            let _ = writeln!(out, "{}", hex_dump(head));
        }
    }
    out
}

fn render_inflation(out: &mut String, decoded: &[u8], inflated: Option<&[u8]>) {
    match inflated {
        Some(inflated) => {
            let _ = writeln!(
                out,
                "-> Flate (zlib) decompressed: success, {} bytes",
                inflated.len()
            );
            out.push_str("Decompressed text preview:\n");
            let _ = writeln!(out, "{}", text_preview(inflated));
        }
        None => {
            out.push_str("-> Flate (zlib) decompression failed or not needed.\n");
            out.push_str("Decoded preview:\n");
            let _ = writeln!(out, "{}", text_preview(decoded));
        }
    }
}

/// First [`DICT_PREVIEW_BYTES`] of the dictionary, undecodable bytes replaced
/// with the Unicode placeholder.
fn dict_preview(dict: &[u8]) -> String {
    let head = &dict[..dict.len().min(DICT_PREVIEW_BYTES)];
    String::from_utf8_lossy(head).into_owned()
}

/// Lossy text preview truncated to [`TEXT_PREVIEW_CHARS`] characters.
fn text_preview(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .take(TEXT_PREVIEW_CHARS)
        .collect()
}

fn hex_dump(bytes: &[u8]) -> String {
    bytes.iter().fold(String::new(), |mut acc, b| {
        let _ = write!(acc, "{b:02x}");
        acc
    })
}
