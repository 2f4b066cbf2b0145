//! Integration tests for the locate -> decode -> report pipeline.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use pdfsift::{analyze_bytes, decode_stream, DecodeOutcome, StreamLocator, NO_DECODE_NOTE};

fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Bare ASCII85 encoder for building fixtures (no `z` shorthand, no framing).
fn a85_encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    for chunk in data.chunks(4) {
        let mut buf = [0u8; 4];
        buf[..chunk.len()].copy_from_slice(chunk);
        let mut value = u32::from_be_bytes(buf);
        let mut digits = [0u8; 5];
        for d in digits.iter_mut().rev() {
            *d = (value % 85) as u8 + b'!';
            value /= 85;
        }
        out.extend_from_slice(&digits[..chunk.len() + 1]);
    }
    out
}

fn stream_block(dict: &str, payload: &[u8]) -> Vec<u8> {
    let mut doc = Vec::new();
    doc.extend_from_slice(b"<<");
    doc.extend_from_slice(dict.as_bytes());
    doc.extend_from_slice(b">>\nstream\n");
    doc.extend_from_slice(payload);
    doc.extend_from_slice(b"\nendstream\n");
    doc
}

#[test]
fn test_round_trip_deflate_then_ascii85() {
    let plain = b"BT /F1 12 Tf 72 712 Td (recovered content stream) Tj ET";
    let payload = a85_encode(&deflate(plain));

    let result = decode_stream(b" /Filter [/ASCII85Decode /FlateDecode] ", &payload);
    match result.outcome {
        DecodeOutcome::Ascii85 { decoded, inflated } => {
            assert_eq!(decoded, deflate(plain));
            assert_eq!(inflated.as_deref(), Some(&plain[..]));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_round_trip_through_full_report() {
    let plain = b"the quick brown fox jumps over the lazy dog";
    let payload = a85_encode(&deflate(plain));
    let doc = stream_block(" /Filter /ASCII85Decode ", &payload);

    let report = analyze_bytes(&doc);
    assert!(report.contains("--- Stream #1 ---"));
    assert!(report.contains("ASCII85 decode: success"));
    assert!(report.contains("Flate (zlib) decompressed: success"));
    assert!(report.contains("the quick brown fox jumps over the lazy dog"));
    assert!(!report.contains(NO_DECODE_NOTE));
}

#[test]
fn test_tie_break_resolves_via_ascii85() {
    // Valid digit sequence under both alphabets; ASCII85 wins.
    let result = decode_stream(b"", b"ARTY*");
    assert!(matches!(
        result.outcome,
        DecodeOutcome::Ascii85 { ref decoded, .. } if decoded == b"easy"
    ));
}

#[test]
fn test_trailing_digit_payload_still_decodes_as_ascii85() {
    // A one-digit trailing group adds no bytes but does not fail the stage,
    // so the payload never reaches the later fallbacks.
    let result = decode_stream(b"", b"9jqo^!");
    assert!(matches!(
        result.outcome,
        DecodeOutcome::Ascii85 { ref decoded, .. } if decoded == b"Man "
    ));
}

#[test]
fn test_raw_deflate_with_dictionary_hint() {
    let plain = b"raw zlib stream behind a /FlateDecode hint";
    let doc = stream_block(" /Length 999 /Filter /FlateDecode ", &deflate(plain));

    let report = analyze_bytes(&doc);
    assert!(report.contains("Raw Flate (zlib) decompressed: success"));
    assert!(report.contains("raw zlib stream behind a /FlateDecode hint"));
}

#[test]
fn test_hinted_flate_failure_appears_in_report() {
    // Hinted but corrupt: the deflate failure is reported, not just logged.
    let doc = stream_block(
        " /Filter /FlateDecode ",
        &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06],
    );

    let report = analyze_bytes(&doc);
    assert!(report.contains("-> Raw Flate (zlib) decompression failed"));
    assert!(report.contains("No useful decode found"));
}

#[test]
fn test_fallback_printable_fragments() {
    // Invalid under every decoder, but carries a printable run.
    let mut payload = vec![0x00u8, 0x01, 0x02];
    payload.extend_from_slice(b"http://callback.example/stage2");
    payload.extend_from_slice(&[0x03, 0x04]);
    let doc = stream_block(" /X ", &payload);

    let report = analyze_bytes(&doc);
    assert!(report.contains("ascii-like fragments"));
    assert!(report.contains("- http://callback.example/stage2"));
}

#[test]
fn test_terminal_fallback_hex_dump() {
    let payload: Vec<u8> = (0..150u32).map(|i| (i % 26 + 1) as u8).collect();
    let doc = stream_block(" /X ", &payload);

    let report = analyze_bytes(&doc);
    let expected: String = payload[..120].iter().map(|b| format!("{b:02x}")).collect();
    assert!(report.contains("Dumping first 120 bytes hex"));
    assert!(report.contains(&expected));
    assert!(report.contains(NO_DECODE_NOTE));
}

#[test]
fn test_locator_yields_all_blocks_in_order() {
    let mut doc = Vec::new();
    for i in 0..5 {
        doc.extend_from_slice(&stream_block(&format!(" /N {i} "), b"ARTY*"));
        doc.extend_from_slice(b"\nsome inter-object junk\n");
    }

    let locator = StreamLocator::new();
    let records: Vec<_> = locator.scan(&doc).collect();
    assert_eq!(records.len(), 5);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.index, i + 1);
        assert_eq!(record.payload, b"ARTY*");
    }
}

#[test]
fn test_empty_document_reports_closing_note() {
    let report = analyze_bytes(b"nothing structural here");
    assert!(!report.contains("--- Stream"));
    assert!(report.contains(NO_DECODE_NOTE));
}

#[test]
fn test_analyze_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&stream_block(" /F /ASCII85Decode ", b"<~9jqo^~>"))
        .unwrap();
    file.flush().unwrap();

    let report = pdfsift::analyze_file(file.path()).unwrap();
    assert!(report.contains("ASCII85 decode: success, 4 bytes"));
    assert!(report.contains("Man "));
}

#[test]
fn test_analyze_file_missing_path_is_fatal() {
    let err = pdfsift::analyze_file("/no/such/file/for/pdfsift").unwrap_err();
    assert!(matches!(err, pdfsift::Error::Io(_)));
}
