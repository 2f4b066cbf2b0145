//! Bounded zlib inflation of in-memory buffers.

use std::io::{self, Read};

use flate2::read::ZlibDecoder;

/// Output cap. Untrusted samples can carry decompression bombs; exceeding the
/// cap fails the attempt so the pipeline falls through instead of exhausting
/// memory.
pub const MAX_INFLATED_BYTES: usize = 64 * 1024 * 1024;

/// Inflate a zlib stream held entirely in memory.
///
/// Trailing bytes after the deflate stream are ignored, matching the lenient
/// behavior expected of damaged or appended-to samples.
pub fn inflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data).take(MAX_INFLATED_BYTES as u64 + 1);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    if out.len() > MAX_INFLATED_BYTES {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "inflated output exceeds size cap",
        ));
    }
    Ok(out)
}
