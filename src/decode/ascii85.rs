//! Legacy ASCII85 decoding.
//!
//! Two entry points mirror the two historical framings: [`decode_adobe`] for
//! the `<~ ... ~>` framed form used by PDF `/ASCII85Decode` streams, and
//! [`decode`] for the bare form with no terminator. Both are strict: an
//! invalid digit or a 32-bit group overflow fails the decode rather than
//! producing garbage bytes. A trailing group is padded with `u` and keeps one
//! byte fewer than its digit count, so a one-digit group decodes to nothing —
//! the behavior of the historical decoders.

use thiserror::Error;

/// Errors from a strict ASCII85 decode attempt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ascii85Error {
    /// A byte outside `!`..`u` (and not `z` or ASCII whitespace).
    #[error("invalid ascii85 digit 0x{0:02x} at offset {1}")]
    InvalidByte(u8, usize),

    /// `z` is only valid on a group boundary.
    #[error("'z' inside an ascii85 group at offset {0}")]
    ZInsideGroup(usize),

    /// A five-digit group exceeded 2^32 - 1.
    #[error("ascii85 group overflow")]
    Overflow,

    /// Adobe framing requires the `~>` terminator.
    #[error("missing '~>' terminator")]
    MissingTerminator,
}

/// Decode Adobe-framed ASCII85: optional `<~` prefix, mandatory `~>` suffix.
pub fn decode_adobe(data: &[u8]) -> Result<Vec<u8>, Ascii85Error> {
    let body = data
        .strip_suffix(b"~>")
        .ok_or(Ascii85Error::MissingTerminator)?;
    let body = body.strip_prefix(b"<~").unwrap_or(body);
    decode(body)
}

/// Decode bare ASCII85 over the whole input. ASCII whitespace is skipped,
/// `z` stands for a four-zero-byte group.
pub fn decode(data: &[u8]) -> Result<Vec<u8>, Ascii85Error> {
    let mut out = Vec::with_capacity(data.len() / 5 * 4 + 4);
    let mut group = [0u8; 5];
    let mut len = 0usize;

    for (pos, &b) in data.iter().enumerate() {
        match b {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c => continue,
            b'z' if len == 0 => out.extend_from_slice(&[0, 0, 0, 0]),
            b'z' => return Err(Ascii85Error::ZInsideGroup(pos)),
            b'!'..=b'u' => {
                group[len] = b - b'!';
                len += 1;
                if len == 5 {
                    out.extend_from_slice(&group_value(&group)?.to_be_bytes());
                    len = 0;
                }
            }
            _ => return Err(Ascii85Error::InvalidByte(b, pos)),
        }
    }

    if len > 0 {
        // Pad the final group with 'u' (digit 84) and keep len - 1 bytes;
        // a single trailing digit therefore contributes nothing.
        for digit in group.iter_mut().skip(len) {
            *digit = 84;
        }
        let bytes = group_value(&group)?.to_be_bytes();
        out.extend_from_slice(&bytes[..len - 1]);
    }
    Ok(out)
}

fn group_value(digits: &[u8; 5]) -> Result<u32, Ascii85Error> {
    let mut acc: u64 = 0;
    for &d in digits {
        acc = acc * 85 + u64::from(d);
    }
    u32::try_from(acc).map_err(|_| Ascii85Error::Overflow)
}
