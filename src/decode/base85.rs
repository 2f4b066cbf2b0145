//! RFC 1924 base85 decoding.
//!
//! Distinct alphabet and conventions from ASCII85: digits start at `0`, there
//! is no `z` shorthand, no framing, and whitespace is not tolerated. The
//! final group is implicitly padded with `~` (digit 84) and keeps one byte
//! fewer than its digit count, so a one-digit group decodes to nothing.

use thiserror::Error;

const ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

const INVALID: u8 = 0xff;

const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Errors from a strict base85 decode attempt.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base85Error {
    /// A byte outside the RFC 1924 alphabet (whitespace included).
    #[error("invalid base85 digit 0x{0:02x} at offset {1}")]
    InvalidByte(u8, usize),

    /// A five-digit group exceeded 2^32 - 1.
    #[error("base85 group overflow")]
    Overflow,
}

/// Decode RFC 1924 base85 over the whole input.
pub fn decode(data: &[u8]) -> Result<Vec<u8>, Base85Error> {
    let mut out = Vec::with_capacity(data.len() / 5 * 4 + 4);
    let mut group = [84u8; 5]; // implicit '~' padding for the final group
    let mut len = 0usize;

    for (pos, &b) in data.iter().enumerate() {
        let digit = DECODE_TABLE[b as usize];
        if digit == INVALID {
            return Err(Base85Error::InvalidByte(b, pos));
        }
        group[len] = digit;
        len += 1;
        if len == 5 {
            out.extend_from_slice(&group_value(&group)?.to_be_bytes());
            group = [84u8; 5];
            len = 0;
        }
    }

    if len > 0 {
        let bytes = group_value(&group)?.to_be_bytes();
        out.extend_from_slice(&bytes[..len - 1]);
    }
    Ok(out)
}

fn group_value(digits: &[u8; 5]) -> Result<u32, Base85Error> {
    let mut acc: u64 = 0;
    for &d in digits {
        acc = acc * 85 + u64::from(d);
    }
    u32::try_from(acc).map_err(|_| Base85Error::Overflow)
}
