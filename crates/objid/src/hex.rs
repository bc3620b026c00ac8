//! Strict lowercase hex codec.
//!
//! The encoder only ever emits `0-9a-f`, and the decoder only accepts what
//! the encoder emits. Uppercase digits are rejected so that every accepted
//! string maps back to itself.

use crate::ObjectIdError;

/// Lookup table: ASCII byte → nibble value (255 = invalid).
const HEX_DECODE: [u8; 256] = {
    let mut table = [255u8; 256];
    let mut i = 0u8;
    loop {
        match i {
            b'0'..=b'9' => table[i as usize] = i - b'0',
            b'a'..=b'f' => table[i as usize] = i - b'a' + 10,
            _ => {}
        }
        if i == 255 {
            break;
        }
        i += 1;
    }
    table
};

const HEX_ENCODE: &[u8; 16] = b"0123456789abcdef";

/// Hex-encode `bytes` into `buf`. `buf` must be at least `bytes.len() * 2` bytes.
///
/// # Panics
///
/// Panics if `buf` is too short.
pub fn hex_encode(bytes: &[u8], buf: &mut [u8]) {
    assert!(
        buf.len() >= bytes.len() * 2,
        "hex_encode: buffer too short"
    );
    for (i, &b) in bytes.iter().enumerate() {
        buf[i * 2] = HEX_ENCODE[(b >> 4) as usize];
        buf[i * 2 + 1] = HEX_ENCODE[(b & 0x0f) as usize];
    }
}

/// Hex-encode `bytes` to a new `String`.
pub fn hex_to_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_ENCODE[(b >> 4) as usize] as char);
        out.push(HEX_ENCODE[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode a hex string into `buf`. The hex string length must be exactly `buf.len() * 2`.
pub fn hex_decode(hex: &str, buf: &mut [u8]) -> Result<(), ObjectIdError> {
    let raw = hex.as_bytes();
    if raw.len() != buf.len() * 2 {
        return Err(ObjectIdError::InvalidHexLength {
            expected: buf.len() * 2,
            actual: raw.len(),
        });
    }
    for (i, out) in buf.iter_mut().enumerate() {
        let hi = HEX_DECODE[raw[i * 2] as usize];
        let lo = HEX_DECODE[raw[i * 2 + 1] as usize];
        if hi == 255 {
            return Err(invalid_at(hex, i * 2));
        }
        if lo == 255 {
            return Err(invalid_at(hex, i * 2 + 1));
        }
        *out = (hi << 4) | lo;
    }
    Ok(())
}

/// Decode a hex string to a new `Vec<u8>`.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, ObjectIdError> {
    if hex.len() % 2 != 0 {
        return Err(ObjectIdError::OddHexLength { actual: hex.len() });
    }
    let mut buf = vec![0u8; hex.len() / 2];
    hex_decode(hex, &mut buf)?;
    Ok(buf)
}

/// Check if a string is valid lowercase hexadecimal of even length.
pub fn is_valid_hex(s: &str) -> bool {
    s.len() % 2 == 0 && s.bytes().all(|b| HEX_DECODE[b as usize] != 255)
}

// `position` is a byte offset; multi-byte characters report their first
// scalar value when the offset lands on a char boundary.
fn invalid_at(hex: &str, position: usize) -> ObjectIdError {
    let character = hex
        .get(position..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    ObjectIdError::InvalidHex {
        position,
        character,
    }
}
