//! Conversion between raw bytes and their hexadecimal text form ("HEXWKB").
//!
//! Each byte is two hex digits, most significant nibble first. No separators, whitespace or
//! `0x` prefix are accepted.

use crate::error::{WkbError, WkbResult};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encode bytes as an uppercase hex string.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    out
}

/// Decode a hex string, accepting either case.
pub fn from_hex(text: &str) -> WkbResult<Vec<u8>> {
    let digits = text.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(WkbError::malformed(
            None,
            format!("hex input has odd length {}", digits.len()),
        ));
    }

    digits
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let high = nibble(pair[0], i * 2)?;
            let low = nibble(pair[1], i * 2 + 1)?;
            Ok((high << 4) | low)
        })
        .collect()
}

fn nibble(digit: u8, position: usize) -> WkbResult<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        _ => Err(WkbError::malformed(
            None,
            format!(
                "invalid hex digit {:?} at character {position}",
                digit as char
            ),
        )),
    }
}
