//! Payload input helpers
//!
//! Network servers hand payloads over as hex strings or as JSON arrays of
//! integers. These helpers turn both into the byte buffer the decoder reads.

use crate::error::{LppError, Result};

/// Parse a hex payload.
///
/// Accepts an optional `0x` prefix, embedded whitespace and either case.
///
/// ```rust
/// use lpp_codec::payload::parse_hex;
///
/// assert_eq!(parse_hex("0x03 67 ff9C").unwrap(), vec![0x03, 0x67, 0xFF, 0x9C]);
/// assert!(parse_hex("abc").is_err());
/// ```
pub fn parse_hex(payload: &str) -> Result<Vec<u8>> {
    let trimmed = payload.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let compact: String = digits.chars().filter(|c| !c.is_whitespace()).collect();

    hex::decode(&compact).map_err(|e| LppError::InvalidHex(e.to_string()))
}

/// Narrow an integer array to bytes, rejecting any element above 0xff
pub fn bytes_from_values(values: &[u64]) -> Result<Vec<u8>> {
    values
        .iter()
        .enumerate()
        .map(|(offset, &value)| {
            u8::try_from(value).map_err(|_| LppError::ByteOverflow { offset, value })
        })
        .collect()
}
