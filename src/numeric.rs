//! Fixed-point numeric conversion
//!
//! LPP values are big-endian integers, optionally two's-complement, scaled
//! by a decimal divisor. The division is done in `f64`, so divisors that are
//! not powers of two give the usual binary rounding (27.2 is not exact).

use crate::error::{LppError, Result};

/// Widest slice [`bytes_to_number`] accepts
pub const MAX_WIDTH: usize = 8;

/// Fold `slice` as a big-endian integer, reinterpret it as two's complement
/// when `signed`, then divide by `divisor`.
///
/// Elements are generic so that callers holding wider integers (for example
/// a byte array parsed from JSON) get [`LppError::ByteOverflow`] instead of
/// silent truncation.
///
/// ```rust
/// use lpp_codec::numeric::bytes_to_number;
///
/// assert_eq!(bytes_to_number(&[0xFFu8, 0x9C], true, 10.0).unwrap(), -10.0);
/// assert_eq!(bytes_to_number(&[0xFFu8, 0x9C], false, 1.0).unwrap(), 65436.0);
/// assert!(bytes_to_number(&[0x01u16, 0x100], false, 1.0).is_err());
/// ```
pub fn bytes_to_number<B>(slice: &[B], signed: bool, divisor: f64) -> Result<f64>
where
    B: Copy + Into<u64>,
{
    Ok(fold_integer(slice, signed)? as f64 / divisor)
}

/// Integer part of [`bytes_to_number`], before scaling
pub fn fold_integer<B>(slice: &[B], signed: bool) -> Result<i128>
where
    B: Copy + Into<u64>,
{
    if slice.len() > MAX_WIDTH {
        return Err(LppError::WidthTooLarge { width: slice.len() });
    }

    let mut value: u64 = 0;
    for (offset, &element) in slice.iter().enumerate() {
        let byte: u64 = element.into();
        if byte > 0xFF {
            return Err(LppError::ByteOverflow {
                offset,
                value: byte,
            });
        }
        value = (value << 8) | byte;
    }

    let value = i128::from(value);
    if !signed {
        return Ok(value);
    }

    // 2^(8n) needs 65 bits at n = 8
    let edge: i128 = 1 << (8 * slice.len());
    let max = (edge - 1) >> 1;
    Ok(if value > max { value - edge } else { value })
}
