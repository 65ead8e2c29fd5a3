//! Error types for LPP decoding
//!
//! Every failure is fatal for the decode call that produced it: no partial
//! record list is ever returned alongside an error.

use thiserror::Error;

/// Result type alias for LPP operations
pub type Result<T> = std::result::Result<T, LppError>;

/// Main error type for LPP operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LppError {
    /// Type code has no entry in the registry
    #[error("Unknown sensor type: {type_code} (0x{type_code:02x})")]
    UnknownType { type_code: u8 },

    /// Input element does not fit in a byte
    #[error("Byte value overflow at offset {offset}: {value} exceeds 0xff")]
    ByteOverflow { offset: usize, value: u64 },

    /// Descriptor width runs past the end of the buffer
    #[error("Truncated buffer at offset {offset}: need {needed} bytes, have {available}")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Numeric slice wider than the conversion supports
    #[error("Numeric width too large: {width} bytes exceeds maximum 8")]
    WidthTooLarge { width: usize },

    /// Hex payload could not be parsed
    #[error("Invalid hex payload: {0}")]
    InvalidHex(String),

    /// No decoder is registered for this fPort
    #[error("Unsupported fPort: {0}")]
    UnsupportedPort(u8),
}
