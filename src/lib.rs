//! # LPP Codec - Cayenne LPP telemetry decoder
//!
//! Decodes the compact channel/type/value payloads sent by LoRaWAN sensor
//! devices into named, typed field values.
//!
//! ## Key Features
//!
//! - **Static type registry**: Cayenne LPP types plus the RAKwireless extended
//!   table, built at compile time
//! - **Typed values**: scalars, 3-axis vectors, RGB, GPS fixes, raw passthrough
//! - **Configurable GPS expansion**: compact or legacy flattened records
//! - **Flattening**: `name_channel` keyed maps, last write wins
//!
//! ## Quick Start
//!
//! ```rust
//! use lpp_codec::{flatten, Decoder, SensorValue};
//!
//! let decoder = Decoder::new();
//!
//! // Channel 3 temperature -10.0 °C, channel 7 digital output 1
//! let records = decoder.decode(&[0x03, 0x67, 0xFF, 0x9C, 0x07, 0x01, 0x01]).unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].name, "temperature");
//! assert!((records[0].value.as_number().unwrap() + 10.0).abs() < 1e-9);
//!
//! let map = flatten(&records);
//! assert_eq!(map.get("digital_out_7"), Some(&SensorValue::Number(1.0)));
//! ```
//!
//! ## Modules
//!
//! - [`registry`]: Type code to field descriptor table
//! - [`numeric`]: Big-endian fixed-point conversion
//! - [`decoder`]: Buffer walker producing [`SensorRecord`]s
//! - [`record`]: Record and value types
//! - [`flatten`]: Name-keyed flattening
//! - [`payload`]: Hex and integer-array input helpers
//! - [`field_tester`]: RAK10701 field tester position payload
//! - [`uplink`]: Per-fPort decoding into flattened maps

// Modules
pub mod config;
pub mod decoder;
pub mod error;
pub mod field_tester;
pub mod flatten;
pub mod numeric;
pub mod payload;
pub mod record;
pub mod registry;
pub mod uplink;

// Re-exports for convenient access
pub use config::{DecoderConfig, GpsExpansion, VariableWidth};
pub use decoder::Decoder;
pub use error::{LppError, Result};
pub use field_tester::{decode_fix, FieldTesterFix};
pub use flatten::{flatten, FlatMap};
pub use numeric::bytes_to_number;
pub use payload::{bytes_from_values, parse_hex};
pub use record::{SensorRecord, SensorValue};
pub use registry::{Divisor, FieldDescriptor, Registry, Shape, Width, STANDARD_DESCRIPTORS};
pub use uplink::{FieldTesterDecoder, UplinkDecoder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decode with the built-in registry and default configuration
pub fn decode(bytes: &[u8]) -> Result<Vec<SensorRecord>> {
    Decoder::new().decode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_basic_decode_and_flatten() {
        let records = decode(&[0x05, 0x68, 0x64, 0x03, 0x73, 0x27, 0x94]).unwrap();
        let map = flatten(&records);

        assert_eq!(map.get("humidity_5"), Some(&SensorValue::Number(50.0)));
        let pressure = map.get("barometer_3").and_then(|v| v.as_number()).unwrap();
        assert!((pressure - 1013.2).abs() < 1e-9);
    }
}
