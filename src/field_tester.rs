// LPP Codec - Cayenne LPP telemetry decoder
// Copyright (c) 2025 LPP Codec contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! RAK10701 field tester position payload
//!
//! The field tester reports its GPS fix on fPort 1 in a packed, non-LPP
//! layout:
//!
//! ```text
//! byte 0   bit 7: longitude sign, bit 6: latitude sign, bits 5..0: lat[22..17]
//! byte 1   lat[16..9]
//! byte 2   lat[8..1]
//! byte 3   bit 7: lat[0], bits 6..0: lon[22..16]
//! byte 4   lon[15..8]
//! byte 5   lon[7..0]
//! byte 6-7 altitude + 1000, big-endian
//! byte 8   HDOP * 10
//! byte 9   satellites in view
//! ```
//!
//! Fixes below the quality gate are still decoded but carry a warning.

use crate::error::{LppError, Result};
use crate::flatten::FlatMap;
use crate::record::SensorValue;
use serde::Serialize;

/// fPort the field tester reports positions on
pub const FIELD_TESTER_PORT: u8 = 1;

/// Position payload length
pub const PAYLOAD_LEN: usize = 10;

/// HDOP must be strictly below this
pub const MAX_HDOP: f64 = 2.0;

/// Minimum satellites in view
pub const MIN_SATS: u8 = 5;

/// Decoded field tester fix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldTesterFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres
    pub altitude: f64,
    /// Estimated accuracy in metres
    pub accuracy: f64,
    pub hdop: f64,
    pub sats: u8,
    /// `"(<lat>,<lon>)"`
    pub location: String,
    /// Set when the fix fails the HDOP / satellite gate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision_warning: Option<String>,
}

impl FieldTesterFix {
    pub fn is_precise(&self) -> bool {
        self.precision_warning.is_none()
    }

    /// Flattened view; `error` comes first when the quality gate fails
    pub fn to_flat_map(&self) -> FlatMap {
        let mut map = FlatMap::new();
        if let Some(warning) = &self.precision_warning {
            map.insert("error", SensorValue::Text(warning.clone()));
        }
        map.insert("latitude", self.latitude.into());
        map.insert("longitude", self.longitude.into());
        map.insert("altitude", self.altitude.into());
        map.insert("accuracy", self.accuracy.into());
        map.insert("hdop", self.hdop.into());
        map.insert("sats", f64::from(self.sats).into());
        map.insert("location", SensorValue::Text(self.location.clone()));
        map
    }
}

/// Decode a field tester position payload. Bytes past the tenth are ignored.
pub fn decode_fix(bytes: &[u8]) -> Result<FieldTesterFix> {
    if bytes.len() < PAYLOAD_LEN {
        return Err(LppError::TruncatedBuffer {
            offset: 0,
            needed: PAYLOAD_LEN,
            available: bytes.len(),
        });
    }
    let b: [u32; PAYLOAD_LEN] = std::array::from_fn(|i| u32::from(bytes[i]));

    let lon_sign = if b[0] & 0x80 != 0 { -1.0 } else { 1.0 };
    let lat_sign = if b[0] & 0x40 != 0 { -1.0 } else { 1.0 };

    let enc_lat = ((b[0] & 0x3F) << 17) | (b[1] << 9) | (b[2] << 1) | (b[3] >> 7);
    let enc_lon = ((b[3] & 0x7F) << 16) | (b[4] << 8) | b[5];

    let latitude = lat_sign * (f64::from(enc_lat) * 108.0 + 53.0) / 10_000_000.0;
    let longitude = lon_sign * (f64::from(enc_lon) * 215.0 + 107.0) / 10_000_000.0;
    let altitude = f64::from((b[6] << 8) | b[7]) - 1000.0;
    let hdop = f64::from(b[8]) / 10.0;
    let sats = bytes[9];
    let accuracy = (hdop * 5.0 + 5.0) / 10.0;

    let precision_warning = if hdop < MAX_HDOP && sats >= MIN_SATS {
        None
    } else {
        Some(format!(
            "Need more GPS precision (hdop must be <{} & sats must be >= {}) current hdop: {} & sats:{}",
            MAX_HDOP, MIN_SATS, hdop, sats
        ))
    };

    Ok(FieldTesterFix {
        latitude,
        longitude,
        altitude,
        accuracy,
        hdop,
        sats,
        location: format!("({},{})", latitude, longitude),
        precision_warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const GOOD_FIX: [u8; 10] = [0x9F, 0xCA, 0x05, 0x42, 0x00, 0xCC, 0x04, 0xE2, 0x0C, 0x09];

    #[test]
    fn test_decode_good_fix() {
        let fix = decode_fix(&GOOD_FIX).unwrap();
        assert_relative_eq!(fix.latitude, 44.9999981, epsilon = 1e-9);
        assert_relative_eq!(fix.longitude, -92.9999807, epsilon = 1e-9);
        assert_relative_eq!(fix.altitude, 250.0);
        assert_relative_eq!(fix.hdop, 1.2);
        assert_relative_eq!(fix.accuracy, 1.1, epsilon = 1e-12);
        assert_eq!(fix.sats, 9);
        assert!(fix.is_precise());
        assert!(fix.location.starts_with("(44.99999"));
    }

    #[test]
    fn test_zero_encoding_rounds_to_cell_centre() {
        let fix = decode_fix(&[0, 0, 0, 0, 0, 0, 0x03, 0xE8, 10, 5]).unwrap();
        assert_relative_eq!(fix.latitude, 0.0000053);
        assert_relative_eq!(fix.longitude, 0.0000107);
        assert_eq!(fix.altitude, 0.0);
    }

    #[test]
    fn test_hdop_gate_is_strict() {
        let mut bytes = GOOD_FIX;
        bytes[8] = 20;
        let fix = decode_fix(&bytes).unwrap();
        assert!(!fix.is_precise());
    }

    #[test]
    fn test_low_quality_warning() {
        let mut bytes = GOOD_FIX;
        bytes[8] = 25;
        bytes[9] = 4;
        let fix = decode_fix(&bytes).unwrap();
        assert_eq!(
            fix.precision_warning.as_deref(),
            Some("Need more GPS precision (hdop must be <2 & sats must be >= 5) current hdop: 2.5 & sats:4")
        );
        let flat = fix.to_flat_map();
        let keys: Vec<&str> = flat.keys().collect();
        assert_eq!(keys[0], "error");
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn test_short_payload() {
        assert_eq!(
            decode_fix(&GOOD_FIX[..9]),
            Err(LppError::TruncatedBuffer {
                offset: 0,
                needed: 10,
                available: 9
            })
        );
    }
}
