//! Decoded record types
//!
//! A [`SensorRecord`] is one named value produced by the decoder. Several
//! records may share a `(channel, type_code)` pair when one LPP entry expands
//! into multiple fields.

use serde::{Serialize, Serializer};
use std::fmt;

/// Value carried by a record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorValue {
    /// Scaled scalar
    Number(f64),
    /// Accelerometer / gyrometer reading
    Axes { x: f64, y: f64, z: f64 },
    /// RGB colour
    Colour { r: f64, g: f64, b: f64 },
    /// GPS fix
    Location {
        latitude: f64,
        longitude: f64,
        altitude: f64,
    },
    /// Synthesized text, e.g. `"(5,-4)"`
    Text(String),
    /// Unconverted passthrough bytes, serialized as lowercase hex
    Raw(#[serde(serialize_with = "serialize_hex")] Vec<u8>),
}

#[allow(clippy::ptr_arg)]
fn serialize_hex<S: Serializer>(bytes: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

impl SensorValue {
    /// Scalar value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SensorValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text value, if this is a synthesized string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SensorValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Raw bytes, if this is a passthrough value
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            SensorValue::Raw(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<f64> for SensorValue {
    fn from(value: f64) -> Self {
        SensorValue::Number(value)
    }
}

impl From<String> for SensorValue {
    fn from(value: String) -> Self {
        SensorValue::Text(value)
    }
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorValue::Number(n) => write!(f, "{}", n),
            SensorValue::Axes { x, y, z } => write!(f, "(x: {}, y: {}, z: {})", x, y, z),
            SensorValue::Colour { r, g, b } => write!(f, "(r: {}, g: {}, b: {})", r, g, b),
            SensorValue::Location {
                latitude,
                longitude,
                altitude,
            } => write!(f, "({},{}) @ {}m", latitude, longitude, altitude),
            SensorValue::Text(s) => f.write_str(s),
            SensorValue::Raw(bytes) => f.write_str(&hex::encode(bytes)),
        }
    }
}

/// One decoded field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorRecord {
    /// Sensor slot on the device
    pub channel: u8,
    /// LPP type code of the entry that produced this record
    #[serde(rename = "type")]
    pub type_code: u8,
    /// Canonical field name
    pub name: &'static str,
    pub value: SensorValue,
}

impl SensorRecord {
    pub fn new(channel: u8, type_code: u8, name: &'static str, value: SensorValue) -> Self {
        Self {
            channel,
            type_code,
            name,
            value,
        }
    }

    /// Flattened map key, `name_channel`
    pub fn key(&self) -> String {
        format!("{}_{}", self.name, self.channel)
    }
}
