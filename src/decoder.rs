//! Decoder module
//!
//! Walks an LPP buffer entry by entry. Each entry is a channel byte, a type
//! byte and a payload whose width is implied by the type:
//!
//! ```text
//! [channel: 1] [type: 1] [payload: width(type)] [channel: 1] [type: 1] ...
//! ```
//!
//! The payload is shaped according to the registry descriptor (scalar,
//! 3-axis, colour, GPS, raw) and one generic record is appended per entry,
//! preceded by any extra GPS records the configuration asks for.

use crate::config::{DecoderConfig, GpsExpansion, VariableWidth};
use crate::error::{LppError, Result};
use crate::numeric::bytes_to_number;
use crate::payload::parse_hex;
use crate::record::{SensorRecord, SensorValue};
use crate::registry::{FieldDescriptor, Registry, Shape, Width};

/// LPP payload decoder
///
/// Holds no per-call state: the same decoder can be shared across threads
/// and reused for any number of buffers.
#[derive(Debug, Clone)]
pub struct Decoder<'r> {
    registry: &'r Registry<'r>,
    config: DecoderConfig,
}

impl Decoder<'static> {
    /// Decoder over the built-in registry with default configuration
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    /// Decoder over the built-in registry
    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            registry: Registry::standard(),
            config,
        }
    }
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Decoder<'r> {
    /// Decoder over a custom registry
    pub fn with_registry(registry: &'r Registry<'r>, config: DecoderConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn registry(&self) -> &'r Registry<'r> {
        self.registry
    }

    /// Decode a whole buffer into records, in encounter order.
    ///
    /// Any error aborts the call; no partial record list is returned.
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<SensorRecord>> {
        let result = self.decode_entries(bytes);

        #[cfg(feature = "logging")]
        match &result {
            Ok(records) => log::debug!(
                "decoded {} bytes into {} records",
                bytes.len(),
                records.len()
            ),
            Err(e) => log::warn!("LPP decode failed: {}", e),
        }

        result
    }

    /// Decode a hex-encoded buffer
    pub fn decode_hex(&self, payload: &str) -> Result<Vec<SensorRecord>> {
        let bytes = parse_hex(payload)?;
        self.decode(&bytes)
    }

    fn decode_entries(&self, bytes: &[u8]) -> Result<Vec<SensorRecord>> {
        let mut records = Vec::new();
        let mut offset = 0;

        while offset < bytes.len() {
            let header = take(bytes, offset, 2)?;
            let (channel, type_code) = (header[0], header[1]);
            offset += 2;

            let descriptor = self.registry.lookup(type_code)?;
            let (payload, consumed) = self.payload(descriptor, bytes, offset)?;

            #[cfg(feature = "logging")]
            log::trace!(
                "entry at {}: channel {} type {} ({}), {} bytes",
                offset - 2,
                channel,
                type_code,
                descriptor.name,
                consumed
            );

            self.shape(channel, descriptor, payload, &mut records)?;
            offset += consumed;
        }

        Ok(records)
    }

    /// Payload slice for `descriptor` at `offset`, and the number of bytes
    /// the entry consumes after its header
    fn payload<'b>(
        &self,
        descriptor: &FieldDescriptor,
        bytes: &'b [u8],
        offset: usize,
    ) -> Result<(&'b [u8], usize)> {
        match descriptor.width {
            Width::Fixed(width) => Ok((take(bytes, offset, width)?, width)),
            Width::Variable => match self.config.variable_width {
                VariableWidth::Remainder => Ok((&bytes[offset..], bytes.len() - offset)),
                VariableWidth::LengthPrefixed => {
                    let length = take(bytes, offset, 1)?[0] as usize;
                    Ok((take(bytes, offset + 1, length)?, length + 1))
                }
            },
        }
    }

    fn shape(
        &self,
        channel: u8,
        descriptor: &FieldDescriptor,
        payload: &[u8],
        records: &mut Vec<SensorRecord>,
    ) -> Result<()> {
        let value = match descriptor.shape {
            Shape::Scalar => SensorValue::Number(bytes_to_number(
                payload,
                descriptor.signed,
                descriptor.divisor.component(0),
            )?),
            Shape::Axes => {
                let [x, y, z] = components(descriptor, payload, [2, 2, 2])?;
                SensorValue::Axes { x, y, z }
            }
            Shape::Colour => {
                let [r, g, b] = components(descriptor, payload, [1, 1, 1])?;
                SensorValue::Colour { r, g, b }
            }
            Shape::Location {
                latitude,
                longitude,
                altitude,
            } => {
                let [latitude, longitude, altitude] =
                    components(descriptor, payload, [latitude, longitude, altitude])?;
                if self.config.gps == GpsExpansion::Flattened {
                    let type_code = descriptor.type_code;
                    records.extend([
                        SensorRecord::new(
                            channel,
                            type_code,
                            "location",
                            SensorValue::Text(format!("({},{})", latitude, longitude)),
                        ),
                        SensorRecord::new(channel, type_code, "latitude", latitude.into()),
                        SensorRecord::new(channel, type_code, "longitude", longitude.into()),
                        SensorRecord::new(channel, type_code, "altitude", altitude.into()),
                    ]);
                }
                SensorValue::Location {
                    latitude,
                    longitude,
                    altitude,
                }
            }
            Shape::Raw => SensorValue::Raw(payload.to_vec()),
        };

        records.push(SensorRecord::new(
            channel,
            descriptor.type_code,
            descriptor.name,
            value,
        ));
        Ok(())
    }
}

/// `len` bytes at `offset`, or [`LppError::TruncatedBuffer`]
fn take(bytes: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    let available = bytes.len().saturating_sub(offset);
    if len > available {
        return Err(LppError::TruncatedBuffer {
            offset,
            needed: len,
            available,
        });
    }
    Ok(&bytes[offset..offset + len])
}

/// Split `payload` into three consecutive sub-slices and convert each with
/// the descriptor's signedness and positional divisor
fn components(
    descriptor: &FieldDescriptor,
    payload: &[u8],
    widths: [usize; 3],
) -> Result<[f64; 3]> {
    let mut values = [0.0; 3];
    let mut start = 0;
    for (i, width) in widths.into_iter().enumerate() {
        let slice = take(payload, start, width)?;
        values[i] = bytes_to_number(slice, descriptor.signed, descriptor.divisor.component(i))?;
        start += width;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn single(bytes: &[u8]) -> SensorRecord {
        let mut records = Decoder::new().decode(bytes).unwrap();
        assert_eq!(records.len(), 1);
        records.remove(0)
    }

    #[test]
    fn test_empty_payload() {
        assert!(Decoder::new().decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_digital_out() {
        let record = single(&[0x07, 0x01, 0x01]);
        assert_eq!(
            record,
            SensorRecord::new(7, 1, "digital_out", SensorValue::Number(1.0))
        );
    }

    #[test]
    fn test_temperature_negative() {
        let record = single(&[0x03, 0x67, 0xFF, 0x9C]);
        assert_eq!(record.name, "temperature");
        assert_relative_eq!(record.value.as_number().unwrap(), -10.0);
    }

    #[test]
    fn test_humidity_half_steps() {
        let record = single(&[0x05, 0x68, 0x65]);
        assert_relative_eq!(record.value.as_number().unwrap(), 50.5);
    }

    #[test]
    fn test_colour() {
        let record = single(&[0x02, 0x87, 0xFF, 0x80, 0x00]);
        assert_eq!(
            record.value,
            SensorValue::Colour {
                r: 255.0,
                g: 128.0,
                b: 0.0
            }
        );
    }

    #[test]
    fn test_gyrometer() {
        let record = single(&[0x04, 0x86, 0xFB, 0xE6, 0x02, 0x0D, 0x00, 0x00]);
        match record.value {
            SensorValue::Axes { x, y, z } => {
                assert_relative_eq!(x, -10.5);
                assert_relative_eq!(y, 5.25);
                assert_relative_eq!(z, 0.0);
            }
            other => panic!("expected axes, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_header() {
        assert_eq!(
            Decoder::new().decode(&[0x03]),
            Err(LppError::TruncatedBuffer {
                offset: 0,
                needed: 2,
                available: 1
            })
        );
    }

    #[test]
    fn test_unknown_type_aborts_whole_call() {
        let payload = [0x03, 0x67, 0x01, 0x10, 0x04, 0x63, 0x00];
        assert_eq!(
            Decoder::new().decode(&payload),
            Err(LppError::UnknownType { type_code: 99 })
        );
    }

    #[test]
    fn test_raw_remainder() {
        let records = Decoder::new()
            .decode(&[0x01, 0x67, 0x00, 0xE6, 0x09, 0xF1, 0xAA, 0xBB, 0xCC])
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "binary_raw");
        assert_eq!(records[1].value.as_raw(), Some(&[0xAA, 0xBB, 0xCC][..]));
    }

    #[test]
    fn test_raw_remainder_empty() {
        let records = Decoder::new().decode(&[0x09, 0xF8]).unwrap();
        assert_eq!(records[0].value.as_raw(), Some(&[][..]));
    }

    #[test]
    fn test_raw_length_prefixed() {
        let config = DecoderConfig::default().with_variable_width(VariableWidth::LengthPrefixed);
        let decoder = Decoder::with_config(config);
        let records = decoder
            .decode(&[0x09, 0xF8, 0x02, 0xAA, 0xBB, 0x01, 0x66, 0x01])
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value.as_raw(), Some(&[0xAA, 0xBB][..]));
        assert_eq!(records[1].name, "presence");

        assert_eq!(
            decoder.decode(&[0x09, 0xF8, 0x05, 0xAA]),
            Err(LppError::TruncatedBuffer {
                offset: 3,
                needed: 5,
                available: 1
            })
        );
        assert!(matches!(
            decoder.decode(&[0x09, 0xF8]),
            Err(LppError::TruncatedBuffer { needed: 1, .. })
        ));
    }

    #[test]
    fn test_decode_hex() {
        let records = Decoder::new().decode_hex("0367FF9C").unwrap();
        assert_relative_eq!(records[0].value.as_number().unwrap(), -10.0);
        assert!(matches!(
            Decoder::new().decode_hex("0367F"),
            Err(LppError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_custom_registry() {
        static TABLE: &[FieldDescriptor] = &[FieldDescriptor::scalar(200, 3, true, 1000, "flow")];
        let registry = Registry::new(TABLE);
        let decoder = Decoder::with_registry(&registry, DecoderConfig::default());
        let records = decoder.decode(&[0x01, 0xC8, 0xFF, 0xFF, 0x18]).unwrap();
        assert_relative_eq!(records[0].value.as_number().unwrap(), -0.232);
        assert!(decoder.decode(&[0x01, 0x67, 0x00, 0x00]).is_err());
    }
}
