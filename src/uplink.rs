//! Uplink decoding by fPort
//!
//! Transport adapters extract `(port, bytes)` from a network server envelope
//! and hand them to an [`UplinkDecoder`], which returns the flattened map
//! that integrations store or display.

use crate::decoder::Decoder;
use crate::error::{LppError, Result};
use crate::field_tester::{decode_fix, FIELD_TESTER_PORT};
use crate::flatten::{flatten, FlatMap};

/// Decode one uplink into a flattened field map
pub trait UplinkDecoder {
    fn decode_uplink(&self, port: u8, bytes: &[u8]) -> Result<FlatMap>;
}

/// LPP payloads are self-describing, so any port is accepted
impl UplinkDecoder for Decoder<'_> {
    fn decode_uplink(&self, _port: u8, bytes: &[u8]) -> Result<FlatMap> {
        Ok(flatten(&self.decode(bytes)?))
    }
}

/// Field tester position reports, fPort 1 only
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldTesterDecoder;

impl UplinkDecoder for FieldTesterDecoder {
    fn decode_uplink(&self, port: u8, bytes: &[u8]) -> Result<FlatMap> {
        if port != FIELD_TESTER_PORT {
            return Err(LppError::UnsupportedPort(port));
        }
        Ok(decode_fix(bytes)?.to_flat_map())
    }
}
