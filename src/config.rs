// LPP Codec - Cayenne LPP telemetry decoder
// Copyright (c) 2025 LPP Codec contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! Configuration types for the decoder

/// Records emitted for a GPS entry
///
/// The two variants produce different flattened key sets, so a deployment
/// picks one and keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GpsExpansion {
    /// Only the generic `gps` record with `{latitude, longitude, altitude}`
    #[default]
    Compact,
    /// `location` (`"(<lat>,<lon>)"`), `latitude`, `longitude` and
    /// `altitude` records, followed by the generic `gps` record
    Flattened,
}

/// Length rule for variable-width raw types (241, 248)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VariableWidth {
    /// The raw value runs to the end of the buffer
    #[default]
    Remainder,
    /// First payload byte is the length of the raw value that follows
    LengthPrefixed,
}

/// Decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    /// GPS record expansion
    pub gps: GpsExpansion,

    /// Variable-width payload rule
    pub variable_width: VariableWidth,
}

impl DecoderConfig {
    /// Generic records only
    pub fn compact() -> Self {
        Self::default()
    }

    /// Legacy flattened-output behavior: GPS entries also emit
    /// `location`/`latitude`/`longitude`/`altitude`
    pub fn flattened() -> Self {
        Self {
            gps: GpsExpansion::Flattened,
            ..Default::default()
        }
    }

    /// Same configuration with explicit-length raw payloads
    pub fn with_variable_width(self, variable_width: VariableWidth) -> Self {
        Self {
            variable_width,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::default();
        assert_eq!(config.gps, GpsExpansion::Compact);
        assert_eq!(config.variable_width, VariableWidth::Remainder);
        assert_eq!(DecoderConfig::compact(), config);
    }

    #[test]
    fn test_flattened_keeps_other_defaults() {
        let config = DecoderConfig::flattened().with_variable_width(VariableWidth::LengthPrefixed);
        assert_eq!(config.gps, GpsExpansion::Flattened);
        assert_eq!(config.variable_width, VariableWidth::LengthPrefixed);
    }
}
