// LPP Codec - Cayenne LPP telemetry decoder
// Copyright (c) 2025 LPP Codec contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! Sensor type registry
//!
//! Maps the one-byte LPP type code to a [`FieldDescriptor`]: payload width,
//! signedness, fixed-point divisor, canonical field name and the value
//! [`Shape`] the decoder should produce.
//!
//! The table covers the IPSO-derived Cayenne LPP types plus the RAKwireless
//! extensions (soil and water quality, battery, wind, particulate matter,
//! raw Modbus passthroughs). Names are not unique: several codes share a
//! semantic name such as `wind_speed` or `gps`.
//!
//! A [`Registry`] is built in a `const` context, so custom tables can be
//! declared as statics:
//!
//! ```rust
//! use lpp_codec::registry::{FieldDescriptor, Registry};
//!
//! const MINE: &[FieldDescriptor] = &[
//!     FieldDescriptor::scalar(103, 2, true, 10, "temperature"),
//!     FieldDescriptor::scalar(200, 2, false, 1, "flow"),
//! ];
//! static REGISTRY: Registry<'static> = Registry::new(MINE);
//!
//! assert_eq!(REGISTRY.lookup(200).unwrap().name, "flow");
//! assert!(REGISTRY.lookup(104).is_err());
//! ```

use crate::error::{LppError, Result};

/// Payload width of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Exactly this many bytes follow the header
    Fixed(usize),
    /// Raw passthrough whose length is not implied by the type
    Variable,
}

/// Fixed-point scale applied after integer decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divisor {
    /// Same divisor for the value (or every component)
    Scalar(u32),
    /// Positional divisors, e.g. latitude/longitude/altitude
    PerComponent([u32; 3]),
}

impl Divisor {
    /// Divisor for the component at `index`
    pub fn component(&self, index: usize) -> f64 {
        match self {
            Divisor::Scalar(d) => f64::from(*d),
            Divisor::PerComponent(ds) => f64::from(ds[index.min(2)]),
        }
    }
}

/// How the payload of an entry is split into values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One big-endian integer over the whole payload
    Scalar,
    /// Three 2-byte components `{x, y, z}`
    Axes,
    /// Three 1-byte components `{r, g, b}`
    Colour,
    /// Latitude, longitude and altitude components of the given widths
    Location {
        latitude: usize,
        longitude: usize,
        altitude: usize,
    },
    /// Bytes passed through unconverted
    Raw,
}

/// Registry entry for one type code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub type_code: u8,
    pub width: Width,
    pub signed: bool,
    pub divisor: Divisor,
    pub name: &'static str,
    pub shape: Shape,
}

impl FieldDescriptor {
    /// Single value over `width` bytes
    pub const fn scalar(
        type_code: u8,
        width: usize,
        signed: bool,
        divisor: u32,
        name: &'static str,
    ) -> Self {
        Self {
            type_code,
            width: Width::Fixed(width),
            signed,
            divisor: Divisor::Scalar(divisor),
            name,
            shape: Shape::Scalar,
        }
    }

    /// 3-axis value, 2 bytes per axis
    pub const fn axes(type_code: u8, signed: bool, divisor: u32, name: &'static str) -> Self {
        Self {
            type_code,
            width: Width::Fixed(6),
            signed,
            divisor: Divisor::Scalar(divisor),
            name,
            shape: Shape::Axes,
        }
    }

    /// RGB triple, 1 unsigned byte per channel
    pub const fn colour(type_code: u8, name: &'static str) -> Self {
        Self {
            type_code,
            width: Width::Fixed(3),
            signed: false,
            divisor: Divisor::Scalar(1),
            name,
            shape: Shape::Colour,
        }
    }

    /// Signed GPS fix with per-component widths and divisors
    pub const fn location(
        type_code: u8,
        widths: [usize; 3],
        divisors: [u32; 3],
        name: &'static str,
    ) -> Self {
        Self {
            type_code,
            width: Width::Fixed(widths[0] + widths[1] + widths[2]),
            signed: true,
            divisor: Divisor::PerComponent(divisors),
            name,
            shape: Shape::Location {
                latitude: widths[0],
                longitude: widths[1],
                altitude: widths[2],
            },
        }
    }

    /// Variable-width raw passthrough
    pub const fn raw(type_code: u8, name: &'static str) -> Self {
        Self {
            type_code,
            width: Width::Variable,
            signed: false,
            divisor: Divisor::Scalar(1),
            name,
            shape: Shape::Raw,
        }
    }

    /// Fixed payload width, `None` for variable-width types
    pub fn fixed_width(&self) -> Option<usize> {
        match self.width {
            Width::Fixed(n) => Some(n),
            Width::Variable => None,
        }
    }
}

/// Immutable type-code lookup table
#[derive(Debug, Clone)]
pub struct Registry<'a> {
    descriptors: &'a [FieldDescriptor],
    index: [Option<usize>; 256],
}

impl<'a> Registry<'a> {
    /// Build a registry over `descriptors`.
    ///
    /// A later entry for the same type code shadows an earlier one.
    pub const fn new(descriptors: &'a [FieldDescriptor]) -> Self {
        let mut index = [None; 256];
        let mut i = 0;
        while i < descriptors.len() {
            index[descriptors[i].type_code as usize] = Some(i);
            i += 1;
        }
        Self { descriptors, index }
    }

    /// The built-in Cayenne LPP + RAKwireless table
    pub fn standard() -> &'static Registry<'static> {
        &STANDARD
    }

    /// Descriptor for `type_code`, or [`LppError::UnknownType`]
    pub fn lookup(&self, type_code: u8) -> Result<&FieldDescriptor> {
        self.get(type_code)
            .ok_or(LppError::UnknownType { type_code })
    }

    pub fn get(&self, type_code: u8) -> Option<&FieldDescriptor> {
        self.index[type_code as usize].map(|i| &self.descriptors[i])
    }

    pub fn contains(&self, type_code: u8) -> bool {
        self.index[type_code as usize].is_some()
    }

    /// Recognized descriptors in ascending type-code order
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.index
            .iter()
            .filter_map(move |slot| slot.map(|i| &self.descriptors[i]))
    }

    /// Number of recognized type codes
    pub fn len(&self) -> usize {
        self.index.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Built-in registry instance
pub static STANDARD: Registry<'static> = Registry::new(STANDARD_DESCRIPTORS);

/// Built-in descriptor table
pub const STANDARD_DESCRIPTORS: &[FieldDescriptor] = &[
    FieldDescriptor::scalar(0, 1, false, 1, "digital_in"),
    FieldDescriptor::scalar(1, 1, false, 1, "digital_out"),
    FieldDescriptor::scalar(2, 2, true, 100, "analog_in"),
    FieldDescriptor::scalar(3, 2, true, 100, "analog_out"),
    // Soil and water quality
    FieldDescriptor::scalar(16, 2, false, 1, "nitrogen"),
    FieldDescriptor::scalar(17, 2, false, 1, "phosphorus"),
    FieldDescriptor::scalar(18, 2, false, 1, "potassium"),
    FieldDescriptor::scalar(19, 2, false, 1, "salinity"),
    FieldDescriptor::scalar(20, 2, false, 100, "dissolved_oxygen"),
    FieldDescriptor::scalar(21, 2, false, 10, "orp"),
    FieldDescriptor::scalar(22, 2, false, 1, "cod"),
    FieldDescriptor::scalar(23, 2, false, 1, "turbidity"),
    FieldDescriptor::scalar(24, 2, false, 10, "no3"),
    FieldDescriptor::scalar(25, 2, false, 100, "nh4+"),
    FieldDescriptor::scalar(26, 2, false, 1, "bod"),
    // Single accelerometer axes, 1 mG
    FieldDescriptor::scalar(27, 2, true, 1, "accel-x"),
    FieldDescriptor::scalar(28, 2, true, 1, "accel-y"),
    FieldDescriptor::scalar(29, 2, true, 1, "accel-z"),
    // Extended
    FieldDescriptor::scalar(100, 4, false, 1, "generic"),
    FieldDescriptor::scalar(101, 2, false, 1, "illuminance"),
    FieldDescriptor::scalar(102, 1, false, 1, "presence"),
    FieldDescriptor::scalar(103, 2, true, 10, "temperature"),
    FieldDescriptor::scalar(104, 1, false, 2, "humidity"),
    FieldDescriptor::scalar(105, 2, false, 1, "air_quality_index"),
    FieldDescriptor::scalar(112, 2, true, 10, "humidity_prec"),
    FieldDescriptor::axes(113, true, 1000, "accelerometer"),
    FieldDescriptor::scalar(115, 2, false, 10, "barometer"),
    FieldDescriptor::scalar(116, 2, false, 100, "voltage"),
    FieldDescriptor::scalar(117, 2, false, 1000, "current"),
    FieldDescriptor::scalar(118, 4, false, 1, "frequency"),
    FieldDescriptor::scalar(119, 4, false, 1, "precipitation"),
    FieldDescriptor::scalar(120, 1, false, 1, "percentage"),
    FieldDescriptor::scalar(121, 2, true, 1, "altitude"),
    FieldDescriptor::scalar(125, 2, false, 1, "concentration"),
    FieldDescriptor::scalar(126, 3, false, 1, "rak_device_serial_number"),
    FieldDescriptor::scalar(127, 4, false, 1000, "high_precision_ec"),
    FieldDescriptor::scalar(128, 2, false, 1, "power"),
    FieldDescriptor::scalar(130, 4, false, 1000, "distance"),
    FieldDescriptor::scalar(131, 4, false, 1000, "energy"),
    FieldDescriptor::scalar(132, 2, false, 1, "direction"),
    FieldDescriptor::scalar(133, 4, false, 1, "time"),
    FieldDescriptor::axes(134, true, 100, "gyrometer"),
    FieldDescriptor::colour(135, "colour"),
    FieldDescriptor::location(136, [3, 3, 3], [10_000, 10_000, 100], "gps"),
    FieldDescriptor::location(137, [4, 4, 3], [1_000_000, 1_000_000, 100], "gps"),
    FieldDescriptor::scalar(138, 2, false, 1, "voc"),
    FieldDescriptor::scalar(142, 1, false, 1, "switch"),
    FieldDescriptor::scalar(144, 2, false, 100, "wind_speed"),
    FieldDescriptor::scalar(145, 2, false, 1, "strikes"),
    FieldDescriptor::scalar(152, 1, false, 1, "capacity"),
    FieldDescriptor::scalar(153, 2, false, 100, "dc_current"),
    FieldDescriptor::scalar(154, 2, false, 100, "dc_voltage"),
    FieldDescriptor::scalar(156, 2, false, 10, "moisture"),
    FieldDescriptor::scalar(158, 2, false, 100, "wind_speed"),
    FieldDescriptor::scalar(159, 2, false, 1, "wind_direction"),
    FieldDescriptor::scalar(161, 2, false, 100, "high_precision_ph"),
    FieldDescriptor::scalar(162, 2, false, 10, "ph"),
    FieldDescriptor::scalar(163, 2, false, 1, "pyranometer"),
    // Battery
    FieldDescriptor::scalar(184, 1, false, 1, "capacity_batt"),
    FieldDescriptor::scalar(185, 2, false, 100, "dc_current_batt"),
    FieldDescriptor::scalar(186, 2, false, 100, "dc_voltage_batt"),
    FieldDescriptor::scalar(187, 4, false, 100, "hub_voltage"),
    FieldDescriptor::scalar(188, 2, false, 10, "soil_moist"),
    FieldDescriptor::scalar(190, 2, false, 100, "wind_speed"),
    FieldDescriptor::scalar(191, 2, false, 1, "wind_direction"),
    FieldDescriptor::scalar(192, 2, false, 1000, "soil_ec"),
    FieldDescriptor::scalar(193, 2, false, 100, "soil_ph_h"),
    FieldDescriptor::scalar(194, 2, false, 10, "soil_ph_l"),
    FieldDescriptor::scalar(195, 2, false, 1, "pyranometer"),
    FieldDescriptor::scalar(203, 1, false, 1, "light"),
    FieldDescriptor::scalar(227, 2, false, 1, "pm10"),
    FieldDescriptor::scalar(228, 2, false, 1, "pm2_5"),
    FieldDescriptor::scalar(229, 2, true, 10, "orientation"),
    FieldDescriptor::scalar(233, 2, false, 10, "noise"),
    // Modbus / raw passthroughs
    FieldDescriptor::raw(241, "binary_raw"),
    FieldDescriptor::scalar(243, 2, false, 1, "raw2byte"),
    FieldDescriptor::scalar(244, 4, false, 1, "raw4byte"),
    FieldDescriptor::scalar(245, 4, false, 1, "float"),
    FieldDescriptor::scalar(246, 4, true, 1, "int32"),
    FieldDescriptor::scalar(247, 4, false, 1, "uint32"),
    FieldDescriptor::raw(248, "binary_tlv"),
];
