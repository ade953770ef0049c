//! # Fixed-column layout of the two-line element format
//!
//! Every field of the two data lines is described once, as data, by a [`FieldSpec`]:
//! which line it lives on, its 0-based column range and how its text must be
//! interpreted. The parser never slices lines by hand; it looks fields up here and
//! hands them to a single extraction routine, so a wrong offset can only live in
//! this table.
//!
//! ```text
//! 1 25544U 98067A   22014.20078024 -.00001581  00000+0 -20061-4 0  9991
//! 2 25544  51.6452  19.1428 0006828  17.5887  10.3753 15.49476744321309
//! ```
use std::ops::Range;

/// Which data line a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TleLine {
    One,
    Two,
}

impl TleLine {
    pub fn number(self) -> u8 {
        match self {
            TleLine::One => 1,
            TleLine::Two => 2,
        }
    }
}

/// How the text of a field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Unsigned integer.
    Integer,
    /// Decimal number written in full.
    Float,
    /// Decimal number with implied decimal point and/or exponent marker.
    NormalizedFloat,
    /// Free text, trimmed.
    Text,
}

/// Location and interpretation of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub line: TleLine,
    pub start: usize,
    pub len: usize,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(
        name: &'static str,
        line: TleLine,
        start: usize,
        len: usize,
        kind: FieldKind,
    ) -> Self {
        FieldSpec {
            name,
            line,
            start,
            len,
            kind,
        }
    }

    /// Byte range of the field inside its line.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

use FieldKind::*;
use TleLine::*;

// ---------------------------------------------------------------------------------------------
// Line 1
// ---------------------------------------------------------------------------------------------

pub const LINE1_NUMBER: FieldSpec = FieldSpec::new("line1_number", One, 0, 1, Integer);
pub const LINE1_CATALOG_NUMBER: FieldSpec = FieldSpec::new("line1_catalog_number", One, 2, 5, Text);
pub const CLASSIFICATION: FieldSpec = FieldSpec::new("classification", One, 7, 1, Text);
pub const LAUNCH_YEAR: FieldSpec = FieldSpec::new("launch_year", One, 9, 2, Integer);
pub const LAUNCH_NUMBER: FieldSpec = FieldSpec::new("launch_number", One, 11, 3, Integer);
pub const LAUNCH_PIECE: FieldSpec = FieldSpec::new("launch_piece", One, 14, 3, Text);
pub const EPOCH_YEAR: FieldSpec = FieldSpec::new("epoch_year", One, 18, 2, Integer);
pub const EPOCH_DAY: FieldSpec = FieldSpec::new("epoch_day", One, 20, 12, Float);
pub const MEAN_MOTION_FIRST_DERIVATIVE: FieldSpec =
    FieldSpec::new("mean_motion_first_derivative", One, 33, 10, Float);
pub const MEAN_MOTION_SECOND_DERIVATIVE: FieldSpec =
    FieldSpec::new("mean_motion_second_derivative", One, 44, 8, NormalizedFloat);
pub const BSTAR: FieldSpec = FieldSpec::new("bstar", One, 53, 8, NormalizedFloat);
pub const EPHEMERIS_TYPE: FieldSpec = FieldSpec::new("ephemeris_type", One, 62, 1, Integer);
pub const ELEMENT_SET_NUMBER: FieldSpec =
    FieldSpec::new("element_set_number", One, 64, 4, Integer);
pub const LINE1_CHECKSUM: FieldSpec = FieldSpec::new("line1_checksum", One, 68, 1, Integer);

// ---------------------------------------------------------------------------------------------
// Line 2
// ---------------------------------------------------------------------------------------------

pub const LINE2_NUMBER: FieldSpec = FieldSpec::new("line2_number", Two, 0, 1, Integer);
pub const LINE2_CATALOG_NUMBER: FieldSpec = FieldSpec::new("line2_catalog_number", Two, 2, 5, Text);
pub const INCLINATION: FieldSpec = FieldSpec::new("inclination", Two, 8, 8, Float);
pub const ASCENDING_NODE_LONGITUDE: FieldSpec =
    FieldSpec::new("ascending_node_longitude", Two, 17, 8, Float);
pub const ECCENTRICITY: FieldSpec = FieldSpec::new("eccentricity", Two, 26, 7, NormalizedFloat);
pub const PERIAPSIS_ARGUMENT: FieldSpec = FieldSpec::new("periapsis_argument", Two, 34, 8, Float);
pub const MEAN_ANOMALY: FieldSpec = FieldSpec::new("mean_anomaly", Two, 43, 8, Float);
pub const MEAN_MOTION: FieldSpec = FieldSpec::new("mean_motion", Two, 52, 11, Float);
pub const REVOLUTION_NUMBER: FieldSpec = FieldSpec::new("revolution_number", Two, 63, 5, Integer);
pub const LINE2_CHECKSUM: FieldSpec = FieldSpec::new("line2_checksum", Two, 68, 1, Integer);

/// The complete layout, in column order, line 1 first.
pub const LAYOUT: [FieldSpec; 24] = [
    LINE1_NUMBER,
    LINE1_CATALOG_NUMBER,
    CLASSIFICATION,
    LAUNCH_YEAR,
    LAUNCH_NUMBER,
    LAUNCH_PIECE,
    EPOCH_YEAR,
    EPOCH_DAY,
    MEAN_MOTION_FIRST_DERIVATIVE,
    MEAN_MOTION_SECOND_DERIVATIVE,
    BSTAR,
    EPHEMERIS_TYPE,
    ELEMENT_SET_NUMBER,
    LINE1_CHECKSUM,
    LINE2_NUMBER,
    LINE2_CATALOG_NUMBER,
    INCLINATION,
    ASCENDING_NODE_LONGITUDE,
    ECCENTRICITY,
    PERIAPSIS_ARGUMENT,
    MEAN_ANOMALY,
    MEAN_MOTION,
    REVOLUTION_NUMBER,
    LINE2_CHECKSUM,
];
