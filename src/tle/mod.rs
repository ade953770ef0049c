//! # Two-line element sets
//!
//! Raw and parsed representations of a two-line element set (TLE), plus the
//! routines turning catalog text into them.
//!
//! ## Overview
//! -----------------
//! - [`RawTle`]: the three text lines of one record, untouched.
//! - [`ParsedTle`]: the typed fields of both data lines. Nested groups
//!   ([`InternationalDesignator`], [`TleEpoch`], [`MeanMotionDerivatives`]) are small
//!   owned values embedded by value.
//! - [`batch`]: groups a flat stream of catalog lines into [`RawTle`] records.
//! - [`field_layout`]: the column table every field is extracted from.
//! - [`normalize`]: implied decimal point / exponent handling, year expansion, checksums.
//! - [`parser`]: the generic extraction routine.
//!
//! ## Error Handling
//! -----------------
//! Parsing never fails. A field whose text cannot be converted is set to zero, its
//! name is recorded in [`ParsedTle::substituted_fields`], and a
//! [`Diagnostic::FieldParse`](crate::diagnostics::Diagnostic::FieldParse) is reported
//! to the sink supplied by the caller.
use std::fmt;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, RevPerDay, TITLE_LEN, TLE_LINE_LEN};
use crate::diagnostics::{DiagnosticSink, NullSink};
use crate::time::tle_epoch_to_epoch;
use field_layout::FieldSpec;
use parser::FieldStatus;

pub mod batch;
pub mod field_layout;
pub mod normalize;
pub mod parser;

/// Unstructured TLE: the title line and the two data lines of one record.
/// <https://en.wikipedia.org/wiki/Two-line_element_set>
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub struct RawTle {
    pub title: String,
    pub line1: String,
    pub line2: String,
}

impl RawTle {
    pub fn new(
        title: impl Into<String>,
        line1: impl Into<String>,
        line2: impl Into<String>,
    ) -> Self {
        RawTle {
            title: title.into(),
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    /// Object name: the title without its padding.
    pub fn name(&self) -> &str {
        self.title.trim()
    }

    /// `true` when the title fits the catalog title width and both data lines are
    /// exactly one TLE line long, in ASCII.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.title.len() <= TITLE_LEN
            && [&self.line1, &self.line2]
                .iter()
                .all(|l| l.len() == TLE_LINE_LEN && l.is_ascii())
    }
}

/// Security classification of the element set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Classified,
    Secret,
    Unclassified,
    Unknown,
}

impl Classification {
    /// Expand the one-letter catalog code; anything unexpected is [`Classification::Unknown`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "C" => Classification::Classified,
            "S" => Classification::Secret,
            "U" => Classification::Unclassified,
            _ => Classification::Unknown,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::Classified => "Classified",
            Classification::Secret => "Secret",
            Classification::Unclassified => "Unclassified",
            Classification::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// COSPAR international designator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InternationalDesignator {
    /// Four-digit launch year.
    pub launch_year: u32,
    /// Launch number of the year.
    pub launch_number: u32,
    /// Piece of the launch (`"A"`, `"B"`, …).
    pub launch_piece: String,
}

/// Reference epoch of the element set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TleEpoch {
    /// Four-digit year.
    pub year: u32,
    /// Fractional day of the year, `1.0` being January 1st, 00:00 UTC.
    pub day: f64,
}

impl TleEpoch {
    pub fn to_epoch(&self) -> Epoch {
        tle_epoch_to_epoch(self.year as i32, self.day)
    }
}

/// Mean motion derivatives as published (first derivative / 2, second derivative / 6).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanMotionDerivatives {
    pub first: f64,
    pub second: f64,
}

/// Fields of line 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line1 {
    pub number: u8,
    pub catalog_number: String,
    pub classification: Classification,
    pub international_designator: InternationalDesignator,
    pub epoch: TleEpoch,
    pub mean_motion_derivatives: MeanMotionDerivatives,
    /// Drag term; carried through, not used by the element calculator.
    pub bstar: f64,
    pub ephemeris_type: u8,
    pub element_set_number: u32,
    pub checksum: u8,
}

/// Fields of line 2. Angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line2 {
    pub number: u8,
    pub catalog_number: String,
    pub inclination: Degree,
    pub ascending_node_longitude: Degree,
    pub eccentricity: f64,
    pub periapsis_argument: Degree,
    pub mean_anomaly: Degree,
    pub mean_motion: RevPerDay,
    pub revolution_number: u32,
    pub checksum: u8,
}

/// A two-line element set split into typed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTle {
    pub raw: RawTle,
    pub line1: Line1,
    pub line2: Line2,
    substituted_fields: Vec<String>,
}

impl ParsedTle {
    /// Parse a record, discarding diagnostics.
    ///
    /// See also
    /// ------------
    /// * [`ParsedTle::parse_with_sink`] – Same, reporting diagnostics.
    pub fn parse(raw: RawTle) -> Self {
        Self::parse_with_sink(raw, &NullSink)
    }

    /// Parse a record, reporting substituted fields and checksum mismatches to `sink`.
    ///
    /// Arguments
    /// -----------------
    /// * `raw` – The record to parse; data lines are expected to be 69 ASCII characters.
    /// * `sink` – Receiver of non-fatal diagnostics.
    ///
    /// Return
    /// ----------
    /// * The parsed record. Unparseable numeric fields hold zero and are listed in
    ///   [`ParsedTle::substituted_fields`].
    pub fn parse_with_sink(raw: RawTle, sink: &dyn DiagnosticSink) -> Self {
        parser::parse_tle(raw, sink)
    }

    /// Object name from the title line.
    pub fn name(&self) -> &str {
        self.raw.name()
    }

    /// Names of the fields that could not be parsed and were set to zero.
    pub fn substituted_fields(&self) -> &[String] {
        &self.substituted_fields
    }

    /// How the value of `field` was obtained.
    ///
    /// ```rust
    /// use tlescope::tle::{field_layout, parser::FieldStatus, ParsedTle, RawTle};
    ///
    /// let tle = ParsedTle::parse(RawTle::new(
    ///     "ISS (ZARYA)",
    ///     "1 25544U 98067A   22014.20078024 -.00001581  00000+0 -20061-4 0  9991",
    ///     "2 25544  51.6x52  19.1428 0006828  17.5887  10.3753 15.49476744321309",
    /// ));
    /// assert_eq!(tle.field_status(&field_layout::INCLINATION), FieldStatus::SubstitutedZero);
    /// assert_eq!(tle.field_status(&field_layout::MEAN_MOTION), FieldStatus::Parsed);
    /// ```
    pub fn field_status(&self, field: &FieldSpec) -> FieldStatus {
        if self.substituted_fields.iter().any(|name| name == field.name) {
            FieldStatus::SubstitutedZero
        } else {
            FieldStatus::Parsed
        }
    }

    /// `true` when every field was parsed from its text.
    pub fn is_clean(&self) -> bool {
        self.substituted_fields.is_empty()
    }

    /// `true` when the checksum column of both lines matches the computed checksum.
    pub fn checksum_valid(&self) -> bool {
        u32::from(self.line1.checksum) == normalize::line_checksum(&self.raw.line1)
            && u32::from(self.line2.checksum) == normalize::line_checksum(&self.raw.line2)
    }
}

/// Split a catalog text blob into records and parse each one.
///
/// See also
/// ------------
/// * [`batch::split_text`] – Record recognition.
/// * [`ParsedTle::parse_with_sink`] – Per-record parsing.
pub fn parse_text(text: &str, sink: &dyn DiagnosticSink) -> Vec<ParsedTle> {
    batch::split_text(text)
        .into_iter()
        .map(|raw| ParsedTle::parse_with_sink(raw, sink))
        .collect()
}
