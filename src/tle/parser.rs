//! # Field extraction
//!
//! A single generic routine reads every field of a [`RawTle`] through its
//! [`FieldSpec`]: slice the columns, trim, normalize when the field kind asks for
//! it, convert. Conversion failures never abort the record; the field falls back to
//! zero and the event is reported.
use std::str::FromStr;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::tle::field_layout::{self as layout, FieldKind, FieldSpec, TleLine};
use crate::tle::normalize::{expand_year, line_checksum, normalize_float};
use crate::tle::{
    Classification, InternationalDesignator, Line1, Line2, MeanMotionDerivatives, ParsedTle,
    RawTle, TleEpoch,
};

/// Outcome of one field conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Parsed,
    SubstitutedZero,
}

/// A field value together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FieldValue<T> {
    pub(crate) value: T,
    pub(crate) status: FieldStatus,
}

impl<T> FieldValue<T> {
    pub(crate) fn is_substituted(&self) -> bool {
        self.status == FieldStatus::SubstitutedZero
    }
}

/// Numeric types a field converts to.
///
/// `str::parse` accepts `inf`, `nan` and exponents overflowing to infinity; such
/// values are rejected like any other unparseable text.
pub(crate) trait FieldNumber: FromStr + Default {
    fn is_usable(&self) -> bool {
        true
    }
}

impl FieldNumber for u8 {}
impl FieldNumber for u32 {}

impl FieldNumber for f64 {
    fn is_usable(&self) -> bool {
        self.is_finite()
    }
}

/// Extraction context for one record.
struct FieldExtractor<'a> {
    raw: &'a RawTle,
    object: String,
    sink: &'a dyn DiagnosticSink,
    substituted: Vec<String>,
}

impl<'a> FieldExtractor<'a> {
    fn new(raw: &'a RawTle, sink: &'a dyn DiagnosticSink) -> Self {
        // Name the object by its title, or by catalog number when the title is blank
        let object = match raw.name() {
            "" => raw
                .line1
                .get(layout::LINE1_CATALOG_NUMBER.range())
                .unwrap_or_default()
                .trim()
                .to_string(),
            name => name.to_string(),
        };

        FieldExtractor {
            raw,
            object,
            sink,
            substituted: Vec::new(),
        }
    }

    fn slice(&self, spec: &FieldSpec) -> Option<&'a str> {
        let raw: &'a RawTle = self.raw;
        let line = match spec.line {
            TleLine::One => &raw.line1,
            TleLine::Two => &raw.line2,
        };
        line.get(spec.range())
    }

    fn substitute(&mut self, spec: &FieldSpec, raw: &str) {
        self.substituted.push(spec.name.to_string());
        self.sink.report(Diagnostic::FieldParse {
            object: self.object.clone(),
            field: spec.name,
            raw: raw.to_string(),
        });
    }

    /// Convert a numeric field, applying normalization for [`FieldKind::NormalizedFloat`].
    fn number<T: FieldNumber>(&mut self, spec: &FieldSpec) -> FieldValue<T> {
        let Some(text) = self.slice(spec) else {
            self.substitute(spec, "");
            return FieldValue {
                value: T::default(),
                status: FieldStatus::SubstitutedZero,
            };
        };

        let parsed = match spec.kind {
            FieldKind::NormalizedFloat => normalize_float(text).parse::<T>(),
            _ => text.trim().parse::<T>(),
        };

        match parsed {
            Ok(value) if value.is_usable() => FieldValue {
                value,
                status: FieldStatus::Parsed,
            },
            _ => {
                self.substitute(spec, text);
                FieldValue {
                    value: T::default(),
                    status: FieldStatus::SubstitutedZero,
                }
            }
        }
    }

    fn float(&mut self, spec: &FieldSpec) -> f64 {
        self.number::<f64>(spec).value
    }

    fn text(&mut self, spec: &FieldSpec) -> String {
        match self.slice(spec) {
            Some(text) => text.trim().to_string(),
            None => {
                self.substitute(spec, "");
                String::new()
            }
        }
    }

    fn check_line(&self, line: TleLine, text: &str, published: FieldValue<u8>) {
        if published.is_substituted() {
            return;
        }
        let computed = line_checksum(text);
        if computed != u32::from(published.value) {
            self.sink.report(Diagnostic::ChecksumMismatch {
                object: self.object.clone(),
                line: line.number(),
                expected: u32::from(published.value),
                computed,
            });
        }
    }
}

/// Parse both data lines of `raw` into a [`ParsedTle`].
///
/// Arguments
/// -----------------
/// * `raw` – Record to parse.
/// * `sink` – Receiver of field substitution and checksum diagnostics.
///
/// Return
/// ----------
/// * The parsed record; never fails.
///
/// See also
/// ------------
/// * [`crate::tle::field_layout::LAYOUT`] – Column table.
/// * [`normalize_float`] – Implied decimal point / exponent handling.
pub(crate) fn parse_tle(raw: RawTle, sink: &dyn DiagnosticSink) -> ParsedTle {
    let mut ex = FieldExtractor::new(&raw, sink);

    let line1_checksum = ex.number::<u8>(&layout::LINE1_CHECKSUM);
    let line2_checksum = ex.number::<u8>(&layout::LINE2_CHECKSUM);

    let line1 = Line1 {
        number: ex.number(&layout::LINE1_NUMBER).value,
        catalog_number: ex.text(&layout::LINE1_CATALOG_NUMBER),
        classification: Classification::from_code(&ex.text(&layout::CLASSIFICATION)),
        international_designator: InternationalDesignator {
            launch_year: expand_year(ex.number(&layout::LAUNCH_YEAR).value),
            launch_number: ex.number(&layout::LAUNCH_NUMBER).value,
            launch_piece: ex.text(&layout::LAUNCH_PIECE),
        },
        epoch: TleEpoch {
            year: expand_year(ex.number(&layout::EPOCH_YEAR).value),
            day: ex.float(&layout::EPOCH_DAY),
        },
        mean_motion_derivatives: MeanMotionDerivatives {
            first: ex.float(&layout::MEAN_MOTION_FIRST_DERIVATIVE),
            second: ex.float(&layout::MEAN_MOTION_SECOND_DERIVATIVE),
        },
        bstar: ex.float(&layout::BSTAR),
        ephemeris_type: ex.number(&layout::EPHEMERIS_TYPE).value,
        element_set_number: ex.number(&layout::ELEMENT_SET_NUMBER).value,
        checksum: line1_checksum.value,
    };

    let line2 = Line2 {
        number: ex.number(&layout::LINE2_NUMBER).value,
        catalog_number: ex.text(&layout::LINE2_CATALOG_NUMBER),
        inclination: ex.float(&layout::INCLINATION),
        ascending_node_longitude: ex.float(&layout::ASCENDING_NODE_LONGITUDE),
        eccentricity: ex.float(&layout::ECCENTRICITY),
        periapsis_argument: ex.float(&layout::PERIAPSIS_ARGUMENT),
        mean_anomaly: ex.float(&layout::MEAN_ANOMALY),
        mean_motion: ex.float(&layout::MEAN_MOTION),
        revolution_number: ex.number(&layout::REVOLUTION_NUMBER).value,
        checksum: line2_checksum.value,
    };

    ex.check_line(TleLine::One, &raw.line1, line1_checksum);
    ex.check_line(TleLine::Two, &raw.line2, line2_checksum);

    let substituted_fields = ex.substituted;

    ParsedTle {
        raw,
        line1,
        line2,
        substituted_fields,
    }
}

#[cfg(test)]
mod parser_test {
    use super::*;
    use crate::diagnostics::CollectingSink;

    const TITLE: &str = "ISS (ZARYA)";
    const LINE1: &str = "1 25544U 98067A   22014.20078024 -.00001581  00000+0 -20061-4 0  9991";
    const LINE2: &str = "2 25544  51.6452  19.1428 0006828  17.5887  10.3753 15.49476744321309";

    #[test]
    fn test_parse_iss() {
        let sink = CollectingSink::new();
        let tle = parse_tle(RawTle::new(TITLE, LINE1, LINE2), &sink);

        assert!(sink.diagnostics().is_empty());
        assert!(tle.is_clean());
        assert!(tle.checksum_valid());

        let l1 = &tle.line1;
        assert_eq!(l1.number, 1);
        assert_eq!(l1.catalog_number, "25544");
        assert_eq!(l1.classification, Classification::Unclassified);
        assert_eq!(
            l1.international_designator,
            InternationalDesignator {
                launch_year: 1998,
                launch_number: 67,
                launch_piece: "A".into(),
            }
        );
        assert_eq!(l1.epoch.year, 2022);
        assert_eq!(l1.epoch.day, 14.20078024);
        assert_eq!(l1.mean_motion_derivatives.first, -0.00001581);
        assert_eq!(l1.mean_motion_derivatives.second, 0.0);
        assert_eq!(l1.bstar, -0.20061e-4);
        assert_eq!(l1.ephemeris_type, 0);
        assert_eq!(l1.element_set_number, 999);
        assert_eq!(l1.checksum, 1);

        let l2 = &tle.line2;
        assert_eq!(l2.number, 2);
        assert_eq!(l2.catalog_number, "25544");
        assert_eq!(l2.inclination, 51.6452);
        assert_eq!(l2.ascending_node_longitude, 19.1428);
        assert_eq!(l2.eccentricity, 0.0006828);
        assert_eq!(l2.periapsis_argument, 17.5887);
        assert_eq!(l2.mean_anomaly, 10.3753);
        assert_eq!(l2.mean_motion, 15.49476744);
        assert_eq!(l2.revolution_number, 32130);
        assert_eq!(l2.checksum, 9);
    }

    #[test]
    fn test_malformed_field_is_zeroed_and_reported() {
        // inclination column corrupted
        let line2 = "2 25544  51.6x52  19.1428 0006828  17.5887  10.3753 15.49476744321309";
        let sink = CollectingSink::new();
        let tle = parse_tle(RawTle::new(TITLE, LINE1, line2), &sink);

        assert_eq!(tle.line2.inclination, 0.0);
        assert_eq!(tle.substituted_fields(), ["inclination".to_string()]);

        // remaining fields are unaffected
        assert_eq!(tle.line2.ascending_node_longitude, 19.1428);
        assert_eq!(tle.line2.mean_motion, 15.49476744);

        let diagnostics = sink.take();
        assert!(diagnostics.contains(&Diagnostic::FieldParse {
            object: "ISS (ZARYA)".into(),
            field: "inclination",
            raw: " 51.6x52".into(),
        }));
        // 'x' contributes nothing to the checksum where '4' contributed 4
        assert!(diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::ChecksumMismatch { line: 2, .. })));
    }

    #[test]
    fn test_short_line_does_not_panic() {
        let sink = CollectingSink::new();
        let tle = parse_tle(RawTle::new(TITLE, &LINE1[..40], LINE2), &sink);

        assert_eq!(tle.line1.bstar, 0.0);
        assert_eq!(tle.line1.checksum, 0);
        assert!(tle
            .substituted_fields()
            .iter()
            .any(|f| f == "bstar"));
        assert_eq!(tle.line2.revolution_number, 32130);
        assert!(!tle.is_clean());
    }

    #[test]
    fn test_object_falls_back_to_catalog_number() {
        let line1 = "1 25544U 98067A   22014.2007802X -.00001581  00000+0 -20061-4 0  9991";
        let sink = CollectingSink::new();
        let _ = parse_tle(RawTle::new("   ", line1, LINE2), &sink);

        let diagnostics = sink.take();
        assert!(!diagnostics.is_empty());
        assert!(diagnostics.iter().all(|d| d.object() == "25544"));
    }

    /// Replace the columns of `spec` in `line` by `text`, right-aligned.
    fn patch(line: &str, spec: &FieldSpec, text: &str) -> String {
        let mut out = line.to_string();
        out.replace_range(spec.range(), &format!("{text:>width$}", width = spec.len));
        out
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        let line1 = patch(LINE1, &layout::EPOCH_DAY, "inf");
        let line2 = patch(LINE2, &layout::MEAN_MOTION, "nan");
        let sink = CollectingSink::new();
        let tle = parse_tle(RawTle::new(TITLE, line1, line2), &sink);

        assert_eq!(tle.line1.epoch.day, 0.0);
        assert_eq!(tle.line2.mean_motion, 0.0);
        assert_eq!(
            tle.substituted_fields(),
            ["epoch_day".to_string(), "mean_motion".to_string()]
        );
        assert!(!tle.is_clean());

        let diagnostics = sink.take();
        for field in ["epoch_day", "mean_motion"] {
            assert!(diagnostics
                .iter()
                .any(|d| matches!(d, Diagnostic::FieldParse { field: f, .. } if *f == field)));
        }
    }

    #[test]
    fn test_overflowing_exponent_is_rejected() {
        let line1 = patch(LINE1, &layout::BSTAR, "1e400");
        let sink = CollectingSink::new();
        let tle = parse_tle(RawTle::new(TITLE, line1, LINE2), &sink);

        assert_eq!(tle.line1.bstar, 0.0);
        assert_eq!(tle.field_status(&layout::BSTAR), FieldStatus::SubstitutedZero);
        assert_eq!(tle.field_status(&layout::EPOCH_DAY), FieldStatus::Parsed);
    }

    #[test]
    fn test_leading_plus_is_parsed() {
        let line1 = patch(LINE1, &layout::BSTAR, "+11606-4");
        let sink = CollectingSink::new();
        let tle = parse_tle(RawTle::new(TITLE, line1, LINE2), &sink);

        assert_eq!(tle.line1.bstar, 0.11606e-4);
        assert_eq!(tle.field_status(&layout::BSTAR), FieldStatus::Parsed);
    }

    #[test]
    fn test_classification_codes() {
        assert_eq!(Classification::from_code("C"), Classification::Classified);
        assert_eq!(Classification::from_code("S"), Classification::Secret);
        assert_eq!(Classification::from_code("U"), Classification::Unclassified);
        assert_eq!(Classification::from_code("X"), Classification::Unknown);
        assert_eq!(Classification::from_code(""), Classification::Unknown);
    }
}
