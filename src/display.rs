//! # Text rendering of derived elements
//!
//! Fixed-width renderers for the quantities of a [`DerivedElements`] value.
//!
//! ## Overview
//!
//! - [`format_number`] renders one number under a [`NumberFormat`].
//! - [`NumberFormat::for_label`] picks the format from the quantity's label only,
//!   never from its value.
//! - [`param_to_string`] renders a `label value` line.
//! - [`ElementsDisplay`] borrows a [`DerivedElements`] and renders the header and
//!   every line, in a fixed order, when used with `{}`.
//!
//! ## Presentation modes
//!
//! | mode | labels | width | decimals |
//! |---|---|---|---|
//! | SI-scaled | `SMa SMi PeR ApR R T PeT ApT Vel` | 5 | from magnitude |
//! | SI-scaled | `PeA ApA Alt` | 5 | from magnitude |
//! | fixed | `Ecc` | 6 | 4 |
//! | angular | anything else | 6 | 2 |
//!
//! SI-scaled numbers are divided by 1000 while their magnitude exceeds 1000 and get
//! the matching metric prefix. The decimal count then depends on the scaled
//! magnitude (3 below 10, 2 below 100, 1 otherwise) and drops by one for negative
//! values so the minus sign does not widen the field:
//!
//! ```text
//! -4.125e6  -> "-4.12M"
//!  646.5e3  -> "646.5k"
//! -646.5e3  -> " -646k"
//! ```
//!
//! ## Quick example
//!
//! ```rust,ignore
//! use tlescope::elements::DerivedElements;
//!
//! let elements = DerivedElements::from_tle(&tle);
//! println!("{}", elements.display().altitude(true));
//! ```
use std::fmt;

use itertools::Itertools;

use crate::elements::DerivedElements;
use crate::time::{epoch_to_mjd_utc, iso_utc_from_epoch};

/// Metric prefixes, by powers of 1000.
const PREFIXES: [&str; 9] = ["", "k", "M", "G", "T", "P", "E", "Z", "Y"];

const DEGREE_SIGN: &str = "\u{00b0}";

/// Width of the label column of a display line.
const LABEL_WIDTH: usize = 5;

/// How a number is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Raw value with 6 decimals, no padding, no scaling.
    Accurate,
    /// Metric prefix scaling, decimals chosen from the scaled magnitude and sign.
    SiScaled,
    /// Fixed decimals, no scaling.
    Fixed,
    /// Fixed decimals followed by a degree sign.
    Angular,
}

/// A [`FormatMode`] with its field width and decimal count.
///
/// In [`FormatMode::SiScaled`] the decimal count is recomputed from the scaled
/// value and `precision` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub mode: FormatMode,
    pub width: usize,
    pub precision: usize,
}

impl NumberFormat {
    pub const ACCURATE: NumberFormat = NumberFormat::new(FormatMode::Accurate, 0, 6);

    pub const fn new(mode: FormatMode, width: usize, precision: usize) -> Self {
        NumberFormat {
            mode,
            width,
            precision,
        }
    }

    /// Select the format of a quantity from its display label.
    ///
    /// Arguments
    /// -----------------
    /// * `label` – Short label of the quantity (`"SMa"`, `"Ecc"`, `"Inc"`, …).
    ///
    /// Return
    /// ----------
    /// * The format for this label. Unknown labels are treated as angles.
    pub fn for_label(label: &str) -> Self {
        match label {
            "SMa" | "SMi" | "PeR" | "ApR" | "R" => Self::new(FormatMode::SiScaled, 5, 3),
            "PeA" | "ApA" | "Alt" => Self::new(FormatMode::SiScaled, 5, 1),
            "Ecc" => Self::new(FormatMode::Fixed, 6, 4),
            "T" | "PeT" | "ApT" | "Vel" => Self::new(FormatMode::SiScaled, 5, 3),
            _ => Self::new(FormatMode::Angular, 6, 2),
        }
    }
}

/// Decimal count of an SI-scaled number from its scaled magnitude.
fn scaled_precision(magnitude: f64, negative: bool) -> usize {
    let precision: usize = if magnitude < 10.0 {
        3
    } else if magnitude < 100.0 {
        2
    } else {
        1
    };
    if negative {
        precision - 1
    } else {
        precision
    }
}

/// Render `value` under `format`.
///
/// Arguments
/// -----------------
/// * `value` – Number to render, in SI base units or degrees.
/// * `format` – Mode, field width and decimal count.
///
/// Return
/// ----------
/// * The number right-aligned in `format.width` columns, followed by the metric
///   prefix or the degree sign when the mode has one.
///
/// See also
/// ------------
/// * [`NumberFormat::for_label`] – Format lookup by label.
pub fn format_number(value: f64, format: NumberFormat) -> String {
    let NumberFormat {
        mode,
        width,
        precision,
    } = format;

    match mode {
        FormatMode::Accurate => format!("{value:.precision$}"),
        FormatMode::Fixed => format!("{value:width$.precision$}"),
        FormatMode::Angular => format!("{value:width$.precision$}{DEGREE_SIGN}"),
        FormatMode::SiScaled => {
            let negative = value < 0.0;
            let mut n = value.abs();

            let mut i = 0;
            while i < PREFIXES.len() - 1 && n > 1e3 {
                n /= 1e3;
                i += 1;
            }

            let precision = scaled_precision(n, negative);
            let n = if negative { -n } else { n };
            format!("{n:width$.precision$}{}", PREFIXES[i])
        }
    }
}

/// Render a `label value` display line.
///
/// The label is left-aligned in 5 columns. With `accurate`, the value is printed
/// with 6 decimals and no scaling; otherwise the format is looked up from the label.
pub fn param_to_string(label: &str, value: f64, accurate: bool) -> String {
    let format = if accurate {
        NumberFormat::ACCURATE
    } else {
        NumberFormat::for_label(label)
    };
    format!(
        "{label:<LABEL_WIDTH$}{}",
        format_number(value, format)
    )
}

/// Display adaptor rendering a [`DerivedElements`] value as a header followed by one
/// line per quantity.
///
/// Line order
/// -----------------
/// `SMa SMi PeR|PeA ApR|ApA R|Alt Ecc T PeT ApT Vel Inc LAN LPe AgP TrA TrL MnA MnL EcA`
///
/// The `EcA` label becomes `EcA!` when the eccentric anomaly did not converge.
///
/// See also
/// ------------
/// * [`DerivedElements::display`] – Entry point.
pub struct ElementsDisplay<'a> {
    elements: &'a DerivedElements,
    /// Render distances as heights above the body's surface.
    altitude: bool,
    /// Skip scaling and print raw values.
    accurate: bool,
}

impl<'a> ElementsDisplay<'a> {
    pub fn new(elements: &'a DerivedElements) -> Self {
        Self {
            elements,
            altitude: false,
            accurate: false,
        }
    }

    /// Show periapsis, apoapsis and current distance as altitudes (`PeA`, `ApA`,
    /// `Alt`) instead of radii (`PeR`, `ApR`, `R`).
    pub fn altitude(mut self, yes: bool) -> Self {
        self.altitude = yes;
        self
    }

    /// Print raw values with 6 decimals instead of the scaled presets.
    pub fn accurate(mut self, yes: bool) -> Self {
        self.accurate = yes;
        self
    }

    /// Ordered `(label, value)` pairs, before formatting.
    pub fn values(&self) -> Vec<(&'static str, f64)> {
        let e = self.elements;

        let (pe, ap, r) = if self.altitude {
            (
                ("PeA", e.periapsis_altitude()),
                ("ApA", e.apoapsis_altitude()),
                ("Alt", e.altitude()),
            )
        } else {
            (
                ("PeR", e.periapsis_radius),
                ("ApR", e.apoapsis_radius),
                ("R", e.radius),
            )
        };
        let eca = if e.eccentric_anomaly_converged {
            "EcA"
        } else {
            "EcA!"
        };

        vec![
            ("SMa", e.semi_major_axis),
            ("SMi", e.semi_minor_axis),
            pe,
            ap,
            r,
            ("Ecc", e.eccentricity),
            ("T", e.period),
            ("PeT", e.time_to_periapsis),
            ("ApT", e.time_to_apoapsis),
            ("Vel", e.velocity),
            ("Inc", e.inclination),
            ("LAN", e.ascending_node_longitude),
            ("LPe", e.periapsis_longitude),
            ("AgP", e.periapsis_argument),
            ("TrA", e.true_anomaly),
            ("TrL", e.true_longitude),
            ("MnA", e.mean_anomaly),
            ("MnL", e.mean_longitude),
            (eca, e.eccentric_anomaly),
        ]
    }

    /// Ordered `(label, formatted value)` rows.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        self.values()
            .into_iter()
            .map(|(label, value)| {
                let format = if self.accurate {
                    NumberFormat::ACCURATE
                } else {
                    NumberFormat::for_label(label)
                };
                (label, format_number(value, format))
            })
            .collect()
    }

    /// Rendered display lines, label padded to 5 columns.
    pub fn lines(&self) -> Vec<String> {
        self.values()
            .into_iter()
            .map(|(label, value)| param_to_string(label, value, self.accurate))
            .collect()
    }

    /// Header with the object name, the epoch as MJD and as a UTC calendar date, and
    /// the two source lines.
    ///
    /// ```text
    /// ISS (ZARYA)    MJD 59593.20078    2022-01-14T04:49:07 UTC
    ///     1 25544U 98067A   22014.20078024 -.00001581  00000+0 -20061-4 0  9991
    ///     2 25544  51.6452  19.1428 0006828  17.5887  10.3753 15.49476744321309
    /// ```
    pub fn header(&self) -> String {
        let e = self.elements;
        format!(
            "{}    MJD {:.5}    {}\n    {}\n    {}\n\n",
            e.name,
            epoch_to_mjd_utc(&e.epoch),
            iso_utc_from_epoch(&e.epoch),
            e.line1,
            e.line2
        )
    }
}

impl fmt::Display for ElementsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.header(), self.lines().iter().join("\n"))
    }
}

impl DerivedElements {
    /// Borrowing display adaptor with radii and scaled values.
    pub fn display(&self) -> ElementsDisplay<'_> {
        ElementsDisplay::new(self)
    }
}
