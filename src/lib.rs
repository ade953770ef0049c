//! # tlescope
//!
//! Orbital elements from two-line element sets (TLE).
//!
//! Catalog text goes through the [`tle::batch`] splitter into [`tle::RawTle`]
//! records, each parsed field by field into a [`tle::ParsedTle`]. The
//! [`elements`] module derives the classical orbital quantities of the object
//! around a dominant body, and [`display`] renders them as fixed-width text.
//!
//! ```rust
//! use tlescope::diagnostics::NullSink;
//! use tlescope::elements::DerivedElements;
//! use tlescope::tle::parse_text;
//!
//! let text = "ISS (ZARYA)             \r\n\
//!     1 25544U 98067A   22014.20078024 -.00001581  00000+0 -20061-4 0  9991\r\n\
//!     2 25544  51.6452  19.1428 0006828  17.5887  10.3753 15.49476744321309\r\n";
//!
//! let tles = parse_text(text, &NullSink);
//! let iss = DerivedElements::from_tle(&tles[0]);
//! assert!(iss.semi_major_axis > 6.7e6 && iss.semi_major_axis < 6.9e6);
//! println!("{}", iss.display().altitude(true));
//! ```
pub mod constants;
pub mod diagnostics;
pub mod display;
pub mod elements;
pub mod kepler;
pub mod params;
pub mod time;
pub mod tle;
pub mod tlescope_errors;

pub use crate::elements::DerivedElements;
pub use crate::params::{DerivationParams, DominantBody};
pub use crate::tle::{ParsedTle, RawTle};
pub use crate::tlescope_errors::TlescopeError;
