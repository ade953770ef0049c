//! # Constants and type definitions for tlescope
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **unit
//! type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Gravitational constant and the Earth-scale defaults for the dominant body
//! - Unit conversions (days ↔ seconds, full turn in degrees)
//! - Fixed layout lengths of the two-line element format
//! - Core type aliases used across the crate
//!
//! All physical quantities are expressed in **SI units**; angles stored in parsed
//! records and derived elements are in **degrees**.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Newtonian gravitational constant (CODATA 2018), m³·kg⁻¹·s⁻²
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Mass of the Earth in kilograms
pub const EARTH_MASS: f64 = 5.97219e24;

/// Mean radius of the Earth in meters
pub const EARTH_MEAN_RADIUS: f64 = 6.371008e6;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Full turn in degrees
pub const DEGREES_PER_TURN: f64 = 360.0;

// -------------------------------------------------------------------------------------------------
// Two-line element layout
// -------------------------------------------------------------------------------------------------

/// Length of the title line as served by the catalog, used as record sentinel
pub const TITLE_LEN: usize = 24;

/// Length of each of the two data lines
pub const TLE_LINE_LEN: usize = 69;

/// Two-digit years above this value belong to the twentieth century
pub const LAST_TWO_DIGIT_YEAR_OF_2000S: u32 = 56;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in meters
pub type Meter = f64;
/// Duration in seconds
pub type Second = f64;
/// Speed in meters per second
pub type MeterPerSecond = f64;
/// Mass in kilograms
pub type Kilogram = f64;
/// Mean motion in revolutions per day
pub type RevPerDay = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
