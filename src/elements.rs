//! # Derived orbital elements
//!
//! This module turns a [`ParsedTle`] into the full set of classical orbital
//! quantities of the tracked object, [`DerivedElements`], given the dominant
//! body it orbits.
//!
//! ## Derivation order
//!
//! Every quantity only depends on the ones above it:
//!
//! 1. **T** – orbital period from the mean motion (rev/day → s)
//! 2. **a** – semi-major axis from Kepler's third law, `∛(G·M·T² / 4π²)`
//! 3. **b** – semi-minor axis, `a·√(1 − e²)`
//! 4. **rₚ, rₐ** – periapsis and apoapsis radii, `a·(1 ∓ e)`
//! 5. **ϖ** – longitude of periapsis, `Ω + ω`
//! 6. **time to periapsis / apoapsis** from the mean anomaly and the average sweep rate
//! 7. **L** – mean longitude, `ϖ + M`
//! 8. **E** – eccentric anomaly, see [`crate::kepler`]
//! 9. **ν** – true anomaly, `2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2))`
//! 10. **l** – true longitude, `ν + ϖ`
//! 11. **r** – radius at epoch, `a·(1 − e²) / (1 + e·cos ν)`
//! 12. **v** – velocity at epoch (vis-viva), `√(G·M·(2/r − 1/a))`
//!
//! ## Units
//!
//! - Lengths: **meters**
//! - Times: **seconds**
//! - Velocities: **m/s**
//! - Angles: **degrees**, longitudes and anomalies reduced to `[0°, 360°)`
//!
//! ## Convergence
//!
//! A Kepler solver hitting its iteration cap does not stop the derivation: the best
//! estimate is used for the dependent quantities and
//! [`DerivedElements::eccentric_anomaly_converged`] is unset.
use hifitime::Epoch;

use crate::constants::{
    Degree, Meter, MeterPerSecond, Second, DEGREES_PER_TURN, DPI, GRAVITATIONAL_CONSTANT,
    SECONDS_PER_DAY,
};
use crate::diagnostics::{Diagnostic, DiagnosticSink, NullSink};
use crate::kepler::solve_kepler_equation;
use crate::params::{DerivationParams, DominantBody};
use crate::tle::ParsedTle;

/// Classical orbital elements derived from one two-line element set.
///
/// Built once by [`DerivedElements::from_tle`]; a different dominant body or
/// epoch means a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedElements {
    /// Object name (trimmed title line).
    pub name: String,
    /// Trimmed line 1 of the source record.
    pub line1: String,
    /// Trimmed line 2 of the source record.
    pub line2: String,
    /// Reference epoch of the element set.
    pub epoch: Epoch,
    /// Body the elements were derived against.
    pub body: DominantBody,

    pub semi_major_axis: Meter,
    pub semi_minor_axis: Meter,
    pub periapsis_radius: Meter,
    pub apoapsis_radius: Meter,
    /// Distance from the body's center at epoch.
    pub radius: Meter,
    pub eccentricity: f64,
    pub period: Second,
    pub time_to_periapsis: Second,
    pub time_to_apoapsis: Second,
    pub velocity: MeterPerSecond,
    pub inclination: Degree,
    pub ascending_node_longitude: Degree,
    pub periapsis_longitude: Degree,
    pub periapsis_argument: Degree,
    pub true_anomaly: Degree,
    pub true_longitude: Degree,
    pub mean_anomaly: Degree,
    pub mean_longitude: Degree,
    pub eccentric_anomaly: Degree,

    /// `false` when the eccentric anomaly is a best effort after the iteration cap.
    pub eccentric_anomaly_converged: bool,
}

/// Orbital period (s) from the mean motion (rev/day).
pub fn period(mean_motion: f64) -> Second {
    SECONDS_PER_DAY / mean_motion
}

/// Semi-major axis (m) from the period (s) and the dominant body mass (kg).
pub fn semi_major_axis(period: Second, dominant_mass: f64) -> Meter {
    (GRAVITATIONAL_CONSTANT * dominant_mass * period.powi(2) / (4.0 * std::f64::consts::PI.powi(2)))
        .cbrt()
}

pub fn semi_minor_axis(sma: Meter, ecc: f64) -> Meter {
    sma * (1.0 - ecc.powi(2)).sqrt()
}

pub fn periapsis_radius(sma: Meter, ecc: f64) -> Meter {
    sma * (1.0 - ecc)
}

pub fn apoapsis_radius(sma: Meter, ecc: f64) -> Meter {
    sma * (1.0 + ecc)
}

/// Reduce an angle in degrees to `[0°, 360°)`.
pub fn principal_degrees(a: Degree) -> Degree {
    a.rem_euclid(DEGREES_PER_TURN)
}

pub fn periapsis_longitude(lan: Degree, agp: Degree) -> Degree {
    principal_degrees(lan + agp)
}

/// Average angular sweep rate (deg/s) over one period.
fn sweep_rate(period: Second) -> f64 {
    DEGREES_PER_TURN / period
}

/// Time (s) until the next periapsis passage.
pub fn time_to_periapsis(mean_anomaly: Degree, period: Second) -> Second {
    period - mean_anomaly / sweep_rate(period)
}

/// Time (s) relative to the apoapsis passage nearest in time.
///
/// Before apoapsis (`M ≤ 180°`) the result is the time left until it; past it, the
/// apoapsis is half a period after the next periapsis.
pub fn time_to_apoapsis(mean_anomaly: Degree, period: Second, time_to_periapsis: Second) -> Second {
    if mean_anomaly <= 180.0 {
        time_to_periapsis - period / 2.0
    } else {
        time_to_periapsis + period / 2.0
    }
}

pub fn mean_longitude(mean_anomaly: Degree, periapsis_longitude: Degree) -> Degree {
    principal_degrees(periapsis_longitude + mean_anomaly)
}

/// True anomaly (deg) from the eccentricity and the eccentric anomaly (deg).
///
/// The two-argument arctangent keeps the result in the correct quadrant; the
/// returned angle is reduced to `[0°, 360°)`.
pub fn true_anomaly(ecc: f64, eccentric_anomaly: Degree) -> Degree {
    let half = eccentric_anomaly.to_radians() / 2.0;
    let nu = 2.0 * ((1.0 + ecc).sqrt() * half.sin()).atan2((1.0 - ecc).sqrt() * half.cos());
    principal_degrees(nu.to_degrees())
}

pub fn true_longitude(true_anomaly: Degree, periapsis_longitude: Degree) -> Degree {
    principal_degrees(true_anomaly + periapsis_longitude)
}

/// Distance (m) from the body's center at true anomaly `tra` (deg).
pub fn orbital_radius(sma: Meter, ecc: f64, tra: Degree) -> Meter {
    sma * (1.0 - ecc.powi(2)) / (1.0 + ecc * tra.to_radians().cos())
}

/// Vis-viva speed (m/s) at distance `r` on an orbit of semi-major axis `sma`.
pub fn orbital_velocity(r: Meter, sma: Meter, dominant_mass: f64) -> MeterPerSecond {
    (GRAVITATIONAL_CONSTANT * dominant_mass * (2.0 / r - 1.0 / sma)).sqrt()
}

impl DerivedElements {
    /// Derive the elements of `tle` with the default parameters (Earth, default solver).
    pub fn from_tle(tle: &ParsedTle) -> Self {
        Self::from_tle_with(tle, &DerivationParams::default(), &NullSink)
    }

    /// Derive the elements of `tle` around a custom dominant body.
    pub fn from_tle_around(tle: &ParsedTle, body: DominantBody) -> Self {
        Self::from_tle_with(tle, &DerivationParams::with_body(body), &NullSink)
    }

    /// Derive every orbital element of `tle`.
    ///
    /// The mean anomaly is reduced to `[0°, 360°)` on entry, so the apoapsis timing
    /// branch and the solver see the same normalized angle.
    ///
    /// Arguments
    /// -----------------
    /// * `tle` – Parsed two-line element set.
    /// * `params` – Dominant body and solver controls.
    /// * `sink` – Receiver of the non-convergence notice, if any.
    ///
    /// Return
    /// ----------
    /// * The derived elements; never fails. Check
    ///   [`DerivedElements::eccentric_anomaly_converged`] for the solver status.
    ///
    /// See also
    /// ------------
    /// * [`solve_kepler_equation`] – Eccentric anomaly iteration.
    pub fn from_tle_with(
        tle: &ParsedTle,
        params: &DerivationParams,
        sink: &dyn DiagnosticSink,
    ) -> Self {
        let body = params.body;
        let l2 = &tle.line2;

        let ecc = l2.eccentricity;
        let inclination = l2.inclination;
        let lan = l2.ascending_node_longitude;
        let agp = l2.periapsis_argument;
        let mna = principal_degrees(l2.mean_anomaly);

        let t = period(l2.mean_motion);
        let sma = semi_major_axis(t, body.mass);
        let smi = semi_minor_axis(sma, ecc);
        let per = periapsis_radius(sma, ecc);
        let apr = apoapsis_radius(sma, ecc);

        let pet = time_to_periapsis(mna, t);
        let apt = time_to_apoapsis(mna, t, pet);

        let lpe = periapsis_longitude(lan, agp);
        let mnl = mean_longitude(mna, lpe);

        let kepler = solve_kepler_equation(
            ecc,
            mna.to_radians(),
            params.kepler_tolerance,
            params.kepler_max_iter,
        );
        if !kepler.converged {
            sink.report(Diagnostic::NoConvergence {
                object: tle.name().to_string(),
                iterations: kepler.iterations,
                last_step: kepler.last_step,
            });
        }
        let eca = (kepler.eccentric_anomaly % DPI).to_degrees();

        let tra = true_anomaly(ecc, eca);
        let trl = true_longitude(tra, lpe);
        let r = orbital_radius(sma, ecc, tra);
        let vel = orbital_velocity(r, sma, body.mass);

        DerivedElements {
            name: tle.name().to_string(),
            line1: tle.raw.line1.trim().to_string(),
            line2: tle.raw.line2.trim().to_string(),
            epoch: tle.line1.epoch.to_epoch(),
            body,
            semi_major_axis: sma,
            semi_minor_axis: smi,
            periapsis_radius: per,
            apoapsis_radius: apr,
            radius: r,
            eccentricity: ecc,
            period: t,
            time_to_periapsis: pet,
            time_to_apoapsis: apt,
            velocity: vel,
            inclination,
            ascending_node_longitude: lan,
            periapsis_longitude: lpe,
            periapsis_argument: agp,
            true_anomaly: tra,
            true_longitude: trl,
            mean_anomaly: mna,
            mean_longitude: mnl,
            eccentric_anomaly: eca,
            eccentric_anomaly_converged: kepler.converged,
        }
    }

    /// Periapsis height above the body's mean surface.
    pub fn periapsis_altitude(&self) -> Meter {
        self.periapsis_radius - self.body.radius
    }

    /// Apoapsis height above the body's mean surface.
    pub fn apoapsis_altitude(&self) -> Meter {
        self.apoapsis_radius - self.body.radius
    }

    /// Height above the body's mean surface at epoch.
    pub fn altitude(&self) -> Meter {
        self.radius - self.body.radius
    }
}
