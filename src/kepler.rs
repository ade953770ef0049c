//! # Kepler's equation for elliptic orbits
//!
//! Solves `M = E − e·sin(E)` for the eccentric anomaly `E` given the mean anomaly `M`
//! and the eccentricity `e ∈ [0, 1)`.
//!
//! The iteration follows Murison's practical method (U.S. Naval Observatory, 2006):
//!
//! 1. a third-order closed form in `e` and `cos(M)` provides the starting value;
//! 2. each step applies a correction of quartic convergence order;
//! 3. the loop stops when two successive estimates differ by less than the
//!    tolerance, or after a fixed number of steps.
//!
//! Hitting the iteration cap is not an error: the last estimate is returned with
//! [`KeplerSolution::converged`] unset so that callers can still derive every
//! dependent quantity and annotate the result.
//!
//! All angles in this module are in **radians**.
use crate::constants::{Radian, DPI};

/// Outcome of the eccentric anomaly iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Best estimate of the eccentric anomaly (radians).
    pub eccentric_anomaly: Radian,
    /// Number of refinement steps performed.
    pub iterations: usize,
    /// Absolute change produced by the last refinement step.
    pub last_step: Radian,
    /// `false` when the iteration cap was reached before the tolerance was met.
    pub converged: bool,
}

/// Returns the principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Third-order starting value for the eccentric anomaly.
///
/// Arguments
/// -----------------
/// * `ecc` – Orbital eccentricity.
/// * `mean_anomaly` – Mean anomaly in radians.
pub fn kepler_start(ecc: f64, mean_anomaly: Radian) -> Radian {
    let ecc2 = ecc.powi(2);
    let ecc3 = ecc * ecc2;
    let cos_m = mean_anomaly.cos();

    mean_anomaly + (-0.5 * ecc3 + ecc + (ecc2 + 1.5 * cos_m * ecc3) * cos_m) * mean_anomaly.sin()
}

/// Quartic-order correction to subtract from the current estimate `x`.
fn correction_step(ecc: f64, mean_anomaly: Radian, x: Radian) -> Radian {
    let cos_x = x.cos();
    let sin_x = x.sin();
    let t2 = -1.0 + ecc * cos_x;
    let t4 = ecc * sin_x;
    let t5 = -x + t4 + mean_anomaly;
    let t6 = t5 / (0.5 * t5 * t4 / t2 + t2);

    t5 / ((0.5 * sin_x - cos_x * t6 / 6.0) * ecc * t6 + t2)
}

/// Solve Kepler's equation for the eccentric anomaly.
///
/// The mean anomaly is reduced to `[0, 2π)` before seeding the iteration.
///
/// Arguments
/// -----------------
/// * `ecc` – Orbital eccentricity, expected in `[0, 1)`.
/// * `mean_anomaly` – Mean anomaly in radians (any value).
/// * `tolerance` – Stop once `|Eₙ − Eₙ₋₁| < tolerance`.
/// * `max_iter` – Maximum number of refinement steps.
///
/// Return
/// ----------
/// * A [`KeplerSolution`]; `converged` is `false` when `max_iter` steps did not reach
///   the tolerance, in which case `eccentric_anomaly` holds the last estimate.
///
/// See also
/// ------------
/// * [`kepler_start`] – Starting value of the iteration.
pub fn solve_kepler_equation(
    ecc: f64,
    mean_anomaly: Radian,
    tolerance: Radian,
    max_iter: usize,
) -> KeplerSolution {
    let mean_anomaly = principal_angle(mean_anomaly);

    let mut previous = kepler_start(ecc, mean_anomaly);
    let mut eccentric_anomaly = previous;
    let mut step = f64::INFINITY;
    let mut iterations = 0;

    // `!(step < tolerance)` also keeps iterating on NaN, which then ends at the cap
    while !(step < tolerance) {
        if iterations >= max_iter {
            return KeplerSolution {
                eccentric_anomaly,
                iterations,
                last_step: step,
                converged: false,
            };
        }

        eccentric_anomaly = previous - correction_step(ecc, mean_anomaly, previous);
        step = (eccentric_anomaly - previous).abs();
        previous = eccentric_anomaly;
        iterations += 1;
    }

    KeplerSolution {
        eccentric_anomaly,
        iterations,
        last_step: step,
        converged: true,
    }
}
