//! # Derivation parameters
//!
//! The element calculator depends on two physical inputs (the dominant body's mass
//! and mean radius) and on the controls of the eccentric anomaly solver. They are
//! grouped in [`DerivationParams`], built through the fluent
//! [`DerivationParamsBuilder`] which validates every value before handing the
//! parameters out.
//!
//! ```rust
//! use tlescope::params::{DerivationParams, DominantBody};
//!
//! // Earth defaults
//! let earth = DerivationParams::default();
//! assert_eq!(earth.body, DominantBody::EARTH);
//!
//! // The Moon as dominant body, with a looser solver tolerance
//! let moon = DerivationParams::builder()
//!     .mass(7.342e22)
//!     .radius(1.7374e6)
//!     .kepler_tolerance(1e-12)
//!     .build()
//!     .unwrap();
//! assert_eq!(moon.body.radius, 1.7374e6);
//! ```
use crate::constants::{Kilogram, Meter, Radian, EARTH_MASS, EARTH_MEAN_RADIUS};
use crate::tlescope_errors::TlescopeError;

/// Default stopping tolerance of the eccentric anomaly iteration (radians).
pub const KEPLER_TOLERANCE: Radian = 1.0e-14;

/// Default iteration cap of the eccentric anomaly solver.
pub const KEPLER_MAX_ITER: usize = 100;

/// The body the tracked object orbits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantBody {
    /// Mass in kilograms.
    pub mass: Kilogram,
    /// Mean radius in meters, used to turn radii into altitudes.
    pub radius: Meter,
}

impl DominantBody {
    pub const EARTH: DominantBody = DominantBody {
        mass: EARTH_MASS,
        radius: EARTH_MEAN_RADIUS,
    };
}

impl Default for DominantBody {
    fn default() -> Self {
        DominantBody::EARTH
    }
}

/// Configuration of the element calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivationParams {
    pub body: DominantBody,
    /// Stop once two successive eccentric anomaly estimates differ by less than this.
    pub kepler_tolerance: Radian,
    /// Give up (and flag non-convergence) after this many refinement steps.
    pub kepler_max_iter: usize,
}

impl DerivationParams {
    /// Create a new [`DerivationParamsBuilder`] initialized with the Earth defaults.
    ///
    /// See also
    /// ------------
    /// * [`DerivationParamsBuilder::build`] – Validation rules.
    pub fn builder() -> DerivationParamsBuilder {
        DerivationParamsBuilder::new()
    }

    /// Parameters for a custom dominant body with the default solver controls.
    pub fn with_body(body: DominantBody) -> Self {
        DerivationParams {
            body,
            ..Default::default()
        }
    }
}

impl Default for DerivationParams {
    fn default() -> Self {
        DerivationParams {
            body: DominantBody::EARTH,
            kepler_tolerance: KEPLER_TOLERANCE,
            kepler_max_iter: KEPLER_MAX_ITER,
        }
    }
}

/// Fluent builder for [`DerivationParams`].
#[derive(Debug, Clone)]
pub struct DerivationParamsBuilder {
    params: DerivationParams,
}

impl Default for DerivationParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DerivationParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: DerivationParams::default(),
        }
    }

    pub fn body(mut self, v: DominantBody) -> Self {
        self.params.body = v;
        self
    }
    pub fn mass(mut self, v: Kilogram) -> Self {
        self.params.body.mass = v;
        self
    }
    pub fn radius(mut self, v: Meter) -> Self {
        self.params.body.radius = v;
        self
    }
    pub fn kepler_tolerance(mut self, v: Radian) -> Self {
        self.params.kepler_tolerance = v;
        self
    }
    pub fn kepler_max_iter(mut self, v: usize) -> Self {
        self.params.kepler_max_iter = v;
        self
    }

    #[inline]
    fn gt0(x: f64) -> bool {
        x.is_finite() && x > 0.0
    }

    /// Validate and return the parameters.
    ///
    /// Return
    /// ----------
    /// * `Ok(DerivationParams)` when mass, radius and tolerance are finite and strictly
    ///   positive and the iteration cap is at least one.
    /// * `Err(TlescopeError::InvalidParameter)` naming the first offending value otherwise.
    pub fn build(self) -> Result<DerivationParams, TlescopeError> {
        let p = &self.params;

        if !Self::gt0(p.body.mass) {
            return Err(TlescopeError::InvalidParameter(
                "dominant body mass must be finite and > 0".into(),
            ));
        }
        if !Self::gt0(p.body.radius) {
            return Err(TlescopeError::InvalidParameter(
                "dominant body radius must be finite and > 0".into(),
            ));
        }
        if !Self::gt0(p.kepler_tolerance) {
            return Err(TlescopeError::InvalidParameter(
                "kepler_tolerance must be finite and > 0".into(),
            ));
        }
        if p.kepler_max_iter == 0 {
            return Err(TlescopeError::InvalidParameter(
                "kepler_max_iter must be >= 1".into(),
            ));
        }

        Ok(self.params)
    }
}
