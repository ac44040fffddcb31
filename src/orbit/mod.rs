//! Keplerian orbit description and sampling.
//!
//! An orbit is described by [`OrbitalElements`] (validated on construction)
//! and turned into a closed [`OrbitPath`] of render-space points by
//! [`OrbitSampler`]. The numeric kernel is [`KeplerSolver`].

pub mod kepler;
pub mod sampler;

#[cfg(test)]
mod proptest_orbit;

pub use kepler::{solve_eccentric_anomaly, KeplerSolver};
pub use sampler::{perifocal_to_reference, to_render_frame, OrbitPath, OrbitPathCache, OrbitSampler};

use crate::types::DEG_TO_RAD;

/// Error raised when orbit parameters cannot describe an elliptical orbit.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error("invalid orbital elements: {field} = {value} ({reason})")]
    InvalidOrbitalElements {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Keplerian elements of an elliptical orbit.
///
/// Distances are in AU, angles in degrees. The mean anomaly at epoch is not
/// part of the shape and lives on the catalog record instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination_deg: f64,
    ascending_node_deg: f64,
    arg_periapsis_deg: f64,
}

impl OrbitalElements {
    /// Validate and build a set of elements.
    ///
    /// # Errors
    /// Fails when the semi-major axis is not positive, the eccentricity is
    /// outside `[0, 1)`, or any value is not finite.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
        arg_periapsis_deg: f64,
    ) -> Result<Self, OrbitError> {
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(OrbitError::InvalidOrbitalElements {
                field: "semi_major_axis",
                value: semi_major_axis,
                reason: "must be positive and finite",
            });
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitError::InvalidOrbitalElements {
                field: "eccentricity",
                value: eccentricity,
                reason: "must be in [0, 1) for an elliptical orbit",
            });
        }
        for (field, value) in [
            ("inclination", inclination_deg),
            ("ascending_node", ascending_node_deg),
            ("arg_periapsis", arg_periapsis_deg),
        ] {
            if !value.is_finite() {
                return Err(OrbitError::InvalidOrbitalElements {
                    field,
                    value,
                    reason: "must be finite",
                });
            }
        }

        Ok(Self {
            semi_major_axis,
            eccentricity,
            inclination_deg,
            ascending_node_deg,
            arg_periapsis_deg,
        })
    }

    /// Semi-major axis in AU
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Eccentricity, in `[0, 1)`
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Inclination in degrees
    pub fn inclination_deg(&self) -> f64 {
        self.inclination_deg
    }

    /// Longitude of the ascending node in degrees
    pub fn ascending_node_deg(&self) -> f64 {
        self.ascending_node_deg
    }

    /// Argument of periapsis in degrees
    pub fn arg_periapsis_deg(&self) -> f64 {
        self.arg_periapsis_deg
    }

    pub fn inclination(&self) -> f64 {
        self.inclination_deg * DEG_TO_RAD
    }

    pub fn ascending_node(&self) -> f64 {
        self.ascending_node_deg * DEG_TO_RAD
    }

    pub fn arg_periapsis(&self) -> f64 {
        self.arg_periapsis_deg * DEG_TO_RAD
    }

    /// Periapsis distance a(1 - e).
    pub fn periapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Apoapsis distance a(1 + e).
    pub fn apoapsis(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Elements after a deflection, re-validated.
    pub fn deflected(&self, delta: &DeflectionDelta) -> Result<Self, OrbitError> {
        Self::new(
            self.semi_major_axis * delta.semi_major_axis_factor,
            self.eccentricity + delta.eccentricity_delta,
            self.inclination_deg + delta.inclination_delta_deg,
            self.ascending_node_deg,
            self.arg_periapsis_deg,
        )
    }
}

/// Change applied to an orbit by a successful deflection.
///
/// This is a visual model: the post-deflection orbit is a fixed edit of the
/// original elements, not the result of an impulse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeflectionDelta {
    /// Multiplier on the semi-major axis.
    pub semi_major_axis_factor: f64,
    /// Added to the eccentricity.
    pub eccentricity_delta: f64,
    /// Added to the inclination, degrees.
    pub inclination_delta_deg: f64,
}

impl Default for DeflectionDelta {
    fn default() -> Self {
        // Raises periapsis well clear of Earth's orbit for the training target.
        Self {
            semi_major_axis_factor: 1.12,
            eccentricity_delta: -0.08,
            inclination_delta_deg: 4.0,
        }
    }
}
