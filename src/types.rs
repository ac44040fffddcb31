//! Core types and constants shared by the orbit and mission modules.

use bevy::math::DVec3;
use bevy::prelude::*;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Upper bound of the user-controlled speed multiplier.
pub const MAX_SPEED_MULTIPLIER: f64 = 5.0;

/// Kinematic state of a body moving along a path.
///
/// `progress` is the fraction of the path traversed, always in `[0, 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyState {
    /// Position in render units.
    pub position: DVec3,
    /// Fraction of the orbit traversed.
    pub progress: f64,
}

impl BodyState {
    /// Create a body at the start of its path.
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            progress: 0.0,
        }
    }
}

/// Wrap a fraction into `[0, 1)`.
///
/// `rem_euclid` can round up to exactly 1.0 for inputs just below an integer,
/// which would break the progress invariant.
pub fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    if wrapped >= 1.0 || !wrapped.is_finite() {
        0.0
    } else {
        wrapped
    }
}

/// User-controlled simulation speed.
#[derive(Resource, Clone, Debug)]
pub struct SimulationSpeed {
    multiplier: f64,
    /// Whether simulation is paused
    pub paused: bool,
}

impl Default for SimulationSpeed {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            paused: false,
        }
    }
}

impl SimulationSpeed {
    /// Current multiplier, always within `[0, MAX_SPEED_MULTIPLIER]`.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Set the multiplier, clamping it to the supported range.
    pub fn set_multiplier(&mut self, multiplier: f64) {
        self.multiplier = if multiplier.is_finite() {
            multiplier.clamp(0.0, MAX_SPEED_MULTIPLIER)
        } else {
            1.0
        };
    }

    /// Effective multiplier for this frame (0 while paused).
    pub fn effective(&self) -> f64 {
        if self.paused { 0.0 } else { self.multiplier }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_unit() {
        assert_eq!(wrap_unit(0.25), 0.25);
        assert_eq!(wrap_unit(1.0), 0.0);
        assert_eq!(wrap_unit(2.5), 0.5);
        assert_eq!(wrap_unit(-0.25), 0.75);
        assert_eq!(wrap_unit(-1e-18), 0.0);
        assert_eq!(wrap_unit(f64::NAN), 0.0);
    }

    #[test]
    fn test_speed_multiplier_clamped() {
        let mut speed = SimulationSpeed::default();
        assert_eq!(speed.multiplier(), 1.0);

        speed.set_multiplier(12.0);
        assert_eq!(speed.multiplier(), MAX_SPEED_MULTIPLIER);

        speed.set_multiplier(-3.0);
        assert_eq!(speed.multiplier(), 0.0);

        speed.set_multiplier(f64::INFINITY);
        assert_eq!(speed.multiplier(), 1.0);
    }

    #[test]
    fn test_paused_speed_is_zero() {
        let mut speed = SimulationSpeed::default();
        speed.set_multiplier(3.0);
        speed.paused = true;
        assert_eq!(speed.effective(), 0.0);
        speed.paused = false;
        assert_eq!(speed.effective(), 3.0);
    }

    #[test]
    fn test_body_state_starts_at_zero_progress() {
        let state = BodyState::at(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(state.progress, 0.0);
        assert_eq!(state.position, DVec3::new(1.0, 2.0, 3.0));
    }
}
