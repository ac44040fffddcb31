use bevy::math::DVec3;

use crate::orbit::OrbitPath;
use crate::types::{wrap_unit, BodyState};

/// Walks a body along a sampled [`OrbitPath`].
///
/// Positions snap to the sample at `floor(progress * len)`; there is no
/// interpolation between neighbouring samples, so low sample counts show
/// visible stepping.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitWalker {
    state: BodyState,
    /// Revolutions per second at speed multiplier 1.
    base_speed: f64,
}

impl OrbitWalker {
    pub fn new(base_speed: f64) -> Self {
        Self {
            state: BodyState::default(),
            base_speed,
        }
    }

    pub fn state(&self) -> &BodyState {
        &self.state
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    pub fn position(&self) -> DVec3 {
        self.state.position
    }

    pub fn base_speed(&self) -> f64 {
        self.base_speed
    }

    /// Advance progress by `dt * base_speed * speed_multiplier`, wrapped to `[0, 1)`.
    pub fn advance(&mut self, dt: f64, speed_multiplier: f64) {
        self.state.progress = wrap_unit(self.state.progress + dt * self.base_speed * speed_multiplier);
    }

    /// Snap the body to the path sample for the current progress.
    pub fn locate(&mut self, path: &OrbitPath) -> DVec3 {
        self.state.position = path.nearest(self.state.progress);
        self.state.position
    }

    /// Override the stored position (used when another controller blends it).
    pub fn set_position(&mut self, position: DVec3) {
        self.state.position = position;
    }

    /// Back to the start of the path.
    pub fn reset(&mut self, path: &OrbitPath) {
        self.state.progress = 0.0;
        self.locate(path);
    }
}
