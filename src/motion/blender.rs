use bevy::math::DVec3;

use crate::orbit::OrbitPath;

/// Blends a body's position from its original orbit into the deflected one.
///
/// The blend factor ramps from 0 to 1 while the deflection is active and
/// drops straight back to 0 when it is not.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitBlender {
    blend: f64,
    /// Blend factor gained per second.
    rate: f64,
}

impl OrbitBlender {
    pub fn new(rate: f64) -> Self {
        Self { blend: 0.0, rate }
    }

    /// Current blend factor in `[0, 1]`.
    pub fn factor(&self) -> f64 {
        self.blend
    }

    pub fn advance(&mut self, dt: f64, deflected: bool) {
        self.blend = if deflected {
            (self.blend + dt * self.rate).min(1.0)
        } else {
            0.0
        };
    }

    /// Interpolate between the two paths at the same sample index.
    pub fn position(&self, original: &OrbitPath, deflected: &OrbitPath, progress: f64) -> DVec3 {
        let from = original.nearest(progress);
        if self.blend <= 0.0 {
            return from;
        }
        let to = deflected.point(deflected.index_at(progress));
        from.lerp(to, self.blend)
    }

    pub fn reset(&mut self) {
        self.blend = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::sampler::sample;
    use crate::orbit::DeflectionDelta;
    use crate::test_utils::{assertions::assert_points_close, fixtures};

    fn paths() -> (OrbitPath, OrbitPath) {
        let elements = fixtures::training_elements();
        let deflected = elements.deflected(&DeflectionDelta::default()).unwrap();
        (sample(&elements, 300), sample(&deflected, 300))
    }

    #[test]
    fn test_ramps_to_one_and_holds() {
        let mut blender = OrbitBlender::new(0.5);
        blender.advance(1.0, true);
        assert_eq!(blender.factor(), 0.5);
        blender.advance(1.0, true);
        assert_eq!(blender.factor(), 1.0);
        blender.advance(10.0, true);
        assert_eq!(blender.factor(), 1.0);
    }

    #[test]
    fn test_inactive_resets() {
        let mut blender = OrbitBlender::new(0.5);
        blender.advance(1.0, true);
        blender.advance(0.1, false);
        assert_eq!(blender.factor(), 0.0);
    }

    #[test]
    fn test_endpoints_match_paths() {
        let (original, deflected) = paths();
        let mut blender = OrbitBlender::new(1.0);
        assert_eq!(blender.position(&original, &deflected, 0.3), original.nearest(0.3));

        blender.advance(1.0, true);
        let full = blender.position(&original, &deflected, 0.3);
        assert_points_close(full, deflected.nearest(0.3), 1e-12);
    }

    #[test]
    fn test_midpoint() {
        let (original, deflected) = paths();
        let mut blender = OrbitBlender::new(0.5);
        blender.advance(1.0, true);
        let mid = blender.position(&original, &deflected, 0.7);
        let expected = (original.nearest(0.7) + deflected.nearest(0.7)) * 0.5;
        assert_points_close(mid, expected, 1e-12);
    }
}
