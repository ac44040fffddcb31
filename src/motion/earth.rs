use std::f64::consts::TAU;

use bevy::math::DVec3;

/// Earth's simplified circular orbit in the render plane.
///
/// The position is recomputed from an accumulated angle each tick rather
/// than looked up on a sampled path.
#[derive(Clone, Debug, PartialEq)]
pub struct EarthOrbit {
    angle: f64,
    /// Orbit radius in render units.
    radius: f64,
    /// Radians per second at speed multiplier 1.
    base_speed: f64,
}

impl EarthOrbit {
    pub fn new(radius: f64, base_speed: f64) -> Self {
        Self {
            angle: 0.0,
            radius,
            base_speed,
        }
    }

    /// Accumulated angle in radians, kept in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn advance(&mut self, dt: f64, speed_multiplier: f64) {
        self.angle = (self.angle + dt * self.base_speed * speed_multiplier).rem_euclid(TAU);
    }

    /// `(cos θ · R, 0, sin θ · R)`
    pub fn position(&self) -> DVec3 {
        let (sin, cos) = self.angle.sin_cos();
        DVec3::new(cos * self.radius, 0.0, sin * self.radius)
    }

    pub fn reset(&mut self) {
        self.angle = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_initial_position_on_x_axis() {
        let earth = EarthOrbit::new(5.0, 0.5);
        assert_eq!(earth.position(), DVec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_quarter_turn() {
        let mut earth = EarthOrbit::new(5.0, 0.5);
        earth.advance(FRAC_PI_2, 2.0);
        let pos = earth.position();
        assert_relative_eq!(pos.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(pos.z, 5.0, epsilon = 1e-12);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn test_radius_constant() {
        let mut earth = EarthOrbit::new(5.0, 0.5);
        for _ in 0..500 {
            earth.advance(0.1, 4.0);
            assert_relative_eq!(earth.position().length(), 5.0, epsilon = 1e-12);
            assert!((0.0..TAU).contains(&earth.angle()));
        }
    }

    #[test]
    fn test_reset() {
        let mut earth = EarthOrbit::new(5.0, 0.5);
        earth.advance(1.0, 1.0);
        earth.reset();
        assert_eq!(earth.angle(), 0.0);
    }
}
