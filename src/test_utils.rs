//! Test utilities for orbit and mission tests.
//!
//! Provides fixtures for the standard scenario and assertions for common
//! geometric checks.

/// Fixtures for building test orbits and sessions.
pub mod fixtures {
    use crate::config::SimulationConfig;
    use crate::orbit::OrbitalElements;
    use crate::session::DeflectionSession;

    /// The training target: a=2.543 AU, e=0.6247, i=0.45°, Ω=125.37°, ω=277.86°.
    pub fn training_elements() -> OrbitalElements {
        OrbitalElements::new(2.543, 0.6247, 0.45, 125.37, 277.86).unwrap()
    }

    /// Session against the training target with default settings.
    pub fn training_session() -> DeflectionSession {
        DeflectionSession::new(&SimulationConfig::default(), &training_elements()).unwrap()
    }
}

/// Assertions for geometric invariants.
pub mod assertions {
    use bevy::math::DVec3;

    /// Assert two points coincide within `tolerance`.
    ///
    /// # Panics
    /// Panics if the points are further apart than `tolerance`.
    pub fn assert_points_close(a: DVec3, b: DVec3, tolerance: f64) {
        let distance = a.distance(b);
        assert!(
            distance <= tolerance,
            "Points differ by {distance:.3e} (tolerance {tolerance:.3e}): {a:?} vs {b:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::DVec3;

    #[test]
    fn test_training_session_builds() {
        let session = fixtures::training_session();
        assert_eq!(session.original_path().len(), 301);
    }

    #[test]
    fn test_points_close() {
        assertions::assert_points_close(DVec3::ZERO, DVec3::new(1e-10, 0.0, 0.0), 1e-9);
    }

    #[test]
    #[should_panic(expected = "Points differ")]
    fn test_points_not_close() {
        assertions::assert_points_close(DVec3::ZERO, DVec3::X, 1e-9);
    }
}
