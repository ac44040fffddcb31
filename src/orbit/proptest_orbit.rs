//! Property-based tests for orbit sampling using proptest.
//!
//! These tests verify geometric invariants across a wide range of elements.

use proptest::prelude::*;

use super::{sampler::sample, solve_eccentric_anomaly, OrbitalElements};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every valid orbit samples into a closed path.
    #[test]
    fn prop_sampled_orbit_is_closed(
        a in 0.1f64..30.0,
        e in 0.0f64..0.97,
        i in 0.0f64..180.0,
        node in 0.0f64..360.0,
        peri in 0.0f64..360.0,
        steps in 1usize..600,
    ) {
        let elements = OrbitalElements::new(a, e, i, node, peri).unwrap();
        let path = sample(&elements, steps);

        prop_assert_eq!(path.len(), steps + 1);
        let first = path.points()[0];
        let last = path.points()[path.len() - 1];
        prop_assert!(
            first.distance(last) < 1e-9 * a.max(1.0) * 5.0,
            "Path not closed: {:?} vs {:?}", first, last
        );
    }

    /// Sampled points stay inside the apoapsis sphere and produce no NaNs.
    #[test]
    fn prop_points_are_finite_and_bounded(
        a in 0.1f64..30.0,
        e in 0.0f64..0.9,
        i in 0.0f64..180.0,
        node in 0.0f64..360.0,
        peri in 0.0f64..360.0,
    ) {
        let elements = OrbitalElements::new(a, e, i, node, peri).unwrap();
        let path = sample(&elements, 120);
        let bound = 5.0 * elements.apoapsis() * (1.0 + 1e-9);

        for point in path.points() {
            prop_assert!(point.is_finite());
            prop_assert!(point.length() <= bound);
        }
    }

    /// M = 0 always solves to E = 0.
    #[test]
    fn prop_zero_mean_anomaly(e in 0.0f64..1.0) {
        prop_assert_eq!(solve_eccentric_anomaly(0.0, e), 0.0);
    }

    /// The solver is a pure function of its inputs.
    #[test]
    fn prop_solver_deterministic(m in -10.0f64..10.0, e in 0.0f64..0.99) {
        prop_assert_eq!(solve_eccentric_anomaly(m, e), solve_eccentric_anomaly(m, e));
    }
}
