//! Kepler equation solver using fixed-point iteration.

/// Iteration count of the classic visualization solver.
pub const DEFAULT_ITERATIONS: u32 = 8;

/// Fixed-point solver for Kepler's equation M = E - e*sin(E).
///
/// With no tolerance the solver always runs `max_iterations` steps of
/// E <- M + e*sin(E), starting from E = M. Accuracy is fine for the
/// eccentricities drawn here but degrades for near-parabolic orbits
/// (e > ~0.97), where the iteration converges slowly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolver {
    /// Upper bound on iterations.
    pub max_iterations: u32,
    /// Exit early once |ΔE| drops below this. `None` disables the check.
    pub tolerance: Option<f64>,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_ITERATIONS,
            tolerance: None,
        }
    }
}

impl KeplerSolver {
    /// Solver that stops at convergence, capped at `max_iterations`.
    pub fn converging(max_iterations: u32, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance: Some(tolerance),
        }
    }

    /// Solve for the eccentric anomaly.
    ///
    /// # Arguments
    /// * `mean_anomaly` - Mean anomaly M in radians
    /// * `eccentricity` - Orbital eccentricity in `[0, 1)`
    ///
    /// # Returns
    /// Eccentric anomaly E in radians
    pub fn solve(&self, mean_anomaly: f64, eccentricity: f64) -> f64 {
        let mut e_anomaly = mean_anomaly;

        for _ in 0..self.max_iterations {
            let next = mean_anomaly + eccentricity * e_anomaly.sin();
            let delta = (next - e_anomaly).abs();
            e_anomaly = next;

            if self.tolerance.is_some_and(|tol| delta < tol) {
                break;
            }
        }

        e_anomaly
    }
}

/// Solve Kepler's equation with the default eight-iteration solver.
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    KeplerSolver::default().solve(mean_anomaly, eccentricity)
}
