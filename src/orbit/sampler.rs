//! Sampling of Keplerian orbits into render-space paths.

use bevy::math::DVec3;

use super::kepler::KeplerSolver;
use super::OrbitalElements;
use crate::types::DEG_TO_RAD;

/// Default number of mean-anomaly steps per orbit.
pub const DEFAULT_STEP_COUNT: usize = 300;

/// Default visualization scale: render units per AU.
pub const DEFAULT_ORBIT_SCALE: f64 = 5.0;

/// Rotate orbital-plane coordinates (P, Q) into the reference frame.
///
/// Classical perifocal transform: rotate by the argument of periapsis,
/// tilt by the inclination, then rotate by the ascending node. Z is the
/// reference-frame pole.
pub fn perifocal_to_reference(p: f64, q: f64, elements: &OrbitalElements) -> DVec3 {
    let (sin_w, cos_w) = elements.arg_periapsis().sin_cos();
    let (sin_om, cos_om) = elements.ascending_node().sin_cos();
    let (sin_i, cos_i) = elements.inclination().sin_cos();

    let x = p * (cos_w * cos_om - sin_w * sin_om * cos_i)
        - q * (sin_w * cos_om + cos_w * sin_om * cos_i);
    let y = p * (cos_w * sin_om + sin_w * cos_om * cos_i)
        - q * (sin_w * sin_om - cos_w * cos_om * cos_i);
    let z = p * (sin_w * sin_i) + q * (cos_w * sin_i);

    DVec3::new(x, y, z)
}

/// Scale a reference-frame point and swap axes so the pole becomes render Y (up).
pub fn to_render_frame(point: DVec3, scale: f64) -> DVec3 {
    DVec3::new(point.x * scale, point.z * scale, point.y * scale)
}

/// Closed sequence of render-space points along an orbit.
///
/// Point `k` corresponds to mean anomaly `360° * k / steps`, so a path
/// sampled with `steps` steps holds `steps + 1` points and its last point
/// coincides with the first. Paths are never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPath {
    elements: OrbitalElements,
    points: Vec<DVec3>,
}

impl OrbitPath {
    /// Elements this path was sampled from.
    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the sample nearest below `progress` (floor lookup).
    ///
    /// Out-of-range indices fall back to 0.
    pub fn index_at(&self, progress: f64) -> usize {
        let scaled = (progress * self.points.len() as f64).floor();
        if scaled.is_finite() && scaled >= 0.0 && (scaled as usize) < self.points.len() {
            scaled as usize
        } else {
            0
        }
    }

    /// Point at `index`, falling back to the first sample.
    pub fn point(&self, index: usize) -> DVec3 {
        self.points
            .get(index)
            .or_else(|| self.points.first())
            .copied()
            .unwrap_or(DVec3::ZERO)
    }

    /// Sample at `progress` without interpolation.
    pub fn nearest(&self, progress: f64) -> DVec3 {
        self.point(self.index_at(progress))
    }

    /// Points converted to `f32` for drawing.
    pub fn render_points(&self) -> impl Iterator<Item = bevy::math::Vec3> + '_ {
        self.points.iter().map(|p| p.as_vec3())
    }
}

/// Turns orbital elements into [`OrbitPath`]s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSampler {
    pub solver: KeplerSolver,
    /// Render units per AU.
    pub scale: f64,
}

impl Default for OrbitSampler {
    fn default() -> Self {
        Self {
            solver: KeplerSolver::default(),
            scale: DEFAULT_ORBIT_SCALE,
        }
    }
}

impl OrbitSampler {
    /// Reference-frame point (AU, before scaling) at the given mean anomaly.
    pub fn reference_point(&self, elements: &OrbitalElements, mean_anomaly: f64) -> DVec3 {
        let a = elements.semi_major_axis();
        let e = elements.eccentricity();

        let e_anomaly = self.solver.solve(mean_anomaly, e);
        let p = a * (e_anomaly.cos() - e);
        let q = a * (1.0 - e * e).sqrt() * e_anomaly.sin();

        perifocal_to_reference(p, q, elements)
    }

    /// Sample `step_count` equal mean-anomaly steps over a full revolution.
    ///
    /// A step count of 0 is treated as 1.
    pub fn sample(&self, elements: &OrbitalElements, step_count: usize) -> OrbitPath {
        let steps = step_count.max(1);
        let step_deg = 360.0 / steps as f64;

        let points = (0..=steps)
            .map(|k| {
                let mean_anomaly = (k as f64 * step_deg) * DEG_TO_RAD;
                to_render_frame(self.reference_point(elements, mean_anomaly), self.scale)
            })
            .collect();

        OrbitPath {
            elements: *elements,
            points,
        }
    }
}

/// Sample with the default solver and scale.
pub fn sample(elements: &OrbitalElements, step_count: usize) -> OrbitPath {
    OrbitSampler::default().sample(elements, step_count)
}

/// A sampled path that is re-sampled only when its elements change.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPathCache {
    sampler: OrbitSampler,
    step_count: usize,
    path: OrbitPath,
}

impl OrbitPathCache {
    pub fn new(sampler: OrbitSampler, elements: &OrbitalElements, step_count: usize) -> Self {
        Self {
            sampler,
            step_count,
            path: sampler.sample(elements, step_count),
        }
    }

    pub fn path(&self) -> &OrbitPath {
        &self.path
    }

    /// Re-sample for `elements` unless the cached path already matches.
    ///
    /// Returns true when a new path was sampled.
    pub fn update(&mut self, elements: &OrbitalElements) -> bool {
        if self.path.elements() == elements {
            return false;
        }
        self.path = self.sampler.sample(elements, self.step_count);
        true
    }
}
