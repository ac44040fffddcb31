//! Tunable simulation parameters.
//!
//! All values are in render units and seconds unless noted. Defaults
//! reproduce the classic scenario: Earth on a radius-5 circle, the asteroid
//! orbit drawn at 5 render units per AU with 300 samples.

use bevy::prelude::*;

use crate::orbit::kepler::KeplerSolver;
use crate::orbit::sampler::{DEFAULT_ORBIT_SCALE, DEFAULT_STEP_COUNT};
use crate::orbit::{DeflectionDelta, OrbitSampler};

/// Error raised by [`SimulationConfig::validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sample count must be at least 1")]
    ZeroSampleCount,

    #[error("invalid {name}: {value} (must be positive and finite)")]
    NotPositive { name: &'static str, value: f64 },

    #[error("invalid {name}: {value} (must be non-negative and finite)")]
    Negative { name: &'static str, value: f64 },

    #[error("detonation range {detonation} must be smaller than launch range {launch}")]
    DetonationOutsideLaunchRange { detonation: f64, launch: f64 },
}

/// Interception tunables.
#[derive(Clone, Debug, PartialEq)]
pub struct MissionConfig {
    /// Target-to-Earth distance below which an armed mission launches.
    pub launch_range: f64,
    /// Projectile-to-target distance that triggers detonation.
    pub detonation_range: f64,
    /// Projectile speed, render units per second.
    pub projectile_speed: f64,
    /// Distance from Earth's centre, toward the target, where the projectile appears.
    pub spawn_offset: f64,
    /// Distance from the launch point after which a projectile counts as lost.
    pub max_range: f64,
    /// Seconds between detonation and the orbit change taking effect.
    pub detonation_delay: f64,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            launch_range: 8.0,
            detonation_range: 0.6,
            projectile_speed: 12.0,
            spawn_offset: 0.5,
            max_range: 60.0,
            detonation_delay: 1.5,
        }
    }
}

/// Simulation settings resource.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Mean-anomaly steps per sampled orbit.
    pub sample_count: usize,
    /// Render units per AU for sampled orbits.
    pub orbit_scale: f64,
    /// Kepler solver used by the sampler.
    pub kepler: KeplerSolver,
    /// Earth's circular orbit radius.
    pub earth_orbit_radius: f64,
    /// Earth angular speed, radians per second.
    pub earth_base_speed: f64,
    /// Asteroid speed, revolutions per second.
    pub asteroid_base_speed: f64,
    /// Blend factor gained per second once deflected.
    pub blend_rate: f64,
    /// Orbit change applied by a successful deflection.
    pub deflection: DeflectionDelta,
    pub mission: MissionConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_STEP_COUNT,
            orbit_scale: DEFAULT_ORBIT_SCALE,
            kepler: KeplerSolver::default(),
            earth_orbit_radius: 5.0,
            earth_base_speed: 0.5,
            asteroid_base_speed: 0.05,
            blend_rate: 0.5,
            deflection: DeflectionDelta::default(),
            mission: MissionConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Sampler built from the configured solver and scale.
    pub fn sampler(&self) -> OrbitSampler {
        OrbitSampler {
            solver: self.kepler,
            scale: self.orbit_scale,
        }
    }

    /// Check every tunable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::ZeroSampleCount);
        }

        let mission = &self.mission;
        for (name, value) in [
            ("orbit_scale", self.orbit_scale),
            ("earth_orbit_radius", self.earth_orbit_radius),
            ("blend_rate", self.blend_rate),
            ("launch_range", mission.launch_range),
            ("detonation_range", mission.detonation_range),
            ("projectile_speed", mission.projectile_speed),
            ("max_range", mission.max_range),
            ("semi_major_axis_factor", self.deflection.semi_major_axis_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        for (name, value) in [
            ("earth_base_speed", self.earth_base_speed),
            ("asteroid_base_speed", self.asteroid_base_speed),
            ("spawn_offset", mission.spawn_offset),
            ("detonation_delay", mission.detonation_delay),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if mission.detonation_range >= mission.launch_range {
            return Err(ConfigError::DetonationOutsideLaunchRange {
                detonation: mission.detonation_range,
                launch: mission.launch_range,
            });
        }

        Ok(())
    }
}
