//! One deflection scenario: Earth, the target asteroid and the mission.
//!
//! The session is the single owner of all per-tick state. A tick always
//! updates Earth, then the asteroid, then the mission, so guidance reads
//! positions from the same frame.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::config::{ConfigError, SimulationConfig};
use crate::mission::{ArmOutcome, InterceptionEngine, MissionEvent, MissionState, MissionStatus};
use crate::motion::{EarthOrbit, OrbitBlender, OrbitWalker};
use crate::orbit::{DeflectionDelta, OrbitError, OrbitPath, OrbitPathCache, OrbitalElements};

/// Error building a session.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Orbit(#[from] OrbitError),
}

/// Resource holding the running scenario.
#[derive(Resource, Clone, Debug)]
pub struct DeflectionSession {
    earth: EarthOrbit,
    asteroid: OrbitWalker,
    blender: OrbitBlender,
    original: OrbitPathCache,
    deflected: OrbitPathCache,
    deflection: DeflectionDelta,
    engine: InterceptionEngine,
}

impl DeflectionSession {
    /// Build a session for `target`, sampling both the original and the
    /// post-deflection orbit up front.
    pub fn new(config: &SimulationConfig, target: &OrbitalElements) -> Result<Self, SessionError> {
        config.validate()?;

        let sampler = config.sampler();
        let deflected = target.deflected(&config.deflection)?;
        let original = OrbitPathCache::new(sampler, target, config.sample_count);
        let deflected = OrbitPathCache::new(sampler, &deflected, config.sample_count);

        let mut asteroid = OrbitWalker::new(config.asteroid_base_speed);
        asteroid.locate(original.path());

        Ok(Self {
            earth: EarthOrbit::new(config.earth_orbit_radius, config.earth_base_speed),
            asteroid,
            blender: OrbitBlender::new(config.blend_rate),
            original,
            deflected,
            deflection: config.deflection,
            engine: InterceptionEngine::new(config.mission.clone()),
        })
    }

    /// Switch to a new target.
    ///
    /// Paths are re-sampled only if the elements changed; in that case the
    /// scenario restarts. Returns whether the target changed.
    pub fn retarget(&mut self, target: &OrbitalElements) -> Result<bool, SessionError> {
        let deflected = target.deflected(&self.deflection)?;
        if !self.original.update(target) {
            return Ok(false);
        }
        self.deflected.update(&deflected);
        self.reset();
        Ok(true)
    }

    /// Advance everything by `dt` seconds.
    ///
    /// The speed multiplier scales orbital motion only; the projectile and
    /// the detonation delay run on unscaled time.
    pub fn tick(&mut self, dt: f64, speed_multiplier: f64) -> Vec<MissionEvent> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.earth.advance(dt, speed_multiplier);
        let earth = self.earth.position();

        self.asteroid.advance(dt, speed_multiplier);
        self.blender.advance(dt, self.engine.is_deflected());
        let target = self.blender.position(
            self.original.path(),
            self.deflected.path(),
            self.asteroid.progress(),
        );
        self.asteroid.set_position(target);

        self.engine.tick(dt, earth, target)
    }

    /// Arm the mission; after a success this resets the whole scenario.
    pub fn arm(&mut self) -> ArmOutcome {
        let outcome = self.engine.arm();
        if outcome == ArmOutcome::Reset {
            self.reset_motion();
        }
        outcome
    }

    /// Back to the initial scenario.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.reset_motion();
    }

    fn reset_motion(&mut self) {
        self.earth.reset();
        self.blender.reset();
        self.asteroid.reset(self.original.path());
    }

    pub fn earth_position(&self) -> DVec3 {
        self.earth.position()
    }

    pub fn asteroid_position(&self) -> DVec3 {
        self.asteroid.position()
    }

    pub fn asteroid_progress(&self) -> f64 {
        self.asteroid.progress()
    }

    /// Projectile position while one is in flight.
    pub fn projectile_position(&self) -> Option<DVec3> {
        self.engine
            .projectile()
            .filter(|p| p.has_launched)
            .map(|p| p.position)
    }

    /// Projectile heading while one is in flight.
    pub fn projectile_heading(&self) -> Option<DVec3> {
        self.engine
            .projectile()
            .filter(|p| p.has_launched)
            .map(|p| p.heading)
    }

    /// Asteroid-to-Earth distance in render units.
    pub fn earth_distance(&self) -> f64 {
        self.asteroid.position().distance(self.earth.position())
    }

    pub fn status(&self) -> MissionStatus {
        self.engine.status()
    }

    pub fn mission(&self) -> &MissionState {
        self.engine.state()
    }

    pub fn engine(&self) -> &InterceptionEngine {
        &self.engine
    }

    pub fn blend_factor(&self) -> f64 {
        self.blender.factor()
    }

    pub fn original_path(&self) -> &OrbitPath {
        self.original.path()
    }

    pub fn deflected_path(&self) -> &OrbitPath {
        self.deflected.path()
    }
}
