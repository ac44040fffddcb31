//! Interception mission state machine.
//!
//! `Ready → Armed → Launched → Success → Ready`
//!
//! - Arming enables auto-launch; the mission launches on the first tick the
//!   target comes within launch range of Earth.
//! - The projectile spawns just off Earth toward the target, then pursues
//!   the target's current position every tick.
//! - Detonation happens inside the detonation range; the orbit change takes
//!   effect after a fixed delay so the explosion plays first.
//! - A projectile that flies past its maximum range is dropped without any
//!   change to the mission status.

mod projectile;

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::config::MissionConfig;

pub use projectile::ProjectileState;

/// Mission progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MissionStatus {
    /// Waiting for the operator.
    #[default]
    Ready,
    /// Auto-launch enabled, waiting for the target to come in range.
    Armed,
    /// Projectile in flight (or detonated, awaiting the orbit change).
    Launched,
    /// Target deflected.
    Success,
}

impl std::fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MissionStatus::Ready => "ready",
            MissionStatus::Armed => "armed",
            MissionStatus::Launched => "launched",
            MissionStatus::Success => "success",
        };
        f.write_str(label)
    }
}

/// Status plus the flags the rest of the simulation reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MissionState {
    pub status: MissionStatus,
    pub auto_launch_armed: bool,
    /// Set once the detonation delay has elapsed; drives the orbit blend.
    pub deflected: bool,
}

/// Result of [`InterceptionEngine::arm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArmOutcome {
    /// `Ready → Armed`.
    Armed,
    /// Arm pressed after a success: the mission was reset to `Ready`.
    Reset,
    /// Arm has no effect in the current status.
    Ignored,
}

/// Notable things that happened during a tick.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum MissionEvent {
    Armed,
    Launched {
        /// Target-to-Earth distance at launch.
        target_distance: f64,
    },
    ProjectileSpawned {
        position: DVec3,
    },
    /// The render layer starts the explosion effect from this.
    Detonated {
        position: DVec3,
    },
    Deflected,
    ProjectileLost {
        position: DVec3,
    },
    Reset,
}

/// Drives a single projectile-versus-target encounter.
#[derive(Clone, Debug)]
pub struct InterceptionEngine {
    config: MissionConfig,
    state: MissionState,
    projectile: Option<ProjectileState>,
    missile_launched: bool,
    /// Seconds left before a detonation turns into a deflection.
    deflection_countdown: Option<f64>,
}

impl InterceptionEngine {
    pub fn new(config: MissionConfig) -> Self {
        Self {
            config,
            state: MissionState::default(),
            projectile: None,
            missile_launched: false,
            deflection_countdown: None,
        }
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    pub fn state(&self) -> &MissionState {
        &self.state
    }

    pub fn status(&self) -> MissionStatus {
        self.state.status
    }

    pub fn is_deflected(&self) -> bool {
        self.state.deflected
    }

    /// Whether a projectile has been launched since the last reset.
    pub fn missile_launched(&self) -> bool {
        self.missile_launched
    }

    /// Active projectile, if one is in flight.
    pub fn projectile(&self) -> Option<&ProjectileState> {
        self.projectile.as_ref()
    }

    /// Whether a detonation is waiting out its sequencing delay.
    pub fn deflection_pending(&self) -> bool {
        self.deflection_countdown.is_some()
    }

    /// Arm the mission, or reset it if the last one succeeded.
    ///
    /// Arming twice is a no-op, as is arming while a projectile is out.
    pub fn arm(&mut self) -> ArmOutcome {
        match self.state.status {
            MissionStatus::Ready => {
                self.state.status = MissionStatus::Armed;
                self.state.auto_launch_armed = true;
                info!("Mission armed: auto-launch when target is within {:.2}", self.config.launch_range);
                ArmOutcome::Armed
            }
            MissionStatus::Success => {
                self.reset();
                ArmOutcome::Reset
            }
            MissionStatus::Armed | MissionStatus::Launched => ArmOutcome::Ignored,
        }
    }

    /// Return to `Ready`, dropping any projectile and pending deflection.
    pub fn reset(&mut self) {
        self.state = MissionState::default();
        self.projectile = None;
        self.missile_launched = false;
        self.deflection_countdown = None;
        info!("Mission reset");
    }

    /// Advance the mission by `dt` seconds.
    ///
    /// `earth` and `target` must already be this tick's positions.
    pub fn tick(&mut self, dt: f64, earth: DVec3, target: DVec3) -> Vec<MissionEvent> {
        let mut events = Vec::new();

        if let Some(remaining) = self.deflection_countdown.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.complete_deflection(&mut events);
            }
            return events;
        }

        match self.state.status {
            MissionStatus::Armed => self.check_launch(earth, target, &mut events),
            MissionStatus::Launched => self.fly(dt, earth, target, &mut events),
            MissionStatus::Ready | MissionStatus::Success => {}
        }

        events
    }

    fn check_launch(&mut self, earth: DVec3, target: DVec3, events: &mut Vec<MissionEvent>) {
        let distance = target.distance(earth);
        if !self.state.auto_launch_armed || distance >= self.config.launch_range {
            return;
        }

        self.state.status = MissionStatus::Launched;
        self.projectile = Some(ProjectileState::on_pad(earth));
        self.missile_launched = true;
        info!("Interceptor launched: target at {:.2} from Earth", distance);
        events.push(MissionEvent::Launched {
            target_distance: distance,
        });
    }

    fn fly(&mut self, dt: f64, earth: DVec3, target: DVec3, events: &mut Vec<MissionEvent>) {
        let Some(projectile) = self.projectile.as_mut() else {
            return;
        };

        if projectile.has_launched {
            projectile.pursue(target, self.config.projectile_speed * dt);
        } else {
            projectile.spawn(earth, target, self.config.spawn_offset);
            events.push(MissionEvent::ProjectileSpawned {
                position: projectile.position,
            });
        }

        let distance = projectile.distance_to(target);
        debug!("Interceptor {:.3} from target", distance);

        if distance <= self.config.detonation_range {
            projectile.detonated = true;
            let position = projectile.position;
            self.projectile = None;
            info!("Detonation at ({:.2}, {:.2}, {:.2})", position.x, position.y, position.z);
            events.push(MissionEvent::Detonated { position });

            self.deflection_countdown = Some(self.config.detonation_delay);
            if self.config.detonation_delay <= 0.0 {
                self.complete_deflection(events);
            }
        } else if projectile.range() > self.config.max_range {
            let position = projectile.position;
            self.projectile = None;
            warn!("Interceptor lost after {:.2} without reaching the target", self.config.max_range);
            events.push(MissionEvent::ProjectileLost { position });
        }
    }

    fn complete_deflection(&mut self, events: &mut Vec<MissionEvent>) {
        self.deflection_countdown = None;
        self.state.deflected = true;
        self.state.status = MissionStatus::Success;
        self.state.auto_launch_armed = false;
        info!("Target deflected");
        events.push(MissionEvent::Deflected);
    }
}

impl Default for InterceptionEngine {
    fn default() -> Self {
        Self::new(MissionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTH: DVec3 = DVec3::new(5.0, 0.0, 0.0);

    fn near_target() -> DVec3 {
        EARTH + DVec3::new(0.0, 0.0, 4.0)
    }

    fn far_target() -> DVec3 {
        EARTH + DVec3::new(0.0, 0.0, 40.0)
    }

    /// Engine armed and launched against `near_target`.
    fn launched_engine(config: MissionConfig) -> InterceptionEngine {
        let mut engine = InterceptionEngine::new(config);
        engine.arm();
        let events = engine.tick(0.1, EARTH, near_target());
        assert!(matches!(events.as_slice(), [MissionEvent::Launched { .. }]));
        engine
    }

    #[test]
    fn test_arm_from_ready() {
        let mut engine = InterceptionEngine::default();
        assert_eq!(engine.status(), MissionStatus::Ready);
        assert_eq!(engine.arm(), ArmOutcome::Armed);
        assert_eq!(engine.status(), MissionStatus::Armed);
        assert!(engine.state().auto_launch_armed);
    }

    #[test]
    fn test_arm_twice_is_noop() {
        let mut engine = InterceptionEngine::default();
        engine.arm();
        let before = *engine.state();
        assert_eq!(engine.arm(), ArmOutcome::Ignored);
        assert_eq!(*engine.state(), before);
    }

    #[test]
    fn test_no_launch_out_of_range() {
        let mut engine = InterceptionEngine::default();
        engine.arm();
        for _ in 0..10 {
            assert!(engine.tick(0.1, EARTH, far_target()).is_empty());
        }
        assert_eq!(engine.status(), MissionStatus::Armed);
        assert!(engine.projectile().is_none());
    }

    #[test]
    fn test_no_launch_when_ready() {
        let mut engine = InterceptionEngine::default();
        assert!(engine.tick(0.1, EARTH, near_target()).is_empty());
        assert_eq!(engine.status(), MissionStatus::Ready);
    }

    #[test]
    fn test_launch_in_range() {
        let engine = launched_engine(MissionConfig::default());
        assert_eq!(engine.status(), MissionStatus::Launched);
        assert!(engine.missile_launched());
        let projectile = engine.projectile().unwrap();
        assert!(!projectile.has_launched);
        assert_eq!(projectile.position, EARTH);
    }

    #[test]
    fn test_first_flight_tick_spawns_offset_from_earth() {
        let mut engine = launched_engine(MissionConfig::default());
        let events = engine.tick(0.1, EARTH, near_target());

        let spawn = EARTH + DVec3::Z * 0.5;
        assert_eq!(events, vec![MissionEvent::ProjectileSpawned { position: spawn }]);
        let projectile = engine.projectile().unwrap();
        assert!(projectile.has_launched);
        assert_eq!(projectile.position, spawn);
        assert_eq!(projectile.heading, DVec3::Z);
    }

    #[test]
    fn test_detonation_waits_for_delay() {
        let mut engine = launched_engine(MissionConfig::default());

        let mut detonated = false;
        for _ in 0..100 {
            let events = engine.tick(0.5, EARTH, near_target());
            if events.iter().any(|e| matches!(e, MissionEvent::Detonated { .. })) {
                detonated = true;
                break;
            }
        }
        assert!(detonated, "Projectile should reach a stationary target");
        assert!(engine.projectile().is_none());
        assert!(engine.deflection_pending());
        assert!(!engine.is_deflected(), "Deflection must wait for the delay");
        assert_eq!(engine.status(), MissionStatus::Launched);

        // 1.5 s delay at 0.5 s per tick
        assert!(engine.tick(0.5, EARTH, near_target()).is_empty());
        assert!(engine.tick(0.5, EARTH, near_target()).is_empty());
        assert_eq!(engine.tick(0.5, EARTH, near_target()), vec![MissionEvent::Deflected]);

        assert!(engine.is_deflected());
        assert_eq!(engine.status(), MissionStatus::Success);
        assert!(!engine.state().auto_launch_armed);
    }

    #[test]
    fn test_zero_delay_deflects_immediately() {
        let config = MissionConfig {
            detonation_delay: 0.0,
            ..MissionConfig::default()
        };
        let mut engine = launched_engine(config);
        let mut events = Vec::new();
        for _ in 0..100 {
            events = engine.tick(0.5, EARTH, near_target());
            if !events.is_empty() && engine.is_deflected() {
                break;
            }
        }
        assert!(events.contains(&MissionEvent::Deflected));
        assert_eq!(engine.status(), MissionStatus::Success);
    }

    #[test]
    fn test_projectile_lost_beyond_max_range() {
        let config = MissionConfig {
            max_range: 2.0,
            projectile_speed: 1.0,
            ..MissionConfig::default()
        };
        let mut engine = launched_engine(config);
        engine.tick(0.1, EARTH, near_target()); // spawn

        // Target keeps running away faster than the projectile
        let mut lost = false;
        for step in 1..100 {
            let target = near_target() + DVec3::Z * (step as f64);
            let events = engine.tick(1.0, EARTH, target);
            if events.iter().any(|e| matches!(e, MissionEvent::ProjectileLost { .. })) {
                lost = true;
                break;
            }
        }
        assert!(lost);
        assert!(engine.projectile().is_none());
        // Miss leaves the status untouched
        assert_eq!(engine.status(), MissionStatus::Launched);
        assert!(!engine.is_deflected());
        assert_eq!(engine.arm(), ArmOutcome::Ignored);
    }

    #[test]
    fn test_arm_after_success_resets() {
        let config = MissionConfig {
            detonation_delay: 0.0,
            ..MissionConfig::default()
        };
        let mut engine = launched_engine(config);
        while engine.status() != MissionStatus::Success {
            engine.tick(0.5, EARTH, near_target());
        }

        assert_eq!(engine.arm(), ArmOutcome::Reset);
        assert_eq!(engine.status(), MissionStatus::Ready);
        assert!(!engine.is_deflected());
        assert!(!engine.missile_launched());
        assert!(engine.projectile().is_none());
    }

    #[test]
    fn test_reset_cancels_pending_deflection() {
        let mut engine = launched_engine(MissionConfig::default());
        while !engine.deflection_pending() {
            engine.tick(0.5, EARTH, near_target());
        }
        engine.reset();
        for _ in 0..10 {
            assert!(engine.tick(0.5, EARTH, near_target()).is_empty());
        }
        assert_eq!(engine.status(), MissionStatus::Ready);
        assert!(!engine.is_deflected());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(MissionStatus::Ready.to_string(), "ready");
        assert_eq!(MissionStatus::Success.to_string(), "success");
    }
}
