//! Bevy integration of the deflection session.
//!
//! Each frame runs three ordered sets:
//! 1. `Commands` - apply arm, reset and retarget requests
//! 2. `Advance` - tick the session (Earth, asteroid, then mission)
//! 3. `Publish` - refresh the readout and log status changes

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::catalog::NeoRecord;
use crate::config::SimulationConfig;
use crate::mission::{ArmOutcome, MissionEvent, MissionStatus};
use crate::session::DeflectionSession;
use crate::types::SimulationSpeed;

/// System sets for ordering simulation systems within a frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Operator commands
    Commands,
    /// Session tick
    Advance,
    /// Readouts and logging (runs after the tick)
    Publish,
}

/// Operator request for the session.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum SessionCommand {
    /// Arm the mission (resets after a success).
    Arm,
    /// Return to the initial scenario.
    Reset,
    /// Track a different object; restarts the scenario.
    Retarget(NeoRecord),
}

/// The object being tracked.
#[derive(Resource, Clone, Debug)]
pub struct TargetInfo(pub NeoRecord);

/// Per-frame outputs for display.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct MissionReadout {
    pub status: MissionStatus,
    pub deflected: bool,
    /// Asteroid-to-Earth distance, render units.
    pub earth_distance: f64,
    pub speed_multiplier: f64,
    pub blend_factor: f64,
    pub earth: DVec3,
    pub asteroid: DVec3,
    pub projectile: Option<DVec3>,
}

/// Plugin running a deflection session against one target.
pub struct SimulationPlugin {
    pub config: SimulationConfig,
    pub target: NeoRecord,
}

impl SimulationPlugin {
    pub fn new(target: NeoRecord) -> Self {
        Self {
            config: SimulationConfig::default(),
            target,
        }
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(TargetInfo(self.target.clone()))
            .init_resource::<SimulationSpeed>()
            .init_resource::<MissionReadout>()
            .add_message::<SessionCommand>()
            .add_message::<MissionEvent>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Commands,
                    SimulationSet::Advance,
                    SimulationSet::Publish,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    apply_session_commands.in_set(SimulationSet::Commands),
                    advance_session.in_set(SimulationSet::Advance),
                    (publish_readout, log_status_changes).in_set(SimulationSet::Publish),
                )
                    .run_if(resource_exists::<DeflectionSession>),
            );

        match DeflectionSession::new(&self.config, &self.target.elements) {
            Ok(session) => {
                info!(
                    "Tracking {} (a = {:.3} AU, e = {:.4})",
                    self.target.name,
                    self.target.elements.semi_major_axis(),
                    self.target.elements.eccentricity()
                );
                app.insert_resource(session);
            }
            Err(err) => {
                error!("Cannot start simulation for {}: {err}", self.target.name);
            }
        }
    }
}

/// Apply queued operator commands.
fn apply_session_commands(
    mut commands: MessageReader<SessionCommand>,
    mut session: ResMut<DeflectionSession>,
    mut target: ResMut<TargetInfo>,
    mut events: MessageWriter<MissionEvent>,
) {
    for command in commands.read() {
        match command {
            SessionCommand::Arm => match session.arm() {
                ArmOutcome::Armed => {
                    events.write(MissionEvent::Armed);
                }
                ArmOutcome::Reset => {
                    events.write(MissionEvent::Reset);
                }
                ArmOutcome::Ignored => {
                    debug!("Arm ignored while {}", session.status());
                }
            },
            SessionCommand::Reset => {
                session.reset();
                events.write(MissionEvent::Reset);
            }
            SessionCommand::Retarget(record) => match session.retarget(&record.elements) {
                Ok(changed) => {
                    info!("Now tracking {}", record.name);
                    target.0 = record.clone();
                    if changed {
                        events.write(MissionEvent::Reset);
                    }
                }
                Err(err) => warn!("Cannot track {}: {err}", record.name),
            },
        }
    }
}

/// Tick the session by the frame delta.
fn advance_session(
    time: Res<Time>,
    speed: Res<SimulationSpeed>,
    mut session: ResMut<DeflectionSession>,
    mut events: MessageWriter<MissionEvent>,
) {
    if speed.paused {
        return;
    }

    for event in session.tick(time.delta_secs_f64(), speed.multiplier()) {
        events.write(event);
    }
}

fn publish_readout(
    session: Res<DeflectionSession>,
    speed: Res<SimulationSpeed>,
    mut readout: ResMut<MissionReadout>,
) {
    *readout = MissionReadout {
        status: session.status(),
        deflected: session.mission().deflected,
        earth_distance: session.earth_distance(),
        speed_multiplier: speed.effective(),
        blend_factor: session.blend_factor(),
        earth: session.earth_position(),
        asteroid: session.asteroid_position(),
        projectile: session.projectile_position(),
    };
}

fn log_status_changes(session: Res<DeflectionSession>, mut last: Local<Option<MissionStatus>>) {
    let status = session.status();
    if *last != Some(status) {
        if let Some(previous) = *last {
            info!(
                "Mission {previous} -> {status} (target {:.2} from Earth)",
                session.earth_distance()
            );
        }
        *last = Some(status);
    }
}
