//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use neo_deflect::config::SimulationConfig;
use neo_deflect::mission::{InterceptionEngine, MissionEvent, MissionStatus};
use neo_deflect::orbit::OrbitalElements;
use neo_deflect::session::DeflectionSession;

/// Frame step used by the scenario tests.
pub const FRAME_DT: f64 = 1.0 / 60.0;

pub fn training_elements() -> OrbitalElements {
    OrbitalElements::new(2.543, 0.6247, 0.45, 125.37, 277.86).unwrap()
}

pub fn training_session() -> DeflectionSession {
    DeflectionSession::new(&SimulationConfig::default(), &training_elements()).unwrap()
}

/// Tick `session` until `done` holds, collecting every event.
///
/// Returns the events with the tick index that produced them, or `None`
/// if `max_ticks` elapse first.
pub fn run_session_until(
    session: &mut DeflectionSession,
    max_ticks: usize,
    mut done: impl FnMut(&DeflectionSession) -> bool,
) -> Option<Vec<(usize, MissionEvent)>> {
    let mut events = Vec::new();
    for tick in 0..max_ticks {
        events.extend(session.tick(FRAME_DT, 1.0).into_iter().map(|e| (tick, e)));
        if done(session) {
            return Some(events);
        }
    }
    None
}

/// Tick an engine against a fixed Earth and target until it leaves `Launched`
/// or produces an event matching `stop`.
pub fn fly_engine(
    engine: &mut InterceptionEngine,
    dt: f64,
    earth: DVec3,
    target: DVec3,
    max_ticks: usize,
    stop: impl Fn(&MissionEvent) -> bool,
) -> Vec<(usize, MissionEvent)> {
    let mut events = Vec::new();
    for tick in 0..max_ticks {
        let produced = engine.tick(dt, earth, target);
        let finished = produced.iter().any(&stop);
        events.extend(produced.into_iter().map(|e| (tick, e)));
        if finished || engine.status() == MissionStatus::Success {
            break;
        }
    }
    events
}

/// Tick index of the first event matching `predicate`.
pub fn first_tick(events: &[(usize, MissionEvent)], predicate: impl Fn(&MissionEvent) -> bool) -> Option<usize> {
    events.iter().find(|(_, e)| predicate(e)).map(|(tick, _)| *tick)
}
