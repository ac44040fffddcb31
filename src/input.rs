//! Keyboard controls.
//!
//! - `A`: arm (after a success, starts over)
//! - `R`: reset the scenario
//! - `Space`: pause / resume
//! - `[` / `]`: halve / double the speed multiplier
//! - `1` / `2` / `3`: pick nuclear, kinetic or tractor and log its assessment
//! - `T`: cycle through the preset targets

use bevy::prelude::*;

use crate::catalog;
use crate::countermeasure::{assess, Countermeasure, Verdict};
use crate::simulation::{SessionCommand, TargetInfo};
use crate::types::SimulationSpeed;

/// Countermeasure chosen by the operator.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectedCountermeasure(pub Countermeasure);

impl Default for SelectedCountermeasure {
    fn default() -> Self {
        Self(Countermeasure::NuclearStandoff)
    }
}

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedCountermeasure>()
            .add_systems(Update, (keyboard_shortcuts, choose_countermeasure, cycle_target));
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut speed: ResMut<SimulationSpeed>,
    mut commands: MessageWriter<SessionCommand>,
) {
    if keys.just_pressed(KeyCode::KeyA) {
        commands.write(SessionCommand::Arm);
    }

    if keys.just_pressed(KeyCode::KeyR) {
        commands.write(SessionCommand::Reset);
    }

    if keys.just_pressed(KeyCode::Space) {
        speed.paused = !speed.paused;
        info!("Simulation {}", if speed.paused { "paused" } else { "running" });
    }

    if keys.just_pressed(KeyCode::BracketLeft) {
        let halved = speed.multiplier() * 0.5;
        speed.set_multiplier(halved);
        info!("Speed: {}x", speed.multiplier());
    }

    if keys.just_pressed(KeyCode::BracketRight) {
        let doubled = (speed.multiplier() * 2.0).max(0.125);
        speed.set_multiplier(doubled);
        info!("Speed: {}x", speed.multiplier());
    }
}

/// Switch to the preset after the one currently tracked.
fn cycle_target(
    keys: Res<ButtonInput<KeyCode>>,
    target: Res<TargetInfo>,
    mut commands: MessageWriter<SessionCommand>,
) {
    if !keys.just_pressed(KeyCode::KeyT) {
        return;
    }

    let presets = match catalog::presets() {
        Ok(presets) => presets,
        Err(err) => {
            warn!("Preset targets unavailable: {err}");
            return;
        }
    };
    let next = presets
        .iter()
        .position(|record| record.name == target.0.name)
        .map_or(0, |index| (index + 1) % presets.len());

    if let Some(record) = presets.into_iter().nth(next) {
        commands.write(SessionCommand::Retarget(record));
    }
}

/// Select a countermeasure and report how it fares against the target.
fn choose_countermeasure(
    keys: Res<ButtonInput<KeyCode>>,
    target: Res<TargetInfo>,
    mut selected: ResMut<SelectedCountermeasure>,
) {
    let choice = if keys.just_pressed(KeyCode::Digit1) {
        Countermeasure::NuclearStandoff
    } else if keys.just_pressed(KeyCode::Digit2) {
        Countermeasure::KineticImpact
    } else if keys.just_pressed(KeyCode::Digit3) {
        Countermeasure::GravityTractor
    } else {
        return;
    };
    selected.0 = choice;

    let Some(diameter) = target.0.diameter_km else {
        info!("{}: diameter of {} unknown", choice.description(), target.0.name);
        return;
    };

    let assessment = assess(choice, diameter);
    let message = format!(
        "{} vs {} ({diameter} km, {:?}): {}",
        choice.description(),
        target.0.name,
        assessment.class,
        assessment.rationale
    );
    match assessment.verdict {
        Verdict::Approved => info!("APPROVED - {message}"),
        Verdict::HighRisk => warn!("HIGH RISK - {message}"),
        Verdict::CriticalFailure => warn!("CRITICAL FAILURE - {message}"),
    }
}
