//! NEO Deflect - planetary defence simulator
//!
//! Watch a near-Earth asteroid sweep past Earth, arm the interceptor and
//! see the deflected orbit take over.

use bevy::prelude::*;

use neo_deflect::camera::CameraPlugin;
use neo_deflect::catalog;
use neo_deflect::input::InputPlugin;
use neo_deflect::orbit::OrbitError;
use neo_deflect::render::RenderPlugin;
use neo_deflect::simulation::SimulationPlugin;

fn main() -> Result<(), OrbitError> {
    let target = catalog::training_target()?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "NEO Deflect".to_string(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Simulation first: render and input read its resources
        .add_plugins(SimulationPlugin::new(target))
        .add_plugins((CameraPlugin, InputPlugin, RenderPlugin))
        .run();

    Ok(())
}
