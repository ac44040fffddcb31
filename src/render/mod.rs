//! Rendering systems for the deflection scene.
//!
//! Meshes for the Sun, Earth, asteroid and projectile, gizmo lines for the
//! orbits, animated detonation effects and the text readout.

pub mod bodies;
pub mod effects;
pub mod hud;
mod orbits;
mod sync;

use bevy::prelude::*;

use crate::simulation::SimulationSet;

use self::bodies::spawn_scene;
use self::effects::{advance_explosions, draw_explosions, spawn_explosions};
use self::hud::{spawn_hud, update_hud};
use self::orbits::{draw_orbit_paths, draw_projectile_trail};
use self::sync::sync_scene_bodies;

pub use self::bodies::SceneBody;
pub use self::effects::ExplosionEffect;
pub use self::orbits::OrbitPathSettings;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(Startup, (spawn_scene, spawn_hud))
            // Everything reads the session after it has ticked:
            // 1. sync_scene_bodies - move meshes to simulated positions
            // 2. spawn/advance explosions - effect lifetimes
            // 3. draw gizmos and the readout
            .add_systems(
                Update,
                (
                    sync_scene_bodies,
                    (spawn_explosions, advance_explosions).chain(),
                    (draw_orbit_paths, draw_projectile_trail, draw_explosions, update_hud),
                )
                    .chain()
                    .after(SimulationSet::Publish),
            );
    }
}
