//! Orbit path rendering using Bevy Gizmos.
//!
//! The asteroid's original orbit is always drawn. The deflected orbit fades
//! in with the blend factor, so the two lines cross-fade as the asteroid
//! moves onto its new path.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::config::SimulationConfig;
use crate::session::DeflectionSession;

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Alpha value for orbit path color.
    pub alpha: f32,
    /// Segments used for Earth's circular orbit.
    pub earth_segments: u32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            alpha: 0.6,
            earth_segments: 128,
        }
    }
}

/// Colours for the original and deflected orbit at a given blend factor.
pub fn orbit_colors(alpha: f32, blend: f32) -> (Color, Color) {
    let blend = blend.clamp(0.0, 1.0);
    (
        Color::srgba(0.9, 0.3, 0.2, alpha * (1.0 - 0.7 * blend)),
        Color::srgba(0.3, 0.9, 0.4, alpha * blend),
    )
}

/// Points of a circle of `radius` in the orbital (XZ) plane, closed.
pub fn circle_points(radius: f32, segments: u32) -> impl Iterator<Item = Vec3> {
    let segments = segments.max(3);
    (0..=segments).map(move |i| {
        let angle = i as f32 / segments as f32 * TAU;
        Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
    })
}

/// Draw the asteroid's orbits and Earth's orbit.
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    config: Res<SimulationConfig>,
    session: Option<Res<DeflectionSession>>,
) {
    if !settings.visible {
        return;
    }

    gizmos.linestrip(
        circle_points(config.earth_orbit_radius as f32, settings.earth_segments),
        Color::srgba(0.2, 0.5, 0.8, settings.alpha * 0.5),
    );

    let Some(session) = session else {
        return;
    };

    let blend = session.blend_factor() as f32;
    let (original, deflected) = orbit_colors(settings.alpha, blend);

    gizmos.linestrip(session.original_path().render_points(), original);
    if blend > 0.0 {
        gizmos.linestrip(session.deflected_path().render_points(), deflected);
    }
}

/// Line from the launch point to the projectile while it flies.
pub fn draw_projectile_trail(mut gizmos: Gizmos, session: Option<Res<DeflectionSession>>) {
    let Some(projectile) = session
        .as_ref()
        .and_then(|s| s.engine().projectile())
        .filter(|p| p.has_launched)
    else {
        return;
    };

    gizmos.line(
        projectile.launch_point.as_vec3(),
        projectile.position.as_vec3(),
        Color::srgba(1.0, 1.0, 1.0, 0.4),
    );
}
