//! Camera for the deflection scene.
//!
//! A perspective camera orbiting the Sun: scroll to zoom, middle-drag to
//! swing around the vertical axis.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};

/// Closest allowed camera distance from the origin.
pub const MIN_DISTANCE: f32 = 5.0;

/// Furthest allowed camera distance from the origin.
pub const MAX_DISTANCE: f32 = 500.0;

/// Initial camera position.
pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 60.0, 120.0);

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Orbit speed in radians per pixel of drag.
pub const ORBIT_SPEED: f32 = 0.005;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_zoom, camera_orbit));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(DEFAULT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Scale a camera offset by a zoom factor, keeping it within range.
pub fn zoomed_offset(offset: Vec3, factor: f32) -> Vec3 {
    let distance = offset.length();
    if distance <= f32::EPSILON {
        return offset;
    }
    let target = (distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    offset * (target / distance)
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    // Logarithmic zoom
    let factor = 1.0 - mouse_scroll.delta.y * ZOOM_SPEED;
    transform.translation = zoomed_offset(transform.translation, factor);
}

/// Handle middle mouse button drag for orbiting around the Sun.
fn camera_orbit(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !mouse_buttons.pressed(MouseButton::Middle) || mouse_motion.delta.x == 0.0 {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let rotation = Quat::from_rotation_y(-mouse_motion.delta.x * ORBIT_SPEED);
    transform.rotate_around(Vec3::ZERO, rotation);
    transform.look_at(Vec3::ZERO, Vec3::Y);
}
