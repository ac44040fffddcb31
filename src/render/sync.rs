//! Position synchronization between the session and rendering.

use bevy::prelude::*;

use crate::render::bodies::SceneBody;
use crate::session::DeflectionSession;

/// Rotation taking the mesh's +Y axis onto `heading`.
pub fn heading_rotation(heading: Vec3) -> Quat {
    let heading = heading.normalize_or_zero();
    if heading == Vec3::ZERO {
        Quat::IDENTITY
    } else {
        Quat::from_rotation_arc(Vec3::Y, heading)
    }
}

/// Copy session positions onto scene body transforms.
pub fn sync_scene_bodies(
    session: Option<Res<DeflectionSession>>,
    mut query: Query<(&SceneBody, &mut Transform, &mut Visibility)>,
) {
    let Some(session) = session else {
        return;
    };

    for (body, mut transform, mut visibility) in query.iter_mut() {
        match body {
            SceneBody::Sun => {}
            SceneBody::Earth => {
                transform.translation = session.earth_position().as_vec3();
            }
            SceneBody::Asteroid => {
                transform.translation = session.asteroid_position().as_vec3();
            }
            SceneBody::Projectile => match session.projectile_position() {
                Some(position) => {
                    transform.translation = position.as_vec3();
                    if let Some(heading) = session.projectile_heading() {
                        transform.rotation = heading_rotation(heading.as_vec3());
                    }
                    *visibility = Visibility::Visible;
                }
                None => *visibility = Visibility::Hidden,
            },
        }
    }
}
