//! Scene body spawning.

use bevy::prelude::*;

/// Which simulated body an entity displays.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneBody {
    Sun,
    Earth,
    Asteroid,
    Projectile,
}

impl SceneBody {
    pub const ALL: [SceneBody; 4] = [
        SceneBody::Sun,
        SceneBody::Earth,
        SceneBody::Asteroid,
        SceneBody::Projectile,
    ];

    /// Visual radius in render units.
    pub fn radius(&self) -> f32 {
        match self {
            SceneBody::Sun => 0.8,
            SceneBody::Earth => 0.2,
            SceneBody::Asteroid => 0.6,
            SceneBody::Projectile => 0.05,
        }
    }

    fn color(&self) -> Color {
        match self {
            SceneBody::Sun => Color::srgb(1.0, 0.95, 0.4),
            SceneBody::Earth => Color::srgb(0.2, 0.5, 0.8),
            SceneBody::Asteroid => Color::srgb(0.55, 0.5, 0.45),
            SceneBody::Projectile => Color::srgb(0.9, 0.9, 0.95),
        }
    }

    fn mesh(&self) -> Mesh {
        match self {
            // Elongated along +Y; sync rotates +Y onto the heading
            SceneBody::Projectile => Capsule3d::new(self.radius(), 0.3).into(),
            _ => Sphere::new(self.radius()).into(),
        }
    }
}

/// Spawn the Sun, Earth, asteroid and (hidden) projectile.
pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for body in SceneBody::ALL {
        let color = body.color();
        let material = materials.add(StandardMaterial {
            base_color: color,
            // Sun is emissive (glows)
            emissive: if body == SceneBody::Sun {
                color.to_linear() * 2.0
            } else {
                LinearRgba::BLACK
            },
            ..default()
        });

        let visibility = if body == SceneBody::Projectile {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };

        let mut entity = commands.spawn((
            Mesh3d(meshes.add(body.mesh())),
            MeshMaterial3d(material),
            Transform::default(),
            visibility,
            body,
        ));

        if body == SceneBody::Sun {
            entity.with_child(PointLight {
                intensity: 10_000_000.0,
                range: 500.0,
                shadows_enabled: false,
                ..default()
            });
        }
    }

    info!("Spawned {} scene bodies", SceneBody::ALL.len());
}
