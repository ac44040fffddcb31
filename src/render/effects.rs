//! Detonation effects.
//!
//! Each explosion is an entity carrying its own animation parameters
//! (elapsed time, duration, colours). They are advanced once per frame and
//! drawn as expanding gizmo rings in the orbital plane.

use bevy::prelude::*;

use crate::mission::MissionEvent;

/// Default lifetime of an explosion, seconds.
pub const EXPLOSION_DURATION: f32 = 2.0;

/// Radius reached by the shock ring at the end of the animation.
pub const EXPLOSION_MAX_RADIUS: f32 = 3.0;

/// Component for an animated detonation.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct ExplosionEffect {
    /// Render-space centre.
    pub center: Vec3,
    /// Seconds since the detonation.
    pub elapsed: f32,
    pub duration: f32,
    pub core_color: Color,
    pub shock_color: Color,
}

impl ExplosionEffect {
    pub fn new(center: Vec3) -> Self {
        Self {
            center,
            elapsed: 0.0,
            duration: EXPLOSION_DURATION,
            core_color: Color::srgb(1.0, 0.9, 0.3),
            shock_color: Color::srgb(1.0, 0.5, 0.1),
        }
    }

    /// Animation progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Step the animation; returns true once finished.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        self.progress() >= 1.0
    }

    pub fn shock_radius(&self) -> f32 {
        0.1 + self.progress() * EXPLOSION_MAX_RADIUS
    }

    /// Core shrinks back after the first third.
    pub fn core_radius(&self) -> f32 {
        let p = self.progress();
        let swell = (p * 3.0).min(1.0);
        let fade = ((1.0 - p) * 1.5).min(1.0);
        0.6 * swell * fade
    }
}

/// Spawn an explosion for every detonation.
pub fn spawn_explosions(mut commands: Commands, mut events: MessageReader<MissionEvent>) {
    for event in events.read() {
        if let MissionEvent::Detonated { position } = event {
            commands.spawn(ExplosionEffect::new(position.as_vec3()));
        }
    }
}

/// Advance every explosion by the frame delta and despawn finished ones.
pub fn advance_explosions(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut ExplosionEffect)>,
) {
    let dt = time.delta_secs();
    for (entity, mut effect) in effects.iter_mut() {
        if effect.advance(dt) {
            commands.entity(entity).despawn();
        }
    }
}

pub fn draw_explosions(mut gizmos: Gizmos, effects: Query<&ExplosionEffect>) {
    for effect in effects.iter() {
        let progress = effect.progress();

        let shock_alpha = (1.0 - progress).powf(0.5);
        draw_ring(
            &mut gizmos,
            effect.center,
            effect.shock_radius(),
            effect.shock_color.with_alpha(shock_alpha),
            32,
        );

        let core_radius = effect.core_radius();
        if core_radius > 0.0 {
            draw_ring(
                &mut gizmos,
                effect.center,
                core_radius,
                effect.core_color.with_alpha(1.0 - progress),
                16,
            );
        }

        // Brief white flash
        if progress < 0.2 {
            let flash = Color::srgba(1.0, 1.0, 1.0, 1.0 - progress * 5.0);
            draw_ring(&mut gizmos, effect.center, 0.15, flash, 8);
        }
    }
}

/// Draw a horizontal circle using line segments.
fn draw_ring(gizmos: &mut Gizmos, center: Vec3, radius: f32, color: Color, segments: usize) {
    let angle_step = std::f32::consts::TAU / segments as f32;

    for i in 0..segments {
        let angle1 = i as f32 * angle_step;
        let angle2 = (i + 1) as f32 * angle_step;

        let p1 = center + Vec3::new(angle1.cos() * radius, 0.0, angle1.sin() * radius);
        let p2 = center + Vec3::new(angle2.cos() * radius, 0.0, angle2.sin() * radius);

        gizmos.line(p1, p2, color);
    }
}
