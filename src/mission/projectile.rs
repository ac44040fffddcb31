//! Guided projectile kinematics.

use bevy::math::DVec3;

/// State of the interceptor projectile.
///
/// Created (unlaunched, at Earth) when the mission launches; placed at its
/// spawn point on the first flight tick and steered straight at the target
/// on every tick after that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileState {
    pub position: DVec3,
    /// Unit vector the projectile is facing.
    pub heading: DVec3,
    /// Where the projectile appeared; range is measured from here.
    pub launch_point: DVec3,
    pub has_launched: bool,
    pub detonated: bool,
}

impl ProjectileState {
    /// A projectile waiting on the pad at `earth`.
    pub fn on_pad(earth: DVec3) -> Self {
        Self {
            position: earth,
            heading: DVec3::ZERO,
            launch_point: earth,
            has_launched: false,
            detonated: false,
        }
    }

    /// Appear `offset` units from Earth toward the target, facing it.
    pub fn spawn(&mut self, earth: DVec3, target: DVec3, offset: f64) {
        let direction = (target - earth).normalize_or_zero();
        self.position = earth + direction * offset;
        self.launch_point = self.position;
        self.heading = (target - self.position).normalize_or_zero();
        self.has_launched = true;
    }

    /// Re-aim at the target and move up to `step` units, never past it.
    pub fn pursue(&mut self, target: DVec3, step: f64) {
        let to_target = target - self.position;
        let distance = to_target.length();
        let direction = to_target.normalize_or_zero();
        if direction != DVec3::ZERO {
            self.heading = direction;
        }
        self.position += direction * step.min(distance);
    }

    pub fn distance_to(&self, target: DVec3) -> f64 {
        self.position.distance(target)
    }

    /// Straight-line distance from the launch point.
    pub fn range(&self) -> f64 {
        self.position.distance(self.launch_point)
    }
}
