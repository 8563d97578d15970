//! The per-tick movement step.

use sl_core::Vec2;

use crate::Movement;

/// Outcome of one [`Movement::advance`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// No target was set.
    Stationary,
    /// Moved toward the target without reaching it.
    Moved,
    /// Reached the target this step; the target is now cleared and the
    /// position equals it exactly.
    Arrived,
}

impl Movement {
    /// Advance by `dt_secs` toward the target.
    ///
    /// The epsilon test runs before moving: a target closer than
    /// `arrival_epsilon` is snapped to without moving, while a target at or
    /// beyond it is approached first and re-tested afterwards.
    pub fn advance(&mut self, dt_secs: f64) -> Step {
        let Some(target) = self.target else {
            return Step::Stationary;
        };

        let before = target - self.position;
        let distance = before.length();

        if distance < self.arrival_epsilon {
            self.arrive(target);
            return Step::Arrived;
        }

        let direction = before * (1.0 / distance);
        self.position = self.position + direction * (self.speed * dt_secs);

        let after = target - self.position;
        let overshot = after.x * before.x < 0.0 || after.y * before.y < 0.0;
        if overshot || after.length() < self.arrival_epsilon {
            self.arrive(target);
            return Step::Arrived;
        }

        Step::Moved
    }

    fn arrive(&mut self, target: Vec2) {
        tracing::trace!(x = target.x, y = target.y, "arrived");
        self.position = target;
        self.target = None;
    }
}
