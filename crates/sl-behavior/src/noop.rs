//! A no-op behavior model — agents never seek anything on their own.

use crate::{BehaviorModel, Intent, Perception};

/// A [`BehaviorModel`] that always returns `None`.
///
/// Useful for player-driven agents and for tests that only exercise needs
/// decay and commanded movement.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn replan(&self, _perception: &Perception<'_>) -> Option<Intent> {
        None
    }
}
