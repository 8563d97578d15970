//! The `BehaviorModel` trait — the extension point for agent decisions.

use crate::{Intent, Perception};

/// Pluggable idle-time decision making.
///
/// Called once per tick for each agent that is idle after needs decay and
/// movement have been applied.  Returning `None` keeps the agent idle.
///
/// # Thread safety
///
/// The simulation may update agents in parallel, so implementations must be
/// `Send + Sync` and keep per-agent state out of the model.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysEat;
///
/// impl BehaviorModel for AlwaysEat {
///     fn replan(&self, p: &Perception<'_>) -> Option<Intent> {
///         let id = p.world.nearest(ObjectKind::Food, p.center)?;
///         let food = p.world.get(id)?;
///         Some(Intent { target: Target::Food(id), destination: p.destination_for(food.center()) })
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync {
    fn replan(&self, perception: &Perception<'_>) -> Option<Intent>;
}

impl<T: BehaviorModel + ?Sized> BehaviorModel for &T {
    fn replan(&self, perception: &Perception<'_>) -> Option<Intent> {
        (**self).replan(perception)
    }
}

impl<T: BehaviorModel + ?Sized> BehaviorModel for Box<T> {
    fn replan(&self, perception: &Perception<'_>) -> Option<Intent> {
        (**self).replan(perception)
    }
}
