//! Read-only inputs passed to every behavior decision.

use sl_core::{Footprint, Needs, Vec2};
use sl_world::WorldView;

/// What an agent knows about itself and its surroundings when deciding.
///
/// Built on the stack by the agent for each decision; nothing in it can be
/// mutated through the model.
#[derive(Copy, Clone, Debug)]
pub struct Perception<'a> {
    /// Center of the agent's footprint.
    pub center: Vec2,

    /// The agent's own footprint, used to turn an object center into a
    /// top-left destination.
    pub footprint: Footprint,

    /// Current need values.
    pub needs: Needs,

    /// The world view supplied to this tick.
    pub world: WorldView<'a>,
}

impl<'a> Perception<'a> {
    #[inline]
    pub fn new(center: Vec2, footprint: Footprint, needs: Needs, world: WorldView<'a>) -> Self {
        Self { center, footprint, needs, world }
    }

    /// Destination that lands this agent's center on `object_center`.
    #[inline]
    pub fn destination_for(&self, object_center: Vec2) -> Vec2 {
        object_center - self.footprint.half()
    }
}
