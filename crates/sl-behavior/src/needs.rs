//! Threshold-driven need satisfaction.

use sl_core::AgentParams;
use sl_world::ObjectKind;

use crate::{BehaviorModel, Intent, Perception, Target};

/// Sends hungry agents to the nearest food and sleepy agents to the nearest
/// bed.
///
/// Hunger is checked strictly first: when hunger is over its threshold,
/// sleep is not considered that tick, even if no food exists.  Each check
/// is a strict `>` comparison.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NeedsBehavior {
    pub hunger_threshold: f64,
    pub sleep_threshold:  f64,
}

impl NeedsBehavior {
    pub fn new(hunger_threshold: f64, sleep_threshold: f64) -> Self {
        Self { hunger_threshold, sleep_threshold }
    }

    pub fn from_params(params: &AgentParams) -> Self {
        Self::new(params.hunger_threshold, params.sleep_threshold)
    }

    fn seek(perception: &Perception<'_>, kind: ObjectKind) -> Option<Intent> {
        let world = perception.world;
        let Some(id) = world.nearest(kind, perception.center) else {
            tracing::trace!(%kind, "nothing to seek");
            return None;
        };
        let object = world.get(id)?;
        Some(Intent {
            target:      Target::new(kind, id),
            destination: perception.destination_for(object.center()),
        })
    }
}

impl Default for NeedsBehavior {
    fn default() -> Self {
        Self::from_params(&AgentParams::default())
    }
}

impl BehaviorModel for NeedsBehavior {
    fn replan(&self, perception: &Perception<'_>) -> Option<Intent> {
        let needs = &perception.needs;
        if needs.hunger > self.hunger_threshold {
            return Self::seek(perception, ObjectKind::Food);
        }
        if needs.sleep > self.sleep_threshold {
            return Self::seek(perception, ObjectKind::Bed);
        }
        None
    }
}
