//! Per-update outcome and status readout types.

use sl_core::{AgentId, Footprint, NeedKind, Needs, ObjectId, Vec2};
use sl_mobility::Step;

use crate::Action;

/// What happened during one [`Agent::update`][crate::Agent::update].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UpdateReport {
    /// Result of the movement step.
    pub step: Step,
    /// `(from, to)` if the action changed this tick.
    pub transition: Option<(Action, Action)>,
    /// Object used on arrival and the need it relieved.
    pub used: Option<(ObjectId, NeedKind)>,
}

impl UpdateReport {
    #[inline]
    pub fn arrived(&self) -> bool {
        self.step == Step::Arrived
    }
}

/// Snapshot of everything a renderer or status panel shows for an agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentStatus {
    pub id:        AgentId,
    pub position:  Vec2,
    pub footprint: Footprint,
    pub needs:     Needs,
    pub action:    &'static str,
}
