//! The agent's high-level task.

use sl_core::ObjectId;
use sl_behavior::Target;

/// What an agent is currently doing.
///
/// Seeking states carry the id of the object being sought, so a seek can
/// never exist without its target.  `Idle` is both the initial state and
/// the state every task returns to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Action {
    #[default]
    Idle,
    /// Walking to a point the player picked; no object interaction.
    PlayerCommanded,
    SeekingFood(ObjectId),
    SeekingSleep(ObjectId),
}

impl Action {
    /// The seek state matching `target`'s tag.
    pub fn seeking(target: Target) -> Self {
        match target {
            Target::Food(id) => Action::SeekingFood(id),
            Target::Bed(id)  => Action::SeekingSleep(id),
        }
    }

    /// The tagged target, for seeking states.
    pub fn target(self) -> Option<Target> {
        match self {
            Action::SeekingFood(id)  => Some(Target::Food(id)),
            Action::SeekingSleep(id) => Some(Target::Bed(id)),
            Action::Idle | Action::PlayerCommanded => None,
        }
    }

    #[inline]
    pub fn is_idle(self) -> bool {
        matches!(self, Action::Idle)
    }

    #[inline]
    pub fn is_seeking(self) -> bool {
        matches!(self, Action::SeekingFood(_) | Action::SeekingSleep(_))
    }

    /// Label shown by UI collaborators.
    pub fn label(self) -> &'static str {
        match self {
            Action::Idle            => "idle",
            Action::PlayerCommanded => "player_commanded",
            Action::SeekingFood(_)  => "seeking_food",
            Action::SeekingSleep(_) => "seeking_sleep",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
