//! Tagged references to world objects.

use sl_core::ObjectId;
use sl_world::{Interactable, ObjectKind, WorldView};

/// The object an agent is heading to, tagged with the kind it was selected
/// as.  The tag is fixed when the target is chosen, so arrival handling
/// dispatches on it instead of inspecting the object.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Target {
    Food(ObjectId),
    Bed(ObjectId),
}

impl Target {
    pub fn new(kind: ObjectKind, id: ObjectId) -> Self {
        match kind {
            ObjectKind::Food => Target::Food(id),
            ObjectKind::Bed  => Target::Bed(id),
        }
    }

    #[inline]
    pub fn id(self) -> ObjectId {
        match self {
            Target::Food(id) | Target::Bed(id) => id,
        }
    }

    #[inline]
    pub fn kind(self) -> ObjectKind {
        match self {
            Target::Food(_) => ObjectKind::Food,
            Target::Bed(_)  => ObjectKind::Bed,
        }
    }

    /// Look the object up, returning it only if it still exists and is of
    /// the tagged kind.
    pub fn resolve<'a>(self, world: WorldView<'a>) -> Option<&'a Interactable> {
        world.get(self.id()).filter(|o| o.kind() == self.kind())
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Food(id) => write!(f, "food {id}"),
            Target::Bed(id)  => write!(f, "bed {id}"),
        }
    }
}
