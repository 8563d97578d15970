//! Seek intents produced by behavior models.

use sl_core::Vec2;

use crate::Target;

/// "Walk to `destination`, then use `target`."
///
/// `destination` is the agent's top-left position that puts its footprint
/// center on the object's center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intent {
    pub target:      Target,
    pub destination: Vec2,
}
