//! Typed identifiers.
//!
//! `AgentId` indexes the agent store and `ObjectId` indexes the world's
//! interactable arena.  Agents never hold references into the world, only
//! `ObjectId`s, so the world alone governs object lifetime.

use std::fmt;

/// Declare a `u32` index newtype.  `$label` prefixes the `Display` form,
/// e.g. `agent#7`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Position in the owning `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Id for position `index`, or `None` past `u32::MAX`.
            #[inline]
            pub fn from_index(index: usize) -> Option<Self> {
                u32::try_from(index).ok().map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in the `AgentStore`.
    pub struct AgentId => "agent";
}

typed_id! {
    /// Index of an interactable in the world arena.
    pub struct ObjectId => "object";
}
