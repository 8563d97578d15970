//! Interactable world objects.
//!
//! Every variant exposes the same capability: a position, a footprint for
//! center/proximity math, and a fixed [`Effect`] applied on
//! [`Interactable::use_on`].  Objects are never consumed; an agent may use
//! the same one on every visit.

use sl_core::{Footprint, NeedKind, Needs, Vec2};

/// Discriminant of an interactable variant.  Also used as the world-view
/// grouping key.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObjectKind {
    Food,
    Bed,
}

impl ObjectKind {
    /// Group label as shown to UI collaborators.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Food => "food_sources",
            ObjectKind::Bed  => "beds",
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed reduction applied to exactly one need.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub need:   NeedKind,
    pub amount: f64,
}

impl Effect {
    /// Apply to `needs`, flooring the affected need at zero.
    #[inline]
    pub fn apply(self, needs: &mut Needs) {
        needs.reduce(self.need, self.amount);
    }
}

// ── Variants ──────────────────────────────────────────────────────────────────

/// A square food source that satisfies hunger.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoodSource {
    pub position: Vec2,
    pub size:     f64,
}

impl FoodSource {
    pub const SIZE: f64 = 30.0;
    pub const HUNGER_RELIEF: f64 = 50.0;

    pub fn new(x: f64, y: f64) -> Self {
        Self { position: Vec2::new(x, y), size: Self::SIZE }
    }
}

/// A rectangular bed that satisfies sleep.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bed {
    pub position: Vec2,
    pub size:     Footprint,
}

impl Bed {
    pub const SIZE: Footprint = Footprint::new(60.0, 30.0);
    pub const SLEEP_RELIEF: f64 = 70.0;

    pub fn new(x: f64, y: f64) -> Self {
        Self { position: Vec2::new(x, y), size: Self::SIZE }
    }
}

// ── Interactable ──────────────────────────────────────────────────────────────

/// A world object an agent can walk to and use.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Interactable {
    Food(FoodSource),
    Bed(Bed),
}

impl Interactable {
    pub fn food(x: f64, y: f64) -> Self {
        Interactable::Food(FoodSource::new(x, y))
    }

    pub fn bed(x: f64, y: f64) -> Self {
        Interactable::Bed(Bed::new(x, y))
    }

    #[inline]
    pub fn kind(&self) -> ObjectKind {
        match self {
            Interactable::Food(_) => ObjectKind::Food,
            Interactable::Bed(_)  => ObjectKind::Bed,
        }
    }

    /// Top-left corner.
    #[inline]
    pub fn position(&self) -> Vec2 {
        match self {
            Interactable::Food(f) => f.position,
            Interactable::Bed(b)  => b.position,
        }
    }

    /// Width/height; the food's scalar size resolves to a square.
    #[inline]
    pub fn footprint(&self) -> Footprint {
        match self {
            Interactable::Food(f) => Footprint::square(f.size),
            Interactable::Bed(b)  => b.size,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.footprint().center_at(self.position())
    }

    pub fn effect(&self) -> Effect {
        match self {
            Interactable::Food(_) => Effect { need: NeedKind::Hunger, amount: FoodSource::HUNGER_RELIEF },
            Interactable::Bed(_)  => Effect { need: NeedKind::Sleep,  amount: Bed::SLEEP_RELIEF },
        }
    }

    /// Use the object: apply its effect to the visiting agent's needs.
    pub fn use_on(&self, needs: &mut Needs) {
        self.effect().apply(needs);
    }
}
