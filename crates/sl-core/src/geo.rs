//! Planar geometry for the 2-D world.
//!
//! Positions are the top-left corner of an entity's footprint, in world
//! units (screen pixels in the prototype).  Distance math always goes
//! through footprint centers.

use std::ops::{Add, Mul, Sub};

/// A point or displacement in world units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn length_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Squared Euclidean distance.  Used for nearest-object ranking where
    /// only ordering matters.
    #[inline]
    pub fn distance_sq(self, other: Vec2) -> f64 {
        (other - self).length_sq()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        self.distance_sq(other).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── Footprint ─────────────────────────────────────────────────────────────────

/// Axis-aligned width/height of an entity.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub width:  f64,
    pub height: f64,
}

impl Footprint {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square footprint of side `size`.
    #[inline]
    pub const fn square(size: f64) -> Self {
        Self { width: size, height: size }
    }

    /// Half extents, i.e. the offset from top-left corner to center.
    #[inline]
    pub fn half(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Center of a footprint whose top-left corner is at `origin`.
    #[inline]
    pub fn center_at(self, origin: Vec2) -> Vec2 {
        origin + self.half()
    }

    /// `true` when both sides are finite and strictly positive.
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Hit test against the rectangle anchored at `origin`.  Edges count as
    /// inside.
    pub fn contains(self, origin: Vec2, point: Vec2) -> bool {
        point.x >= origin.x
            && point.x <= origin.x + self.width
            && point.y >= origin.y
            && point.y <= origin.y + self.height
    }
}
