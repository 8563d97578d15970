//! `sl-mobility` — agent movement toward an optional target point.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`state`]   | `Movement` — position, target, speed, epsilon         |
//! | [`engine`]  | `Movement::advance` and the `Step` outcome            |
//!
//! # Movement model (straight line, snap on arrival)
//!
//! 1. No target: nothing happens.
//! 2. Already within `arrival_epsilon` of the target: snap onto it and
//!    clear the target without moving.
//! 3. Otherwise move `speed * dt` along the normalized direction, then
//!    re-test: if the remaining vector flipped sign on either axis
//!    (overshoot) or is now shorter than the epsilon, snap and clear.
//!
//! The re-test keeps large `dt` values (low frame rates) from jittering
//! back and forth across a target.  There is no pathfinding.

pub mod engine;
pub mod state;

#[cfg(test)]
mod tests;

pub use engine::Step;
pub use state::Movement;
