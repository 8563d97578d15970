//! `sl-agent` — the simling itself.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`action`]  | `Action` — `Idle`, `PlayerCommanded`, `SeekingFood`, `SeekingSleep` |
//! | [`agent`]   | `Agent` — `update`, `command_target`, status readout         |
//! | [`report`]  | `UpdateReport`, `AgentStatus`                                |
//! | [`store`]   | `AgentStore` — all agents indexed by `AgentId`, point picking |
//! | [`builder`] | `AgentStoreBuilder` (fluent construction)                    |
//!
//! # Tick order
//!
//! ```text
//! Agent::update(dt, world):
//!   ① decay   — every need += rate * dt, clamped to [0, 100]
//!   ② move    — advance toward the target; may arrive and clear it
//!   ③ decide  — run the action state machine once:
//!                 Idle            → ask the BehaviorModel for a seek intent
//!                 PlayerCommanded → Idle once the target is gone
//!                 Seeking*        → on arrival, use the object once, → Idle
//! ```

pub mod action;
pub mod agent;
pub mod builder;
pub mod report;
pub mod store;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use agent::Agent;
pub use builder::AgentStoreBuilder;
pub use report::{AgentStatus, UpdateReport};
pub use store::AgentStore;
