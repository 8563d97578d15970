//! `sl-behavior` — deciding what an idle agent should go and do.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`target`]  | `Target` — tagged reference to a world object (`Food`/`Bed`)    |
//! | [`intent`]  | `Intent` — a target plus the point to walk to                   |
//! | [`context`] | `Perception<'a>` — read-only inputs for one decision            |
//! | [`model`]   | `BehaviorModel` trait                                           |
//! | [`needs`]   | `NeedsBehavior` — threshold-driven food/sleep seeking           |
//! | [`noop`]    | `NoopBehavior` — never seeks anything                           |
//!
//! # Design notes
//!
//! A behavior model is consulted only while an agent is idle.  It reads a
//! [`Perception`] and returns at most one [`Intent`]; the agent applies it.
//! Models hold no per-agent state, so one instance serves every agent and
//! must be `Send + Sync` for the parallel update path.

pub mod context;
pub mod intent;
pub mod model;
pub mod needs;
pub mod noop;
pub mod target;


pub use context::Perception;
pub use intent::Intent;
pub use model::BehaviorModel;
pub use needs::NeedsBehavior;
pub use noop::NoopBehavior;
pub use target::Target;
