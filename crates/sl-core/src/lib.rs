//! `sl-core` — foundational types for the simlings agent simulation.
//!
//! This crate is a dependency of every other `sl-*` crate.  It has no `sl-*`
//! dependencies and only `rand` and `thiserror` externally, plus optional
//! `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ObjectId`                                 |
//! | [`geo`]         | `Vec2`, `Footprint`, rectangle hit testing            |
//! | [`needs`]       | `Needs`, `NeedKind`, `NeedRates`                      |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig`, `AgentParams`                            |
//! | [`rng`]         | `SimRng` (seeded layout generation)                   |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod needs;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AgentParams, SimConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{Footprint, Vec2};
pub use ids::{AgentId, ObjectId};
pub use needs::{NeedKind, NeedRates, Needs};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
