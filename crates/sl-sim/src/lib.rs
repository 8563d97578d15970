//! `sl-sim` — the loop shell around the agent core.
//!
//! # Tick loop
//!
//! ```text
//! Sim::step(dt):
//!   ① validate dt (finite, non-negative), cap at config.max_dt_secs
//!   ② apply player commands scheduled for this tick
//!   ③ Agent::update(dt, world) for every agent
//!        (on Rayon's pool with the `parallel` feature)
//!   ④ observers, in ascending AgentId order: on_agent_update, on_tick_end,
//!      and on_snapshot every config.output_interval_ticks
//! ```
//!
//! `Sim::run` repeats `step(1 / tick_rate_hz)` up to `config.total_ticks`.
//! An interactive front end calls `step` with its own measured frame time
//! and forwards clicks through `select_at` / `command_selected`.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs agent updates on Rayon's thread pool.             |
//! | `serde`    | `Scenario` (de)serialization, e.g. from TOML.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sl_core::SimConfig;
//! use sl_sim::{NoopObserver, Scenario};
//!
//! let mut sim = Scenario::prototype().into_builder(SimConfig::default())?.build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scenario;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use scenario::Scenario;
pub use sim::Sim;
