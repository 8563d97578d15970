//! Simulation observer trait for progress reporting and data collection.

use sl_agent::{Agent, AgentStore, UpdateReport};
use sl_core::Tick;

/// Aggregate counts for one completed tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickSummary {
    pub tick: Tick,
    /// Length of the tick after capping.
    pub dt_secs: f64,
    /// Simulated seconds elapsed at the end of the tick.
    pub elapsed_secs: f64,
    /// Agents whose movement reached its target this tick.
    pub arrivals: usize,
    /// Objects used this tick.
    pub interactions: usize,
    /// Agents in `Idle` after the tick.
    pub idle_agents: usize,
}

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — arrival counter
///
/// ```rust,ignore
/// struct Arrivals(usize);
///
/// impl SimObserver for Arrivals {
///     fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
///         self.0 += summary.arrivals;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before commands are applied.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per agent after all agents were updated, in ascending
    /// `AgentId` order.
    fn on_agent_update(&mut self, _tick: Tick, _agent: &Agent, _report: &UpdateReport) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to every agent.
    fn on_snapshot(&mut self, _tick: Tick, _elapsed_secs: f64, _agents: &AgentStore) {}

    /// Called once after [`Sim::run`][crate::Sim::run] completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
