//! Plain data row types written by output backends.

use sl_agent::Agent;
use sl_core::Tick;
use sl_sim::TickSummary;

/// One agent's position, needs, and action at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:     u32,
    pub tick:         u64,
    pub elapsed_secs: f64,
    /// Top-left corner.
    pub x:            f64,
    pub y:            f64,
    pub hunger:       f64,
    pub sleep:        f64,
    pub social:       f64,
    pub fun:          f64,
    /// [`Action::label`][sl_agent::Action::label].
    pub action:       &'static str,
}

impl AgentSnapshotRow {
    pub fn from_agent(agent: &Agent, tick: Tick, elapsed_secs: f64) -> Self {
        let position = agent.position();
        Self {
            agent_id: agent.id().0,
            tick: tick.0,
            elapsed_secs,
            x: position.x,
            y: position.y,
            hunger: agent.needs.hunger,
            sleep: agent.needs.sleep,
            social: agent.needs.social,
            fun: agent.needs.fun,
            action: agent.action().label(),
        }
    }
}

/// Counts for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub arrivals:     u64,
    pub interactions: u64,
    pub idle_agents:  u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:         s.tick.0,
            elapsed_secs: s.elapsed_secs,
            arrivals:     s.arrivals as u64,
            interactions: s.interactions as u64,
            idle_agents:  s.idle_agents as u64,
        }
    }
}
