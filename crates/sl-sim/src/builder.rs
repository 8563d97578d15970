//! Fluent builder for constructing a [`Sim`].

use std::collections::BTreeMap;

use sl_agent::AgentStore;
use sl_behavior::BehaviorModel;
use sl_core::{AgentId, SimClock, SimConfig};
use sl_world::World;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — tick rate, total ticks, output interval, …
/// - [`AgentStore`] — from [`sl_agent::AgentStoreBuilder`]
/// - [`World`] — from [`sl_world::WorldBuilder`]
/// - `B: BehaviorModel` — what idle agents decide to do
///
/// # Optional inputs
///
/// | Method          | Default          |
/// |-----------------|------------------|
/// | `.selected(id)` | nothing selected |
pub struct SimBuilder<B: BehaviorModel> {
    config:   SimConfig,
    agents:   AgentStore,
    world:    World,
    behavior: B,
    selected: Option<AgentId>,
}

impl<B: BehaviorModel> SimBuilder<B> {
    pub fn new(config: SimConfig, agents: AgentStore, world: World, behavior: B) -> Self {
        Self { config, agents, world, behavior, selected: None }
    }

    /// Start with `agent` selected.
    pub fn selected(mut self, agent: AgentId) -> Self {
        self.selected = Some(agent);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;

        if let Some(id) = self.selected {
            if self.agents.get(id).is_none() {
                return Err(SimError::AgentNotFound(id));
            }
        }

        for agent in self.agents.iter() {
            if !agent.position().is_finite() {
                return Err(SimError::Config(format!(
                    "agent {} has a non-finite position",
                    agent.id()
                )));
            }
        }

        Ok(Sim {
            config:   self.config,
            clock:    SimClock::new(),
            agents:   self.agents,
            world:    self.world,
            behavior: self.behavior,
            selected: self.selected,
            commands: BTreeMap::new(),
        })
    }
}
