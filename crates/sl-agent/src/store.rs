//! `AgentStore` — every agent, indexed by `AgentId`.

use sl_core::{AgentId, AgentParams, Vec2};

use crate::Agent;

/// All agents in the simulation.
///
/// `agents[i].id() == AgentId(i)` always holds; agents are only ever
/// appended.  Each agent owns its state exclusively, which is what lets
/// the simulation update them in parallel.
#[derive(Debug, Clone, Default)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of agents.
    #[inline]
    pub fn count(&self) -> usize {
        self.agents.len()
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Append an idle agent at `position`; returns its id, or `None` once
    /// the store already holds `u32::MAX + 1` agents.
    pub fn spawn(&mut self, position: Vec2, params: AgentParams) -> Option<AgentId> {
        let id = AgentId::from_index(self.agents.len())?;
        self.agents.push(Agent::new(id, position, params));
        Some(id)
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len()).filter_map(AgentId::from_index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Agent> {
        self.agents.iter_mut()
    }

    /// Contiguous agent slice, e.g. for `rayon` parallel iteration.
    pub fn as_mut_slice(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// First agent (lowest id) whose footprint contains `point`.
    pub fn pick_at(&self, point: Vec2) -> Option<AgentId> {
        self.agents.iter().find(|a| a.contains(point)).map(Agent::id)
    }
}

impl<'a> IntoIterator for &'a AgentStore {
    type Item = &'a Agent;
    type IntoIter = std::slice::Iter<'a, Agent>;

    fn into_iter(self) -> Self::IntoIter {
        self.agents.iter()
    }
}
