//! World layouts: the hand-placed prototype room and seeded random rooms.

use sl_agent::AgentStoreBuilder;
use sl_behavior::NeedsBehavior;
use sl_core::{AgentParams, SimConfig, SimRng, Vec2};
use sl_world::{Bed, FoodSource, WorldBuilder};

use crate::{SimBuilder, SimResult};

/// Initial placement of agents and objects.
///
/// All positions are top-left corners.  Object ids are assigned foods first,
/// then beds, each in list order; agent ids follow the `agents` list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Scenario {
    /// Params shared by every agent in the scenario.
    pub agent_params: AgentParams,
    pub agents: Vec<Vec2>,
    pub foods:  Vec<Vec2>,
    pub beds:   Vec<Vec2>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::prototype()
    }
}

impl Scenario {
    /// The two-agent, 800x600 room.
    pub fn prototype() -> Self {
        Self {
            agent_params: AgentParams::default(),
            agents: vec![Vec2::new(100.0, 100.0), Vec2::new(150.0, 200.0)],
            foods:  vec![Vec2::new(50.0, 50.0), Vec2::new(700.0, 500.0)],
            beds:   vec![Vec2::new(400.0, 50.0), Vec2::new(100.0, 500.0)],
        }
    }

    /// Scatter the given counts uniformly inside `bounds` (every footprint
    /// stays fully inside).  The same seed always yields the same layout.
    pub fn random(seed: u64, agents: usize, foods: usize, beds: usize, bounds: Vec2) -> Self {
        let agent_params = AgentParams::default();
        let mut rng = SimRng::new(seed);

        // One stream per kind so changing one count leaves the others put.
        let mut scatter = |stream: u64, count: usize, size: Vec2| {
            let mut child = rng.child(stream);
            let room = bounds - size;
            (0..count).map(|_| child.point_within(room)).collect::<Vec<_>>()
        };

        let agent_size = Vec2::new(agent_params.size, agent_params.size);
        let food_size = Vec2::new(FoodSource::SIZE, FoodSource::SIZE);
        let bed_size = Vec2::new(Bed::SIZE.width, Bed::SIZE.height);

        Self {
            agents: scatter(0, agents, agent_size),
            foods:  scatter(1, foods, food_size),
            beds:   scatter(2, beds, bed_size),
            agent_params,
        }
    }

    /// Build the world and agents and wrap them in a [`SimBuilder`] running
    /// [`NeedsBehavior`] with this scenario's thresholds.
    pub fn into_builder(self, config: SimConfig) -> SimResult<SimBuilder<NeedsBehavior>> {
        let mut world = WorldBuilder::new();
        for p in &self.foods {
            world.add_food(p.x, p.y);
        }
        for p in &self.beds {
            world.add_bed(p.x, p.y);
        }
        let world = world.build()?;

        let agents = AgentStoreBuilder::new(self.agent_params)
            .agents_at(self.agents)
            .build()?;

        let behavior = NeedsBehavior::from_params(&self.agent_params);
        Ok(SimBuilder::new(config, agents, world, behavior))
    }
}
