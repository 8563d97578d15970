//! Fluent builder for constructing an `AgentStore` in one step.
//!
//! # Usage
//!
//! ```rust
//! use sl_agent::AgentStoreBuilder;
//! use sl_core::AgentParams;
//!
//! let store = AgentStoreBuilder::new(AgentParams::default())
//!     .agent_at(100.0, 100.0)
//!     .agent_at(150.0, 200.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count(), 2);
//! ```

use sl_core::{AgentParams, CoreError, CoreResult, Vec2};

use crate::AgentStore;

/// Fluent builder for [`AgentStore`].
///
/// Every agent gets the builder's default params unless added with
/// [`agent_with`](Self::agent_with).  Params are validated on
/// [`build`](Self::build).
pub struct AgentStoreBuilder {
    defaults: AgentParams,
    pending:  Vec<(Vec2, AgentParams)>,
}

impl AgentStoreBuilder {
    pub fn new(defaults: AgentParams) -> Self {
        Self { defaults, pending: Vec::new() }
    }

    /// Add an agent with the default params at `(x, y)`.
    pub fn agent_at(mut self, x: f64, y: f64) -> Self {
        self.pending.push((Vec2::new(x, y), self.defaults));
        self
    }

    /// Add an agent with its own params.
    pub fn agent_with(mut self, position: Vec2, params: AgentParams) -> Self {
        self.pending.push((position, params));
        self
    }

    /// Add one default agent per position.
    pub fn agents_at<I: IntoIterator<Item = Vec2>>(mut self, positions: I) -> Self {
        let defaults = self.defaults;
        self.pending.extend(positions.into_iter().map(|p| (p, defaults)));
        self
    }

    /// Validate params and spawn every agent in insertion order.
    pub fn build(self) -> CoreResult<AgentStore> {
        let mut store = AgentStore::new();
        for (position, params) in self.pending {
            params.validate()?;
            store
                .spawn(position, params)
                .ok_or_else(|| CoreError::Config("agent count exceeds the agent id range".into()))?;
        }
        Ok(store)
    }
}
