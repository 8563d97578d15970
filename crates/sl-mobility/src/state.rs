//! Per-agent movement state.

use sl_core::{AgentParams, Vec2};

/// Where an agent is and where, if anywhere, it is heading.
///
/// `target == None` means "not moving".  Arrival is observable by the
/// caller as the target flipping from `Some` to `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movement {
    /// Top-left corner of the agent's footprint.
    pub position: Vec2,

    /// Point the agent's position is converging to.
    pub target: Option<Vec2>,

    /// World units per second.
    pub speed: f64,

    /// Distance under which the agent snaps onto the target.
    pub arrival_epsilon: f64,
}

impl Movement {
    /// Stationary at `position`.
    pub fn new(position: Vec2, speed: f64, arrival_epsilon: f64) -> Self {
        Self { position, target: None, speed, arrival_epsilon }
    }

    /// Stationary at `position` with speed and epsilon from `params`.
    pub fn from_params(position: Vec2, params: &AgentParams) -> Self {
        Self::new(position, params.speed, params.arrival_epsilon)
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.target.is_some()
    }

    /// Replace any current target.
    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = Some(target);
    }

    /// Stop without arriving.
    #[inline]
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Straight-line distance left to the target.
    pub fn remaining(&self) -> Option<f64> {
        self.target.map(|t| self.position.distance(t))
    }

    /// Seconds until arrival at the current speed, ignoring the snap
    /// epsilon.
    pub fn eta_secs(&self) -> Option<f64> {
        self.remaining().map(|d| d / self.speed)
    }
}
