//! Simulation and agent configuration.
//!
//! Both structs have `Default` values matching the prototype world, so a
//! scenario file only needs to name what it changes.

use crate::{CoreError, CoreResult, NeedRates};

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level loop configuration.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Fixed-step rate used by headless runs.  `dt = 1 / tick_rate_hz`.
    pub tick_rate_hz: f64,

    /// Total ticks for `Sim::run`.
    pub total_ticks: u64,

    /// Seed for randomly generated layouts.  The same seed always produces
    /// the same world.
    pub seed: u64,

    /// Emit a snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Upper bound applied to caller-supplied deltas (a stalled frame should
    /// not teleport agents across the map).  0 disables the cap.
    pub max_dt_secs: f64,
}

impl SimConfig {
    /// Length of one fixed step in seconds.
    #[inline]
    pub fn fixed_dt(&self) -> f64 {
        1.0 / self.tick_rate_hz
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            return Err(CoreError::Config(format!(
                "tick_rate_hz must be positive, got {}",
                self.tick_rate_hz
            )));
        }
        if !(self.max_dt_secs.is_finite() && self.max_dt_secs >= 0.0) {
            return Err(CoreError::Config(format!(
                "max_dt_secs must be non-negative, got {}",
                self.max_dt_secs
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz:          60.0,
            total_ticks:           60 * 60 * 5, // five simulated minutes
            seed:                  42,
            output_interval_ticks: 60,
            max_dt_secs:           0.0,
        }
    }
}

// ── AgentParams ───────────────────────────────────────────────────────────────

/// Per-agent tunables.  Cheap to copy; every agent carries its own.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentParams {
    /// Movement speed in world units per second.
    pub speed: f64,
    /// Side length of the agent's square footprint.
    pub size: f64,
    /// Starting value of all four needs.
    pub initial_need: f64,
    pub rates: NeedRates,
    /// Hunger above this value sends an idle agent looking for food.
    pub hunger_threshold: f64,
    /// Sleep above this value sends an idle, not-hungry agent to bed.
    pub sleep_threshold: f64,
    /// Distance under which movement snaps to the target.
    pub arrival_epsilon: f64,
}

impl AgentParams {
    pub fn validate(&self) -> CoreResult<()> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(CoreError::Config(format!("{name} must be positive, got {v}")))
            }
        };
        positive("speed", self.speed)?;
        positive("size", self.size)?;
        positive("arrival_epsilon", self.arrival_epsilon)?;
        for (name, rate) in [
            ("hunger rate", self.rates.hunger),
            ("sleep rate", self.rates.sleep),
            ("social rate", self.rates.social),
            ("fun rate", self.rates.fun),
        ] {
            if !(rate.is_finite() && rate >= 0.0) {
                return Err(CoreError::Config(format!("{name} must be non-negative, got {rate}")));
            }
        }
        Ok(())
    }
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            speed:            50.0,
            size:             20.0,
            initial_need:     50.0,
            rates:            NeedRates::default(),
            hunger_threshold: 70.0,
            sleep_threshold:  70.0,
            arrival_epsilon:  1.0,
        }
    }
}
