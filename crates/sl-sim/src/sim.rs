//! The `Sim` struct and its tick loop.

use std::collections::BTreeMap;

use sl_agent::{AgentStatus, AgentStore, UpdateReport};
use sl_behavior::BehaviorModel;
use sl_core::{AgentId, SimClock, SimConfig, Tick, Vec2};
use sl_world::World;

use crate::{NoopObserver, SimError, SimObserver, SimResult, TickSummary};

/// The simulation runner.
///
/// `Sim<B>` owns every agent, the world they share, and the behavior model
/// idle agents consult.  Each tick:
///
/// 1. **Commands**: player commands scheduled for this tick are applied.
/// 2. **Update**: every agent decays, moves, and runs its state machine
///    against a read-only view of the world.
/// 3. **Report**: observers receive per-agent reports, the tick summary,
///    and periodic snapshots.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    /// Loop configuration (tick rate, total ticks, dt cap, …).
    pub config: SimConfig,

    /// Tick counter and elapsed simulated seconds.
    pub clock: SimClock,

    pub agents: AgentStore,

    /// The objects agents can use.  Fixed for the lifetime of the sim.
    pub world: World,

    /// Consulted once per idle agent per tick.
    pub behavior: B,

    pub(crate) selected: Option<AgentId>,

    /// Player commands keyed by the tick they apply at.
    pub(crate) commands: BTreeMap<Tick, Vec<(AgentId, Vec2)>>,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Running ───────────────────────────────────────────────────────────

    /// Run fixed steps of `1 / tick_rate_hz` until `config.total_ticks`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = Tick(self.config.total_ticks);
        let dt = self.config.fixed_dt();

        tracing::info!(
            agents = self.agents.count(),
            objects = self.world.len(),
            ticks = self.config.total_ticks,
            dt,
            "simulation start"
        );

        while self.clock.current_tick < end {
            self.step_observed(dt, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);

        tracing::info!(clock = %self.clock, "simulation end");
        Ok(())
    }

    /// Run exactly `n` fixed steps from the current tick (ignores
    /// `total_ticks`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        let dt = self.config.fixed_dt();
        for _ in 0..n {
            self.step_observed(dt, observer)?;
        }
        Ok(())
    }

    /// Advance one tick of `dt_secs` without observers.
    pub fn step(&mut self, dt_secs: f64) -> SimResult<TickSummary> {
        self.step_observed(dt_secs, &mut NoopObserver)
    }

    /// Advance one tick of `dt_secs`, reporting to `observer`.
    ///
    /// `dt_secs` must be finite and non-negative; it is capped at
    /// `config.max_dt_secs` when that is positive.
    pub fn step_observed<O: SimObserver>(
        &mut self,
        dt_secs:  f64,
        observer: &mut O,
    ) -> SimResult<TickSummary> {
        if !dt_secs.is_finite() || dt_secs < 0.0 {
            return Err(SimError::InvalidDelta(dt_secs));
        }
        let dt = if self.config.max_dt_secs > 0.0 {
            dt_secs.min(self.config.max_dt_secs)
        } else {
            dt_secs
        };

        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        self.apply_due_commands(now);
        let reports = self.update_agents(dt);
        self.clock.advance(dt);

        let mut summary = TickSummary {
            tick: now,
            dt_secs: dt,
            elapsed_secs: self.clock.elapsed_secs,
            ..TickSummary::default()
        };
        for (agent, report) in self.agents.iter().zip(&reports) {
            observer.on_agent_update(now, agent, report);
            summary.arrivals += usize::from(report.arrived());
            summary.interactions += usize::from(report.used.is_some());
            summary.idle_agents += usize::from(agent.action().is_idle());
        }

        observer.on_tick_end(now, &summary);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, self.clock.elapsed_secs, &self.agents);
        }

        Ok(summary)
    }

    // ── Player input ──────────────────────────────────────────────────────

    /// Send `agent` to `position` immediately.
    pub fn command(&mut self, agent: AgentId, position: Vec2) -> SimResult<()> {
        check_position(position)?;
        let a = self.agents.get_mut(agent).ok_or(SimError::AgentNotFound(agent))?;
        a.command_target(position);
        Ok(())
    }

    /// Queue a command for the start of `tick`.  A tick already in the past
    /// applies on the next step.
    pub fn schedule_command(&mut self, tick: Tick, agent: AgentId, position: Vec2) -> SimResult<()> {
        check_position(position)?;
        if self.agents.get(agent).is_none() {
            return Err(SimError::AgentNotFound(agent));
        }
        let at = tick.max(self.clock.current_tick);
        self.commands.entry(at).or_default().push((agent, position));
        Ok(())
    }

    /// Select the agent under `point`, or clear the selection if there is
    /// none.
    pub fn select_at(&mut self, point: Vec2) -> Option<AgentId> {
        self.selected = self.agents.pick_at(point);
        if let Some(id) = self.selected {
            tracing::debug!(agent = %id, "selected");
        }
        self.selected
    }

    /// Command the selected agent to `position`.  Returns `false` if nothing
    /// is selected.
    pub fn command_selected(&mut self, position: Vec2) -> SimResult<bool> {
        check_position(position)?;
        let Some(id) = self.selected else {
            return Ok(false);
        };
        match self.agents.get_mut(id) {
            Some(agent) => {
                agent.command_target(position);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[inline]
    pub fn selected(&self) -> Option<AgentId> {
        self.selected
    }

    /// Commands queued for future ticks.
    pub fn pending_commands(&self) -> usize {
        self.commands.values().map(Vec::len).sum()
    }

    /// Status readout for every agent, in id order.
    pub fn status(&self) -> Vec<AgentStatus> {
        self.agents.iter().map(|a| a.status()).collect()
    }

    // ── Tick internals ────────────────────────────────────────────────────

    fn apply_due_commands(&mut self, now: Tick) {
        while let Some(entry) = self.commands.first_entry() {
            if *entry.key() > now {
                break;
            }
            for (id, position) in entry.remove() {
                if let Some(agent) = self.agents.get_mut(id) {
                    tracing::debug!(agent = %id, x = position.x, y = position.y, tick = %now, "scheduled command");
                    agent.command_target(position);
                }
            }
        }
    }

    /// Update every agent; reports come back in ascending `AgentId` order
    /// on both paths.
    fn update_agents(&mut self, dt: f64) -> Vec<UpdateReport> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let world    = self.world.view();
        let behavior = &self.behavior;
        let agents   = &mut self.agents;

        #[cfg(not(feature = "parallel"))]
        {
            agents
                .iter_mut()
                .map(|agent| agent.update_with(dt, world, behavior))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            agents
                .as_mut_slice()
                .par_iter_mut()
                .map(|agent| agent.update_with(dt, world, behavior))
                .collect()
        }
    }
}

fn check_position(position: Vec2) -> SimResult<()> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidPosition(position))
    }
}
