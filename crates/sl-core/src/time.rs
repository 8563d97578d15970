//! Simulation time model.
//!
//! # Design
//!
//! Unlike a fixed-resolution calendar, simling ticks have variable length:
//! each tick advances the clock by whatever `dt` the surrounding loop
//! measured (or the fixed `1 / tick_rate_hz` step in headless runs).  The
//! clock therefore tracks both an integer `Tick` counter, used for output
//! intervals and scheduled commands, and the accumulated seconds.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tick counter plus accumulated simulated seconds.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced by [`SimClock::advance`] each iteration.
    pub current_tick: Tick,
    /// Simulated seconds elapsed since tick 0.
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current tick, which lasted `dt_secs`.
    #[inline]
    pub fn advance(&mut self, dt_secs: f64) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += dt_secs;
    }

    /// Break elapsed time into (minutes, seconds) for log lines.
    pub fn elapsed_ms(&self) -> (u64, f64) {
        let total = self.elapsed_secs.max(0.0);
        let minutes = (total / 60.0).floor();
        (minutes as u64, total - minutes * 60.0)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = self.elapsed_ms();
        write!(f, "{} ({}m {:05.2}s)", self.current_tick, m, s)
    }
}
