//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sl_agent::AgentStore;
use sl_core::Tick;
use sl_sim::{SimObserver, TickSummary};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  `Sim::run` does this through `on_sim_end`; call it
    /// after driving the sim with `step` or `run_ticks`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::warn!(error = %e, "trace write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, elapsed_secs: f64, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|agent| AgentSnapshotRow::from_agent(agent, tick, elapsed_secs))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
