//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for run-trace rows.
///
/// Writers return errors; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them for [`take_error`][crate::SimOutputObserver::take_error]
/// because observer hooks cannot fail.
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
