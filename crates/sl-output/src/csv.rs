//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};

pub const SNAPSHOT_FILE: &str = "agent_snapshots.csv";
pub const SUMMARY_FILE: &str = "tick_summaries.csv";

pub const SNAPSHOT_HEADER: [&str; 10] =
    ["agent_id", "tick", "elapsed_secs", "x", "y", "hunger", "sleep", "social", "fun", "action"];
pub const SUMMARY_HEADER: [&str; 5] =
    ["tick", "elapsed_secs", "arrivals", "interactions", "idle_agents"];

/// Writes a run trace to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (truncating) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record(SUMMARY_HEADER)?;

        tracing::debug!(dir = %dir.display(), "csv trace opened");
        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.elapsed_secs.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.hunger.to_string(),
                row.sleep.to_string(),
                row.social.to_string(),
                row.fun.to_string(),
                row.action.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.arrivals.to_string(),
            row.interactions.to_string(),
            row.idle_agents.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
