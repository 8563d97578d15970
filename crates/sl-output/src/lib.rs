//! `sl-output` — run traces for simling simulations.
//!
//! | Backend | Files created                                |
//! |---------|----------------------------------------------|
//! | CSV     | `agent_snapshots.csv`, `tick_summaries.csv`  |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `sl_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sl_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
