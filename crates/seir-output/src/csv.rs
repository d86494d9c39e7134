//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `agent_snapshots.csv`
//! - `state_counts.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, StateCountsRow};

pub const SNAPSHOT_FILE: &str = "agent_snapshots.csv";
pub const COUNTS_FILE: &str = "state_counts.csv";

pub struct CsvWriter {
    snapshots: Writer<File>,
    counts:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (truncating) both files in `dir` and write their headers.
    /// `dir` must already exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(["agent_id", "tick", "x", "y", "state"])?;

        let mut counts = Writer::from_path(dir.join(COUNTS_FILE))?;
        counts.write_record(["tick", "susceptible", "exposed", "infected", "recovered", "dead"])?;

        Ok(Self { snapshots, counts, finished: false })
    }
}

fn coord(v: Option<u32>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                coord(row.x),
                coord(row.y),
                row.state.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_state_counts(&mut self, row: &StateCountsRow) -> OutputResult<()> {
        self.counts.write_record(&[
            row.tick.to_string(),
            row.susceptible.to_string(),
            row.exposed.to_string(),
            row.infected.to_string(),
            row.recovered.to_string(),
            row.dead.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.counts.flush()?;
        Ok(())
    }
}
