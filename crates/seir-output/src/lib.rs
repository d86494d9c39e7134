//! `seir-output`: CSV output for the grid SEIR simulator.
//!
//! | File                  | Columns                                                  | Written            |
//! |-----------------------|----------------------------------------------------------|--------------------|
//! | `state_counts.csv`    | `tick,susceptible,exposed,infected,recovered,dead`       | every tick         |
//! | `agent_snapshots.csv` | `agent_id,tick,x,y,state`                                | every snapshot     |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `seir_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use seir_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! model.run(100, &mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, StateCountsRow};
pub use writer::OutputWriter;
