use crate::{AgentSnapshotRow, OutputResult, StateCountsRow};

/// A sink for simulation output.
///
/// [`SimOutputObserver`][crate::SimOutputObserver] calls these from observer
/// callbacks, which cannot fail; it keeps the first error for
/// [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    fn write_state_counts(&mut self, row: &StateCountsRow) -> OutputResult<()>;

    /// Flush everything.  Calling it again is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
