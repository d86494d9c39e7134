//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use seir_core::Tick;
use seir_sim::{AgentSnapshot, SimObserver, StateCounts};

use crate::row::{AgentSnapshotRow, StateCountsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every tick's counts and every snapshot to an
/// [`OutputWriter`].
///
/// Observer callbacks return nothing, so write errors are held here.  Once
/// `model.run()` returns, check [`take_error`][Self::take_error].  Only the
/// first error is kept; later writes are still attempted.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            self.last_error.get_or_insert(e);
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, counts: &StateCounts) {
        let result = self.writer.write_state_counts(&StateCountsRow::from(counts));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[AgentSnapshot]) {
        if agents.is_empty() {
            return;
        }
        let rows: Vec<AgentSnapshotRow> =
            agents.iter().map(|a| AgentSnapshotRow::new(tick.0, a)).collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
