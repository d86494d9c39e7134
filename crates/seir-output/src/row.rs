//! Flat rows as they appear in the output files.

use seir_core::DiseaseState;
use seir_sim::{AgentSnapshot, StateCounts};

/// One agent at one snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    /// `None` for a dead agent that has left the grid.
    pub x:        Option<u32>,
    pub y:        Option<u32>,
    pub state:    DiseaseState,
}

impl AgentSnapshotRow {
    pub fn new(tick: u64, snapshot: &AgentSnapshot) -> Self {
        Self {
            agent_id: snapshot.id.0,
            tick,
            x:        snapshot.position.map(|c| c.x),
            y:        snapshot.position.map(|c| c.y),
            state:    snapshot.state,
        }
    }
}

/// Compartment sizes after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCountsRow {
    pub tick:        u64,
    pub susceptible: u64,
    pub exposed:     u64,
    pub infected:    u64,
    pub recovered:   u64,
    pub dead:        u64,
}

impl From<&StateCounts> for StateCountsRow {
    fn from(counts: &StateCounts) -> Self {
        Self {
            tick:        counts.tick.0,
            susceptible: counts.susceptible as u64,
            exposed:     counts.exposed as u64,
            infected:    counts.infected as u64,
            recovered:   counts.recovered as u64,
            dead:        counts.dead as u64,
        }
    }
}
