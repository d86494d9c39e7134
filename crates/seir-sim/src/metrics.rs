//! Aggregate counts per tick and per-agent snapshots.

use seir_agent::AgentStore;
use seir_core::{AgentId, Cell, DiseaseState, Tick};

/// Number of agents in each compartment after a tick.
///
/// `exposed` stays 0 unless exposure is tracked and `dead` stays 0 unless
/// deaths are tracked (untracked deaths are counted as `recovered`), so the
/// five fields always sum to the population.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateCounts {
    /// Ticks completed when the sample was taken (1 after the first step).
    pub tick:        Tick,
    pub susceptible: usize,
    pub exposed:     usize,
    pub infected:    usize,
    pub recovered:   usize,
    pub dead:        usize,
}

impl StateCounts {
    /// Count every agent in `agents`.
    pub fn tally(tick: Tick, agents: &AgentStore) -> Self {
        let mut counts = StateCounts { tick, ..StateCounts::default() };
        for agent in agents.iter() {
            match agent.state() {
                DiseaseState::Susceptible => counts.susceptible += 1,
                DiseaseState::Exposed     => counts.exposed += 1,
                DiseaseState::Infected    => counts.infected += 1,
                DiseaseState::Recovered   => counts.recovered += 1,
                DiseaseState::Dead        => counts.dead += 1,
            }
        }
        counts
    }

    pub fn get(&self, state: DiseaseState) -> usize {
        match state {
            DiseaseState::Susceptible => self.susceptible,
            DiseaseState::Exposed     => self.exposed,
            DiseaseState::Infected    => self.infected,
            DiseaseState::Recovered   => self.recovered,
            DiseaseState::Dead        => self.dead,
        }
    }

    /// Sum over all compartments; equals the population.
    pub fn total(&self) -> usize {
        self.susceptible + self.exposed + self.infected + self.recovered + self.dead
    }
}

/// Append-only time series of [`StateCounts`], one sample per tick.
#[derive(Clone, Debug, Default)]
pub struct MetricsSeries {
    samples: Vec<StateCounts>,
}

impl MetricsSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: StateCounts) {
        debug_assert!(
            self.samples.last().is_none_or(|last| last.tick < sample.tick),
            "metrics samples must be appended in tick order",
        );
        self.samples.push(sample);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&StateCounts> {
        self.samples.last()
    }

    pub fn as_slice(&self) -> &[StateCounts] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateCounts> + '_ {
        self.samples.iter()
    }

    /// The sample recorded at `tick`, if any.
    pub fn at(&self, tick: Tick) -> Option<&StateCounts> {
        self.samples
            .binary_search_by_key(&tick, |s| s.tick)
            .ok()
            .map(|i| &self.samples[i])
    }

    /// One compartment's count over time.
    pub fn series(&self, state: DiseaseState) -> Vec<usize> {
        self.samples.iter().map(|s| s.get(state)).collect()
    }
}

/// One agent as seen by an external renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentSnapshot {
    pub id:       AgentId,
    /// `None` once a dead agent has been taken off the grid.
    pub position: Option<Cell>,
    pub state:    DiseaseState,
}
