//! Staged seeding of the initial outbreak.
//!
//! Rather than infecting everyone at tick 0, `total` forced infections are
//! spread over the first `duration` ticks: every tick gets
//! `total / duration`, and the first `total % duration` ticks one more.

use log::debug;
use seir_agent::{AgentStore, DiseaseParams};
use seir_core::{DiseaseState, SimRng, Tick};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedPlan {
    total:    usize,
    duration: u64,
    seeded:   usize,
}

impl SeedPlan {
    /// `duration` must be at least 1 (enforced by `ModelConfig::validate`).
    pub fn new(total: usize, duration: u64) -> Self {
        Self { total, duration: duration.max(1), seeded: 0 }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn seeded(&self) -> usize {
        self.seeded
    }

    /// `true` once every planned infection has been seeded.  Seeding never
    /// resumes after this.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.seeded >= self.total
    }

    /// Infections scheduled for `tick`, before capping by availability.
    /// Zero from `duration` onward.
    pub fn quota(&self, tick: Tick) -> usize {
        if tick.0 >= self.duration {
            return 0;
        }
        let duration = self.duration as usize;
        let base = self.total / duration;
        let remainder = (self.total % duration) as u64;
        if tick.0 < remainder { base + 1 } else { base }
    }

    /// Force-infect this tick's share of randomly chosen susceptible agents.
    ///
    /// Seeded agents skip `Exposed` regardless of exposure tracking and get a
    /// freshly drawn recovery time.  Returns how many were seeded.
    pub fn seed(
        &mut self,
        tick:   Tick,
        agents: &mut AgentStore,
        params: &DiseaseParams,
        rng:    &mut SimRng,
    ) -> usize {
        if self.is_complete() {
            return 0;
        }
        let quota = self.quota(tick);
        if quota == 0 {
            return 0;
        }
        let susceptible = agents.ids_in(DiseaseState::Susceptible);
        let n = quota.min(susceptible.len()).min(self.total - self.seeded);
        if n == 0 {
            return 0;
        }

        for agent in rng.choose_multiple(&susceptible, n) {
            let recovery = params.draw_recovery(rng);
            agents[agent].infect(tick, recovery);
        }
        self.seeded += n;
        debug!("{tick}: seeded {n} infections ({}/{})", self.seeded, self.total);
        n
    }
}
