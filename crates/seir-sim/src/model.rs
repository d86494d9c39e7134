//! The `EpidemicModel` struct and its tick loop.

use log::trace;
use seir_agent::{Agent, AgentError, AgentStore, DiseaseParams, TickContext};
use seir_core::{AgentId, DiseaseState, EpiError, ModelConfig, SimRng, Tick};
use seir_grid::Grid;

use crate::{
    AgentSnapshot, MetricsSeries, ModelBuilder, Population, Scheduler, SeedPlan, SimObserver,
    SimResult, StateCounts,
};

// ── World ─────────────────────────────────────────────────────────────────────

/// Everything agents read or write while stepping: the population, the grid
/// and the disease parameters.
pub struct World {
    pub agents: AgentStore,
    pub grid:   Grid,
    pub params: DiseaseParams,
}

impl Population for World {
    type Error = AgentError;

    fn is_schedulable(&self, agent: AgentId) -> bool {
        seir_agent::is_schedulable(agent, &self.agents, &self.grid)
    }

    fn step_agent(&mut self, agent: AgentId, now: Tick, rng: &mut SimRng) -> Result<(), AgentError> {
        let ctx = TickContext::new(now, &self.params);
        seir_agent::step_agent(agent, &mut self.agents, &mut self.grid, ctx, rng)
    }
}

// ── EpidemicModel ─────────────────────────────────────────────────────────────

/// A grid SEIR run: configuration, world, scheduler, seeding state, the single
/// RNG, and the metrics recorded so far.
///
/// Create via [`EpidemicModel::new`] or [`ModelBuilder`].
pub struct EpidemicModel {
    pub(crate) config:    ModelConfig,
    pub(crate) world:     World,
    pub(crate) scheduler: Scheduler,
    pub(crate) seeding:   SeedPlan,
    pub(crate) rng:       SimRng,
    pub(crate) metrics:   MetricsSeries,
}

impl EpidemicModel {
    /// Validate `config` and build a model with every agent placed and
    /// susceptible.
    pub fn new(config: ModelConfig) -> SimResult<Self> {
        ModelBuilder::new(config).build()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance exactly one tick and append one metrics sample.
    pub fn step(&mut self) -> SimResult<StateCounts> {
        let now = self.scheduler.tick();

        if !self.seeding.is_complete() {
            self.seeding.seed(now, &mut self.world.agents, &self.world.params, &mut self.rng);
        }

        let stepped = self.scheduler.step(&mut self.world, &mut self.rng)?;

        let counts = StateCounts::tally(self.scheduler.tick(), &self.world.agents);
        trace!(
            "{now}: {stepped} agents stepped, S={} E={} I={} R={} D={}",
            counts.susceptible, counts.exposed, counts.infected, counts.recovered, counts.dead,
        );
        self.metrics.push(counts);
        Ok(counts)
    }

    /// Run `ticks` steps, reporting to `observer`.
    ///
    /// Snapshots go out after every tick whose completed-tick count is a
    /// multiple of `config.snapshot_interval_ticks` (never when it is 0).
    pub fn run<O: SimObserver>(&mut self, ticks: u64, observer: &mut O) -> SimResult<()> {
        let interval = self.config.snapshot_interval_ticks;
        for _ in 0..ticks {
            observer.on_tick_start(self.scheduler.tick());
            let counts = self.step()?;
            observer.on_tick_end(&counts);
            if interval > 0 && counts.tick.0 % interval == 0 {
                observer.on_snapshot(counts.tick, &self.snapshot());
            }
        }
        observer.on_sim_end(self.scheduler.tick());
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Ticks completed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.scheduler.tick()
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn agents(&self) -> &AgentStore {
        &self.world.agents
    }

    /// Look up one agent by id.
    pub fn agent(&self, agent: AgentId) -> SimResult<&Agent> {
        self.world
            .agents
            .get(agent)
            .ok_or_else(|| EpiError::AgentNotFound(agent).into())
    }

    pub fn grid(&self) -> &Grid {
        &self.world.grid
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn metrics(&self) -> &MetricsSeries {
        &self.metrics
    }

    /// Infections force-seeded so far.
    pub fn seeded(&self) -> usize {
        self.seeding.seeded()
    }

    pub fn seed_total(&self) -> usize {
        self.seeding.total()
    }

    pub fn susceptible_count(&self) -> usize {
        self.world.agents.count(DiseaseState::Susceptible)
    }

    pub fn exposed_count(&self) -> usize {
        self.world.agents.count(DiseaseState::Exposed)
    }

    pub fn infected_count(&self) -> usize {
        self.world.agents.count(DiseaseState::Infected)
    }

    pub fn recovered_count(&self) -> usize {
        self.world.agents.count(DiseaseState::Recovered)
    }

    pub fn dead_count(&self) -> usize {
        self.world.agents.count(DiseaseState::Dead)
    }

    /// Counts as of now (not appended to the series).
    pub fn counts(&self) -> StateCounts {
        StateCounts::tally(self.tick(), &self.world.agents)
    }

    /// Position and state of every agent, in id order.
    pub fn snapshot(&self) -> Vec<AgentSnapshot> {
        self.world
            .agents
            .iter()
            .map(|agent| AgentSnapshot {
                id:       agent.id(),
                position: self.world.grid.position(agent.id()),
                state:    agent.state(),
            })
            .collect()
    }
}
