//! Fluent builder for constructing an [`EpidemicModel`].

use log::info;
use seir_agent::{AgentStoreBuilder, DiseaseParams};
use seir_core::{Cell, ModelConfig, SimRng};
use seir_grid::Grid;

use crate::{EpidemicModel, MetricsSeries, Scheduler, SeedPlan, SimResult, World};

/// Fluent builder for [`EpidemicModel`].
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                         |
/// |-------------|---------------------------------|
/// | `.seed(s)`  | `config.seed`                   |
///
/// # Example
///
/// ```rust
/// use seir_core::ModelConfig;
/// use seir_sim::ModelBuilder;
///
/// let model = ModelBuilder::new(ModelConfig::default()).seed(7).build().unwrap();
/// assert_eq!(model.agents().len(), 100);
/// ```
pub struct ModelBuilder {
    config: ModelConfig,
}

impl ModelBuilder {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    /// Override the RNG seed from the configuration.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate the configuration, create the population, place every agent
    /// on a uniformly random cell, and return a model at tick 0.
    pub fn build(self) -> SimResult<EpidemicModel> {
        let config = self.config;
        config.validate()?;

        let mut rng = SimRng::new(config.seed);
        let params = DiseaseParams::from_config(&config)?;
        let agents = AgentStoreBuilder::from_config(&config).build(&mut rng)?;

        let mut grid = Grid::new(config.width, config.height, config.torus)?;
        for agent in agents.agent_ids() {
            let cell = Cell::new(
                rng.gen_range(0..config.width),
                rng.gen_range(0..config.height),
            );
            grid.place(agent, cell)?;
        }

        let scheduler = Scheduler::new(agents.agent_ids());
        let seeding = SeedPlan::new(config.seed_total(), config.seed_duration);

        info!(
            "built model: {} agents on {}x{}{} grid, seed {}, seeding {} infections over {} ticks",
            agents.len(),
            config.width,
            config.height,
            if grid.is_torus() { " toroidal" } else { "" },
            config.seed,
            seeding.total(),
            config.seed_duration,
        );

        Ok(EpidemicModel {
            config,
            world: World { agents, grid, params },
            scheduler,
            seeding,
            rng,
            metrics: MetricsSeries::new(),
        })
    }
}
