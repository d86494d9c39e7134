//! Fluent builder for an [`AgentStore`].
//!
//! # Usage
//!
//! ```rust
//! use seir_agent::AgentStoreBuilder;
//! use seir_core::{DiseaseState, SimRng};
//!
//! let mut rng = SimRng::new(42);
//! let store = AgentStoreBuilder::new(1_000)
//!     .age_distribution(40.0, 10.0, 5.0)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(store.len(), 1_000);
//! assert_eq!(store.count(DiseaseState::Susceptible), 1_000);
//! ```

use seir_core::{AgentId, ModelConfig, SimRng};

use crate::params::normal;
use crate::{Agent, AgentError, AgentResult, AgentStore};

/// Builds `count` susceptible agents with ages drawn from
/// `max(floor, Normal(mean, std))`.
pub struct AgentStoreBuilder {
    count:     usize,
    age_mean:  f64,
    age_std:   f64,
    age_floor: f64,
}

impl AgentStoreBuilder {
    /// A builder for `count` agents using the default age distribution
    /// (mean 40, std 10, floor 5).
    pub fn new(count: usize) -> Self {
        Self { count, age_mean: 40.0, age_std: 10.0, age_floor: 5.0 }
    }

    /// A builder sized and parameterised from `config`.
    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.population).age_distribution(
            config.age_mean,
            config.age_std,
            config.age_floor,
        )
    }

    pub fn age_distribution(mut self, mean: f64, std: f64, floor: f64) -> Self {
        self.age_mean = mean;
        self.age_std = std;
        self.age_floor = floor;
        self
    }

    /// Draw one age per agent, in id order, from `rng`.
    ///
    /// Fails if `count` does not fit the `u32` id space or the age
    /// distribution is invalid.
    pub fn build(self, rng: &mut SimRng) -> AgentResult<AgentStore> {
        let end = AgentId::try_from(self.count)
            .map_err(|_| AgentError::PopulationTooLarge(self.count))?;
        let ages = normal("age", self.age_mean, self.age_std)?;
        let agents = (0..end.0)
            .map(|i| {
                let age: f64 = rng.sample(&ages);
                Agent::new(AgentId(i), age.max(self.age_floor))
            })
            .collect();
        Ok(AgentStore::from_agents(agents))
    }
}
