//! `seir-sim`: the epidemic model and its tick loop.
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① Seed     : while fewer than `seed_total` agents have been seeded,
//!                force-infect this tick's quota of random susceptibles.
//!   ② Agents   : shuffle every agent id; each schedulable agent (placed and
//!                not dead) runs status → contact → move.  The tick counter
//!                advances once, after the last agent.
//!   ③ Metrics  : tally S/E/I/R/D and append it to the metrics series.
//! ```
//!
//! # Quick-start
//!
//! ```rust
//! use seir_core::ModelConfig;
//! use seir_sim::{EpidemicModel, NoopObserver};
//!
//! let config = ModelConfig { population: 500, width: 20, height: 20, ..ModelConfig::default() };
//! let mut model = EpidemicModel::new(config).unwrap();
//! model.run(30, &mut NoopObserver).unwrap();
//! assert_eq!(model.metrics().len(), 30);
//! ```

pub mod builder;
pub mod error;
pub mod metrics;
pub mod model;
pub mod observer;
pub mod scheduler;
pub mod seeding;

#[cfg(test)]
mod tests;

pub use builder::ModelBuilder;
pub use error::{SimError, SimResult};
pub use metrics::{AgentSnapshot, MetricsSeries, StateCounts};
pub use model::{EpidemicModel, World};
pub use observer::{NoopObserver, SimObserver};
pub use scheduler::{Population, Scheduler};
pub use seeding::SeedPlan;
