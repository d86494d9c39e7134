//! Run configuration.
//!
//! `ModelConfig` is immutable for the duration of a run.  The runner builds it
//! from command-line flags or loads it from JSON (with the `serde` feature);
//! either way it must pass [`ModelConfig::validate`] before a model is built.

use crate::{EpiError, EpiResult};

/// Every parameter of one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelConfig {
    /// Number of agents created at construction.
    pub population: usize,

    /// Grid columns.  Must be > 0.
    pub width: u32,

    /// Grid rows.  Must be > 0.
    pub height: u32,

    /// Wrap neighbourhoods and movement around the grid edges.
    pub torus: bool,

    /// Per-infected-neighbour, per-tick probability of transmission.
    pub transmission_p: f64,

    /// Baseline probability of dying at the end of the infectious period,
    /// before the age adjustment.
    pub death_rate: f64,

    /// Mean of the infectious-period duration, in ticks.
    pub recover_days_mean: f64,

    /// Standard deviation of the infectious-period duration.
    pub recover_std: f64,

    /// Mean of the incubation duration, in ticks.
    pub incubation_days_mean: f64,

    /// Standard deviation of the incubation duration.
    pub incubation_std: f64,

    /// Deaths become `Dead` and leave the grid instead of counting as recovered.
    pub track_deaths: bool,

    /// Infection passes through `Exposed` before `Infected`.
    pub track_exposed: bool,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Fraction of the population force-infected during the seeding window.
    pub seed_fraction: f64,

    /// Number of leading ticks the seeded infections are spread over.
    pub seed_duration: u64,

    /// Mean of the age distribution, in years.
    pub age_mean: f64,

    /// Standard deviation of the age distribution.
    pub age_std: f64,

    /// Minimum age; draws below it are raised to it.
    pub age_floor: f64,

    /// Emit an agent snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            population:              100,
            width:                   10,
            height:                  10,
            torus:                   false,
            transmission_p:          0.2,
            death_rate:              0.1,
            recover_days_mean:       21.0,
            recover_std:             7.0,
            incubation_days_mean:    5.0,
            incubation_std:          2.0,
            track_deaths:            false,
            track_exposed:           false,
            seed:                    42,
            seed_fraction:           0.01,
            seed_duration:           10,
            age_mean:                40.0,
            age_std:                 10.0,
            age_floor:               5.0,
            snapshot_interval_ticks: 1,
        }
    }
}

impl ModelConfig {
    /// Reject any parameter outside its domain.  Nothing is clamped.
    pub fn validate(&self) -> EpiResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EpiError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        probability("transmission_p", self.transmission_p)?;
        probability("death_rate", self.death_rate)?;
        probability("seed_fraction", self.seed_fraction)?;
        positive("recover_days_mean", self.recover_days_mean)?;
        positive("incubation_days_mean", self.incubation_days_mean)?;
        non_negative("recover_std", self.recover_std)?;
        non_negative("incubation_std", self.incubation_std)?;
        non_negative("age_std", self.age_std)?;
        if !self.age_mean.is_finite() || !self.age_floor.is_finite() {
            return Err(EpiError::Config("age parameters must be finite".into()));
        }
        if self.seed_duration == 0 {
            return Err(EpiError::Config("seed_duration must be at least 1 tick".into()));
        }
        if u32::try_from(self.population).is_err() {
            return Err(EpiError::Config(format!(
                "population {} exceeds the agent id space",
                self.population
            )));
        }
        Ok(())
    }

    /// Total infections forced by seeding: `floor(population × seed_fraction)`.
    #[inline]
    pub fn seed_total(&self) -> usize {
        (self.population as f64 * self.seed_fraction).floor() as usize
    }
}

fn probability(name: &str, p: f64) -> EpiResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(EpiError::Config(format!("{name} must be within [0, 1], got {p}")))
    }
}

fn positive(name: &str, v: f64) -> EpiResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(EpiError::Config(format!("{name} must be positive, got {v}")))
    }
}

fn non_negative(name: &str, v: f64) -> EpiResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(EpiError::Config(format!("{name} must be non-negative, got {v}")))
    }
}
