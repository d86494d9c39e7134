//! Disease parameters and the stochastic draws derived from them.

use rand_distr::Normal;
use seir_core::{ModelConfig, SimRng};

use crate::{AgentError, AgentResult};

/// Age at which mortality starts to rise above the baseline.
const AGE_RISK_ONSET: f64 = 50.0;

/// Years over which the age factor climbs from 0 to its cap of 1.
const AGE_RISK_SPAN: f64 = 50.0;

/// Everything an agent's behaviours read about the disease.  Built once per
/// run from a validated [`ModelConfig`]; never mutated.
#[derive(Clone, Debug)]
pub struct DiseaseParams {
    pub transmission_p: f64,
    pub death_rate:     f64,
    pub track_deaths:   bool,
    pub track_exposed:  bool,
    recovery:           Normal<f64>,
    incubation:         Normal<f64>,
}

impl DiseaseParams {
    pub fn from_config(config: &ModelConfig) -> AgentResult<Self> {
        Ok(Self {
            transmission_p: config.transmission_p,
            death_rate:     config.death_rate,
            track_deaths:   config.track_deaths,
            track_exposed:  config.track_exposed,
            recovery:       normal("recovery time", config.recover_days_mean, config.recover_std)?,
            incubation:     normal("incubation time", config.incubation_days_mean, config.incubation_std)?,
        })
    }

    /// Ticks an agent stays infectious, truncated to whole ticks, at least 1.
    pub fn draw_recovery(&self, rng: &mut SimRng) -> u64 {
        whole_ticks(rng.sample(&self.recovery))
    }

    /// Ticks an agent stays exposed, truncated to whole ticks, at least 1.
    pub fn draw_incubation(&self, rng: &mut SimRng) -> u64 {
        whole_ticks(rng.sample(&self.incubation))
    }

    /// Probability that at least one of `infected_neighbors` independent
    /// contacts transmits: `1 − (1 − p)^k`.
    pub fn infection_probability(&self, infected_neighbors: usize) -> f64 {
        if infected_neighbors == 0 {
            return 0.0;
        }
        let k = i32::try_from(infected_neighbors).unwrap_or(i32::MAX);
        1.0 - (1.0 - self.transmission_p).powi(k)
    }

    /// Death probability for an agent of `age` at the end of its infectious
    /// period: `clamp(death_rate × (1 + age_factor), 0, 1)`.
    pub fn adjusted_death_rate(&self, age: f64) -> f64 {
        (self.death_rate * (1.0 + age_factor(age))).clamp(0.0, 1.0)
    }
}

/// Mortality multiplier contribution: 0 below 50, rising linearly to 1 at 100.
pub fn age_factor(age: f64) -> f64 {
    ((age - AGE_RISK_ONSET) / AGE_RISK_SPAN).clamp(0.0, 1.0)
}

pub(crate) fn normal(what: &'static str, mean: f64, std: f64) -> AgentResult<Normal<f64>> {
    if !mean.is_finite() {
        return Err(AgentError::Distribution { what, reason: format!("mean {mean} is not finite") });
    }
    if !(std.is_finite() && std >= 0.0) {
        return Err(AgentError::Distribution {
            what,
            reason: format!("standard deviation {std} must be finite and non-negative"),
        });
    }
    Normal::new(mean, std).map_err(|e| AgentError::Distribution { what, reason: e.to_string() })
}

/// Truncate toward zero, then raise to the one-tick minimum.
fn whole_ticks(draw: f64) -> u64 {
    (draw.trunc() as i64).max(1) as u64
}
