//! A single individual and its disease condition.

use seir_core::{AgentId, DiseaseState, Tick};

/// Disease state together with the timers that only exist in that state.
///
/// Carrying the timers inside the variants means an agent can never hold an
/// exposure timer while infected (or the reverse).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Condition {
    #[default]
    Susceptible,

    /// Infected but not yet infectious.
    Exposed {
        /// Tick the exposure happened.
        since:      Tick,
        /// Ticks to spend exposed; always ≥ 1.
        incubation: u64,
    },

    /// Infectious.
    Infected {
        /// Tick the infectious period began.
        since:    Tick,
        /// Ticks until the outcome is resolved; always ≥ 1.
        recovery: u64,
    },

    Recovered,

    Dead,
}

impl Condition {
    #[inline]
    pub fn state(&self) -> DiseaseState {
        match self {
            Condition::Susceptible      => DiseaseState::Susceptible,
            Condition::Exposed { .. }   => DiseaseState::Exposed,
            Condition::Infected { .. }  => DiseaseState::Infected,
            Condition::Recovered        => DiseaseState::Recovered,
            Condition::Dead             => DiseaseState::Dead,
        }
    }
}

/// One simulated person.
///
/// The grid position is not stored here; it lives in
/// [`seir_grid::Grid`], which is the single owner of occupancy.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    id:        AgentId,
    age:       f64,
    condition: Condition,
}

impl Agent {
    /// A susceptible agent of the given age.
    pub fn new(id: AgentId, age: f64) -> Self {
        Self { id, age, condition: Condition::Susceptible }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Age in years, fixed at creation.
    #[inline]
    pub fn age(&self) -> f64 {
        self.age
    }

    #[inline]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    #[inline]
    pub fn state(&self) -> DiseaseState {
        self.condition.state()
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Susceptible → Exposed.
    pub fn expose(&mut self, now: Tick, incubation: u64) {
        self.transition(Condition::Exposed { since: now, incubation: incubation.max(1) });
    }

    /// Susceptible or Exposed → Infected.
    pub fn infect(&mut self, now: Tick, recovery: u64) {
        self.transition(Condition::Infected { since: now, recovery: recovery.max(1) });
    }

    /// Infected → Recovered.
    pub fn recover(&mut self) {
        self.transition(Condition::Recovered);
    }

    /// Infected → Dead.
    pub fn die(&mut self) {
        self.transition(Condition::Dead);
    }

    fn transition(&mut self, next: Condition) {
        debug_assert!(
            self.state().can_become(next.state()),
            "{}: illegal transition {} -> {}",
            self.id,
            self.state(),
            next.state(),
        );
        self.condition = next;
    }
}
