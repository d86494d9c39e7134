//! Randomised-order scheduler.
//!
//! The scheduler owns the list of every agent id ever added and the tick
//! counter.  It never deletes an entry because an agent died; instead it asks
//! the [`Population`] whether each agent is schedulable, so a death during a
//! tick cannot invalidate the iteration in progress.

use seir_core::{AgentId, SimClock, SimRng, Tick};

/// What the scheduler steps.
pub trait Population {
    type Error;

    /// `true` if `agent` should act this tick.
    fn is_schedulable(&self, agent: AgentId) -> bool;

    /// Run one agent's per-tick behaviour at tick `now`.
    fn step_agent(&mut self, agent: AgentId, now: Tick, rng: &mut SimRng) -> Result<(), Self::Error>;
}

#[derive(Debug, Default)]
pub struct Scheduler {
    order: Vec<AgentId>,
    clock: SimClock,
}

impl Scheduler {
    pub fn new(agents: impl IntoIterator<Item = AgentId>) -> Self {
        Self { order: agents.into_iter().collect(), clock: SimClock::new() }
    }

    /// Tick the next [`step`](Self::step) will simulate.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.clock.current_tick()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Agent ids in the order of the most recent shuffle.
    pub fn agents(&self) -> &[AgentId] {
        &self.order
    }

    pub fn add(&mut self, agent: AgentId) {
        self.order.push(agent);
    }

    /// Detach `agent` from the schedulable set.  Returns `false` if it was
    /// not present; removing twice is harmless.
    pub fn remove(&mut self, agent: AgentId) -> bool {
        match self.order.iter().position(|&a| a == agent) {
            Some(i) => {
                self.order.remove(i);
                true
            }
            None => false,
        }
    }

    /// Shuffle, step every schedulable agent once, then advance the clock.
    ///
    /// Returns the number of agents that acted.
    pub fn step<P: Population>(&mut self, population: &mut P, rng: &mut SimRng) -> Result<usize, P::Error> {
        rng.shuffle(&mut self.order);
        let now = self.clock.current_tick();
        let mut stepped = 0;
        for &agent in &self.order {
            if population.is_schedulable(agent) {
                population.step_agent(agent, now, rng)?;
                stepped += 1;
            }
        }
        self.clock.advance();
        Ok(stepped)
    }
}
