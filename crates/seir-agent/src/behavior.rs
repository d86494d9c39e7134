//! The three per-tick agent behaviours.
//!
//! Each behaviour returns early for agents that are dead or not on the grid,
//! so calling them on such agents is harmless.  [`step_agent`] runs them in
//! the fixed order status → contact → move.

use log::trace;
use seir_core::{AgentId, DiseaseState, EpiError, SimRng, Tick};
use seir_grid::Grid;

use crate::{AgentResult, AgentStore, Condition, DiseaseParams};

/// Read-only inputs shared by every agent during one tick.
#[derive(Clone, Copy)]
pub struct TickContext<'a> {
    /// Tick being simulated (the scheduler's counter before it advances).
    pub tick:   Tick,
    pub params: &'a DiseaseParams,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(tick: Tick, params: &'a DiseaseParams) -> Self {
        Self { tick, params }
    }
}

/// Liveness predicate used by the scheduler: known, on the grid and not
/// dead.
#[inline]
pub fn is_schedulable(agent: AgentId, agents: &AgentStore, grid: &Grid) -> bool {
    agents.get(agent).is_some_and(|a| a.state() != DiseaseState::Dead)
        && grid.position(agent).is_some()
}

/// Run status, contact and move for one agent.
///
/// Fails with [`EpiError::AgentNotFound`] for an id the store does not hold.
pub fn step_agent(
    agent:  AgentId,
    agents: &mut AgentStore,
    grid:   &mut Grid,
    ctx:    TickContext<'_>,
    rng:    &mut SimRng,
) -> AgentResult<()> {
    if agents.get(agent).is_none() {
        return Err(EpiError::AgentNotFound(agent).into());
    }
    if !is_schedulable(agent, agents, grid) {
        return Ok(());
    }
    status(agent, agents, grid, ctx, rng);
    contact(agent, agents, grid, ctx, rng);
    move_agent(agent, agents, grid, rng)
}

/// Progress an existing infection.
///
/// - Exposed for at least its incubation time → Infected, with a freshly
///   drawn recovery time.
/// - Infected for at least its recovery time → one mortality draw at the
///   age-adjusted rate.  A death is `Dead` (and leaves the grid) when deaths
///   are tracked, otherwise it counts as `Recovered`.
pub fn status(
    agent:  AgentId,
    agents: &mut AgentStore,
    grid:   &mut Grid,
    ctx:    TickContext<'_>,
    rng:    &mut SimRng,
) {
    if !is_schedulable(agent, agents, grid) {
        return;
    }
    let person = &mut agents[agent];
    let condition = *person.condition();
    match condition {
        Condition::Exposed { since, incubation } if ctx.tick.since(since) >= incubation => {
            let recovery = ctx.params.draw_recovery(rng);
            person.infect(ctx.tick, recovery);
        }
        Condition::Infected { since, recovery } if ctx.tick.since(since) >= recovery => {
            let death_p = ctx.params.adjusted_death_rate(person.age());
            let dies = rng.gen_bool(death_p);
            if dies && ctx.params.track_deaths {
                grid.remove(agent);
                person.die();
                trace!("{agent} died at {}", ctx.tick);
            } else {
                person.recover();
            }
        }
        _ => {}
    }
}

/// Exposure check for a susceptible agent.
///
/// Counts infected agents in the Moore neighbourhood including the agent's
/// own cell; with `k > 0` a single Bernoulli draw at `1 − (1 − p)^k` decides
/// transmission.
pub fn contact(
    agent:  AgentId,
    agents: &mut AgentStore,
    grid:   &Grid,
    ctx:    TickContext<'_>,
    rng:    &mut SimRng,
) {
    if agents[agent].state() != DiseaseState::Susceptible {
        return;
    }
    let Some(cell) = grid.position(agent) else {
        return;
    };

    let infected = grid
        .neighbors(cell, true)
        .filter(|&other| agents[other].state() == DiseaseState::Infected)
        .count();
    if infected == 0 {
        return;
    }
    if !rng.gen_bool(ctx.params.infection_probability(infected)) {
        return;
    }

    if ctx.params.track_exposed {
        let incubation = ctx.params.draw_incubation(rng);
        agents[agent].expose(ctx.tick, incubation);
    } else {
        let recovery = ctx.params.draw_recovery(rng);
        agents[agent].infect(ctx.tick, recovery);
    }
}

/// Random walk: step to one of the Moore-adjacent cells, chosen uniformly.
///
/// An agent with no adjacent cell (1×1 bounded grid) stays put.
pub fn move_agent(
    agent:  AgentId,
    agents: &AgentStore,
    grid:   &mut Grid,
    rng:    &mut SimRng,
) -> AgentResult<()> {
    if !is_schedulable(agent, agents, grid) {
        return Ok(());
    }
    let Some(cell) = grid.position(agent) else {
        return Ok(());
    };
    let candidates = grid.neighbor_cells(cell);
    if let Some(&to) = rng.choose(&candidates) {
        grid.move_agent(agent, to)?;
    }
    Ok(())
}
