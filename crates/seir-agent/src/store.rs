//! `AgentStore`: every agent of the run, indexed by `AgentId`.
//!
//! Agents are created once, at model construction, with ids `0..count`, and
//! are never removed: dead agents stay in the store (and in every count) for
//! the rest of the run.

use std::ops::{Index, IndexMut};

use seir_core::{AgentId, DiseaseState};

use crate::Agent;

pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    /// Wrap an already-built population.
    ///
    /// # Panics
    ///
    /// Panics if `agents[i].id() != AgentId(i)` for any `i`; ids double as
    /// indices everywhere else.
    pub fn from_agents(agents: Vec<Agent>) -> Self {
        assert!(
            agents.iter().enumerate().all(|(i, a)| a.id().index() == i),
            "agent ids must be dense and in index order",
        );
        Self { agents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.agents.get(agent.index())
    }

    /// Iterator over all agents in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(Agent::id)
    }

    /// Ids of every agent currently in `state`, ascending.
    pub fn ids_in(&self, state: DiseaseState) -> Vec<AgentId> {
        self.agents
            .iter()
            .filter(|a| a.state() == state)
            .map(Agent::id)
            .collect()
    }

    /// Number of agents currently in `state`.
    pub fn count(&self, state: DiseaseState) -> usize {
        self.agents.iter().filter(|a| a.state() == state).count()
    }
}

impl Index<AgentId> for AgentStore {
    type Output = Agent;

    #[inline]
    fn index(&self, agent: AgentId) -> &Agent {
        &self.agents[agent.index()]
    }
}

impl IndexMut<AgentId> for AgentStore {
    #[inline]
    fn index_mut(&mut self, agent: AgentId) -> &mut Agent {
        &mut self.agents[agent.index()]
    }
}
