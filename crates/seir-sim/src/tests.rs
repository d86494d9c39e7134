//! Unit and integration tests for seir-sim.

#[cfg(test)]
mod helpers {
    use seir_core::ModelConfig;

    use crate::EpidemicModel;

    /// Small well-mixed model with deterministic disease durations.
    pub fn config() -> ModelConfig {
        ModelConfig {
            population:           200,
            width:                10,
            height:               10,
            transmission_p:       0.3,
            death_rate:           0.1,
            recover_days_mean:    5.0,
            recover_std:          0.0,
            incubation_days_mean: 2.0,
            incubation_std:       0.0,
            seed_fraction:        0.05,
            seed_duration:        5,
            ..ModelConfig::default()
        }
    }

    pub fn model(config: ModelConfig) -> EpidemicModel {
        EpidemicModel::new(config).unwrap()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use seir_agent::AgentError;
    use seir_core::{AgentId, DiseaseState, EpiError, ModelConfig, SimRng, Tick};

    use super::helpers::*;
    use crate::{ModelBuilder, Population, SimError};

    #[test]
    fn zero_width_is_rejected() {
        let err = ModelBuilder::new(ModelConfig { width: 0, ..config() }).build().err().unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let err = ModelBuilder::new(ModelConfig { transmission_p: 1.5, ..config() })
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn every_agent_placed_and_susceptible() {
        let m = model(config());
        assert_eq!(m.tick(), Tick::ZERO);
        assert_eq!(m.agents().len(), 200);
        assert_eq!(m.grid().occupied_count(), 200);
        assert_eq!(m.susceptible_count(), 200);
        for agent in m.agents().iter() {
            assert_eq!(agent.state(), DiseaseState::Susceptible);
            let cell = m.grid().position(agent.id()).unwrap();
            assert!(m.grid().contains(cell));
        }
        assert!(m.metrics().is_empty());
    }

    #[test]
    fn torus_flag_reaches_the_grid() {
        assert!(!model(config()).grid().is_torus());
        assert!(model(ModelConfig { torus: true, ..config() }).grid().is_torus());
    }

    #[test]
    fn agent_lookup() {
        let m = model(config());
        assert_eq!(m.agent(AgentId(3)).unwrap().id(), AgentId(3));
        let err = m.agent(AgentId(200)).err().unwrap();
        assert!(matches!(err, SimError::Config(EpiError::AgentNotFound(AgentId(200)))));
    }

    #[test]
    fn world_reports_unknown_agent() {
        let mut m = model(config());
        let mut rng = SimRng::new(0);
        assert!(!m.world.is_schedulable(AgentId(500)));
        let err = m.world.step_agent(AgentId(500), Tick(0), &mut rng).err().unwrap();
        assert!(matches!(err, AgentError::Core(EpiError::AgentNotFound(AgentId(500)))));
    }

    #[test]
    fn seed_override_replaces_config_seed() {
        let m = ModelBuilder::new(config()).seed(99).build().unwrap();
        assert_eq!(m.config().seed, 99);
    }

    #[test]
    fn empty_population_runs() {
        let mut m = model(ModelConfig { population: 0, ..config() });
        assert_eq!(m.seed_total(), 0);
        m.step().unwrap();
        assert_eq!(m.counts().total(), 0);
        assert_eq!(m.tick(), Tick(1));
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use seir_core::{AgentId, SimRng, Tick};

    use crate::{Population, Scheduler};

    /// Records who acted; agents marked inactive are skipped.
    struct Recorder {
        active: Vec<bool>,
        acted:  Vec<(AgentId, Tick)>,
    }

    impl Recorder {
        fn new(n: usize) -> Self {
            Self { active: vec![true; n], acted: Vec::new() }
        }
    }

    impl Population for Recorder {
        type Error = ();

        fn is_schedulable(&self, agent: AgentId) -> bool {
            self.active[agent.index()]
        }

        fn step_agent(&mut self, agent: AgentId, now: Tick, _rng: &mut SimRng) -> Result<(), ()> {
            // First agent to act deactivates agent 0, like a death mid-tick.
            self.active[0] = false;
            self.acted.push((agent, now));
            Ok(())
        }
    }

    fn ids(n: u32) -> Vec<AgentId> {
        (0..n).map(AgentId).collect()
    }

    #[test]
    fn shuffle_keeps_the_same_agents() {
        let mut sched = Scheduler::new(ids(50));
        let mut rng = SimRng::new(1);
        sched.step(&mut Recorder::new(50), &mut rng).unwrap();

        let mut order = sched.agents().to_vec();
        order.sort();
        assert_eq!(order, ids(50));
    }

    #[test]
    fn one_tick_per_step() {
        let mut sched = Scheduler::new(ids(3));
        let mut rng = SimRng::new(1);
        assert_eq!(sched.tick(), Tick(0));
        sched.step(&mut Recorder::new(3), &mut rng).unwrap();
        sched.step(&mut Recorder::new(3), &mut rng).unwrap();
        assert_eq!(sched.tick(), Tick(2));
    }

    #[test]
    fn agents_act_at_the_tick_being_simulated() {
        let mut sched = Scheduler::new(ids(4));
        let mut rng = SimRng::new(3);
        let mut pop = Recorder::new(4);
        pop.active[0] = false;
        let stepped = sched.step(&mut pop, &mut rng).unwrap();
        assert_eq!(stepped, 3);
        assert!(pop.acted.iter().all(|&(a, t)| a != AgentId(0) && t == Tick(0)));
    }

    #[test]
    fn agent_deactivated_mid_tick_is_skipped_without_disturbing_the_others() {
        let mut sched = Scheduler::new(ids(10));
        let mut rng = SimRng::new(5);
        let mut pop = Recorder::new(10);
        let stepped = sched.step(&mut pop, &mut rng).unwrap();

        // Agent 0 acts only if the shuffle put it first.
        let zero_acted = pop.acted.iter().any(|&(a, _)| a == AgentId(0));
        assert_eq!(zero_acted, sched.agents()[0] == AgentId(0));
        assert_eq!(stepped, pop.acted.len());
        assert!(stepped >= 9);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut sched = Scheduler::new(ids(3));
        assert!(sched.remove(AgentId(1)));
        assert!(!sched.remove(AgentId(1)));
        assert_eq!(sched.len(), 2);
        sched.add(AgentId(1));
        assert_eq!(sched.len(), 3);
    }

    #[test]
    fn errors_propagate() {
        struct Failing;
        impl Population for Failing {
            type Error = &'static str;
            fn is_schedulable(&self, _: AgentId) -> bool {
                true
            }
            fn step_agent(&mut self, _: AgentId, _: Tick, _: &mut SimRng) -> Result<(), &'static str> {
                Err("boom")
            }
        }
        let mut sched = Scheduler::new(ids(2));
        let mut rng = SimRng::new(0);
        assert_eq!(sched.step(&mut Failing, &mut rng), Err("boom"));
        assert_eq!(sched.tick(), Tick(0), "clock does not advance on error");
    }
}

// ── Seeding ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod seeding {
    use seir_core::{DiseaseState, ModelConfig, Tick};

    use super::helpers::*;
    use crate::SeedPlan;

    fn quotas(plan: &SeedPlan, ticks: u64) -> Vec<usize> {
        (0..ticks).map(|t| plan.quota(Tick(t))).collect()
    }

    #[test]
    fn even_split() {
        assert_eq!(quotas(&SeedPlan::new(10, 10), 12), [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn remainder_goes_to_the_first_ticks() {
        let plan = SeedPlan::new(23, 10);
        assert_eq!(quotas(&plan, 10), [3, 3, 3, 2, 2, 2, 2, 2, 2, 2]);
        assert_eq!(quotas(&plan, 10).iter().sum::<usize>(), 23);
    }

    #[test]
    fn fewer_infections_than_ticks() {
        assert_eq!(quotas(&SeedPlan::new(5, 10), 10), [1, 1, 1, 1, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn no_transmission_means_exactly_the_seeded_infections() {
        let mut m = model(ModelConfig {
            population:     1000,
            width:          30,
            height:         30,
            transmission_p: 0.0,
            seed_fraction:  0.01,
            seed_duration:  10,
            ..config()
        });
        assert_eq!(m.seed_total(), 10);

        for _ in 0..10 {
            m.step().unwrap();
        }
        assert_eq!(m.seeded(), 10);

        for _ in 0..20 {
            m.step().unwrap();
        }
        assert_eq!(m.seeded(), 10);
        assert_eq!(m.susceptible_count(), 990);
        assert_eq!(1000 - m.susceptible_count(), m.seeded());
    }

    #[test]
    fn seeded_agents_skip_exposed() {
        let mut m = model(ModelConfig {
            population:     100,
            transmission_p: 0.0,
            track_exposed:  true,
            seed_fraction:  0.1,
            seed_duration:  10,
            ..config()
        });
        m.step().unwrap();
        assert_eq!(m.exposed_count(), 0);
        assert_eq!(m.infected_count(), 1);
    }

    #[test]
    fn seeding_stops_once_complete() {
        let mut m = model(ModelConfig { seed_duration: 1, transmission_p: 0.0, ..config() });
        m.step().unwrap();
        assert_eq!(m.seeded(), m.seed_total());
        let infected_after_seed = 200 - m.susceptible_count();
        m.step().unwrap();
        assert_eq!(200 - m.susceptible_count(), infected_after_seed);
        assert!(m.agents().iter().filter(|a| a.state() != DiseaseState::Susceptible).count() == 10);
    }
}

// ── Model dynamics ────────────────────────────────────────────────────────────

#[cfg(test)]
mod dynamics {
    use std::collections::HashMap;

    use seir_core::{Cell, DiseaseState, ModelConfig, Tick};

    use super::helpers::*;

    #[test]
    fn counts_are_conserved_every_tick() {
        let mut m = model(ModelConfig { track_exposed: true, track_deaths: true, ..config() });
        for _ in 0..40 {
            let counts = m.step().unwrap();
            assert_eq!(counts.total(), 200);
        }
    }

    #[test]
    fn states_never_move_backwards() {
        let mut m = model(ModelConfig { track_exposed: true, track_deaths: true, ..config() });
        let mut ranks: Vec<u8> = m.agents().iter().map(|a| a.state().rank()).collect();
        for _ in 0..40 {
            m.step().unwrap();
            for (agent, prev) in m.agents().iter().zip(ranks.iter_mut()) {
                let rank = agent.state().rank();
                assert!(rank >= *prev, "{} went backwards", agent.id());
                *prev = rank;
            }
        }
    }

    #[test]
    fn same_seed_same_run() {
        let mut a = model(ModelConfig { track_exposed: true, ..config() });
        let mut b = model(ModelConfig { track_exposed: true, ..config() });
        for _ in 0..25 {
            a.step().unwrap();
            b.step().unwrap();
        }
        assert_eq!(a.metrics().as_slice(), b.metrics().as_slice());
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn same_seed_same_counts_without_optional_compartments() {
        let cfg = ModelConfig {
            population:    1000,
            width:         30,
            height:        30,
            seed_fraction: 0.01,
            seed_duration: 10,
            track_exposed: false,
            track_deaths:  false,
            ..config()
        };
        let mut a = model(cfg.clone());
        let mut b = model(cfg);
        for _ in 0..60 {
            a.step().unwrap();
            b.step().unwrap();
        }
        assert_eq!(a.metrics().as_slice(), b.metrics().as_slice());
        assert_eq!(a.seeded(), 10);
        assert_eq!(b.seeded(), 10);
        assert!(a.metrics().iter().all(|c| c.exposed == 0 && c.dead == 0));
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = model(ModelConfig { seed: 1, ..config() });
        let mut b = model(ModelConfig { seed: 2, ..config() });
        a.step().unwrap();
        b.step().unwrap();
        assert_ne!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn every_living_agent_moves_one_cell_per_tick() {
        let mut m = model(ModelConfig {
            population: 100,
            width:      20,
            height:     20,
            ..config()
        });
        for _ in 0..5 {
            let before: HashMap<_, Cell> = m
                .agents()
                .agent_ids()
                .filter_map(|id| m.grid().position(id).map(|c| (id, c)))
                .collect();
            m.step().unwrap();
            for (id, from) in before {
                let to = m.grid().position(id).unwrap();
                assert!(from.is_moore_adjacent(to), "{id}: {from} -> {to}");
            }
        }
    }

    #[test]
    fn tracked_deaths_leave_the_grid() {
        let mut m = model(ModelConfig {
            track_deaths:      true,
            death_rate:        1.0,
            recover_days_mean: 2.0,
            seed_fraction:     0.1,
            seed_duration:     1,
            ..config()
        });
        for _ in 0..30 {
            m.step().unwrap();
            assert_eq!(m.recovered_count(), 0);
        }
        assert!(m.dead_count() >= 20);
        for agent in m.agents().iter() {
            let placed = m.grid().position(agent.id()).is_some();
            assert_eq!(placed, agent.state() != DiseaseState::Dead);
        }
        assert_eq!(m.grid().occupied_count(), 200 - m.dead_count());
        assert!(m.snapshot().iter().filter(|s| s.position.is_none()).all(|s| s.state == DiseaseState::Dead));
        assert_eq!(m.scheduler().len(), 200, "dead agents stay registered");
        assert_eq!(m.tick(), Tick(30));
    }

    #[test]
    fn untracked_deaths_count_as_recovered() {
        let mut m = model(ModelConfig {
            death_rate:        1.0,
            recover_days_mean: 2.0,
            seed_duration:     1,
            transmission_p:    0.0,
            ..config()
        });
        for _ in 0..5 {
            m.step().unwrap();
        }
        assert_eq!(m.dead_count(), 0);
        assert_eq!(m.recovered_count(), 10);
        assert_eq!(m.grid().occupied_count(), 200);
    }
}

// ── Metrics and observers ─────────────────────────────────────────────────────

#[cfg(test)]
mod metrics {
    use seir_core::{DiseaseState, ModelConfig, Tick};

    use super::helpers::*;
    use crate::{AgentSnapshot, NoopObserver, SimObserver, StateCounts};

    #[test]
    fn one_sample_per_step_keyed_by_completed_ticks() {
        let mut m = model(config());
        m.run(12, &mut NoopObserver).unwrap();
        assert_eq!(m.metrics().len(), 12);
        assert_eq!(m.metrics().as_slice()[0].tick, Tick(1));
        assert_eq!(m.metrics().last().unwrap().tick, Tick(12));
        assert_eq!(m.metrics().at(Tick(5)).unwrap().tick, Tick(5));
        assert!(m.metrics().at(Tick(0)).is_none());
        assert_eq!(m.metrics().series(DiseaseState::Susceptible).len(), 12);
    }

    #[test]
    fn last_sample_matches_live_counts() {
        let mut m = model(config());
        m.run(8, &mut NoopObserver).unwrap();
        assert_eq!(*m.metrics().last().unwrap(), m.counts());
        let last = m.counts();
        assert_eq!(last.get(DiseaseState::Infected), m.infected_count());
        assert_eq!(last.get(DiseaseState::Recovered), m.recovered_count());
    }

    #[derive(Default)]
    struct Counting {
        starts:    Vec<Tick>,
        ends:      Vec<StateCounts>,
        snapshots: Vec<(Tick, usize)>,
        finished:  Option<Tick>,
    }

    impl SimObserver for Counting {
        fn on_tick_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }
        fn on_tick_end(&mut self, counts: &StateCounts) {
            self.ends.push(*counts);
        }
        fn on_snapshot(&mut self, tick: Tick, agents: &[AgentSnapshot]) {
            self.snapshots.push((tick, agents.len()));
        }
        fn on_sim_end(&mut self, tick: Tick) {
            self.finished = Some(tick);
        }
    }

    #[test]
    fn observer_sees_every_tick_and_interval_snapshots() {
        let mut m = model(ModelConfig { snapshot_interval_ticks: 2, ..config() });
        let mut obs = Counting::default();
        m.run(5, &mut obs).unwrap();

        assert_eq!(obs.starts, [Tick(0), Tick(1), Tick(2), Tick(3), Tick(4)]);
        assert_eq!(obs.ends.len(), 5);
        assert_eq!(obs.ends.as_slice(), m.metrics().as_slice());
        assert_eq!(obs.snapshots, [(Tick(2), 200), (Tick(4), 200)]);
        assert_eq!(obs.finished, Some(Tick(5)));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let mut m = model(ModelConfig { snapshot_interval_ticks: 0, ..config() });
        let mut obs = Counting::default();
        m.run(3, &mut obs).unwrap();
        assert!(obs.snapshots.is_empty());
        assert_eq!(obs.ends.len(), 3);
    }
}
