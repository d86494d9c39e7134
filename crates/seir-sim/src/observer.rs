//! Simulation observer trait for progress reporting and data collection.

use seir_core::Tick;

use crate::{AgentSnapshot, StateCounts};

/// Callbacks invoked by [`EpidemicModel::run`][crate::EpidemicModel::run] at
/// key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, counts: &StateCounts) {
///         println!("{}: {} infected", counts.tick, counts.infected);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before seeding, with the tick about to be simulated.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's counts have been recorded.
    fn on_tick_end(&mut self, _counts: &StateCounts) {}

    /// Called every `config.snapshot_interval_ticks` completed ticks with the
    /// position and state of every agent, dead ones included.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[AgentSnapshot]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
