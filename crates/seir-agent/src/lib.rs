//! `seir-agent`: agents, their disease state machine, and what they do each
//! tick.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`agent`]    | `Agent`, `Condition` (state + the timers that go with it) |
//! | [`params`]   | `DiseaseParams`: transmission, mortality, duration draws  |
//! | [`store`]    | `AgentStore`, indexed by `AgentId`                        |
//! | [`builder`]  | `AgentStoreBuilder` (population with drawn ages)          |
//! | [`behavior`] | `status`, `contact`, `move_agent`, `step_agent`           |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                            |
//!
//! # Per-tick order
//!
//! Every schedulable agent runs **status → contact → move**.  Each behaviour
//! reads the agent's state as it is when the behaviour starts, so an agent
//! makes at most one transition per behaviour and an agent infected by
//! `contact` does not progress until the next tick.

pub mod agent;
pub mod behavior;
pub mod builder;
pub mod error;
pub mod params;
pub mod store;


pub use agent::{Agent, Condition};
pub use behavior::{TickContext, contact, is_schedulable, move_agent, status, step_agent};
pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use params::{DiseaseParams, age_factor};
pub use store::AgentStore;
