//! `seir-core`: foundational types for the grid SEIR simulator.
//!
//! Every other `seir-*` crate depends on this one.  It has no `seir-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `AgentId`                                         |
//! | [`cell`]    | `Cell` grid coordinate                            |
//! | [`time`]    | `Tick`, `SimClock`                                |
//! | [`state`]   | `DiseaseState`                                    |
//! | [`rng`]     | `SimRng` (the single random source of a run)      |
//! | [`config`]  | `ModelConfig` and its validation                  |
//! | [`error`]   | `EpiError`, `EpiResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod state;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::ModelConfig;
pub use error::{EpiError, EpiResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use state::DiseaseState;
pub use time::{SimClock, Tick};
