//! `seir-grid`: the spatial lattice agents live on.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`grid`]  | `Grid`: cell occupancy, per-agent positions, Moore queries |
//! | [`error`] | `GridError`, `GridResult<T>`                               |

pub mod error;
pub mod grid;


pub use error::{GridError, GridResult};
pub use grid::Grid;
