//! Grid error type.

use thiserror::Error;

use seir_core::Cell;

/// Errors produced by `seir-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds { cell: Cell, width: u32, height: u32 },
}

pub type GridResult<T> = Result<T, GridError>;
