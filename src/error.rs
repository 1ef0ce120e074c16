//! Error type shared by maze construction and grid operations.

use crate::maze::grid::GridPos;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MazeError {
    #[error("maze dimensions must be positive and fit in memory, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("wall size must be a positive finite number, got {0}")]
    InvalidWallSize(f32),

    #[error("{name} must be a positive finite number, got {value}")]
    InvalidWallExtent { name: &'static str, value: f32 },

    #[error("maze has already been generated")]
    AlreadyGenerated,

    #[error("cell ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("cells {from:?} and {to:?} are not orthogonal neighbours")]
    NotAdjacent { from: GridPos, to: GridPos },
}

pub type Result<T> = std::result::Result<T, MazeError>;
