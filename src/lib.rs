//! Maze Carver - maze generation and wall collision geometry.
//!
//! This crate carves rectangular mazes with a randomized depth-first
//! backtracker and projects the result into world space: one box transform per
//! wall for drawing, one plane per wall side for collision, and start/spawn
//! positions for the player.
//!
//! # Architecture
//! - `maze/`: grid model, generator and world projector, plus the [`Maze`] facade
//! - `collision`: sphere, plane, ray and box primitives and their tests
//! - `math/`: vectors, matrices and grid/world coordinate mapping
//! - `error`: the [`MazeError`] type
//!
//! Drawing goes through the [`CubeDrawer`] trait, so no graphics API is
//! linked here.
//!
//! [`Maze`]: maze::Maze
//! [`CubeDrawer`]: maze::projector::CubeDrawer

pub mod collision;
pub mod error;
pub mod math;
pub mod maze;

pub use error::{MazeError, Result};
pub use maze::{Maze, MazeConfig};
