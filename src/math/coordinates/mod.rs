//! Coordinate system transformations for the maze.
//!
//! Two coordinate systems are in play:
//! - Grid coordinates: `(x, y)` cell indices, `y` growing towards the south
//! - World coordinates: 3D space, maze centred on the origin in the X-Z plane,
//!   grid `x` along world +X and grid `y` along world +Z, Y up
//!
//! It also provides the cardinal [`Direction`] type that ties a wall slot to a
//! grid step.

mod positions;
mod transformations;

pub use positions::*;
pub use transformations::*;

/// Default world-space measurements for a maze.
pub mod constants {
    /// Height of the player's eye above the floor. Spawn points sit at this height.
    pub const EYE_HEIGHT: f32 = 1.7;

    /// Height of a wall box.
    pub const WALL_HEIGHT: f32 = 12.0;

    /// Thickness of a wall box.
    pub const WALL_THICKNESS: f32 = 0.1;

    /// World Y of the floor the walls stand on.
    pub const FLOOR_Y: f32 = -0.5;

    /// Default edge length of one cell.
    pub const WALL_SIZE: f32 = 4.0;
}
