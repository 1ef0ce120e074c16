//! Conversions between grid cells and world positions.
//!
//! Cell `(x, y)` of a `width` x `height` maze is centred at
//! `((x - (width-1)/2) * wall_size, _, (y - (height-1)/2) * wall_size)`, which
//! places the centre of the whole maze at the world origin.

use crate::maze::grid::GridPos;
use crate::math::vec::Vec3;

/// World offset of the centre of cell `index` along an axis holding `count` cells.
pub fn cell_center_offset(index: usize, count: usize, wall_size: f32) -> f32 {
    (index as f32 - (count as f32 - 1.0) / 2.0) * wall_size
}

/// Converts a grid cell to the world position of its centre at height `y_position`.
///
/// # Coordinate System
/// - Origin (0,0,0) is at the centre of the maze
/// - X increases to the east
/// - Y increases upwards
/// - Z increases to the south
pub fn cell_to_world(
    pos: GridPos,
    maze_dimensions: (usize, usize),
    wall_size: f32,
    y_position: f32,
) -> Vec3 {
    let (width, height) = maze_dimensions;
    Vec3::new(
        cell_center_offset(pos.x, width, wall_size),
        y_position,
        cell_center_offset(pos.y, height, wall_size),
    )
}

/// Converts a world position to the grid cell whose footprint contains it.
///
/// The y-coordinate is ignored. Returns `None` outside the maze footprint.
pub fn world_to_cell(
    position: Vec3,
    maze_dimensions: (usize, usize),
    wall_size: f32,
) -> Option<GridPos> {
    let (width, height) = maze_dimensions;

    let col = (position.x() / wall_size + width as f32 / 2.0).floor();
    let row = (position.z() / wall_size + height as f32 / 2.0).floor();

    if col < 0.0 || row < 0.0 || col >= width as f32 || row >= height as f32 {
        return None;
    }

    Some(GridPos::new(col as usize, row as usize))
}
