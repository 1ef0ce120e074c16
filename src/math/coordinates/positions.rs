//! Cardinal directions and grid stepping.

use crate::maze::grid::GridPos;

/// A side of a cell, and the direction of the step across it.
///
/// The discriminant is the index of the matching slot in [`Cell::walls`].
///
/// [`Cell::walls`]: crate::maze::grid::Cell::walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards `y - 1` (world -Z).
    North = 0,
    /// Towards `y + 1` (world +Z).
    South = 1,
    /// Towards `x + 1` (world +X).
    East = 2,
    /// Towards `x - 1` (world -X).
    West = 3,
}

impl Direction {
    /// All directions in wall-slot order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Index of this side in a cell's wall array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The side facing back across the same wall.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Grid step `(dx, dy)` for this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// Whether walls on this side run along the X axis (unrotated boxes).
    pub fn is_north_south(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Direction of the step from `from` to `to`, if they are orthogonal neighbours.
    pub fn between(from: GridPos, to: GridPos) -> Option<Direction> {
        let dx = to.x as isize - from.x as isize;
        let dy = to.y as isize - from.y as isize;

        match (dx, dy) {
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            (0, 1) => Some(Direction::South),
            (0, -1) => Some(Direction::North),
            _ => None,
        }
    }
}

/// Gets the cell adjacent to `pos` in `direction`.
///
/// # Returns
/// `None` if the step would leave a `width` x `height` grid.
pub fn get_adjacent_cell(
    pos: GridPos,
    direction: Direction,
    maze_dimensions: (usize, usize),
) -> Option<GridPos> {
    let (width, height) = maze_dimensions;
    let GridPos { x, y } = pos;

    match direction {
        Direction::North if y > 0 => Some(GridPos::new(x, y - 1)),
        Direction::South if y + 1 < height => Some(GridPos::new(x, y + 1)),
        Direction::East if x + 1 < width => Some(GridPos::new(x + 1, y)),
        Direction::West if x > 0 => Some(GridPos::new(x - 1, y)),
        _ => None,
    }
}
