//! The cell grid a maze is carved into.
//!
//! Cells are stored in one flat `Vec` indexed by `y * width + x`. Every wall
//! between two neighbours is stored twice, once on each side, and the
//! mutation helpers here keep both copies in sync.

use crate::error::{MazeError, Result};
use crate::math::coordinates::{Direction, get_adjacent_cell};
use std::ops::{Index, IndexMut};

/// Grid coordinate of a cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    /// Column, growing to the east.
    pub x: usize,
    /// Row, growing to the south.
    pub y: usize,
}

impl GridPos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// One maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Whether the generator has reached this cell.
    pub visited: bool,
    /// Wall presence indexed by [`Direction::index`]: North, South, East, West.
    pub walls: [bool; 4],
}

impl Default for Cell {
    /// A fresh cell is unvisited and closed on all four sides.
    fn default() -> Self {
        Self {
            visited: false,
            walls: [true; 4],
        }
    }
}

impl Cell {
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// Sides that still have a wall, in wall-slot order.
    pub fn remaining_walls(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |d| self.has_wall(*d))
    }
}

/// Fixed-size rectangular grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `width` x `height` grid of closed, unvisited cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn offset(&self, pos: GridPos) -> Option<usize> {
        self.contains(pos).then(|| pos.y * self.width + pos.x)
    }

    pub fn get(&self, pos: GridPos) -> Option<&Cell> {
        self.offset(pos).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, pos: GridPos) -> Option<&mut Cell> {
        self.offset(pos).map(move |i| &mut self.cells[i])
    }

    /// All positions in row-major order (`y` outer, `x` inner).
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + use<> {
        let (width, height) = self.dimensions();
        (0..height).flat_map(move |y| (0..width).map(move |x| GridPos::new(x, y)))
    }

    /// Cells paired with their positions, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &Cell)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    pub fn neighbour(&self, pos: GridPos, direction: Direction) -> Option<GridPos> {
        get_adjacent_cell(pos, direction, self.dimensions())
    }

    /// In-bounds neighbours of `pos` that have not been visited yet, in
    /// North, South, East, West order.
    pub fn unvisited_neighbours(&self, pos: GridPos) -> Vec<(Direction, GridPos)> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.neighbour(pos, dir).map(|n| (dir, n)))
            .filter(|(_, n)| !self[*n].visited)
            .collect()
    }

    /// Neighbours reachable from `pos` through an open side.
    pub fn open_neighbours(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        self[pos]
            .walls
            .iter()
            .zip(Direction::ALL)
            .filter(|(wall, _)| !**wall)
            .filter_map(move |(_, dir)| self.neighbour(pos, dir))
    }

    /// Opens the `direction` side of `pos`, and the facing side of the
    /// neighbour when there is one. On the outer boundary only the cell's own
    /// wall is cleared.
    ///
    /// # Panics
    /// If `pos` is outside the grid.
    pub fn remove_wall(&mut self, pos: GridPos, direction: Direction) {
        self[pos].walls[direction.index()] = false;
        if let Some(n) = self.neighbour(pos, direction) {
            self[n].walls[direction.opposite().index()] = false;
        }
    }

    /// Opens the shared wall between two orthogonal neighbours.
    pub fn remove_wall_between(&mut self, from: GridPos, to: GridPos) -> Result<()> {
        for pos in [from, to] {
            if !self.contains(pos) {
                return Err(MazeError::OutOfBounds {
                    x: pos.x,
                    y: pos.y,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        let direction = Direction::between(from, to).ok_or(MazeError::NotAdjacent { from, to })?;
        self.remove_wall(from, direction);
        Ok(())
    }

    /// Number of wall sides still standing, counting both sides of interior walls.
    pub fn wall_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.walls.iter().filter(|w| **w).count())
            .sum()
    }

    /// Number of open interior walls, each counted once.
    pub fn passage_count(&self) -> usize {
        self.iter()
            .map(|(pos, cell)| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|d| !cell.has_wall(*d) && self.neighbour(pos, *d).is_some())
                    .count()
            })
            .sum()
    }

    /// True for a grid with a zero dimension.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn all_visited(&self) -> bool {
        self.cells.iter().all(|c| c.visited)
    }
}

impl Index<GridPos> for Grid {
    type Output = Cell;

    /// # Panics
    /// If `pos` is outside the grid.
    fn index(&self, pos: GridPos) -> &Cell {
        match self.offset(pos) {
            Some(i) => &self.cells[i],
            None => panic!(
                "cell ({}, {}) out of bounds for {}x{} grid",
                pos.x, pos.y, self.width, self.height
            ),
        }
    }
}

impl IndexMut<GridPos> for Grid {
    fn index_mut(&mut self, pos: GridPos) -> &mut Cell {
        match self.offset(pos) {
            Some(i) => &mut self.cells[i],
            None => panic!(
                "cell ({}, {}) out of bounds for {}x{} grid",
                pos.x, pos.y, self.width, self.height
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cells_are_closed_and_unvisited() {
        let grid = Grid::new(3, 2);
        assert_eq!(grid.dimensions(), (3, 2));
        for (_, cell) in grid.iter() {
            assert!(!cell.visited);
            assert_eq!(cell.walls, [true; 4]);
        }
        assert_eq!(grid.wall_count(), 3 * 2 * 4);
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    fn test_positions_are_row_major() {
        let grid = Grid::new(2, 2);
        let order: Vec<GridPos> = grid.positions().collect();
        assert_eq!(
            order,
            vec![
                GridPos::new(0, 0),
                GridPos::new(1, 0),
                GridPos::new(0, 1),
                GridPos::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_remove_wall_between_is_symmetric() {
        let mut grid = Grid::new(3, 3);
        let c = GridPos::new(1, 1);

        grid.remove_wall_between(c, GridPos::new(2, 1)).unwrap();
        assert!(!grid[c].has_wall(Direction::East));
        assert!(!grid[GridPos::new(2, 1)].has_wall(Direction::West));

        grid.remove_wall_between(c, GridPos::new(0, 1)).unwrap();
        assert!(!grid[c].has_wall(Direction::West));
        assert!(!grid[GridPos::new(0, 1)].has_wall(Direction::East));

        grid.remove_wall_between(c, GridPos::new(1, 2)).unwrap();
        assert!(!grid[c].has_wall(Direction::South));
        assert!(!grid[GridPos::new(1, 2)].has_wall(Direction::North));

        grid.remove_wall_between(c, GridPos::new(1, 0)).unwrap();
        assert!(!grid[c].has_wall(Direction::North));
        assert!(!grid[GridPos::new(1, 0)].has_wall(Direction::South));

        assert_eq!(grid.passage_count(), 4);
        assert_eq!(grid.wall_count(), 36 - 8);
    }

    #[test]
    fn test_remove_wall_between_rejects_bad_pairs() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(
            grid.remove_wall_between(GridPos::new(0, 0), GridPos::new(1, 1)),
            Err(MazeError::NotAdjacent {
                from: GridPos::new(0, 0),
                to: GridPos::new(1, 1)
            })
        );
        assert!(matches!(
            grid.remove_wall_between(GridPos::new(2, 2), GridPos::new(3, 2)),
            Err(MazeError::OutOfBounds { x: 3, y: 2, .. })
        ));
        assert_eq!(grid, Grid::new(3, 3));
    }

    #[test]
    fn test_boundary_wall_removal_touches_one_cell() {
        let mut grid = Grid::new(2, 2);
        grid.remove_wall(GridPos::new(0, 0), Direction::North);
        assert!(!grid[GridPos::new(0, 0)].has_wall(Direction::North));
        assert_eq!(grid.wall_count(), 15);
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    fn test_unvisited_neighbours_skip_visited_and_out_of_range() {
        let mut grid = Grid::new(2, 2);
        grid[GridPos::new(1, 0)].visited = true;
        let n = grid.unvisited_neighbours(GridPos::new(0, 0));
        assert_eq!(n, vec![(Direction::South, GridPos::new(0, 1))]);
    }

    #[test]
    fn test_open_neighbours_follow_passages() {
        let mut grid = Grid::new(3, 1);
        grid
            .remove_wall_between(GridPos::new(0, 0), GridPos::new(1, 0))
            .unwrap();
        grid.remove_wall(GridPos::new(1, 0), Direction::North);
        let open: Vec<GridPos> = grid.open_neighbours(GridPos::new(1, 0)).collect();
        assert_eq!(open, vec![GridPos::new(0, 0)]);
    }

    #[test]
    fn test_checked_access() {
        let grid = Grid::new(2, 3);
        assert!(grid.get(GridPos::new(1, 2)).is_some());
        assert!(grid.get(GridPos::new(2, 0)).is_none());
        assert!(grid.get(GridPos::new(0, 3)).is_none());

        let mut grid = grid;
        if let Some(cell) = grid.get_mut(GridPos::new(1, 1)) {
            cell.visited = true;
        }
        assert!(grid[GridPos::new(1, 1)].visited);
        assert!(grid.get_mut(GridPos::new(5, 5)).is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_range_panics() {
        let grid = Grid::new(2, 2);
        let _ = grid[GridPos::new(2, 0)];
    }
}
