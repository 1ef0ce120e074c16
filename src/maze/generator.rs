//! Maze carving with a randomized depth-first backtracker.
//!
//! The carver keeps an explicit stack of cells that may still have unvisited
//! neighbours, so grid size is limited by memory rather than call depth.
//! Each step either opens a wall to a random unvisited neighbour and moves
//! there, or pops the stack when the current cell is a dead end.
//!
//! The result is a spanning tree over the grid: every cell is visited and
//! exactly `width * height - 1` interior walls are opened.
//!
//! # Examples
//!
//! ```rust
//! use maze_carver::maze::generator::carve;
//! use maze_carver::maze::grid::Grid;
//! use rand::SeedableRng;
//!
//! let mut grid = Grid::new(8, 8);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let stats = carve(&mut grid, &mut rng);
//!
//! assert!(grid.all_visited());
//! assert_eq!(stats.passages, 63);
//! ```

use crate::math::coordinates::Direction;
use crate::maze::grid::{Grid, GridPos};
use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;

/// Cell the carver starts from. Its north wall becomes the maze exit.
pub const START_CELL: GridPos = GridPos::new(0, 0);

/// Side of [`START_CELL`] that is opened to the outside after carving.
pub const EXIT_SIDE: Direction = Direction::North;

/// What a single [`Backtracker::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Opened the wall between two cells and moved into `to`.
    Carved { from: GridPos, to: GridPos },
    /// `at` had no unvisited neighbours and was popped.
    Backtracked { at: GridPos },
    /// The stack is empty; nothing left to do.
    Complete,
}

/// Summary of a finished carve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CarveStats {
    /// Cells marked visited, including the start cell.
    pub visited: usize,
    /// Interior walls opened.
    pub passages: usize,
    /// Total steps taken, carving and backtracking.
    pub steps: usize,
}

/// Step-wise recursive backtracker.
///
/// The backtracker only holds the traversal stack; the grid it works on is
/// passed to every [`step`](Self::step), so the caller keeps ownership.
#[derive(Debug, Clone)]
pub struct Backtracker {
    stack: Vec<GridPos>,
    stats: CarveStats,
}

impl Backtracker {
    /// Marks [`START_CELL`] visited and pushes it as the first frame.
    ///
    /// An empty grid yields a backtracker that is already complete.
    pub fn start(grid: &mut Grid) -> Self {
        if grid.is_empty() {
            return Self {
                stack: Vec::new(),
                stats: CarveStats::default(),
            };
        }
        grid[START_CELL].visited = true;
        Self {
            stack: vec![START_CELL],
            stats: CarveStats {
                visited: 1,
                ..CarveStats::default()
            },
        }
    }

    /// Performs one carve-or-backtrack step.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> Step {
        let Some(&current) = self.stack.last() else {
            return Step::Complete;
        };
        self.stats.steps += 1;

        let mut candidates = grid.unvisited_neighbours(current);
        candidates.shuffle(rng);

        match candidates.first() {
            Some(&(direction, next)) => {
                grid.remove_wall(current, direction);
                grid[next].visited = true;
                self.stack.push(next);
                self.stats.visited += 1;
                self.stats.passages += 1;
                Step::Carved {
                    from: current,
                    to: next,
                }
            }
            None => {
                self.stack.pop();
                trace!("backtracked from ({}, {})", current.x, current.y);
                Step::Backtracked { at: current }
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.stack.is_empty()
    }

    /// Current stack depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn stats(&self) -> CarveStats {
        self.stats
    }
}

/// Carves `grid` to completion and opens the exit on [`START_CELL`].
///
/// `grid` is expected to be fresh (all walls up, nothing visited). The exit is
/// opened whether or not carving already cleared that side. An empty grid is
/// left as is.
pub fn carve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> CarveStats {
    if grid.is_empty() {
        return CarveStats::default();
    }
    let mut backtracker = Backtracker::start(grid);
    while backtracker.step(grid, rng) != Step::Complete {}

    grid.remove_wall(START_CELL, EXIT_SIDE);
    backtracker.stats()
}
