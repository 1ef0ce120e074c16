//! Maze generation and world projection.
//!
//! A [`Maze`] owns a fixed-size [`Grid`] and the world measurements it is
//! projected with. Its lifecycle is:
//!
//! 1. [`Maze::new`] / [`Maze::with_config`] validates the configuration and
//!    creates a closed, unvisited grid
//! 2. [`Maze::generate`] carves the passages, exactly once
//! 3. the projection queries ([`Maze::draw`], [`Maze::collision_planes`],
//!    [`Maze::start_player_position`], [`Maze::valid_spawn_position`]) are
//!    called as often as needed
//!
//! # Example
//!
//! ```rust
//! use maze_carver::maze::Maze;
//!
//! let mut maze = Maze::new(5, 5, 2.0).unwrap();
//! maze.generate().unwrap();
//!
//! let start = maze.start_player_position();
//! assert_eq!((start.x(), start.z()), (-4.0, -4.0));
//! assert_eq!(maze.collision_planes().len(), maze.grid().wall_count());
//! ```

pub mod generator;
pub mod grid;
pub mod projector;

use self::generator::CarveStats;
use self::grid::{Cell, Grid, GridPos};
use self::projector::{CubeDrawer, Projector, WallTransform};
use crate::collision::Plane;
use crate::error::{MazeError, Result};
use crate::math::coordinates::{Direction, constants, world_to_cell};
use crate::math::{Vec3, Vec4};
use log::{debug, warn};
use rand::Rng;
use std::fmt;
use std::time::Instant;

/// Dimensions and world measurements of a maze.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeConfig {
    /// Number of cells along X.
    pub width: usize,
    /// Number of cells along Z.
    pub height: usize,
    /// World edge length of one cell.
    pub wall_size: f32,
    /// Height of the wall boxes.
    pub wall_height: f32,
    /// Thickness of the wall boxes.
    pub wall_thickness: f32,
    /// World Y of the floor the walls stand on.
    pub floor_y: f32,
    /// Height of start and spawn positions.
    pub eye_height: f32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            wall_size: constants::WALL_SIZE,
            wall_height: constants::WALL_HEIGHT,
            wall_thickness: constants::WALL_THICKNESS,
            floor_y: constants::FLOOR_Y,
            eye_height: constants::EYE_HEIGHT,
        }
    }
}

impl MazeConfig {
    /// Checks that dimensions are positive with a cell count that fits in
    /// memory, and that sizes are positive and finite.
    pub fn validate(&self) -> Result<()> {
        let bytes = self
            .width
            .checked_mul(self.height)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<Cell>()));
        let fits = bytes.is_some_and(|b| b <= isize::MAX as usize);
        if self.width == 0 || self.height == 0 || !fits {
            return Err(MazeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.wall_size.is_finite() && self.wall_size > 0.0) {
            return Err(MazeError::InvalidWallSize(self.wall_size));
        }
        for (name, value) in [
            ("wall height", self.wall_height),
            ("wall thickness", self.wall_thickness),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(MazeError::InvalidWallExtent { name, value });
            }
        }
        Ok(())
    }
}

/// A rectangular maze, its carving state and its world placement.
#[derive(Debug, Clone)]
pub struct Maze {
    config: MazeConfig,
    grid: Grid,
    generated: bool,
}

impl Maze {
    /// Creates an uncarved `width` x `height` maze with default wall
    /// measurements and cells `wall_size` wide.
    pub fn new(width: usize, height: usize, wall_size: f32) -> Result<Self> {
        Self::with_config(MazeConfig {
            width,
            height,
            wall_size,
            ..MazeConfig::default()
        })
    }

    /// Creates an uncarved maze from a full configuration.
    pub fn with_config(config: MazeConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "created {}x{} maze, cell size {}",
            config.width, config.height, config.wall_size
        );
        Ok(Self {
            grid: Grid::new(config.width, config.height),
            config,
            generated: false,
        })
    }

    /// Carves the maze using OS entropy for neighbour selection.
    ///
    /// # Errors
    /// [`MazeError::AlreadyGenerated`] if called more than once.
    pub fn generate(&mut self) -> Result<CarveStats> {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Carves the maze with a caller-supplied random source.
    ///
    /// Seeding `rng` makes the result reproducible.
    pub fn generate_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<CarveStats> {
        if self.generated {
            warn!("generate called on a maze that is already carved");
            return Err(MazeError::AlreadyGenerated);
        }

        let started = Instant::now();
        let stats = generator::carve(&mut self.grid, rng);
        self.generated = true;

        debug!(
            "carved {}x{} maze: {} cells visited, {} passages, {} steps in {:?}",
            self.config.width,
            self.config.height,
            stats.visited,
            stats.passages,
            stats.steps,
            started.elapsed()
        );
        Ok(stats)
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn wall_size(&self) -> f32 {
        self.config.wall_size
    }

    pub fn projector(&self) -> Projector<'_> {
        Projector::new(&self.grid, &self.config)
    }

    /// Draws one cube per remaining wall through `drawer`. Returns the number drawn.
    pub fn draw<D: CubeDrawer + ?Sized>(&self, drawer: &mut D) -> usize {
        self.projector().draw(drawer)
    }

    /// World placements of every remaining wall.
    pub fn wall_transforms(&self) -> Vec<WallTransform> {
        self.projector().wall_transforms()
    }

    /// One plane per remaining wall side, each facing into the cell that owns
    /// it. The order is not meaningful.
    pub fn collision_planes(&self) -> Vec<Plane> {
        self.projector().collision_planes()
    }

    /// Collision planes of a single cell.
    pub fn cell_collision_planes(&self, pos: GridPos) -> Result<Vec<Plane>> {
        self.check_bounds(pos)?;
        Ok(self.projector().cell_collision_planes(pos))
    }

    /// Player start: centre of the start cell at eye height, with w = 1.
    pub fn start_player_position(&self) -> Vec4 {
        self.projector().start_position()
    }

    /// First visited cell in row-major order, at eye height.
    pub fn valid_spawn_position(&self) -> Vec3 {
        self.projector().spawn_position()
    }

    /// Grid cell under a world position, if inside the maze footprint.
    pub fn cell_at(&self, position: Vec3) -> Option<GridPos> {
        world_to_cell(position, self.grid.dimensions(), self.config.wall_size)
    }

    /// Whether `pos` still has a wall on `side`.
    pub fn has_wall(&self, pos: GridPos, side: Direction) -> Result<bool> {
        self.check_bounds(pos)?;
        Ok(self.grid[pos].has_wall(side))
    }

    fn check_bounds(&self, pos: GridPos) -> Result<()> {
        if self.grid.contains(pos) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.config.width,
                height: self.config.height,
            })
        }
    }

    /// Renders the maze as text: `#` for walls and corners, spaces for cells
    /// and open sides, on a `(2w + 1) x (2h + 1)` character grid.
    pub fn to_ascii(&self) -> String {
        let (width, height) = self.grid.dimensions();
        let cols = width * 2 + 1;
        let rows = height * 2 + 1;
        let mut chars = vec![vec!['#'; cols]; rows];

        for (pos, cell) in self.grid.iter() {
            let (r, c) = (pos.y * 2 + 1, pos.x * 2 + 1);
            chars[r][c] = ' ';
            for side in Direction::ALL {
                if !cell.has_wall(side) {
                    let (dx, dy) = side.offset();
                    let wr = (r as isize + dy) as usize;
                    let wc = (c as isize + dx) as usize;
                    chars[wr][wc] = ' ';
                }
            }
        }

        let mut out = String::with_capacity(rows * (cols + 1));
        for row in chars {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generated(width: usize, height: usize, seed: u64) -> Maze {
        let mut maze = Maze::new(width, height, 2.0).unwrap();
        maze.generate_with_rng(&mut StdRng::seed_from_u64(seed)).unwrap();
        maze
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert_eq!(
            Maze::new(0, 5, 1.0).unwrap_err(),
            MazeError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
        assert!(matches!(
            Maze::new(3, 0, 1.0),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert_eq!(
            Maze::new(usize::MAX, 2, 1.0).unwrap_err(),
            MazeError::InvalidDimensions {
                width: usize::MAX,
                height: 2
            }
        );
        assert!(matches!(
            Maze::new(usize::MAX, 1, 1.0),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert_eq!(
            Maze::new(3, 3, 0.0).unwrap_err(),
            MazeError::InvalidWallSize(0.0)
        );
        assert!(matches!(
            Maze::new(3, 3, -2.0),
            Err(MazeError::InvalidWallSize(_))
        ));
        assert!(matches!(
            Maze::new(3, 3, f32::NAN),
            Err(MazeError::InvalidWallSize(_))
        ));
        let thin = MazeConfig {
            wall_thickness: 0.0,
            ..MazeConfig::default()
        };
        assert!(matches!(
            Maze::with_config(thin),
            Err(MazeError::InvalidWallExtent {
                name: "wall thickness",
                ..
            })
        ));
    }

    #[test]
    fn test_generate_twice_is_rejected() {
        let mut maze = generated(4, 4, 1);
        let before = maze.grid().clone();
        assert_eq!(maze.generate(), Err(MazeError::AlreadyGenerated));
        assert_eq!(maze.grid(), &before);
    }

    #[test]
    fn test_fresh_maze_is_closed() {
        let maze = Maze::new(3, 3, 1.0).unwrap();
        assert!(!maze.is_generated());
        assert_eq!(maze.collision_planes().len(), 36);
        assert_eq!(maze.valid_spawn_position(), Vec3::new(0.0, 1.7, 0.0));
    }

    #[test]
    fn test_plane_count_matches_remaining_walls() {
        let maze = generated(7, 5, 8);
        let walls = maze.grid().wall_count();
        assert_eq!(maze.collision_planes().len(), walls);
        assert_eq!(maze.wall_transforms().len(), walls);
        // 4 per cell, minus both sides of every passage, minus the exit.
        assert_eq!(walls, 7 * 5 * 4 - 2 * (7 * 5 - 1) - 1);
    }

    #[test]
    fn test_spawn_after_generation_is_start_cell() {
        let maze = generated(6, 3, 5);
        let start = maze.start_player_position();
        assert_eq!(maze.valid_spawn_position(), start.truncate());
        assert_eq!(start.w(), 1.0);
    }

    #[test]
    fn test_cell_at_round_trips_spawn() {
        let maze = generated(4, 6, 2);
        assert_eq!(
            maze.cell_at(maze.valid_spawn_position()),
            Some(GridPos::new(0, 0))
        );
        assert_eq!(maze.cell_at(Vec3::new(100.0, 0.0, 0.0)), None);
    }

    #[test]
    fn test_checked_queries_reject_out_of_range() {
        let maze = generated(2, 2, 0);
        assert!(matches!(
            maze.has_wall(GridPos::new(2, 0), Direction::North),
            Err(MazeError::OutOfBounds { x: 2, y: 0, .. })
        ));
        assert!(maze.cell_collision_planes(GridPos::new(0, 5)).is_err());
        assert_eq!(
            maze.has_wall(GridPos::new(0, 0), Direction::North),
            Ok(false)
        );
    }

    #[test]
    fn test_ascii_layout() {
        let mut maze = Maze::new(2, 1, 1.0).unwrap();
        maze.generate_with_rng(&mut StdRng::seed_from_u64(0)).unwrap();
        // Only one spanning tree exists for 2x1; the exit opens above (0, 0).
        assert_eq!(maze.to_ascii(), "# ###\n#   #\n#####\n");
        assert_eq!(maze.to_string(), maze.to_ascii());
    }
}
