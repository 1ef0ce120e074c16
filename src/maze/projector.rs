//! Projection of a carved grid into world space.
//!
//! The projector is read-only. It turns each remaining wall side into
//! - a [`WallTransform`] placing a scaled unit cube, for drawing
//! - a [`Plane`] facing into the owning cell, for collision
//!
//! and derives the player start and spawn positions. An interior wall is
//! stored on both of its cells, so it produces two transforms (coincident
//! boxes) and two planes (one facing each cell).

use crate::collision::Plane;
use crate::math::coordinates::{Direction, cell_center_offset, cell_to_world};
use crate::math::{Mat4, Vec3, Vec4};
use crate::maze::MazeConfig;
use crate::maze::generator::START_CELL;
use crate::maze::grid::{Grid, GridPos};

/// Rendering capability the projector draws walls through.
///
/// Each call means "set this model matrix, then draw one unit cube".
pub trait CubeDrawer {
    fn draw_cube(&mut self, model: &Mat4);
}

impl<F: FnMut(&Mat4)> CubeDrawer for F {
    fn draw_cube(&mut self, model: &Mat4) {
        self(model)
    }
}

/// World placement of one wall box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallTransform {
    /// Cell that owns this wall side.
    pub cell: GridPos,
    /// Side of `cell` the wall is on.
    pub side: Direction,
    /// Centre of the box.
    pub position: Vec3,
    /// Rotation about +Y in degrees: 0 for north/south walls, 90 for east/west.
    pub rotation_y: f32,
    /// Non-uniform scale applied to the unit cube before rotation.
    pub scale: Vec3,
}

impl WallTransform {
    /// `translation * rotation_y * scale`.
    pub fn model_matrix(&self) -> Mat4 {
        let p = self.position;
        Mat4::translation(p.x(), p.y(), p.z())
            .multiply(&Mat4::rotation_y(self.rotation_y))
            .multiply(&Mat4::scaling(
                self.scale.x(),
                self.scale.y(),
                self.scale.z(),
            ))
    }
}

/// GPU instance record for one wall.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WallInstance {
    /// Column-major model matrix.
    pub model: [[f32; 4]; 4],
}

/// [`CubeDrawer`] that records every cube as a [`WallInstance`].
#[derive(Debug, Default, Clone)]
pub struct InstanceCollector {
    pub instances: Vec<WallInstance>,
}

impl InstanceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes of all instances, ready for a vertex/instance buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl CubeDrawer for InstanceCollector {
    fn draw_cube(&mut self, model: &Mat4) {
        self.instances.push(WallInstance { model: model.0 });
    }
}

/// Unit vector pointing out of a cell through `side`.
fn outward(side: Direction) -> Vec3 {
    match side {
        Direction::North => Vec3::new(0.0, 0.0, -1.0),
        Direction::South => Vec3::new(0.0, 0.0, 1.0),
        Direction::East => Vec3::new(1.0, 0.0, 0.0),
        Direction::West => Vec3::new(-1.0, 0.0, 0.0),
    }
}

/// Borrowed view of a grid plus the world measurements to project it with.
#[derive(Debug, Clone, Copy)]
pub struct Projector<'a> {
    grid: &'a Grid,
    config: &'a MazeConfig,
}

impl<'a> Projector<'a> {
    pub fn new(grid: &'a Grid, config: &'a MazeConfig) -> Self {
        Self { grid, config }
    }

    /// Centre of `pos` on the floor plane (y = 0).
    fn cell_center(&self, pos: GridPos) -> Vec3 {
        cell_to_world(pos, self.grid.dimensions(), self.config.wall_size, 0.0)
    }

    /// Midpoint of the `side` wall of `pos` at y = 0.
    fn wall_midpoint(&self, pos: GridPos, side: Direction) -> Vec3 {
        self.cell_center(pos) + outward(side) * (self.config.wall_size / 2.0)
    }

    pub fn wall_transform(&self, pos: GridPos, side: Direction) -> WallTransform {
        let cfg = self.config;
        let mid = self.wall_midpoint(pos, side);
        WallTransform {
            cell: pos,
            side,
            position: Vec3::new(mid.x(), cfg.floor_y + cfg.wall_height / 2.0, mid.z()),
            rotation_y: if side.is_north_south() { 0.0 } else { 90.0 },
            scale: Vec3::new(cfg.wall_size, cfg.wall_height, cfg.wall_thickness),
        }
    }

    /// Plane of the `side` wall of `pos`, normal facing into the cell.
    pub fn wall_plane(&self, pos: GridPos, side: Direction) -> Plane {
        Plane::from_point_normal(self.wall_midpoint(pos, side), -outward(side))
    }

    /// One transform per remaining wall side, row-major then N/S/E/W.
    pub fn wall_transforms(&self) -> Vec<WallTransform> {
        self.grid
            .iter()
            .flat_map(|(pos, cell)| {
                cell.remaining_walls()
                    .map(move |side| self.wall_transform(pos, side))
            })
            .collect()
    }

    /// Feeds every wall transform to `drawer`. Returns the number of cubes drawn.
    pub fn draw<D: CubeDrawer + ?Sized>(&self, drawer: &mut D) -> usize {
        let mut drawn = 0;
        for (pos, cell) in self.grid.iter() {
            for side in cell.remaining_walls() {
                drawer.draw_cube(&self.wall_transform(pos, side).model_matrix());
                drawn += 1;
            }
        }
        drawn
    }

    /// One plane per remaining wall side across the whole grid.
    pub fn collision_planes(&self) -> Vec<Plane> {
        self.grid
            .iter()
            .flat_map(|(pos, cell)| {
                cell.remaining_walls()
                    .map(move |side| self.wall_plane(pos, side))
            })
            .collect()
    }

    /// Planes for the remaining walls of a single cell.
    ///
    /// # Panics
    /// If `pos` is outside the grid.
    pub fn cell_collision_planes(&self, pos: GridPos) -> Vec<Plane> {
        self.grid[pos]
            .remaining_walls()
            .map(|side| self.wall_plane(pos, side))
            .collect()
    }

    /// World position of [`START_CELL`] at eye height, as a point (w = 1).
    pub fn start_position(&self) -> Vec4 {
        let (width, height) = self.grid.dimensions();
        let size = self.config.wall_size;
        Vec4::new(
            cell_center_offset(START_CELL.x, width, size),
            self.config.eye_height,
            cell_center_offset(START_CELL.y, height, size),
            1.0,
        )
    }

    /// Eye-height position of the first visited cell in row-major order, or
    /// the world origin at eye height when no cell has been visited.
    pub fn spawn_position(&self) -> Vec3 {
        let eye = self.config.eye_height;
        self.grid
            .iter()
            .find(|(_, cell)| cell.visited)
            .map(|(pos, _)| {
                cell_to_world(pos, self.grid.dimensions(), self.config.wall_size, eye)
            })
            .unwrap_or(Vec3::new(0.0, eye, 0.0))
    }
}
