//! Property tests over randomly sized, randomly seeded mazes.

use maze_carver::collision::{Sphere, check_sphere_plane_collision};
use maze_carver::math::Vec3;
use maze_carver::math::coordinates::{Direction, cell_to_world};
use maze_carver::maze::Maze;
use maze_carver::maze::generator::{EXIT_SIDE, START_CELL};
use maze_carver::maze::grid::GridPos;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashSet, VecDeque};

fn generated(width: usize, height: usize, seed: u64) -> Maze {
    let mut maze = Maze::new(width, height, 2.0).unwrap();
    maze.generate_with_rng(&mut StdRng::seed_from_u64(seed)).unwrap();
    maze
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_cell_is_visited(w in 1usize..16, h in 1usize..16, seed in any::<u64>()) {
        let maze = generated(w, h, seed);
        prop_assert!(maze.grid().all_visited());
    }

    #[test]
    fn walls_agree_across_every_shared_side(w in 1usize..16, h in 1usize..16, seed in any::<u64>()) {
        let maze = generated(w, h, seed);
        let grid = maze.grid();
        for (pos, cell) in grid.iter() {
            for dir in Direction::ALL {
                if let Some(n) = grid.neighbour(pos, dir) {
                    prop_assert_eq!(cell.has_wall(dir), grid[n].has_wall(dir.opposite()));
                }
            }
        }
    }

    #[test]
    fn passages_form_a_spanning_tree(w in 1usize..16, h in 1usize..16, seed in any::<u64>()) {
        let maze = generated(w, h, seed);
        let grid = maze.grid();
        prop_assert_eq!(grid.passage_count(), w * h - 1);

        let mut seen = HashSet::from([START_CELL]);
        let mut queue = VecDeque::from([START_CELL]);
        while let Some(pos) = queue.pop_front() {
            for n in grid.open_neighbours(pos) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        prop_assert_eq!(seen.len(), w * h);
    }

    #[test]
    fn exit_is_always_open(w in 1usize..16, h in 1usize..16, seed in any::<u64>()) {
        let maze = generated(w, h, seed);
        prop_assert!(!maze.grid()[START_CELL].has_wall(EXIT_SIDE));
    }

    #[test]
    fn one_inward_plane_per_remaining_wall(w in 1usize..10, h in 1usize..10, seed in any::<u64>()) {
        let maze = generated(w, h, seed);
        let planes = maze.collision_planes();
        prop_assert_eq!(planes.len(), maze.grid().wall_count());

        for (pos, cell) in maze.grid().iter() {
            let center = cell_to_world(pos, (w, h), 2.0, 0.0);
            let own = maze.cell_collision_planes(pos).unwrap();
            prop_assert_eq!(own.len(), cell.remaining_walls().count());
            for plane in own {
                prop_assert!((plane.normal.length() - 1.0).abs() < 1e-6);
                prop_assert!(plane.signed_distance(center) > 0.0);
                prop_assert!(planes.contains(&plane));
            }
        }
    }
}

#[test]
fn start_position_of_five_by_five() {
    let maze = generated(5, 5, 0);
    let start = maze.start_player_position();
    assert_eq!(
        (start.x(), start.y(), start.z(), start.w()),
        (-4.0, 1.7, -4.0, 1.0)
    );
}

#[test]
fn player_at_cell_centre_touches_no_wall_of_its_cell() {
    let maze = generated(8, 8, 17);
    for pos in maze.grid().positions() {
        let centre = cell_to_world(pos, (8, 8), 2.0, 1.7);
        let player = Sphere::new(centre, 0.5);
        for plane in maze.cell_collision_planes(pos).unwrap() {
            assert!(!check_sphere_plane_collision(&player, &plane));
        }
    }
}

#[test]
fn player_pressed_against_a_wall_touches_its_plane() {
    let maze = generated(8, 8, 17);
    let pos = GridPos::new(3, 4);
    let centre = cell_to_world(pos, (8, 8), 2.0, 1.7);
    let planes = maze.cell_collision_planes(pos).unwrap();
    for (side, plane) in maze.grid()[pos].remaining_walls().zip(planes) {
        let (dx, dz) = side.offset();
        let pushed = centre + Vec3::new(dx as f32, 0.0, dz as f32) * 0.8;
        let player = Sphere::new(pushed, 0.25);
        assert!(check_sphere_plane_collision(&player, &plane), "{:?}", side);
    }
}

#[test]
fn unseeded_generation_completes() {
    let mut maze = Maze::new(12, 7, 1.5).unwrap();
    let stats = maze.generate().unwrap();
    assert_eq!(stats.visited, 12 * 7);
    assert!(maze.is_generated());
    assert!(maze.generate().is_err());
}
