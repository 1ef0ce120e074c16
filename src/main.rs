//! Maze Carver command line tool.
//!
//! Generates one maze, prints it as text and reports what the projector
//! derives from it: wall box count, collision plane count, and the player
//! start and spawn positions.
//!
//! # Usage
//! `cargo run -- --width 12 --height 8 --seed 42 -v`
//!
//! Log output goes through `env_logger`; `RUST_LOG` overrides `--verbose`.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use maze_carver::maze::projector::InstanceCollector;
use maze_carver::{Maze, MazeConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(short = 'W', long, default_value_t = 10)]
    width: usize,

    /// Maze height in cells
    #[arg(short = 'H', long, default_value_t = 10)]
    height: usize,

    /// World edge length of one cell
    #[arg(short = 's', long, default_value_t = maze_carver::math::coordinates::constants::WALL_SIZE)]
    wall_size: f32,

    /// Seed for a reproducible maze; OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the maze tool.
///
/// # Features
/// - Heap profiling with the `dhat-heap` feature
fn main() -> Result<()> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let config = MazeConfig {
        width: args.width,
        height: args.height,
        wall_size: args.wall_size,
        ..MazeConfig::default()
    };
    let mut maze = Maze::with_config(config).context("invalid maze configuration")?;

    let stats = match args.seed {
        Some(seed) => {
            info!("generating with seed {}", seed);
            maze.generate_with_rng(&mut StdRng::seed_from_u64(seed))
        }
        None => maze.generate(),
    }
    .context("maze generation failed")?;

    print!("{}", maze);

    let mut instances = InstanceCollector::new();
    let drawn = maze.draw(&mut instances);
    let planes = maze.collision_planes();
    let start = maze.start_player_position();
    let spawn = maze.valid_spawn_position();

    info!(
        "{}x{} maze: {} passages, {} wall boxes ({} bytes of instance data), {} collision planes",
        maze.width(),
        maze.height(),
        stats.passages,
        drawn,
        instances.as_bytes().len(),
        planes.len()
    );
    println!(
        "start:  ({:.2}, {:.2}, {:.2}, {:.1})",
        start.x(),
        start.y(),
        start.z(),
        start.w()
    );
    println!("spawn:  ({:.2}, {:.2}, {:.2})", spawn.x(), spawn.y(), spawn.z());

    Ok(())
}
