//! Demo binary: builds an island world from the seed template, generates the
//! chunks around the origin, and writes a top-down biome map.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p archipel-demo -- --distance 128 --output map.png`.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};

use archipel_config::{CliArgs, Config, default_config_dir};
use archipel_terrain::debug_viz::{DebugImage, MapRegion, render_island_map};
use archipel_world::{ChunkPos, IslandWorld, SeedWorld, TracingProgress, WorldError};
use clap::Parser;
use tracing::{error, info, warn};

const DEFAULT_OUTPUT: &str = "island_map.png";
const MAP_SIZE: u32 = 512;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    World(#[from] WorldError),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode png: {0}")]
    Png(#[from] png::EncodingError),
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    archipel_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = run(&args, &config) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs, config: &Config) -> Result<(), DemoError> {
    let mut world = IslandWorld::init(config)?;

    let seed = SeedWorld::new(&config.seed);
    let start = Instant::now();
    world.build_cache(&seed, &mut TracingProgress)?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "Seed cache ready");

    generate_region(&world, args.radius.max(0))?;

    // Map covers four islands in each direction around the origin.
    let pitch = 2 * i64::from(config.island.distance);
    let span = pitch * 8;
    let region = MapRegion {
        min_x: -span / 2,
        min_z: -span / 2,
        blocks_per_pixel: (span / i64::from(MAP_SIZE)).max(1),
    };
    let image = render_island_map(world.generator().resolver(), region, MAP_SIZE, MAP_SIZE);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| DEFAULT_OUTPUT.into());
    write_png(&image, &output)?;
    info!(path = %output.display(), "Wrote island map");

    world.shutdown();
    Ok(())
}

/// Generates every chunk within `radius` of the origin on the worker pool.
fn generate_region(world: &IslandWorld, radius: i32) -> Result<(), WorldError> {
    let pool = world.spawn_pool()?;

    let mut queue: Vec<ChunkPos> = (-radius..=radius)
        .flat_map(|x| (-radius..=radius).map(move |z| ChunkPos::new(x, z)))
        .collect();
    // Nearest first; popped from the back.
    queue.sort_by_key(|pos| std::cmp::Reverse(pos.distance_sq_from_origin()));

    let total = queue.len();
    let mut done = 0;
    let mut failed = 0;
    let mut total_us = 0_u64;

    while done < total {
        while let Some(pos) = queue.pop() {
            if let Err(pos) = pool.submit(pos) {
                queue.push(pos);
                break;
            }
        }

        for result in pool.drain_results() {
            done += 1;
            total_us += result.generation_time_us;
            if result.chunk.is_err() {
                failed += 1;
            }
        }

        if done < total {
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    if failed > 0 {
        warn!(failed, total, "Some chunks failed to generate");
    }
    info!(
        chunks = total,
        avg_us = total_us / total.max(1) as u64,
        "Generated region"
    );
    Ok(())
}

fn write_png(image: &DebugImage, path: &Path) -> Result<(), DemoError> {
    let file = File::create(path).map_err(|source| DemoError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.to_rgba())?;
    Ok(())
}
