use anyhow::Result;
use clap::Parser;
use emberfall_core::mapgen::{FloorGenerator, GeneratedFloor, floor_dimensions};
use emberfall_core::{Pos, TileKind};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::Serialize;

/// Generate a floor and print a JSON summary for inspection.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1)]
    floor: u32,
}

#[derive(Serialize)]
struct FloorSummary {
    width: usize,
    height: usize,
    inner_walls: usize,
    fires: usize,
    blue_fires: usize,
    spawn: Pos,
    stairway: Pos,
    upgrade: Option<Pos>,
    hose_pickups: Vec<Option<Pos>>,
    used_fallback: bool,
}

impl FloorSummary {
    fn new(floor: &GeneratedFloor) -> Self {
        Self {
            width: floor.width,
            height: floor.height,
            inner_walls: floor.tiles.iter().filter(|&&tile| tile == TileKind::InnerWall).count(),
            fires: floor.fires.len(),
            blue_fires: floor.blue_fires.len(),
            spawn: floor.spawn_tile,
            stairway: floor.stairway_tile,
            upgrade: floor.upgrade,
            hose_pickups: floor.hose_pickups.to_vec(),
            used_fallback: floor.used_fallback,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let (width, height) = floor_dimensions(&mut rng, args.floor);
    let floor = FloorGenerator::new(width, height, args.floor).generate(&mut rng);

    println!("{}", serde_json::to_string_pretty(&FloorSummary::new(&floor))?);
    Ok(())
}
