use anyhow::Result;
use clap::Parser;
use emberfall_core::{Direction, Game, Pos, TileKind};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Drive a whole session with random actions and assert core invariants.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 2000)]
    turns: u64,
}

fn is_valid_move(game: &Game, pos: Pos) -> bool {
    let state = game.state();
    let tile = state.grid.tile_at(pos);
    state.grid.in_bounds(pos)
        && tile != TileKind::OuterWall
        && tile != TileKind::InnerWall
        && !state.has_fire(pos)
}

fn assert_invariants(game: &Game) {
    let state = game.state();
    for fire in &state.fires {
        assert_eq!(state.grid.tile_at(fire.pos), TileKind::Empty, "fire on a non-empty tile");
    }
    for (_, blue_fire) in state.blue_fires.iter() {
        assert!(blue_fire.health > 0, "destroyed blue fire left alive");
        assert_ne!(state.grid.tile_at(blue_fire.pos), TileKind::OuterWall);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Fuzzing session on seed {} for {} turns...", args.seed, args.turns);

    let mut game = Game::new(args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut total_damage: i64 = 0;
    let mut floors_visited = 1_u32;

    for _ in 0..args.turns {
        game.mark_seen_within(|_| true);
        let direction = Direction::ALL[(rng.next_u64() % 8) as usize];

        if rng.next_u64() % 4 == 0 {
            game.shoot(direction);
        } else {
            let (dx, dy) = direction.delta();
            let dest = game.state().player_pos.offset(dx, dy);
            if is_valid_move(&game, dest) {
                game.set_player_position(dest);
            }
        }

        let report = game.end_player_turn();
        total_damage += i64::from(report.player_damage);
        assert_invariants(&game);

        if game.state().player_on_stairway() {
            game.descend();
            floors_visited += 1;
            assert_invariants(&game);
        }
    }

    println!("Fuzzing completed successfully.");
    println!("Floors visited: {floors_visited}");
    println!("Total damage taken: {total_damage}");
    println!("Final snapshot hash: {}", game.snapshot_hash());
    Ok(())
}
