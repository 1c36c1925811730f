//! Shared fixtures for the `game` submodule test suites.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;

use super::*;
use crate::state::{BlueFire, Fire, Grid, Pickups};

/// A session over a hand-built floor: open interior, stairway in the far
/// corner, no hazards, player parked at the near corner.
pub(super) fn open_floor_game(width: usize, height: usize) -> Game {
    let mut grid = Grid::bordered(width, height);
    let stairway_tile = Pos { y: height as i32 - 2, x: width as i32 - 2 };
    grid.set_tile(stairway_tile, TileKind::Stairway);

    Game {
        seed: 0,
        rng: ChaCha8Rng::seed_from_u64(0),
        floor_number: 1,
        moves: 0,
        state: GameState {
            grid,
            fires: Vec::new(),
            blue_fires: SlotMap::with_key(),
            spawn_tile: Pos { y: 1, x: 1 },
            stairway_tile,
            pickups: Pickups::default(),
            hoses: HoseLoadout::default(),
            water: BTreeSet::new(),
            player_pos: Pos { y: 1, x: 1 },
        },
        player_flash: FlashSignal::default(),
        log: Vec::new(),
    }
}

pub(super) fn add_fire(game: &mut Game, pos: Pos, countdown: i32) {
    game.state.fires.push(Fire { pos, countdown });
}

pub(super) fn add_blue_fire(game: &mut Game, pos: Pos, seen: bool) -> BlueFireId {
    let mut blue_fire = BlueFire::new(pos);
    blue_fire.has_been_seen = seen;
    game.state.blue_fires.insert(blue_fire)
}
