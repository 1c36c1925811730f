//! Floor layout generation: randomized placement with reachability
//! validation, bounded retries, and a deterministic fallback.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

use crate::random::{coin_flip, uniform_usize};
use crate::state::{BlueFire, Fire, Grid};
use crate::types::{HoseKind, MOORE_STEPS, Pos, TileKind};

use super::model::GeneratedFloor;
use super::progression::{self, MIN_PATH_LENGTH};
use super::reachability::shortest_path_len;

/// Attempt budget shared by every retry of a single `generate` call.
pub const MAX_GENERATION_ATTEMPTS: u32 = 100;

pub struct FloorGenerator {
    width: usize,
    height: usize,
    floor_number: u32,
    min_path_length: u32,
}

impl FloorGenerator {
    pub fn new(width: usize, height: usize, floor_number: u32) -> Self {
        debug_assert!(width >= 4 && height >= 4);
        Self { width, height, floor_number, min_path_length: MIN_PATH_LENGTH }
    }

    /// Always returns a structurally valid floor: randomized layouts are
    /// retried up to the shared attempt budget, after which the fallback
    /// layout is produced.
    pub fn generate(&self, rng: &mut ChaCha8Rng) -> GeneratedFloor {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            if let Some(floor) = self.try_random_layout(rng) {
                return floor;
            }
        }
        self.fallback_layout(rng)
    }

    fn try_random_layout(&self, rng: &mut ChaCha8Rng) -> Option<GeneratedFloor> {
        let mut grid = Grid::bordered(self.width, self.height);
        let mut occupied = BTreeSet::new();
        let interior_cells = grid.interior_cell_count();

        let spawn_tile = pick_open_cell(rng, &grid, &mut occupied, None)?;

        // Fires and blue fires must not start adjacent to the spawn. Walls,
        // the stairway, and pickups may.
        let mut sheltered = BTreeSet::new();
        for (dx, dy) in MOORE_STEPS {
            let pos = spawn_tile.offset(dx, dy);
            if pos.x > 0
                && (pos.x as usize) < self.width - 1
                && pos.y > 0
                && (pos.y as usize) < self.height - 1
            {
                sheltered.insert(pos);
            }
        }

        let stairway_tile = loop {
            // A rejected candidate stays in the occupied set; running out of
            // candidates abandons the whole attempt.
            let candidate = pick_open_cell(rng, &grid, &mut occupied, None)?;
            let reachable = shortest_path_len(
                &grid.tiles,
                self.width,
                self.height,
                &[],
                spawn_tile,
                candidate,
            )
            .is_some_and(|len| len >= self.min_path_length);
            if reachable {
                break candidate;
            }
        };
        grid.set_tile(stairway_tile, TileKind::Stairway);

        for _ in 0..progression::inner_wall_count(interior_cells) {
            let pos = pick_open_cell(rng, &grid, &mut occupied, None)?;
            grid.set_tile(pos, TileKind::InnerWall);
        }

        let mut fires = Vec::new();
        for _ in 0..progression::fire_count(self.floor_number, interior_cells) {
            let pos = pick_open_cell(rng, &grid, &mut occupied, Some(&sheltered))?;
            fires.push(Fire { pos, countdown: progression::random_countdown(rng) });
        }

        let mut blue_fires = Vec::new();
        for _ in 0..progression::blue_fire_count(self.floor_number) {
            let pos = pick_open_cell(rng, &grid, &mut occupied, Some(&sheltered))?;
            blue_fires.push(BlueFire::new(pos));
        }

        let upgrade = Some(pick_open_cell(rng, &grid, &mut occupied, None)?);

        let mut hose_pickups = [None; 4];
        for hose in HoseKind::ALL {
            if coin_flip(rng) {
                hose_pickups[hose.index()] =
                    Some(pick_open_cell(rng, &grid, &mut occupied, None)?);
            }
        }

        // Revalidate the finished layout: walls and fires are now in place
        // and must not cut the spawn off from the stairway.
        let len = shortest_path_len(
            &grid.tiles,
            self.width,
            self.height,
            &fires,
            spawn_tile,
            stairway_tile,
        )?;
        if len < self.min_path_length {
            return None;
        }

        Some(GeneratedFloor {
            width: self.width,
            height: self.height,
            tiles: grid.tiles,
            fires,
            blue_fires,
            spawn_tile,
            stairway_tile,
            upgrade,
            hose_pickups,
            used_fallback: false,
        })
    }

    /// Degenerate but valid layout used once the attempt budget is spent:
    /// opposite-corner spawn and stairway, a single fresh fire near the
    /// stairway, no walls, no blue fires, no pickups.
    fn fallback_layout(&self, rng: &mut ChaCha8Rng) -> GeneratedFloor {
        let mut grid = Grid::bordered(self.width, self.height);
        let spawn_tile = Pos { y: 1, x: 1 };
        let stairway_tile = Pos { y: self.height as i32 - 2, x: self.width as i32 - 2 };
        grid.set_tile(stairway_tile, TileKind::Stairway);

        let fire_pos = Pos { y: self.height as i32 - 3, x: self.width as i32 - 3 };
        let fires = vec![Fire { pos: fire_pos, countdown: progression::random_countdown(rng) }];

        GeneratedFloor {
            width: self.width,
            height: self.height,
            tiles: grid.tiles,
            fires,
            blue_fires: Vec::new(),
            spawn_tile,
            stairway_tile,
            upgrade: None,
            hose_pickups: [None; 4],
            used_fallback: true,
        }
    }
}

/// Uniformly pick an unoccupied interior `Empty` cell, optionally avoiding
/// the banned set, and mark it occupied. `None` when no cell remains.
fn pick_open_cell(
    rng: &mut ChaCha8Rng,
    grid: &Grid,
    occupied: &mut BTreeSet<Pos>,
    banned: Option<&BTreeSet<Pos>>,
) -> Option<Pos> {
    let mut available = Vec::new();
    for y in 1..grid.height - 1 {
        for x in 1..grid.width - 1 {
            let pos = Pos { y: y as i32, x: x as i32 };
            if grid.tile_at(pos) != TileKind::Empty || occupied.contains(&pos) {
                continue;
            }
            if banned.is_some_and(|cells| cells.contains(&pos)) {
                continue;
            }
            available.push(pos);
        }
    }
    if available.is_empty() {
        return None;
    }
    let pos = available[uniform_usize(rng, available.len())];
    occupied.insert(pos);
    Some(pos)
}
