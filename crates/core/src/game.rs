//! The floor session: owns grid and hazard state, advances the hazard
//! simulation after every completed player action, and resolves water shots.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::mapgen;
use crate::state::{GameState, HoseLoadout};
use crate::types::*;

mod hazards;
mod water;

#[cfg(test)]
mod test_support;

pub use water::hose_damage;

pub struct Game {
    seed: u64,
    rng: ChaCha8Rng,
    floor_number: u32,
    moves: u64,
    state: GameState,
    player_flash: FlashSignal,
    log: Vec<LogEvent>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (width, height) = mapgen::floor_dimensions(&mut rng, 1);
        let floor = mapgen::generate_floor(&mut rng, width, height, 1);

        let mut log = Vec::new();
        if floor.used_fallback {
            log.push(LogEvent::FallbackLayoutUsed { floor: 1 });
        }

        Self {
            seed,
            rng,
            floor_number: 1,
            moves: 0,
            state: GameState::install_floor(floor, HoseLoadout::default()),
            player_flash: FlashSignal::default(),
            log,
        }
    }

    /// Tear down the current floor and generate the next one. Hose levels
    /// carry over; everything else is rebuilt from scratch.
    pub fn descend(&mut self) {
        self.floor_number += 1;
        self.moves = 0;
        let (width, height) = mapgen::floor_dimensions(&mut self.rng, self.floor_number);
        let floor =
            mapgen::generate_floor(&mut self.rng, width, height, self.floor_number);
        if floor.used_fallback {
            self.log.push(LogEvent::FallbackLayoutUsed { floor: self.floor_number });
        }
        let hoses = self.state.hoses;
        self.state = GameState::install_floor(floor, hoses);
        self.player_flash.clear();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn floor_number(&self) -> u32 {
        self.floor_number
    }

    pub fn move_counter(&self) -> u64 {
        self.moves
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Movement legality is the caller's concern; the session only records
    /// the validated position.
    pub fn set_player_position(&mut self, pos: Pos) {
        debug_assert!(self.state.grid.in_bounds(pos));
        self.state.player_pos = pos;
    }

    /// Latch `has_been_seen` on every blue fire the viewport currently
    /// contains. The predicate is owned by the renderer.
    pub fn mark_seen_within(&mut self, viewport: impl Fn(Pos) -> bool) {
        for (_, blue_fire) in self.state.blue_fires.iter_mut() {
            if viewport(blue_fire.pos) {
                blue_fire.has_been_seen = true;
            }
        }
    }

    pub fn player_flash(&self) -> FlashSignal {
        self.player_flash
    }

    pub fn clear_player_flash(&mut self) {
        self.player_flash.clear();
    }

    pub fn clear_blue_fire_flash(&mut self, id: BlueFireId) {
        if let Some(blue_fire) = self.state.blue_fires.get_mut(id) {
            blue_fire.flash.clear();
        }
    }

    /// Expire the current shot's water cells. Scheduling is owned by the
    /// presentation layer.
    pub fn clear_water(&mut self) {
        self.state.water.clear();
    }

    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u32(self.floor_number);
        hasher.write_u64(self.moves);
        hasher.write_i32(self.state.player_pos.y);
        hasher.write_i32(self.state.player_pos.x);

        for tile in &self.state.grid.tiles {
            hasher.write_u8(match tile {
                TileKind::OuterWall => 0,
                TileKind::InnerWall => 1,
                TileKind::Empty => 2,
                TileKind::Stairway => 3,
            });
        }
        for fire in &self.state.fires {
            hasher.write_i32(fire.pos.y);
            hasher.write_i32(fire.pos.x);
            hasher.write_i32(fire.countdown);
        }

        let mut blue_positions: Vec<_> = self
            .state
            .blue_fires
            .values()
            .map(|blue_fire| (blue_fire.pos, blue_fire.health))
            .collect();
        blue_positions.sort_unstable();
        for (pos, health) in blue_positions {
            hasher.write_i32(pos.y);
            hasher.write_i32(pos.x);
            hasher.write_i32(health);
        }

        for pos in &self.state.water {
            hasher.write_i32(pos.y);
            hasher.write_i32(pos.x);
        }
        hasher.write_u8(self.state.hoses.active.index() as u8);
        for level in self.state.hoses.levels {
            hasher.write_u8(level);
        }
        hasher.finish()
    }

    fn collect_pickups(&mut self) {
        let player = self.state.player_pos;
        if self.state.pickups.upgrade == Some(player) {
            let level = self.state.hoses.upgrade_active();
            self.log.push(LogEvent::HoseUpgraded { hose: self.state.hoses.active, level });
            self.state.pickups.upgrade = None;
        }
        if let Some(hose) = self.state.pickups.hose_at(player) {
            self.state.hoses.active = hose;
            self.state.pickups.hoses[hose.index()] = None;
            self.log.push(LogEvent::HoseCollected { hose });
        }
    }
}
