use std::collections::BTreeSet;

use slotmap::SlotMap;

use crate::mapgen::GeneratedFloor;
use crate::types::{BlueFireId, FlashSignal, HoseKind, Pos, TileKind};

/// A single spreading fire. The countdown is decremented once per eligible
/// turn; when it drops below zero the fire bursts into its neighbourhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fire {
    pub pos: Pos,
    pub countdown: i32,
}

pub const BLUE_FIRE_STARTING_HEALTH: i32 = 10;

/// A mobile pursuing hazard. It only acts once the renderer has reported it
/// inside the viewport, and at most every other turn after that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlueFire {
    pub pos: Pos,
    pub has_been_seen: bool,
    pub last_moved_turn: i64,
    pub health: i32,
    pub flash: FlashSignal,
}

impl BlueFire {
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            has_been_seen: false,
            last_moved_turn: -2,
            health: BLUE_FIRE_STARTING_HEALTH,
            flash: FlashSignal::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pickups {
    pub upgrade: Option<Pos>,
    pub hoses: [Option<Pos>; 4],
}

impl Pickups {
    pub fn hose_at(&self, pos: Pos) -> Option<HoseKind> {
        HoseKind::ALL.into_iter().find(|hose| self.hoses[hose.index()] == Some(pos))
    }
}

/// The active hose plus an independent upgrade level per hose kind.
/// Switching hoses retains each hose's level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoseLoadout {
    pub active: HoseKind,
    pub levels: [u8; 4],
}

impl Default for HoseLoadout {
    fn default() -> Self {
        Self { active: HoseKind::Basic, levels: [0; 4] }
    }
}

impl HoseLoadout {
    pub fn active_level(&self) -> u8 {
        self.levels[self.active.index()]
    }

    pub fn upgrade_active(&mut self) -> u8 {
        let slot = self.active.index();
        self.levels[slot] += 1;
        self.levels[slot]
    }
}

#[derive(Clone)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
}

impl Grid {
    /// A bordered grid: outer ring of `OuterWall`, interior all `Empty`.
    pub fn bordered(width: usize, height: usize) -> Self {
        let mut tiles = vec![TileKind::Empty; width * height];
        for x in 0..width {
            tiles[x] = TileKind::OuterWall;
            tiles[(height - 1) * width + x] = TileKind::OuterWall;
        }
        for y in 0..height {
            tiles[y * width] = TileKind::OuterWall;
            tiles[y * width + (width - 1)] = TileKind::OuterWall;
        }
        Self { width, height, tiles }
    }

    pub fn from_parts(width: usize, height: usize, tiles: Vec<TileKind>) -> Self {
        debug_assert_eq!(tiles.len(), width * height);
        Self { width, height, tiles }
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::OuterWall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let index = self.index(pos);
        self.tiles[index] = tile;
    }

    pub fn interior_cell_count(&self) -> usize {
        (self.width - 2) * (self.height - 2)
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

/// The whole mutable floor session state: grid, hazards, pickups, hose
/// loadout, the transient water set, and the externally-validated player
/// position. Rebuilt wholesale on every floor transition.
pub struct GameState {
    pub grid: Grid,
    pub fires: Vec<Fire>,
    pub blue_fires: SlotMap<BlueFireId, BlueFire>,
    pub spawn_tile: Pos,
    pub stairway_tile: Pos,
    pub pickups: Pickups,
    pub hoses: HoseLoadout,
    pub water: BTreeSet<Pos>,
    pub player_pos: Pos,
}

impl GameState {
    pub fn install_floor(floor: GeneratedFloor, hoses: HoseLoadout) -> Self {
        let mut blue_fires = SlotMap::with_key();
        for blue_fire in floor.blue_fires {
            blue_fires.insert(blue_fire);
        }
        Self {
            grid: Grid::from_parts(floor.width, floor.height, floor.tiles),
            fires: floor.fires,
            blue_fires,
            spawn_tile: floor.spawn_tile,
            stairway_tile: floor.stairway_tile,
            pickups: Pickups { upgrade: floor.upgrade, hoses: floor.hose_pickups },
            hoses,
            water: BTreeSet::new(),
            player_pos: floor.spawn_tile,
        }
    }

    pub fn has_fire(&self, pos: Pos) -> bool {
        self.fires.iter().any(|fire| fire.pos == pos)
    }

    pub fn blue_fire_at(&self, pos: Pos) -> Option<BlueFireId> {
        self.blue_fires.iter().find(|(_, blue_fire)| blue_fire.pos == pos).map(|(id, _)| id)
    }

    pub fn has_water(&self, pos: Pos) -> bool {
        self.water.contains(&pos)
    }

    pub fn player_on_stairway(&self) -> bool {
        self.player_pos == self.stairway_tile
    }
}
