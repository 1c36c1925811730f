//! Water shot resolution: per-hose area patterns, fire extinguishing, and
//! blue-fire damage.

mod patterns;

use std::collections::BTreeSet;

use super::*;

const BASE_WATER_RANGE: i32 = 3;
const BASE_HOSE_DAMAGE: i32 = 3;

/// Shot damage: the base value compounded once per upgrade level.
pub fn hose_damage(level: u8) -> i32 {
    let mut damage = BASE_HOSE_DAMAGE;
    for _ in 0..level {
        damage += damage / 3;
    }
    damage
}

impl Game {
    /// Resolve one shot from the active hose. Any previous shot's water is
    /// cleared first; affected cells are marked wet, fires standing in them
    /// are removed, and blue fires take the shot damage. Returns the
    /// affected cell set.
    pub fn shoot(&mut self, direction: Direction) -> &BTreeSet<Pos> {
        self.state.water.clear();
        let level = self.state.hoses.active_level();
        let damage = hose_damage(level);
        match self.state.hoses.active {
            HoseKind::Basic => self.shoot_basic(direction, level, damage),
            HoseKind::Spread => self.shoot_spread(direction, level, damage),
            HoseKind::Wide => self.shoot_wide(direction, level, damage),
            HoseKind::Launch => self.shoot_launch(direction, level, damage),
        }
        &self.state.water
    }

    fn shoot_basic(&mut self, direction: Direction, level: u8, damage: i32) {
        let (dx, dy) = direction.delta();
        let range = BASE_WATER_RANGE + level as i32;

        // The forward ray is the only part of a shot that a wall truncates.
        let mut pos = self.state.player_pos;
        for _ in 0..range {
            pos = pos.offset(dx, dy);
            if !self.douse(pos, damage) {
                break;
            }
        }

        for layer in 1..=level.min(patterns::BASIC_LAYER_COUNT) {
            for &offset in patterns::basic_layer(layer, direction.is_diagonal()) {
                let (ox, oy) = patterns::orient(offset, direction);
                self.douse(self.state.player_pos.offset(ox, oy), damage);
            }
        }
    }

    fn shoot_spread(&mut self, direction: Direction, level: u8, damage: i32) {
        if level == 0 {
            let table = if direction.is_diagonal() {
                patterns::FRONT_BAR_DIAGONAL
            } else {
                patterns::FRONT_BAR_CARDINAL
            };
            for &offset in table {
                let (ox, oy) = patterns::orient(offset, direction);
                self.douse(self.state.player_pos.offset(ox, oy), damage);
            }
            return;
        }

        let [left, right] = direction.flanking();
        let range = 1 + level as i32;
        for ray in [direction, left, right] {
            let (dx, dy) = ray.delta();
            let mut pos = self.state.player_pos;
            for _ in 0..range {
                pos = pos.offset(dx, dy);
                if !self.douse(pos, damage) {
                    break;
                }
            }
        }
    }

    fn shoot_wide(&mut self, direction: Direction, level: u8, damage: i32) {
        let table = if direction.is_diagonal() {
            patterns::FRONT_BAR_DIAGONAL
        } else {
            patterns::FRONT_BAR_CARDINAL
        };
        for &offset in table {
            let (ox, oy) = patterns::orient(offset, direction);
            self.douse(self.state.player_pos.offset(ox, oy), damage);
        }

        for repeat in 1..=level as i32 {
            let distance = repeat + 1;
            if direction.is_diagonal() {
                // A staggered two-cell front instead of a straight bar.
                for offset in
                    [(distance, distance), (distance - 1, distance), (distance, distance - 1)]
                {
                    let (ox, oy) = patterns::mirror_diagonal(offset, direction);
                    self.douse(self.state.player_pos.offset(ox, oy), damage);
                }
            } else {
                for offset in [(distance, -1), (distance, 0), (distance, 1)] {
                    let (ox, oy) = patterns::rotate_cardinal(offset, direction);
                    self.douse(self.state.player_pos.offset(ox, oy), damage);
                }
            }
        }
    }

    fn shoot_launch(&mut self, direction: Direction, level: u8, damage: i32) {
        let pattern = patterns::launch_pattern(level);
        for &offset in pattern {
            let (ox, oy) = if direction.is_diagonal() {
                patterns::recenter_diagonal(offset, direction)
            } else {
                patterns::rotate_cardinal(offset, direction)
            };
            self.douse(self.state.player_pos.offset(ox, oy), damage);
        }
    }

    /// Mark `pos` wet and hit whatever hazard stands there. Walls and
    /// out-of-bounds cells are skipped; the return value only matters to
    /// rays, which stop at the first skipped cell.
    fn douse(&mut self, pos: Pos, damage: i32) -> bool {
        let tile = self.state.grid.tile_at(pos);
        if !self.state.grid.in_bounds(pos)
            || tile == TileKind::OuterWall
            || tile == TileKind::InnerWall
        {
            return false;
        }
        self.state.water.insert(pos);

        if let Some(index) = self.state.fires.iter().position(|fire| fire.pos == pos) {
            self.state.fires.remove(index);
        }
        if let Some(id) = self.state.blue_fire_at(pos) {
            let moves = self.moves;
            let blue_fire = &mut self.state.blue_fires[id];
            blue_fire.health -= damage;
            blue_fire.flash.raise(moves);
            if blue_fire.health <= 0 {
                self.state.blue_fires.remove(id);
                self.log.push(LogEvent::BlueFireDestroyed { pos });
            }
        }
        true
    }
}
