//! Public data model for generated floors.

use crate::state::{BlueFire, Fire};
use crate::types::{Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFloor {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    pub fires: Vec<Fire>,
    pub blue_fires: Vec<BlueFire>,
    pub spawn_tile: Pos,
    pub stairway_tile: Pos,
    pub upgrade: Option<Pos>,
    pub hose_pickups: [Option<Pos>; 4],
    pub used_fallback: bool,
}

impl GeneratedFloor {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile {
                TileKind::OuterWall => 0,
                TileKind::InnerWall => 1,
                TileKind::Empty => 2,
                TileKind::Stairway => 3,
            });
        }

        bytes.extend((self.fires.len() as u32).to_le_bytes());
        for fire in &self.fires {
            bytes.extend(fire.pos.y.to_le_bytes());
            bytes.extend(fire.pos.x.to_le_bytes());
            bytes.extend(fire.countdown.to_le_bytes());
        }

        bytes.extend((self.blue_fires.len() as u32).to_le_bytes());
        for blue_fire in &self.blue_fires {
            bytes.extend(blue_fire.pos.y.to_le_bytes());
            bytes.extend(blue_fire.pos.x.to_le_bytes());
            bytes.extend(blue_fire.health.to_le_bytes());
        }

        bytes.extend(self.spawn_tile.y.to_le_bytes());
        bytes.extend(self.spawn_tile.x.to_le_bytes());
        bytes.extend(self.stairway_tile.y.to_le_bytes());
        bytes.extend(self.stairway_tile.x.to_le_bytes());

        push_optional_pos(&mut bytes, self.upgrade);
        for pickup in self.hose_pickups {
            push_optional_pos(&mut bytes, pickup);
        }
        bytes.push(u8::from(self.used_fallback));

        bytes
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if pos.x < 0 || pos.y < 0 {
            return TileKind::OuterWall;
        }
        let x = pos.x as usize;
        let y = pos.y as usize;
        if x >= self.width || y >= self.height {
            return TileKind::OuterWall;
        }
        self.tiles[y * self.width + x]
    }

    pub fn has_fire(&self, pos: Pos) -> bool {
        self.fires.iter().any(|fire| fire.pos == pos)
    }
}

fn push_optional_pos(bytes: &mut Vec<u8>, pos: Option<Pos>) {
    match pos {
        Some(pos) => {
            bytes.push(1);
            bytes.extend(pos.y.to_le_bytes());
            bytes.extend(pos.x.to_le_bytes());
        }
        None => bytes.push(0),
    }
}
