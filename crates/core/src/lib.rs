pub mod game;
pub mod mapgen;
pub mod state;
pub mod types;

mod random;

pub use game::{Game, hose_damage};
pub use mapgen::{FloorGenerator, GeneratedFloor, generate_floor};
pub use state::{BlueFire, Fire, GameState, Grid, HoseLoadout, Pickups};
pub use types::*;
