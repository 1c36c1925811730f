use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct BlueFireId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }

    pub fn chebyshev(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    OuterWall,
    InnerWall,
    Empty,
    Stairway,
}

/// One of the eight aim/step directions. `Up` is decreasing `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Down => (0, 1),
            Direction::DownLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::UpLeft => (-1, -1),
        }
    }

    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        Direction::ALL.into_iter().find(|direction| direction.delta() == (dx, dy))
    }

    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }

    /// The two compass neighbours of this direction, e.g. `Up` flanks to
    /// `UpLeft` and `UpRight`.
    pub fn flanking(self) -> [Direction; 2] {
        match self {
            Direction::Up => [Direction::UpLeft, Direction::UpRight],
            Direction::UpRight => [Direction::Up, Direction::Right],
            Direction::Right => [Direction::UpRight, Direction::DownRight],
            Direction::DownRight => [Direction::Right, Direction::Down],
            Direction::Down => [Direction::DownLeft, Direction::DownRight],
            Direction::DownLeft => [Direction::Down, Direction::Left],
            Direction::Left => [Direction::DownLeft, Direction::UpLeft],
            Direction::UpLeft => [Direction::Left, Direction::Up],
        }
    }
}

/// The eight Moore-neighbourhood steps in row scan order.
pub const MOORE_STEPS: [(i32, i32); 8] =
    [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HoseKind {
    Basic,
    Spread,
    Wide,
    Launch,
}

impl HoseKind {
    pub const ALL: [HoseKind; 4] =
        [HoseKind::Basic, HoseKind::Spread, HoseKind::Wide, HoseKind::Launch];

    pub fn index(self) -> usize {
        match self {
            HoseKind::Basic => 0,
            HoseKind::Spread => 1,
            HoseKind::Wide => 2,
            HoseKind::Launch => 3,
        }
    }
}

/// A transient visual signal: raised by the core, cleared by the caller.
/// Carries the move counter it was raised on so the presentation layer can
/// own expiry without the core consulting wall-clock time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlashSignal {
    raised_on: Option<u64>,
}

impl FlashSignal {
    pub fn raise(&mut self, move_counter: u64) {
        self.raised_on = Some(move_counter);
    }

    pub fn is_raised(&self) -> bool {
        self.raised_on.is_some()
    }

    pub fn raised_on(&self) -> Option<u64> {
        self.raised_on
    }

    pub fn clear(&mut self) {
        self.raised_on = None;
    }
}

/// Health deltas produced by one completed player action. Health itself is
/// bookkept by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub player_damage: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    FallbackLayoutUsed { floor: u32 },
    FireBurstHitPlayer { from: Pos },
    BlueFireStruckPlayer { from: Pos },
    BlueFireDestroyed { pos: Pos },
    HoseCollected { hose: HoseKind },
    HoseUpgraded { hose: HoseKind, level: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_deltas_are_unit_steps() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!((dx, dy) != (0, 0));
            assert_eq!(Direction::from_delta(dx, dy), Some(direction));
        }
    }

    #[test]
    fn flanking_directions_are_adjacent_on_the_compass() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            for flank in direction.flanking() {
                let (fx, fy) = flank.delta();
                assert!((dx - fx).abs() <= 1 && (dy - fy).abs() <= 1);
                assert_ne!(flank, direction);
            }
        }
    }

    #[test]
    fn flash_signal_records_the_move_it_was_raised_on() {
        let mut flash = FlashSignal::default();
        assert!(!flash.is_raised());
        flash.raise(7);
        assert!(flash.is_raised());
        assert_eq!(flash.raised_on(), Some(7));
        flash.clear();
        assert!(!flash.is_raised());
    }
}
