//! Breadth-first reachability used to validate generated layouts.

use std::collections::VecDeque;

use crate::state::Fire;
use crate::types::{MOORE_STEPS, Pos, TileKind};

/// Length of the shortest 8-directional path from `start` to `goal` over
/// cells that are neither walls nor occupied by a fire, or `None` when the
/// goal is unreachable. Diagonal steps count as one.
pub(super) fn shortest_path_len(
    tiles: &[TileKind],
    width: usize,
    height: usize,
    fires: &[Fire],
    start: Pos,
    goal: Pos,
) -> Option<u32> {
    if start == goal {
        return Some(0);
    }

    let index = |pos: Pos| (pos.y as usize) * width + (pos.x as usize);
    let mut seen = vec![false; width * height];
    seen[index(start)] = true;
    let mut open = VecDeque::from([(start, 0_u32)]);

    while let Some((pos, distance)) = open.pop_front() {
        for (dx, dy) in MOORE_STEPS {
            let next = pos.offset(dx, dy);
            if next.x < 0
                || next.y < 0
                || (next.x as usize) >= width
                || (next.y as usize) >= height
            {
                continue;
            }
            if seen[index(next)] {
                continue;
            }
            let tile = tiles[index(next)];
            if tile == TileKind::OuterWall || tile == TileKind::InnerWall {
                continue;
            }
            if fires.iter().any(|fire| fire.pos == next) {
                continue;
            }
            if next == goal {
                return Some(distance + 1);
            }
            seen[index(next)] = true;
            open.push_back((next, distance + 1));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::state::Grid;

    use super::*;

    fn open_grid(width: usize, height: usize) -> Grid {
        Grid::bordered(width, height)
    }

    #[test]
    fn diagonal_steps_count_as_one() {
        let grid = open_grid(12, 12);
        let len = shortest_path_len(
            &grid.tiles,
            grid.width,
            grid.height,
            &[],
            Pos { y: 1, x: 1 },
            Pos { y: 5, x: 5 },
        );
        assert_eq!(len, Some(4));
    }

    #[test]
    fn inner_walls_block_the_path() {
        let mut grid = open_grid(10, 10);
        for y in 1..9 {
            grid.set_tile(Pos { y, x: 4 }, TileKind::InnerWall);
        }
        let len = shortest_path_len(
            &grid.tiles,
            grid.width,
            grid.height,
            &[],
            Pos { y: 5, x: 2 },
            Pos { y: 5, x: 7 },
        );
        assert_eq!(len, None);
    }

    #[test]
    fn fires_block_the_path() {
        let mut grid = open_grid(10, 10);
        for y in 1..9 {
            grid.set_tile(Pos { y, x: 4 }, TileKind::InnerWall);
        }
        grid.set_tile(Pos { y: 5, x: 4 }, TileKind::Empty);
        let gap_fire = Fire { pos: Pos { y: 5, x: 4 }, countdown: 5 };
        let open_len = shortest_path_len(
            &grid.tiles,
            grid.width,
            grid.height,
            &[],
            Pos { y: 5, x: 2 },
            Pos { y: 5, x: 7 },
        );
        let blocked_len = shortest_path_len(
            &grid.tiles,
            grid.width,
            grid.height,
            &[gap_fire],
            Pos { y: 5, x: 2 },
            Pos { y: 5, x: 7 },
        );
        assert_eq!(open_len, Some(5));
        assert_eq!(blocked_len, None);
    }

    #[test]
    fn stairway_tiles_are_traversable() {
        let mut grid = open_grid(10, 10);
        grid.set_tile(Pos { y: 5, x: 7 }, TileKind::Stairway);
        let len = shortest_path_len(
            &grid.tiles,
            grid.width,
            grid.height,
            &[],
            Pos { y: 5, x: 2 },
            Pos { y: 5, x: 7 },
        );
        assert_eq!(len, Some(5));
    }
}
