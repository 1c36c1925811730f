//! Offset tables and orientation transforms for the hose patterns.
//!
//! Every table is authored for a reference aim and mapped at shot time:
//! cardinal tables are relative to rightward aim and rotated with
//! [`rotate_cardinal`]; diagonal tables are relative to down-right aim and
//! mapped with [`mirror_diagonal`]. Launch tables additionally support
//! [`recenter_diagonal`], which slides the whole pattern onto the diagonal
//! centre instead of rotating it.

use crate::types::{Direction, MOORE_STEPS};

/// Map a rightward-aim offset onto one of the four cardinal aims.
pub(super) fn rotate_cardinal(offset: (i32, i32), direction: Direction) -> (i32, i32) {
    let (ox, oy) = offset;
    match direction {
        Direction::Right => (ox, oy),
        Direction::Left => (-ox, oy),
        Direction::Up => (oy, -ox),
        Direction::Down => (-oy, ox),
        _ => {
            debug_assert!(false, "cardinal rotation applied to diagonal aim");
            (ox, oy)
        }
    }
}

/// Map a down-right-aim offset onto any diagonal aim by flipping axes.
pub(super) fn mirror_diagonal(offset: (i32, i32), direction: Direction) -> (i32, i32) {
    debug_assert!(direction.is_diagonal());
    let (dx, dy) = direction.delta();
    (offset.0 * dx, offset.1 * dy)
}

pub(super) fn orient(offset: (i32, i32), direction: Direction) -> (i32, i32) {
    if direction.is_diagonal() {
        mirror_diagonal(offset, direction)
    } else {
        rotate_cardinal(offset, direction)
    }
}

/// Launch patterns are authored for a rightward shot centred three cells
/// ahead. For diagonal aim each cell keeps its delta from the (3, 0)
/// reference, applied to the true centre (3dx, 3dy).
pub(super) fn recenter_diagonal(offset: (i32, i32), direction: Direction) -> (i32, i32) {
    debug_assert!(direction.is_diagonal());
    let (dx, dy) = direction.delta();
    (3 * dx + offset.0 - 3, 3 * dy + offset.1)
}

pub(super) const FRONT_BAR_CARDINAL: &[(i32, i32)] = &[(1, -1), (1, 0), (1, 1)];
pub(super) const FRONT_BAR_DIAGONAL: &[(i32, i32)] = &[(1, 1), (0, 1), (1, 0)];

pub(super) const BASIC_LAYER_COUNT: u8 = 6;

// Cumulative surround layers for the basic hose, one per level above zero.
const BASIC_CARDINAL_LAYERS: [&[(i32, i32)]; BASIC_LAYER_COUNT as usize] = [
    &[(-1, 0)],
    &[(-1, -1), (-1, 1)],
    &[(0, -1), (0, 1), (-1, 0), (1, 0), (-1, -1)],
    &MOORE_STEPS,
    &[(-2, 0), (2, 0), (0, -2), (0, 2)],
    &[(-2, -1), (-2, 1), (2, -1), (2, 1)],
];

const BASIC_DIAGONAL_LAYERS: [&[(i32, i32)]; BASIC_LAYER_COUNT as usize] = [
    &[(-1, -1)],
    &[(-1, 0), (0, -1)],
    &[(-1, -1), (-1, 0), (-1, 1), (0, -1), (1, -1)],
    &MOORE_STEPS,
    &[
        (-1, -1),
        (-1, 1),
        (1, -1),
        (1, 1),
        (-2, -2),
        (-2, 2),
        (2, -2),
        (2, 2),
        (-1, 0),
        (1, 0),
        (0, -1),
        (0, 1),
    ],
    &[(-2, 0), (2, 0), (0, -2), (0, 2), (-1, -2), (-1, 2), (1, -2), (1, 2)],
];

pub(super) fn basic_layer(level: u8, diagonal: bool) -> &'static [(i32, i32)] {
    debug_assert!((1..=BASIC_LAYER_COUNT).contains(&level));
    let slot = (level as usize - 1).min(BASIC_CARDINAL_LAYERS.len() - 1);
    if diagonal { BASIC_DIAGONAL_LAYERS[slot] } else { BASIC_CARDINAL_LAYERS[slot] }
}

pub(super) fn launch_pattern(level: u8) -> &'static [(i32, i32)] {
    LAUNCH_PATTERNS[(level as usize).min(LAUNCH_PATTERNS.len() - 1)]
}

// One table per launch level, authored for rightward aim.
const LAUNCH_PATTERNS: [&[(i32, i32)]; 10] = [
    // Level 0: a short row landing ahead of the player.
    &[(2, 0), (3, 0), (4, 0)],
    // Level 1: the row plus a vertical pinch at its centre.
    &[(2, 0), (3, 0), (4, 0), (3, -1), (3, 1)],
    // Level 2: a solid 3x3 block.
    &[(2, -1), (2, 0), (2, 1), (3, -1), (3, 0), (3, 1), (4, -1), (4, 0), (4, 1)],
    // Level 3: the block grown into a diamond.
    &[
        (1, 0),
        (2, -1),
        (2, 0),
        (2, 1),
        (3, -1),
        (3, 0),
        (3, 1),
        (4, -1),
        (4, 0),
        (4, 1),
        (5, 0),
        (3, -2),
        (3, 2),
    ],
    // Level 4: the diamond with splash on the corners.
    &[
        (1, 0),
        (1, -2),
        (1, 2),
        (2, -1),
        (2, 0),
        (2, 1),
        (3, -1),
        (3, 0),
        (3, 1),
        (4, -1),
        (4, 0),
        (4, 1),
        (5, 0),
        (3, -2),
        (3, 2),
        (5, -2),
        (5, 2),
    ],
    // Level 5: asymmetric fill between the diamond and the full square.
    &[
        (1, 0),
        (1, -2),
        (1, 1),
        (1, 2),
        (2, -2),
        (2, -1),
        (2, 0),
        (2, 1),
        (3, -2),
        (3, -1),
        (3, 0),
        (3, 1),
        (3, 2),
        (4, -1),
        (4, 0),
        (4, 1),
        (4, 2),
        (5, 0),
        (5, -2),
        (5, 2),
        (5, -1),
    ],
    // Level 6: a solid 5x5 block.
    &[
        (1, -2),
        (1, -1),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, -2),
        (2, -1),
        (2, 0),
        (2, 1),
        (2, 2),
        (3, -2),
        (3, -1),
        (3, 0),
        (3, 1),
        (3, 2),
        (4, -2),
        (4, -1),
        (4, 0),
        (4, 1),
        (4, 2),
        (5, -2),
        (5, -1),
        (5, 0),
        (5, 1),
        (5, 2),
    ],
    // Level 7: the 5x5 block with capped ends.
    &[
        (1, -1),
        (1, 0),
        (1, 1),
        (2, -2),
        (2, -1),
        (2, 0),
        (2, 1),
        (2, 2),
        (3, -2),
        (3, -1),
        (3, 0),
        (3, 1),
        (3, 2),
        (4, -2),
        (4, -1),
        (4, 0),
        (4, 1),
        (4, 2),
        (5, -2),
        (5, -1),
        (5, 0),
        (5, 1),
        (5, 2),
        (6, -1),
        (6, 0),
        (6, 1),
    ],
    // Level 8: the capped block widened a further column.
    &[
        (1, -1),
        (1, 0),
        (1, 1),
        (2, -2),
        (2, -1),
        (2, 0),
        (2, 1),
        (2, 2),
        (3, -2),
        (3, -1),
        (3, 0),
        (3, 1),
        (3, 2),
        (4, -2),
        (4, -1),
        (4, 0),
        (4, 1),
        (4, 2),
        (5, -2),
        (5, -1),
        (5, 0),
        (5, 1),
        (5, 2),
        (6, -2),
        (6, -1),
        (6, 0),
        (6, 1),
        (6, 2),
    ],
    // Level 9: a full 6x7 sheet.
    &[
        (1, -3),
        (1, -2),
        (1, -1),
        (1, 0),
        (1, 1),
        (1, 2),
        (1, 3),
        (2, -3),
        (2, -2),
        (2, -1),
        (2, 0),
        (2, 1),
        (2, 2),
        (2, 3),
        (3, -3),
        (3, -2),
        (3, -1),
        (3, 0),
        (3, 1),
        (3, 2),
        (3, 3),
        (4, -3),
        (4, -2),
        (4, -1),
        (4, 0),
        (4, 1),
        (4, 2),
        (4, 3),
        (5, -3),
        (5, -2),
        (5, -1),
        (5, 0),
        (5, 1),
        (5, 2),
        (5, 3),
        (6, -3),
        (6, -2),
        (6, -1),
        (6, 0),
        (6, 1),
        (6, 2),
        (6, 3),
    ],
];
