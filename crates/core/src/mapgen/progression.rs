//! Per-floor tuning rules: hazard counts, wall density, fire countdowns,
//! and the floor dimension bands.

use rand_chacha::ChaCha8Rng;

use crate::random::{uniform_i32, uniform_usize};

/// Minimum 8-directional step distance required between spawn and stairway.
pub const MIN_PATH_LENGTH: u32 = 4;

const FIRE_COUNTDOWN_MIN: i32 = 4;
const FIRE_COUNTDOWN_MAX: i32 = 8;

// Inclusive floor-area bands for floors 1..=25. Floor 1 is pinned at 12x12;
// later floors grow roughly quadratically.
const MIN_AREA_BY_FLOOR: [usize; 25] = [
    144, 145, 171, 201, 235, 271, 309, 349, 391, 435, 481, 529, 579, 631, 685, 741, 799, 859, 921,
    985, 1051, 1119, 1189, 1261, 1335,
];
const MAX_AREA_BY_FLOOR: [usize; 25] = [
    144, 170, 200, 234, 270, 308, 348, 390, 434, 480, 528, 578, 630, 684, 740, 798, 858, 920, 984,
    1050, 1118, 1188, 1260, 1334, 1410,
];

pub(crate) fn random_countdown(rng: &mut ChaCha8Rng) -> i32 {
    uniform_i32(rng, FIRE_COUNTDOWN_MIN, FIRE_COUNTDOWN_MAX)
}

pub(super) fn inner_wall_count(interior_cells: usize) -> usize {
    interior_cells / 10
}

pub(super) fn fire_count(floor_number: u32, interior_cells: usize) -> usize {
    match floor_number {
        0 | 1 => 1,
        2 => 3,
        _ => (interior_cells / 20 + floor_number as usize - 1).min(interior_cells / 5),
    }
}

pub(super) fn blue_fire_count(floor_number: u32) -> usize {
    if floor_number < 3 {
        return 0;
    }
    (((floor_number - 2) / 3) as usize + 1).min(2)
}

/// Pick floor dimensions for `floor_number`, uniformly among all (w, h)
/// pairs whose area falls inside the floor's band. Floor 1 is fixed at
/// 12x12; floors beyond the last band reuse it.
pub fn floor_dimensions(rng: &mut ChaCha8Rng, floor_number: u32) -> (usize, usize) {
    if floor_number <= 1 {
        return (12, 12);
    }
    let slot = ((floor_number - 1) as usize).min(MIN_AREA_BY_FLOOR.len() - 1);
    let min_area = MIN_AREA_BY_FLOOR[slot];
    let max_area = MAX_AREA_BY_FLOOR[slot];

    let min_dim = ceil_sqrt(min_area);
    let max_dim = max_area.isqrt() + 1;

    let mut pairs = Vec::new();
    for width in min_dim..=max_dim {
        for height in min_dim..=max_dim {
            let area = width * height;
            if (min_area..=max_area).contains(&area) {
                pairs.push((width, height));
            }
        }
    }
    if pairs.is_empty() {
        return (12, 12);
    }
    pairs[uniform_usize(rng, pairs.len())]
}

fn ceil_sqrt(value: usize) -> usize {
    let root = value.isqrt();
    if root * root == value { root } else { root + 1 }
}
