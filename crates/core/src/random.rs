//! Uniform-sampling helpers over the session PRNG.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

pub(crate) fn uniform_usize(rng: &mut ChaCha8Rng, bound: usize) -> usize {
    debug_assert!(bound > 0);
    (rng.next_u64() % bound as u64) as usize
}

pub(crate) fn uniform_i32(rng: &mut ChaCha8Rng, min_value: i32, max_value: i32) -> i32 {
    debug_assert!(min_value <= max_value);
    let range_size = (max_value - min_value + 1) as u64;
    min_value + (rng.next_u64() % range_size) as i32
}

pub(crate) fn coin_flip(rng: &mut ChaCha8Rng) -> bool {
    rng.next_u64() & 1 == 0
}

pub(crate) fn shuffle<T>(rng: &mut ChaCha8Rng, items: &mut [T]) {
    for right in (1..items.len()).rev() {
        let left = uniform_usize(rng, right + 1);
        items.swap(left, right);
    }
}
