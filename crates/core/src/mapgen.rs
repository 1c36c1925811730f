//! Procedural floor generation domain split into coherent submodules.

pub mod model;
pub mod progression;

mod generator;
mod reachability;

use rand_chacha::ChaCha8Rng;

pub use generator::{FloorGenerator, MAX_GENERATION_ATTEMPTS};
pub use model::GeneratedFloor;
pub use progression::{MIN_PATH_LENGTH, floor_dimensions};

pub fn generate_floor(
    rng: &mut ChaCha8Rng,
    width: usize,
    height: usize,
    floor_number: u32,
) -> GeneratedFloor {
    FloorGenerator::new(width, height, floor_number).generate(rng)
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::{FloorGenerator, generate_floor};

    #[test]
    fn generate_floor_matches_floor_generator_output() {
        let mut left_rng = ChaCha8Rng::seed_from_u64(123);
        let mut right_rng = ChaCha8Rng::seed_from_u64(123);

        let from_helper = generate_floor(&mut left_rng, 12, 12, 2);
        let from_generator = FloorGenerator::new(12, 12, 2).generate(&mut right_rng);

        assert_eq!(from_helper, from_generator);
    }
}
