//! Random sequence generation.
//!
//! The random capability is injected: `generate` draws from any `rand::Rng`,
//! so a run is reproducible by passing a seeded generator. Nothing here
//! touches process-wide random state.

use crate::sequence::BitSequence;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `length` independently, uniformly drawn bits.
///
/// # Arguments
/// - `length`: number of bits to draw (zero yields an empty sequence)
/// - `rng`: the random source; pass a seeded `ChaCha8Rng` for determinism
pub fn generate<R: Rng + ?Sized>(length: usize, rng: &mut R) -> BitSequence {
    let mut bits = Vec::with_capacity(length);
    for _ in 0..length {
        let bit: u8 = rng.gen_range(0..=1);
        bits.push(bit);
    }
    BitSequence::from_raw(bits)
}

/// Generate a sequence from a fresh generator seeded with `seed`.
///
/// Same seed, same sequence.
pub fn generate_with_seed(seed: u64, length: usize) -> BitSequence {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate(length, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length() {
        for length in [0, 1, 32, 1000] {
            let seq = generate_with_seed(42, length);
            assert_eq!(seq.len(), length);
        }
    }

    #[test]
    fn test_all_elements_binary() {
        let seq = generate_with_seed(7, 4096);
        assert!(seq.iter().all(|&bit| bit == 0 || bit == 1));
    }

    #[test]
    fn test_determinism() {
        let seq1 = generate_with_seed(12345, 256);
        let seq2 = generate_with_seed(12345, 256);
        assert_eq!(seq1, seq2);
    }

    #[test]
    fn test_different_seeds() {
        let seq1 = generate_with_seed(1, 256);
        let seq2 = generate_with_seed(2, 256);
        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_both_values_occur() {
        let seq = generate_with_seed(99, 1024);
        assert!(seq.iter().any(|&bit| bit == 0));
        assert!(seq.iter().any(|&bit| bit == 1));
    }

    #[test]
    fn test_injected_rng_consumed_in_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let first = generate(16, &mut rng);
        let second = generate(16, &mut rng);
        // Two draws from one stream differ; re-seeding reproduces the first.
        assert_ne!(first, second);
        assert_eq!(first, generate_with_seed(5, 16));
    }
}
