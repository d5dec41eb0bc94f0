//! Reproducible benchmark inputs.
//!
//! Generators are created from an explicit seed and passed by the caller;
//! there is no process-wide random state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws `len` integers uniformly from `[0, max_value)`.
///
/// # Panics
/// Panics if `max_value <= 0`.
pub fn random_sequence<R: Rng>(rng: &mut R, len: usize, max_value: i64) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(0..max_value)).collect()
}

/// Converts exponents into element counts `⌊10^p⌋`.
pub fn element_counts(powers: &[f64]) -> Vec<usize> {
    powers
        .iter()
        // Nudge up so exact powers such as 10^3 never truncate to 999.
        .map(|&p| (10f64.powf(p) * (1.0 + 1e-12)).floor() as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let a = random_sequence(&mut create_rng(42), 100, 99);
        let b = random_sequence(&mut create_rng(42), 100, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_sequence() {
        let a = random_sequence(&mut create_rng(1), 100, 1_000_000);
        let b = random_sequence(&mut create_rng(2), 100, 1_000_000);
        assert_ne!(a, b);
    }

    #[test]
    fn test_values_in_range() {
        let values = random_sequence(&mut create_rng(7), 1000, 99);
        assert_eq!(values.len(), 1000);
        assert!(values.iter().all(|&v| (0..99).contains(&v)));
    }

    #[test]
    fn test_element_counts() {
        assert_eq!(
            element_counts(&[0.0, 1.0, 1.5, 3.0, 6.0]),
            vec![1, 10, 31, 1000, 1_000_000]
        );
    }
}
