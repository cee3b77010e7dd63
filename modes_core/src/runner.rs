//! RNG setup for mode runs

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// RNG for a run: seeded for reproducibility, or from entropy
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
