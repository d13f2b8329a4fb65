//! Per-trial RNG stream derivation.
//!
//! Batch drivers run many independent trials from one user-visible seed.
//! Each trial gets its own domain-separated stream seed so trials stay
//! statistically independent and order-insensitive, which also makes them
//! safe to farm out across workers without coordination.

use rand::SeedableRng;
use rand::rngs::SmallRng;

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash = (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Derive the stream seed for one trial from the user-visible base seed.
#[must_use]
pub fn derive_trial_seed(base_seed: u64, trial: u64) -> u64 {
    // Domain-separated FNV input
    let mut buf = [0_u8; 22];
    buf[..6].copy_from_slice(b"DBOARD");
    buf[6..14].copy_from_slice(&base_seed.to_le_bytes());
    buf[14..22].copy_from_slice(&trial.to_le_bytes());
    fnv1a64(&buf)
}

/// Construct the RNG for one trial.
#[must_use]
pub fn trial_rng(base_seed: u64, trial: u64) -> SmallRng {
    SmallRng::seed_from_u64(derive_trial_seed(base_seed, trial))
}
