use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use rand::rngs::{OsRng, SmallRng};
use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore, SeedableRng};

/// Source used to order the characters of a password.
///
/// Character selection always uses the secure source. Only the permutation
/// step differs between the two strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShuffleStrategy {
    /// Fisher-Yates driven by the secure source
    Secure,
    /// Fisher-Yates driven by a clock-seeded general purpose generator.
    /// Ordering becomes guessable, content does not.
    Fallback,
}

impl ShuffleStrategy {
    /// Checks once whether the operating system source can be read.
    pub fn probe() -> ShuffleStrategy {
        let mut probe = [0u8; 8];
        match OsRng.try_fill_bytes(&mut probe) {
            Ok(()) => {
                debug!("os random source available, using secure shuffle");
                ShuffleStrategy::Secure
            }
            Err(error) => {
                warn!(
                    "os random source unavailable ({}), password ordering falls back to a general purpose generator",
                    error
                );
                ShuffleStrategy::Fallback
            }
        }
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, ShuffleStrategy::Secure)
    }

    pub fn shuffle<T, R>(&self, items: &mut [T], secure: &mut R)
    where
        R: RngCore + CryptoRng,
    {
        match self {
            ShuffleStrategy::Secure => items.shuffle(secure),
            ShuffleStrategy::Fallback => items.shuffle(&mut fallback_rng()),
        }
    }
}

impl Default for ShuffleStrategy {
    fn default() -> Self {
        ShuffleStrategy::probe()
    }
}

impl std::fmt::Display for ShuffleStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShuffleStrategy::Secure => f.write_str("secure"),
            ShuffleStrategy::Fallback => f.write_str("fallback"),
        }
    }
}

fn fallback_rng() -> SmallRng {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();

    SmallRng::seed_from_u64(seed)
}
