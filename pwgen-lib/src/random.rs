use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroizing;

use crate::charset::{CharacterClass, ALLOWED_ALPHABET};
use crate::error::GeneratorError;
use crate::password::Password;
use crate::shuffle::ShuffleStrategy;

/// One guaranteed character per class.
pub const MIN_LENGTH: usize = CharacterClass::ALL.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordGenerator {
    strategy: ShuffleStrategy,
}

impl PasswordGenerator {
    /// Probes the platform for the shuffle strategy to use.
    pub fn new() -> PasswordGenerator {
        PasswordGenerator::with_strategy(ShuffleStrategy::probe())
    }

    pub fn with_strategy(strategy: ShuffleStrategy) -> PasswordGenerator {
        PasswordGenerator { strategy }
    }

    pub fn strategy(&self) -> ShuffleStrategy {
        self.strategy
    }

    pub fn generate(&self, length: usize) -> Result<Password, GeneratorError> {
        self.generate_with(length, &mut OsRng)
    }

    /// Generates a password of `length` characters drawing every character,
    /// and under the secure strategy the ordering, from `rng`.
    pub fn generate_with<R>(&self, length: usize, rng: &mut R) -> Result<Password, GeneratorError>
    where
        R: RngCore + CryptoRng,
    {
        if length < MIN_LENGTH {
            return Err(GeneratorError::InvalidLength {
                length,
                minimum: MIN_LENGTH,
            });
        }

        debug!(
            "generating password of length {} with {} shuffle",
            length, self.strategy
        );

        let mut chars = Zeroizing::new(Vec::with_capacity(length));

        for class in CharacterClass::ALL {
            chars.push(pick(class.chars(), rng));
        }

        for _ in MIN_LENGTH..length {
            chars.push(pick(ALLOWED_ALPHABET, rng));
        }

        self.strategy.shuffle(chars.as_mut_slice(), rng);

        // Exact capacity: a reallocation would leave an unwiped copy
        let mut password = String::with_capacity(length);
        password.extend(chars.iter().map(|&c| c as char));

        Ok(Password::new(password))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        PasswordGenerator::new()
    }
}

fn pick<R: RngCore + CryptoRng>(set: &[u8], rng: &mut R) -> u8 {
    set[rng.gen_range(0..set.len())]
}

pub fn random_password(length: usize) -> Result<Password, GeneratorError> {
    PasswordGenerator::new().generate(length)
}
