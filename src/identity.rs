//! Identifier generation.

use alloc::string::String;
use core::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::IdentityError;

/// Source of unique identifiers for games and players.
pub trait IdProvider {
    /// Returns a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot produce an identifier.
    fn next_id(&mut self) -> Result<String, IdentityError>;
}

const ALPHABET: &[u8; 64] = b"_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of identifiers produced by [`RandomIds`].
pub const ID_LENGTH: usize = 21;

/// URL-safe random identifiers, 21 characters long.
#[derive(Debug, Clone)]
pub struct RandomIds {
    rng: ChaCha8Rng,
}

impl RandomIds {
    /// Creates a provider seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a provider that yields the same sequence for the same seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for RandomIds {
    fn next_id(&mut self) -> Result<String, IdentityError> {
        Ok((0..ID_LENGTH)
            .map(|_| char::from(ALPHABET[self.rng.random_range(0..ALPHABET.len())]))
            .collect())
    }
}

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier.
            #[must_use]
            pub const fn new(id: String) -> Self {
                Self(id)
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_type!(
    /// Stable identifier of a player.
    PlayerId
);

id_type!(
    /// Stable identifier of a game.
    GameId
);
