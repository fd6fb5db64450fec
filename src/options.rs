//! Match configuration.

/// Pair of 64-bit seeds driving the deck shuffle.
///
/// When either half is zero every hand is shuffled from fresh entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Seed {
    /// First half of the generator state.
    pub first: u64,
    /// Second half of the generator state.
    pub second: u64,
}

impl Seed {
    /// Creates a seed pair.
    #[must_use]
    pub const fn new(first: u64, second: u64) -> Self {
        Self { first, second }
    }

    /// Returns whether shuffles are reproducible.
    #[must_use]
    pub const fn is_deterministic(self) -> bool {
        self.first != 0 && self.second != 0
    }

    /// Returns the seed for the hand at `index`: the second half is offset by
    /// the index so every hand of a seeded match gets its own permutation.
    ///
    /// # Example
    ///
    /// ```
    /// use truco::Seed;
    ///
    /// assert_eq!(Seed::new(123, 456).for_hand(2), Seed::new(123, 458));
    /// ```
    #[must_use]
    pub const fn for_hand(self, index: usize) -> Self {
        if !self.is_deterministic() {
            return self;
        }
        Self {
            first: self.first,
            second: self.second.wrapping_add(index as u64),
        }
    }
}

/// Configuration options for a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use truco::GameOptions;
///
/// let options = GameOptions::default()
///     .with_target_wins(3)
///     .with_seed(123, 456);
/// assert_eq!(options.target_wins, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of hand wins that ends the match.
    pub target_wins: u32,
    /// Shuffle seed.
    pub seed: Seed,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            target_wins: 12,
            seed: Seed::default(),
        }
    }
}

impl GameOptions {
    /// Sets the number of hand wins that ends the match.
    ///
    /// # Example
    ///
    /// ```
    /// use truco::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_wins(5);
    /// assert_eq!(options.target_wins, 5);
    /// ```
    #[must_use]
    pub const fn with_target_wins(mut self, target_wins: u32) -> Self {
        self.target_wins = target_wins;
        self
    }

    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use truco::{GameOptions, Seed};
    ///
    /// let options = GameOptions::default().with_seed(123, 456);
    /// assert_eq!(options.seed, Seed::new(123, 456));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed1: u64, seed2: u64) -> Self {
        self.seed = Seed::new(seed1, seed2);
        self
    }
}
