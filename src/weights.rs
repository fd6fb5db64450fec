//! Per-hand card strength table.

use core::cmp::Ordering;

use crate::card::{Card, DECK_SIZE, Rank, Suit, default_deck};

/// Strength of every card for one hand.
///
/// Built once when the manilha is revealed and never changed afterwards.
/// Non-trump cards of the same rank share a weight; the four trump cards sit
/// above every other card, ordered by [`Suit::trump_bonus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weights {
    table: [u8; DECK_SIZE],
    trump: Option<Rank>,
}

impl Weights {
    /// Returns the base table, without any trump.
    #[must_use]
    pub fn base() -> Self {
        Self {
            table: default_deck().map(|card| card.rank.base_weight()),
            trump: None,
        }
    }

    /// Returns the base table with the four cards of `trump` promoted.
    #[must_use]
    pub fn with_trump(trump: Rank) -> Self {
        let mut weights = Self::base();
        for suit in Suit::ALL {
            weights.table[Card::new(suit, trump).index()] += suit.trump_bonus();
        }
        weights.trump = Some(trump);
        weights
    }

    /// Returns the trump rank, if one has been applied.
    #[must_use]
    pub const fn trump(&self) -> Option<Rank> {
        self.trump
    }

    /// Returns the strength of `card`.
    #[must_use]
    pub const fn weight(&self, card: Card) -> u8 {
        self.table[card.index()]
    }

    /// Compares two cards. `Greater` means `a` wins, `Equal` is a tie.
    #[must_use]
    pub fn compare(&self, a: Card, b: Card) -> Ordering {
        self.weight(a).cmp(&self.weight(b))
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::base()
    }
}
