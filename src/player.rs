//! Participants and the cards they hold.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PlayerError;
use crate::identity::{IdProvider, PlayerId};

/// Minimum length of a display name, in characters.
pub const MIN_NAME_LEN: usize = 2;
/// Maximum length of a display name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// A participant with a stable identifier and up to three cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    cards: Vec<Card>,
}

impl Player {
    /// Creates a player, drawing its identifier from `ids`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is shorter than 2 or longer than 100
    /// characters, or if the provider fails.
    pub fn new(name: impl Into<String>, ids: &mut impl IdProvider) -> Result<Self, PlayerError> {
        let name = name.into();
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(PlayerError::NameTooLong);
        }
        if len < MIN_NAME_LEN {
            return Err(PlayerError::NameTooShort);
        }

        Ok(Self {
            id: PlayerId::new(ids.next_id()?),
            name,
            cards: Vec::with_capacity(3),
        })
    }

    /// Returns the player's identifier.
    #[must_use]
    pub const fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards currently held, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the player holds `card`.
    #[must_use]
    pub fn has_card(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Replaces the held cards with a fresh deal.
    pub(crate) fn receive(&mut self, cards: &[Card]) {
        self.cards.clear();
        self.cards.extend_from_slice(cards);
    }

    /// Removes `card` from the held cards. Returns `false` if it was not held.
    pub(crate) fn take_card(&mut self, card: Card) -> bool {
        let Some(position) = self.cards.iter().position(|&held| held == card) else {
            return false;
        };
        self.cards.remove(position);
        true
    }
}
