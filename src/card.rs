//! Card types and the 40-card catalog.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
///
/// Suits are ordered by the bonus they grant when their card is trump:
/// Spades beat Hearts, Hearts beat Diamonds, Diamonds beat Clubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades (`A`).
    Spades,
    /// Hearts (`B`).
    Hearts,
    /// Diamonds (`C`).
    Diamonds,
    /// Clubs (`D`).
    Clubs,
}

impl Suit {
    /// All suits, in catalog order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the single-character code of the suit.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Spades => 'A',
            Self::Hearts => 'B',
            Self::Diamonds => 'C',
            Self::Clubs => 'D',
        }
    }

    /// Parses a suit code.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownSuit`] if the code is not one of `A`-`D`.
    pub const fn from_code(code: char) -> Result<Self, CardError> {
        match code {
            'A' => Ok(Self::Spades),
            'B' => Ok(Self::Hearts),
            'C' => Ok(Self::Diamonds),
            'D' => Ok(Self::Clubs),
            other => Err(CardError::UnknownSuit(other)),
        }
    }

    /// Bonus added to the weight of this suit's card of the trump rank.
    #[must_use]
    pub const fn trump_bonus(self) -> u8 {
        match self {
            Self::Spades => 13,
            Self::Hearts => 12,
            Self::Diamonds => 11,
            Self::Clubs => 10,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Card rank. Eights, nines and tens are not part of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace (`1`).
    Ace,
    /// Two (`2`).
    Two,
    /// Three (`3`).
    Three,
    /// Four (`4`).
    Four,
    /// Five (`5`).
    Five,
    /// Six (`6`).
    Six,
    /// Seven (`7`).
    Seven,
    /// Jack (`B`).
    Jack,
    /// Queen (`D`).
    Queen,
    /// King (`E`).
    King,
}

impl Rank {
    /// All ranks, in catalog order.
    pub const ALL: [Self; 10] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Ranks from weakest to strongest. The manilha cycle follows this order
    /// and wraps from Three back to Four.
    pub const STRENGTH: [Self; 10] = [
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Queen,
        Self::Jack,
        Self::King,
        Self::Ace,
        Self::Two,
        Self::Three,
    ];

    /// Returns the single-character code of the rank.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Ace => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Jack => 'B',
            Self::Queen => 'D',
            Self::King => 'E',
        }
    }

    /// Parses a rank code.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownRank`] for anything outside the ten known
    /// rank codes.
    pub const fn from_code(code: char) -> Result<Self, CardError> {
        match code {
            '1' => Ok(Self::Ace),
            '2' => Ok(Self::Two),
            '3' => Ok(Self::Three),
            '4' => Ok(Self::Four),
            '5' => Ok(Self::Five),
            '6' => Ok(Self::Six),
            '7' => Ok(Self::Seven),
            'B' => Ok(Self::Jack),
            'D' => Ok(Self::Queen),
            'E' => Ok(Self::King),
            other => Err(CardError::UnknownRank(other)),
        }
    }

    /// Base strength of the rank, from 1 (Four) to 10 (Three).
    #[must_use]
    pub const fn base_weight(self) -> u8 {
        match self {
            Self::Four => 1,
            Self::Five => 2,
            Self::Six => 3,
            Self::Seven => 4,
            Self::Queen => 5,
            Self::Jack => 6,
            Self::King => 7,
            Self::Ace => 8,
            Self::Two => 9,
            Self::Three => 10,
        }
    }

    /// Returns the rank that becomes trump when this rank is revealed.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::STRENGTH[self.base_weight() as usize % Self::STRENGTH.len()]
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Position of the card in [`default_deck`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank.index() * Suit::ALL.len() + self.suit.index()
    }

    /// Returns the card's glyph from the Unicode playing cards block.
    ///
    /// The two code characters are the low hex digits of the code point, so
    /// `B3` (Three of Hearts) maps to U+1F0B3.
    #[must_use]
    pub fn unicode(self) -> char {
        let suit = self.suit.code().to_digit(16).unwrap_or(0);
        let rank = self.rank.code().to_digit(16).unwrap_or(0);
        char::from_u32(0x1F000 | (suit << 4) | rank).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.code(), self.rank.code())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(suit), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::InvalidLength);
        };
        Ok(Self::new(Suit::from_code(suit)?, Rank::from_code(rank)?))
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 40;

/// Returns the full deck in catalog order: ranks Ace to King, each in suit
/// order Spades, Hearts, Diamonds, Clubs.
#[must_use]
pub fn default_deck() -> [Card; DECK_SIZE] {
    core::array::from_fn(|i| {
        Card::new(
            Suit::ALL[i % Suit::ALL.len()],
            Rank::ALL[i / Suit::ALL.len()],
        )
    })
}
