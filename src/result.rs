//! Seat and outcome types shared by hands and the match.

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The first player added to the game.
    First,
    /// The second player added to the game.
    Second,
}

impl Seat {
    /// Both seats, in roster order.
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Returns the opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Returns the roster index of the seat.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the seat for a roster index, wrapping on parity.
    #[must_use]
    pub const fn from_parity(n: usize) -> Self {
        if n % 2 == 0 { Self::First } else { Self::Second }
    }
}

/// Result of a round or a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The seat won.
    Won(Seat),
    /// Nobody won.
    Draw,
}

impl Outcome {
    /// Returns the winning seat, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Seat> {
        match self {
            Self::Won(seat) => Some(seat),
            Self::Draw => None,
        }
    }
}
