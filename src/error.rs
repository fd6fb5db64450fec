//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when parsing a card code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The code is not exactly two characters long.
    #[error("card code must be exactly two characters")]
    InvalidLength,
    /// The first character is not a known suit.
    #[error("unknown suit code {0:?}")]
    UnknownSuit(char),
    /// The second character is not one of the ten known ranks.
    #[error("unknown rank code {0:?}")]
    UnknownRank(char),
}

/// Failure reported by an identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to generate identifier: {0}")]
pub struct IdentityError(pub String);

/// Errors that can occur when creating a player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Name is shorter than two characters.
    #[error("player name has less than 2 characters")]
    NameTooShort,
    /// Name is longer than one hundred characters.
    #[error("player name has more than 100 characters")]
    NameTooLong,
    /// The identity provider failed.
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Errors that can occur while managing the roster or starting a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Both seats are taken.
    #[error("the game has reached the maximum amount of players")]
    GameFull,
    /// A player with the same identifier is already seated.
    #[error("player is already in the game")]
    PlayerAlreadyInGame,
    /// No seated player has the given identifier.
    #[error("player id not found")]
    PlayerNotFound,
    /// A seat is still empty.
    #[error("not enough players to start the game")]
    NotEnoughPlayers,
    /// The match has already been started.
    #[error("the game has already started")]
    AlreadyStarted,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The match is not running.
    #[error("the game is not running")]
    GameNotRunning,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotPlayerTurn,
    /// The player does not hold the card.
    #[error("player does not have this card")]
    PlayerDoesNotHaveCard,
}
