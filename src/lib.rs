//! A two-player Truco engine.
//!
//! The crate provides a [`Game`] type that deals reproducible hands, reveals
//! the manilha, resolves each round under that hand's card weights, and keeps
//! score until a player reaches the target number of hand wins.
//!
//! # Example
//!
//! ```
//! use truco::{Game, GameOptions, Player, RandomIds};
//!
//! let mut ids = RandomIds::seeded(1);
//! let mut game = Game::new(GameOptions::default().with_seed(123, 456), &mut ids).unwrap();
//! game.add_player(Player::new("player 1", &mut ids).unwrap()).unwrap();
//! game.add_player(Player::new("player 2", &mut ids).unwrap()).unwrap();
//! game.start().unwrap();
//!
//! let current = game.current_player().unwrap();
//! let (id, card) = (current.id().clone(), current.cards()[0]);
//! game.play(&id, card).unwrap();
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod identity;
pub mod options;
pub mod player;
pub mod result;
pub mod weights;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, default_deck};
pub use deck::{Pcg, shuffled_deck};
pub use error::{CardError, IdentityError, PlayError, PlayerError, RosterError};
pub use game::{Game, GameState};
pub use hand::{Hand, HandPhase};
pub use identity::{GameId, IdProvider, PlayerId, RandomIds};
pub use options::{GameOptions, Seed};
pub use player::Player;
pub use result::{Outcome, Seat};
pub use weights::Weights;
