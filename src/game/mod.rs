//! Match engine and state management.

use alloc::vec::Vec;
use core::cmp::Ordering;

use tracing::info;

use crate::card::Card;
use crate::deck::shuffled_deck;
use crate::error::IdentityError;
use crate::hand::Hand;
use crate::identity::{GameId, IdProvider};
use crate::options::{GameOptions, Seed};
use crate::player::Player;
use crate::result::{Outcome, Seat};

mod actions;
mod roster;
pub mod state;

pub use state::GameState;

/// A two-player match: the roster, the seed, and every hand dealt so far.
///
/// The engine is single-writer: `play` calls must be serialized by the
/// caller. Completed hands are never modified once the next one is dealt.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    options: GameOptions,
    state: GameState,
    /// Seats; a removed player leaves its slot empty.
    players: [Option<Player>; 2],
    /// Every hand dealt, the last one being active.
    hands: Vec<Hand>,
}

impl Game {
    /// Creates an empty game, drawing its identifier from `ids`.
    ///
    /// # Example
    ///
    /// ```
    /// use truco::{Game, GameOptions, RandomIds};
    ///
    /// let game = Game::new(GameOptions::default(), &mut RandomIds::new()).unwrap();
    /// assert!(!game.is_running());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the identity provider fails.
    pub fn new(options: GameOptions, ids: &mut impl IdProvider) -> Result<Self, IdentityError> {
        Ok(Self {
            id: GameId::new(ids.next_id()?),
            options,
            state: GameState::WaitingForPlayers,
            players: [None, None],
            hands: Vec::new(),
        })
    }

    /// Sets the shuffle seed for every hand dealt from now on.
    ///
    /// Zero in either half means fresh entropy for each hand.
    pub const fn seed(&mut self, seed1: u64, seed2: u64) {
        self.options.seed = Seed::new(seed1, seed2);
    }

    /// Shuffles and deals the next hand. Does nothing if a seat is empty.
    fn deal_hand(&mut self) {
        let index = self.hands.len();
        let [first, second] = &mut self.players;
        let (Some(first), Some(second)) = (first.as_mut(), second.as_mut()) else {
            return;
        };

        let seed = self.options.seed.for_hand(index);
        let leader = Seat::from_parity(index);
        let hand = Hand::deal(
            index,
            shuffled_deck(seed.first, seed.second),
            leader,
            [first, second],
        );
        info!(
            game = %self.id,
            hand = index,
            manilha = %hand.manilha(),
            ?leader,
            "hand dealt"
        );
        self.hands.push(hand);
    }

    /// Returns the game identifier.
    #[must_use]
    pub const fn id(&self) -> &GameId {
        &self.id
    }

    /// Returns the match options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current match state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether hands are being played.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Returns the player in `seat`, if the seat is taken.
    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players[seat.index()].as_ref()
    }

    /// Returns both seats.
    #[must_use]
    pub const fn players(&self) -> &[Option<Player>; 2] {
        &self.players
    }

    /// Returns every hand dealt so far, oldest first.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the hand being played.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        self.hands.last()
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` before the match starts or if that seat was emptied.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.player(self.current_hand()?.current())
    }

    /// Returns the manilha of the hand being played.
    #[must_use]
    pub fn manilha(&self) -> Option<Card> {
        self.current_hand().map(Hand::manilha)
    }

    /// Returns the winner of the most recently resolved round.
    ///
    /// Looks back into the previous hand when no round of the current one
    /// has been resolved yet. Returns `None` if that round was a draw or no
    /// round has been played.
    #[must_use]
    pub fn last_round_winner(&self) -> Option<&Player> {
        let outcome = self
            .hands
            .iter()
            .rev()
            .find_map(|hand| hand.rounds().last())?;
        self.player(outcome.winner()?)
    }

    /// Returns the winner of the most recently resolved hand, or `None` if it
    /// was a draw or no hand has been resolved.
    #[must_use]
    pub fn hand_winner(&self) -> Option<&Player> {
        let outcome = self.hands.iter().rev().find_map(Hand::winner)?;
        self.player(outcome.winner()?)
    }

    /// Returns the number of hands won by each seat, indexed by
    /// [`Seat::index`].
    #[must_use]
    pub fn hand_wins(&self) -> [u32; 2] {
        let mut wins = [0; 2];
        for seat in self.hands.iter().filter_map(|hand| hand.winner()?.winner()) {
            wins[seat.index()] += 1;
        }
        wins
    }

    /// Returns the match winner once the match has finished with one seat
    /// ahead.
    #[must_use]
    pub fn match_winner(&self) -> Option<&Player> {
        if self.state != GameState::Finished {
            return None;
        }
        let [first, second] = self.hand_wins();
        let outcome = match first.cmp(&second) {
            Ordering::Greater => Outcome::Won(Seat::First),
            Ordering::Less => Outcome::Won(Seat::Second),
            Ordering::Equal => Outcome::Draw,
        };
        self.player(outcome.winner()?)
    }
}
