//! A single deal and its round resolution.

use alloc::vec::Vec;
use core::cmp::Ordering;

use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank};
use crate::error::PlayError;
use crate::player::Player;
use crate::result::{Outcome, Seat};
use crate::weights::Weights;

/// Number of rounds in a hand.
pub const ROUNDS: usize = 3;

/// Number of cards dealt to each player.
pub const CARDS_PER_PLAYER: usize = 3;

/// Where a hand stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandPhase {
    /// The given round (0, 1 or 2) is being played.
    Round(usize),
    /// All rounds are played and the winner is known.
    Resolved,
}

/// One deal: the shuffled deck, the manilha, and the rounds played so far.
///
/// A hand is dealt on construction and accepts plays until its third round
/// is resolved. After that it never changes.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Position of this hand within its match, starting at 0.
    index: usize,
    deck: [Card; DECK_SIZE],
    /// Index of the next undealt card.
    dealt: usize,
    manilha: Card,
    weights: Weights,
    pile: Vec<Card>,
    rounds: Vec<Outcome>,
    /// Seat that opened the current round.
    leader: Seat,
    current: Seat,
    winner: Option<Outcome>,
}

impl Hand {
    /// Reveals the manilha and deals three cards to each player, leader first.
    pub(crate) fn deal(
        index: usize,
        deck: [Card; DECK_SIZE],
        leader: Seat,
        players: [&mut Player; 2],
    ) -> Self {
        let mut hand = Self::reveal(index, deck, leader);
        hand.draw_cards(players);
        hand
    }

    /// Takes the first card as the manilha and promotes the rank after it.
    fn reveal(index: usize, deck: [Card; DECK_SIZE], leader: Seat) -> Self {
        let manilha = deck[0];
        Self {
            index,
            deck,
            dealt: 1,
            manilha,
            weights: Weights::with_trump(manilha.rank.next()),
            pile: Vec::with_capacity(ROUNDS * 2),
            rounds: Vec::with_capacity(ROUNDS),
            leader,
            current: leader,
            winner: None,
        }
    }

    fn draw_cards(&mut self, mut players: [&mut Player; 2]) {
        for seat in [self.leader, self.leader.other()] {
            let end = self.dealt + CARDS_PER_PLAYER;
            players[seat.index()].receive(&self.deck[self.dealt..end]);
            self.dealt = end;
        }
    }

    /// Moves `card` from `player` to the pile and resolves the round if it is
    /// now complete. Returns the round outcome when one was decided.
    ///
    /// The caller is responsible for checking that `player` sits in the
    /// current seat.
    pub(crate) fn play(
        &mut self,
        player: &mut Player,
        card: Card,
    ) -> Result<Option<Outcome>, PlayError> {
        if self.is_resolved() {
            return Err(PlayError::GameNotRunning);
        }
        if !player.take_card(card) {
            return Err(PlayError::PlayerDoesNotHaveCard);
        }
        self.pile.push(card);
        Ok(self.resolve_round())
    }

    fn resolve_round(&mut self) -> Option<Outcome> {
        if self.pile.len() % 2 == 1 {
            self.current = self.current.other();
            return None;
        }
        let &[.., previous, played] = self.pile.as_slice() else {
            return None;
        };

        // `current` is still the seat that played second.
        let outcome = match self.weights.compare(played, previous) {
            Ordering::Greater => Outcome::Won(self.current),
            Ordering::Less => {
                self.current = self.current.other();
                Outcome::Won(self.current)
            }
            Ordering::Equal => Outcome::Draw,
        };
        self.rounds.push(outcome);

        if outcome == Outcome::Draw {
            // A drawn round is led next by whoever took the first round; if
            // that one was drawn too, the same seat leads again.
            self.current = match self.rounds.first() {
                Some(Outcome::Won(seat)) => *seat,
                _ => self.leader,
            };
        }
        self.leader = self.current;

        debug!(
            hand = self.index,
            round = self.rounds.len() - 1,
            %previous,
            %played,
            ?outcome,
            "round resolved"
        );

        if self.rounds.len() == ROUNDS {
            self.winner = Some(self.tally());
        }
        Some(outcome)
    }

    /// Majority of won rounds; a tie goes to the winner of the first round.
    fn tally(&self) -> Outcome {
        let wins = |seat| {
            self.rounds
                .iter()
                .filter(|&&round| round == Outcome::Won(seat))
                .count()
        };
        match wins(Seat::First).cmp(&wins(Seat::Second)) {
            Ordering::Greater => Outcome::Won(Seat::First),
            Ordering::Less => Outcome::Won(Seat::Second),
            Ordering::Equal => self.rounds.first().copied().unwrap_or(Outcome::Draw),
        }
    }

    /// Returns the position of this hand within its match.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the revealed card that decided the trump rank.
    #[must_use]
    pub const fn manilha(&self) -> Card {
        self.manilha
    }

    /// Returns the rank whose four cards are trump for this hand.
    #[must_use]
    pub const fn trump_rank(&self) -> Rank {
        self.manilha.rank.next()
    }

    /// Returns the strength table of this hand.
    #[must_use]
    pub const fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Compares two cards under this hand's weights. `Greater` means `a` wins.
    #[must_use]
    pub fn compare_cards(&self, a: Card, b: Card) -> Ordering {
        self.weights.compare(a, b)
    }

    /// Returns the cards played so far, in play order.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Returns the outcome of every resolved round.
    #[must_use]
    pub fn rounds(&self) -> &[Outcome] {
        &self.rounds
    }

    /// Returns the index of the round being played (3 once resolved).
    #[must_use]
    pub fn round(&self) -> usize {
        self.rounds.len()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> HandPhase {
        if self.is_resolved() {
            HandPhase::Resolved
        } else {
            HandPhase::Round(self.round())
        }
    }

    /// Returns the seat expected to play next.
    #[must_use]
    pub const fn current(&self) -> Seat {
        self.current
    }

    /// Returns the seat that opened the round in progress.
    #[must_use]
    pub const fn leader(&self) -> Seat {
        self.leader
    }

    /// Returns the hand winner, or `None` while rounds remain.
    #[must_use]
    pub const fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// Returns whether all three rounds have been resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns the cards that were neither revealed nor dealt.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.deck[self.dealt..]
    }
}
