use tracing::info;

use crate::card::Card;
use crate::error::PlayError;
use crate::identity::PlayerId;
use crate::result::Outcome;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self, player_id: &PlayerId, card: Card) -> Result<(), PlayError> {
        if self.state != GameState::Running {
            return Err(PlayError::GameNotRunning);
        }

        let Some(current) = self.current_player() else {
            return Err(PlayError::NotPlayerTurn);
        };
        if current.id() != player_id {
            return Err(PlayError::NotPlayerTurn);
        }

        if !current.has_card(card) {
            return Err(PlayError::PlayerDoesNotHaveCard);
        }

        Ok(())
    }

    /// Plays `card` for the given player.
    ///
    /// Returns the round outcome when this play closed a round. When it also
    /// closed the hand, the next hand is dealt before returning, and the
    /// match finishes once a seat reaches the target number of hand wins.
    ///
    /// A rejected play leaves the game untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not running, it is not this player's
    /// turn, or the player does not hold the card, checked in that order.
    pub fn play(&mut self, player_id: &PlayerId, card: Card) -> Result<Option<Outcome>, PlayError> {
        self.ensure_player_turn(player_id, card)?;

        let hand = self.hands.last_mut().ok_or(PlayError::GameNotRunning)?;
        let player = self.players[hand.current().index()]
            .as_mut()
            .ok_or(PlayError::NotPlayerTurn)?;
        let outcome = hand.play(player, card)?;

        if let Some(winner) = hand.winner() {
            info!(
                game = %self.id,
                hand = self.hands.len() - 1,
                ?winner,
                "hand resolved"
            );
            self.deal_hand();
        }

        self.check_match_end();
        Ok(outcome)
    }

    /// Finishes the match once either seat reaches the target.
    fn check_match_end(&mut self) {
        let wins = self.hand_wins();
        if wins.iter().any(|&count| count >= self.options.target_wins) {
            info!(
                game = %self.id,
                first = wins[0],
                second = wins[1],
                "match finished"
            );
            self.state = GameState::Finished;
        }
    }
}
