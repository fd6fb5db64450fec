use tracing::{info, warn};

use crate::error::RosterError;
use crate::identity::PlayerId;
use crate::player::Player;
use crate::result::Seat;

use super::{Game, GameState};

impl Game {
    fn seat_of(&self, player_id: &PlayerId) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|&seat| self.player(seat).is_some_and(|p| p.id() == player_id))
    }

    /// Seats `player` in the first empty seat and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if both seats are taken or a player with the same
    /// identifier is already seated.
    pub fn add_player(&mut self, player: Player) -> Result<Seat, RosterError> {
        let Some(seat) = Seat::ALL
            .into_iter()
            .find(|&seat| self.players[seat.index()].is_none())
        else {
            return Err(RosterError::GameFull);
        };
        if self.seat_of(player.id()).is_some() {
            return Err(RosterError::PlayerAlreadyInGame);
        }

        self.players[seat.index()] = Some(player);
        Ok(seat)
    }

    /// Empties the seat of the given player and returns them.
    ///
    /// The other seat keeps its index. Removing a player from a running
    /// match finishes it.
    ///
    /// # Errors
    ///
    /// Returns an error if no seated player has this identifier.
    pub fn remove_player(&mut self, player_id: &PlayerId) -> Result<Player, RosterError> {
        let seat = self.seat_of(player_id).ok_or(RosterError::PlayerNotFound)?;
        let player = self.players[seat.index()]
            .take()
            .ok_or(RosterError::PlayerNotFound)?;

        if self.state == GameState::Running {
            warn!(game = %self.id, player = %player_id, "player left a running match");
            self.state = GameState::Finished;
        }
        Ok(player)
    }

    /// Starts the match: deals the first hand, led by the first seat.
    ///
    /// # Errors
    ///
    /// Returns an error if a seat is empty or the match was already started.
    pub fn start(&mut self) -> Result<(), RosterError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(RosterError::AlreadyStarted);
        }
        if self.players.iter().any(Option::is_none) {
            return Err(RosterError::NotEnoughPlayers);
        }

        self.deal_hand();
        self.state = GameState::Running;
        info!(
            game = %self.id,
            seed = ?self.options.seed,
            target = self.options.target_wins,
            "match started"
        );
        Ok(())
    }
}
