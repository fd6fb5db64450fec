//! Game state types.

/// Match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the roster to fill and the match to start.
    WaitingForPlayers,
    /// Hands are being played.
    Running,
    /// A player reached the target, or the roster broke up mid-match.
    Finished,
}
