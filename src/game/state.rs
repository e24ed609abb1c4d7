//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Building, shuffling, and dealing the deck.
    Setup,
    /// Rounds remain to be played.
    Playing,
    /// Every round has been played and the outcome is fixed.
    Finished,
}
