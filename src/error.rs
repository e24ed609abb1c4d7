//! Error types for game operations.
//!
//! Every error here marks a broken engine invariant. None of them occur
//! during normal play and none are retried.

use thiserror::Error;

/// Errors that can occur while building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The deck does not hold the required number of cards.
    #[error("deck has {actual} cards, expected {expected}")]
    WrongSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards produced.
        actual: usize,
    },
    /// The deck contains the same card more than once.
    #[error("deck contains duplicate cards")]
    Duplicate,
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when flipping from a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// No cards left in the hand.
    #[error("no cards left in the hand")]
    Empty,
}

/// Errors that can occur while setting up or advancing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The deck could not be built.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    /// A draw hit an empty deck.
    #[error(transparent)]
    Deck(#[from] DeckError),
    /// A flip hit an empty hand.
    #[error(transparent)]
    Hand(#[from] HandError),
    /// The game is over and its final result has already been delivered.
    #[error("invalid game state for advancing")]
    InvalidState,
}
