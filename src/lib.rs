//! A two-player War card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that builds and shuffles a 52-card deck,
//! deals it evenly between two players, and resolves rounds one at a time.
//! Each round both players flip their next card and the higher rank scores a
//! point; equal ranks score nothing. Results are delivered as [`GameEvent`]s to
//! any [`GameObserver`], so the host decides how and how fast to present them.
//!
//! # Example
//!
//! ```
//! use warsim::{Game, GameOptions, RoundTally};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! let mut tally = RoundTally::default();
//! let result = game.play(&mut tally).unwrap();
//!
//! assert_eq!(tally.rounds(), 26);
//! assert_eq!(result.rounds, 26);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{
    ACE, Card, DECK_SIZE, JACK, KING, MAX_RANK, MIN_RANK, QUEEN, Suit, rank_label, rank_name,
};
pub use deck::Deck;
pub use error::{ConstructionError, DeckError, GameError, HandError};
pub use event::{GameEvent, GameObserver, RoundTally};
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use player::{Player, Seat};
pub use result::{GameResult, Outcome, RoundResult};
