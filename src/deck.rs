//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
use crate::error::{ConstructionError, DeckError};

/// An ordered stack of cards.
///
/// The top of the deck is the last card of [`Deck::cards`]; [`Deck::draw`]
/// removes cards from there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a standard unshuffled deck: every rank from 2 to 14 in each of
    /// the four suits.
    ///
    /// # Errors
    ///
    /// Returns an error if the result is not exactly [`DECK_SIZE`] distinct
    /// cards.
    pub fn standard() -> Result<Self, ConstructionError> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                cards.push(Card::new(suit, rank));
            }
        }

        let deck = Self { cards };
        deck.validate()?;
        Ok(deck)
    }

    /// Wraps an already prepared stack of cards. The last card is the top.
    ///
    /// No size or uniqueness checks are made, so short or empty decks can be
    /// used to set up degenerate games.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    fn validate(&self) -> Result<(), ConstructionError> {
        if self.cards.len() != DECK_SIZE {
            return Err(ConstructionError::WrongSize {
                expected: DECK_SIZE,
                actual: self.cards.len(),
            });
        }

        let mut sorted = self.cards.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != self.cards.len() {
            return Err(ConstructionError::Duplicate);
        }

        Ok(())
    }

    /// Shuffles the deck in place using the supplied random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
