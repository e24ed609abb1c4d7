//! Players and their hands.

extern crate alloc;

use core::fmt;

use alloc::collections::VecDeque;
use alloc::string::String;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, HandError};

/// Identifies one of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The first player, who flips first each round.
    One,
    /// The second player.
    Two,
}

impl Seat {
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// A participant: a name, a hand played front to back, and a score.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: VecDeque<Card>,
    score: u32,
}

impl Player {
    /// Creates a player with an empty hand and a score of zero.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: VecDeque::new(),
            score: 0,
        }
    }

    /// Draws the top card of `deck` onto the back of the hand.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards left.
    pub fn draw(&mut self, deck: &mut Deck) -> Result<(), DeckError> {
        let card = deck.draw()?;
        self.hand.push_back(card);
        Ok(())
    }

    /// Removes and returns the front card of the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Empty`] if the hand has no cards left.
    pub fn flip(&mut self) -> Result<Card, HandError> {
        self.hand.pop_front().ok_or(HandError::Empty)
    }

    /// Adds one point.
    pub const fn increment_score(&mut self) {
        self.score += 1;
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the cards still in hand, next to flip first.
    #[must_use]
    pub const fn hand(&self) -> &VecDeque<Card> {
        &self.hand
    }

    /// Returns the number of cards still in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}

/// Formats the name and score, then each card left in hand on its own line.
impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Score: {}", self.name, self.score)?;
        for card in &self.hand {
            write!(f, "\n  {card}")?;
        }
        Ok(())
    }
}
