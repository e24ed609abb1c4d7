//! Game engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::deck::Deck;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::player::{Player, Seat};
use crate::result::GameResult;

mod round;
pub mod state;

pub use state::GameState;

/// A two-player War game.
///
/// Construction builds, shuffles, and deals the deck. After that the host
/// calls [`Game::advance`] once per round at whatever pace it likes, or
/// [`Game::play`] to run the game to completion in one go.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Cards left undealt (only ever the odd card out).
    deck: Deck,
    /// Both players, indexed by [`Seat`].
    players: [Player; 2],
    /// Rounds in this game: the size of each dealt hand.
    total_rounds: usize,
    rounds_played: usize,
    /// Final result, set on entering `Finished`.
    result: Option<GameResult>,
    /// Whether the finish event has been handed to an observer.
    finish_reported: bool,
}

impl Game {
    /// Creates a new game shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), GameState::Playing);
    /// assert_eq!(game.total_rounds(), 26);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot be built or dealt.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, &mut rng)
    }

    /// Creates a new game shuffled with the supplied random source.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot be built or dealt.
    pub fn with_rng<R: Rng + ?Sized>(
        options: GameOptions,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut deck = Deck::standard()?;
        deck.shuffle(rng);
        Self::from_deck(options, deck)
    }

    /// Creates a new game from a prepared deck, dealt as is without shuffling.
    ///
    /// Cards are dealt alternately from the top, player one first, until
    /// fewer than two remain. A deck with fewer than two cards yields a game
    /// that is already finished as a 0-0 draw.
    ///
    /// # Errors
    ///
    /// Returns an error if a draw fails while dealing.
    pub fn from_deck(options: GameOptions, deck: Deck) -> Result<Self, GameError> {
        let players = [
            Player::new(options.player_one_name.clone()),
            Player::new(options.player_two_name.clone()),
        ];

        let mut game = Self {
            options,
            state: GameState::Setup,
            deck,
            players,
            total_rounds: 0,
            rounds_played: 0,
            result: None,
            finish_reported: false,
        };

        game.deal()?;

        if game.total_rounds == 0 {
            game.finish();
        } else {
            game.state = GameState::Playing;
        }

        Ok(game)
    }

    /// Deals the deck evenly between both players.
    fn deal(&mut self) -> Result<(), GameError> {
        let hand_size = self.deck.len() / self.players.len();

        for _ in 0..hand_size {
            for player in &mut self.players {
                player.draw(&mut self.deck)?;
            }
        }

        self.total_rounds = hand_size;
        trace!(
            hand_size,
            undealt = self.deck.len(),
            "dealt deck between players"
        );
        Ok(())
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the game is finished and its final result has been
    /// delivered to an observer. No further calls to [`Game::advance`] are
    /// accepted once this is `true`.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, GameState::Finished) && self.finish_reported
    }

    /// Returns the player in the given seat.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns the number of rounds in this game.
    #[must_use]
    pub const fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    /// Returns the number of rounds resolved so far.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns the number of rounds still to be played.
    #[must_use]
    pub const fn rounds_remaining(&self) -> usize {
        self.total_rounds - self.rounds_played
    }

    /// Returns the number of cards left undealt in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the final result once the game is finished.
    #[must_use]
    pub const fn result(&self) -> Option<GameResult> {
        self.result
    }
}
