//! Events emitted by the engine and the observers that consume them.
//!
//! The engine never holds on to a presentation layer. Each call to
//! [`Game::advance`](crate::Game::advance) hands its events to whatever
//! [`GameObserver`] the host passes in, in order: one
//! [`GameEvent::RoundResolved`] per round, then exactly one
//! [`GameEvent::GameFinished`].

extern crate alloc;

use alloc::vec::Vec;

use crate::result::{GameResult, Outcome, RoundResult};

/// An immutable record of something that happened in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A round was resolved.
    RoundResolved(RoundResult),
    /// The last round was resolved and the game is over.
    GameFinished(GameResult),
}

/// Receives engine events.
///
/// Both methods do nothing by default, so observers only implement what they
/// care about.
pub trait GameObserver {
    /// Called once per round, in round order.
    fn on_round_resolved(&mut self, _round: &RoundResult) {}

    /// Called exactly once, after the last round.
    fn on_game_finished(&mut self, _result: &GameResult) {}
}

/// Records every event in order.
impl GameObserver for Vec<GameEvent> {
    fn on_round_resolved(&mut self, round: &RoundResult) {
        self.push(GameEvent::RoundResolved(*round));
    }

    fn on_game_finished(&mut self, result: &GameResult) {
        self.push(GameEvent::GameFinished(*result));
    }
}

/// Discards every event.
impl GameObserver for () {}

/// Counts round outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundTally {
    /// Rounds won by player one.
    pub player_one_wins: usize,
    /// Rounds won by player two.
    pub player_two_wins: usize,
    /// Drawn rounds.
    pub draws: usize,
    /// Number of finish events seen.
    pub finished: usize,
}

impl RoundTally {
    /// Total rounds counted.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.player_one_wins + self.player_two_wins + self.draws
    }
}

impl GameObserver for RoundTally {
    fn on_round_resolved(&mut self, round: &RoundResult) {
        match round.outcome {
            Outcome::PlayerOneWins => self.player_one_wins += 1,
            Outcome::PlayerTwoWins => self.player_two_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    fn on_game_finished(&mut self, _result: &GameResult) {
        self.finished += 1;
    }
}
