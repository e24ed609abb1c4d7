use tracing::{debug, info};

use crate::error::GameError;
use crate::event::GameObserver;
use crate::player::Seat;
use crate::result::{GameResult, Outcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Advances the game by one step and returns the resulting state.
    ///
    /// While playing, this flips one card from each hand (player one first),
    /// awards the point to the higher rank, and reports the round to
    /// `observer`. Equal ranks score nothing. The call that plays the last
    /// round also finishes the game and reports the final result.
    ///
    /// A game dealt with no rounds is finished from the start; the first call
    /// only reports its 0-0 result.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] once the final result has been
    /// reported, or a hand error if a hand runs out early.
    pub fn advance<O: GameObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<GameState, GameError> {
        match self.state {
            GameState::Setup => return Err(GameError::InvalidState),
            GameState::Finished => {
                self.report_finish(observer)?;
                return Ok(self.state);
            }
            GameState::Playing => {}
        }

        let round = self.resolve_round()?;
        observer.on_round_resolved(&round);

        if self.rounds_remaining() == 0 {
            self.finish();
            self.report_finish(observer)?;
        }

        Ok(self.state)
    }

    /// Plays every remaining round and returns the final result.
    ///
    /// If the result has already been reported, it is returned again without
    /// notifying `observer`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Game::advance`].
    pub fn play<O: GameObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<GameResult, GameError> {
        while !self.is_over() {
            self.advance(observer)?;
        }

        self.result.ok_or(GameError::InvalidState)
    }

    fn resolve_round(&mut self) -> Result<RoundResult, GameError> {
        let card_one = self.players[Seat::One.index()].flip()?;
        let card_two = self.players[Seat::Two.index()].flip()?;

        let outcome = Outcome::compare(card_one.rank, card_two.rank);
        match outcome {
            Outcome::PlayerOneWins => self.players[Seat::One.index()].increment_score(),
            Outcome::PlayerTwoWins => self.players[Seat::Two.index()].increment_score(),
            Outcome::Draw => {}
        }

        let round = RoundResult {
            round_index: self.rounds_played,
            card_one,
            card_two,
            outcome,
            score_one: self.player(Seat::One).score(),
            score_two: self.player(Seat::Two).score(),
        };
        self.rounds_played += 1;

        debug!(
            round = round.round_index,
            rank_one = card_one.rank,
            rank_two = card_two.rank,
            outcome = ?outcome,
            score_one = round.score_one,
            score_two = round.score_two,
            "round resolved"
        );

        Ok(round)
    }

    pub(super) fn finish(&mut self) {
        let result = GameResult::from_scores(
            self.player(Seat::One).score(),
            self.player(Seat::Two).score(),
            self.rounds_played,
        );
        self.result = Some(result);
        self.state = GameState::Finished;

        info!(
            rounds = result.rounds,
            score_one = result.score_one,
            score_two = result.score_two,
            outcome = ?result.outcome,
            "game finished"
        );
    }

    fn report_finish<O: GameObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<(), GameError> {
        if self.finish_reported {
            return Err(GameError::InvalidState);
        }
        let result = self.result.ok_or(GameError::InvalidState)?;

        self.finish_reported = true;
        observer.on_game_finished(&result);
        Ok(())
    }
}
