//! Round and game result types.

use core::cmp::Ordering;

use crate::card::Card;

/// Who won a round or a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player one came out ahead.
    PlayerOneWins,
    /// Player two came out ahead.
    PlayerTwoWins,
    /// Neither player came out ahead.
    Draw,
}

impl Outcome {
    /// Compares player one's value against player two's.
    ///
    /// Used with card ranks for a round and with scores for a game.
    #[must_use]
    pub fn compare<T: Ord + Copy>(one: T, two: T) -> Self {
        match one.cmp(&two) {
            Ordering::Greater => Self::PlayerOneWins,
            Ordering::Less => Self::PlayerTwoWins,
            Ordering::Equal => Self::Draw,
        }
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Zero-based round number.
    pub round_index: usize,
    /// Card flipped by player one.
    pub card_one: Card,
    /// Card flipped by player two.
    pub card_two: Card,
    /// Who took the round.
    pub outcome: Outcome,
    /// Player one's score after this round.
    pub score_one: u32,
    /// Player two's score after this round.
    pub score_two: u32,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Player one's final score.
    pub score_one: u32,
    /// Player two's final score.
    pub score_two: u32,
    /// Who won the game.
    pub outcome: Outcome,
    /// Number of rounds played.
    pub rounds: usize,
}

impl GameResult {
    /// Derives the game result from final scores.
    #[must_use]
    pub fn from_scores(score_one: u32, score_two: u32, rounds: usize) -> Self {
        Self {
            score_one,
            score_two,
            outcome: Outcome::compare(score_one, score_two),
            rounds,
        }
    }

    /// Number of drawn rounds: those neither player scored.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.rounds
            .saturating_sub(self.score_one as usize + self.score_two as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_is_strictly_numeric() {
        assert_eq!(Outcome::compare(14u8, 2), Outcome::PlayerOneWins);
        assert_eq!(Outcome::compare(3u8, 13), Outcome::PlayerTwoWins);
        assert_eq!(Outcome::compare(7u8, 7), Outcome::Draw);
    }

    #[test]
    fn game_result_follows_scores() {
        let result = GameResult::from_scores(12, 10, 26);
        assert_eq!(result.outcome, Outcome::PlayerOneWins);
        assert_eq!(result.draws(), 4);

        assert_eq!(GameResult::from_scores(0, 0, 0).outcome, Outcome::Draw);
        assert_eq!(
            GameResult::from_scores(9, 11, 26).outcome,
            Outcome::PlayerTwoWins
        );
    }
}
