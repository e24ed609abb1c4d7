//! Game integration tests.

use warsim::{
    Card, ConstructionError, DECK_SIZE, Deck, DeckError, Game, GameError, GameEvent, GameObserver,
    GameOptions, GameResult, GameState, HandError, Outcome, RoundResult, RoundTally, Seat, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that deals `pairs` in flip order: each pair is
/// (player one's card, player two's card).
fn deck_from_pairs(pairs: &[(Card, Card)]) -> Deck {
    let mut draws: Vec<Card> = pairs.iter().flat_map(|(a, b)| [*a, *b]).collect();
    draws.reverse();
    Deck::from_cards(draws)
}

fn rounds(events: &[GameEvent]) -> Vec<RoundResult> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::RoundResolved(round) => Some(*round),
            GameEvent::GameFinished(_) => None,
        })
        .collect()
}

fn finishes(events: &[GameEvent]) -> Vec<GameResult> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::GameFinished(result) => Some(*result),
            GameEvent::RoundResolved(_) => None,
        })
        .collect()
}

#[test]
fn setup_deals_half_the_deck_to_each_player() {
    let game = Game::new(GameOptions::default(), 1).unwrap();

    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.player(Seat::One).hand_size(), DECK_SIZE / 2);
    assert_eq!(game.player(Seat::Two).hand_size(), DECK_SIZE / 2);
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.total_rounds(), 26);
    assert_eq!(game.result(), None);

    let mut all: Vec<Card> = game
        .player(Seat::One)
        .hand()
        .iter()
        .chain(game.player(Seat::Two).hand())
        .copied()
        .collect();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), DECK_SIZE);
}

#[test]
fn player_names_come_from_options() {
    let options = GameOptions::default()
        .with_player_one_name("Alice")
        .with_player_two_name("Bob");
    let game = Game::new(options, 3).unwrap();

    assert_eq!(game.player(Seat::One).name(), "Alice");
    assert_eq!(game.player(Seat::Two).name(), "Bob");
    assert_eq!(GameOptions::default().player_two_name, "Player 2");
}

#[test]
fn full_game_emits_every_round_then_one_finish() {
    let mut game = Game::new(GameOptions::default(), 2024).unwrap();
    let mut events: Vec<GameEvent> = Vec::new();
    let result = game.play(&mut events).unwrap();

    assert_eq!(events.len(), 27);
    assert!(matches!(events.last(), Some(GameEvent::GameFinished(_))));
    assert_eq!(finishes(&events), vec![result]);

    let rounds = rounds(&events);
    assert_eq!(rounds.len(), 26);
    for (i, round) in rounds.iter().enumerate() {
        assert_eq!(round.round_index, i);
    }

    assert_eq!(result.rounds, 26);
    assert_eq!(result.score_one, game.player(Seat::One).score());
    assert_eq!(result.score_two, game.player(Seat::Two).score());
    assert_eq!(
        result.outcome,
        Outcome::compare(result.score_one, result.score_two)
    );
    assert_eq!(
        result.score_one as usize + result.score_two as usize + result.draws(),
        26
    );
    assert_eq!(game.player(Seat::One).hand_size(), 0);
    assert_eq!(game.player(Seat::Two).hand_size(), 0);
    assert!(game.is_over());
}

#[test]
fn hands_drain_in_lockstep() {
    let mut game = Game::new(GameOptions::default(), 9).unwrap();

    for played in 1..=26 {
        game.advance(&mut ()).unwrap();
        assert_eq!(game.rounds_played(), played);
        assert_eq!(game.player(Seat::One).hand_size(), 26 - played);
        assert_eq!(game.player(Seat::Two).hand_size(), 26 - played);
        assert_eq!(game.rounds_remaining(), 26 - played);
    }

    assert_eq!(game.state(), GameState::Finished);
}

#[test]
fn rounds_compare_ranks_only() {
    let pairs = [
        (card(Suit::Hearts, 14), card(Suit::Spades, 13)),
        (card(Suit::Clubs, 2), card(Suit::Diamonds, 11)),
        (card(Suit::Spades, 7), card(Suit::Hearts, 7)),
        (card(Suit::Diamonds, 10), card(Suit::Clubs, 9)),
    ];
    let mut game = Game::from_deck(GameOptions::default(), deck_from_pairs(&pairs)).unwrap();
    let mut events: Vec<GameEvent> = Vec::new();
    let result = game.play(&mut events).unwrap();

    let rounds = rounds(&events);
    let outcomes: Vec<Outcome> = rounds.iter().map(|r| r.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            Outcome::PlayerOneWins,
            Outcome::PlayerTwoWins,
            Outcome::Draw,
            Outcome::PlayerOneWins,
        ]
    );

    let scores: Vec<(u32, u32)> = rounds.iter().map(|r| (r.score_one, r.score_two)).collect();
    assert_eq!(scores, vec![(1, 0), (1, 1), (1, 1), (2, 1)]);

    assert_eq!(rounds[1].card_one, card(Suit::Clubs, 2));
    assert_eq!(rounds[1].card_two, card(Suit::Diamonds, 11));
    assert_eq!(
        result,
        GameResult {
            score_one: 2,
            score_two: 1,
            outcome: Outcome::PlayerOneWins,
            rounds: 4,
        }
    );
}

#[test]
fn equal_scores_make_a_drawn_game() {
    let pairs = [
        (card(Suit::Hearts, 3), card(Suit::Spades, 4)),
        (card(Suit::Clubs, 12), card(Suit::Diamonds, 5)),
    ];
    let mut game = Game::from_deck(GameOptions::default(), deck_from_pairs(&pairs)).unwrap();
    let result = game.play(&mut ()).unwrap();

    assert_eq!(result.outcome, Outcome::Draw);
    assert_eq!((result.score_one, result.score_two), (1, 1));
}

#[test]
fn empty_deck_finishes_immediately_as_a_draw() {
    let mut game = Game::from_deck(GameOptions::default(), Deck::from_cards(Vec::new())).unwrap();

    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.total_rounds(), 0);
    assert!(!game.is_over());

    let mut events: Vec<GameEvent> = Vec::new();
    assert_eq!(game.advance(&mut events), Ok(GameState::Finished));
    assert_eq!(
        events,
        vec![GameEvent::GameFinished(GameResult {
            score_one: 0,
            score_two: 0,
            outcome: Outcome::Draw,
            rounds: 0,
        })]
    );
    assert_eq!(game.advance(&mut events), Err(GameError::InvalidState));
}

#[test]
fn single_card_deck_is_finished_at_construction() {
    let deck = Deck::from_cards(vec![card(Suit::Diamonds, 8)]);
    let mut game = Game::from_deck(GameOptions::default(), deck).unwrap();

    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.result(), Some(GameResult::from_scores(0, 0, 0)));

    let mut events: Vec<GameEvent> = Vec::new();
    let result = game.play(&mut events).unwrap();
    assert_eq!(result.outcome, Outcome::Draw);
    assert_eq!(finishes(&events), vec![result]);
    assert!(rounds(&events).is_empty());
}

#[test]
fn odd_card_out_stays_in_the_deck() {
    let deck = Deck::from_cards(vec![
        card(Suit::Hearts, 5),
        card(Suit::Spades, 6),
        card(Suit::Clubs, 7),
    ]);
    let mut game = Game::from_deck(GameOptions::default(), deck).unwrap();

    assert_eq!(game.total_rounds(), 1);
    assert_eq!(game.cards_remaining(), 1);

    // Top card (7) goes to player one, then 6 to player two.
    let result = game.play(&mut ()).unwrap();
    assert_eq!(result.outcome, Outcome::PlayerOneWins);
}

#[test]
fn play_after_finish_returns_result_without_new_events() {
    let mut game = Game::new(GameOptions::default(), 5).unwrap();
    let mut tally = RoundTally::default();
    let first = game.play(&mut tally).unwrap();
    let second = game.play(&mut tally).unwrap();

    assert_eq!(first, second);
    assert_eq!(tally.finished, 1);
    assert_eq!(tally.rounds(), 26);
}

#[test]
fn same_seed_replays_identically() {
    let mut a: Vec<GameEvent> = Vec::new();
    let mut b: Vec<GameEvent> = Vec::new();
    Game::new(GameOptions::default(), 77).unwrap().play(&mut a).unwrap();
    Game::new(GameOptions::default(), 77).unwrap().play(&mut b).unwrap();
    assert_eq!(a, b);

    let mut c: Vec<GameEvent> = Vec::new();
    Game::new(GameOptions::default(), 78).unwrap().play(&mut c).unwrap();
    assert_ne!(a, c);
}

#[test]
fn custom_observer_only_sees_what_it_implements() {
    #[derive(Default)]
    struct FinishOnly(Option<GameResult>);

    impl GameObserver for FinishOnly {
        fn on_game_finished(&mut self, result: &GameResult) {
            self.0 = Some(*result);
        }
    }

    let mut game = Game::new(GameOptions::default(), 11).unwrap();
    let mut observer = FinishOnly::default();
    let result = game.play(&mut observer).unwrap();

    assert_eq!(observer.0, Some(result));
}

#[test]
fn errors_have_readable_messages() {
    assert_eq!(
        ConstructionError::WrongSize {
            expected: 52,
            actual: 51
        }
        .to_string(),
        "deck has 51 cards, expected 52"
    );
    assert_eq!(
        GameError::from(HandError::Empty).to_string(),
        "no cards left in the hand"
    );
    assert_eq!(
        GameError::from(DeckError::Empty).to_string(),
        "no cards left in the deck"
    );
}
