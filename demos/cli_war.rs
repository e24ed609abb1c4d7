//! CLI War example.
//!
//! Usage: `cargo run --example cli_war [seed]`
//!
//! The seed falls back to `WAR_SEED`, then to the clock. `WAR_DELAY_MS` sets
//! the pause between rounds (default 1000). Set `RUST_LOG=warsim=debug` to see
//! the engine's round logs.

use std::env;
use std::thread;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warsim::{Card, Game, GameObserver, GameOptions, GameResult, Outcome, RoundResult};

const DEFAULT_DELAY_MS: u64 = 1000;

/// Renders engine events as table rows.
struct TablePrinter {
    player_one: String,
    player_two: String,
}

impl TablePrinter {
    fn winner_name(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::PlayerOneWins => &self.player_one,
            Outcome::PlayerTwoWins => &self.player_two,
            Outcome::Draw => "Draw",
        }
    }
}

impl GameObserver for TablePrinter {
    fn on_round_resolved(&mut self, round: &RoundResult) {
        let art_one = card_art(round.card_one);
        let art_two = card_art(round.card_two);

        println!();
        println!(
            "Round {:>2}: {:<18} | {:^10} | {:>18}",
            round.round_index + 1,
            round.card_one.to_string(),
            self.winner_name(round.outcome),
            round.card_two.to_string(),
        );
        for (left, right) in art_one.iter().zip(&art_two) {
            println!("          {left:<18}              {right:>18}");
        }
        println!(
            "Scores -> {}: {}, {}: {}",
            self.player_one, round.score_one, self.player_two, round.score_two
        );
    }

    fn on_game_finished(&mut self, result: &GameResult) {
        println!();
        match result.outcome {
            Outcome::Draw => println!("Game Result: Draw"),
            outcome => println!("Game Winner: {}", self.winner_name(outcome)),
        }
        println!(
            "Final score {}-{} over {} rounds ({} drawn)",
            result.score_one,
            result.score_two,
            result.rounds,
            result.draws()
        );
    }
}

fn card_art(card: Card) -> [String; 3] {
    [
        " ***** ".to_owned(),
        format!("*{:^5}*", card.label()),
        " ***** ".to_owned(),
    ]
}

fn parse_seed(source: &str, raw: Option<String>) -> Option<u64> {
    let raw = raw?;
    match raw.parse() {
        Ok(seed) => Some(seed),
        Err(err) => {
            eprintln!("Ignoring {source} seed {raw:?}: {err}");
            None
        }
    }
}

fn seed() -> u64 {
    parse_seed("argument", env::args().nth(1))
        .or_else(|| parse_seed("WAR_SEED", env::var("WAR_SEED").ok()))
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        })
}

fn delay() -> Duration {
    let ms = env::var("WAR_DELAY_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_DELAY_MS);
    Duration::from_millis(ms)
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warsim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let seed = seed();
    let delay = delay();
    println!("WAR card game (seed {seed})");

    let options = GameOptions::default();
    let mut printer = TablePrinter {
        player_one: options.player_one_name.clone(),
        player_two: options.player_two_name.clone(),
    };

    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Setup error: {err}");
            return;
        }
    };

    // Pacing belongs to the host: one round per tick.
    while !game.is_over() {
        if let Err(err) = game.advance(&mut printer) {
            eprintln!("Game error: {err}");
            return;
        }
        if !game.is_over() {
            thread::sleep(delay);
        }
    }
}
