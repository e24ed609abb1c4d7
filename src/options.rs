//! Game configuration options.

extern crate alloc;

use alloc::string::String;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_player_one_name("Alice")
///     .with_player_two_name("Bob");
/// assert_eq!(options.player_one_name, "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Name of the first player.
    pub player_one_name: String,
    /// Name of the second player.
    pub player_two_name: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_one_name: String::from("Player 1"),
            player_two_name: String::from("Player 2"),
        }
    }
}

impl GameOptions {
    /// Sets the first player's name.
    #[must_use]
    pub fn with_player_one_name(mut self, name: impl Into<String>) -> Self {
        self.player_one_name = name.into();
        self
    }

    /// Sets the second player's name.
    #[must_use]
    pub fn with_player_two_name(mut self, name: impl Into<String>) -> Self {
        self.player_two_name = name.into();
        self
    }
}
