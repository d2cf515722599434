// Library interface for wordle-game
// This allows integration tests to access internal modules

pub mod cli;
pub mod feedback;
pub mod game_state;
pub mod logging;
pub mod settings;
pub mod stats;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use feedback::{Feedback, FeedbackError, Mark, compute_feedback};
pub use game_state::{
    GameError, GameResult, GameRound, GuessRecord, RoundStatus, play_round, validate_secret,
};
pub use settings::{Settings, SettingsError};
pub use stats::{PlayerStats, Players};
pub use wordbank::{Wordbank, load_wordbank_from_file, load_wordbank_from_str};
