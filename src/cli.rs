use crate::feedback::compute_feedback;
use crate::game_state::{GameResult, GameRound, play_round, validate_secret};
use crate::settings::{DEFAULT_TRIES, DEFAULT_WORD_LENGTH, Settings};
use crate::stats::{PlayerStats, Players};
use crate::wordbank::{EMBEDDED_WORDBANK, Wordbank, load_wordbank_from_file, load_wordbank_from_str};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Wordle game CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input", global = true)]
    pub wordbank_path: Option<PathBuf>,

    /// Number of tries per round
    #[arg(long, global = true, default_value_t = DEFAULT_TRIES)]
    pub tries: usize,

    /// Letters per word
    #[arg(long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    pub word_length: usize,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the feedback for one guess against a secret
    Feedback { secret: String, guess: String },
    /// Play one round with the given guesses
    Play {
        /// Player name used for statistics
        #[arg(short, long)]
        player: String,
        /// Word to guess
        #[arg(short, long)]
        secret: String,
        /// Guesses, in order
        guesses: Vec<String>,
    },
    /// Show the effective settings
    Settings,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    /// # Errors
    /// Fails when `--tries` or `--word-length` is out of range.
    pub fn settings(&self) -> Result<Settings> {
        Settings::new(self.tries, self.word_length, self.wordbank_path.clone())
            .context("invalid settings")
    }
}

/// Load the word list named by the settings, or the embedded one.
///
/// # Errors
/// Propagates I/O errors when reading a wordbank file.
pub fn load_wordbank(settings: &Settings) -> Result<Wordbank> {
    match settings.wordbank_path() {
        Some(path) => load_wordbank_from_file(path)
            .with_context(|| format!("failed to load word bank from '{}'", path.display())),
        None => Ok(load_wordbank_from_str(EMBEDDED_WORDBANK)),
    }
}

pub fn display_open_message<W: Write>(out: &mut W, settings: &Settings) -> std::io::Result<()> {
    writeln!(out, "Welcome to Wordle! You have {} tries to guess the word.", settings.tries())?;
    writeln!(out, "The word is {} letters long.", settings.word_length())
}

pub fn display_round<W: Write>(out: &mut W, round: &GameRound) -> std::io::Result<()> {
    match round.result() {
        Some(GameResult::Won { .. }) => writeln!(out, "You win!\nGame over!")?,
        Some(GameResult::Lost { secret }) => writeln!(out, "You lost! The word was {secret}\nGame over!")?,
        None => writeln!(out, "Out of guesses to play, {} tries left.", round.tries_left())?,
    }
    for record in round.history() {
        writeln!(out, "{record}")?;
    }
    Ok(())
}

pub fn display_player<W: Write>(out: &mut W, name: &str, stats: &PlayerStats) -> std::io::Result<()> {
    let average = match stats.average_tries() {
        Some(avg) => format!("{avg:.2}"),
        None => "NaN".to_string(),
    };
    writeln!(
        out,
        "{}: {} games, {:.2}% win rate, {} average tries",
        name,
        stats.games_played,
        stats.win_rate(),
        average
    )
}

/// Execute a parsed command, writing user-facing output to `out`.
///
/// # Errors
/// Invalid settings, unreadable word lists, unusable secrets and
/// mismatched feedback inputs are reported as errors.
pub fn run<W: Write>(cli: &Cli, players: &mut Players, out: &mut W) -> Result<()> {
    let settings = cli.settings()?;
    match &cli.command {
        Command::Feedback { secret, guess } => {
            let feedback = compute_feedback(secret, guess)?;
            writeln!(out, "{}", feedback.render(guess))?;
        }
        Command::Play {
            player,
            secret,
            guesses,
        } => {
            let wordbank = load_wordbank(&settings)?;
            validate_secret(secret, &wordbank, &settings)
                .with_context(|| format!("cannot play with secret '{secret}'"))?;
            players.begin_game(player);
            display_open_message(out, &settings)?;
            let round = play_round(&settings, secret, &wordbank, guesses);
            display_round(out, &round)?;
            if let Some(result) = round.result() {
                players.record_result(player, &result);
            }
            if let Some(stats) = players.get(player) {
                display_player(out, player, stats)?;
            }
        }
        Command::Settings => writeln!(out, "{settings}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (Result<()>, String, Players) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut players = Players::new();
        let mut out = Vec::new();
        let result = run(&cli, &mut players, &mut out);
        (result, String::from_utf8(out).unwrap(), players)
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["wordle", "settings"]).unwrap();
        assert_eq!(cli.tries, 6);
        assert_eq!(cli.word_length, 5);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.wordbank_path, None);
        assert_eq!(cli.command, Command::Settings);
    }

    #[test]
    fn test_parse_play_with_global_flags() {
        let cli = Cli::try_parse_from([
            "wordle", "play", "-p", "ada", "-s", "crane", "slate", "crane", "--tries", "3", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.tries, 3);
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Command::Play {
                player: "ada".to_string(),
                secret: "crane".to_string(),
                guesses: vec!["slate".to_string(), "crane".to_string()],
            }
        );
    }

    #[test]
    fn test_run_feedback() {
        let (result, out, _) = run_args(&["wordle", "feedback", "CRANE", "TRACE"]);
        assert!(result.is_ok());
        assert_eq!(out, "-RA+E\n");
    }

    #[test]
    fn test_run_feedback_mismatched_length() {
        let (result, out, _) = run_args(&["wordle", "feedback", "CRANE", "AB"]);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_play_win() {
        let (result, out, players) =
            run_args(&["wordle", "play", "-p", "ada", "-s", "crane", "slate", "crane"]);
        assert!(result.is_ok());
        assert_eq!(
            out,
            "Welcome to Wordle! You have 6 tries to guess the word.\n\
             The word is 5 letters long.\n\
             You win!\nGame over!\n\
             --A-E\n\
             CRANE\n\
             ada: 1 games, 100.00% win rate, 2.00 average tries\n"
        );
        assert_eq!(players.get("ada").unwrap().wins, 1);
    }

    #[test]
    fn test_run_play_loss() {
        let (result, out, players) = run_args(&[
            "wordle", "play", "--tries", "2", "-p", "bob", "-s", "crane", "slate", "trace",
        ]);
        assert!(result.is_ok());
        assert!(out.contains("You lost! The word was CRANE"));
        assert!(out.contains("bob: 1 games, 0.00% win rate, NaN average tries"));
        assert_eq!(players.get("bob").unwrap().wins, 0);
    }

    #[test]
    fn test_run_play_rejects_unknown_secret() {
        let (result, _, players) = run_args(&["wordle", "play", "-p", "ada", "-s", "qqqqq"]);
        assert!(result.is_err());
        assert!(players.is_empty());
    }

    #[test]
    fn test_run_rejects_bad_settings() {
        let (result, _, _) = run_args(&["wordle", "settings", "--tries", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_settings() {
        let (result, out, _) = run_args(&["wordle", "settings", "--word-length", "6"]);
        assert!(result.is_ok());
        assert_eq!(out, "tries: 6\nword_length: 6\nwordbank: (embedded)\n");
    }
}
