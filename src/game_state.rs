use crate::feedback::{Feedback, FeedbackError, compute_feedback};
use crate::settings::Settings;
use crate::wordbank::Wordbank;
use crate::{debug_log, info_log};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("guess must be {expected} letters long, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("{0} is not in the word list")]
    NotInWordbank(String),
    #[error("the round is already over")]
    RoundOver,
    #[error(transparent)]
    Feedback(#[from] FeedbackError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    Won { tries: usize },
    Lost { secret: String },
}

/// A guess that was accepted by the round, with the feedback it earned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: String,
    pub feedback: Feedback,
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.feedback.render(&self.guess))
    }
}

/// Check that a secret word is usable with the current settings.
///
/// # Errors
/// `NotInWordbank` if the word is unknown, `WrongLength` if it does not have
/// the configured number of letters.
pub fn validate_secret(
    secret: &str,
    wordbank: &Wordbank,
    settings: &Settings,
) -> Result<(), GameError> {
    let secret = secret.trim();
    if !wordbank.contains(secret) {
        return Err(GameError::NotInWordbank(secret.to_uppercase()));
    }
    let actual = secret.chars().count();
    if actual != settings.word_length() {
        return Err(GameError::WrongLength {
            expected: settings.word_length(),
            actual,
        });
    }
    Ok(())
}

/// One round of play: the secret, the try budget and the feedback history.
#[derive(Debug, Clone)]
pub struct GameRound {
    secret: String,
    word_length: usize,
    max_tries: usize,
    history: Vec<GuessRecord>,
    status: RoundStatus,
}

impl GameRound {
    pub fn new(secret: &str, settings: &Settings) -> Self {
        info_log!(
            "GameRound::new() - {} tries, {} letters",
            settings.tries(),
            settings.word_length()
        );
        Self {
            secret: secret.trim().to_uppercase(),
            word_length: settings.word_length(),
            max_tries: settings.tries(),
            history: Vec::new(),
            status: RoundStatus::InProgress,
        }
    }

    /// Submit a guess. Rejected guesses do not consume a try.
    ///
    /// # Errors
    /// `RoundOver` once the round has finished, `WrongLength` or
    /// `NotInWordbank` for guesses that fail validation.
    pub fn submit_guess(&mut self, guess: &str, wordbank: &Wordbank) -> Result<&GuessRecord, GameError> {
        if self.status != RoundStatus::InProgress {
            return Err(GameError::RoundOver);
        }
        let guess = guess.trim().to_uppercase();
        let actual = guess.chars().count();
        if actual != self.word_length {
            return Err(GameError::WrongLength {
                expected: self.word_length,
                actual,
            });
        }
        if !wordbank.contains(&guess) {
            return Err(GameError::NotInWordbank(guess));
        }

        let feedback = compute_feedback(&self.secret, &guess)?;
        if feedback.is_solved() {
            self.status = RoundStatus::Won;
        } else if self.history.len() + 1 >= self.max_tries {
            self.status = RoundStatus::Lost;
        }
        debug_log!(
            "submit_guess() - try {}/{}: {} -> {:?}",
            self.history.len() + 1,
            self.max_tries,
            guess,
            self.status
        );
        self.history.push(GuessRecord { guess, feedback });
        Ok(&self.history[self.history.len() - 1])
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[must_use]
    pub fn tries_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn tries_left(&self) -> usize {
        self.max_tries - self.history.len()
    }

    /// Outcome of the round, `None` while still in progress.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            RoundStatus::InProgress => None,
            RoundStatus::Won => Some(GameResult::Won {
                tries: self.tries_used(),
            }),
            RoundStatus::Lost => Some(GameResult::Lost {
                secret: self.secret.clone(),
            }),
        }
    }
}

/// Play a round from a scripted list of guesses.
///
/// Invalid guesses are logged and skipped. Guesses left over once the round
/// ends are ignored. The returned round may still be in progress if the
/// script ran out first.
pub fn play_round<I, S>(settings: &Settings, secret: &str, wordbank: &Wordbank, guesses: I) -> GameRound
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut round = GameRound::new(secret, settings);
    for guess in guesses {
        if round.status() != RoundStatus::InProgress {
            break;
        }
        if let Err(e) = round.submit_guess(guess.as_ref(), wordbank) {
            log::warn!("Invalid guess {:?}: {}", guess.as_ref(), e);
        }
    }
    round
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Mark;
    use crate::wordbank::load_wordbank_from_str;

    fn bank() -> Wordbank {
        load_wordbank_from_str("CRANE\nSLATE\nTRACE\nRAISE\nSTARE\nALLOT\nLLAMA\nCRANES\n")
    }

    #[test]
    fn test_validate_secret() {
        let settings = Settings::default();
        assert!(validate_secret("crane", &bank(), &settings).is_ok());
        assert_eq!(
            validate_secret("ZEBRA", &bank(), &settings),
            Err(GameError::NotInWordbank("ZEBRA".to_string()))
        );
        assert_eq!(
            validate_secret("CRANES", &bank(), &settings),
            Err(GameError::WrongLength {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn test_win_on_first_guess() {
        let mut round = GameRound::new("CRANE", &Settings::default());
        let record = round.submit_guess("crane", &bank()).unwrap();
        assert!(record.feedback.is_solved());
        assert_eq!(record.to_string(), "CRANE");
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.result(), Some(GameResult::Won { tries: 1 }));
    }

    #[test]
    fn test_invalid_guesses_do_not_consume_tries() {
        let mut round = GameRound::new("CRANE", &Settings::default());
        assert_eq!(
            round.submit_guess("CRAN", &bank()).unwrap_err(),
            GameError::WrongLength {
                expected: 5,
                actual: 4
            }
        );
        assert_eq!(
            round.submit_guess("ZEBRA", &bank()).unwrap_err(),
            GameError::NotInWordbank("ZEBRA".to_string())
        );
        assert_eq!(round.tries_used(), 0);
        assert_eq!(round.tries_left(), 6);
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_history_keeps_order() {
        let mut round = GameRound::new("CRANE", &Settings::default());
        round.submit_guess("SLATE", &bank()).unwrap();
        round.submit_guess("TRACE", &bank()).unwrap();
        let guesses: Vec<_> = round.history().iter().map(|r| r.guess.as_str()).collect();
        assert_eq!(guesses, vec!["SLATE", "TRACE"]);
        assert_eq!(
            round.history()[1].feedback.marks(),
            &[Mark::Miss, Mark::Hit, Mark::Hit, Mark::Present, Mark::Hit]
        );
        assert_eq!(round.history()[1].to_string(), "-RA+E");
    }

    #[test]
    fn test_loss_when_tries_exhausted() {
        let settings = Settings::new(2, 5, None).unwrap();
        let mut round = GameRound::new("CRANE", &settings);
        round.submit_guess("SLATE", &bank()).unwrap();
        assert_eq!(round.status(), RoundStatus::InProgress);
        round.submit_guess("RAISE", &bank()).unwrap();
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(
            round.result(),
            Some(GameResult::Lost {
                secret: "CRANE".to_string()
            })
        );
        assert_eq!(round.submit_guess("CRANE", &bank()).unwrap_err(), GameError::RoundOver);
    }

    #[test]
    fn test_win_on_last_try() {
        let settings = Settings::new(2, 5, None).unwrap();
        let mut round = GameRound::new("CRANE", &settings);
        round.submit_guess("SLATE", &bank()).unwrap();
        round.submit_guess("CRANE", &bank()).unwrap();
        assert_eq!(round.result(), Some(GameResult::Won { tries: 2 }));
    }

    #[test]
    fn test_play_round_skips_invalid_and_stops_at_win() {
        let round = play_round(
            &Settings::default(),
            "CRANE",
            &bank(),
            ["XYZ", "SLATE", "ZEBRA", "CRANE", "TRACE"],
        );
        assert_eq!(round.tries_used(), 2);
        assert_eq!(round.result(), Some(GameResult::Won { tries: 2 }));
    }

    #[test]
    fn test_play_round_script_runs_out() {
        let round = play_round(&Settings::default(), "CRANE", &bank(), ["SLATE"]);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.result(), None);
    }
}
