//! Per-letter feedback for a guess against the secret word.
//!
//! Feedback is resolved in two passes so repeated letters are never counted
//! more often than they occur in the secret: exact matches are settled first,
//! then the remaining guess letters claim the leftmost unconsumed occurrence.

use crate::debug_log;
use std::fmt;
use thiserror::Error;

/// Classification of a single guess position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter, right position
    Hit,
    /// Letter is in the secret at another unconsumed position
    Present,
    /// No unconsumed occurrence left in the secret
    Miss,
}

impl Mark {
    /// Display symbol used for this mark when the guessed letter is `letter`.
    #[must_use]
    pub fn symbol(self, letter: char) -> char {
        match self {
            Self::Hit => letter,
            Self::Present => '+',
            Self::Miss => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("secret has {secret_len} letters but guess has {guess_len}")]
    InvalidInput { secret_len: usize, guess_len: usize },
}

/// Ordered marks, one per guess position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: Vec<Mark>,
}

impl Feedback {
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// True when every position is a `Hit`.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Hit)
    }

    /// Render against the guess that produced it: the letter for a hit,
    /// `+` for present and `-` for a miss.
    #[must_use]
    pub fn render(&self, guess: &str) -> String {
        guess
            .chars()
            .zip(&self.marks)
            .map(|(c, m)| m.symbol(c.to_ascii_uppercase()))
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            let c = match mark {
                Mark::Hit => 'H',
                Mark::Present => 'P',
                Mark::Miss => 'M',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Compute the feedback for `guess` against `secret`.
///
/// Comparison is case-insensitive. Both words must have the same number of
/// characters.
///
/// # Errors
/// Returns [`FeedbackError::InvalidInput`] when the lengths differ.
pub fn compute_feedback(secret: &str, guess: &str) -> Result<Feedback, FeedbackError> {
    let secret_chars: Vec<char> = secret.chars().map(|c| c.to_ascii_uppercase()).collect();
    let guess_chars: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();

    if secret_chars.len() != guess_chars.len() {
        return Err(FeedbackError::InvalidInput {
            secret_len: secret_chars.len(),
            guess_len: guess_chars.len(),
        });
    }

    let mut marks = vec![Mark::Miss; guess_chars.len()];
    let mut consumed = vec![false; secret_chars.len()];

    // First pass: hits
    for (i, (g, s)) in guess_chars.iter().zip(&secret_chars).enumerate() {
        if g == s {
            marks[i] = Mark::Hit;
            consumed[i] = true;
        }
    }

    // Second pass: leftmost unconsumed occurrence
    for (i, g) in guess_chars.iter().enumerate() {
        if marks[i] == Mark::Hit {
            continue;
        }
        let found = secret_chars
            .iter()
            .zip(&consumed)
            .position(|(s, &used)| !used && s == g);
        if let Some(pos) = found {
            marks[i] = Mark::Present;
            consumed[pos] = true;
        }
    }

    let feedback = Feedback { marks };
    debug_log!("compute_feedback() - {} vs {} -> {}", guess, secret, feedback);
    Ok(feedback)
}
