use crate::info_log;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Dictionary of accepted words, upper-cased, in file order without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordbank {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Wordbank {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bank = Self::default();
        for word in words {
            bank.insert(word.as_ref());
        }
        bank
    }

    fn insert(&mut self, raw: &str) {
        let Some(word) = normalize(raw) else {
            return;
        };
        if self.index.insert(word.clone()) {
            self.words.push(word);
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_uppercase())
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words with exactly `length` letters.
    pub fn with_length(&self, length: usize) -> impl Iterator<Item = &String> {
        self.words.iter().filter(move |w| w.len() == length)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_uppercase();
    (!word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
}

pub fn load_wordbank_from_str(data: &str) -> Wordbank {
    Wordbank::new(data.lines())
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Wordbank> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut bank = Wordbank::default();
    for line in reader.lines() {
        bank.insert(&line?);
    }
    info_log!("Loaded {} words from {}", bank.len(), path.display());
    Ok(bank)
}
