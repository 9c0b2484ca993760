use crate::filter::MAX_WORD_LENGTH;
use crate::results::WordleError;
use log::debug;
use std::collections::HashSet;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

/// Contains all the candidate words for a game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    known_words: HashSet<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` struct by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word will be trimmed and converted to
    /// lower case, and empty lines are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let lines = word_reader
            .lines()
            .collect::<Result<Vec<String>, std::io::Error>>()?;
        WordBank::from_iterator(lines)
    }

    /// Constructs a new `WordBank` struct using the words from the given iterator.
    ///
    /// Each word will be trimmed and converted to lower case, and empty words are skipped. Only
    /// the first copy of a repeated word is kept.
    ///
    /// ```
    /// use wordle_searcher::WordBank;
    ///
    /// let bank = WordBank::from_iterator(["Crane", "slate", "", "crane"]).unwrap();
    ///
    /// assert_eq!(bank.len(), 2);
    /// assert_eq!(bank.word_length(), 5);
    /// assert!(bank.contains("CRANE"));
    /// ```
    pub fn from_iterator<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut bank = WordBank::default();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            bank.insert(&word.to_lowercase())?;
        }
        debug!(
            "Loaded {} words of length {}",
            bank.all_words.len(),
            bank.word_length
        );
        Ok(bank)
    }

    fn insert(&mut self, word: &str) -> Result<(), WordleError> {
        if let Some(bad) = word.chars().find(|letter| !letter.is_ascii_lowercase()) {
            return Err(WordleError::UnsupportedCharacter(bad));
        }
        let length = word.len();
        if self.word_length == 0 {
            if length > MAX_WORD_LENGTH {
                return Err(WordleError::UnsupportedWordLength(length));
            }
            self.word_length = length;
        } else if self.word_length != length {
            return Err(WordleError::WordLength(self.word_length));
        }

        let word: Arc<str> = Arc::from(word);
        if self.known_words.insert(Arc::clone(&word)) {
            self.all_words.push(word);
        }
        Ok(())
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the number of letters in every word, or 0 if the bank is empty.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns `true` iff the given word is in the bank, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.known_words.contains(word.to_lowercase().as_str())
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

impl<'a> IntoIterator for &'a WordBank {
    type Item = &'a Arc<str>;
    type IntoIter = std::slice::Iter<'a, Arc<str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.all_words.iter()
    }
}
