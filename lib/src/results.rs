use crate::filter::Constraint;
use std::fmt;
use std::io;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The feedback given for a single letter of a guess.
///
/// Colors are ordered by their numeric code, so `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    /// The letter is not in the word (gray). Unscored tiles are treated as absent.
    #[default]
    Absent = 0,
    /// The letter is in the word, but not at this location (yellow).
    Present = 1,
    /// The letter is in the word at this location (green).
    Correct = 2,
}

impl Color {
    /// Returns the numeric code for this color: 0 for absent, 1 for present, 2 for correct.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the color with the given numeric code, if there is one.
    pub fn from_code(code: u8) -> Option<Color> {
        match code {
            0 => Some(Color::Absent),
            1 => Some(Color::Present),
            2 => Some(Color::Correct),
            _ => None,
        }
    }
}

impl TryFrom<char> for Color {
    type Error = WordleError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'g' | 'G' => Ok(Color::Correct),
            'y' | 'Y' => Ok(Color::Present),
            '.' | 'x' | 'X' => Ok(Color::Absent),
            _ => Err(WordleError::UnsupportedCharacter(value)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Color::Absent => '.',
            Color::Present => 'y',
            Color::Correct => 'g',
        };
        write!(f, "{}", symbol)
    }
}

/// Indicates that an error occurred while reading words or filtering them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordleError {
    /// A guess, color list or candidate did not have the expected number of letters.
    #[error("expected {expected} letters or colors, but got {actual}")]
    InvalidInput { expected: usize, actual: usize },
    /// The words in a word bank do not all have this length.
    #[error("all words must have {0} letters")]
    WordLength(usize),
    /// Words of this length cannot be filtered.
    #[error("words with {0} letters are not supported")]
    UnsupportedWordLength(usize),
    /// The character is not a lowercase letter, or not a valid color.
    #[error("unsupported character {0:?}")]
    UnsupportedCharacter(char),
    /// A guess row was only partly typed.
    #[error("Complete the word \"{}\"", .0.to_uppercase())]
    IncompleteWord(String),
    /// A guess is not in the word bank.
    #[error("\"{}\" is not a valid word", .0.to_uppercase())]
    NotFound(String),
    /// There were no complete guesses to search with.
    #[error("Please enter at least one word")]
    NoGuesses,
    /// Reading the word list failed.
    #[error("failed to read words: {0}")]
    Io(String),
}

impl From<io::Error> for WordleError {
    fn from(error: io::Error) -> Self {
        WordleError::Io(error.to_string())
    }
}

/// Replaces every unset color with [`Color::Absent`].
pub fn colors_or_absent(colors: &[Option<Color>]) -> Vec<Color> {
    colors.iter().map(|color| color.unwrap_or_default()).collect()
}

/// Parses one color per character. `?` marks a tile whose color has not been set.
///
/// ```
/// use wordle_searcher::{parse_colors, Color};
///
/// assert_eq!(
///     parse_colors("gy.?").unwrap(),
///     vec![Some(Color::Correct), Some(Color::Present), Some(Color::Absent), None]
/// );
/// ```
pub fn parse_colors(colors: &str) -> Result<Vec<Option<Color>>, WordleError> {
    colors
        .chars()
        .map(|symbol| match symbol {
            '?' => Ok(None),
            _ => Color::try_from(symbol).map(Some),
        })
        .collect()
}

/// A single row of the board: a guess and the color chosen for each of its tiles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuessRow {
    /// The letters typed so far, in lower case.
    pub guess: String,
    /// The color of each tile, provided in the same letter order as in the guess.
    pub colors: Vec<Option<Color>>,
}

impl GuessRow {
    /// Creates a row for the given guess with no colors set.
    pub fn new(guess: &str) -> GuessRow {
        let guess = guess.to_lowercase();
        let colors = vec![None; guess.chars().count()];
        GuessRow { guess, colors }
    }

    /// Creates a row for the given guess with every color set.
    pub fn with_colors(guess: &str, colors: &[Color]) -> GuessRow {
        GuessRow {
            guess: guess.to_lowercase(),
            colors: colors.iter().copied().map(Some).collect(),
        }
    }

    /// Returns the number of letters in this row.
    pub fn len(&self) -> usize {
        self.guess.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.guess.is_empty()
    }

    /// Returns `true` iff this row holds a full word of the given length.
    pub fn is_complete(&self, word_length: usize) -> bool {
        self.len() == word_length
    }

    /// Returns the color of every letter, treating unset and missing tiles as absent.
    pub fn colors(&self) -> Vec<Color> {
        let mut colors = colors_or_absent(&self.colors);
        let num_letters = self.len();
        if colors.len() < num_letters {
            colors.resize(num_letters, Color::Absent);
        }
        colors
    }

    /// Builds the constraint this row places on candidate words.
    pub fn constraint(&self) -> Result<Constraint, WordleError> {
        Constraint::new(&self.guess, &self.colors())
    }
}

impl FromStr for GuessRow {
    type Err = WordleError;

    /// Parses rows written as `word:colors`, e.g. `crane:g.y..`, or as a bare word with no
    /// colors set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, maybe_colors) = match s.trim().split_once(':') {
            Some((word, colors)) => (word, Some(colors)),
            None => (s.trim(), None),
        };
        if let Some(bad) = word.chars().find(|letter| !letter.is_ascii_alphabetic()) {
            return Err(WordleError::UnsupportedCharacter(bad));
        }
        let mut row = GuessRow::new(word);
        if let Some(colors) = maybe_colors {
            let colors = parse_colors(colors)?;
            if colors.len() != row.len() {
                return Err(WordleError::InvalidInput {
                    expected: row.len(),
                    actual: colors.len(),
                });
            }
            row.colors = colors;
        }
        Ok(row)
    }
}

impl fmt::Display for GuessRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.guess)?;
        for color in &self.colors {
            match color {
                Some(color) => write!(f, "{}", color)?,
                None => write!(f, "?")?,
            }
        }
        Ok(())
    }
}

/// Determines the colors the given `guess` receives when the answer is `objective`.
///
/// Correct letters are marked first. Each remaining letter of the guess is then marked present,
/// from left to right, while the objective still has an unmatched copy of it.
pub fn get_result_for_guess(objective: &str, guess: &str) -> Result<Vec<Color>, WordleError> {
    let mut unmatched: Vec<Option<char>> = objective.chars().map(Some).collect();
    let guess: Vec<char> = guess.chars().collect();
    if unmatched.len() != guess.len() {
        return Err(WordleError::InvalidInput {
            expected: unmatched.len(),
            actual: guess.len(),
        });
    }

    let mut colors = vec![Color::Absent; guess.len()];
    for (index, letter) in guess.iter().enumerate() {
        if unmatched[index] == Some(*letter) {
            colors[index] = Color::Correct;
            unmatched[index] = None;
        }
    }
    for (index, letter) in guess.iter().enumerate() {
        if colors[index] == Color::Correct {
            continue;
        }
        if let Some(slot) = unmatched.iter_mut().find(|slot| **slot == Some(*letter)) {
            colors[index] = Color::Present;
            *slot = None;
        }
    }
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_codes() {
        assert_eq!(Color::Absent.code(), 0);
        assert_eq!(Color::Present.code(), 1);
        assert_eq!(Color::Correct.code(), 2);
        assert_eq!(Color::from_code(2), Some(Color::Correct));
        assert_eq!(Color::from_code(3), None);
        assert_eq!(Color::default(), Color::Absent);
        assert!(Color::Correct > Color::Present && Color::Present > Color::Absent);
    }

    #[test]
    fn color_from_char() {
        assert_eq!(Color::try_from('G'), Ok(Color::Correct));
        assert_eq!(Color::try_from('y'), Ok(Color::Present));
        assert_eq!(Color::try_from('x'), Ok(Color::Absent));
        assert_eq!(
            Color::try_from('q'),
            Err(WordleError::UnsupportedCharacter('q'))
        );
    }

    #[test]
    fn row_colors_fill_unset_tiles() {
        let row = GuessRow {
            guess: "crane".to_string(),
            colors: vec![Some(Color::Correct), None, Some(Color::Present)],
        };

        assert_eq!(
            row.colors(),
            vec![
                Color::Correct,
                Color::Absent,
                Color::Present,
                Color::Absent,
                Color::Absent
            ]
        );
    }

    #[test]
    fn row_display() {
        let mut row = GuessRow::new("CRANE");
        row.colors[0] = Some(Color::Correct);
        row.colors[2] = Some(Color::Present);

        assert_eq!(row.to_string(), "crane:g?y??");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            WordleError::IncompleteWord("bel".to_string()).to_string(),
            "Complete the word \"BEL\""
        );
        assert_eq!(
            WordleError::NotFound("zzzzz".to_string()).to_string(),
            "\"ZZZZZ\" is not a valid word"
        );
        assert_eq!(
            WordleError::NoGuesses.to_string(),
            "Please enter at least one word"
        );
    }
}
