use crate::data::WordBank;
use crate::results::{GuessRow, WordleError};
use log::info;
use std::sync::Arc;

/// Options that change how a search runs, but not its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Checks candidates on the rayon thread pool instead of the current thread.
    pub parallel: bool,
}

/// Checks that the rows are ready to be searched with.
///
/// Rows with no letters are skipped. Every other row must hold a complete word from the bank,
/// and at least one such row is required.
pub fn validate_rows(rows: &[GuessRow], bank: &WordBank) -> Result<(), WordleError> {
    let word_length = bank.word_length();
    let mut complete_words = Vec::new();
    for row in rows.iter().filter(|row| !row.is_empty()) {
        if row.len() < word_length {
            return Err(WordleError::IncompleteWord(row.guess.clone()));
        }
        if row.len() > word_length {
            return Err(WordleError::InvalidInput {
                expected: word_length,
                actual: row.len(),
            });
        }
        complete_words.push(row.guess.as_str());
    }

    if let Some(unknown) = complete_words.iter().find(|word| !bank.contains(word)) {
        return Err(WordleError::NotFound(unknown.to_string()));
    }
    if complete_words.is_empty() {
        return Err(WordleError::NoGuesses);
    }
    Ok(())
}

/// Returns the words in the bank that are consistent with every row, in word bank order.
///
/// An empty result means no word matches. It is not an error.
///
/// ```
/// use wordle_searcher::{search, GuessRow, WordBank};
///
/// let bank = WordBank::from_iterator(["allot", "below", "endow"]).unwrap();
/// let rows = ["allot:..gg.".parse::<GuessRow>().unwrap()];
///
/// let words = search(&bank, &rows).unwrap();
/// assert_eq!(words.len(), 1);
/// assert_eq!(words[0].as_ref(), "below");
/// ```
pub fn search(bank: &WordBank, rows: &[GuessRow]) -> Result<Vec<Arc<str>>, WordleError> {
    search_with_options(bank, rows, SearchOptions::default())
}

/// Same as [`search`], with explicit options.
pub fn search_with_options(
    bank: &WordBank,
    rows: &[GuessRow],
    options: SearchOptions,
) -> Result<Vec<Arc<str>>, WordleError> {
    validate_rows(rows, bank)?;

    let mut candidates: Vec<Arc<str>> = bank.to_vec();
    for row in rows.iter().filter(|row| !row.is_empty()) {
        let constraint = row.constraint()?;
        candidates = if options.parallel {
            constraint.par_filter(&candidates)?
        } else {
            constraint.filter(&candidates)?
        };
    }
    info!(
        "{} of {} words remain after {} guesses",
        candidates.len(),
        bank.len(),
        rows.iter().filter(|row| !row.is_empty()).count()
    );
    Ok(candidates)
}
