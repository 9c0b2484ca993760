use crate::results::{Color, WordleError};
use log::debug;
use rayon::prelude::*;
use std::cmp::Reverse;
use std::fmt;

/// The longest word that can be filtered. Letter positions are tracked as bits of a `u32`.
pub const MAX_WORD_LENGTH: usize = 16;

/// A slot of a masked candidate. `None` means the letter there has already been matched.
type Slot = Option<char>;

/// The restriction that one colored guess places on candidate words.
///
/// Build a constraint once per guess, then test as many candidates as needed against it.
///
/// ```
/// use wordle_searcher::{Color, Constraint};
///
/// let constraint = Constraint::new(
///     "llama",
///     &[Color::Present, Color::Absent, Color::Absent, Color::Absent, Color::Absent],
/// )
/// .unwrap();
///
/// assert_eq!(constraint.is_satisfied_by("below"), Ok(true));
/// // The second `l` in "droll" was not accounted for.
/// assert_eq!(constraint.is_satisfied_by("droll"), Ok(false));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    letters: Vec<char>,
    colors: Vec<Color>,
    /// Letter indices, correct colors first, then present, then absent.
    order: Vec<usize>,
    /// For each index, the positions at which the guess holds the same letter.
    guess_bits: Vec<u32>,
}

impl Constraint {
    /// Creates the constraint for the given guess and the colors of each of its letters.
    ///
    /// Fails if the number of colors does not match the number of letters, or if the guess is
    /// empty or longer than [`MAX_WORD_LENGTH`].
    pub fn new(guess: &str, colors: &[Color]) -> Result<Constraint, WordleError> {
        let letters: Vec<char> = guess.chars().map(|c| c.to_ascii_lowercase()).collect();
        if letters.len() != colors.len() {
            return Err(WordleError::InvalidInput {
                expected: letters.len(),
                actual: colors.len(),
            });
        }
        if letters.is_empty() || letters.len() > MAX_WORD_LENGTH {
            return Err(WordleError::UnsupportedWordLength(letters.len()));
        }

        let mut order: Vec<usize> = (0..letters.len()).collect();
        order.sort_by_key(|&index| Reverse(colors[index]));

        let guess_bits = letters
            .iter()
            .map(|&letter| letter_bits(letters.iter().copied().map(Some), letter))
            .collect();

        Ok(Constraint {
            letters,
            colors: colors.to_vec(),
            order,
            guess_bits,
        })
    }

    /// Returns the number of letters a candidate must have.
    pub fn word_length(&self) -> usize {
        self.letters.len()
    }

    /// Returns the guessed word.
    pub fn guess(&self) -> String {
        self.letters.iter().collect()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns `true` iff the given word is consistent with this guess and its colors.
    ///
    /// Fails if the word does not have the same number of letters as the guess.
    pub fn is_satisfied_by(&self, word: &str) -> Result<bool, WordleError> {
        let mut mask = self.mask_for(word)?;
        Ok(self.accepts(&mut mask[..self.letters.len()]))
    }

    /// Returns the candidates that satisfy this constraint, in their original order.
    pub fn filter<S>(&self, candidates: &[S]) -> Result<Vec<S>, WordleError>
    where
        S: AsRef<str> + Clone,
    {
        let kept = candidates
            .iter()
            .filter_map(|candidate| self.keep(candidate))
            .collect::<Result<Vec<S>, WordleError>>()?;
        debug!(
            "{} kept {} of {} candidates",
            self,
            kept.len(),
            candidates.len()
        );
        Ok(kept)
    }

    /// Same as [`Constraint::filter`], but checks the candidates in parallel.
    ///
    /// The returned words keep their original order.
    pub fn par_filter<S>(&self, candidates: &[S]) -> Result<Vec<S>, WordleError>
    where
        S: AsRef<str> + Clone + Send + Sync,
    {
        let kept = candidates
            .par_iter()
            .filter_map(|candidate| self.keep(candidate))
            .collect::<Result<Vec<S>, WordleError>>()?;
        debug!(
            "{} kept {} of {} candidates in parallel",
            self,
            kept.len(),
            candidates.len()
        );
        Ok(kept)
    }

    fn keep<S>(&self, candidate: &S) -> Option<Result<S, WordleError>>
    where
        S: AsRef<str> + Clone,
    {
        self.is_satisfied_by(candidate.as_ref())
            .map(|satisfied| satisfied.then(|| candidate.clone()))
            .transpose()
    }

    fn mask_for(&self, word: &str) -> Result<[Slot; MAX_WORD_LENGTH], WordleError> {
        let length_error = || WordleError::InvalidInput {
            expected: self.letters.len(),
            actual: word.chars().count(),
        };
        let mut mask = [None; MAX_WORD_LENGTH];
        let mut length = 0;
        for letter in word.chars() {
            if length == self.letters.len() {
                return Err(length_error());
            }
            mask[length] = Some(letter.to_ascii_lowercase());
            length += 1;
        }
        if length != self.letters.len() {
            return Err(length_error());
        }
        Ok(mask)
    }

    /// Checks each letter of the guess against the masked candidate, marking letters of the
    /// candidate as used once they account for a correct or present letter.
    fn accepts(&self, mask: &mut [Slot]) -> bool {
        for &index in &self.order {
            let letter = self.letters[index];
            match self.colors[index] {
                Color::Absent => {
                    if mask.contains(&Some(letter)) {
                        return false;
                    }
                }
                Color::Present => {
                    let mask_bits = letter_bits(mask.iter().copied(), letter);
                    // A match where the guess has the same letter would have been correct.
                    if mask_bits == 0 || mask_bits & self.guess_bits[index] != 0 {
                        return false;
                    }
                    mask[mask_bits.trailing_zeros() as usize] = None;
                }
                Color::Correct => {
                    if mask[index] != Some(letter) {
                        return false;
                    }
                    mask[index] = None;
                }
            }
        }
        true
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.guess())?;
        for color in &self.colors {
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

/// Returns the words from `candidates` that are consistent with the given guess and colors,
/// preserving their order.
///
/// ```
/// use wordle_searcher::{filter_words, Color};
///
/// let candidates = ["allot", "below", "endow"];
/// let colors = [Color::Absent, Color::Absent, Color::Correct, Color::Correct, Color::Absent];
///
/// assert_eq!(filter_words(&candidates, "allot", &colors), Ok(vec!["below"]));
/// ```
pub fn filter_words<S>(
    candidates: &[S],
    guess: &str,
    colors: &[Color],
) -> Result<Vec<S>, WordleError>
where
    S: AsRef<str> + Clone,
{
    Constraint::new(guess, colors)?.filter(candidates)
}

/// Sets bit `i` for every slot `i` that holds `letter`.
fn letter_bits<I>(slots: I, letter: char) -> u32
where
    I: IntoIterator<Item = Slot>,
{
    slots
        .into_iter()
        .enumerate()
        .filter(|(_, slot)| *slot == Some(letter))
        .fold(0, |bits, (index, _)| bits | 1 << index)
}
