//! Narrows a Wordle word list using guesses and the colors they received.
//!
//! Each guess is turned into a [`Constraint`], which keeps only the candidate words that could
//! have produced the same colors. Applying the constraints of several guesses one after another
//! leaves the words that agree with all of them.
//!
//! ```
//! use wordle_searcher::{search, GuessRow, WordBank};
//!
//! let bank = WordBank::from_iterator(["alpha", "allot", "below", "droll", "llama", "world"]).unwrap();
//! let rows: Vec<GuessRow> = vec!["llama:y....".parse().unwrap()];
//!
//! let words = search(&bank, &rows).unwrap();
//! assert_eq!(
//!     words.iter().map(|word| word.as_ref()).collect::<Vec<&str>>(),
//!     vec!["below", "world"]
//! );
//! ```

mod data;
mod filter;
mod results;
mod search;

pub use data::WordBank;
pub use filter::*;
pub use results::*;
pub use search::*;
