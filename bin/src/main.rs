use clap::{Parser, Subcommand};
use log::debug;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use wordle_searcher::*;

/// Lists the words that are still possible after some Wordle guesses.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long, global = true)]
    words_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter the word list with one or more guesses.
    Search {
        /// A guess and its colors, e.g. "crane:g.y..". Repeat for each guess.
        #[arg(short, long = "row", required = true)]
        rows: Vec<GuessRow>,

        /// Check candidates on all available cores.
        #[arg(long)]
        parallel: bool,

        /// The maximum number of words to print.
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
    /// Show the colors that a guess receives against the given objective word.
    Score { objective: String, guess: String },
    /// Enter one guess per line and watch the word list shrink.
    Interactive {
        /// Check candidates on all available cores.
        #[arg(long)]
        parallel: bool,

        /// The maximum number of words to print after each guess.
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let start_time = Instant::now();
    let args = Args::parse();

    match args.command {
        Command::Search {
            rows,
            parallel,
            limit,
        } => {
            let word_bank = load_word_bank(args.words_file)?;
            match search_with_options(&word_bank, &rows, SearchOptions { parallel }) {
                Ok(words) => print_candidates(&words, limit),
                Err(error) => {
                    eprintln!("Error: {}", error);
                    std::process::exit(1);
                }
            }
        }
        Command::Score { objective, guess } => {
            let colors = get_result_for_guess(&objective.to_lowercase(), &guess.to_lowercase())?;
            println!("{}", GuessRow::with_colors(&guess, &colors));
        }
        Command::Interactive { parallel, limit } => {
            let word_bank = load_word_bank(args.words_file)?;
            play_interactive(&word_bank, io::stdin().lock(), parallel, limit)?;
        }
    }

    debug!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn load_word_bank(words_file: Option<PathBuf>) -> Result<WordBank, Box<dyn Error>> {
    let Some(path) = words_file else {
        return Err(Box::new(io::Error::new(
            io::ErrorKind::InvalidInput,
            "a words file is required, pass it with --words-file",
        )));
    };
    let words_reader = io::BufReader::new(File::open(&path)?);
    let word_bank = WordBank::from_reader(words_reader)?;
    println!(
        "There are {} possible words in {}.",
        word_bank.len(),
        path.display()
    );
    Ok(word_bank)
}

fn print_candidates(words: &[Arc<str>], limit: usize) {
    if words.is_empty() {
        println!("No candidates remain. Check the colors of your guesses.");
        return;
    }
    println!("{} candidates remain:", words.len());
    for word in words.iter().take(limit) {
        println!("\t{}", word);
    }
    if words.len() > limit {
        println!("\t...and {} more", words.len() - limit);
    }
}

fn play_interactive<R: BufRead>(
    word_bank: &WordBank,
    reader: R,
    parallel: bool,
    limit: usize,
) -> io::Result<()> {
    println!(
        "Enter each guess with its colors, one per line, as <word>:<colors>.\n\n\
         For each letter, enter:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location\n\
           * '?' = not scored yet, treated as '.'\n\n\
         For example, if the word was \"spade\" and you guessed \"soapy\", enter \"soapy:g.gy.\".\n\
         Enter an empty line to stop.");

    let mut candidates: Vec<Arc<str>> = word_bank.to_vec();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        let row = match line.parse::<GuessRow>() {
            Ok(row) => row,
            Err(error) => {
                println!("{}. Try again.", error);
                continue;
            }
        };
        let rows = [row];
        if let Err(error) = validate_rows(&rows, word_bank) {
            println!("{}. Try again.", error);
            continue;
        }
        let filtered = rows[0].constraint().and_then(|constraint| {
            if parallel {
                constraint.par_filter(&candidates)
            } else {
                constraint.filter(&candidates)
            }
        });
        match filtered {
            Ok(words) => candidates = words,
            Err(error) => {
                println!("{}. Try again.", error);
                continue;
            }
        }
        print_candidates(&candidates, limit);
        if candidates.len() <= 1 {
            break;
        }
    }

    Ok(())
}
