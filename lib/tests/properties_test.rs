use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use wordle_searcher::*;

use std::result::Result;
use std::sync::Arc;

const WORDS: [&str; 30] = [
    "alpha", "allot", "begot", "below", "droll", "endow", "ingot", "world", "crane", "slate",
    "hairs", "pairs", "sassy", "essay", "llama", "hello", "belly", "tally", "stall", "speed",
    "abbey", "eerie", "geese", "sheep", "mamma", "basis", "oasis", "waist", "kayak", "level",
];

const NUM_ROUNDS: usize = 300;

fn create_word_bank() -> WordBank {
    WordBank::from_iterator(WORDS).unwrap()
}

fn random_colors(rng: &mut StdRng) -> Vec<Color> {
    (0..5)
        .map(|_| Color::from_code(rng.gen_range(0..3)).unwrap())
        .collect()
}

fn random_word<'a>(bank: &'a WordBank, rng: &mut StdRng) -> &'a str {
    bank.choose(rng).unwrap().as_ref()
}

#[test]
fn objective_survives_its_own_feedback() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..NUM_ROUNDS {
        let objective = random_word(&bank, &mut rng);
        let guess = random_word(&bank, &mut rng);
        let colors = get_result_for_guess(objective, guess)?;

        let kept = filter_words(&bank[..], guess, &colors)?;

        assert!(
            kept.iter().any(|word| word.as_ref() == objective),
            "{} was dropped for guess {} with colors {:?}",
            objective,
            guess,
            colors
        );
    }
    Ok(())
}

#[test]
fn refiltering_changes_nothing() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..NUM_ROUNDS {
        let guess = random_word(&bank, &mut rng);
        let colors = random_colors(&mut rng);

        let once = filter_words(&bank[..], guess, &colors)?;
        let twice = filter_words(&once, guess, &colors)?;

        assert_eq!(once, twice);
    }
    Ok(())
}

#[test]
fn filtering_keeps_order_and_never_grows() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..NUM_ROUNDS {
        let guess = random_word(&bank, &mut rng);
        let colors = random_colors(&mut rng);

        let kept = filter_words(&bank[..], guess, &colors)?;

        assert!(kept.len() <= bank.len());
        let positions: Vec<usize> = kept
            .iter()
            .map(|word| bank.iter().position(|other| other == word).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
    Ok(())
}

#[test]
fn row_order_does_not_matter() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..NUM_ROUNDS {
        let objective = random_word(&bank, &mut rng);
        let first = Constraint::new(
            random_word(&bank, &mut rng),
            &random_colors(&mut rng),
        )?;
        let guess = random_word(&bank, &mut rng);
        let second = Constraint::new(guess, &get_result_for_guess(objective, guess)?)?;

        let first_then_second = second.filter(&first.filter(&bank[..])?)?;
        let second_then_first = first.filter(&second.filter(&bank[..])?)?;

        assert_eq!(first_then_second, second_then_first);
    }
    Ok(())
}

#[test]
fn par_filter_matches_filter() -> Result<(), WordleError> {
    let bank = create_word_bank();
    let mut rng = StdRng::seed_from_u64(19);

    for _ in 0..NUM_ROUNDS {
        let constraint =
            Constraint::new(random_word(&bank, &mut rng), &random_colors(&mut rng))?;

        let serial: Vec<Arc<str>> = constraint.filter(&bank[..])?;
        let parallel: Vec<Arc<str>> = constraint.par_filter(&bank[..])?;

        assert_eq!(serial, parallel);
    }
    Ok(())
}
