/// Property-based tests for the round rules using proptest
///
/// These check the masked reveal, the win test and the miss counter over
/// random words and random guess sequences.
use hangman::core::{PLACEHOLDER, Round, RoundStatus, SecretWord};
use proptest::prelude::*;
use std::collections::BTreeSet;

const MAX_INCORRECT: usize = 9;

// Strategy to generate a lowercase ASCII word
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

// Strategy to generate a set of guessed letters
fn guessed_strategy() -> impl Strategy<Value = Vec<char>> {
    prop::collection::btree_set(prop::char::range('a', 'z'), 0..=10)
        .prop_map(|set| set.into_iter().collect())
}

// Strategy to generate a guess sequence, possibly with repeats and junk
fn guess_lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]|[A-Z]|[0-9]|[a-z]{2}", 0..40)
}

proptest! {
    #[test]
    fn reveal_has_word_length(word in word_strategy(), guessed in guessed_strategy()) {
        let secret = SecretWord::new(&word).unwrap();
        prop_assert_eq!(secret.masked_reveal(&guessed).len(), word.chars().count());
    }

    #[test]
    fn reveal_shows_exactly_guessed_positions(word in word_strategy(), guessed in guessed_strategy()) {
        let secret = SecretWord::new(&word).unwrap();
        let reveal = secret.masked_reveal(&guessed);

        for (c, shown) in word.chars().zip(reveal) {
            if guessed.contains(&c) {
                prop_assert_eq!(shown, c);
            } else {
                prop_assert_eq!(shown, PLACEHOLDER);
            }
        }
    }

    #[test]
    fn fully_guessed_iff_every_letter_guessed(word in word_strategy(), guessed in guessed_strategy()) {
        let secret = SecretWord::new(&word).unwrap();
        let expected = word.chars().all(|c| guessed.contains(&c));

        prop_assert_eq!(secret.is_fully_guessed(&guessed), expected);
        prop_assert!(!secret.is_fully_guessed(&[]));
    }

    #[test]
    fn misses_count_distinct_absent_letters(word in word_strategy(), lines in guess_lines_strategy()) {
        let mut round = Round::new(SecretWord::new(&word).unwrap(), MAX_INCORRECT);

        for line in &lines {
            if round.status() != RoundStatus::InProgress {
                break;
            }
            let _ = round.apply_guess(line);
        }

        let guessed = round.guessed_letters();
        let distinct: BTreeSet<char> = guessed.iter().copied().collect();
        let misses = distinct.iter().filter(|c| !word.contains(**c)).count();

        prop_assert_eq!(distinct.len(), guessed.len());
        prop_assert_eq!(round.incorrect_guesses(), misses);
        prop_assert!(round.incorrect_guesses() <= MAX_INCORRECT);
        prop_assert!(guessed.iter().all(char::is_ascii_lowercase));
    }
}
