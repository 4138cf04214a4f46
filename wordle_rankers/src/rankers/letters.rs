use itertools::Itertools;
use log::debug;
use wordle_greedy::{Ranker, Word};

use crate::util::{letter_index, letter_occurrences, OCCURRENCES};

/// Ranks a word by how common its letters are.
///
/// The weight of a word is the sum of the relative frequencies of its
/// distinct letters, so a word never gets credit twice for one letter. By
/// default words with a repeated letter are left out of the corpus entirely,
/// since they waste a position on a letter that is already being tested.
///
/// Frequencies come from the Wordle guess word list (see
/// [`OCCURRENCES`](crate::util::OCCURRENCES)) unless counted from another
/// list with [`from_words()`](LetterFrequency::from_words()).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LetterFrequency {
    counts: [u32; 26],
    allow_repeats: bool,
}

impl Default for LetterFrequency {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterFrequency {
    /// Creates a ranker using the built-in letter counts.
    pub fn new() -> Self {
        LetterFrequency {
            counts: OCCURRENCES,
            allow_repeats: false,
        }
    }

    /// Creates a ranker using letter counts from `words`.
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let counts = letter_occurrences(words);
        debug!("counted {} letters", counts.iter().sum::<u32>());
        LetterFrequency {
            counts,
            allow_repeats: false,
        }
    }

    /// Ranks words with repeated letters too, instead of skipping them.
    pub fn allow_repeats(self) -> Self {
        LetterFrequency {
            allow_repeats: true,
            ..self
        }
    }

    /// Gets the relative frequency of a lowercase letter.
    pub fn frequency(&self, letter: u8) -> f64 {
        let total: u32 = self.counts.iter().sum();
        match letter_index(letter) {
            Some(i) if total > 0 => self.counts[i] as f64 / total as f64,
            _ => 0.,
        }
    }
}

impl Ranker for LetterFrequency {
    type Weight = f64;

    fn rank(&self, word: &Word) -> Option<f64> {
        if !self.allow_repeats && word.has_repeated_letter() {
            return None;
        }

        Some(
            word.letters()
                .iter()
                .unique()
                .map(|&letter| self.frequency(letter))
                .sum(),
        )
    }
}

#[cfg(test)]
mod test {
    use wordle_greedy::rank::rank_corpus;

    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::from_str(w).unwrap()).collect()
    }

    #[test]
    fn repeated_letters_are_skipped() {
        let ranker = LetterFrequency::new();
        assert_eq!(ranker.rank(&Word::from_str("speed").unwrap()), None);
        assert!(ranker.rank(&Word::from_str("crane").unwrap()).is_some());
    }

    #[test]
    fn repeats_count_once_when_allowed() {
        let ranker = LetterFrequency::from_words(&words(&["abcde"])).allow_repeats();
        let weight = ranker.rank(&Word::from_str("aaabb").unwrap()).unwrap();
        assert!((weight - 0.4).abs() < 1e-9);
    }

    #[test]
    fn counted_frequencies() {
        let ranker = LetterFrequency::from_words(&words(&["aaaab"]));
        assert!((ranker.frequency(b'a') - 0.8).abs() < 1e-9);
        assert_eq!(ranker.frequency(b'z'), 0.);
        assert_eq!(ranker.frequency(b'?'), 0.);

        let empty = LetterFrequency::from_words(std::iter::empty());
        assert_eq!(empty.frequency(b'a'), 0.);
    }

    #[test]
    fn common_letters_rank_first() {
        let guesses = words(&["fuzzy", "jumpy", "arose", "crane", "eerie"]);
        let corpus = rank_corpus(&guesses, &LetterFrequency::new());
        let ranked: Vec<_> = corpus.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(ranked, ["arose", "crane", "jumpy"]);
    }
}
