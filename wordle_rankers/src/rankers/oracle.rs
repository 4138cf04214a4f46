use wordle_greedy::{oracle::check, Ranker, Word};

/// Ranks a word by the total feedback it earns against a list of answers.
///
/// For every answer, the word is graded with the solver's own oracle and the
/// numeric values of the grades (two for correct, one for almost, zero for
/// incorrect) are added up. Words that share many well-placed letters with
/// likely answers end up first in the corpus.
///
/// Every word is ranked, so the corpus built from this ranker contains the
/// whole word list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct OracleScore {
    answers: Vec<Word>,
}

impl OracleScore {
    /// Creates a ranker that scores words against `answers`.
    pub fn new(answers: Vec<Word>) -> Self {
        OracleScore { answers }
    }

    /// Gets the answers words are scored against.
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}

impl Ranker for OracleScore {
    type Weight = u64;

    fn rank(&self, word: &Word) -> Option<u64> {
        Some(
            self.answers
                .iter()
                .map(|answer| check(word, answer).value() as u64)
                .sum(),
        )
    }
}
