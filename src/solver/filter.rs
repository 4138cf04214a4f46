//! Narrowing the corpus down to the words that could still be the answer.

use crate::{
    corpus::{by_weight, WeightedWord},
    solver::Guess,
    weight::Weight,
};

/// Returns the entries of `pool` consistent with every guess in `history`,
/// heaviest first.
///
/// An entry is consistent with a guess when grading the guess against that
/// entry reproduces the recorded feedback exactly (see [`Guess::matches()`]).
/// With an empty history every entry is kept. Entries of equal weight keep
/// their order from `pool`.
///
/// Because the recorded feedback came from the same oracle, the real answer
/// is never filtered out as long as it is in `pool`.
///
/// # Examples
///
/// ```rust
/// # use wordle_greedy::{oracle::check, solver::{filter, Guess}, Corpus, Word};
/// #
/// let corpus: Corpus<u32> = Corpus::from_reader("apple,10\nangle,5\nample,1\n".as_bytes())?;
/// let apple = Word::from_str("apple")?;
/// let secret = Word::from_str("angle")?;
///
/// let history = [Guess::new(apple, check(&apple, &secret))];
/// let remaining = filter(corpus.entries(), &history);
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].word, secret);
/// #
/// # Ok::<_, wordle_greedy::WordleError>(())
/// ```
pub fn filter<'p, W, I>(pool: I, history: &[Guess]) -> Vec<&'p WeightedWord<W>>
where
    W: Weight,
    I: IntoIterator<Item = &'p WeightedWord<W>>,
{
    let mut candidates: Vec<_> = pool
        .into_iter()
        .filter(|entry| history.iter().all(|guess| guess.matches(&entry.word)))
        .collect();
    candidates.sort_by(|a, b| by_weight(a, b));
    candidates
}
