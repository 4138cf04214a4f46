//! Precomputing corpus weights.
//!
//! A [`Ranker`] scores individual words. [`rank_corpus()`] applies one to a
//! whole word list and produces the weighted [`Corpus`] the solver needs.
//! Some rankers are provided by the `wordle_rankers` crate.

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    corpus::{Corpus, WeightedWord},
    weight::Weight,
    word::Word,
};

/// Trait defining a way to weight corpus words.
///
/// Returning `None` leaves the word out of the corpus.
///
/// Any `Fn(&Word) -> Option<W>` closure is a ranker:
///
/// ```rust
/// # use wordle_greedy::{rank::rank_corpus, Word};
/// #
/// let words = [Word::from_str("crane")?, Word::from_str("eerie")?];
/// let vowels = |w: &Word| Some(w.chars().filter(|c| "aeiou".contains(*c)).count() as u32);
///
/// let corpus = rank_corpus(&words, &vowels);
/// assert_eq!(corpus.entries()[0].word.as_str(), "eerie");
/// assert_eq!(corpus.entries()[0].weight, 4);
/// #
/// # Ok::<_, wordle_greedy::WordleError>(())
/// ```
pub trait Ranker: Sync {
    /// The type of weight this ranker produces.
    type Weight: Weight;

    /// Scores a single word.
    fn rank(&self, word: &Word) -> Option<Self::Weight>;
}

impl<F, W> Ranker for F
where
    F: Fn(&Word) -> Option<W> + Sync,
    W: Weight,
{
    type Weight = W;

    fn rank(&self, word: &Word) -> Option<W> {
        self(word)
    }
}

/// Ranks every word and collects the results into a corpus, heaviest first.
///
/// Words of equal weight keep their order from `words`. With the `parallel`
/// feature, words are ranked on the rayon thread pool.
pub fn rank_corpus<R: Ranker + ?Sized>(words: &[Word], ranker: &R) -> Corpus<R::Weight> {
    let rank_one = |word: &Word| {
        ranker
            .rank(word)
            .map(|weight| WeightedWord::new(*word, weight))
    };

    #[cfg(feature = "parallel")]
    let ranked: Vec<_> = words.par_iter().map(rank_one).collect();
    #[cfg(not(feature = "parallel"))]
    let ranked: Vec<_> = words.iter().map(rank_one).collect();

    let entries: Vec<_> = ranked.into_iter().flatten().collect();
    debug!("ranked {} of {} words", entries.len(), words.len());

    Corpus::new(entries)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Result;

    fn words(list: &[&str]) -> Result<Vec<Word>> {
        list.iter().map(|w| Word::from_str(w)).collect()
    }

    #[test]
    fn skipped_words_are_left_out() -> Result<()> {
        let words = words(&["crane", "speed", "slate"])?;
        let corpus = rank_corpus(&words, &|w: &Word| (!w.has_repeated_letter()).then(|| 1_u64));
        let ranked: Vec<_> = corpus.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(ranked, ["crane", "slate"]);
        Ok(())
    }

    #[test]
    fn equal_weights_keep_input_order() -> Result<()> {
        let words = words(&["trace", "crate", "react", "cater"])?;
        let corpus = rank_corpus(&words, &|w: &Word| Some(if w.as_str() == "react" { 2.0 } else { 1.0 }));
        let ranked: Vec<_> = corpus.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(ranked, ["react", "trace", "crate", "cater"]);
        Ok(())
    }

    #[derive(Debug)]
    struct Length;

    impl Ranker for Length {
        type Weight = usize;

        fn rank(&self, word: &Word) -> Option<usize> {
            Some(word.len())
        }
    }

    #[test]
    fn struct_rankers() -> Result<()> {
        let words = words(&["crane", "slate"])?;
        let corpus = rank_corpus(&words, &Length);
        assert!(corpus.iter().all(|e| e.weight == 5));
        assert_eq!(corpus.len(), 2);
        Ok(())
    }
}
