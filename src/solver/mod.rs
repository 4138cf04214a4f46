//! The greedy solving loop.
//!
//! A [`Solver`] plays one [`Puzzle`] at a time. Each round it filters the
//! whole corpus down to the words consistent with every guess so far and
//! guesses the heaviest of them. The result of playing a puzzle is a
//! [`Session`]: the guesses made and how the session ended.

use std::fmt::Display;

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    corpus::Corpus,
    oracle::{self, Feedback},
    weight::Weight,
    word::Word,
    PuzzleError, Result,
};

mod filter;
pub use filter::filter;

/// The default bound on the number of guesses in one session.
pub const DEFAULT_MAX_GUESSES: usize = 20;

/// A specific Wordle puzzle to solve.
///
/// The puzzle keeps its answer to itself: the only way to learn about it is
/// to [`check()`](Puzzle::check()) a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Puzzle {
    word: Word,
}

impl Puzzle {
    /// Creates a new puzzle from a [`Word`].
    pub fn new(word: Word) -> Self {
        Puzzle { word }
    }

    /// Grades a guess and records it in `history`.
    ///
    /// Returns the feedback and whether the guess was the answer. If
    /// `history` is already full, nothing is recorded and an error is
    /// returned instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordle_greedy::{solver::{History, Puzzle}, Word};
    /// #
    /// let puzzle = Puzzle::new(Word::from_str("earth")?);
    /// let mut history = History::with_limit(1);
    ///
    /// let (feedback, correct) = puzzle.check(&Word::from_str("ratio")?, &mut history)?;
    /// assert!(!correct);
    /// assert_eq!(feedback.to_string(), "acaii");
    ///
    /// assert!(puzzle.check(&Word::from_str("earth")?, &mut history).is_err());
    /// assert_eq!(history.inner().len(), 1);
    /// #
    /// # Ok::<_, wordle_greedy::WordleError>(())
    /// ```
    pub fn check(&self, guess: &Word, history: &mut History) -> Result<(Feedback, bool)> {
        let feedback = oracle::check(guess, &self.word);
        history.push(Guess::new(*guess, feedback))?;
        Ok((feedback, *guess == self.word))
    }

    pub(crate) fn answer(&self) -> Word {
        self.word
    }
}

/// A guessed word together with the feedback it received.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    pub fn new(word: Word, feedback: Feedback) -> Self {
        Guess { word, feedback }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Returns true if `candidate` could be the answer given this guess.
    ///
    /// That is the case exactly when grading this guess against `candidate`
    /// gives the feedback that was recorded.
    pub fn matches(&self, candidate: &Word) -> bool {
        oracle::check(&self.word, candidate) == self.feedback
    }
}

impl Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.word, self.feedback)
    }
}

/// The guesses made in one session, oldest first.
///
/// A history only grows, and refuses new guesses once it holds `limit` of
/// them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct History {
    inner: Vec<Guess>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        History::with_limit(DEFAULT_MAX_GUESSES)
    }
}

impl History {
    /// Creates an empty history allowing [`DEFAULT_MAX_GUESSES`] guesses.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        History {
            inner: Vec::new(),
            limit,
        }
    }

    pub(crate) fn push(&mut self, guess: Guess) -> Result<()> {
        if self.finished() {
            return Err(PuzzleError::OutOfGuesses.into());
        }
        self.inner.push(guess);
        Ok(())
    }

    /// Returns a slice into the underlying data.
    pub fn inner(&self) -> &[Guess] {
        self.inner.as_slice()
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.inner.iter().map(|g| &g.word)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns true once no more guesses are allowed.
    pub fn finished(&self) -> bool {
        self.inner.len() >= self.limit
    }

    /// Returns true if the last guess was `word`.
    pub fn solved(&self, word: &Word) -> bool {
        matches!(self.inner.last(), Some(g) if g.word == *word)
    }
}

impl Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some((last, rest)) = self.inner.split_last() {
            for guess in rest {
                writeln!(f, "{}", guess)?;
            }
            write!(f, "{}", last)?;
        }
        Ok(())
    }
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "snake_case")
)]
pub enum Outcome {
    /// The last guess was the answer.
    Solved,

    /// No word in the corpus was consistent with the feedback. This happens
    /// when the answer is not in the corpus.
    Exhausted,

    /// The session hit its guess limit before finding the answer.
    OutOfGuesses,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Solved => write!(f, "solved"),
            Outcome::Exhausted => write!(f, "exhausted"),
            Outcome::OutOfGuesses => write!(f, "out of guesses"),
        }
    }
}

/// The record of solving one puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Session {
    target: Word,
    history: History,
    outcome: Outcome,
}

impl Session {
    pub fn target(&self) -> &Word {
        &self.target
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn guesses(&self) -> &[Guess] {
        self.history.inner()
    }

    /// The guessed words, in order.
    pub fn words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.history.words()
    }

    pub fn num_guesses(&self) -> usize {
        self.history.inner().len()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }
}

/// The greedy solver.
///
/// The solver borrows a read-only [`Corpus`], so any number of sessions can
/// share one loaded corpus.
///
/// # Examples
///
/// ```rust
/// # use wordle_greedy::{solver::Puzzle, Corpus, Outcome, Solver, Word};
/// #
/// let corpus: Corpus<u32> = Corpus::from_reader("apple,10\nangle,5\n".as_bytes())?;
/// let solver = Solver::new(&corpus);
///
/// let session = solver.solve(&Puzzle::new(Word::from_str("angle")?));
/// assert_eq!(session.outcome(), Outcome::Solved);
/// let words: Vec<&str> = session.words().map(|w| w.as_str()).collect();
/// assert_eq!(words, ["apple", "angle"]);
/// #
/// # Ok::<_, wordle_greedy::WordleError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Solver<'c, W> {
    corpus: &'c Corpus<W>,
    max_guesses: usize,
}

impl<'c, W: Weight> Solver<'c, W> {
    /// Creates a solver allowing [`DEFAULT_MAX_GUESSES`] guesses per puzzle.
    pub fn new(corpus: &'c Corpus<W>) -> Self {
        Solver {
            corpus,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }

    /// Sets the number of guesses allowed per puzzle.
    pub fn max_guesses(self, max_guesses: usize) -> Self {
        Solver {
            max_guesses,
            ..self
        }
    }

    pub fn corpus(&self) -> &'c Corpus<W> {
        self.corpus
    }

    /// Plays `puzzle` until it is solved, the corpus runs out of consistent
    /// words, or the guess limit is reached.
    ///
    /// Every guess that is not the answer is inconsistent with its own
    /// feedback, so each round removes at least one word from the pool and
    /// the loop ends even without the guess limit.
    pub fn solve(&self, puzzle: &Puzzle) -> Session {
        let mut history = History::with_limit(self.max_guesses);

        let outcome = loop {
            if history.finished() {
                break Outcome::OutOfGuesses;
            }

            let candidates = filter(self.corpus.entries(), history.inner());
            let best = match candidates.first() {
                Some(best) => best.word,
                None => break Outcome::Exhausted,
            };

            match puzzle.check(&best, &mut history) {
                Ok((_, true)) => break Outcome::Solved,
                Ok((feedback, false)) => {
                    trace!(
                        "guessed {} ({}) from {} candidates",
                        best,
                        feedback,
                        candidates.len()
                    );
                }
                // the history is checked for room at the top of the loop
                Err(e) => {
                    debug_assert!(false, "guess rejected after the history check: {}", e);
                    break Outcome::OutOfGuesses;
                }
            }
        };

        debug!(
            "{} after {} guesses: {}",
            outcome,
            history.inner().len(),
            puzzle.answer()
        );

        Session {
            target: puzzle.answer(),
            history,
            outcome,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::WordleError;

    fn corpus(input: &str) -> Corpus<u64> {
        Corpus::from_reader(input.as_bytes()).unwrap()
    }

    fn solve(corpus: &Corpus<u64>, answer: &str) -> Result<Session> {
        Ok(Solver::new(corpus).solve(&Puzzle::new(Word::from_str(answer)?)))
    }

    fn words(session: &Session) -> Vec<&str> {
        session.words().map(|w| w.as_str()).collect()
    }

    macro_rules! session_test {
        ($fn_name:ident[$corpus:expr, $answer:expr => $outcome:ident [$( $guess:expr ),*]]) => {
            #[test]
            fn $fn_name() -> Result<()> {
                let corpus = corpus($corpus);
                let session = solve(&corpus, $answer)?;
                assert_eq!(session.outcome(), Outcome::$outcome);
                let expected: Vec<&str> = vec![$( $guess ),*];
                assert_eq!(words(&session), expected);
                assert_eq!(session.target().as_str(), $answer);
                Ok(())
            }
        };
    }

    session_test! { heaviest_word_first_try ["apple,10\nangle,5\n", "apple" => Solved ["apple"]] }

    session_test! { narrows_to_the_answer ["apple,10\nangle,5\n", "angle" => Solved ["apple", "angle"]] }

    session_test! { answer_missing_from_corpus ["apple,10\nangle,5\n", "crane" => Exhausted ["apple"]] }

    session_test! { empty_corpus ["", "crane" => Exhausted []] }

    #[test]
    fn first_guess_feedback_is_recorded() -> Result<()> {
        let corpus = corpus("apple,10\nangle,5\n");
        let session = solve(&corpus, "angle")?;
        let first = session.guesses()[0];
        assert_eq!(first.word().as_str(), "apple");
        assert_eq!(first.feedback().to_string(), "ciicc");
        assert!(session.guesses()[1].feedback().is_solved());
        assert!(session.history().solved(session.target()));
        Ok(())
    }

    #[test]
    fn ties_go_to_the_earlier_word() -> Result<()> {
        let corpus = corpus("crate,4\ntrace,4\nreact,4\n");
        let session = solve(&corpus, "react")?;
        assert_eq!(words(&session)[0], "crate");
        assert!(session.is_solved());
        Ok(())
    }

    #[test]
    fn guess_limit_stops_the_session() -> Result<()> {
        let corpus = corpus("bakes,9\ncakes,8\nfakes,7\nmakes,6\ntakes,5\nwakes,4\n");
        let session = Solver::new(&corpus)
            .max_guesses(3)
            .solve(&Puzzle::new(Word::from_str("wakes")?));
        assert_eq!(session.outcome(), Outcome::OutOfGuesses);
        assert_eq!(words(&session), ["bakes", "cakes", "fakes"]);
        assert!(!session.is_solved());
        Ok(())
    }

    #[test]
    fn zero_guess_limit() -> Result<()> {
        let corpus = corpus("crane,1\n");
        let session = Solver::new(&corpus)
            .max_guesses(0)
            .solve(&Puzzle::new(Word::from_str("crane")?));
        assert_eq!(session.outcome(), Outcome::OutOfGuesses);
        assert_eq!(session.num_guesses(), 0);
        Ok(())
    }

    #[test]
    fn full_history_rejects_guesses() -> Result<()> {
        let puzzle = Puzzle::new(Word::from_str("crane")?);
        let mut history = History::with_limit(2);
        let slate = Word::from_str("slate")?;
        puzzle.check(&slate, &mut history)?;
        puzzle.check(&slate, &mut history)?;
        assert!(history.finished());
        assert!(matches!(
            puzzle.check(&slate, &mut history),
            Err(WordleError::Puzzle {
                kind: PuzzleError::OutOfGuesses
            })
        ));
        assert_eq!(history.inner().len(), 2);
        Ok(())
    }

    #[test]
    fn history_push_fails_only_when_full() -> Result<()> {
        let slate = Word::from_str("slate")?;
        let guess = Guess::new(slate, oracle::check(&slate, &Word::from_str("crane")?));
        let mut history = History::with_limit(1);
        assert!(history.push(guess).is_ok());
        assert!(matches!(
            history.push(guess),
            Err(WordleError::Puzzle {
                kind: PuzzleError::OutOfGuesses
            })
        ));
        assert_eq!(history.inner(), [guess]);
        Ok(())
    }

    #[test]
    fn every_limit_ends_cleanly() -> Result<()> {
        let corpus = corpus("bakes,9\ncakes,8\nfakes,7\nmakes,6\ntakes,5\nwakes,4\n");
        let wakes = Word::from_str("wakes")?;
        for limit in 0..8 {
            let session = Solver::new(&corpus)
                .max_guesses(limit)
                .solve(&Puzzle::new(wakes));
            assert!(session.num_guesses() <= limit);
            let expected = if limit >= 6 {
                Outcome::Solved
            } else {
                Outcome::OutOfGuesses
            };
            assert_eq!(session.outcome(), expected);
        }
        Ok(())
    }

    #[test]
    fn every_corpus_word_is_solved() -> Result<()> {
        let corpus = corpus(
            "crane,9\nslate,8\ntrace,7\ncrate,6\nraise,5\narise,4\nstare,3\nroast,2\ntoast,1\nbeast,1\nspeed,1\nsheep,1\n",
        );
        for entry in corpus.iter() {
            let session = Solver::new(&corpus).solve(&Puzzle::new(entry.word));
            assert!(session.is_solved(), "{} was not solved", entry.word);
            assert_eq!(session.words().last(), Some(&entry.word));
            assert!(session.num_guesses() <= corpus.len());
        }
        Ok(())
    }
}
