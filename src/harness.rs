//! The harness for solving many puzzles with one corpus.

use std::fmt::Debug;

#[cfg(feature = "fancy")]
use indicatif::ProgressBar;
use log::info;
use rand::seq::index::sample;

use crate::{
    corpus::Corpus,
    perf::Record,
    solver::{Puzzle, Session, Solver, DEFAULT_MAX_GUESSES},
    weight::Weight,
    word::Word,
};

/// Running totals over the sessions finished so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tally {
    pub sessions: usize,
    pub solved: usize,
    pub guesses: usize,
}

impl Tally {
    fn add(&mut self, session: &Session) {
        self.sessions += 1;
        self.guesses += session.num_guesses();
        if session.is_solved() {
            self.solved += 1;
        }
    }

    /// The mean number of guesses over every finished session.
    pub fn mean_guesses(&self) -> f64 {
        if self.sessions == 0 {
            0.
        } else {
            self.guesses as f64 / self.sessions as f64
        }
    }
}

/// Something that wants to hear about each finished session.
///
/// Observers are called by the [`Harness`] after every session, in target
/// order, with the totals that include that session. Closures taking
/// `(&Session, &Tally)` are observers too.
pub trait Observer {
    fn session_finished(&mut self, session: &Session, tally: &Tally);
}

impl<F> Observer for F
where
    F: FnMut(&Session, &Tally),
{
    fn session_finished(&mut self, session: &Session, tally: &Tally) {
        self(session, tally)
    }
}

/// An observer that logs the running mean number of guesses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProgressLog {
    every: usize,
}

impl Default for ProgressLog {
    fn default() -> Self {
        ProgressLog { every: 100 }
    }
}

impl ProgressLog {
    /// Logs after every `every` sessions. Zero is treated as one.
    pub fn every(every: usize) -> Self {
        ProgressLog {
            every: every.max(1),
        }
    }
}

impl Observer for ProgressLog {
    fn session_finished(&mut self, _session: &Session, tally: &Tally) {
        if tally.sessions % self.every == 0 {
            info!(
                "{} sessions, {} solved, {:.4} guesses on average",
                tally.sessions,
                tally.solved,
                tally.mean_guesses()
            );
        }
    }
}

/// A harness that solves a list of target words with one corpus.
///
/// Create a harness with [`new()`](Harness::new()) and configure it with the
/// builder methods, which consume the existing [`Harness`] and return a new
/// one. Targets are solved one at a time, in order, and one target that
/// cannot be solved never stops the run.
///
/// # Examples
///
/// ```rust
/// # use wordle_greedy::{harness::{ProgressLog, Tally}, Corpus, Harness, Session, Word};
/// #
/// let corpus: Corpus<u64> = Corpus::from_reader("apple,10\nangle,5\n".as_bytes())?;
/// let targets = [Word::from_str("angle")?, Word::from_str("crane")?];
///
/// let mut seen = 0;
/// let record = Harness::new(&corpus)
///     .quiet()
///     .max_guesses(6)
///     .observe(ProgressLog::every(1))
///     .observe(|_: &Session, _: &Tally| seen += 1)
///     .run(&targets);
///
/// assert_eq!(seen, 2);
/// assert!(record[0].is_solved());
/// assert!(!record[1].is_solved());
/// #
/// # Ok::<_, wordle_greedy::WordleError>(())
/// ```
pub struct Harness<'c, 'o, W> {
    corpus: &'c Corpus<W>,
    verbose: bool,
    max_guesses: usize,
    num_targets: Option<usize>,
    observers: Vec<Box<dyn Observer + 'o>>,
}

impl<'c, 'o, W: Weight> Harness<'c, 'o, W> {
    /// Creates a new harness with default configuration.
    ///
    /// Defaults:
    /// 1. quiet mode
    /// 2. [`DEFAULT_MAX_GUESSES`] guesses per target
    /// 3. solves every target it is given
    /// 4. no observers
    pub fn new(corpus: &'c Corpus<W>) -> Self {
        Harness {
            corpus,
            verbose: false,
            max_guesses: DEFAULT_MAX_GUESSES,
            num_targets: None,
            observers: Vec::new(),
        }
    }

    /// Makes the harness show a progress bar while solving.
    pub fn verbose(self) -> Self {
        Harness {
            verbose: true,
            ..self
        }
    }

    /// Makes the harness silent while solving.
    pub fn quiet(self) -> Self {
        Harness {
            verbose: false,
            ..self
        }
    }

    /// Sets the number of guesses allowed per target.
    pub fn max_guesses(self, max_guesses: usize) -> Self {
        Harness {
            max_guesses,
            ..self
        }
    }

    /// Sets the harness to solve every target it is given.
    pub fn test_all(self) -> Self {
        Harness {
            num_targets: None,
            ..self
        }
    }

    /// Sets the harness to solve `n` targets chosen at random.
    ///
    /// The chosen targets are still solved in their original order.
    pub fn test_num(self, n: usize) -> Self {
        Harness {
            num_targets: Some(n),
            ..self
        }
    }

    /// Adds an observer to call after every session.
    pub fn observe(self, observer: impl Observer + 'o) -> Self {
        let mut observers = self.observers;
        observers.push(Box::new(observer));
        Harness { observers, ..self }
    }

    fn select<'t>(&self, targets: &'t [Word]) -> Vec<&'t Word> {
        match self.num_targets {
            Some(n) if n < targets.len() => {
                let mut rng = rand::thread_rng();
                let mut chosen = sample(&mut rng, targets.len(), n).into_vec();
                chosen.sort_unstable();
                chosen.into_iter().map(|i| &targets[i]).collect()
            }
            _ => targets.iter().collect(),
        }
    }

    /// Solves the targets and returns every session, in target order.
    pub fn run(&mut self, targets: &[Word]) -> Record {
        let targets = self.select(targets);
        let solver = Solver::new(self.corpus).max_guesses(self.max_guesses);

        #[cfg(feature = "fancy")]
        let bar = if self.verbose {
            ProgressBar::new(targets.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        #[cfg(not(feature = "fancy"))]
        let _ = self.verbose;

        let mut tally = Tally::default();
        let mut sessions = Vec::with_capacity(targets.len());
        for target in targets {
            let session = solver.solve(&Puzzle::new(*target));
            tally.add(&session);
            for observer in self.observers.iter_mut() {
                observer.session_finished(&session, &tally);
            }
            sessions.push(session);

            #[cfg(feature = "fancy")]
            bar.inc(1);
        }

        #[cfg(feature = "fancy")]
        bar.finish_and_clear();

        Record::new(sessions)
    }

    /// Runs the harness (see [`run()`](Harness::run())) and prints a summary
    /// of the record.
    pub fn run_and_summarize(&mut self, targets: &[Word]) -> Record {
        let record = self.run(targets);
        println!("{}", record.summary());
        record
    }
}

impl<W: Weight> Debug for Harness<'_, '_, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("corpus_len", &self.corpus.len())
            .field("verbose", &self.verbose)
            .field("max_guesses", &self.max_guesses)
            .field("num_targets", &self.num_targets)
            .field("observers", &self.observers.len())
            .finish()
    }
}
