#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod word;
pub use word::Word;

pub mod oracle;
pub use oracle::{Feedback, Grade};

pub mod weight;
pub use weight::Weight;

pub mod corpus;
pub use corpus::{Corpus, WeightedWord};

pub mod words;

pub mod solver;
pub use solver::{Outcome, Session, Solver};

pub mod rank;
pub use rank::Ranker;

pub mod harness;
pub use harness::Harness;

pub mod perf;
pub use perf::{Record, Summary};

/// The result type used throughout `wordle_greedy`.
pub type Result<T> = std::result::Result<T, WordleError>;

/// The errors that `wordle_greedy` can produce.
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("puzzle encountered error")]
    Puzzle {
        #[from]
        kind: PuzzleError,
    },

    #[error("could not load the weighted corpus")]
    Corpus {
        #[from]
        kind: CorpusError,
    },

    #[error("general IO error")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("trouble serializing the run record")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    /// The string provided when constructing a [`Word`] is not five ASCII
    /// letters.
    #[error("\"{0}\" is not a five letter word")]
    InvalidWord(String),

    /// A letter position outside of a five letter word was graded.
    #[error("position {0} is outside of a five letter word")]
    IndexOutOfRange(usize),

    /// The session has already used every guess it is allowed.
    #[error("the session has already used all of its guesses")]
    OutOfGuesses,
}

#[derive(Debug, Error)]
pub enum CorpusError {
    /// A `word,weight` line could not be parsed. The whole load fails.
    #[error("malformed corpus line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    #[error("could not read or write corpus records")]
    Csv(#[from] csv::Error),
}
