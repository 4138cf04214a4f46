//! Rankers for use with `wordle_greedy`.

mod oracle;
pub use oracle::OracleScore;

mod letters;
pub use letters::LetterFrequency;
