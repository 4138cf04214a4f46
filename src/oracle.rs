//! Grading guesses against a secret word.
//!
//! The oracle is the only source of feedback in the crate. The solver uses it
//! both to grade its guesses and to decide which candidates are still
//! possible, so the two always agree on how repeated letters are handled.

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    word::{Word, WORD_LEN},
    PuzzleError, Result,
};

/// A Wordle "grade" that indicates the correctness of a letter in a guess.
///
/// `Correct` means that the letter is in the correct position. `Almost` means
/// that the letter is in the word, but not in that position. `Incorrect`
/// means that the letter is absent, or that the guess holds more copies of it
/// than the secret does (see [`grade_at()`]).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Grade {
    /// A grade that indicates the letter guessed is in the correct position.
    Correct,

    /// A grade that indicates the letter guessed is in the word, but not there.
    Almost,

    /// A grade that indicates the letter guessed is not in the word.
    Incorrect,
}

impl Grade {
    /// The score of this grade: two for correct, one for almost, zero otherwise.
    pub fn value(self) -> u32 {
        match self {
            Grade::Correct => 2,
            Grade::Almost => 1,
            Grade::Incorrect => 0,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Grade::Correct => 'c',
            Grade::Almost => 'a',
            Grade::Incorrect => 'i',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' => Some(Grade::Correct),
            'a' => Some(Grade::Almost),
            'i' => Some(Grade::Incorrect),
            _ => None,
        }
    }
}

/// The five grades produced by checking one guess, in guess order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Feedback {
    grades: [Grade; WORD_LEN],
}

impl Feedback {
    pub const SOLVED: Feedback = Feedback {
        grades: [Grade::Correct; WORD_LEN],
    };

    pub fn new(grades: [Grade; WORD_LEN]) -> Self {
        Feedback { grades }
    }

    /// Parses the compact form produced by [`Display`], e.g. `"ciica"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut grades = [Grade::Incorrect; WORD_LEN];
        let mut chars = s.chars();
        for grade in grades.iter_mut() {
            *grade = Grade::from_char(chars.next()?)?;
        }
        match chars.next() {
            Some(_) => None,
            None => Some(Feedback { grades }),
        }
    }

    pub fn grades(&self) -> &[Grade; WORD_LEN] {
        &self.grades
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Sum of the grade values, between 0 and 10.
    pub fn value(&self) -> u32 {
        self.grades.iter().map(|g| g.value()).sum()
    }
}

impl Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for grade in self.grades.iter() {
            write!(f, "{}", grade.to_char())?;
        }
        Ok(())
    }
}

/// Grades the letter of `guess` at `position` against `secret`.
///
/// The letter is [`Grade::Correct`] if `secret` holds the same letter at the
/// same position. Otherwise it is [`Grade::Almost`] if `secret` contains the
/// letter at all and `guess` holds no more copies of it than `secret` does,
/// and [`Grade::Incorrect`] in every other case.
///
/// Positions are graded independently. Unlike the game itself, no shared
/// budget of letters is consumed, so when a guess repeats a letter more often
/// than the secret every misplaced copy is graded incorrect. Guessing `eerie`
/// against `speed` grades all five letters incorrect, where Wordle would mark
/// the first two `e`s as present.
///
/// Returns an error if `position` is not in `0..5`.
///
/// # Examples
///
/// ```rust
/// # use wordle_greedy::{oracle::grade_at, Grade, Word};
/// #
/// let guess = Word::from_str("sheep")?;
/// let secret = Word::from_str("speed")?;
///
/// assert_eq!(grade_at(&guess, &secret, 0)?, Grade::Correct);
/// assert_eq!(grade_at(&guess, &secret, 1)?, Grade::Incorrect);
/// assert_eq!(grade_at(&guess, &secret, 4)?, Grade::Almost);
/// assert!(grade_at(&guess, &secret, 5).is_err());
/// #
/// # Ok::<_, wordle_greedy::WordleError>(())
/// ```
pub fn grade_at(guess: &Word, secret: &Word, position: usize) -> Result<Grade> {
    if position >= WORD_LEN {
        return Err(PuzzleError::IndexOutOfRange(position).into());
    }

    Ok(grade_unchecked(guess, secret, position))
}

fn grade_unchecked(guess: &Word, secret: &Word, position: usize) -> Grade {
    let letter = guess.letters()[position];
    if secret.letters()[position] == letter {
        return Grade::Correct;
    }

    let in_secret = secret.count(letter);
    if in_secret > 0 && guess.count(letter) <= in_secret {
        Grade::Almost
    } else {
        Grade::Incorrect
    }
}

/// Grades every letter of `guess` against `secret`.
///
/// This is [`grade_at()`] applied to each position in order.
pub fn check(guess: &Word, secret: &Word) -> Feedback {
    let mut grades = [Grade::Incorrect; WORD_LEN];
    for (position, grade) in grades.iter_mut().enumerate() {
        *grade = grade_unchecked(guess, secret, position);
    }

    Feedback::new(grades)
}
