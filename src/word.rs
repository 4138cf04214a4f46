//! Five letter words.

use std::{fmt::Display, ops::Deref, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PuzzleError, Result, WordleError};

/// The number of letters in every Wordle word.
pub const WORD_LEN: usize = 5;

/// A Wordle word.
///
/// Every instance holds exactly five lowercase ASCII letters. Input is
/// case-normalized on construction, and anything else is rejected, so the
/// [oracle](crate::oracle) never has to deal with words of the wrong length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", try_from = "String", into = "String")
)]
pub struct Word {
    letters: [u8; WORD_LEN],
}

impl Word {
    /// Creates a new [`Word`] from a five letter string.
    ///
    /// Returns an error if the string is not exactly five ASCII letters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::ops::Deref;
    /// # use wordle_greedy::Word;
    /// #
    /// let pints = Word::from_str("PInts")?;
    /// assert_eq!(pints.deref(), "pints");
    ///
    /// assert!(Word::from_str("pint").is_err());
    /// assert!(Word::from_str("p1nts").is_err());
    /// #
    /// # Ok::<_, wordle_greedy::WordleError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(word: &str) -> Result<Self> {
        let invalid = || WordleError::from(PuzzleError::InvalidWord(word.to_string()));

        let bytes = word.as_bytes();
        if bytes.len() != WORD_LEN || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(invalid());
        }

        let mut letters = [0_u8; WORD_LEN];
        for (letter, byte) in letters.iter_mut().zip(bytes) {
            *letter = byte.to_ascii_lowercase();
        }

        Ok(Word { letters })
    }

    /// The letters of the word, as lowercase ASCII bytes.
    pub fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Counts the occurrences of `letter` in the word.
    pub fn count(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// Returns true if some letter appears more than once.
    pub fn has_repeated_letter(&self) -> bool {
        self.letters
            .iter()
            .enumerate()
            .any(|(i, l)| self.letters[i + 1..].contains(l))
    }

    /// Returns true if the two words have no letter in common.
    pub fn is_disjoint(&self, other: &Word) -> bool {
        !self.letters.iter().any(|l| other.letters.contains(l))
    }

    pub fn as_str(&self) -> &str {
        // only ASCII letters are ever stored
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self> {
        Word::from_str(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordleError;

    fn try_from(value: String) -> Result<Self> {
        Word::from_str(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.as_str().to_string()
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalizes_case() -> Result<()> {
        assert_eq!(Word::from_str("CrAnE")?, Word::from_str("crane")?);
        assert_eq!(Word::from_str("CRANE")?.to_string(), "crane");
        Ok(())
    }

    #[test]
    fn rejects_bad_words() {
        for bad in ["", "four", "sixsix", "cr4ne", "cr ne", "crâne"] {
            match Word::from_str(bad) {
                Err(WordleError::Puzzle {
                    kind: PuzzleError::InvalidWord(s),
                }) => assert_eq!(s, bad),
                other => panic!("{:?} should be invalid, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn counts_letters() -> Result<()> {
        let speed = Word::from_str("speed")?;
        assert_eq!(speed.count(b'e'), 2);
        assert_eq!(speed.count(b's'), 1);
        assert_eq!(speed.count(b'z'), 0);
        assert!(speed.has_repeated_letter());
        assert!(!Word::from_str("crane")?.has_repeated_letter());
        Ok(())
    }

    #[test]
    fn disjoint_words() -> Result<()> {
        assert!(Word::from_str("crane")?.is_disjoint(&Word::from_str("pious")?));
        assert!(!Word::from_str("crane")?.is_disjoint(&Word::from_str("slate")?));
        Ok(())
    }
}
