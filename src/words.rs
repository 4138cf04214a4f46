//! Reading plain word lists.

use std::{
    fs::File,
    io::{self, BufRead},
    path::Path,
};

use log::debug;

use crate::{
    word::{Word, WORD_LEN},
    Result,
};

/// Reads whitespace-separated words, keeping only valid five letter words.
///
/// Tokens of any other length, or containing anything but ASCII letters, are
/// skipped. Words are lowercased and kept in input order, duplicates included.
///
/// # Examples
///
/// ```rust
/// # use wordle_greedy::words::read_word_list;
/// #
/// let words = read_word_list("crane slate\ntoo long-ish\nPIOUS\n\n".as_bytes())?;
/// let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
/// assert_eq!(words, ["crane", "slate", "pious"]);
/// #
/// # Ok::<_, wordle_greedy::WordleError>(())
/// ```
pub fn read_word_list<R: BufRead>(reader: R) -> Result<Vec<Word>> {
    let mut words = Vec::new();
    let mut skipped = 0_usize;

    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            match Word::from_str(token) {
                Ok(word) => words.push(word),
                Err(_) => {
                    if token.chars().count() == WORD_LEN {
                        debug!("skipping non-alphabetic token {:?}", token);
                    }
                    skipped += 1;
                }
            }
        }
    }

    debug!("read {} words, skipped {} tokens", words.len(), skipped);
    Ok(words)
}

/// Reads a word list file. See [`read_word_list()`].
pub fn read_word_list_path(path: impl AsRef<Path>) -> Result<Vec<Word>> {
    let file = File::open(path.as_ref())?;
    debug!("reading word list from {}", path.as_ref().display());
    read_word_list(io::BufReader::new(file))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::WordleError;

    #[test]
    fn keeps_order_and_duplicates() -> Result<()> {
        let words = read_word_list("slate crane\r\nslate\n".as_bytes())?;
        let words: Vec<_> = words.iter().map(|w| w.as_str()).collect();
        assert_eq!(words, ["slate", "crane", "slate"]);
        Ok(())
    }

    #[test]
    fn skips_bad_tokens() -> Result<()> {
        let words = read_word_list("abc\tabcdef\ncr4ne\n\nvalid\n".as_bytes())?;
        assert_eq!(words, [Word::from_str("valid")?]);
        Ok(())
    }

    #[test]
    fn empty_input() -> Result<()> {
        assert!(read_word_list("".as_bytes())?.is_empty());
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            read_word_list_path("/definitely/not/a/wordlist.txt"),
            Err(WordleError::Io(_))
        ));
    }
}
