//! The weighted word corpus that the solver picks guesses from.

use std::{cmp::Ordering, fs::File, io, path::Path};

use log::debug;

use crate::{weight::Weight, word::Word, CorpusError, Result};

/// A corpus word and its weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedWord<W> {
    pub word: Word,
    pub weight: W,
}

impl<W: Weight> WeightedWord<W> {
    pub fn new(word: Word, weight: W) -> Self {
        WeightedWord { word, weight }
    }

    fn from_record(record: &csv::StringRecord) -> std::result::Result<Self, String> {
        if record.len() != 2 {
            return Err(match record.len() {
                1 => "missing the weight field".to_string(),
                n => format!("expected `word,weight` but found {} fields", n),
            });
        }

        let word = Word::from_str(&record[0]).map_err(|_| {
            format!("\"{}\" is not a five letter word", &record[0])
        })?;
        let weight = W::parse_weight(&record[1])?;
        if !weight.is_valid() {
            return Err(format!("the weight {} is negative or not a number", weight));
        }

        Ok(WeightedWord { word, weight })
    }
}

/// Orders entries from heaviest to lightest.
///
/// Used with a stable sort, so entries of equal weight keep their relative
/// order.
pub(crate) fn by_weight<W: Weight>(a: &WeightedWord<W>, b: &WeightedWord<W>) -> Ordering {
    b.weight.total_cmp(&a.weight)
}

/// A read-only list of weighted words, heaviest first.
///
/// Entries with the same weight stay in the order they were supplied (for a
/// loaded corpus, file order). This is the tie-break the solver relies on to
/// be deterministic.
///
/// # Examples
///
/// ```rust
/// # use wordle_greedy::Corpus;
/// #
/// let corpus: Corpus<u64> = Corpus::from_reader("angle,5\napple,10\nample,5\n".as_bytes())?;
/// let words: Vec<String> = corpus.iter().map(|e| e.word.to_string()).collect();
/// assert_eq!(words, ["apple", "angle", "ample"]);
///
/// assert!(Corpus::<u64>::from_reader("apple\n".as_bytes()).is_err());
/// #
/// # Ok::<_, wordle_greedy::WordleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Corpus<W> {
    entries: Vec<WeightedWord<W>>,
}

impl<W: Weight> Corpus<W> {
    /// Creates a corpus from entries in any order.
    pub fn new(mut entries: Vec<WeightedWord<W>>) -> Self {
        entries.sort_by(by_weight);
        Corpus { entries }
    }

    /// Reads `word,weight` lines.
    ///
    /// Blank lines are ignored and whitespace around each field is trimmed.
    /// Any other line that is not a five letter word followed by a
    /// non-negative weight fails the whole load with
    /// [`CorpusError::MalformedInput`].
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(CorpusError::from)?;
            if record.iter().all(str::is_empty) {
                continue;
            }

            let line = record.position().map_or(0, |p| p.line());
            let entry = WeightedWord::<W>::from_record(&record)
                .map_err(|reason| CorpusError::MalformedInput { line, reason })?;
            entries.push(entry);
        }

        debug!("loaded {} weighted words", entries.len());
        Ok(Self::new(entries))
    }

    /// Reads a corpus file. See [`from_reader()`](Self::from_reader()).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        debug!("reading corpus from {}", path.as_ref().display());
        Self::from_reader(io::BufReader::new(file))
    }

    /// Writes the corpus as `word,weight` lines, heaviest first.
    pub fn write_csv<Wr: io::Write>(&self, writer: Wr) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);
        for entry in self.entries.iter() {
            let weight = entry.weight.to_string();
            wtr.write_record([entry.word.as_str(), weight.as_str()])
                .map_err(CorpusError::from)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn entries(&self) -> &[WeightedWord<W>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeightedWord<W>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `word` is in the corpus.
    pub fn contains(&self, word: &Word) -> bool {
        self.entries.iter().any(|e| e.word == *word)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::WordleError;

    fn words<W: Weight>(corpus: &Corpus<W>) -> Vec<String> {
        corpus.iter().map(|e| e.word.to_string()).collect()
    }

    fn malformed_line<W: Weight>(input: &str) -> u64 {
        match Corpus::<W>::from_reader(input.as_bytes()) {
            Err(WordleError::Corpus {
                kind: CorpusError::MalformedInput { line, .. },
            }) => line,
            other => panic!("{:?} should be malformed, got {:?}", input, other),
        }
    }

    #[test]
    fn sorts_heaviest_first() -> Result<()> {
        let corpus: Corpus<u64> = Corpus::from_reader("crane,3\nslate,9\npious,5\n".as_bytes())?;
        assert_eq!(words(&corpus), ["slate", "pious", "crane"]);
        Ok(())
    }

    #[test]
    fn ties_keep_file_order() -> Result<()> {
        let corpus: Corpus<f64> =
            Corpus::from_reader("trace,1.5\ncrate,2\nreact,1.5\ncater,1.5\n".as_bytes())?;
        assert_eq!(words(&corpus), ["crate", "trace", "react", "cater"]);
        Ok(())
    }

    #[test]
    fn ignores_blank_lines_and_whitespace() -> Result<()> {
        let corpus: Corpus<u32> =
            Corpus::from_reader("\n  Apple , 10 \n\n   \nangle,5\n".as_bytes())?;
        assert_eq!(words(&corpus), ["apple", "angle"]);
        assert_eq!(corpus.entries()[0].weight, 10);
        Ok(())
    }

    #[test]
    fn malformed_lines_fail_the_load() {
        assert_eq!(malformed_line::<u64>("apple,10\nangle\n"), 2);
        assert_eq!(malformed_line::<u64>("apple,10\nangle,lots\n"), 2);
        assert_eq!(malformed_line::<u64>("apple,ten\n"), 1);
        assert_eq!(malformed_line::<u64>("apple,10,3\n"), 1);
        assert_eq!(malformed_line::<u64>("apples,10\n"), 1);
        assert_eq!(malformed_line::<u64>("apple,-1\n"), 1);
        assert_eq!(malformed_line::<f64>("apple,-0.5\n"), 1);
        assert_eq!(malformed_line::<f64>("apple,NaN\n"), 1);
    }

    #[test]
    fn integer_corpus_rejects_real_weights() {
        assert_eq!(malformed_line::<u64>("apple,0.5\n"), 1);
    }

    #[test]
    fn written_corpus_reads_back() -> Result<()> {
        let corpus: Corpus<f64> = Corpus::from_reader("apple,0.25\nangle,0.75\n".as_bytes())?;

        let mut out = Vec::new();
        corpus.write_csv(&mut out)?;
        assert_eq!(String::from_utf8(out.clone()).unwrap(), "angle,0.75\napple,0.25\n");

        assert_eq!(Corpus::from_reader(out.as_slice())?, corpus);
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Corpus::<u64>::from_path("/definitely/not/a/corpus.csv"),
            Err(WordleError::Io(_))
        ));
    }
}
