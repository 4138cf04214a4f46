//! Records and summaries of harness runs.

use std::{fmt::Display, io::Write, ops::Deref};

#[cfg(feature = "fancy")]
use comfy_table::{Cell, Color, ColumnConstraint, Row, Table, Width};
use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    solver::{Outcome, Session},
    Result,
};

/// The marker appended to the trace of a session that was not solved.
pub const UNSOLVED_MARKER: &str = "UNSOLVED";

/// Every session of one [harness](crate::Harness) run, in target order.
///
/// `Record` dereferences to a slice of [`Session`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct Record {
    sessions: Vec<Session>,
}

impl Record {
    pub fn new(sessions: Vec<Session>) -> Self {
        Record { sessions }
    }

    /// Consumes the record, returning its sessions.
    pub fn into_inner(self) -> Vec<Session> {
        self.sessions
    }

    /// Computes a summary of the record.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for session in &self.sessions {
            summary.num_tried += 1;
            summary.cumulative_guesses += session.num_guesses();
            match session.outcome() {
                Outcome::Solved => {
                    summary.num_solved += 1;
                    summary.histogram.add(session.num_guesses());
                }
                Outcome::Exhausted => summary.num_exhausted += 1,
                Outcome::OutOfGuesses => summary.num_out_of_guesses += 1,
            }
        }
        summary
    }

    /// Writes the guesses of every session, one session per line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordle_greedy::{perf::TraceFormat, Corpus, Harness, Word};
    /// #
    /// let corpus: Corpus<u64> = Corpus::from_reader("apple,10\nangle,5\n".as_bytes())?;
    /// let targets = [Word::from_str("angle")?, Word::from_str("crane")?];
    /// let record = Harness::new(&corpus).run(&targets);
    ///
    /// let mut out = Vec::new();
    /// record.write_traces(&mut out, &TraceFormat::default())?;
    /// assert_eq!(String::from_utf8(out).unwrap(), "apple,angle\napple,UNSOLVED");
    /// #
    /// # Ok::<_, wordle_greedy::WordleError>(())
    /// ```
    pub fn write_traces<T: Write>(&self, mut writer: T, format: &TraceFormat) -> Result<()> {
        for (i, session) in self.sessions.iter().enumerate() {
            if i > 0 {
                writer.write_all(format.session_delimiter.as_bytes())?;
            }
            writer.write_all(format.trace(session).as_bytes())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes the whole record as JSON.
    #[cfg(feature = "serde")]
    pub fn to_json<T: Write>(&self, writer: T) -> Result<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Builds a table with one cell per session. Unsolved sessions are
    /// highlighted.
    #[cfg(feature = "fancy")]
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        if !table.is_tty() {
            table.set_table_width(80);
        } else {
            table.load_preset(comfy_table::presets::UTF8_FULL);
        }

        let columns = (table.get_table_width().unwrap_or(80) / 9).max(1) as usize;
        for chunk in self.sessions.chunks(columns) {
            let mut row = Row::new();
            for session in chunk {
                let mut cell = Cell::new(format!(
                    "{}\n-----\n{}",
                    session.target(),
                    session.words().join("\n")
                ));
                if !session.is_solved() {
                    cell = cell.bg(Color::Red).fg(Color::Black);
                }
                row.add_cell(cell);
            }
            table.add_row(row);
        }
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5));
            columns
        ]);
        table
    }

    /// Prints the summary followed by the session table.
    #[cfg(feature = "fancy")]
    pub fn print(&self) {
        print!("{}", self.summary());
        println!("{}", self.to_table());
    }
}

impl Deref for Record {
    type Target = [Session];

    fn deref(&self) -> &Self::Target {
        &self.sessions
    }
}

impl From<Vec<Session>> for Record {
    fn from(sessions: Vec<Session>) -> Self {
        Record::new(sessions)
    }
}

impl FromIterator<Session> for Record {
    fn from_iter<I: IntoIterator<Item = Session>>(iter: I) -> Self {
        Record::new(iter.into_iter().collect())
    }
}

/// How [`Record::write_traces()`] lays out its output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TraceFormat {
    session_delimiter: String,
    unsolved_marker: Option<String>,
}

impl Default for TraceFormat {
    fn default() -> Self {
        TraceFormat {
            session_delimiter: "\n".to_string(),
            unsolved_marker: Some(UNSOLVED_MARKER.to_string()),
        }
    }
}

impl TraceFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text written between sessions.
    pub fn session_delimiter(self, delimiter: impl Into<String>) -> Self {
        TraceFormat {
            session_delimiter: delimiter.into(),
            ..self
        }
    }

    /// Sets the marker appended to unsolved sessions.
    pub fn unsolved_marker(self, marker: impl Into<String>) -> Self {
        TraceFormat {
            unsolved_marker: Some(marker.into()),
            ..self
        }
    }

    /// Writes unsolved sessions without a marker.
    pub fn no_unsolved_marker(self) -> Self {
        TraceFormat {
            unsolved_marker: None,
            ..self
        }
    }

    fn trace(&self, session: &Session) -> String {
        let mut words = session.words().map(|w| w.as_str());
        match &self.unsolved_marker {
            Some(marker) if !session.is_solved() => {
                words.chain(std::iter::once(marker.as_str())).join(",")
            }
            _ => words.join(","),
        }
    }
}

/// A summary of a [`Record`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Summary {
    num_tried: u32,
    num_solved: u32,
    num_exhausted: u32,
    num_out_of_guesses: u32,
    cumulative_guesses: usize,
    histogram: Histogram,
}

impl Summary {
    /// Gets the number of sessions run.
    pub fn num_tried(&self) -> u32 {
        self.num_tried
    }

    /// Gets the number of sessions that found their target.
    pub fn num_solved(&self) -> u32 {
        self.num_solved
    }

    /// Gets the number of sessions that ran out of candidate words.
    pub fn num_exhausted(&self) -> u32 {
        self.num_exhausted
    }

    /// Gets the number of sessions stopped by the guess limit.
    pub fn num_out_of_guesses(&self) -> u32 {
        self.num_out_of_guesses
    }

    /// Gets the number of sessions that did not find their target.
    pub fn num_missed(&self) -> u32 {
        self.num_tried - self.num_solved
    }

    /// Gets the fraction of sessions solved, or zero for an empty record.
    pub fn frac_solved(&self) -> f32 {
        if self.num_tried == 0 {
            0.
        } else {
            self.num_solved as f32 / self.num_tried as f32
        }
    }

    /// Gets the number of guesses across all sessions.
    pub fn cumulative_guesses(&self) -> usize {
        self.cumulative_guesses
    }

    /// Gets the number of guesses across solved sessions.
    pub fn cumulative_guesses_solved(&self) -> usize {
        self.histogram
            .iter()
            .enumerate()
            .map(|(i, &v)| (i + 1) * v as usize)
            .sum()
    }

    /// Gets the mean number of guesses taken by solved sessions.
    ///
    /// Unsolved sessions are not counted. Returns zero when nothing was
    /// solved.
    pub fn mean_guesses(&self) -> f32 {
        if self.num_solved == 0 {
            0.
        } else {
            self.cumulative_guesses_solved() as f32 / self.num_solved as f32
        }
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:-^80}", " summary ")?;
        writeln!(f, "Ran {} words", self.num_tried)?;
        writeln!(
            f,
            "Solved {}, or {:.1}%, ran out of words on {} and out of guesses on {}",
            self.num_solved,
            self.frac_solved() * 100.,
            self.num_exhausted,
            self.num_out_of_guesses
        )?;
        writeln!(
            f,
            "Solved words took {:.2} guesses on average, {} guesses in total",
            self.mean_guesses(),
            self.cumulative_guesses
        )?;
        write!(f, "{}", self.histogram)
    }
}

/// Counts of solved sessions by number of guesses.
///
/// Bin `i` holds the sessions solved in `i + 1` guesses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct Histogram {
    bins: Vec<u32>,
}

impl Histogram {
    fn add(&mut self, guesses: usize) {
        if guesses == 0 {
            return;
        }
        if self.bins.len() < guesses {
            self.bins.resize(guesses, 0);
        }
        self.bins[guesses - 1] += 1;
    }
}

impl From<Vec<u32>> for Histogram {
    fn from(bins: Vec<u32>) -> Self {
        Histogram { bins }
    }
}

impl Deref for Histogram {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.bins
    }
}

impl Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let max = match self.iter().max() {
            Some(&max) => max,
            None => return Ok(()),
        };
        let count_digits = |n: u32| std::iter::successors(Some(n), |&n| (n >= 10).then(|| n / 10)).count();
        let label_width = count_digits(self.len() as u32);
        // label, " |", " (count)"
        let room = 80usize.saturating_sub(label_width + 2 + count_digits(max) + 3);
        let count_per_mark = (max as f32 / room.max(1) as f32).max(1.0);

        for (i, &bin) in self.bins.iter().enumerate() {
            let marks = (bin as f32 / count_per_mark).floor() as usize;
            writeln!(
                f,
                "{:>label_width$} |{:■>marks$} ({})",
                i + 1,
                "",
                bin,
                label_width = label_width,
                marks = marks
            )?;
        }

        Ok(())
    }
}
