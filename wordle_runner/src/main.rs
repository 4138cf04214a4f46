use std::{
    error::Error,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{error, info};
use wordle_greedy::{
    harness::ProgressLog,
    perf::TraceFormat,
    rank::rank_corpus,
    solver::DEFAULT_MAX_GUESSES,
    words::read_word_list_path,
    Corpus, Harness, Result, Weight,
};
use wordle_rankers::{LetterFrequency, OracleScore};

const GUESSES: &str = "wordle-allowed-guesses.txt";
const ANSWERS: &str = "wordle-answers-alphabetical.txt";
const STATS: &str = "wordle-stats.txt";
const TRACES: &str = "data.txt";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log progress and show a progress bar while solving.
    #[arg(global = true, short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ranks a guess list and writes the weighted corpus.
    Rank(RankArgs),
    /// Solves every word of a list with a weighted corpus.
    Solve(SolveArgs),
    /// Ranks, then solves, with the default file names.
    Run,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Metric {
    /// Total feedback earned against the answer list.
    Oracle,
    /// Frequency of each distinct letter in the guess list.
    Letters,
}

#[derive(Args, Debug)]
struct RankArgs {
    #[arg(long, default_value = GUESSES)]
    guesses: PathBuf,

    #[arg(long, default_value = ANSWERS)]
    answers: PathBuf,

    #[arg(short, long, default_value = STATS)]
    out: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Metric::Oracle)]
    metric: Metric,
}

impl Default for RankArgs {
    fn default() -> Self {
        RankArgs {
            guesses: GUESSES.into(),
            answers: ANSWERS.into(),
            out: STATS.into(),
            metric: Metric::Oracle,
        }
    }
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Target words, whitespace separated.
    #[arg(short, long, default_value = GUESSES)]
    words: PathBuf,

    /// Weighted corpus of `word,weight` lines.
    #[arg(short, long, default_value = STATS)]
    corpus: PathBuf,

    #[arg(short, long, default_value = TRACES)]
    out: PathBuf,

    #[arg(long, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Solve only this many targets, chosen at random.
    #[arg(long)]
    sample: Option<usize>,

    /// Read corpus weights as floating point numbers.
    #[arg(long, default_value_t = false)]
    float: bool,

    /// Write the whole record as JSON instead of plain traces.
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl Default for SolveArgs {
    fn default() -> Self {
        SolveArgs {
            words: GUESSES.into(),
            corpus: STATS.into(),
            out: TRACES.into(),
            max_guesses: DEFAULT_MAX_GUESSES,
            sample: None,
            float: false,
            json: false,
        }
    }
}

/// Writes a corpus, creating `path` only once there is something to write.
fn write_corpus<W: Weight>(corpus: &Corpus<W>, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    corpus.write_csv(&mut out)?;
    out.flush()?;
    println!("Ranked {} words into {}", corpus.len(), path.display());
    Ok(())
}

fn rank(args: &RankArgs) -> Result<()> {
    let guesses = read_word_list_path(&args.guesses)?;
    info!("ranking {} words by {:?}", guesses.len(), args.metric);

    // every input is read before the output is truncated
    match args.metric {
        Metric::Oracle => {
            let answers = read_word_list_path(&args.answers)?;
            let corpus = rank_corpus(&guesses, &OracleScore::new(answers));
            write_corpus(&corpus, &args.out)
        }
        Metric::Letters => {
            let corpus = rank_corpus(&guesses, &LetterFrequency::new());
            write_corpus(&corpus, &args.out)
        }
    }
}

fn solve<W: Weight>(args: &SolveArgs, verbose: bool) -> Result<()> {
    let corpus: Corpus<W> = Corpus::from_path(&args.corpus)?;
    let targets = read_word_list_path(&args.words)?;
    info!(
        "solving {} targets with {} corpus words",
        targets.len(),
        corpus.len()
    );

    let mut harness = Harness::new(&corpus)
        .max_guesses(args.max_guesses)
        .observe(ProgressLog::default());
    if verbose {
        harness = harness.verbose();
    }
    if let Some(n) = args.sample {
        harness = harness.test_num(n);
    }
    let record = harness.run(&targets);

    let mut out = BufWriter::new(File::create(&args.out)?);
    if args.json {
        record.to_json(&mut out)?;
    } else {
        record.write_traces(&mut out, &TraceFormat::default())?;
    }
    out.flush()?;
    println!("Wrote {} sessions to {}", record.len(), args.out.display());

    if verbose {
        record.print();
    } else {
        print!("{}", record.summary());
    }

    Ok(())
}

fn execute(command: &Commands, verbose: bool) -> Result<()> {
    match command {
        Commands::Rank(args) => rank(args),
        Commands::Solve(args) if args.float => solve::<f64>(args, verbose),
        Commands::Solve(args) => solve::<u64>(args, verbose),
        Commands::Run => {
            rank(&RankArgs::default())?;
            solve::<u64>(&SolveArgs::default(), verbose)
        }
    }
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(cli.verbose)))
        .init();

    let start = Instant::now();
    if let Err(e) = execute(&cli.command, cli.verbose) {
        error!("{}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            error!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }

    println!("time: {:.2?}", start.elapsed());
}
