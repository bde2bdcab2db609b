//! Command-line entry point.
//!
//! Reads a raw Sindhi corpus and a stopword list from a data directory,
//! runs the preprocessing pipeline, and writes one cleaned sentence per
//! line to the output path. Exit code 0 on success, non-zero on any fatal
//! error (missing input, invalid encoding, unwritable output).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use sindhi_preprocess::analysis::{CorpusStats, FrequencyTable};
use sindhi_preprocess::{
    corpus, preprocess, EmptyLinePolicy, PreprocessConfig, PreprocessError, StopwordSet,
};

const RAW_CORPUS_FILE: &str = "raw_corpus.txt";
const STOPWORDS_FILE: &str = "sindhi_stopwords.txt";

#[derive(Debug, Parser)]
#[command(
    name = "sindhi-preprocess",
    version,
    about = "Clean and sentence-segment a raw Sindhi corpus"
)]
struct Cli {
    /// Directory containing raw_corpus.txt and sindhi_stopwords.txt.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Raw corpus file (overrides the data-dir default).
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Stopword list file (overrides the data-dir default).
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Output path for the cleaned corpus.
    #[arg(short, long, default_value = "processed/cleaned_corpus.txt")]
    output: PathBuf,

    /// Emit a blank line for sentences emptied by stopword removal
    /// instead of skipping them.
    #[arg(long)]
    keep_empty: bool,

    /// Filter stopwords across sentences in parallel.
    #[arg(long)]
    parallel: bool,

    /// Print corpus statistics after writing the output.
    #[arg(long)]
    stats: bool,

    /// Print corpus statistics as JSON.
    #[arg(long)]
    stats_json: bool,

    /// Increase logging verbosity (-v, -vv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), PreprocessError> {
    let corpus_path = cli
        .corpus
        .clone()
        .unwrap_or_else(|| cli.data_dir.join(RAW_CORPUS_FILE));
    let stopwords_path = cli
        .stopwords
        .clone()
        .unwrap_or_else(|| cli.data_dir.join(STOPWORDS_FILE));

    let raw = corpus::read_text(&corpus_path)?;
    let stopwords = StopwordSet::from_path(&stopwords_path)?;
    info!(
        corpus = %corpus_path.display(),
        stopwords = stopwords.len(),
        "inputs loaded"
    );

    let cfg = PreprocessConfig {
        empty_line_policy: if cli.keep_empty {
            EmptyLinePolicy::Emit
        } else {
            EmptyLinePolicy::Skip
        },
        parallel: cli.parallel,
        ..PreprocessConfig::default()
    };

    let cleaned = preprocess(&raw, &stopwords, &cfg);
    corpus::write_cleaned(&cli.output, &cleaned)?;
    info!(
        sentences = cleaned.len(),
        output = %cli.output.display(),
        "cleaned corpus written"
    );

    if cli.stats || cli.stats_json {
        let stats = CorpusStats::compute(&cleaned);
        if cli.stats_json {
            // Serializing a plain stats struct cannot fail.
            println!("{}", serde_json::to_string_pretty(&stats).unwrap());
        } else {
            println!("sentences:               {}", stats.sentences);
            println!("tokens:                  {}", stats.tokens);
            println!("unique tokens:           {}", stats.unique_tokens);
            println!("avg tokens per sentence: {:.2}", stats.avg_tokens_per_sentence);
            println!("avg word length:         {:.2}", stats.avg_word_length);
            let freq = FrequencyTable::from_corpus(&cleaned);
            for (token, count) in freq.most_common(20) {
                println!("  {count:>6}  {token}");
            }
        }
    }

    Ok(())
}
