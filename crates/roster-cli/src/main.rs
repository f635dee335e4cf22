use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use roster_core::vocab::Vocabulary;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a vocabulary TOML file overriding the built-in tables
    #[arg(long, global = true)]
    vocab: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Parse a video title into artists and a version type
    ///
    /// Runs the title attribution engine over a single title/channel pair
    /// and prints the structured result:
    ///
    /// - Cleaned title with credits, version tags, and descriptors stripped
    /// - Primary artists (from the title prefix or an authoritative channel)
    /// - Featured artists (from feat./ft./with clauses)
    /// - Version type (Official Music Video, Live Performance, Remix, ...)
    /// - Broadcaster, when a live-broadcast pattern matched
    ///
    /// Passing the uploading channel's name with --channel improves
    /// attribution considerably: "<Artist> - Topic" channels are treated as
    /// authoritative, known ripper/reposter channels are never used as an
    /// artist source, and an otherwise unattributed title can fall back to
    /// the channel name.
    ///
    /// The parse never fails: a title nothing matches degrades to the
    /// stripped raw text with no artists and the default "Audio" version.
    Parse {
        /// The video title to parse
        title: String,

        /// The uploading channel's name
        #[arg(long)]
        channel: Option<String>,

        /// Emit the parsed record as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Analyze a comment for sentiment, intent, and aspect
    ///
    /// Runs the comment analysis engine over a single comment and prints
    /// the sentiment label with its calibrated confidence, the detected
    /// intent (praise/request/info/critique/engagement), the aspect the
    /// comment is about (artist/beat/lyrics/rollout/general), the booster
    /// intensity score, and a one-line explanation of which rule fired.
    ///
    /// Empty input is not an error; it yields the neutral default analysis.
    Analyze {
        /// The comment text to analyze
        text: String,

        /// Emit the analysis as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Parse titles in bulk, one JSON record per line
    ///
    /// Reads tab-separated `title<TAB>channel` lines from the given file or
    /// from stdin (lines without a tab are treated as bare titles) and
    /// writes one JSON `ParsedTitle` record per input line to stdout.
    /// Blank lines are skipped. A line count is reported on stderr so the
    /// JSON stream stays clean.
    BatchParse {
        /// Input file (defaults to stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Analyze comments in bulk, one JSON record per line
    ///
    /// Reads one comment per line from the given file or from stdin and
    /// writes one JSON `CommentAnalysis` record per input line to stdout.
    /// Blank lines are skipped.
    BatchAnalyze {
        /// Input file (defaults to stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Write the active vocabulary tables as TOML
    ///
    /// Dumps the title and sentiment vocabulary tables (the built-in
    /// defaults, or the file given with --vocab) so they can be edited and
    /// passed back with --vocab. A partial file is fine: fields absent from
    /// a vocabulary TOML keep their curated defaults.
    Vocab {
        /// Output file (defaults to stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let vocabulary = match &cli.vocab {
        Some(path) => Vocabulary::load(path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display()))?,
        None => Vocabulary::default(),
    };

    match cli.command {
        Commands::Parse {
            title,
            channel,
            json,
        } => {
            commands::run_parse(&vocabulary, &title, channel.as_deref(), json)?;
        }
        Commands::Analyze { text, json } => {
            commands::run_analyze(&vocabulary, &text, json)?;
        }
        Commands::BatchParse { input } => {
            commands::run_batch_parse(&vocabulary, input)?;
        }
        Commands::BatchAnalyze { input } => {
            commands::run_batch_analyze(&vocabulary, input)?;
        }
        Commands::Vocab { out } => {
            commands::dump_vocab(&vocabulary, out)?;
        }
    }

    Ok(())
}
