//! Command-line interface for wordparts.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{normalize_word, validate_word, DecomposeOptions, DEFAULT_MAX_DEPTH};
use crate::decompose::Decomposer;
use crate::error::Result;
use crate::output::{render, OutputFormat};
use crate::sections;
use crate::source::{
    parse_timestamp, ContentSource, Freshness, SnapshotContentSource, WiktionaryContentSource,
};

/// wordparts - Decompose English words into labeled morphological pieces.
#[derive(Parser)]
#[command(name = "wordparts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decompose a word into prefixes, stems, suffixes and endings.
    Decompose {
        /// Word to decompose (e.g., unhappiness)
        word: String,

        /// Maximum recursion depth per path
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Snapshot file to read entries from instead of fetching them
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Last update of the snapshot's source (RFC 3339), to report staleness
        #[arg(long, requires = "snapshot")]
        source_updated: Option<String>,

        /// Keep boundary hyphens on affixes ("un-", "-ness")
        #[arg(long)]
        raw: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the filtered English markup the decomposer reads for a word.
    English {
        /// Word to look up
        word: String,

        /// Snapshot file to read entries from instead of fetching them
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },

    /// List the sections of a local markup file at one heading depth.
    Sections {
        /// Markup file
        file: PathBuf,

        /// Heading depth (2 = languages, 3 = etymology/part of speech)
        #[arg(short, long, default_value_t = 2)]
        depth: usize,

        /// Include text before the first heading as "Front matter"
        #[arg(long)]
        keep_front_matter: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decompose {
            word,
            max_depth,
            snapshot,
            source_updated,
            raw,
            format,
        } => decompose_command(
            &word,
            max_depth,
            snapshot.as_deref(),
            source_updated.as_deref(),
            raw,
            format,
        ),
        Commands::English { word, snapshot } => english_command(&word, snapshot.as_deref()),
        Commands::Sections {
            file,
            depth,
            keep_front_matter,
        } => sections_command(&file, depth, keep_front_matter),
    }
}

/// Open the snapshot if given, otherwise the live source.
fn open_source(snapshot: Option<&Path>) -> Result<Box<dyn ContentSource>> {
    match snapshot {
        Some(path) => Ok(Box::new(SnapshotContentSource::load(path)?)),
        None => Ok(Box::new(WiktionaryContentSource::new()?)),
    }
}

/// Spinner shown while entries are fetched.
fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Execute the decompose command.
fn decompose_command(
    word: &str,
    max_depth: usize,
    snapshot: Option<&Path>,
    source_updated: Option<&str>,
    raw: bool,
    format: OutputFormat,
) -> Result<()> {
    let word = normalize_word(word);
    validate_word(&word)?;

    let source: Box<dyn ContentSource> = match snapshot {
        Some(path) => {
            let snapshot_source = SnapshotContentSource::load(path)?;
            if let Some(updated) = source_updated {
                warn_if_stale(&snapshot_source, updated)?;
            }
            Box::new(snapshot_source)
        }
        None => open_source(None)?,
    };
    let decomposer =
        Decomposer::new(source).with_options(DecomposeOptions::new().with_max_depth(max_depth));

    let pb = spinner(&format!("Decomposing {word}..."));
    let result = if raw {
        decomposer.decompose_raw(&word)
    } else {
        decomposer.decompose(&word)
    };
    pb.finish_and_clear();

    println!("{}", render(&result?, format)?);
    Ok(())
}

/// Report a snapshot built before its source's last update.
fn warn_if_stale(source: &SnapshotContentSource, source_updated: &str) -> Result<()> {
    let updated = parse_timestamp(source_updated)?;
    if source.freshness(updated) == Freshness::Stale {
        eprintln!(
            "{} snapshot built {} predates source update {}",
            style("Warning:").yellow().bold(),
            source.built_at(),
            updated
        );
    }
    Ok(())
}

/// Execute the english command.
fn english_command(word: &str, snapshot: Option<&Path>) -> Result<()> {
    let word = normalize_word(word);
    validate_word(&word)?;

    let source = open_source(snapshot)?;
    let pb = spinner(&format!("Looking up {word}..."));
    let content = source.lookup(&word);
    pb.finish_and_clear();

    match content? {
        Some(content) => println!("{content}"),
        None => eprintln!(
            "{} has no English entry in {}",
            style(&word).cyan(),
            source.name()
        ),
    }
    Ok(())
}

/// Execute the sections command.
fn sections_command(file: &Path, depth: usize, keep_front_matter: bool) -> Result<()> {
    let doc = std::fs::read_to_string(file)?;
    let sections = sections::split(&doc, depth, keep_front_matter)?;

    if sections.is_empty() {
        eprintln!("No headings at depth {depth}");
        return Ok(());
    }

    for section in &sections {
        println!(
            "{} {}",
            style(&section.name).green().bold(),
            style(format!("({} lines)", section.body.trim().lines().count())).dim()
        );
    }
    Ok(())
}
