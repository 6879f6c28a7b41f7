//! Command line argument parsing for the lexscore CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::aggregate::Encoding;
use crate::config::ScoringOptions;
use crate::error::Result;
use crate::report::SortKey;

/// lexscore - lexicon-based lexical values for tokenized text
#[derive(Parser, Debug, Clone)]
#[command(name = "lexscore")]
#[command(about = "Compute lexicon-based lexical values for tokenized text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexScoreArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Number of worker threads for per-category scoring (default: CPU count)
    #[arg(long, env = "LEXSCORE_THREADS")]
    pub threads: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexScoreArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute the lexical value of every category
    Score(ScoreArgs),

    /// Show the matched tokens of one category
    Matches(MatchesArgs),
}

/// Input files shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Lexicon file (JSON object of categories mapping tokens to weights)
    #[arg(value_name = "LEXICON_FILE")]
    pub lexicon: PathBuf,

    /// Whitespace-separated token file
    #[arg(value_name = "TOKENS_FILE")]
    pub tokens: PathBuf,

    /// Intercept file (JSON object mapping categories to intercepts)
    #[arg(short, long, value_name = "INTERCEPTS_FILE")]
    pub intercepts: Option<PathBuf>,
}

/// Scoring options shared by every command
#[derive(Args, Debug, Clone)]
pub struct ScoringArgs {
    /// Encoding: raw, frequency or percent
    #[arg(short, long, default_value = "frequency")]
    pub encoding: Encoding,

    /// Decimal places of the result (clamped to 0..=20, values above 20 become 14)
    #[arg(short, long, default_value = "9", allow_negative_numbers = true)]
    pub precision: i64,

    /// Exclusive minimum weight
    #[arg(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Exclusive maximum weight
    #[arg(long, allow_negative_numbers = true)]
    pub max: Option<f64>,
}

impl ScoringArgs {
    /// Validate the arguments into scoring options.
    pub fn to_options(&self) -> Result<ScoringOptions> {
        ScoringOptions::new(self.encoding)
            .with_precision(self.precision)
            .with_threshold(self.min, self.max)
    }
}

/// Arguments for scoring
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

/// Arguments for match reports
#[derive(Parser, Debug, Clone)]
pub struct MatchesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Category to report
    #[arg(short, long)]
    pub category: String,

    /// Sort key: frequency, weight or lex
    #[arg(short, long, default_value = "lex")]
    pub sort_by: SortKey,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
