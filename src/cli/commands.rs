//! Command implementations for the lexscore CLI.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use log::{debug, info};

use crate::aggregate::calc_lex;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LexScoreError, Result};
use crate::frequency::FrequencyMap;
use crate::lexicon::{Intercepts, Lexicon};
use crate::matcher::LexiconMatcher;
use crate::pipeline::score_lexicon;
use crate::report::prepare_matches;

/// Execute a CLI command.
pub fn execute_command(args: LexScoreArgs) -> Result<()> {
    configure_thread_pool(args.threads)?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    match &args.command {
        Command::Score(score_args) => {
            let result = run_score(score_args)?;
            output_result(&mut writer, "Lexical values computed", &result, &args)
        }
        Command::Matches(matches_args) => {
            let result = run_matches(matches_args)?;
            output_result(&mut writer, "Match report prepared", &result, &args)
        }
    }
}

/// Size the global rayon pool used for per-category work.
fn configure_thread_pool(threads: Option<usize>) -> Result<()> {
    let threads = threads.unwrap_or_else(num_cpus::get);
    debug!("using {threads} worker threads");

    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .map_err(|e| LexScoreError::other(format!("failed to configure thread pool: {e}")))
}

/// Compute the lexical value of every category.
pub fn run_score(args: &ScoreArgs) -> Result<ScoreResult> {
    let options = args.scoring.to_options()?;
    let lexicon = load_lexicon(&args.input.lexicon)?;
    let intercepts = load_intercepts(args.input.intercepts.as_deref())?;
    let tokens = load_tokens(&args.input.tokens)?;

    info!(
        "scoring {} tokens against {} categories",
        tokens.len(),
        lexicon.len()
    );
    let values = score_lexicon(&tokens, &lexicon, &intercepts, &options)?;

    Ok(ScoreResult {
        word_count: tokens.len(),
        encoding: options.encoding,
        values,
    })
}

/// Build the match report of one category.
pub fn run_matches(args: &MatchesArgs) -> Result<MatchesResult> {
    let options = args.scoring.to_options()?.with_sort_by(args.sort_by);
    let lexicon = load_lexicon(&args.input.lexicon)?;
    let intercepts = load_intercepts(args.input.intercepts.as_deref())?;
    let tokens = load_tokens(&args.input.tokens)?;

    let weights = lexicon.get(&args.category).ok_or_else(|| {
        LexScoreError::invalid_input(format!(
            "category '{}' not found in lexicon",
            args.category
        ))
    })?;

    let freqs = FrequencyMap::from_tokens(&tokens);
    let matches = LexiconMatcher::new(options.threshold).match_category(&freqs, weights);
    info!(
        "category '{}': {} of {} distinct tokens matched",
        args.category,
        matches.len(),
        freqs.len()
    );

    let value = calc_lex(
        &matches,
        intercepts.get(&args.category),
        freqs.word_count(),
        options.encoding,
        options.precision,
    )?;
    let report = prepare_matches(
        &matches,
        options.encoding,
        freqs.word_count(),
        options.sort_by,
        options.precision,
    )?;

    Ok(MatchesResult {
        category: args.category.clone(),
        encoding: options.encoding,
        value,
        report,
    })
}

/// Load and validate a lexicon file.
pub fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read lexicon {}", path.display()))?;
    Lexicon::from_json_str(&text)
}

/// Load and validate an intercept file. No file means no intercepts.
pub fn load_intercepts(path: Option<&Path>) -> Result<Intercepts> {
    let Some(path) = path else {
        return Ok(Intercepts::new());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read intercepts {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    Intercepts::from_json(&value)
}

/// Load a whitespace-separated token file.
pub fn load_tokens(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read tokens {}", path.display()))?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}
