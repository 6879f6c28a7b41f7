//! End-to-end scoring.
//!
//! [`make_scorer`] binds one category's weights, an intercept and a precision
//! into a reusable [`LexScorer`]. Each call counts the tokens, matches them
//! against the bound weights and aggregates with [`Encoding::Frequency`].
//!
//! [`score_lexicon`] does the same for every category of a [`Lexicon`] at once,
//! counting the tokens only one time and scoring categories in parallel. If any
//! category fails the whole call fails and no partial map is returned.
//!
//! # Examples
//!
//! ```
//! use lexscore::lexicon::CategoryWeights;
//! use lexscore::pipeline::make_scorer;
//!
//! let weights: CategoryWeights = [("a", 3.0), ("b", 87.0), ("c", -15.0)]
//!     .into_iter()
//!     .map(|(token, weight)| (token.to_string(), weight))
//!     .collect();
//!
//! let scorer = make_scorer(weights, 23.2189, None);
//! let doc = "a a b b b b b b b b b b c c c e e e e e e f f f f";
//! let tokens: Vec<&str> = doc.split(' ').collect();
//!
//! assert_eq!(scorer.score(&tokens).unwrap(), 56.4589);
//! ```

use std::collections::BTreeMap;

use log::debug;
use rayon::prelude::*;

use crate::aggregate::{Encoding, calc_lex};
use crate::config::ScoringOptions;
use crate::error::Result;
use crate::frequency::FrequencyMap;
use crate::lexicon::{CategoryWeights, Intercepts, Lexicon};
use crate::matcher::LexiconMatcher;
use crate::precision::Precision;

/// A single-category scorer with bound configuration.
#[derive(Debug, Clone)]
pub struct LexScorer {
    weights: CategoryWeights,
    intercept: f64,
    precision: Precision,
    matcher: LexiconMatcher,
}

/// Create a scorer for one category.
pub fn make_scorer(
    weights: CategoryWeights,
    intercept: f64,
    precision: Option<Precision>,
) -> LexScorer {
    LexScorer::new(weights, intercept, precision.unwrap_or_default())
}

impl LexScorer {
    /// Create a new scorer.
    pub fn new(weights: CategoryWeights, intercept: f64, precision: Precision) -> Self {
        LexScorer {
            weights,
            intercept,
            precision,
            matcher: LexiconMatcher::default(),
        }
    }

    /// Get the bound weights.
    pub fn weights(&self) -> &CategoryWeights {
        &self.weights
    }

    /// Get the bound intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get the bound precision.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Score a token sequence with the bound intercept and precision.
    ///
    /// An empty sequence has no word count and fails with
    /// [`MissingWordCount`](crate::error::LexScoreError::MissingWordCount).
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> Result<f64> {
        self.score_with(tokens, None, None)
    }

    /// Score a token sequence, optionally overriding intercept and precision.
    pub fn score_with<S: AsRef<str>>(
        &self,
        tokens: &[S],
        intercept: Option<f64>,
        precision: Option<Precision>,
    ) -> Result<f64> {
        let freqs = FrequencyMap::from_tokens(tokens);
        let matches = self.matcher.match_category(&freqs, &self.weights);
        calc_lex(
            &matches,
            intercept.unwrap_or(self.intercept),
            freqs.word_count(),
            Encoding::Frequency,
            precision.unwrap_or(self.precision),
        )
    }
}

/// Score a token sequence against every category of a lexicon.
pub fn score_lexicon<S: AsRef<str>>(
    tokens: &[S],
    lexicon: &Lexicon,
    intercepts: &Intercepts,
    options: &ScoringOptions,
) -> Result<BTreeMap<String, f64>> {
    let freqs = FrequencyMap::from_tokens(tokens);
    debug!(
        "scoring {} tokens ({} distinct) against {} categories",
        freqs.word_count(),
        freqs.len(),
        lexicon.len()
    );

    let matcher = LexiconMatcher::new(options.threshold);
    let matches = matcher.match_lexicon(&freqs, lexicon);

    matches
        .par_iter()
        .map(|(category, set)| {
            calc_lex(
                set,
                intercepts.get(category),
                freqs.word_count(),
                options.encoding,
                options.precision,
            )
            .map(|value| (category.clone(), value))
        })
        .collect()
}
