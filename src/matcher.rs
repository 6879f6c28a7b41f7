//! Lexicon matching.
//!
//! Intersects a [`FrequencyMap`] with each category of a [`Lexicon`] and emits
//! one [`MatchRecord`] per token that occurs in both and whose weight lies
//! strictly inside the [`WeightThreshold`].
//!
//! Categories are read-only and independent, so [`LexiconMatcher::match_lexicon`]
//! processes them in parallel with rayon. Every category of the lexicon is
//! present in the result, with an empty [`MatchSet`] when nothing matched.

use std::collections::BTreeMap;

use log::trace;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LexScoreError, Result};
use crate::frequency::FrequencyMap;
use crate::lexicon::{CategoryWeights, Lexicon};

/// A token found in both the text and a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The matched token
    pub token: String,
    /// Number of times the token occurs in the text
    pub frequency: usize,
    /// Weight of the token in the category
    pub weight: f64,
}

impl MatchRecord {
    /// Create a new match record.
    pub fn new<S: Into<String>>(token: S, frequency: usize, weight: f64) -> Self {
        MatchRecord {
            token: token.into(),
            frequency,
            weight,
        }
    }

    /// Check that the record could have been produced by a match.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.frequency == 0 {
            return Err(LexScoreError::invalid_input(format!(
                "match record '{}' has zero frequency",
                self.token
            )));
        }
        if !self.weight.is_finite() {
            return Err(LexScoreError::invalid_input(format!(
                "match record '{}' has non-finite weight {}",
                self.token, self.weight
            )));
        }
        Ok(())
    }
}

/// Matches of a single category.
pub type MatchSet = Vec<MatchRecord>;

/// Matches of every category, keyed by category name.
pub type CategoryMatches = BTreeMap<String, MatchSet>;

/// Exclusive weight bounds. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightThreshold {
    /// Weights must be strictly greater than this
    pub min: Option<f64>,
    /// Weights must be strictly less than this
    pub max: Option<f64>,
}

impl WeightThreshold {
    /// Create a threshold. NaN bounds are rejected.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self> {
        WeightThreshold::default().with_min(min)?.with_max(max)
    }

    /// Set the exclusive lower bound.
    pub fn with_min(mut self, min: Option<f64>) -> Result<Self> {
        if min.is_some_and(f64::is_nan) {
            return Err(LexScoreError::invalid_input("minimum weight is NaN"));
        }
        self.min = min;
        Ok(self)
    }

    /// Set the exclusive upper bound.
    pub fn with_max(mut self, max: Option<f64>) -> Result<Self> {
        if max.is_some_and(f64::is_nan) {
            return Err(LexScoreError::invalid_input("maximum weight is NaN"));
        }
        self.max = max;
        Ok(self)
    }

    /// Check whether a weight passes the filter.
    ///
    /// Non-finite weights (NaN and both infinities) never pass, whatever the
    /// bounds. They are skipped like any filtered token, so a lexicon carrying
    /// one still scores instead of failing record validation downstream.
    pub fn contains(&self, weight: f64) -> bool {
        weight.is_finite()
            && self.min.is_none_or(|min| weight > min)
            && self.max.is_none_or(|max| weight < max)
    }
}

/// Matches token frequencies against lexicon categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconMatcher {
    threshold: WeightThreshold,
}

impl LexiconMatcher {
    /// Create a matcher with the given weight threshold.
    pub fn new(threshold: WeightThreshold) -> Self {
        LexiconMatcher { threshold }
    }

    /// Get the weight threshold.
    pub fn threshold(&self) -> WeightThreshold {
        self.threshold
    }

    /// Match a single category. Records are ordered by token.
    pub fn match_category(&self, freqs: &FrequencyMap, weights: &CategoryWeights) -> MatchSet {
        if freqs.len() < weights.len() {
            let mut matches: MatchSet = freqs
                .iter()
                .filter_map(|(token, frequency)| {
                    weights
                        .get(token)
                        .filter(|weight| self.threshold.contains(**weight))
                        .map(|weight| MatchRecord::new(token, frequency, *weight))
                })
                .collect();
            matches.sort_by(|a, b| a.token.cmp(&b.token));
            matches
        } else {
            weights
                .iter()
                .filter(|(_, weight)| self.threshold.contains(**weight))
                .filter_map(|(token, weight)| {
                    freqs
                        .get(token)
                        .map(|frequency| MatchRecord::new(token.as_str(), frequency, *weight))
                })
                .collect()
        }
    }

    /// Match every category of a lexicon.
    pub fn match_lexicon(&self, freqs: &FrequencyMap, lexicon: &Lexicon) -> CategoryMatches {
        lexicon
            .as_map()
            .par_iter()
            .map(|(category, weights)| {
                let matches = self.match_category(freqs, weights);
                trace!("category '{category}': {} matches", matches.len());
                (category.clone(), matches)
            })
            .collect()
    }
}

/// Match token frequencies against every category of a lexicon, keeping
/// weights strictly between `min` and `max`.
pub fn match_lexicon(
    freqs: &FrequencyMap,
    lexicon: &Lexicon,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<CategoryMatches> {
    let threshold = WeightThreshold::new(min, max)?;
    Ok(LexiconMatcher::new(threshold).match_lexicon(freqs, lexicon))
}
