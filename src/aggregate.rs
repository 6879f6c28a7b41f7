//! Lexical value aggregation.
//!
//! [`calc_lex`] folds a [`MatchSet`] into a single lexical value using one of
//! three encodings:
//!
//! - [`Encoding::Raw`]: sum of weights, plus the intercept.
//! - [`Encoding::Frequency`]: sum of `(frequency / word_count) * weight`, plus the
//!   intercept.
//! - [`Encoding::Percent`]: sum of `frequency / word_count`, a fraction in `[0, 1]`.
//!   The intercept is never added: this mode reports match coverage, not a
//!   regression score.
//!
//! The sum is accumulated in `f64` and rounded once to the requested
//! [`Precision`], which removes accumulated representation drift.
//!
//! # Examples
//!
//! ```
//! use lexscore::aggregate::{Encoding, calc_lex};
//! use lexscore::matcher::MatchRecord;
//! use lexscore::precision::Precision;
//!
//! let matches = vec![
//!     MatchRecord::new("a", 2, 3.0),
//!     MatchRecord::new("b", 10, 87.0),
//!     MatchRecord::new("c", 3, -15.0),
//! ];
//!
//! let value = calc_lex(&matches, 23.2189, 25, Encoding::Frequency, Precision::default()).unwrap();
//! assert_eq!(value, 56.4589);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LexScoreError, Result};
use crate::frequency::FrequencyMap;
use crate::lexicon::CategoryWeights;
use crate::matcher::MatchRecord;
use crate::precision::{Precision, correct_float, sum_values, to_significant};

/// Significant digits kept for each weighted relative frequency.
const WEIGHTED_FREQUENCY_DIGITS: usize = 15;

/// Aggregation formula used to combine matches into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Sum of weights
    Raw,
    /// Sum of relative frequency times weight
    #[default]
    Frequency,
    /// Sum of relative frequencies
    Percent,
}

impl Encoding {
    /// Get the canonical name of the encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Raw => "raw",
            Encoding::Frequency => "frequency",
            Encoding::Percent => "percent",
        }
    }

    /// Whether the encoding divides by the word count.
    pub fn needs_word_count(&self) -> bool {
        matches!(self, Encoding::Frequency | Encoding::Percent)
    }

    /// Whether the intercept is added to the final value.
    pub fn adds_intercept(&self) -> bool {
        !matches!(self, Encoding::Percent)
    }

    /// Fail when the encoding needs a word count and none was given.
    pub fn check_word_count(&self, word_count: usize) -> Result<()> {
        if self.needs_word_count() && word_count == 0 {
            return Err(LexScoreError::missing_word_count(*self));
        }
        Ok(())
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = LexScoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raw" => Ok(Encoding::Raw),
            "freq" | "frequency" => Ok(Encoding::Frequency),
            "cent" | "percent" => Ok(Encoding::Percent),
            other => Err(LexScoreError::invalid_encoding(other)),
        }
    }
}

/// Per-token term of the aggregation for the given encoding.
///
/// The caller must have checked the word count with
/// [`Encoding::check_word_count`].
pub fn contribution(record: &MatchRecord, encoding: Encoding, word_count: usize) -> f64 {
    match encoding {
        Encoding::Raw => record.weight,
        Encoding::Frequency => (record.frequency as f64 / word_count as f64) * record.weight,
        Encoding::Percent => record.frequency as f64 / word_count as f64,
    }
}

/// Compute the lexical value of a set of matches.
pub fn calc_lex(
    matches: &[MatchRecord],
    intercept: f64,
    word_count: usize,
    encoding: Encoding,
    precision: Precision,
) -> Result<f64> {
    encoding.check_word_count(word_count)?;
    if !intercept.is_finite() {
        return Err(LexScoreError::invalid_input(format!(
            "intercept must be finite, got {intercept}"
        )));
    }

    let mut value = 0.0;
    for record in matches {
        record.validate()?;
        value += contribution(record, encoding, word_count);
    }

    if encoding.adds_intercept() {
        value += intercept;
    }

    Ok(correct_float(value, precision))
}

/// A token with its weighted relative frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedFrequency {
    /// The lexicon token
    pub token: String,
    /// `(frequency / word_count) * weight`
    pub value: f64,
}

/// Compute `(frequency / word_count) * weight` for every lexicon token that
/// occurs in `freqs`, ordered by token.
///
/// Each value is kept to 15 significant digits. An empty frequency map yields
/// no values.
pub fn weighted_relative_frequencies(
    weights: &CategoryWeights,
    freqs: &FrequencyMap,
) -> Vec<WeightedFrequency> {
    let word_count = freqs.word_count();
    if word_count == 0 {
        return Vec::new();
    }

    weights
        .iter()
        .filter_map(|(token, weight)| {
            freqs.get(token).map(|frequency| WeightedFrequency {
                token: token.clone(),
                value: to_significant(
                    (frequency as f64 / word_count as f64) * weight,
                    WEIGHTED_FREQUENCY_DIGITS,
                ),
            })
        })
        .collect()
}

/// Sum weighted relative frequencies and add the intercept.
pub fn lexicon_value(values: &[WeightedFrequency], intercept: f64, precision: Precision) -> f64 {
    let sum = sum_values(values.iter().map(|item| item.value), precision);
    correct_float(sum + intercept, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc1_matches() -> Vec<MatchRecord> {
        vec![
            MatchRecord::new("a", 2, 3.0),
            MatchRecord::new("b", 10, 87.0),
            MatchRecord::new("c", 3, -15.0),
        ]
    }

    #[test]
    fn test_encoding_parsing() {
        assert_eq!("raw".parse::<Encoding>().unwrap(), Encoding::Raw);
        assert_eq!("freq".parse::<Encoding>().unwrap(), Encoding::Frequency);
        assert_eq!("frequency".parse::<Encoding>().unwrap(), Encoding::Frequency);
        assert_eq!("cent".parse::<Encoding>().unwrap(), Encoding::Percent);
        assert_eq!("percent".parse::<Encoding>().unwrap(), Encoding::Percent);

        match "binary".parse::<Encoding>() {
            Err(LexScoreError::InvalidEncoding(name)) => assert_eq!(name, "binary"),
            other => panic!("Expected InvalidEncoding, got {other:?}"),
        }
    }

    #[test]
    fn test_raw_encoding() {
        let value = calc_lex(&doc1_matches(), 0.0, 0, Encoding::Raw, Precision::default()).unwrap();
        assert_eq!(value, 75.0);

        let value = calc_lex(&doc1_matches(), 1.5, 25, Encoding::Raw, Precision::default()).unwrap();
        assert_eq!(value, 76.5);
    }

    #[test]
    fn test_frequency_encoding() {
        let value =
            calc_lex(&doc1_matches(), 0.0, 25, Encoding::Frequency, Precision::default()).unwrap();
        assert_eq!(value, 33.24);

        let value =
            calc_lex(&doc1_matches(), 23.2189, 25, Encoding::Frequency, Precision::default())
                .unwrap();
        assert_eq!(value, 56.4589);
    }

    #[test]
    fn test_percent_encoding_ignores_intercept() {
        let value = calc_lex(&doc1_matches(), 100.0, 25, Encoding::Percent, Precision::default())
            .unwrap();
        assert_eq!(value, 0.6);
    }

    #[test]
    fn test_missing_word_count() {
        for encoding in [Encoding::Frequency, Encoding::Percent] {
            match calc_lex(&doc1_matches(), 0.0, 0, encoding, Precision::default()) {
                Err(LexScoreError::MissingWordCount(e)) => assert_eq!(e, encoding),
                other => panic!("Expected MissingWordCount, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_matches() {
        let value = calc_lex(&[], 2.5, 10, Encoding::Frequency, Precision::default()).unwrap();
        assert_eq!(value, 2.5);

        let value = calc_lex(&[], 2.5, 10, Encoding::Percent, Precision::default()).unwrap();
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_invalid_records_and_intercept() {
        let bad = vec![MatchRecord::new("a", 0, 1.0)];
        assert!(matches!(
            calc_lex(&bad, 0.0, 5, Encoding::Raw, Precision::default()),
            Err(LexScoreError::InvalidInput(_))
        ));
        assert!(matches!(
            calc_lex(&doc1_matches(), f64::NAN, 5, Encoding::Raw, Precision::default()),
            Err(LexScoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_precision_rounding() {
        let matches = vec![MatchRecord::new("a", 1, 1.0)];
        let value = calc_lex(&matches, 0.0, 3, Encoding::Frequency, Precision::new(2)).unwrap();
        assert_eq!(value, 0.33);

        let value = calc_lex(&matches, 0.0, 3, Encoding::Frequency, Precision::new(0)).unwrap();
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_weighted_relative_frequencies() {
        let weights: CategoryWeights = [("a", 3.0), ("b", 87.0), ("c", -15.0)]
            .into_iter()
            .map(|(t, w)| (t.to_string(), w))
            .collect();
        let tokens = "a a a a a b b b c c c c c c c c d d d d f f f f f f f f f f";
        let freqs = FrequencyMap::from_tokens(tokens.split(' '));

        let values = weighted_relative_frequencies(&weights, &freqs);
        let tokens: Vec<&str> = values.iter().map(|v| v.token.as_str()).collect();
        assert_eq!(tokens, vec!["a", "b", "c"]);
        assert_eq!(values[0].value, 0.5);
        assert_eq!(values[1].value, 8.7);
        assert_eq!(values[2].value, -4.0);

        let naive: f64 = values.iter().map(|v| v.value).sum();
        assert_eq!(naive, 5.199999999999999);
        assert_eq!(sum_values(values.iter().map(|v| v.value), Precision::SUM_DEFAULT), 5.2);
        assert_eq!(lexicon_value(&values, 23.2189, Precision::SUM_DEFAULT), 28.4189);
    }

    #[test]
    fn test_weighted_relative_frequencies_empty() {
        let weights: CategoryWeights = [("a".to_string(), 1.0)].into_iter().collect();
        assert!(weighted_relative_frequencies(&weights, &FrequencyMap::new()).is_empty());
    }
}
