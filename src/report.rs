//! Match reporting.
//!
//! [`prepare_matches`] turns a [`MatchSet`] into a sorted list of
//! [`ReportRecord`]s, each carrying the token's contribution to the lexical
//! value, together with a [`MatchSummary`] of how much of the text matched.
//!
//! Value computation and reporting are independent; a caller may compute one
//! without the other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aggregate::{Encoding, contribution};
use crate::error::{LexScoreError, Result};
use crate::matcher::MatchRecord;
use crate::precision::{Precision, round_to};

/// Decimal places of [`MatchSummary::percent_matches`].
const PERCENT_PLACES: u32 = 2;

/// Field that orders a match report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Token frequency
    Frequency,
    /// Token weight
    Weight,
    /// Contribution to the lexical value
    #[default]
    Lex,
}

impl SortKey {
    /// Get the canonical name of the sort key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Frequency => "frequency",
            SortKey::Weight => "weight",
            SortKey::Lex => "lex",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = LexScoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "freq" | "frequency" => Ok(SortKey::Frequency),
            "weight" => Ok(SortKey::Weight),
            "lex" => Ok(SortKey::Lex),
            other => Err(LexScoreError::invalid_input(format!(
                "unknown sort key '{other}'"
            ))),
        }
    }
}

/// A matched token with its contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub token: String,
    pub frequency: usize,
    pub weight: f64,
    pub contribution: f64,
}

/// Summary statistics of a match report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Sum of all record frequencies.
    pub total_matches: usize,
    /// Number of records.
    pub total_unique_matches: usize,
    /// Word count as supplied.
    pub total_tokens: usize,
    /// `total_matches / total_tokens * 100`, rounded to two places.
    /// NaN when `total_tokens` is zero.
    pub percent_matches: f64,
}

/// Sorted records plus summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub records: Vec<ReportRecord>,
    pub summary: MatchSummary,
}

/// Sort records ascending by `key`. Equal records keep their relative order.
pub fn sort_records(records: &mut [ReportRecord], key: SortKey) {
    match key {
        SortKey::Frequency => records.sort_by_key(|record| record.frequency),
        SortKey::Weight => records.sort_by(|a, b| a.weight.total_cmp(&b.weight)),
        SortKey::Lex => records.sort_by(|a, b| a.contribution.total_cmp(&b.contribution)),
    }
}

/// Build a sorted match report.
pub fn prepare_matches(
    matches: &[MatchRecord],
    encoding: Encoding,
    word_count: usize,
    sort_by: SortKey,
    precision: Precision,
) -> Result<MatchReport> {
    encoding.check_word_count(word_count)?;

    let mut records = Vec::with_capacity(matches.len());
    let mut total_matches = 0;
    for record in matches {
        record.validate()?;
        records.push(ReportRecord {
            token: record.token.clone(),
            frequency: record.frequency,
            weight: precision.round(record.weight),
            contribution: precision.round(contribution(record, encoding, word_count)),
        });
        total_matches += record.frequency;
    }

    sort_records(&mut records, sort_by);

    let percent_matches = if word_count == 0 {
        f64::NAN
    } else {
        round_to(
            (total_matches as f64 / word_count as f64) * 100.0,
            PERCENT_PLACES,
        )
    };

    Ok(MatchReport {
        summary: MatchSummary {
            total_matches,
            total_unique_matches: records.len(),
            total_tokens: word_count,
            percent_matches,
        },
        records,
    })
}
