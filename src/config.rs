//! Scoring configuration.

use serde::{Deserialize, Serialize};

use crate::aggregate::Encoding;
use crate::error::Result;
use crate::matcher::WeightThreshold;
use crate::precision::Precision;
use crate::report::SortKey;

/// Options shared by batch scoring and match reporting.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    /// Aggregation formula.
    pub encoding: Encoding,

    /// Decimal places of every reported value.
    pub precision: Precision,

    /// Exclusive weight bounds applied while matching.
    pub threshold: WeightThreshold,

    /// Field used to order match reports.
    pub sort_by: SortKey,
}

impl ScoringOptions {
    /// Create options with the given encoding.
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            ..Default::default()
        }
    }

    /// Set the encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the precision, clamping out-of-range values.
    pub fn with_precision(mut self, places: i64) -> Self {
        self.precision = Precision::new(places);
        self
    }

    /// Set the exclusive weight bounds.
    pub fn with_threshold(mut self, min: Option<f64>, max: Option<f64>) -> Result<Self> {
        self.threshold = WeightThreshold::new(min, max)?;
        Ok(self)
    }

    /// Set the report sort key.
    pub fn with_sort_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ScoringOptions::default();
        assert_eq!(options.encoding, Encoding::Frequency);
        assert_eq!(options.precision.places(), 9);
        assert_eq!(options.threshold, WeightThreshold::default());
        assert_eq!(options.sort_by, SortKey::Lex);
    }

    #[test]
    fn test_builder() {
        let options = ScoringOptions::new(Encoding::Raw)
            .with_precision(99)
            .with_sort_by(SortKey::Weight)
            .with_threshold(Some(-1.0), Some(1.0))
            .unwrap();

        assert_eq!(options.encoding, Encoding::Raw);
        assert_eq!(options.precision.places(), 14);
        assert_eq!(options.sort_by, SortKey::Weight);
        assert_eq!(options.threshold.min, Some(-1.0));
        assert_eq!(options.threshold.max, Some(1.0));

        assert!(options.with_threshold(None, Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let options: ScoringOptions =
            serde_json::from_str(r#"{"encoding": "percent", "precision": 4}"#).unwrap();
        assert_eq!(options.encoding, Encoding::Percent);
        assert_eq!(options.precision.places(), 4);
        assert_eq!(options.sort_by, SortKey::Lex);
    }
}
