//! # lexscore
//!
//! Lexicon-based "lexical values" for tokenized text.
//!
//! Given a lexicon of weighted categories and a token sequence, lexscore counts
//! token frequencies, matches them against each category and aggregates one
//! value per category.
//!
//! ## Pipeline
//!
//! - [`frequency`] - single-pass token counting
//! - [`matcher`] - lexicon matching with exclusive weight thresholds
//! - [`aggregate`] - `raw`, `frequency` and `percent` encodings with drift correction
//! - [`report`] - sorted match reports with summary statistics
//! - [`pipeline`] - reusable single-category scorers and batch scoring
//!
//! Tokenization and lexicon file parsing are left to the caller.
//!
//! ## Example
//!
//! ```
//! use lexscore::prelude::*;
//! use serde_json::json;
//!
//! let lexicon = Lexicon::from_json(&json!({ "lex": { "a": 3, "b": 87, "c": -15 } })).unwrap();
//! let mut intercepts = Intercepts::new();
//! intercepts.insert("lex", 23.2189);
//!
//! let doc: Vec<&str> = "a a b b b b b b b b b b c c c e e e e e e f f f f".split(' ').collect();
//! let values = score_lexicon(&doc, &lexicon, &intercepts, &ScoringOptions::default()).unwrap();
//!
//! assert_eq!(values["lex"], 56.4589);
//! ```

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod frequency;
pub mod lexicon;
pub mod matcher;
pub mod pipeline;
pub mod precision;
pub mod report;

pub mod prelude {
    pub use crate::aggregate::{Encoding, calc_lex};
    pub use crate::config::ScoringOptions;
    pub use crate::error::{LexScoreError, Result};
    pub use crate::frequency::{FrequencyMap, count_frequencies};
    pub use crate::lexicon::{CategoryWeights, Intercepts, Lexicon};
    pub use crate::matcher::{LexiconMatcher, MatchRecord, MatchSet, WeightThreshold, match_lexicon};
    pub use crate::pipeline::{LexScorer, make_scorer, score_lexicon};
    pub use crate::precision::Precision;
    pub use crate::report::{MatchReport, SortKey, prepare_matches};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
