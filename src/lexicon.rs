//! Lexicon and intercept types.
//!
//! A [`Lexicon`] maps category names to [`CategoryWeights`], each of which maps
//! tokens to numeric weights. Categories are independent: the same token may
//! carry different weights in different categories.
//!
//! Both maps are ordered so that matching and reporting are stable for a given
//! input. Parsing a lexicon file is left to the caller; [`Lexicon::from_json`]
//! only validates an already-parsed JSON value at the boundary.
//!
//! # Examples
//!
//! ```
//! use lexscore::lexicon::Lexicon;
//! use serde_json::json;
//!
//! let lexicon = Lexicon::from_json(&json!({
//!     "positive": { "happy": 1.5, "good": 0.75 },
//!     "negative": { "sad": -1.25 }
//! }))
//! .unwrap();
//!
//! assert_eq!(lexicon.len(), 2);
//! assert_eq!(lexicon.get("positive").unwrap()["happy"], 1.5);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LexScoreError, Result};

/// Token to weight mapping for a single category.
pub type CategoryWeights = BTreeMap<String, f64>;

/// A set of weighted categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lexicon {
    categories: BTreeMap<String, CategoryWeights>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Lexicon {
            categories: BTreeMap::new(),
        }
    }

    /// Build a lexicon holding a single category.
    pub fn single<S: Into<String>>(category: S, weights: CategoryWeights) -> Self {
        let mut lexicon = Lexicon::new();
        lexicon.insert_category(category, weights);
        lexicon
    }

    /// Add or replace a category.
    pub fn insert_category<S: Into<String>>(&mut self, category: S, weights: CategoryWeights) {
        self.categories.insert(category.into(), weights);
    }

    /// Get the weights of a category.
    pub fn get(&self, category: &str) -> Option<&CategoryWeights> {
        self.categories.get(category)
    }

    /// Iterate over categories in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CategoryWeights)> {
        self.categories.iter()
    }

    /// Get the category names in order.
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Get the underlying category map.
    pub fn as_map(&self) -> &BTreeMap<String, CategoryWeights> {
        &self.categories
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check whether the lexicon has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Validate and convert a JSON value of the form
    /// `{ "category": { "token": weight, ... }, ... }`.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| LexScoreError::invalid_input("lexicon must be a JSON object"))?;

        let mut lexicon = Lexicon::new();
        for (category, weights) in object {
            lexicon.insert_category(category.clone(), weights_from_json(category, weights)?);
        }

        Ok(lexicon)
    }

    /// Parse and validate a lexicon from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Lexicon::from_json(&value)
    }
}

impl FromIterator<(String, CategoryWeights)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (String, CategoryWeights)>>(iter: I) -> Self {
        Lexicon {
            categories: iter.into_iter().collect(),
        }
    }
}

fn weights_from_json(category: &str, value: &Value) -> Result<CategoryWeights> {
    let object = value.as_object().ok_or_else(|| {
        LexScoreError::invalid_input(format!("category '{category}' must be a JSON object"))
    })?;

    object
        .iter()
        .map(|(token, weight)| {
            weight
                .as_f64()
                .map(|weight| (token.clone(), weight))
                .ok_or_else(|| {
                    LexScoreError::invalid_input(format!(
                        "weight of '{token}' in category '{category}' must be a number"
                    ))
                })
        })
        .collect()
}

/// Per-category intercepts. Categories without an entry use `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Intercepts(BTreeMap<String, f64>);

impl Intercepts {
    /// Create an empty intercept map.
    pub fn new() -> Self {
        Intercepts(BTreeMap::new())
    }

    /// Set the intercept of a category.
    pub fn insert<S: Into<String>>(&mut self, category: S, intercept: f64) {
        self.0.insert(category.into(), intercept);
    }

    /// Get the intercept of a category.
    pub fn get(&self, category: &str) -> f64 {
        self.0.get(category).copied().unwrap_or(0.0)
    }

    /// Validate and convert a JSON value of the form `{ "category": intercept, ... }`.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| LexScoreError::invalid_input("intercepts must be a JSON object"))?;

        object
            .iter()
            .map(|(category, intercept)| {
                intercept
                    .as_f64()
                    .map(|intercept| (category.clone(), intercept))
                    .ok_or_else(|| {
                        LexScoreError::invalid_input(format!(
                            "intercept of category '{category}' must be a number"
                        ))
                    })
            })
            .collect::<Result<BTreeMap<_, _>>>()
            .map(Intercepts)
    }
}

impl FromIterator<(String, f64)> for Intercepts {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Intercepts(iter.into_iter().collect())
    }
}
