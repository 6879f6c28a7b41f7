//! Token frequency counting.
//!
//! [`FrequencyMap`] counts every distinct token of a token sequence in a single
//! pass. The sum of all counts always equals the length of the sequence, which
//! is exposed as [`FrequencyMap::word_count`].

use ahash::AHashMap;

/// Occurrence count of each distinct token in a token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    /// Count per distinct token (always positive)
    counts: AHashMap<String, usize>,
    /// Total number of tokens counted
    word_count: usize,
}

impl FrequencyMap {
    /// Create an empty frequency map.
    pub fn new() -> Self {
        FrequencyMap {
            counts: AHashMap::new(),
            word_count: 0,
        }
    }

    /// Count the tokens of a sequence.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = FrequencyMap::new();
        for token in tokens {
            map.add(token.as_ref());
        }
        map
    }

    /// Count one occurrence of a token.
    pub fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_owned(), 1);
            }
        }
        self.word_count += 1;
    }

    /// Get the count of a token, if it occurs at all.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.counts.get(token).copied()
    }

    /// Check if a token occurs.
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Iterate over `(token, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no token has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of tokens counted ("wc").
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FrequencyMap::from_tokens(iter)
    }
}

/// Count token frequencies in a single pass.
pub fn count_frequencies<I, S>(tokens: I) -> FrequencyMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FrequencyMap::from_tokens(tokens)
}

/// Get every position at which `token` occurs in `tokens`.
pub fn indexes_of<S: AsRef<str>>(tokens: &[S], token: &str) -> Vec<usize> {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, candidate)| candidate.as_ref() == token)
        .map(|(index, _)| index)
        .collect()
}
