//! Display helpers for token sequences.
//!
//! These are conveniences for printing matched text; they play no part in
//! scoring.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SPACE_BEFORE_CLOSING: Regex = Regex::new(r"\s+([.,!?;:%)\]}])").unwrap();
    static ref SPACE_AFTER_OPENING: Regex = Regex::new(r"([(\[{])\s+").unwrap();
    static ref REPEATED_SPACE: Regex = Regex::new(r"\s{2,}").unwrap();
}

/// Join tokens into a display string.
///
/// Tokens are separated by single spaces, with no space before closing
/// punctuation or after opening brackets.
///
/// ```
/// use lexscore::format::join_tokens;
///
/// assert_eq!(join_tokens(&["Hello", ",", "world", "!"]), "Hello, world!");
/// assert_eq!(join_tokens(&["see", "(", "below", ")"]), "see (below)");
/// ```
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let joined = tokens
        .iter()
        .map(|token| token.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    let collapsed = REPEATED_SPACE.replace_all(joined.trim(), " ");
    let closed = SPACE_BEFORE_CLOSING.replace_all(&collapsed, "$1");
    SPACE_AFTER_OPENING.replace_all(&closed, "$1").into_owned()
}

/// Join each group of tokens into its own display string.
pub fn join_token_groups<S: AsRef<str>>(groups: &[Vec<S>]) -> Vec<String> {
    groups.iter().map(|group| join_tokens(group)).collect()
}
