//! Tokenization and the lowercase-word filter.
//!
//! Tokens are whitespace-delimited; a token qualifies as a word only when
//! every one of its characters is a lowercase ASCII letter. The test applies
//! to the whole token — "sat." is rejected outright, never trimmed to "sat".

use std::collections::BTreeSet;

/// Whole-token predicate: non-empty and entirely `a`–`z`.
pub fn is_lowercase_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_lowercase())
}

/// Collect the unique qualifying words of `text`.
///
/// With `case_insensitive`, tokens are ASCII-lowercased before the predicate
/// runs, so "CAT" and "cat" land on one entry; without it, any token
/// containing an uppercase letter is rejected. The returned set iterates in
/// sorted order, which is what makes harvest output deterministic.
pub fn collect_words(text: &str, case_insensitive: bool) -> BTreeSet<String> {
    let mut words = BTreeSet::new();
    for token in text.split_whitespace() {
        if case_insensitive {
            let lowered = token.to_ascii_lowercase();
            if is_lowercase_word(&lowered) {
                words.insert(lowered);
            }
        } else if is_lowercase_word(token) {
            words.insert(token.to_string());
        }
    }
    words
}
