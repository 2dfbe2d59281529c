// Toxicity tokenizer — normalizes text into a canonical space-delimited form.
//
// Every Unicode punctuation or symbol character, and every Han ideograph
// (written without spacing), becomes its own token. Alphabetic runs in other
// scripts are left untouched. The result is wrapped in single padding spaces
// so that " phrase " substring matches cannot merge with adjacent tokens.

use regex::Regex;

use super::normalize::replace_unicode_punct;

/// Characters isolated into their own tokens.
const SPLIT_PATTERN: &str = r"[\p{P}\p{S}\p{Han}]";

/// Owns the compiled split pattern; build once, share freely (immutable).
#[derive(Debug)]
pub struct Tokenizer {
    split: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            // SPLIT_PATTERN is a compile-time constant, so this cannot fail
            split: Regex::new(SPLIT_PATTERN).expect("split pattern is valid"),
        }
    }

    /// Normalize `s` into the canonical space-delimited token string.
    ///
    /// Idempotent, and total over any Unicode input. The output always
    /// carries exactly one leading and one trailing space; an empty or
    /// whitespace-only input yields `"  "`.
    pub fn tokenize(&self, s: &str) -> String {
        let normalized = replace_unicode_punct(s.trim());
        let spaced = self.split.replace_all(&normalized, " ${0} ");
        let collapsed: Vec<&str> = spaced.split_whitespace().collect();
        format!(" {} ", collapsed.join(" "))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
