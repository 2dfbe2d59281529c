// Toxic-phrase list: loading, and counting phrase occurrences in text.
//
// Phrases come from plain text files, one per line. Each phrase is stored
// twice — tokenized as written and fully lowercased — and matching runs two
// containment passes (exact-case and lowercased text), taking the max so the
// same phrase is never double-counted across passes.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use aho_corasick::AhoCorasick;
use anyhow::{Context, Result};
use tracing::info;

use super::tokenizer::Tokenizer;

/// An immutable set of tokenized toxic phrases with a multi-pattern matcher
/// built over it. Safe to share across threads; nothing mutates after load.
#[derive(Debug)]
pub struct ToxicityList {
    tokenizer: Tokenizer,
    /// Stored phrase variants, indexed by automaton pattern id
    phrases: Vec<String>,
    ac: AhoCorasick,
}

impl ToxicityList {
    /// Load and union phrases from one or more list files.
    ///
    /// Every path must exist and be readable — callers decide beforehand
    /// which optional lists to include. Duplicate phrases across files are
    /// set-union no-ops, so file order is irrelevant.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut raw = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let file = File::open(path)
                .with_context(|| format!("Failed to open phrase list {}", path.display()))?;
            for line in BufReader::new(file).lines() {
                let line = line
                    .with_context(|| format!("Failed to read phrase list {}", path.display()))?;
                raw.push(line);
            }
        }

        let list = Self::from_phrases(raw.iter().map(String::as_str))?;
        info!(
            files = paths.len(),
            variants = list.len(),
            "Loaded toxicity list"
        );
        Ok(list)
    }

    /// Build a list directly from phrase strings (blank entries are skipped).
    pub fn from_phrases<'a, I>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokenizer = Tokenizer::new();

        let mut set: HashSet<String> = HashSet::new();
        for phrase in phrases {
            let phrase = phrase.trim();
            if phrase.is_empty() {
                continue;
            }
            let tokenized = tokenizer.tokenize(phrase);
            set.insert(tokenized.to_lowercase());
            set.insert(tokenized);
        }

        let phrases: Vec<String> = set.into_iter().collect();
        let ac = AhoCorasick::new(&phrases).context("Failed to build phrase automaton")?;

        Ok(Self {
            tokenizer,
            phrases,
            ac,
        })
    }

    /// Number of stored phrase variants (each list entry contributes its
    /// original-case and lowercased forms, deduplicated).
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Pattern ids of the distinct stored phrases contained in `haystack`.
    fn distinct_matches(&self, haystack: &str) -> HashSet<usize> {
        self.ac
            .find_overlapping_iter(haystack)
            .map(|m| m.pattern().as_usize())
            .collect()
    }

    /// How many distinct stored phrases occur in the tokenized form of `s`.
    ///
    /// Counts presence, not frequency: each stored variant contributes at
    /// most 1 however often it appears. The exact-case and lowercased-text
    /// passes are combined by max, which catches toxic phrases regardless of
    /// the input's casing without double-counting.
    pub fn toxicity_count(&self, s: &str) -> usize {
        let tokenized = self.tokenizer.tokenize(s);
        let regular = self.distinct_matches(&tokenized).len();
        let lowercased = self.distinct_matches(&tokenized.to_lowercase()).len();
        regular.max(lowercased)
    }

    /// The distinct phrases detected in `s` (case-insensitive pass), sorted
    /// for stable display. Evidence only — counting goes through
    /// `toxicity_count`.
    pub fn matched_phrases(&self, s: &str) -> Vec<&str> {
        let lowered = self.tokenizer.tokenize(s).to_lowercase();
        let mut matched: Vec<&str> = self
            .distinct_matches(&lowered)
            .into_iter()
            .map(|i| self.phrases[i].as_str())
            .collect();
        matched.sort_unstable();
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stores_both_case_variants() {
        let list = ToxicityList::from_phrases(["Damn"]).unwrap();
        // " Damn " and " damn "
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_lowercase_phrase_stored_once() {
        let list = ToxicityList::from_phrases(["damn"]).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_blank_entries_skipped() {
        let list = ToxicityList::from_phrases(["", "  ", "damn"]).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.toxicity_count(""), 0);
    }

    #[test]
    fn test_presence_not_frequency() {
        let list = ToxicityList::from_phrases(["damn"]).unwrap();
        assert_eq!(list.toxicity_count("damn damn damn"), 1);
    }

    #[test]
    fn test_matched_phrases_evidence() {
        let list = ToxicityList::from_phrases(["damn", "hell"]).unwrap();
        let matched = list.matched_phrases("DAMN that hell-hole");
        assert_eq!(matched, vec![" damn ", " hell "]);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = ToxicityList::load(&["/nonexistent/twl.txt"]).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/twl.txt"));
    }
}
