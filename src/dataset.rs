// Dataset line model for parallel (bitext) corpora.
//
// Lines arrive as TSV: source text, optionally followed by a tab and the
// target-language text. The filter attaches per-side verdicts without
// modifying the line itself.

use serde::Serialize;

/// One record of a translation dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLine {
    pub src: String,
    pub tgt: Option<String>,
}

impl DatasetLine {
    pub fn new(src: impl Into<String>, tgt: Option<String>) -> Self {
        Self {
            src: src.into(),
            tgt,
        }
    }

    /// Parse a TSV line. A line without a tab is monolingual (no target).
    pub fn from_tsv(line: &str) -> Self {
        match line.split_once('\t') {
            Some((src, tgt)) => Self {
                src: src.to_string(),
                tgt: Some(tgt.to_string()),
            },
            None => Self {
                src: line.to_string(),
                tgt: None,
            },
        }
    }

    pub fn to_tsv(&self) -> String {
        match &self.tgt {
            Some(tgt) => format!("{}\t{}", self.src, tgt),
            None => self.src.clone(),
        }
    }
}

/// A dataset line with its toxicity verdict attached — composition over the
/// plain line, one boolean per side plus the cross-side difference flag.
#[derive(Debug, Clone)]
pub struct LabeledLine {
    pub line: DatasetLine,
    pub src_toxic: bool,
    pub tgt_toxic: bool,
    /// Source and target toxicity counts diverged past the configured limit
    pub difference_exceeded: bool,
}

impl LabeledLine {
    /// Whether the filter rejects this line.
    pub fn is_toxic(&self) -> bool {
        self.src_toxic || self.tgt_toxic || self.difference_exceeded
    }
}

/// Running totals for one filtering pass.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FilteringCounts {
    pub lines: u64,
    pub kept: u64,
    /// Sides whose toxicity count exceeded max_toxicity. A line with both
    /// sides over the threshold contributes twice.
    pub max_toxicity: u64,
    /// Lines rejected because the src/tgt counts diverged too far
    pub max_toxicity_difference: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tsv_bitext() {
        let line = DatasetLine::from_tsv("bonjour\thello");
        assert_eq!(line.src, "bonjour");
        assert_eq!(line.tgt.as_deref(), Some("hello"));
    }

    #[test]
    fn test_from_tsv_monolingual() {
        let line = DatasetLine::from_tsv("bonjour");
        assert_eq!(line.src, "bonjour");
        assert_eq!(line.tgt, None);
    }

    #[test]
    fn test_tsv_round_trip() {
        for raw in ["a\tb", "only source", "\tempty source"] {
            assert_eq!(DatasetLine::from_tsv(raw).to_tsv(), raw);
        }
    }

    #[test]
    fn test_is_toxic_any_flag() {
        let line = DatasetLine::new("x", None);
        let clean = LabeledLine {
            line: line.clone(),
            src_toxic: false,
            tgt_toxic: false,
            difference_exceeded: false,
        };
        assert!(!clean.is_toxic());

        let diff_only = LabeledLine {
            line,
            src_toxic: false,
            tgt_toxic: false,
            difference_exceeded: true,
        };
        assert!(diff_only.is_toxic());
    }
}
