// Threshold-based toxicity filter for parallel dataset lines.
//
// One ToxicityList per side: the source language's list, optionally the
// target language's, each unioned with the shared auxiliary list when one is
// configured. A missing per-language list silently disables detection for
// that side; a missing auxiliary list is an error because it was explicitly
// configured.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::config::FilterConfig;
use crate::dataset::{DatasetLine, FilteringCounts, LabeledLine};
use crate::toxicity::list::ToxicityList;

#[derive(Debug)]
pub struct ToxicityFilter {
    max_toxicity: Option<usize>,
    max_toxicity_difference: Option<usize>,
    src_list: Option<ToxicityList>,
    tgt_list: Option<ToxicityList>,
}

/// Load the phrase list for one side: the per-language file when it exists,
/// plus the auxiliary list. Returns None when neither applies — that side
/// degrades to pass-through (never toxic).
pub fn load_side(config: &FilterConfig, lang: Option<&str>) -> Result<Option<ToxicityList>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    if let Some(lang) = lang {
        let twl_path = config.resolve_twl_path(lang);
        if twl_path.is_file() {
            paths.push(twl_path);
        } else {
            info!(
                lang,
                path = %twl_path.display(),
                "No phrase list for language; its detection is disabled"
            );
        }
    }

    if let Some(aux) = &config.aux_twl_path {
        if !aux.is_file() {
            anyhow::bail!("Auxiliary phrase list not found: {}", aux.display());
        }
        paths.push(aux.clone());
    }

    if paths.is_empty() {
        return Ok(None);
    }
    Ok(Some(ToxicityList::load(&paths)?))
}

impl ToxicityFilter {
    pub fn new(config: &FilterConfig) -> Result<Self> {
        let src_list = load_side(config, Some(config.src_lang.as_str()))?;
        // The auxiliary list applies to the target side even without a
        // target language code, since it is language-agnostic
        let tgt_list = load_side(config, config.tgt_lang.as_deref())?;

        Ok(Self {
            max_toxicity: config.max_toxicity,
            max_toxicity_difference: config.max_toxicity_difference,
            src_list,
            tgt_list,
        })
    }

    /// Label one line with its per-side toxicity verdict, updating `counts`.
    ///
    /// Counts are computed whenever a side has a matcher (and, for the
    /// target, text); the max_toxicity decision only fires when that
    /// threshold is configured. The difference rule rejects a line when both
    /// sides were scored and their counts diverge by more than the limit,
    /// independent of max_toxicity.
    pub fn filter_line(&self, line: DatasetLine, counts: &mut FilteringCounts) -> LabeledLine {
        let mut src_toxic = false;
        let mut tgt_toxic = false;
        let mut difference_exceeded = false;

        let src_count = self
            .src_list
            .as_ref()
            .map(|list| list.toxicity_count(&line.src));
        if let (Some(count), Some(max)) = (src_count, self.max_toxicity) {
            if count > max {
                counts.max_toxicity += 1;
                src_toxic = true;
            }
        }

        let tgt_count = match (&line.tgt, &self.tgt_list) {
            (Some(tgt), Some(list)) => Some(list.toxicity_count(tgt)),
            _ => None,
        };
        if let (Some(count), Some(max)) = (tgt_count, self.max_toxicity) {
            if count > max {
                counts.max_toxicity += 1;
                tgt_toxic = true;
            }
        }

        if let (Some(src), Some(tgt), Some(max_diff)) =
            (src_count, tgt_count, self.max_toxicity_difference)
        {
            if src.abs_diff(tgt) > max_diff {
                counts.max_toxicity_difference += 1;
                difference_exceeded = true;
            }
        }

        LabeledLine {
            line,
            src_toxic,
            tgt_toxic,
            difference_exceeded,
        }
    }
}
