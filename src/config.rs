use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Placeholder in the phrase-list path template, replaced by a language code.
pub const LANG_PLACEHOLDER: &str = "{lang}";

/// Resolve the phrase-list path template from a CLI flag, falling back to
/// the SCOUR_TWL_TEMPLATE env var (the .env file is loaded at startup via
/// dotenvy). The template must contain the `{lang}` placeholder.
pub fn resolve_template(cli: Option<String>) -> Result<String> {
    let template = match cli.or_else(|| env::var("SCOUR_TWL_TEMPLATE").ok()) {
        Some(t) => t,
        None => anyhow::bail!(
            "No phrase-list template configured.\n\
             Pass --template or set SCOUR_TWL_TEMPLATE in your .env file."
        ),
    };
    if !template.contains(LANG_PLACEHOLDER) {
        anyhow::bail!(
            "Phrase-list template '{template}' has no {LANG_PLACEHOLDER} placeholder.\n\
             Example: lists/{LANG_PLACEHOLDER}_twl.txt"
        );
    }
    Ok(template)
}

/// Resolve the optional auxiliary list path (CLI flag, then SCOUR_AUX_TWL).
pub fn resolve_aux(cli: Option<PathBuf>) -> Option<PathBuf> {
    cli.or_else(|| env::var("SCOUR_AUX_TWL").ok().map(PathBuf::from))
}

/// Matcher-construction parameters for one filtering run.
pub struct FilterConfig {
    /// Path template with a `{lang}` placeholder for per-language lists
    pub twl_path_template: String,
    /// Shared language-agnostic list unioned into every side's set
    pub aux_twl_path: Option<PathBuf>,
    pub src_lang: String,
    pub tgt_lang: Option<String>,
    /// A side is toxic when its count strictly exceeds this. Absent ⇒ the
    /// threshold check is disabled and no line is ever flagged.
    pub max_toxicity: Option<usize>,
    /// Reject a line when |src - tgt| counts exceed this (needs both sides)
    pub max_toxicity_difference: Option<usize>,
}

impl FilterConfig {
    pub fn new(
        template: Option<String>,
        aux: Option<PathBuf>,
        src_lang: String,
        tgt_lang: Option<String>,
        max_toxicity: Option<usize>,
        max_toxicity_difference: Option<usize>,
    ) -> Result<Self> {
        Ok(Self {
            twl_path_template: resolve_template(template)?,
            aux_twl_path: resolve_aux(aux),
            src_lang,
            tgt_lang,
            max_toxicity,
            max_toxicity_difference,
        })
    }

    /// The phrase-list path for one language code.
    pub fn resolve_twl_path(&self, lang: &str) -> PathBuf {
        PathBuf::from(self.twl_path_template.replace(LANG_PLACEHOLDER, lang))
    }
}
