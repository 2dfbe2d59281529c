// Scour: toxic-phrase filtering for parallel translation corpora.
//
// This is the library root. The toxicity module holds the core tokenizer
// and phrase matcher; the rest is the filtering stage built on top of it.

pub mod config;
pub mod dataset;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod toxicity;
