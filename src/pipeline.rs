// Line-by-line filtering pass over a bitext stream.
//
// Kept lines stream to one writer, rejected lines optionally to another, and
// the running counters come back to the caller. All phrase-list I/O happened
// at filter construction; this loop is pure computation plus line I/O.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::dataset::{DatasetLine, FilteringCounts};
use crate::filter::ToxicityFilter;

/// Filter every line of `input`, writing survivors to `kept` and rejected
/// lines to `rejected` when a writer is supplied.
pub fn run<R: BufRead>(
    filter: &ToxicityFilter,
    input: R,
    kept: &mut dyn Write,
    mut rejected: Option<&mut dyn Write>,
) -> Result<FilteringCounts> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  Filtering {spinner} {pos} lines ({per_sec})")
            .unwrap(),
    );

    let mut counts = FilteringCounts::default();

    for line in input.lines() {
        let line = line.context("Failed to read input line")?;
        counts.lines += 1;

        let labeled = filter.filter_line(DatasetLine::from_tsv(&line), &mut counts);

        if labeled.is_toxic() {
            if let Some(out) = rejected.as_deref_mut() {
                writeln!(out, "{}", labeled.line.to_tsv())
                    .context("Failed to write rejected line")?;
            }
        } else {
            counts.kept += 1;
            writeln!(kept, "{}", labeled.line.to_tsv()).context("Failed to write kept line")?;
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        lines = counts.lines,
        kept = counts.kept,
        rejected = counts.lines - counts.kept,
        "Filtering pass complete"
    );

    Ok(counts)
}
