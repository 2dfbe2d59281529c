// Colored terminal output for filtering summaries and single-text scores.
//
// Everything here writes to stderr: stdout carries the filtered data stream
// when no output file is given, so human-facing reporting must not
// interleave with it.

use colored::Colorize;

use crate::dataset::FilteringCounts;

/// Display the end-of-run summary for a filtering pass.
pub fn display_summary(counts: &FilteringCounts) {
    let rejected = counts.lines - counts.kept;

    eprintln!(
        "\n{}",
        format!("=== Filtering Summary ({} lines) ===", counts.lines).bold()
    );
    eprintln!("  Kept:     {}", counts.kept);
    eprintln!("  Rejected: {}", rejected);

    if counts.max_toxicity > 0 {
        eprintln!(
            "  {} {} sides over the toxicity threshold",
            "!".red(),
            counts.max_toxicity
        );
    }
    if counts.max_toxicity_difference > 0 {
        eprintln!(
            "  {} {} lines with divergent src/tgt toxicity",
            "~".yellow(),
            counts.max_toxicity_difference
        );
    }
    if rejected == 0 {
        eprintln!("  {}", "No toxic lines detected.".green());
    }
}

/// Display a single text's toxicity score with the matched phrases as
/// evidence.
pub fn display_score(lang: &str, text: &str, count: usize, matched: &[&str]) {
    eprintln!("\n{}", format!("=== Toxicity score ({lang}) ===").bold());
    eprintln!("  Text:  {}", truncate_chars(text, 120).dimmed());

    let count_str = if count > 0 {
        count.to_string().red().bold()
    } else {
        count.to_string().green()
    };
    eprintln!("  Count: {count_str}");

    if !matched.is_empty() {
        eprintln!("  Matched phrases:");
        for phrase in matched {
            eprintln!("    - \"{}\"", phrase.trim());
        }
    }
}

/// Truncate a string to at most `max_chars` characters, with the ellipsis
/// counting toward the budget (a budget under 3 degenerates to "...").
/// Counts chars, not bytes, so multi-byte text never splits mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept = max_chars.saturating_sub(3);
    let mut truncated: String = text.chars().take(kept).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_chars("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncated_result_fits_the_budget() {
        // The ellipsis counts toward max_chars
        for max in 3..=10 {
            let out = truncate_chars("a long enough string", max);
            assert!(
                out.chars().count() <= max,
                "Budget {max} exceeded: {out:?}"
            );
            assert!(out.ends_with("..."));
        }
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        assert_eq!(truncate_chars("héllo wörld", 8), "héllo...");
        assert_eq!(truncate_chars("你好世界你好", 5), "你好...");
    }

    #[test]
    fn test_truncate_tiny_budget() {
        assert_eq!(truncate_chars("hello world", 2), "...");
    }
}
