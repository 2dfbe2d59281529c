// End-to-end pipeline test: stream a small bitext TSV through the filter
// and check the kept/rejected split, the TSV pass-through fidelity, and the
// counters (including their JSON shape for --stats-json).

use std::fs;
use std::io::Cursor;

use scour::config::FilterConfig;
use scour::filter::ToxicityFilter;
use scour::pipeline;

fn build_filter(max_toxicity: Option<usize>, max_diff: Option<usize>) -> ToxicityFilter {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fr_twl.txt"), "merde\nputain\n").unwrap();
    fs::write(dir.path().join("en_twl.txt"), "damn\n").unwrap();

    let config = FilterConfig::new(
        Some(format!("{}/{{lang}}_twl.txt", dir.path().display())),
        None,
        "fr".to_string(),
        Some("en".to_string()),
        max_toxicity,
        max_diff,
    )
    .unwrap();

    // The lists are read at construction, so the temp dir can go away after
    ToxicityFilter::new(&config).unwrap()
}

#[test]
fn pipeline_splits_kept_and_rejected() {
    let filter = build_filter(Some(0), None);

    let input = "bonjour le monde\thello world\n\
                 quelle merde !\twhat a damn mess\n\
                 ligne propre\tclean line\n";

    let mut kept = Vec::new();
    let mut rejected = Vec::new();
    let counts = pipeline::run(
        &filter,
        Cursor::new(input),
        &mut kept,
        Some(&mut rejected),
    )
    .unwrap();

    let kept = String::from_utf8(kept).unwrap();
    let rejected = String::from_utf8(rejected).unwrap();

    assert_eq!(
        kept,
        "bonjour le monde\thello world\nligne propre\tclean line\n"
    );
    assert_eq!(rejected, "quelle merde !\twhat a damn mess\n");

    assert_eq!(counts.lines, 3);
    assert_eq!(counts.kept, 2);
    // Both sides of the toxic line exceeded the threshold
    assert_eq!(counts.max_toxicity, 2);
}

#[test]
fn pipeline_without_rejected_writer() {
    let filter = build_filter(Some(0), None);

    let input = "quelle merde !\twhat a damn mess\nclean\tclean\n";
    let mut kept = Vec::new();
    let counts = pipeline::run(&filter, Cursor::new(input), &mut kept, None).unwrap();

    assert_eq!(counts.lines, 2);
    assert_eq!(counts.kept, 1);
    assert_eq!(String::from_utf8(kept).unwrap(), "clean\tclean\n");
}

#[test]
fn pipeline_difference_rule_end_to_end() {
    let filter = build_filter(None, Some(1));

    // src has two toxic phrases, tgt none: |2 - 0| > 1 rejects the line
    let input = "merde putain\ta clean translation\nbonjour\thello\n";
    let mut kept = Vec::new();
    let counts = pipeline::run(&filter, Cursor::new(input), &mut kept, None).unwrap();

    assert_eq!(counts.lines, 2);
    assert_eq!(counts.kept, 1);
    assert_eq!(counts.max_toxicity, 0);
    assert_eq!(counts.max_toxicity_difference, 1);
}

#[test]
fn counters_serialize_for_stats_json() {
    let filter = build_filter(Some(0), None);

    let input = "quelle merde !\twhat a damn mess\n";
    let mut kept = Vec::new();
    let counts = pipeline::run(&filter, Cursor::new(input), &mut kept, None).unwrap();

    let json = serde_json::to_value(&counts).unwrap();
    assert_eq!(json["lines"], 1);
    assert_eq!(json["kept"], 0);
    assert_eq!(json["max_toxicity"], 2);
    assert_eq!(json["max_toxicity_difference"], 0);
}
