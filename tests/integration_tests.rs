//! Integration tests for end-to-end scanning.
//!
//! These tests verify the complete scan pipeline from a source file
//! through comment filtering, classification, fallback decomposition,
//! and report formatting.

use std::path::PathBuf;

use lexscan::{read_source_lines, report::report::write_report, scan_source};

#[test]
fn test_scan_sample_file() {
    let buckets = scan_source(PathBuf::from("tests/sample_input.txt")).unwrap();

    assert_eq!(buckets.keywords, vec!["int", "int", "for", "int", "return"]);
    assert_eq!(
        buckets.identifiers,
        vec![
            "main", "count", "i", "i", "i", "i", "count", "count", "i", "print", "count", "count"
        ]
    );
    assert_eq!(buckets.constants, vec!["0", "0", "10", "1"]);
    assert_eq!(buckets.operators, vec!["=", "=", "<", "=", "+", "=", "+"]);
    assert_eq!(
        buckets.punctuations,
        vec![";", ";", ";", ";", ",", ";", ";"]
    );
    assert_eq!(
        buckets.parenthesis,
        vec!["(", ")", "{", "(", ")", "{", "}", "(", ")", "}"]
    );
    assert_eq!(buckets.string_literals, vec!["\"counter\"", "\"total\""]);
    assert_eq!(buckets.preprocessors, vec!["#include"]);
}

#[test]
fn test_scan_sample_file_report() {
    let buckets = scan_source(PathBuf::from("tests/sample_input.txt")).unwrap();

    let mut out = Vec::new();
    write_report(&mut out, &buckets).unwrap();
    let rendered = String::from_utf8(out).unwrap();

    assert!(rendered.starts_with("Keywords: (5) -> int, int, for, int, return, \n"));
    assert!(rendered.contains("Constants: (4) -> 0, 0, 10, 1, \n"));
    assert!(rendered.ends_with(
        "Parenthesis: (10) -> (, ), {, (, ), {, }, (, ), }, \n"
    ));

    // String literals and preprocessor directives stay out of the report
    assert!(!rendered.contains("counter"));
    assert!(!rendered.contains("#include"));
}

#[test]
fn test_scan_missing_file() {
    let result = scan_source(PathBuf::from("tests/does_not_exist.txt"));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "SourceUnavailable");
}

#[test]
fn test_read_source_lines_keeps_blank_lines() {
    let lines = read_source_lines(PathBuf::from("tests/sample_input.txt")).unwrap();

    assert_eq!(lines[0], "#include \"counter\"");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "// simple counting loop");
}
