use std::io::{Cursor, Read};

use super::*;

const YEAR: u16 = 2024;

fn acme() -> CopyrightChecker {
    CopyrightChecker::new("Acme").unwrap()
}

fn run(source: &str) -> (i32, String) {
    let mut sink = Vec::new();
    let code = acme().check(Cursor::new(source), "test.c", &mut sink, YEAR);
    (code, String::from_utf8(sink).unwrap())
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn new_rejects_blank_organization() {
    assert!(CopyrightChecker::new("").is_err());
    assert!(CopyrightChecker::new("   ").is_err());
}

#[test]
fn new_keeps_organization_name() {
    assert_eq!(acme().organization(), "Acme");
}

#[test]
fn checker_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CopyrightChecker>();
}

// ============================================================================
// Verdicts
// ============================================================================

#[test]
fn no_copyright_at_all() {
    let (code, diag) = run("int main(void) { return 0; }\n");
    assert_eq!(code, 1);
    assert_eq!(diag, "test.c: no copyright message found\n");
}

#[test]
fn empty_input_is_no_copyright() {
    let (code, diag) = run("");
    assert_eq!(code, 1);
    assert_eq!(diag, "test.c: no copyright message found\n");
}

#[test]
fn placeholder_only_is_no_copyright() {
    let (code, diag) = run("# Copyright [yyyy] [name of copyright owner]\n");
    assert_eq!(code, 1);
    assert_eq!(diag, "test.c: no copyright message found\n");
}

#[test]
fn generic_copyright_without_organization() {
    let (code, diag) = run("/* Copyright 2024 Someone Else */\n");
    assert_eq!(code, 1);
    assert_eq!(diag, "test.c: missing or mistyped Acme copyright\n");
}

#[test]
fn organization_form_for_past_year_only() {
    let (code, diag) = run("Copyright (c) 2014 by Acme. All rights reserved.\n");
    assert_eq!(code, 1);
    assert_eq!(diag, "test.c: no copyright claim for current year found\n");
}

#[test]
fn year_range_ending_in_current_year_passes() {
    let (code, diag) = run("Copyright (c) 2012, 2024 by Acme. All rights reserved.\n");
    assert_eq!(code, 0);
    assert!(diag.is_empty());
}

#[test]
fn single_current_year_passes() {
    let (code, diag) = run("Copyright (c) 2024 by Acme. All rights reserved.");
    assert_eq!(code, 0);
    assert!(diag.is_empty());
}

#[test]
fn range_starting_in_current_year_passes() {
    let (code, _) = run("Copyright (c) 2024, 2031 by Acme. All rights reserved.\n");
    assert_eq!(code, 0);
}

#[test]
fn generic_then_organization_line_passes() {
    let source = "Copyright 1999 Someone\nCopyright (c) 2024 by Acme. All rights reserved.\n";
    let (code, diag) = run(source);
    assert_eq!(code, 0);
    assert!(diag.is_empty());

    let tally = acme().scan(source.lines(), YEAR);
    assert_eq!(tally.copyright_lines, 2);
    assert_eq!(tally.organization_lines, 1);
    assert_eq!(tally.current_year_lines, 1);
    assert_eq!(tally.matched_line, Some(2));
}

#[test]
fn crlf_line_endings_are_accepted() {
    let (code, _) = run("// header\r\n// Copyright (c) 2024 by Acme. All rights reserved.\r\n");
    assert_eq!(code, 0);
}

#[test]
fn classic_mac_line_endings_are_accepted() {
    let (code, diagnostic) =
        run("/* Copyright (c) 2024 by Acme. All rights reserved.\r * more\r */\r");
    assert_eq!(code, 0);
    assert!(diagnostic.is_empty());
}

#[test]
fn lone_carriage_return_separates_lines_for_the_scan() {
    let input = "x\rCopyright 1999 Someone\r\n\
                 Copyright (c) 2024 by Acme. All rights reserved.\rrest";
    let tally = acme().scan(LossyLines::new(Cursor::new(input)), YEAR);
    assert_eq!(tally.lines_scanned, 3);
    assert_eq!(tally.copyright_lines, 2);
    assert_eq!(tally.matched_line, Some(3));
}

#[test]
fn invalid_utf8_does_not_stop_the_scan() {
    let mut source = b"/* \xff\xfe binary junk */\n".to_vec();
    source.extend_from_slice(b" * Copyright (c) 2024 by Acme. All rights reserved.\n");
    let mut sink = Vec::new();
    let code = acme().check(Cursor::new(source), "bin.c", &mut sink, YEAR);
    assert_eq!(code, 0);
    assert!(sink.is_empty());
}

// ============================================================================
// Scan behavior
// ============================================================================

#[test]
fn scan_stops_at_first_full_match() {
    let lines = [
        "// Copyright 2001 Other",
        "// Copyright (c) 2024 by Acme. All rights reserved.",
        "// Copyright 2005 Unvisited",
        "// Copyright (c) 2024 by Acme. All rights reserved.",
    ];
    let tally = acme().scan(lines, YEAR);
    assert_eq!(tally.lines_scanned, 2);
    assert_eq!(tally.copyright_lines, 2);
    assert_eq!(tally.organization_lines, 1);
    assert_eq!(tally.current_year_lines, 1);
}

#[test]
fn scan_visits_everything_without_full_match() {
    let lines = [
        "Copyright (c) 2014 by Acme. All rights reserved.",
        "Copyright 2024 Someone",
        "plain",
    ];
    let tally = acme().scan(lines, YEAR);
    assert_eq!(tally.lines_scanned, 3);
    assert_eq!(tally.copyright_lines, 2);
    assert_eq!(tally.organization_lines, 1);
    assert_eq!(tally.current_year_lines, 0);
    assert_eq!(tally.matched_line, None);
}

#[test]
fn scan_stops_without_consuming_rest_of_reader() {
    let source = "Copyright (c) 2024 by Acme. All rights reserved.\nrest\n";
    let mut cursor = Cursor::new(source.as_bytes());
    let report = acme().inspect(&mut cursor, "x", YEAR);
    assert!(report.outcome.is_passed());
    let mut rest = String::new();
    cursor.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "rest\n");
}

#[test]
fn scan_accepts_owned_lines_with_newlines() {
    let lines = vec!["Copyright (c) 2024 by Acme. All rights reserved.\n".to_string()];
    assert_eq!(acme().evaluate(lines, YEAR), CheckOutcome::Passed);
}

#[test]
fn year_is_matched_against_whole_line() {
    // The year test is not confined to the year list of the claim.
    let checker = CopyrightChecker::new("2024 Labs").unwrap();
    let outcome = checker.evaluate(
        ["Copyright (c) 2014 by 2024 Labs. All rights reserved."],
        YEAR,
    );
    assert_eq!(outcome, CheckOutcome::Passed);
}

#[test]
fn verdict_depends_on_injected_year() {
    let line = ["Copyright (c) 2012, 2024 by Acme. All rights reserved."];
    assert!(acme().evaluate(line, 2024).is_passed());
    assert_eq!(
        acme().evaluate(line, 2025),
        CheckOutcome::Failed(Violation::StaleYear)
    );
}

#[test]
fn repeated_checks_are_identical() {
    let source = "Copyright 1999 Someone\n";
    assert_eq!(run(source), run(source));
}

// ============================================================================
// Paths and labels
// ============================================================================

#[test]
fn check_path_uses_path_as_default_label() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("lib.c");
    std::fs::write(&path, "Copyright 2024 Someone\n").unwrap();

    let mut sink = Vec::new();
    let code = acme().check_path(&path, None, &mut sink, YEAR);
    assert_eq!(code, 1);
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        format!("{}: missing or mistyped Acme copyright\n", path.display())
    );
}

#[test]
fn check_path_explicit_label() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("lib.c");
    std::fs::write(&path, "Copyright (c) 2024 by Acme. All rights reserved.\n").unwrap();

    let mut sink = Vec::new();
    assert_eq!(acme().check_path(&path, Some("usr/src/lib.c"), &mut sink, YEAR), 0);
    assert!(sink.is_empty());
}

#[test]
fn inspect_path_reports_open_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.c");

    let (report, error) = acme().inspect_path(&path, None, YEAR);
    assert_eq!(error.map(|e| e.kind()), Some(std::io::ErrorKind::NotFound));
    assert_eq!(report.label, path.display().to_string());
    assert_eq!(report.outcome, CheckOutcome::Failed(Violation::NoCopyrightFound));
}

#[test]
fn inspect_path_readable_file_has_no_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("lib.c");
    std::fs::write(&path, "Copyright (c) 2024 by Acme. All rights reserved.\n").unwrap();

    let (report, error) = acme().inspect_path(&path, Some("lib.c"), YEAR);
    assert!(error.is_none());
    assert_eq!(report.label, "lib.c");
    assert!(report.outcome.is_passed());
}

#[test]
fn check_path_missing_file_is_no_copyright() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.c");

    let mut sink = Vec::new();
    let code = acme().check_path(&path, Some("absent.c"), &mut sink, YEAR);
    assert_eq!(code, 1);
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "absent.c: no copyright message found\n"
    );
}

#[test]
fn default_organization_is_used_in_messages() {
    let checker = CopyrightChecker::new(DEFAULT_ORGANIZATION).unwrap();
    let mut sink = Vec::new();
    checker.check(Cursor::new("Copyright 2024 X\n"), "f", &mut sink, YEAR);
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "f: missing or mistyped Delphix copyright\n"
    );
}
