//! Integration tests for the lenient classification policy.

use pdftoc::{build_outline, HeadingLevel, LineRecord, OutlineOptions, TextRun};

fn record(text: &str, size: f32, font: &str, page: u32, y: f32) -> LineRecord {
    LineRecord::new(text, vec![TextRun::new(size, font)], page, y)
}

fn bold(text: &str, size: f32, page: u32, y: f32) -> LineRecord {
    record(text, size, "Arial-Bold", page, y)
}

fn plain(text: &str, size: f32, page: u32, y: f32) -> LineRecord {
    record(text, size, "Arial", page, y)
}

fn lenient() -> OutlineOptions {
    OutlineOptions::new().lenient()
}

#[test]
fn title_is_the_first_near_max_size_line() {
    let records = vec![
        plain("Request for Proposal", 20.0, 1, 40.0),
        bold("Background", 12.0, 1, 120.0),
        plain("some body text here", 12.0, 1, 140.0),
    ];
    let outline = build_outline(&records, &lenient());
    assert_eq!(outline.title, "Request for Proposal");
}

#[test]
fn structured_lines_become_first_level_headings() {
    let records = vec![
        plain("Request for Proposal", 20.0, 1, 40.0),
        plain("1 Summary of the technical approach", 12.0, 1, 100.0),
        plain("plain body text follows", 12.0, 1, 120.0),
    ];
    let outline = build_outline(&records, &lenient());
    assert_eq!(outline.outline.len(), 1);
    assert_eq!(outline.outline[0].level, HeadingLevel(1));
    assert_eq!(
        outline.outline[0].text,
        "1 Summary of the technical approach "
    );
}

#[test]
fn short_structured_fragments_are_form_fields() {
    // Four words or fewer with a numeric prefix reads as a form field,
    // not a heading, and never claims the title either
    let records = vec![
        plain("1 Name of applicant", 20.0, 1, 40.0),
        plain("2 Date", 20.0, 1, 80.0),
        bold("Declaration", 12.0, 1, 200.0),
        plain("body text of the form", 12.0, 1, 240.0),
    ];
    let outline = build_outline(&records, &lenient());
    assert!(outline
        .outline
        .iter()
        .all(|e| !e.text.starts_with("1 ") && !e.text.starts_with("2 ")));
    assert_ne!(outline.title, "1 Name of applicant");
}

#[test]
fn bold_lines_are_second_level_headings() {
    let records = vec![
        plain("Request for Proposal", 20.0, 1, 40.0),
        bold("Evaluation Criteria", 12.0, 1, 100.0),
        plain("criteria are described below", 12.0, 1, 120.0),
    ];
    let outline = build_outline(&records, &lenient());
    assert_eq!(outline.outline.len(), 1);
    assert_eq!(outline.outline[0].level, HeadingLevel(2));
    assert_eq!(outline.outline[0].text, "Evaluation Criteria ");
}

#[test]
fn near_title_size_accepted_without_styling() {
    let records = vec![
        plain("Request for Proposal", 20.0, 1, 40.0),
        plain("Appendix listing", 18.5, 2, 100.0),
        plain("ordinary body text", 12.0, 2, 120.0),
    ];
    let outline = build_outline(&records, &lenient());
    assert_eq!(outline.outline.len(), 1);
    assert_eq!(outline.outline[0].text, "Appendix listing ");
    assert_eq!(outline.outline[0].level, HeadingLevel(2));
}

#[test]
fn long_lines_are_rejected() {
    let long = "word ".repeat(26);
    let records = vec![
        plain("Request for Proposal", 20.0, 1, 40.0),
        bold(long.trim(), 12.0, 1, 100.0),
        plain("short body text", 12.0, 1, 120.0),
    ];
    let outline = build_outline(&records, &lenient());
    assert!(outline.outline.is_empty());
}

#[test]
fn single_styled_word_needs_size() {
    let records = vec![
        plain("Request for Proposal", 20.0, 1, 40.0),
        record("Abstract", 13.0, "Arial-Italic", 1, 100.0),
        record("Note", 8.0, "Arial-Italic", 1, 300.0),
        plain("ordinary body text", 12.0, 1, 120.0),
        plain("more ordinary text", 12.0, 1, 140.0),
    ];
    let outline = build_outline(&records, &lenient());
    // 13pt clears 60% of the 20pt max; 8pt does not
    let texts: Vec<&str> = outline.outline.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Abstract "]);
}
